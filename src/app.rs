use crate::game::Game;
use crate::menu::{DifficultyMenu, MainMenu};
use crate::util::Globals;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,

    /// The size of the terminal as of the last draw, used to locate the
    /// widgets that mouse events land on
    area: Rect,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        App {
            screen: Screen::Main(MainMenu::new(globals)),
            area: Rect::default(),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let completed = match self.screen {
            Screen::Main(ref menu) => terminal.draw(|frame| menu.draw(frame))?,
            Screen::Difficulty(ref menu) => terminal.draw(|frame| menu.draw(frame))?,
            Screen::Game(ref game) => terminal.draw(|frame| game.draw(frame))?,
            Screen::Quit => return Ok(()),
        };
        self.area = completed.area;
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input(self.area)?,
            Screen::Difficulty(ref mut menu) => menu.process_input(self.area)?,
            Screen::Game(ref mut game) => game.process_input(self.area)?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// The screen currently shown, which owns all of that screen's state
#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Difficulty(DifficultyMenu),
    Game(Game),
    Quit,
}
