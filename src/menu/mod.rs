mod difficulty;
mod widgets;
pub(crate) use self::difficulty::DifficultyMenu;
use self::widgets::{pointed_button, Button, Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::util::{get_display_area, EnumExt, Globals, Pointer};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    globals: Globals,
    selection: Selection,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        MainMenu {
            globals,
            selection: Selection::default(),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self, area: Rect) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(&read()?, area))
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Option<Screen> {
        if let Some(pointer) = Pointer::from_event(event) {
            let (i, clicked) = pointed_button(pointer, buttons(area))?;
            self.selection = Selection::from_usize(i);
            return clicked.then(|| self.activate());
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::P => return Some(self.play()),
            Command::Enter => return Some(self.activate()),
            Command::Up => self.selection = self.selection.prev().unwrap_or_else(Selection::min),
            Command::Down => self.selection = self.selection.next().unwrap_or_else(Selection::max),
            Command::Next => self.selection = self.selection.next().unwrap_or_else(Selection::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(Selection::max),
            Command::Home => self.selection = Selection::min(),
            Command::End => self.selection = Selection::max(),
            _ => (),
        }
        None
    }

    fn activate(&self) -> Screen {
        match self.selection {
            Selection::Play => self.play(),
            Selection::Quit => Screen::Quit,
        }
    }

    fn play(&self) -> Screen {
        Screen::Difficulty(DifficultyMenu::new(self.globals))
    }
}

fn areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1])
        .flex(Flex::Start)
        .spacing(1)
        .areas(get_display_area(area))
}

/// The menu's buttons paired with the rows they are drawn on
fn buttons(area: Rect) -> impl Iterator<Item = (Button, Rect)> {
    let [_, _, play_area, quit_area] = areas(area);
    Selection::iter()
        .map(Selection::button)
        .zip([play_area, quit_area])
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, instructions_area, ..] = areas(area);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        for (sel, (button, row)) in Selection::iter().zip(buttons(area)) {
            button.render(row, buf, sel == self.selection);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum Selection {
    #[default]
    Play,
    Quit,
}

impl Selection {
    fn button(self) -> Button {
        match self {
            Selection::Play => Button::new("Play", "p"),
            Selection::Quit => Button::new("Quit", "q"),
        }
    }
}
