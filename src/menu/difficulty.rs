use super::widgets::{pointed_button, Button, Logo};
use super::MainMenu;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::game::{Game, WallSet};
use crate::util::{get_display_area, EnumExt, Globals, Pointer};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::Line,
    widgets::Widget,
    Frame,
};

/// The screen for choosing a difficulty tier before starting a game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DifficultyMenu {
    globals: Globals,

    /// Index into `DifficultyMenu::ITEMS`
    selection: usize,
}

impl DifficultyMenu {
    const ITEMS: [Item; 4] = [
        Item::Tier(Difficulty::Easy),
        Item::Tier(Difficulty::Normal),
        Item::Tier(Difficulty::Hard),
        Item::Back,
    ];

    /// Create the menu with the most recently chosen difficulty (or the
    /// configured default) selected
    pub(crate) fn new(globals: Globals) -> Self {
        let selection = Self::ITEMS
            .iter()
            .position(|&it| it == Item::Tier(globals.difficulty))
            .unwrap_or_default();
        DifficultyMenu { globals, selection }
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
            self.selection = i;
            return clicked.then(|| self.activate());
        }
        let last = Self::ITEMS.len() - 1;
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Esc => return Some(self.back()),
            Command::Digit(c) => {
                let difficulty = Difficulty::iter().find(|d| d.hotkey() == c)?;
                return Some(self.start(difficulty));
            }
            Command::Enter => return Some(self.activate()),
            Command::Up => self.selection = self.selection.saturating_sub(1),
            Command::Down => self.selection = (self.selection + 1).min(last),
            Command::Next => {
                self.selection = if self.selection >= last {
                    0
                } else {
                    self.selection + 1
                };
            }
            Command::Prev => self.selection = self.selection.checked_sub(1).unwrap_or(last),
            Command::Home => self.selection = 0,
            Command::End => self.selection = last,
            _ => (),
        }
        None
    }

    fn selected(&self) -> Item {
        Self::ITEMS
            .get(self.selection)
            .copied()
            .unwrap_or(Item::Back)
    }

    fn activate(&mut self) -> Screen {
        match self.selected() {
            Item::Tier(difficulty) => self.start(difficulty),
            Item::Back => self.back(),
        }
    }

    fn start(&mut self, difficulty: Difficulty) -> Screen {
        log::info!("Difficulty chosen: {difficulty}");
        self.globals.difficulty = difficulty;
        Screen::Game(Game::new(self.globals))
    }

    fn back(&self) -> Screen {
        Screen::Main(MainMenu::new(self.globals))
    }
}

fn areas(area: Rect) -> [Rect; 7] {
    Layout::vertical([Logo::HEIGHT, 1, 1, 1, 1, 1, 1])
        .flex(Flex::Start)
        .spacing(1)
        .areas(get_display_area(area))
}

fn buttons(area: Rect) -> impl Iterator<Item = (Button, Rect)> {
    let [_, _, easy, normal, hard, back, _] = areas(area);
    DifficultyMenu::ITEMS
        .into_iter()
        .map(Item::button)
        .zip([easy, normal, hard, back])
}

impl Widget for &DifficultyMenu {
    /*
     *              [logo]
     *
     *         Choose Difficulty
     *
     *            [Easy (1)]
     *
     *           [Normal (2)]
     *
     *            [Hard (3)]
     *
     *           [Back (Esc)]
     *
     * 12 moves per second, 13 wall cells
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, title_area, .., description_area] = areas(area);
        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);
        Line::styled("Choose Difficulty", consts::TITLE_STYLE)
            .centered()
            .render(title_area, buf);
        for (i, (button, row)) in buttons(area).enumerate() {
            button.render(row, buf, i == self.selection);
        }
        if let Item::Tier(difficulty) = self.selected() {
            Line::raw(format!(
                "{} moves per second, {} wall cells",
                difficulty.tick_rate(),
                WallSet::for_difficulty(difficulty).len()
            ))
            .centered()
            .render(description_area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Item {
    Tier(Difficulty),
    Back,
}

impl Item {
    fn button(self) -> Button {
        match self {
            Item::Tier(Difficulty::Easy) => Button::new("Easy", "1"),
            Item::Tier(Difficulty::Normal) => Button::new("Normal", "2"),
            Item::Tier(Difficulty::Hard) => Button::new("Hard", "3"),
            Item::Back => Button::new("Back", "Esc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    const AREA: Rect = Rect::new(0, 0, 80, 24);

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn started(screen: Option<Screen>) -> Option<Difficulty> {
        match screen {
            Some(Screen::Game(game)) => Some(game.difficulty()),
            _ => None,
        }
    }

    #[test]
    fn draw_initial() {
        let menu = DifficultyMenu::new(Globals::default());
        let mut buffer = Buffer::empty(AREA);
        menu.render(AREA, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                           ____              _                                  ",
            "                          / ___| _ __   __ _| | _____                           ",
            r"                          \___ \| '_ \ / _` | |/ / _ \                          ",
            "                           ___) | | | | (_| |   <  __/                          ",
            r"                          |____/|_| |_|\__,_|_|\_\___|                          ",
            "                                                                                ",
            "                                ∙⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬⚬<  ◉                                ",
            "                                                                                ",
            "                               Choose Difficulty                                ",
            "                                                                                ",
            "                                   [Easy (1)]                                   ",
            "                                                                                ",
            "                                  [Normal (2)]                                  ",
            "                                                                                ",
            "                                   [Hard (3)]                                   ",
            "                                                                                ",
            "                                  [Back (Esc)]                                  ",
            "                                                                                ",
            "                       12 moves per second, 13 wall cells                       ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(26, 0, 28, 5), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(32, 6, 1, 1), consts::SNAKE_TAIL_STYLE);
        expected.set_style(Rect::new(33, 6, 12, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(47, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(0, 8, 80, 1), consts::TITLE_STYLE);
        expected.set_style(Rect::new(42, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(34, 12, 12, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(43, 12, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 14, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(41, 16, 3, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn initial_selection_follows_globals() {
        let menu = DifficultyMenu::new(Globals {
            difficulty: Difficulty::Hard,
        });
        assert_eq!(menu.selected(), Item::Tier(Difficulty::Hard));
    }

    #[test]
    fn hotkeys() {
        let mut menu = DifficultyMenu::new(Globals::default());
        assert_eq!(
            started(menu.handle_event(&key(KeyCode::Char('1')), AREA)),
            Some(Difficulty::Easy)
        );
        assert_eq!(
            started(menu.handle_event(&key(KeyCode::Char('3')), AREA)),
            Some(Difficulty::Hard)
        );
        assert!(menu.handle_event(&key(KeyCode::Char('4')), AREA).is_none());
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Esc), AREA),
            Some(Screen::Main(_))
        ));
    }

    #[test]
    fn keyboard() {
        let mut menu = DifficultyMenu::new(Globals::default());
        assert!(menu.handle_event(&key(KeyCode::Up), AREA).is_none());
        assert!(menu.handle_event(&key(KeyCode::Up), AREA).is_none());
        assert_eq!(menu.selected(), Item::Tier(Difficulty::Easy));
        assert!(menu.handle_event(&key(KeyCode::BackTab), AREA).is_none());
        assert_eq!(menu.selected(), Item::Back);
        assert!(menu.handle_event(&key(KeyCode::Tab), AREA).is_none());
        assert_eq!(menu.selected(), Item::Tier(Difficulty::Easy));
        assert!(menu.handle_event(&key(KeyCode::End), AREA).is_none());
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Enter), AREA),
            Some(Screen::Main(_))
        ));
        assert!(menu.handle_event(&key(KeyCode::Up), AREA).is_none());
        assert_eq!(
            started(menu.handle_event(&key(KeyCode::Enter), AREA)),
            Some(Difficulty::Hard)
        );
    }

    #[test]
    fn mouse() {
        let mut menu = DifficultyMenu::new(Globals::default());
        assert_eq!(started(menu.handle_event(&click(36, 10), AREA)), Some(Difficulty::Easy));
        assert!(menu.handle_event(&click(36, 11), AREA).is_none());
        assert!(menu.handle_event(&click(34, 14), AREA).is_none());
        assert!(matches!(
            menu.handle_event(&click(45, 16), AREA),
            Some(Screen::Main(_))
        ));
    }
}
