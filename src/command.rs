use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keypress that means something to one of the program's screens
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Home,
    End,
    Next,
    Prev,
    M,
    P,
    Q,
    R,
    /// One of the number keys `1` through `9`
    Digit(char),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Up),
                KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Down),
                KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Left),
                KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Command::Right),
                KeyCode::Enter => Some(Command::Enter),
                KeyCode::Esc => Some(Command::Esc),
                KeyCode::Home => Some(Command::Home),
                KeyCode::End => Some(Command::End),
                KeyCode::Tab => Some(Command::Next),
                KeyCode::BackTab => Some(Command::Prev),
                KeyCode::Char('m') => Some(Command::M),
                KeyCode::Char('p') => Some(Command::P),
                KeyCode::Char('q') => Some(Command::Q),
                KeyCode::Char('r') => Some(Command::R),
                KeyCode::Char(c @ '1'..='9') => Some(Command::Digit(c)),
                _ => None,
            },
            _ => None,
        }
    }
}
