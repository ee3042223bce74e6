use crate::command::Command;
use crate::consts;
use crate::util::Pointer;
use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying a menu pop-up over the game board, either when the
/// game is paused or when it is over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Popup {
    kind: PopupKind,

    /// Index into `kind.options()` of the currently-selected item
    selection: usize,
}

impl Popup {
    /// The width that should be used for the `Rect` passed to
    /// `Popup::render()`
    pub(super) const WIDTH: u16 = 20;

    /// The height that should be used for the `Rect` passed to
    /// `Popup::render()`
    pub(super) const HEIGHT: u16 = 6;

    pub(super) fn paused() -> Popup {
        Popup {
            kind: PopupKind::Paused,
            selection: 0,
        }
    }

    pub(super) fn game_over() -> Popup {
        Popup {
            kind: PopupKind::GameOver,
            selection: 0,
        }
    }

    fn options(self) -> &'static [PopupOpt] {
        self.kind.options()
    }

    fn selected(self) -> PopupOpt {
        self.options()
            .get(self.selection)
            .copied()
            .unwrap_or(PopupOpt::Quit)
    }

    /// Handle an input event.  `area` is where the popup is drawn.  Returns
    /// `Some` if the user made a choice.
    pub(super) fn handle_event(&mut self, event: &Event, area: Rect) -> Option<PopupOpt> {
        if let Some(pointer) = Pointer::from_event(event) {
            return self.handle_pointer(pointer, area);
        }
        let last = self.options().len().saturating_sub(1);
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Esc if self.kind == PopupKind::Paused => return Some(PopupOpt::Resume),
            Command::R => return Some(PopupOpt::Restart),
            Command::M => return Some(PopupOpt::MainMenu),
            Command::Q | Command::Quit => return Some(PopupOpt::Quit),
            Command::Enter => return Some(self.selected()),
            Command::Up => self.selection = self.selection.saturating_sub(1),
            Command::Down => self.selection = (self.selection + 1).min(last),
            Command::Next => {
                self.selection = if self.selection >= last {
                    0
                } else {
                    self.selection + 1
                };
            }
            Command::Prev => {
                self.selection = self.selection.checked_sub(1).unwrap_or(last);
            }
            Command::Home => self.selection = 0,
            Command::End => self.selection = last,
            _ => (),
        }
        None
    }

    fn handle_pointer(&mut self, pointer: Pointer, area: Rect) -> Option<PopupOpt> {
        let (pos, clicked) = match pointer {
            Pointer::Hover(pos) => (pos, false),
            Pointer::Click(pos) => (pos, true),
        };
        let i = self
            .kind
            .block()
            .inner(area)
            .rows()
            .take(self.options().len())
            .position(|row| row.contains(pos))?;
        self.selection = i;
        clicked.then(|| self.selected())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PopupKind {
    Paused,
    GameOver,
}

impl PopupKind {
    fn options(self) -> &'static [PopupOpt] {
        match self {
            PopupKind::Paused => &[
                PopupOpt::Resume,
                PopupOpt::Restart,
                PopupOpt::MainMenu,
                PopupOpt::Quit,
            ],
            PopupKind::GameOver => &[PopupOpt::Restart, PopupOpt::MainMenu, PopupOpt::Quit],
        }
    }

    fn block(self) -> Block<'static> {
        let title = match self {
            PopupKind::Paused => " PAUSED ",
            PopupKind::GameOver => " GAME OVER! ",
        };
        Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset())
    }
}

/// The choices in the popup menus
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum PopupOpt {
    /// Unpause/resume the game
    Resume,

    /// Start a new game at the same difficulty
    Restart,

    /// Return to the main menu
    MainMenu,

    /// Quit the application
    Quit,
}

impl PopupOpt {
    /// Render the option as a `Line` for display in a popup.  If `selected`
    /// is `true`, this option is the currently-selected/active one.
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        let (label, key) = match self {
            PopupOpt::Resume => ("Resume (", "Esc"),
            PopupOpt::Restart => ("Restart (", "r"),
            PopupOpt::MainMenu => ("Main Menu (", "m"),
            PopupOpt::Quit => ("Quit (", "q"),
        };
        line.push_span(label);
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for Popup {
    /*
     * ┌───── PAUSED ─────┐     ┌─── GAME OVER! ───┐
     * │ » Resume (Esc)   │     │ » Restart (r)    │
     * │   Restart (r)    │     │   Main Menu (m)  │
     * │   Main Menu (m)  │     │   Quit (q)       │
     * │   Quit (q)       │     │                  │
     * └──────────────────┘     └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.kind.block();
        let inner = block.inner(area);
        block.render(area, buf);
        for ((i, &opt), row) in self.options().iter().enumerate().zip(inner.rows()) {
            opt.to_line(self.selection == i).render(row, buf);
        }
    }
}
