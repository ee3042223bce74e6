use crate::consts;
use crate::difficulty::Difficulty;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Position, Rect, Size};

/// Settings that persist across screens for the life of the program
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) difficulty: Difficulty,
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`, shrunk to fit
/// if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Helpers for stepping through the variants of a fieldless enum, e.g., for
/// moving a selection through a menu
pub(crate) trait EnumExt: Enum {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH.saturating_sub(1))
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize().checked_add(1)?;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// A mouse interaction relevant to clickable buttons
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Pointer {
    /// The mouse moved over the given position
    Hover(Position),
    /// The left mouse button was pressed at the given position
    Click(Position),
}

impl Pointer {
    pub(crate) fn from_event(event: &Event) -> Option<Pointer> {
        let Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) = *event
        else {
            return None;
        };
        let pos = Position::new(column, row);
        match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Pointer::Click(pos)),
            MouseEventKind::Moved => Some(Pointer::Hover(pos)),
            _ => None,
        }
    }
}
