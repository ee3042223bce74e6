use super::heading::Heading;
use ratatui::layout::Position;
use std::fmt;

/// A cell of the playing field, given as a column & row relative to the
/// top-left corner.
///
/// Coordinates are signed so that a snake head which has just left the grid
/// can still be represented (and detected as out of bounds).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) col: i32,
    pub(crate) row: i32,
}

impl Cell {
    pub(crate) const fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }

    /// Return the cell one step away in direction `heading`
    pub(crate) fn step(self, heading: Heading) -> Cell {
        let (dc, dr) = heading.delta();
        Cell {
            col: self.col.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// Convert to a terminal-relative `Position`, or `None` if either
    /// coordinate is negative or too large
    pub(crate) fn to_position(self) -> Option<Position> {
        let x = u16::try_from(self.col).ok()?;
        let y = u16::try_from(self.row).ok()?;
        Some(Position { x, y })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Cell {
        Cell { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The dimensions of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    /// Number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.col)
            && (0..i32::from(self.height)).contains(&cell.row)
    }

    /// Iterate over every cell in the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height))
            .flat_map(move |row| (0..width).map(move |col| Cell { col, row }))
    }
}
