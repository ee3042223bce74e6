use super::grid::Cell;
use crate::difficulty::Difficulty;
use std::collections::HashSet;

/// The static obstacles of one game session
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct WallSet(HashSet<Cell>);

impl WallSet {
    /// Build the wall layout for `difficulty`.  The same difficulty always
    /// produces the same walls, and harder tiers have more of them.
    pub(crate) fn for_difficulty(difficulty: Difficulty) -> WallSet {
        match difficulty {
            Difficulty::Easy => horizontal(7, 5..10).collect(),
            Difficulty::Normal => horizontal(7, 7..15).chain(vertical(10, 10..15)).collect(),
            Difficulty::Hard => horizontal(7, 7..20)
                .chain(vertical(10, 10..20))
                .chain(horizontal(15, 10..20))
                .collect(),
        }
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Cell> for WallSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> WallSet {
        WallSet(iter.into_iter().collect())
    }
}

fn horizontal(row: i32, cols: std::ops::Range<i32>) -> impl Iterator<Item = Cell> {
    cols.map(move |col| Cell::new(col, row))
}

fn vertical(col: i32, rows: std::ops::Range<i32>) -> impl Iterator<Item = Cell> {
    rows.map(move |row| Cell::new(col, row))
}
