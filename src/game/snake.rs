use super::grid::{Cell, Grid};
use super::heading::Heading;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored head first.  The buffer is allocated up front with
/// room for every cell of the grid, so the snake can grow to fill the whole
/// level without reallocating.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, with the head at the front and the
    /// tail at the back
    pub(super) cells: VecDeque<Cell>,

    /// The direction in which the snake is currently moving
    pub(super) heading: Heading,
}

impl Snake {
    /// Create a new snake occupying `cells` (head first) and moving in
    /// `heading`.  `cells` must be non-empty.
    pub(crate) fn new<I: IntoIterator<Item = Cell>>(grid: Grid, cells: I, heading: Heading) -> Snake {
        let mut buf = VecDeque::with_capacity(grid.area());
        buf.extend(cells);
        debug_assert!(!buf.is_empty(), "Snake::new() called with no cells");
        Snake {
            cells: buf,
            heading,
        }
    }

    /// Create the snake that every session starts with
    pub(crate) fn initial(grid: Grid) -> Snake {
        Snake::new(grid, consts::INITIAL_SNAKE, consts::INITIAL_HEADING)
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells.front().copied().unwrap_or(Cell::new(0, 0))
    }

    pub(crate) fn tail(&self) -> Cell {
        self.cells.back().copied().unwrap_or_else(|| self.head())
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the snake's cells from head to tail
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Does any part of the snake, tail included, lie on `cell`?
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Request a change of heading.  A reversal is ignored.
    pub(crate) fn turn(&mut self, candidate: Heading) {
        self.heading = self.heading.turn(candidate);
    }

    /// Return the cell the head will move into on the next step
    pub(crate) fn next_head(&self) -> Cell {
        self.head().step(self.heading)
    }

    /// Move the head to `head`, keeping the tail where it is
    pub(crate) fn grow_to(&mut self, head: Cell) {
        self.cells.push_front(head);
    }

    /// Move the head to `head` and drop the tail, keeping the length fixed
    pub(crate) fn slide_to(&mut self, head: Cell) {
        self.cells.push_front(head);
        let _ = self.cells.pop_back();
    }
}
