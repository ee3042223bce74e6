/// The direction in which the snake's head is moving
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Return the unit vector `(dcol, drow)` for this heading.  Rows increase
    /// downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Return the heading the snake ends up with when `candidate` is
    /// requested while moving in `self`.  A request for an instant 180° turn
    /// is ignored.
    pub(crate) fn turn(self, candidate: Heading) -> Heading {
        if candidate == self.reverse() {
            self
        } else {
            candidate
        }
    }
}
