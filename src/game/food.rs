use super::grid::{Cell, Grid};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::fmt;

/// The value class of a food pellet
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum RewardTier {
    Low,
    Medium,
    High,
}

impl RewardTier {
    /// Map a roll in `[0, 1)` to a tier using the cumulative thresholds in
    /// [`consts::REWARD_TIER_THRESHOLDS`]
    pub(crate) fn from_roll(roll: f64) -> RewardTier {
        let [low, medium] = consts::REWARD_TIER_THRESHOLDS;
        if roll < low {
            RewardTier::Low
        } else if roll < medium {
            RewardTier::Medium
        } else {
            RewardTier::High
        }
    }

    pub(crate) fn random<R: Rng>(rng: &mut R) -> RewardTier {
        RewardTier::from_roll(rng.random::<f64>())
    }

    /// Number of points awarded for eating a pellet of this tier
    pub(crate) fn points(self) -> u32 {
        match self {
            RewardTier::Low => 1,
            RewardTier::Medium => 3,
            RewardTier::High => 5,
        }
    }

    /// Glyph used to draw a pellet of this tier; bigger rewards get bigger
    /// pellets
    pub(crate) fn symbol(self) -> char {
        match self {
            RewardTier::Low => consts::FOOD_LOW_SYMBOL,
            RewardTier::Medium => consts::FOOD_MEDIUM_SYMBOL,
            RewardTier::High => consts::FOOD_HIGH_SYMBOL,
        }
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RewardTier::Low => "low",
            RewardTier::Medium => "medium",
            RewardTier::High => "high",
        };
        f.pad(name)
    }
}

/// A food pellet on the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Cell,
    pub(crate) tier: RewardTier,
}

impl Food {
    /// Place a new pellet on a random cell of `grid` for which `occupied`
    /// returns false, with a randomly-drawn tier.
    ///
    /// Random cells are drawn and rejected until a free one turns up.  After
    /// [`consts::MAX_FOOD_PLACEMENT_ATTEMPTS`] rejections, the free cells are
    /// enumerated and one is chosen from them directly, so this always
    /// terminates.  Returns `None` if every cell is occupied.
    pub(crate) fn place<R, F>(grid: Grid, occupied: F, rng: &mut R) -> Option<Food>
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        let position = Food::sample_position(grid, &occupied, rng).or_else(|| {
            log::debug!(
                "No free cell found after {} draws; choosing from free cells",
                consts::MAX_FOOD_PLACEMENT_ATTEMPTS
            );
            grid.cells().filter(|&c| !occupied(c)).choose(&mut *rng)
        })?;
        let tier = RewardTier::random(rng);
        Some(Food { position, tier })
    }

    fn sample_position<R, F>(grid: Grid, occupied: &F, rng: &mut R) -> Option<Cell>
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        if grid.area() == 0 {
            return None;
        }
        (0..consts::MAX_FOOD_PLACEMENT_ATTEMPTS)
            .map(|_| {
                Cell::new(
                    rng.random_range(0..i32::from(grid.width)),
                    rng.random_range(0..i32::from(grid.height)),
                )
            })
            .find(|&c| !occupied(c))
    }

    pub(crate) fn points(self) -> u32 {
        self.tier.points()
    }
}
