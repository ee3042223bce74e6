use super::food::Food;
use super::grid::{Cell, Grid};
use super::heading::Heading;
use super::snake::Snake;
use super::walls::WallSet;
use crate::consts;
use crate::difficulty::Difficulty;
use rand::Rng;

/// Whether a session is still in play
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Running,
    /// The snake ran into itself, a wall, or the edge of the grid.  This is
    /// terminal; the session does not change afterwards.
    Collided,
}

/// All gameplay state for one game, from the moment a difficulty is chosen
/// until the snake collides
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    pub(super) grid: Grid,
    pub(super) snake: Snake,
    pub(super) walls: WallSet,
    /// `None` only if there was no free cell to place food on
    pub(super) food: Option<Food>,
    pub(super) score: u32,
    pub(super) outcome: Outcome,
}

impl Session {
    /// Start a new session at `difficulty`: the initial snake, a score of
    /// zero, the difficulty's walls, and freshly-placed food
    pub(crate) fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Session {
        Session::with_walls(
            consts::GRID,
            Snake::initial(consts::GRID),
            WallSet::for_difficulty(difficulty),
            rng,
        )
    }

    pub(crate) fn with_walls<R: Rng>(
        grid: Grid,
        snake: Snake,
        walls: WallSet,
        rng: &mut R,
    ) -> Session {
        let mut session = Session {
            grid,
            snake,
            walls,
            food: None,
            score: 0,
            outcome: Outcome::Running,
        };
        session.food = session.place_food(rng);
        session
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub(crate) fn food(&self) -> Option<Food> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn collided(&self) -> bool {
        self.outcome == Outcome::Collided
    }

    /// Advance the game by one tick.
    ///
    /// `candidate` is the heading requested by the player since the last
    /// tick, if any.  It is adopted unless it would reverse the snake.
    ///
    /// The new head is checked against the whole snake as it stands before
    /// moving, tail included, so moving into the cell the tail is about to
    /// leave counts as a collision.  On collision nothing else changes.
    pub(crate) fn step<R: Rng>(&mut self, candidate: Option<Heading>, rng: &mut R) -> Outcome {
        if self.collided() {
            return Outcome::Collided;
        }
        if let Some(heading) = candidate {
            self.snake.turn(heading);
        }
        let head = self.snake.next_head();
        if self.hits_obstacle(head) {
            log::debug!("Snake collided at {head}");
            self.outcome = Outcome::Collided;
            return self.outcome;
        }
        match self.food.filter(|f| f.position == head) {
            Some(food) => {
                self.snake.grow_to(head);
                self.score += food.points();
                self.food = self.place_food(rng);
            }
            None => self.snake.slide_to(head),
        }
        self.outcome
    }

    fn hits_obstacle(&self, cell: Cell) -> bool {
        !self.grid.contains(cell) || self.walls.contains(cell) || self.snake.occupies(cell)
    }

    fn place_food<R: Rng>(&self, rng: &mut R) -> Option<Food> {
        let food = Food::place(
            self.grid,
            |c| self.snake.occupies(c) || self.walls.contains(c),
            rng,
        );
        match food {
            Some(f) => log::trace!("Placed {} food at {}", f.tier, f.position),
            None => log::info!("No free cell left for food"),
        }
        food
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::RewardTier;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    fn cells(cs: &[(i32, i32)]) -> Vec<Cell> {
        cs.iter().copied().map(Cell::from).collect()
    }

    fn session(snake: &[(i32, i32)], heading: Heading, walls: &[(i32, i32)]) -> Session {
        Session::with_walls(
            consts::GRID,
            Snake::new(consts::GRID, cells(snake), heading),
            WallSet::from_iter(cells(walls)),
            &mut rng(),
        )
    }

    fn food_at(col: i32, row: i32, tier: RewardTier) -> Option<Food> {
        Some(Food {
            position: Cell::new(col, row),
            tier,
        })
    }

    fn snake_cells(s: &Session) -> Vec<Cell> {
        s.snake().cells().collect()
    }

    #[test]
    fn new_session() {
        let s = Session::new(Difficulty::Easy, &mut rng());
        assert_eq!(snake_cells(&s), cells(&[(5, 5), (4, 5), (3, 5)]));
        assert_eq!(s.snake().heading(), Heading::East);
        assert_eq!(s.score(), 0);
        assert!(!s.collided());
        assert_eq!(s.walls(), &WallSet::for_difficulty(Difficulty::Easy));
        let food = s.food().unwrap();
        assert!(!s.snake().occupies(food.position));
        assert!(!s.walls().contains(food.position));
    }

    #[test]
    fn plain_move() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[]);
        s.food = food_at(20, 10, RewardTier::Low);
        assert_eq!(s.step(None, &mut rng()), Outcome::Running);
        assert_eq!(snake_cells(&s), cells(&[(6, 5), (5, 5), (4, 5)]));
        assert_eq!(s.score(), 0);
        assert_eq!(s.food, food_at(20, 10, RewardTier::Low));
    }

    #[test]
    fn eat_low() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[]);
        s.food = food_at(6, 5, RewardTier::Low);
        assert_eq!(s.step(None, &mut rng()), Outcome::Running);
        assert_eq!(snake_cells(&s), cells(&[(6, 5), (5, 5), (4, 5), (3, 5)]));
        assert_eq!(s.score(), 1);
        let food = s.food().unwrap();
        assert!(!s.snake().occupies(food.position));
    }

    #[rstest]
    #[case(RewardTier::Low, 1)]
    #[case(RewardTier::Medium, 3)]
    #[case(RewardTier::High, 5)]
    fn eating_adds_reward(#[case] tier: RewardTier, #[case] points: u32) {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::South, &[]);
        s.score = 10;
        s.food = food_at(5, 6, tier);
        assert_eq!(s.step(None, &mut rng()), Outcome::Running);
        assert_eq!(s.score(), 10 + points);
        assert_eq!(s.snake().len(), 4);
    }

    #[test]
    fn out_of_bounds_left() {
        let mut s = session(&[(0, 5), (1, 5), (2, 5)], Heading::West, &[]);
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
        assert!(s.collided());
        assert_eq!(snake_cells(&s), cells(&[(0, 5), (1, 5), (2, 5)]));
    }

    #[rstest]
    #[case(&[(29, 3), (28, 3), (27, 3)], Heading::East)]
    #[case(&[(4, 0), (4, 1), (4, 2)], Heading::North)]
    #[case(&[(4, 19), (4, 18), (4, 17)], Heading::South)]
    fn out_of_bounds(#[case] snake: &[(i32, i32)], #[case] heading: Heading) {
        let mut s = session(snake, heading, &[]);
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
    }

    #[test]
    fn wall_collision() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[(6, 5)]);
        let score = s.score();
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
        assert_eq!(snake_cells(&s), cells(&[(5, 5), (4, 5), (3, 5)]));
        assert_eq!(s.score(), score);
    }

    #[test]
    fn wall_collision_beats_food() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[(6, 5)]);
        s.food = food_at(6, 5, RewardTier::High);
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
        assert_eq!(s.score(), 0);
        assert_eq!(s.snake().len(), 3);
    }

    #[test]
    fn self_collision() {
        // A hook shape whose head turns back into its own body
        let mut s = session(
            &[(5, 5), (5, 6), (6, 6), (7, 6), (7, 5), (7, 4)],
            Heading::North,
            &[],
        );
        assert_eq!(s.step(Some(Heading::East), &mut rng()), Outcome::Running);
        assert_eq!(s.snake().head(), Cell::new(6, 5));
        assert_eq!(s.step(Some(Heading::South), &mut rng()), Outcome::Collided);
    }

    #[test]
    fn moving_into_tail_collides() {
        // Square loop: the head's next cell is the tail's current cell
        let mut s = session(&[(5, 5), (5, 6), (6, 6), (6, 5)], Heading::East, &[]);
        s.food = food_at(20, 10, RewardTier::Low);
        assert_eq!(s.snake().next_head(), s.snake().tail());
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
        assert_eq!(s.snake().len(), 4);
    }

    #[test]
    fn reversal_ignored() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[]);
        s.food = food_at(20, 10, RewardTier::Low);
        assert_eq!(s.step(Some(Heading::West), &mut rng()), Outcome::Running);
        assert_eq!(s.snake().heading(), Heading::East);
        assert_eq!(s.snake().head(), Cell::new(6, 5));
    }

    #[test]
    fn perpendicular_turn() {
        let mut s = session(&[(5, 5), (4, 5), (3, 5)], Heading::East, &[]);
        s.food = food_at(20, 10, RewardTier::Low);
        assert_eq!(s.step(Some(Heading::North), &mut rng()), Outcome::Running);
        assert_eq!(s.snake().heading(), Heading::North);
        assert_eq!(snake_cells(&s), cells(&[(5, 4), (5, 5), (4, 5)]));
    }

    #[test]
    fn collided_is_terminal() {
        let mut s = session(&[(0, 5), (1, 5), (2, 5)], Heading::West, &[]);
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
        let before = s.clone();
        assert_eq!(s.step(Some(Heading::North), &mut rng()), Outcome::Collided);
        assert_eq!(s, before);
    }

    #[test]
    fn long_run_invariants() {
        let mut r = rng();
        let mut s = Session::new(Difficulty::Hard, &mut r);
        let turns = [Heading::South, Heading::East, Heading::North, Heading::East];
        for i in 0..500 {
            let len = s.snake().len();
            let score = s.score();
            let food = s.food();
            let candidate = (i % 5 == 0).then(|| turns[(i / 5) % turns.len()]);
            if s.step(candidate, &mut r) == Outcome::Collided {
                assert_eq!(s.snake().len(), len);
                break;
            }
            let ate = food.is_some_and(|f| f.position == s.snake().head());
            if ate {
                assert_eq!(s.snake().len(), len + 1);
                assert_eq!(s.score(), score + food.map_or(0, Food::points));
            } else {
                assert_eq!(s.snake().len(), len);
                assert_eq!(s.score(), score);
            }
            if let Some(f) = s.food() {
                assert!(!s.snake().occupies(f.position));
                assert!(!s.walls().contains(f.position));
            }
        }
    }

    #[test]
    fn full_grid_leaves_no_food() {
        let grid = Grid::new(3, 1);
        let snake = Snake::new(grid, cells(&[(1, 0), (0, 0)]), Heading::East);
        let mut s = Session::with_walls(grid, snake, WallSet::default(), &mut rng());
        assert_eq!(s.food().map(|f| f.position), Some(Cell::new(2, 0)));
        assert_eq!(s.step(None, &mut rng()), Outcome::Running);
        assert_eq!(s.snake().len(), 3);
        assert_eq!(s.food(), None);
        assert_eq!(s.step(None, &mut rng()), Outcome::Collided);
    }
}
