//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Grid, Heading};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// The size of the playing field
pub(crate) const GRID: Grid = Grid::new(30, 20);

/// The cells occupied by the snake at the start of a game, head first
pub(crate) const INITIAL_SNAKE: [Cell; 3] = [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];

/// The direction the snake moves in at the start of a game
pub(crate) const INITIAL_HEADING: Heading = Heading::East;

/// Cumulative probabilities at which food rolls over from the low reward
/// tier to the medium tier and from the medium tier to the high tier
pub(crate) const REWARD_TIER_THRESHOLDS: [f64; 2] = [0.6, 0.9];

/// Number of random cells to try when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const MAX_FOOD_PLACEMENT_ATTEMPTS: usize = 1000;

/// The snake blinks once per this much time in play
pub(crate) const BLINK_PERIOD: Duration = Duration::from_millis(2000);

/// How long the snake's eyes stay closed in a blink
pub(crate) const BLINK_DURATION: Duration = Duration::from_millis(200);

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the snake's head while it blinks
pub(crate) const SNAKE_HEAD_BLINK_SYMBOL: char = '-';

/// Glyph for the parts of the snake's body between the head and the tail
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the last cell of the snake
pub(crate) const SNAKE_TAIL_SYMBOL: char = '∙';

/// Glyph for low-reward food
pub(crate) const FOOD_LOW_SYMBOL: char = '•';

/// Glyph for medium-reward food
pub(crate) const FOOD_MEDIUM_SYMBOL: char = '●';

/// Glyph for high-reward food
pub(crate) const FOOD_HIGH_SYMBOL: char = '◉';

/// Glyph for walls
pub(crate) const WALL_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with something
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the snake's tail
pub(crate) const SNAKE_TAIL_STYLE: Style = Style::new().fg(Color::Rgb(0, 100, 0));

/// Style for food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for walls
pub(crate) const WALL_STYLE: Style = Style::new().fg(Color::Rgb(139, 69, 19));

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for screen titles
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
