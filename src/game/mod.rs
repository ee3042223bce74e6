mod blink;
mod food;
mod grid;
mod heading;
mod popup;
mod session;
mod snake;
mod walls;
pub(crate) use self::grid::{Cell, Grid};
pub(crate) use self::heading::Heading;
pub(crate) use self::walls::WallSet;
use self::blink::blinking;
use self::popup::{Popup, PopupOpt};
use self::session::{Outcome, Session};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    session: Session,
    state: GameState,
    globals: Globals,

    /// The heading most recently requested by the player since the last tick
    pending: Option<Heading>,

    /// Time spent in play; drives the blink animation
    elapsed: Duration,

    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, mut rng: R) -> Game<R> {
        log::info!("Starting new game on {} difficulty", globals.difficulty);
        let session = Session::new(globals.difficulty, &mut rng);
        Game {
            rng,
            session,
            state: GameState::Running,
            globals,
            pending: None,
            elapsed: Duration::ZERO,
            next_tick: None,
        }
    }

    /// Wait for either the next input event or the next tick, whichever comes
    /// first, and handle it.  `area` is the area of the whole terminal.
    pub(crate) fn process_input(&mut self, area: Rect) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let period = self.tick_period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(&read()?, area))
            }
        } else {
            Ok(self.handle_event(&read()?, area))
        }
    }

    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        self.elapsed += self.tick_period();
        if self.session.step(self.pending.take(), &mut self.rng) == Outcome::Collided {
            log::info!(
                "Game over on {} difficulty with a score of {}",
                self.globals.difficulty,
                self.session.score()
            );
            self.state = GameState::Over(Popup::game_over());
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                if *event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.pending = Some(Heading::North),
                        Command::Left => self.pending = Some(Heading::West),
                        Command::Down => self.pending = Some(Heading::South),
                        Command::Right => self.pending = Some(Heading::East),
                        Command::Esc | Command::P => self.pause(),
                        _ => (),
                    }
                }
            }
            GameState::Paused(ref mut popup) | GameState::Over(ref mut popup) => {
                match popup.handle_event(event, popup_area(area))? {
                    PopupOpt::Resume => {
                        self.state = GameState::Running;
                        self.next_tick = None;
                    }
                    PopupOpt::Restart => {
                        log::info!("Restarting game");
                        return Some(Screen::Game(Game::new(self.globals)));
                    }
                    PopupOpt::MainMenu => return Some(Screen::Main(MainMenu::new(self.globals))),
                    PopupOpt::Quit => return Some(Screen::Quit),
                }
            }
        }
        None
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.globals.difficulty
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Popup::paused());
        self.pending = None;
    }

    fn tick_period(&self) -> Duration {
        self.globals.difficulty.tick_period()
    }

    fn head_symbol(&self) -> char {
        if blinking(self.elapsed) {
            return consts::SNAKE_HEAD_BLINK_SYMBOL;
        }
        match self.session.snake().heading() {
            Heading::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Heading::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Heading::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Heading::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

fn popup_area(area: Rect) -> Rect {
    center_rect(
        get_display_area(area),
        Size {
            width: Popup::WIDTH,
            height: Popup::HEIGHT,
        },
    )
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let board_height = consts::GRID.height.saturating_add(2);
        let [score_area, board_area, hint_area] =
            Layout::vertical([1, board_height, 1]).areas(display);

        Line::styled(
            format!(" Score: {}", self.session.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        Line::styled(
            format!("{} ", self.globals.difficulty),
            consts::SCORE_BAR_STYLE,
        )
        .right_aligned()
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: consts::GRID.width.saturating_add(2),
                height: board_height,
            },
        );
        Block::bordered().render(block_area, buf);

        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for cell in self.session.walls().iter() {
            level.draw_cell(cell, consts::WALL_SYMBOL, consts::WALL_STYLE);
        }
        if let Some(food) = self.session.food() {
            level.draw_cell(food.position, food.tier.symbol(), consts::FOOD_STYLE);
        }
        let snake = self.session.snake();
        for cell in snake.cells().skip(1).take(snake.len().saturating_sub(2)) {
            level.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        level.draw_cell(snake.tail(), consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_TAIL_STYLE);
        // Draw the head last so that nothing is drawn over it
        if self.session.collided() {
            level.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(snake.head(), self.head_symbol(), consts::SNAKE_STYLE);
        }

        match self.state {
            GameState::Running => {
                Line::from_iter([
                    Span::raw(" Pause ("),
                    Span::styled("Esc", consts::KEY_STYLE),
                    Span::raw(")  Quit ("),
                    Span::styled("Ctrl-C", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(hint_area, buf);
            }
            GameState::Paused(popup) | GameState::Over(popup) => {
                let popup_area = popup_area(area);
                Clear.render(popup_area, buf);
                popup.render(popup_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(pos) = cell.to_position() else {
            return;
        };
        if pos.x >= self.area.width || pos.y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Popup),
    /// The snake has collided with something
    Over(Popup),
}
