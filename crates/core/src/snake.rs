//! Snake module - grid-movement game state
//!
//! A single actor moves one cell per tick on a 20x20 grid. Eating food grows
//! it by one segment, scores [`SNAKE_FOOD_REWARD`] and shortens the tick
//! interval down to [`SNAKE_MIN_TICK_MS`]. Leaving the grid or running into
//! any of its own segments ends the game.

use std::collections::VecDeque;

use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::snake_tick_after_food;
use crate::snapshot::SnakeSnapshot;
use crate::types::{
    Direction, RunState, SnakeEvent, SnakeIntent, SNAKE_FOOD_REWARD, SNAKE_GRID_SIZE,
    SNAKE_INITIAL_TICK_MS, SNAKE_START,
};

/// Random placement attempts before falling back to a scan of the grid
const MAX_FOOD_ATTEMPTS: usize = (SNAKE_GRID_SIZE as usize) * (SNAKE_GRID_SIZE as usize) * 4;

/// A cell on the snake grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside `[0, SNAKE_GRID_SIZE)` on both axes
    pub fn in_bounds(&self) -> bool {
        (0..SNAKE_GRID_SIZE).contains(&self.x) && (0..SNAKE_GRID_SIZE).contains(&self.y)
    }

    /// The neighbouring cell in `direction` (may be out of bounds)
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame<R = SimpleRng> {
    /// Head first. Never contains duplicates.
    actor: VecDeque<Position>,
    /// Direction applied by the most recent tick.
    heading: Direction,
    /// Direction the next tick will apply.
    pending: Direction,
    food: Option<Position>,
    score: u32,
    high_score: u32,
    tick_ms: u32,
    state: RunState,
    ticks: u64,
    last_event: Option<SnakeEvent>,
    rng: R,
}

impl SnakeGame<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> SnakeGame<R> {
    /// Create a new game drawing food positions from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            actor: VecDeque::new(),
            heading: Direction::Right,
            pending: Direction::Right,
            food: None,
            score: 0,
            high_score: 0,
            tick_ms: SNAKE_INITIAL_TICK_MS,
            state: RunState::Running,
            ticks: 0,
            last_event: None,
            rng,
        };
        game.reset();
        game
    }

    /// Create a game from an explicit layout.
    ///
    /// `actor` is head first and must be non-empty, in bounds and free of
    /// duplicates. Score and timing start from their initial values.
    ///
    /// # Panics
    ///
    /// Panics if `actor` is empty.
    pub fn from_layout(
        actor: impl IntoIterator<Item = Position>,
        heading: Direction,
        food: Option<Position>,
        rng: R,
    ) -> Self {
        let actor: VecDeque<Position> = actor.into_iter().collect();
        assert!(!actor.is_empty(), "snake needs at least a head");
        debug_assert!(actor.iter().all(Position::in_bounds));
        Self {
            actor,
            heading,
            pending: heading,
            food,
            score: 0,
            high_score: 0,
            tick_ms: SNAKE_INITIAL_TICK_MS,
            state: RunState::Running,
            ticks: 0,
            last_event: None,
            rng,
        }
    }

    /// Return every entity to its initial value. High score is kept.
    pub fn reset(&mut self) {
        self.actor.clear();
        self.actor
            .push_back(Position::new(SNAKE_START.0, SNAKE_START.1));
        self.heading = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.tick_ms = SNAKE_INITIAL_TICK_MS;
        self.state = RunState::Running;
        self.ticks = 0;
        self.last_event = None;
        self.food = self.spawn_food();
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    pub fn actor(&self) -> &VecDeque<Position> {
        &self.actor
    }

    pub fn head(&self) -> Position {
        self.actor[0]
    }

    pub fn len(&self) -> usize {
        self.actor.len()
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction the next tick will move in
    pub fn direction(&self) -> Direction {
        self.pending
    }

    /// Direction applied by the last tick
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current movement interval in milliseconds
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Number of ticks simulated since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take and clear the last tick event.
    pub fn take_last_event(&mut self) -> Option<SnakeEvent> {
        self.last_event.take()
    }

    /// Apply a player intent. Returns whether anything observable changed.
    pub fn apply(&mut self, intent: SnakeIntent) -> bool {
        match (intent, self.state) {
            (SnakeIntent::Reset, _) => {
                self.reset();
                true
            }
            (SnakeIntent::TogglePause, RunState::Running | RunState::Paused) => {
                self.toggle_pause()
            }
            (SnakeIntent::Turn(direction), RunState::Running) => self.turn(direction),
            _ => false,
        }
    }

    /// Buffer a new direction for the next tick.
    ///
    /// Rejected when it is the exact opposite of the heading the actor last
    /// moved in. Between two ticks the last accepted turn wins.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.state != RunState::Running || direction == self.heading.opposite() {
            return false;
        }
        let changed = self.pending != direction;
        self.pending = direction;
        changed
    }

    /// Flip between Running and Paused; no-op after game over
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::GameOver => return false,
        };
        true
    }

    /// Advance the simulation by one step.
    ///
    /// Returns false when the game is not running. On collision the actor is
    /// left exactly as it was before the tick.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.ticks += 1;
        self.heading = self.pending;

        let next = self.head().step(self.heading);
        if !next.in_bounds() || self.actor.contains(&next) {
            self.state = RunState::GameOver;
            self.last_event = Some(SnakeEvent::Collided {
                score: self.score,
                length: self.actor.len() as u32,
            });
            return true;
        }

        self.actor.push_front(next);

        if self.food == Some(next) {
            self.score += SNAKE_FOOD_REWARD;
            self.high_score = self.high_score.max(self.score);
            self.food = self.spawn_food();
            self.tick_ms = snake_tick_after_food(self.tick_ms);
            self.last_event = Some(SnakeEvent::AteFood {
                score: self.score,
                length: self.actor.len() as u32,
                tick_ms: self.tick_ms,
            });
        } else {
            self.actor.pop_back();
        }

        true
    }

    /// Pick a uniformly random cell not covered by the actor.
    ///
    /// Sampling is bounded; after [`MAX_FOOD_ATTEMPTS`] misses the first free
    /// cell in row-major order is used. Returns `None` only if the grid is full.
    fn spawn_food(&mut self) -> Option<Position> {
        let size = SNAKE_GRID_SIZE as u32;
        for _ in 0..MAX_FOOD_ATTEMPTS {
            let x = self.rng.next_below(size) as i16;
            let y = self.rng.next_below(size) as i16;
            let candidate = Position::new(x, y);
            if !self.actor.contains(&candidate) {
                return Some(candidate);
            }
        }

        let actor = &self.actor;
        (0..SNAKE_GRID_SIZE)
            .flat_map(|y| (0..SNAKE_GRID_SIZE).map(move |x| Position::new(x, y)))
            .find(|p| !actor.contains(p))
    }

    pub fn snapshot_into(&self, out: &mut SnakeSnapshot) {
        out.actor.clear();
        out.actor.extend(self.actor.iter().copied());
        out.food = self.food;
        out.direction = self.pending;
        out.score = self.score;
        out.high_score = self.high_score;
        out.tick_ms = self.tick_ms;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        let mut s = SnakeSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for SnakeGame<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
