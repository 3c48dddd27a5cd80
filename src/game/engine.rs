use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionKind, GameState, GameStatus, Snake, Tile},
};
use rand::seq::IteratorRandom;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the game, if any
    pub collision: Option<CollisionKind>,
}

impl TickOutcome {
    fn quiet() -> Self {
        Self {
            ate_food: false,
            collision: None,
        }
    }

    fn collided(kind: CollisionKind) -> Self {
        Self {
            ate_food: false,
            collision: Some(kind),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build a fresh starting state: a length-1 snake in the center of the
    /// grid with no heading, score 0, and food on some free tile.
    pub fn reset(&mut self) -> GameState {
        let center = self.config.tile_count() / 2;
        let snake = Snake::new(Tile::new(center, center));

        let mut state = GameState::new(snake, Tile::new(0, 0), self.config.tile_count());
        match self.spawn_food(&state.snake) {
            Some(food) => state.food = food,
            // Degenerate 1x1 grid: nowhere to put food, nothing to play.
            None => state.status = GameStatus::Over,
        }
        state
    }

    /// Advance the game by one tick
    ///
    /// Check order is load-bearing: wall, then self-collision against the
    /// whole body (the tail tile that is about to vacate counts, and so does
    /// the head itself when the heading is still unset), then growth, then
    /// the food check. Does nothing once the game is over.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.status != GameStatus::Running {
            return TickOutcome::quiet();
        }

        let candidate = state.snake.advance();

        if !state.is_in_bounds(candidate) {
            state.status = GameStatus::Over;
            return TickOutcome::collided(CollisionKind::Wall);
        }

        if state.snake.occupies(candidate) {
            state.status = GameStatus::Over;
            return TickOutcome::collided(CollisionKind::SelfHit);
        }

        state.snake.grow(candidate);

        if candidate == state.food {
            state.score += self.config.food_reward;
            match self.spawn_food(&state.snake) {
                Some(food) => state.food = food,
                // Board saturated: the snake covers every tile.
                None => state.status = GameStatus::Over,
            }
            TickOutcome {
                ate_food: true,
                collision: None,
            }
        } else {
            state.snake.shrink();
            TickOutcome::quiet()
        }
    }

    /// Apply a direction change request
    ///
    /// Ignored while the game is over, and ignored when the request is the
    /// exact opposite of the current heading. Any other request takes effect
    /// immediately, so the latest accepted press before a tick wins.
    pub fn turn(&self, state: &mut GameState, requested: Direction) {
        if state.status != GameStatus::Running {
            return;
        }
        if let Some(current) = state.snake.heading {
            if current.is_opposite(requested) {
                return;
            }
        }
        state.snake.heading = Some(requested);
    }

    /// Pick food uniformly among the tiles the snake does not occupy
    fn spawn_food(&mut self, snake: &Snake) -> Option<Tile> {
        let n = self.config.tile_count();
        (0..n)
            .flat_map(|y| (0..n).map(move |x| Tile::new(x, y)))
            .filter(|tile| !snake.occupies(*tile))
            .choose(&mut self.rng)
    }
}
