use super::direction::Direction;

/// A single grid cell, addressed by integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile offset by a delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: occupied tiles with the head at index 0, plus its heading
///
/// `heading` is `None` until the first accepted keypress; advancing with no
/// heading produces a candidate head equal to the current head.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body tiles, head first, tail last; length >= 1 while the game runs
    pub body: Vec<Tile>,
    /// Current direction of movement, if any
    pub heading: Option<Direction>,
}

impl Snake {
    /// Create a length-1 snake at the given tile with no heading
    pub fn new(head: Tile) -> Self {
        Self {
            body: vec![head],
            heading: None,
        }
    }

    /// Get the head tile
    pub fn head(&self) -> Tile {
        self.body[0]
    }

    /// Get the tail tile (last segment)
    pub fn tail(&self) -> Tile {
        self.body[self.body.len() - 1]
    }

    /// Body tiles excluding the head
    pub fn body_segments(&self) -> &[Tile] {
        &self.body[1..]
    }

    /// Candidate head one step along the current heading
    pub fn advance(&self) -> Tile {
        let (dx, dy) = self.heading.map_or((0, 0), |d| d.delta());
        self.head().moved_by(dx, dy)
    }

    /// Prepend a new head tile
    pub fn grow(&mut self, tile: Tile) {
        self.body.insert(0, tile);
    }

    /// Drop the tail tile
    pub fn shrink(&mut self) {
        self.body.pop();
    }

    /// True if any body tile, head and tail included, occupies `tile`
    pub fn occupies(&self, tile: Tile) -> bool {
        self.body.contains(&tile)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the candidate head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Candidate head left the grid
    Wall,
    /// Candidate head landed on an occupied tile
    SelfHit,
}

/// Whether the game is still accepting ticks
///
/// `Over` is terminal; only a full reset brings the game back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Complete game state, recreated from scratch on every reset
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Tile,
    pub tile_count: i32,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a new running game state with score 0
    pub fn new(snake: Snake, food: Tile, tile_count: i32) -> Self {
        Self {
            snake,
            food,
            tile_count,
            score: 0,
            status: GameStatus::Running,
        }
    }

    /// Check if a tile is within the grid bounds
    pub fn is_in_bounds(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x < self.tile_count && tile.y >= 0 && tile.y < self.tile_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_movement() {
        let tile = Tile::new(5, 5);
        assert_eq!(tile.moved_by(1, 0), Tile::new(6, 5));
        assert_eq!(tile.moved_by(-1, 0), Tile::new(4, 5));
        assert_eq!(tile.moved_by(0, 1), Tile::new(5, 6));
        assert_eq!(tile.moved_by(0, -1), Tile::new(5, 4));
    }

    #[test]
    fn test_new_snake_has_no_heading() {
        let snake = Snake::new(Tile::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Tile::new(10, 10));
        assert_eq!(snake.heading, None);
    }

    #[test]
    fn test_advance_with_no_heading_stays_put() {
        let snake = Snake::new(Tile::new(10, 10));
        assert_eq!(snake.advance(), Tile::new(10, 10));
    }

    #[test]
    fn test_advance_follows_heading() {
        let mut snake = Snake::new(Tile::new(5, 5));
        snake.heading = Some(Direction::Right);
        assert_eq!(snake.advance(), Tile::new(6, 5));

        snake.heading = Some(Direction::Up);
        assert_eq!(snake.advance(), Tile::new(5, 4));
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut snake = Snake::new(Tile::new(5, 5));

        snake.grow(Tile::new(6, 5));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Tile::new(6, 5));
        assert_eq!(snake.tail(), Tile::new(5, 5));

        snake.shrink();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Tile::new(6, 5));
    }

    #[test]
    fn test_body_segments_excludes_head() {
        let mut snake = Snake::new(Tile::new(5, 5));
        snake.grow(Tile::new(6, 5));
        snake.grow(Tile::new(7, 5));

        assert_eq!(snake.body_segments(), &[Tile::new(6, 5), Tile::new(5, 5)]);
        assert!(!snake.body_segments().contains(&snake.head()));
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let mut snake = Snake::new(Tile::new(5, 5));
        snake.grow(Tile::new(6, 5));
        snake.grow(Tile::new(7, 5));

        assert!(snake.occupies(Tile::new(7, 5))); // head
        assert!(snake.occupies(Tile::new(6, 5))); // middle
        assert!(snake.occupies(Tile::new(5, 5))); // tail
        assert!(!snake.occupies(Tile::new(8, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Snake::new(Tile::new(5, 5)), Tile::new(1, 1), 20);

        assert!(state.is_in_bounds(Tile::new(0, 0)));
        assert!(state.is_in_bounds(Tile::new(19, 19)));
        assert!(!state.is_in_bounds(Tile::new(-1, 0)));
        assert!(!state.is_in_bounds(Tile::new(20, 0)));
        assert!(!state.is_in_bounds(Tile::new(0, 20)));
    }
}
