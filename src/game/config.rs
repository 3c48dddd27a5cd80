use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// The board is square: the host surface is `surface_size` pixels on each
/// side and is divided into `tile_size`-pixel tiles, so the playable grid is
/// `tile_count()` tiles wide and tall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pixel dimension of the square drawing surface
    pub surface_size: u32,
    /// Pixel dimension of a single tile
    pub tile_size: u32,
    /// Points awarded per food eaten
    pub food_reward: u32,
    /// Milliseconds between game ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_size: 600,
            tile_size: 30,
            food_reward: 10,
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom surface and tile size
    pub fn new(surface_size: u32, tile_size: u32) -> Self {
        Self {
            surface_size,
            tile_size,
            ..Default::default()
        }
    }

    /// Number of tiles along each axis of the grid
    pub fn tile_count(&self) -> i32 {
        (self.surface_size / self.tile_size) as i32
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(300, 30)
    }
}
