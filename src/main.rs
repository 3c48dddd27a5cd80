use anyhow::{Result, ensure};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "A grid-based snake game for the terminal")]
struct Cli {
    /// Pixel dimension of the square game surface
    #[arg(long, default_value = "600")]
    surface_size: u32,

    /// Pixel dimension of a single tile
    #[arg(long, default_value = "30")]
    tile_size: u32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(cli.tile_size > 0, "tile size must be positive");
    ensure!(
        cli.surface_size % cli.tile_size == 0,
        "surface size must be divisible by tile size"
    );
    ensure!(
        cli.surface_size / cli.tile_size >= 2,
        "grid must be at least 2x2 tiles"
    );
    ensure!(cli.tick_ms > 0, "tick interval must be positive");

    let config = GameConfig {
        surface_size: cli.surface_size,
        tile_size: cli.tile_size,
        tick_interval_ms: cli.tick_ms,
        ..Default::default()
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
