use anyhow::Result;
use clap::Parser;
use twenty48::game::GameConfig;
use twenty48::modes::HumanMode;

#[derive(Parser)]
#[command(name = "twenty48")]
#[command(version, about = "Sliding-tile merge puzzle for the terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "4")]
    size: usize,

    /// Number of tiles on the board at game start
    #[arg(long, default_value = "2")]
    start_tiles: usize,

    /// Tile value that wins the game
    #[arg(long, default_value = "2048")]
    win: u32,

    /// Seed for the tile spawner, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig {
        grid_size: cli.size,
        start_tiles: cli.start_tiles,
        winning_value: cli.win,
        ..Default::default()
    };

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}
