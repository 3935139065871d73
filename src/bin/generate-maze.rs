//! CLI for standalone maze generation

use clap::Parser;
use rat_maze::maze_generator::MazeGenerator;

/// Generate one random maze and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Chance (out of 100) for a cell to become a wall
    #[arg(long, default_value_t = 25)]
    walls: u32,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print to stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut generator = MazeGenerator::new(args.seed);
    let maze = generator.generate(args.size, args.walls)?;
    println!("{maze}");
    Ok(())
}
