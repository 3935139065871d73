//! Interactive shell for maze solving

use std::io::{self, BufRead, Write};

use clap::Parser;
use rat_maze::maze_generator::MazeGenerator;

/// Generate random mazes and print their shortest escape paths
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length
    #[arg(short, long, default_value_t = 10)]
    size: usize,

    /// Chance (out of 100) for a cell to become a wall
    #[arg(short, long, default_value_t = 25)]
    walls: u32,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Hold one current maze, regenerate and solve it on demand
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut generator = MazeGenerator::new(args.seed);
    let mut size = args.size;
    let mut maze = generator.generate(size, args.walls)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("Options:");
        println!("0. Change maze size");
        println!("1. Print shortest path");
        println!("2. Generate another maze");
        println!("3. Exit");
        print!("Select an option: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match line?.trim() {
            "0" => {
                print!("Enter the size of the maze (n x n): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                match line?.trim().parse() {
                    Ok(n) if n > 0 => {
                        size = n;
                        maze = generator.generate(size, args.walls)?;
                        println!("{maze}");
                    }
                    _ => println!("Maze size must be a positive number."),
                }
            }
            "1" => println!("{}", maze.shortest_path()),
            "2" => {
                maze = generator.generate(size, args.walls)?;
                println!("{maze}");
            }
            "3" => {
                println!("Exiting maze solver. Goodbye!");
                break;
            }
            option => println!("Invalid option `{option}`. Please try again."),
        }
    }
    Ok(())
}
