//! Maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Cell, Maze, MazeError};

/// Randomized maze generator.
///
/// Walls are drawn independently per cell, so nothing guarantees that
/// a generated maze can be solved. [`Maze::shortest_path`] reports
/// such mazes by returning them without path markings.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create a generator, seeded from `seed` or from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a `size`×`size` maze
    ///
    /// The top-left cell is always the start and the bottom-right cell
    /// the end; in a 1×1 maze the single cell is the start. Every
    /// other cell draws an independent uniform value and becomes a
    /// wall when the draw falls below `wall_percentage` out of 100,
    /// otherwise it stays open.
    ///
    /// ## Arguments
    /// - `size`: Side length of the grid, at least 1.
    /// - `wall_percentage`: Chance for a cell to become a wall, within
    ///   `0..=100`. Values above 100 are rejected, not clamped.
    pub fn generate(&mut self, size: usize, wall_percentage: u32) -> Result<Maze, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize);
        }
        if wall_percentage > 100 {
            return Err(MazeError::InvalidProbability(wall_percentage));
        }

        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let cell = if (y, x) == (0, 0) {
                    Cell::Start
                } else if (y, x) == (size - 1, size - 1) {
                    Cell::End
                } else if self.random.gen_range(0..100) < wall_percentage {
                    Cell::Wall
                } else {
                    Cell::Open
                };
                cells.push(cell);
            }
        }
        Ok(Maze::from_cells(size, cells))
    }
}
