//! Randomized square mazes and their shortest escape routes
//!
//! A maze is an n×n grid of squares. The top-left square is the start,
//! the bottom-right square the end, and every other square is either
//! open or a wall. [`Maze::shortest_path`] runs a breadth-first search
//! over the non-wall squares and marks one shortest route from start
//! to end, if any exists.
//!
//! # Examples
//! ## Solve a hand-built maze
//! ```
//! use rat_maze::Maze;
//!
//! let maze = Maze::parse("
//! S - - | -
//! | | - | -
//! - - - - -
//! - | | | -
//! - - - | E".trim()).unwrap();
//!
//! let solved = maze.shortest_path();
//! println!("{solved}");
//! ```
//!
//! ## Generate and solve a random maze
//! ```
//! use rat_maze::maze_generator::MazeGenerator;
//!
//! let mut generator = MazeGenerator::new(Some(7));
//! let maze = generator.generate(8, 25).unwrap();
//! println!("{}", maze.shortest_path());
//! ```

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;
use thiserror::Error;

pub mod maze_generator;

/// Errors from maze construction and generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Generation was requested for a zero-sized grid.
    #[error("maze size must be at least 1")]
    InvalidSize,
    /// Wall percentage above 100. Out-of-range values are rejected,
    /// not clamped.
    #[error("wall percentage must be within 0..=100, got {0}")]
    InvalidProbability(u32),
    /// A textual maze could not be understood.
    #[error("invalid maze: {0}")]
    InvalidMaze(String),
}

/// State of a single maze square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    /// Top-left corner, where every path begins
    Start,
    /// Bottom-right corner, where every path ends
    End,
    /// Impassable square
    Wall,
    /// Passable square
    Open,
    /// Passable square lying on the marked shortest path
    Path,
}

impl Cell {
    /// Symbol used when rendering this cell as text.
    pub fn symbol(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Wall => '|',
            Cell::Open => '-',
            Cell::Path => 'o',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            '|' => Some(Cell::Wall),
            '-' => Some(Cell::Open),
            'o' => Some(Cell::Path),
            _ => None,
        }
    }

    /// Whether a path may pass through this cell.
    fn is_traversable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
struct Point {
    y: usize,
    x: usize,
}

/// An n×n maze of [`Cell`] squares, stored row-major
///
/// The start cell sits at the top-left corner and the end cell at the
/// bottom-right corner. A 1×1 maze holds a single start cell; the
/// start state takes priority over the end state there.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Maze {
    /// Side length of the square grid
    size: usize,
    /// Cell states, row-major
    cells: Vec<Cell>,
}

impl Maze {
    /// Neighbor offsets as (dy, dx): up, down, left, right.
    ///
    /// Both the breadth-first expansion and the backward path walk
    /// visit neighbors in this exact order, which fixes the route
    /// chosen when several shortest paths have equal length.
    const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Parse a maze from its text rendering
    ///
    /// Rows are lines; cells within a row are whitespace-separated
    /// symbols as produced by [`Maze::render`]. Blank lines are
    /// skipped, so input may carry leading or trailing newlines.
    ///
    /// Returns [`MazeError::InvalidMaze`] if the grid is empty or not
    /// square, if a symbol is unknown, or if the start and end cells
    /// are missing from their corners or appear anywhere else.
    ///
    /// # Examples
    /// ```
    /// use rat_maze::Maze;
    /// let maze = Maze::parse("
    /// S - -
    /// | | -
    /// - - E".trim()).unwrap();
    /// ```
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines() {
            let row = line
                .split_whitespace()
                .map(|sym| {
                    sym.chars()
                        .exactly_one()
                        .ok()
                        .and_then(Cell::from_symbol)
                        .ok_or_else(|| MazeError::InvalidMaze(format!("unknown symbol `{sym}`")))
                })
                .collect::<Result<Vec<Cell>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let size = rows.len();
        if size == 0 {
            return Err(MazeError::InvalidMaze("maze is empty".to_string()));
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MazeError::InvalidMaze(format!(
                    "expected {} cells in row {}, found {}",
                    size,
                    y,
                    row.len()
                )));
            }
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        if cells[0] != Cell::Start {
            return Err(MazeError::InvalidMaze(
                "top-left cell must be the start `S`".to_string(),
            ));
        }
        if size > 1 && cells[cells.len() - 1] != Cell::End {
            return Err(MazeError::InvalidMaze(
                "bottom-right cell must be the end `E`".to_string(),
            ));
        }
        for (i, cell) in cells.iter().enumerate() {
            let corner = i == 0 || (size > 1 && i == cells.len() - 1);
            if !corner && matches!(cell, Cell::Start | Cell::End) {
                return Err(MazeError::InvalidMaze(format!(
                    "`{}` outside its corner at row {}, column {}",
                    cell.symbol(),
                    i / size,
                    i % size
                )));
            }
        }

        Ok(Maze { size, cells })
    }

    /// Build a maze from generator output.
    ///
    /// Callers uphold the corner invariants and pass `size * size`
    /// cells.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        Maze { size, cells }
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at `(y, x)`, or `None` when out of bounds.
    pub fn cell(&self, y: usize, x: usize) -> Option<Cell> {
        if y < self.size && x < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    /// Find one shortest path from the start to the end cell
    ///
    /// The maze is treated as an undirected graph in which every
    /// non-wall cell is a node, edges connect cells adjacent up, down,
    /// left or right, and every edge has the same weight. A
    /// breadth-first search assigns each reachable cell its hop count
    /// from the start; the route is then read off by walking backward
    /// from the end along strictly decreasing hop counts.
    ///
    /// Returns a new maze in which the open cells along one shortest
    /// route are marked as path cells. The start and end cells keep
    /// their own state, and the input maze is never modified. When the
    /// end cell cannot be reached, the returned maze is an unmarked
    /// copy of the input; an unsolvable maze is a valid result, not an
    /// error.
    ///
    /// Ties between equal-length shortest paths are broken by the
    /// fixed neighbor order in [`Self::DIRECTIONS`], so repeated calls
    /// always mark the same route.
    pub fn shortest_path(&self) -> Maze {
        let start = Point { y: 0, x: 0 };
        let end = Point {
            y: self.size - 1,
            x: self.size - 1,
        };

        let mut distance: Vec<Option<usize>> = vec![None; self.cells.len()];
        distance[self.index(start)] = Some(0);

        let mut frontier = VecDeque::new();
        frontier.push_back((start, 0));

        while let Some((current, steps)) = frontier.pop_front() {
            if current == end {
                break;
            }
            for (dy, dx) in Self::DIRECTIONS {
                let Some(next) = self.step(current, dy, dx) else {
                    continue;
                };
                let i = self.index(next);
                if self.cells[i].is_traversable() && distance[i].is_none() {
                    distance[i] = Some(steps + 1);
                    frontier.push_back((next, steps + 1));
                }
            }
        }

        let mut solved = self.clone();
        let Some(mut steps) = distance[self.index(end)] else {
            // End is unreachable; hand back the maze unmarked
            return solved;
        };

        let mut current = end;
        while current != start {
            let i = self.index(current);
            if solved.cells[i] == Cell::Open {
                solved.cells[i] = Cell::Path;
            }
            // A cell at distance d always has a neighbor at d - 1,
            // namely the one that enqueued it.
            for (dy, dx) in Self::DIRECTIONS {
                if let Some(previous) = self.step(current, dy, dx) {
                    if distance[self.index(previous)] == Some(steps - 1) {
                        current = previous;
                        steps -= 1;
                        break;
                    }
                }
            }
        }
        solved
    }

    /// Render the maze as text
    ///
    /// One line per row; cells within a row are separated by single
    /// spaces. Symbols: start `S`, end `E`, wall `|`, open `-`,
    /// path `o`.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.symbol()).join(" "))
            .join("\n")
    }

    fn index(&self, point: Point) -> usize {
        point.y * self.size + point.x
    }

    /// Neighbor of `point` offset by `(dy, dx)`, or `None` when the
    /// step leaves the grid.
    fn step(&self, point: Point, dy: i32, dx: i32) -> Option<Point> {
        let y = point.y as i64 + dy as i64;
        let x = point.x as i64 + dx as i64;
        if y < 0 || x < 0 || y >= self.size as i64 || x >= self.size as i64 {
            None
        } else {
            Some(Point {
                y: y as usize,
                x: x as usize,
            })
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, Maze, MazeError};

    #[test]
    fn parse_maze_input() {
        let maze = Maze::parse(
            "
S - |
- | -
- - E"
                .trim(),
        )
        .unwrap();

        assert_eq!(maze.size(), 3);
        assert_eq!(maze.cell(0, 0), Some(Cell::Start));
        assert_eq!(maze.cell(0, 2), Some(Cell::Wall));
        assert_eq!(maze.cell(1, 0), Some(Cell::Open));
        assert_eq!(maze.cell(2, 2), Some(Cell::End));
        assert_eq!(maze.cell(3, 0), None);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            Maze::parse(""),
            Err(MazeError::InvalidMaze("maze is empty".to_string()))
        );
        // Ragged rows
        assert!(Maze::parse("S - -\n- -\n- - E").is_err());
        // Two rows of three cells: not square
        assert!(Maze::parse("S - -\n- - E").is_err());
        assert!(Maze::parse("S x\n- E").is_err());
        // Corners missing or duplicated
        assert!(Maze::parse("- S\n- E").is_err());
        assert!(Maze::parse("S -\n- -").is_err());
        assert!(Maze::parse("S S\n- E").is_err());
        assert!(Maze::parse("S E\nE E").is_err());
    }

    #[test]
    fn render_round_trips_through_parse() {
        let text = "S - |\n- | -\n- - E";
        let maze = Maze::parse(text).unwrap();
        assert_eq!(maze.render(), text);
        assert_eq!(Maze::parse(&maze.render()).unwrap(), maze);
    }

    #[test]
    fn marks_unique_shortest_path() {
        let maze = Maze::parse(
            "
S | -
- | -
- - E"
                .trim(),
        )
        .unwrap();

        let expected = Maze::parse(
            "
S | -
o | -
o o E"
                .trim(),
        )
        .unwrap();
        assert_eq!(maze.shortest_path(), expected);
    }

    #[test]
    fn unreachable_end_leaves_maze_unmarked() {
        let maze = Maze::parse(
            "
S - -
| | |
- - E"
                .trim(),
        )
        .unwrap();

        assert_eq!(maze.shortest_path(), maze);
    }

    #[test]
    fn single_cell_maze_is_already_solved() {
        let maze = Maze::parse("S").unwrap();
        let solved = maze.shortest_path();

        assert_eq!(solved, maze);
        assert!(!solved.render().contains('o'));
    }

    #[test]
    fn solving_is_deterministic() {
        let maze = Maze::parse(
            "
S - - -
- - - -
- - - -
- - - E"
                .trim(),
        )
        .unwrap();

        assert_eq!(maze.shortest_path(), maze.shortest_path());
    }

    #[test]
    fn equal_length_paths_resolve_by_neighbor_order() {
        // Both routes around the 2×2 grid take two steps; the walk
        // back from the end checks up before left, so the marked
        // route runs through the top-right cell.
        let maze = Maze::parse("S -\n- E").unwrap();
        let expected = Maze::parse("S o\n- E").unwrap();

        for _ in 0..3 {
            assert_eq!(maze.shortest_path(), expected);
        }
    }

    #[test]
    fn solving_a_solved_maze_changes_nothing() {
        // Path cells traverse like open cells, so the distances and
        // the chosen route are identical on the second pass.
        let maze = Maze::parse(
            "
S - - -
| | - |
- - - -
- | - E"
                .trim(),
        )
        .unwrap();

        let solved = maze.shortest_path();
        assert_eq!(solved.shortest_path(), solved);
    }
}
