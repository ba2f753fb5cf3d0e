use std::fmt;
use std::mem;

use rand::Rng;
use thiserror::Error;

use crate::CellState;
use crate::rule_set::RuleSet;

#[derive(Debug, Error)]
pub enum BoardError {
    /// A side below 3 leaves no interior cell to evaluate.
    #[error("board side must be at least 3, got {0}")]
    SideTooSmall(usize),
}

/// A square, double-buffered grid of cells.
///
/// Cells live in a flat buffer in row-major order, one byte per cell. During a
/// step the current buffer is read, the scratch buffer is written, and the two
/// are swapped once the whole generation is evaluated, so readers only ever
/// observe complete generations.
///
/// The outermost ring is a dead border: it is never seeded, never evaluated,
/// and written dead into every generation.
pub struct Board {
    side: usize,

    /// The generation on display
    cells: Vec<CellState>,

    /// The generation being computed
    scratch: Vec<CellState>,
}

impl Board {
    /// Create an empty board of `side * side` cells.
    pub fn new(side: usize) -> Result<Self, BoardError> {
        if side < 3 {
            return Err(BoardError::SideTooSmall(side));
        }

        Ok(Self {
            side,
            cells: vec![0; side * side],
            scratch: vec![0; side * side],
        })
    }

    /// Side length in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// The state of cell `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x < self.side && y < self.side {
            Some(self.cells[self.at(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.side, "x is out of bounds");
        assert!(y < self.side, "y is out of bounds");

        let i = self.at(x, y);
        self.cells[i] = alive as CellState;
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;

        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(move |(i, _)| (i % side, i / side))
    }

    /// Kill everything, then seed each interior cell alive with probability
    /// `density`. The border ring stays dead.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        self.cells.fill(0);

        for y in 1..self.side - 1 {
            for x in 1..self.side - 1 {
                let i = self.at(x, y);
                self.cells[i] = rng.gen_bool(density) as CellState;
            }
        }
    }

    /// Advance the board one generation under `set`.
    pub fn step(&mut self, set: RuleSet) {
        // the border ring is dead in every generation
        self.scratch.fill(0);

        for y in 1..self.side - 1 {
            for x in 1..self.side - 1 {
                let i = self.at(x, y);
                let alive = self.cells[i] == 1;
                let next = set.next_state(alive, self.live_neighbors(x, y));

                self.scratch[i] = next as CellState;
            }
        }

        mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Count the live neighbors of an interior cell: the 3x3 window around it,
    /// minus the cell itself.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x >= 1 && x < self.side - 1, "x is on the border");
        debug_assert!(y >= 1 && y < self.side - 1, "y is on the border");

        let mut count = 0;

        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                count += self.cells[self.at(nx, ny)];
            }
        }

        count - self.cells[self.at(x, y)]
    }

    fn at(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.side {
            if y > 0 {
                f.write_str("\n")?;
            }

            for x in 0..self.side {
                let glyph = if self.cells[self.at(x, y)] == 1 { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
        }

        Ok(())
    }
}
