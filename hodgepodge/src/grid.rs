//! Double-buffered grid of cell states.
//!
//! Cells are stored row-major (`index = x + y * width`). The outermost ring
//! of cells is a fixed wall: the engine never writes it, so it keeps whatever
//! value it was given (healthy unless overwritten).

use std::mem;

use crate::error::ConfigError;
use crate::params::Params;
use crate::seed::{self, SeedRange};
use crate::Cell;
use rand::Rng;

/// Smallest dimension that still leaves an interior cell.
pub const MIN_DIMENSION: usize = 3;

/// Largest cell count accepted; a renderer's RGBA frame of this many cells
/// still has an addressable length.
pub const MAX_CELLS: usize = isize::MAX as usize / 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

/// Interior population split by regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub healthy: usize,
    pub infected: usize,
    pub ill: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.ill
    }
}

impl Grid {
    /// Allocates both buffers with every cell healthy.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(ConfigError::GridTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            current: vec![0; size],
            next: vec![0; size],
        })
    }

    /// Allocates the grid and seeds every interior cell at random.
    pub fn initialize<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        params: &Params,
        range: SeedRange,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut grid = Self::new(width, height)?;
        seed::seed_interior(&mut grid, params, range, rng);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        x + y * self.width
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Value of a cell in the current buffer. Panics when out of bounds.
    pub fn current_state(&self, x: usize, y: usize) -> Cell {
        self.current[self.index(x, y)]
    }

    /// Overwrites a cell of the current buffer.
    ///
    /// Border cells are written to both buffers so the wall survives swaps.
    pub fn set_current(&mut self, x: usize, y: usize, value: Cell) {
        let i = self.index(x, y);
        self.current[i] = value;
        if self.is_border(x, y) {
            self.next[i] = value;
        }
    }

    /// Current buffer as a flat row-major slice.
    pub fn current(&self) -> &[Cell] {
        &self.current
    }

    /// Scratch buffer of the in-progress step.
    pub fn next(&self) -> &[Cell] {
        &self.next
    }

    /// Splits the grid into the buffer to read and the buffer to write.
    pub fn buffers_mut(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.current, &mut self.next)
    }

    /// Copies a computed row into the interior of `next`.
    ///
    /// `row` holds the full row; its first and last entries are ignored.
    pub fn write_next_row(&mut self, y: usize, row: &[Cell]) {
        assert!(y > 0 && y < self.height - 1, "row {y} is not interior");
        assert_eq!(row.len(), self.width, "row length must equal grid width");
        let start = self.index(1, y);
        self.next[start..start + self.width - 2].copy_from_slice(&row[1..self.width - 1]);
    }

    /// Resets every interior cell of `next` to healthy.
    pub fn clear_next_interior(&mut self) {
        let w = self.width;
        for y in 1..self.height - 1 {
            self.next[1 + y * w..w - 1 + y * w].fill(0);
        }
    }

    /// Exchanges the roles of the two buffers without copying.
    pub fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Interior coordinates in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (self.width, self.height);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| (x, y)))
    }

    /// Whether every border cell of the current buffer is healthy.
    pub fn border_is_healthy(&self) -> bool {
        let (w, h) = (self.width, self.height);
        let top_bottom = (0..w).all(|x| self.current_state(x, 0) == 0 && self.current_state(x, h - 1) == 0);
        let sides = (0..h).all(|y| self.current_state(0, y) == 0 && self.current_state(w - 1, y) == 0);
        top_bottom && sides
    }

    pub fn census(&self, params: &Params) -> Census {
        let ill = params.ill();
        let mut census = Census::default();
        for (x, y) in self.interior() {
            match self.current_state(x, y) {
                0 => census.healthy += 1,
                c if c == ill => census.ill += 1,
                _ => census.infected += 1,
            }
        }
        census
    }
}
