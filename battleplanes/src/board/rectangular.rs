//! Implements a basic rectangular grid.
use crate::board::{
    errors::{DimensionsError, InvalidDimensionsReason},
    Cell, GridQuery,
};

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RectDimensions {
    /// Width of the grid. This cooresponds to the `x` of a [`Cell`].
    width: usize,
    /// Height of the grid. This cooresponds to the `y` of a [`Cell`].
    height: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Returns an error if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Result<Self, DimensionsError> {
        if width == 0 || height == 0 {
            Err(DimensionsError::new(
                InvalidDimensionsReason::Empty,
                width,
                height,
            ))
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
                .ok_or_else(|| DimensionsError::new(InvalidDimensionsReason::TooLarge, width, height))
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the cells of
    /// that row.
    pub fn iter_cells(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Cell { x, y }))
    }

    /// Convert a cell to a linear index. Returns `None` if the cell is out of bounds.
    pub fn try_linearize(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y * self.width + cell.x)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Cell`].
    pub fn un_linearize(&self, idx: usize) -> Cell {
        Cell {
            x: idx % self.width,
            y: idx / self.width,
        }
    }

    /// Pick a uniformly random cell of this grid.
    #[cfg(feature = "rng_gen")]
    pub fn random_cell<R: rand::Rng>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0, self.width),
            y: rng.gen_range(0, self.height),
        }
    }
}

impl GridQuery for RectDimensions {
    #[inline]
    fn exists(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 grid.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}
