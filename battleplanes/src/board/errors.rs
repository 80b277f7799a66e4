//! Errors used when building grids.

use thiserror::Error;

/// Reason why a pair of dimensions cannot describe a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidDimensionsReason {
    /// Width or height was zero.
    #[error("grid dimensions must be nonzero")]
    Empty,
    /// `width * height` overflows `usize`.
    #[error("grid has more cells than fit in memory")]
    TooLarge,
}

/// Error returned when constructing [`RectDimensions`][crate::board::rectangular::RectDimensions]
/// from an invalid width and height.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid {width}x{height} grid: {reason}")]
pub struct DimensionsError {
    #[source]
    reason: InvalidDimensionsReason,
    width: usize,
    height: usize,
}

impl DimensionsError {
    /// Construct a dimensions error from a reason and the rejected size.
    pub(super) fn new(reason: InvalidDimensionsReason, width: usize, height: usize) -> Self {
        Self {
            reason,
            width,
            height,
        }
    }

    /// Get the reason the dimensions were rejected.
    pub fn reason(&self) -> InvalidDimensionsReason {
        self.reason
    }

    /// The rejected `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
