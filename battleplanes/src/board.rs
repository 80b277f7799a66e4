//! Types that make up the grid: cell addressing, existence queries, and the
//! highlight surface the interaction state machines draw on.

pub use self::{
    address::{Address, Cell, ParseAddressError},
    dimensions::{GridQuery, StyleSink},
    errors::{DimensionsError, InvalidDimensionsReason},
    grid::{Highlight, HighlightGrid},
};

pub mod address;
mod dimensions;
mod errors;
mod grid;
pub mod rectangular;
