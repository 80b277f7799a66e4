//! Grid interaction core for Battleplanes.
//!
//! A player positions a fixed nine-cell plane around a head cell, previews
//! rotations while hovering, and commits exactly one placement at a time. A second
//! mode marks a single target cell for bombardment. Rendering and submission are
//! left to the caller: the grid is only ever reached through the
//! [`GridQuery`][board::GridQuery] and [`StyleSink`][board::StyleSink] traits, and
//! the selections produced here are plain values the caller reads.
//!
//! ```
//! use battleplanes::{
//!     board::{rectangular::RectDimensions, Cell, Highlight, HighlightGrid},
//!     interaction::PlacementMachine,
//!     Orientation,
//! };
//!
//! let mut grid = HighlightGrid::new(RectDimensions::default());
//! let mut machine = PlacementMachine::new();
//!
//! machine.on_hover(&mut grid, Cell::new(4, 4));
//! machine.on_rotate(&mut grid);
//! let placed = machine.on_commit(&mut grid, Cell::new(4, 4)).unwrap();
//!
//! assert_eq!(placed.orientation(), Orientation::East);
//! assert_eq!(placed.head_address().to_string(), "E5");
//! assert!(grid.has_highlight(Cell::new(3, 4), Highlight::Committed));
//! ```

pub mod board;
pub mod interaction;
pub mod orientation;
pub mod shapes;

pub use crate::orientation::{Orientation, OrientationCycle, ParseOrientationError};
