//! State machines that turn pointer events into previews and selections. This is
//! split into one module per interaction mode, sharing the highlight helpers.
//!
//! [`placement`] drives plane placement: hover previews a plane footprint, rotate
//! turns the preview, and commit replaces the single committed placement.
//!
//! [`bombardment`] drives single-cell targeting: hover previews the target and a
//! click finalizes it.
//!
//! Both are plain values driven through `&mut self`, with the grid handed in on every
//! event, so any rendering layer can drive them and several grids can be driven
//! independently.

use crate::board::Cell;

pub use self::{
    bombardment::{BombardmentSelector, TargetPhase, TargetSelection},
    placement::{PlacementMachine, PlacementPhase, PlaneSelection},
};

pub mod bombardment;
pub mod highlight;
pub mod placement;

/// Pointer-like event delivered by the rendering layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerEvent {
    /// The pointer entered the cell.
    Hover(Cell),
    /// The pointer left the cell.
    HoverEnd(Cell),
    /// The player asked to rotate the shape (a right click in the web front end).
    Rotate,
    /// The player clicked the cell.
    Commit(Cell),
}
