//! Types used for defining shapes that are anchored to a head cell.
use std::slice;

use crate::{
    board::{Cell, GridQuery},
    orientation::Orientation,
};

pub use self::plane::{Plane, PLANE_CELLS};

mod plane;

/// Position of a shape cell relative to the shape's head, as `(dx, dy)`.
pub type Offset = (isize, isize);

/// The in-bounds cells a shape occupies around its head, in offset-table order. The
/// head itself is not included.
pub type Footprint = Vec<Cell>;

/// Trait for shapes that are described by a fixed table of offsets per orientation.
pub trait Shape {
    /// The offsets this shape occupies relative to its head when facing `orientation`.
    fn offsets(&self, orientation: Orientation) -> &[Offset];

    /// Get an iterator over the cells this shape occupies when its head is at
    /// `anchor`. Cells that fall outside of `grid` are skipped.
    fn project<'a, G: GridQuery + ?Sized>(
        &'a self,
        anchor: Cell,
        orientation: Orientation,
        grid: &'a G,
    ) -> FootprintIter<'a, G> {
        FootprintIter {
            anchor,
            offsets: self.offsets(orientation).iter(),
            grid,
        }
    }

    /// Collect the [`Footprint`] of this shape with its head at `anchor`.
    fn footprint<G: GridQuery + ?Sized>(
        &self,
        anchor: Cell,
        orientation: Orientation,
        grid: &G,
    ) -> Footprint {
        self.project(anchor, orientation, grid).collect()
    }

    /// Returns true if any part of the shape, head included, would fall outside of
    /// `grid`.
    fn clipped<G: GridQuery + ?Sized>(
        &self,
        anchor: Cell,
        orientation: Orientation,
        grid: &G,
    ) -> bool {
        !grid.contains(anchor)
            || self.project(anchor, orientation, grid).count() < self.offsets(orientation).len()
    }

    /// Returns true if `cell` is the head or one of the offset cells of this shape,
    /// regardless of grid bounds.
    fn occupies(&self, anchor: Cell, orientation: Orientation, cell: Cell) -> bool {
        anchor == cell
            || self
                .offsets(orientation)
                .iter()
                .any(|&(dx, dy)| anchor.offset(dx, dy) == Some(cell))
    }
}

/// Iterator over the in-bounds cells of a shape's footprint.
pub struct FootprintIter<'a, G: ?Sized> {
    anchor: Cell,
    offsets: slice::Iter<'a, Offset>,
    grid: &'a G,
}

impl<'a, G: GridQuery + ?Sized> Iterator for FootprintIter<'a, G> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let anchor = self.anchor;
        let grid = self.grid;
        self.offsets
            .by_ref()
            .filter_map(|&(dx, dy)| anchor.offset(dx, dy))
            .find(|&cell| grid.contains(cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.offsets.size_hint().1)
    }
}
