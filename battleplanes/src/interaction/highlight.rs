//! Applies and removes highlights on a shape's head and footprint.
//!
//! The helpers here are agnostic to which [`Highlight`] is used: callers pair a
//! `mark` with an `unmark` of the same highlight, which lets a transient preview and a
//! committed placement overlap without disturbing each other.

use log::trace;

use crate::{
    board::{Cell, Highlight, StyleSink},
    orientation::Orientation,
    shapes::Shape,
};

/// Add `highlight` to the head and every in-bounds footprint cell of `shape`.
pub fn mark<G, S>(grid: &mut G, shape: &S, anchor: Cell, orientation: Orientation, highlight: Highlight)
where
    G: StyleSink + ?Sized,
    S: Shape + ?Sized,
{
    let footprint = shape.footprint(anchor, orientation, &*grid);
    trace!(
        "mark {:?} at {} facing {} ({} cells)",
        highlight,
        anchor,
        orientation,
        footprint.len() + 1
    );
    mark_cell(grid, anchor, highlight);
    for cell in footprint {
        grid.add_highlight(cell, highlight);
    }
}

/// Remove `highlight` from the head and every in-bounds footprint cell of `shape`.
pub fn unmark<G, S>(
    grid: &mut G,
    shape: &S,
    anchor: Cell,
    orientation: Orientation,
    highlight: Highlight,
) where
    G: StyleSink + ?Sized,
    S: Shape + ?Sized,
{
    let footprint = shape.footprint(anchor, orientation, &*grid);
    trace!("unmark {:?} at {} facing {}", highlight, anchor, orientation);
    unmark_cell(grid, anchor, highlight);
    for cell in footprint {
        grid.remove_highlight(cell, highlight);
    }
}

/// Add `highlight` to a single cell if it exists.
pub fn mark_cell<G: StyleSink + ?Sized>(grid: &mut G, cell: Cell, highlight: Highlight) {
    if grid.contains(cell) {
        grid.add_highlight(cell, highlight);
    }
}

/// Remove `highlight` from a single cell if it exists.
pub fn unmark_cell<G: StyleSink + ?Sized>(grid: &mut G, cell: Cell, highlight: Highlight) {
    if grid.contains(cell) {
        grid.remove_highlight(cell, highlight);
    }
}
