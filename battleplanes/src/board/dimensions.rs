use crate::board::{Cell, Highlight};

/// Answers whether a cell exists in a grid.
///
/// This is the only thing shapes need to know about the grid they are projected
/// onto, so any rectangular (or irregular) surface can implement it.
pub trait GridQuery {
    /// Returns true if there is a cell at column `x`, row `y`.
    fn exists(&self, x: usize, y: usize) -> bool;

    /// Returns true if the given [`Cell`] exists.
    fn contains(&self, cell: Cell) -> bool {
        self.exists(cell.x, cell.y)
    }
}

impl<G: GridQuery + ?Sized> GridQuery for &G {
    fn exists(&self, x: usize, y: usize) -> bool {
        (**self).exists(x, y)
    }
}

/// Surface that can add and remove highlights on individual cells, supplied by the
/// rendering layer.
///
/// Highlights behave like a set per cell: adding one that is already present and
/// removing one that is absent must both be no-ops. Callers are free to remove and
/// re-add the same highlight on a cell in a single transition.
pub trait StyleSink: GridQuery {
    /// Add `highlight` to the cell. Cells that do not exist are ignored.
    fn add_highlight(&mut self, cell: Cell, highlight: Highlight);

    /// Remove `highlight` from the cell. Cells that do not exist are ignored.
    fn remove_highlight(&mut self, cell: Cell, highlight: Highlight);
}
