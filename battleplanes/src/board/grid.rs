//! In-memory highlight surface. Renderers that keep their own cell styling (a web
//! table, a widget tree) implement [`StyleSink`] themselves; this one is used by the
//! console front end and by tests.

use enumflags2::BitFlags;

use crate::board::{rectangular::RectDimensions, Cell, GridQuery, StyleSink};

/// Visual marker that can be applied to a cell.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Highlight {
    /// Transient plane footprint shown while hovering.
    Preview = 0b001,
    /// Footprint of the committed plane placement.
    Committed = 0b010,
    /// Transient single-cell bombardment target shown while hovering.
    HitPreview = 0b100,
}

impl Highlight {
    /// CSS class name conventionally used for this highlight by web front ends.
    pub fn class_name(self) -> &'static str {
        match self {
            Highlight::Preview => "highlighted-temp-tile",
            Highlight::Committed => "highlighted-fixed-tile",
            Highlight::HitPreview => "highlighted-temp-hit",
        }
    }
}

/// Rectangular grid storing the set of highlights on each cell.
#[derive(Debug, Clone)]
pub struct HighlightGrid {
    /// Dimensions of this grid.
    dim: RectDimensions,
    /// Highlights of each cell, row major.
    cells: Box<[BitFlags<Highlight>]>,
}

impl HighlightGrid {
    /// Construct an unhighlighted grid with the given dimensions.
    pub fn new(dim: RectDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| BitFlags::empty()).collect();
        Self { dim, cells }
    }

    /// Get the dimensions of this grid.
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// Get the highlights on the given cell, `None` if it is out of bounds.
    pub fn highlights(&self, cell: Cell) -> Option<BitFlags<Highlight>> {
        self.dim
            .try_linearize(cell)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Returns true if the cell exists and carries `highlight`.
    pub fn has_highlight(&self, cell: Cell, highlight: Highlight) -> bool {
        self.highlights(cell)
            .map_or(false, |flags| flags.contains(highlight))
    }

    /// Get an iterator over every cell carrying `highlight`, in row-major order.
    pub fn cells_with(&self, highlight: Highlight) -> impl '_ + Iterator<Item = Cell> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, flags)| flags.contains(highlight))
            .map(move |(i, _)| dim.un_linearize(i))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the cells of
    /// that row paired with their highlights.
    pub fn iter_rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Cell, BitFlags<Highlight>)>> {
        self.cells
            .chunks(self.dim.width())
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, flags)| (Cell::new(x, y), *flags))
            })
    }

    /// Remove every highlight from every cell.
    pub fn clear(&mut self) {
        for flags in self.cells.iter_mut() {
            *flags = BitFlags::empty();
        }
    }

    fn get_mut(&mut self, cell: Cell) -> Option<&mut BitFlags<Highlight>> {
        self.dim
            .try_linearize(cell)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl GridQuery for HighlightGrid {
    fn exists(&self, x: usize, y: usize) -> bool {
        self.dim.exists(x, y)
    }
}

impl StyleSink for HighlightGrid {
    fn add_highlight(&mut self, cell: Cell, highlight: Highlight) {
        if let Some(flags) = self.get_mut(cell) {
            flags.insert(highlight);
        }
    }

    fn remove_highlight(&mut self, cell: Cell, highlight: Highlight) {
        if let Some(flags) = self.get_mut(cell) {
            flags.remove(highlight);
        }
    }
}
