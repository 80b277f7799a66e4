//! Single-cell targeting for bombardment guesses.
use std::fmt;

use log::{debug, trace};

use crate::{
    board::{Address, Cell, Highlight, StyleSink},
    interaction::{
        highlight::{mark_cell, unmark_cell},
        PointerEvent,
    },
};

/// The cell chosen as a bombardment target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TargetSelection {
    cell: Cell,
}

impl TargetSelection {
    /// The targeted cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The address of the targeted cell, such as `B3`.
    pub fn address(&self) -> Address {
        self.cell.address()
    }
}

impl fmt::Display for TargetSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.address(), f)
    }
}

/// Where the targeting interaction is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TargetPhase {
    /// The pointer is not over any cell.
    Idle,
    /// The pointer is over the given cell, which carries the hit preview.
    Hovering(Cell),
    /// The given cell was clicked and handed off for submission. Further events are
    /// ignored until [`BombardmentSelector::reset`].
    Submitted(Cell),
}

/// State machine for picking one bombardment target.
#[derive(Debug, Clone)]
pub struct BombardmentSelector {
    phase: TargetPhase,
}

impl BombardmentSelector {
    /// Construct an idle selector.
    pub fn new() -> Self {
        Self {
            phase: TargetPhase::Idle,
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> TargetPhase {
        self.phase
    }

    /// The cell currently carrying the hit preview, if any.
    pub fn last_hovered(&self) -> Option<Cell> {
        match self.phase {
            TargetPhase::Hovering(cell) => Some(cell),
            _ => None,
        }
    }

    /// The submitted target, if a click already finalized one.
    pub fn submitted(&self) -> Option<TargetSelection> {
        match self.phase {
            TargetPhase::Submitted(cell) => Some(TargetSelection { cell }),
            _ => None,
        }
    }

    /// Dispatch a pointer event to the matching handler. Returns the target for
    /// [`PointerEvent::Commit`]. Rotation has no meaning here and is ignored.
    pub fn handle<G: StyleSink + ?Sized>(
        &mut self,
        grid: &mut G,
        event: PointerEvent,
    ) -> Option<TargetSelection> {
        match event {
            PointerEvent::Hover(cell) => {
                self.on_hover(grid, cell);
                None
            }
            PointerEvent::HoverEnd(cell) => {
                self.on_hover_end(grid, cell);
                None
            }
            PointerEvent::Rotate => None,
            PointerEvent::Commit(cell) => self.on_click(grid, cell),
        }
    }

    /// The pointer entered `cell`: show the hit preview on it.
    pub fn on_hover<G: StyleSink + ?Sized>(&mut self, grid: &mut G, cell: Cell) {
        match self.phase {
            TargetPhase::Submitted(_) => {
                trace!("ignoring hover on {} after submission", cell);
                return;
            }
            TargetPhase::Hovering(old) if old != cell => {
                unmark_cell(grid, old, Highlight::HitPreview);
            }
            _ => {}
        }
        if grid.contains(cell) {
            mark_cell(grid, cell, Highlight::HitPreview);
            self.phase = TargetPhase::Hovering(cell);
        } else {
            self.phase = TargetPhase::Idle;
        }
    }

    /// The pointer left `cell`: remove its hit preview.
    pub fn on_hover_end<G: StyleSink + ?Sized>(&mut self, grid: &mut G, cell: Cell) {
        match self.phase {
            TargetPhase::Hovering(hovered) if hovered == cell => {
                unmark_cell(grid, cell, Highlight::HitPreview);
                self.phase = TargetPhase::Idle;
            }
            _ => trace!("ignoring hover end on {}", cell),
        }
    }

    /// The player clicked `cell`: finalize it as the target. Returns `None` if the cell
    /// is not on the grid or a target was already submitted.
    pub fn on_click<G: StyleSink + ?Sized>(
        &mut self,
        grid: &mut G,
        cell: Cell,
    ) -> Option<TargetSelection> {
        match self.phase {
            TargetPhase::Submitted(_) => {
                trace!("ignoring click on {} after submission", cell);
                return None;
            }
            TargetPhase::Hovering(hovered) => unmark_cell(grid, hovered, Highlight::HitPreview),
            TargetPhase::Idle => {}
        }
        if !grid.contains(cell) {
            self.phase = TargetPhase::Idle;
            return None;
        }
        self.phase = TargetPhase::Submitted(cell);
        debug!("bombardment target {}", cell);
        Some(TargetSelection { cell })
    }

    /// Forget the submitted target so another one can be picked.
    pub fn reset(&mut self) {
        self.phase = TargetPhase::Idle;
    }
}

impl Default for BombardmentSelector {
    fn default() -> Self {
        Self::new()
    }
}
