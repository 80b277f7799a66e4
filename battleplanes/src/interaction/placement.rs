//! Plane placement: hover previews, rotation, and the single committed placement.
use std::fmt;

use log::{debug, trace};

use crate::{
    board::{Address, Cell, GridQuery, Highlight, StyleSink},
    interaction::{
        highlight::{mark, unmark},
        PointerEvent,
    },
    orientation::{Orientation, OrientationCycle},
    shapes::{Footprint, Plane, Shape},
};

/// A plane head and the direction it faces. This is what the submission layer sends
/// for a committed placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlaneSelection {
    head: Cell,
    orientation: Orientation,
}

impl PlaneSelection {
    /// Construct a selection with its head at `head` facing `orientation`.
    pub fn new(head: Cell, orientation: Orientation) -> Self {
        Self { head, orientation }
    }

    /// The cell the plane is anchored to.
    pub fn head(&self) -> Cell {
        self.head
    }

    /// The address of the head cell, such as `E5`.
    pub fn head_address(&self) -> Address {
        self.head.address()
    }

    /// The direction the plane faces.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The in-bounds footprint of a plane at this selection, head excluded.
    pub fn footprint<G: GridQuery + ?Sized>(&self, grid: &G) -> Footprint {
        Plane.footprint(self.head, self.orientation, grid)
    }

    /// Returns true if the whole plane, head included, lies inside `grid`.
    pub fn fits_within<G: GridQuery + ?Sized>(&self, grid: &G) -> bool {
        !Plane.clipped(self.head, self.orientation, grid)
    }
}

impl fmt::Display for PlaneSelection {
    /// Formats as the head address followed by the orientation letter, e.g. `E5 N`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.head_address(), self.orientation)
    }
}

/// Whether a plane preview is currently shown.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementPhase {
    /// Nothing is being previewed.
    NoSelection,
    /// The pointer is over a head cell and the plane is drawn around it.
    Previewing(PlaneSelection),
}

/// State machine for placing a plane.
///
/// The preview and the committed placement are tracked independently and drawn with
/// different highlights, so hovering never disturbs the committed plane. The machine
/// is the only owner of the committed placement; the submission layer reads it from
/// [`committed`][Self::committed] or from the value returned by
/// [`on_commit`][Self::on_commit].
#[derive(Debug, Clone)]
pub struct PlacementMachine<S = Plane> {
    /// Shape being placed.
    shape: S,
    /// Orientation used for every preview until the next rotate.
    cycle: OrientationCycle,
    /// Current preview, if any.
    phase: PlacementPhase,
    /// The committed placement, absent until the first commit.
    committed: Option<PlaneSelection>,
}

impl PlacementMachine<Plane> {
    /// Construct a machine placing a [`Plane`], starting out facing north.
    pub fn new() -> Self {
        Self::with_shape(Plane, OrientationCycle::new())
    }
}

impl Default for PlacementMachine<Plane> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape> PlacementMachine<S> {
    /// Construct a machine placing `shape`, using `cycle` for its orientation.
    pub fn with_shape(shape: S, cycle: OrientationCycle) -> Self {
        Self {
            shape,
            cycle,
            phase: PlacementPhase::NoSelection,
            committed: None,
        }
    }

    /// Get the shape being placed.
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Get the current preview state.
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    /// Get the previewed head and orientation, if a preview is shown.
    pub fn preview(&self) -> Option<PlaneSelection> {
        match self.phase {
            PlacementPhase::NoSelection => None,
            PlacementPhase::Previewing(selection) => Some(selection),
        }
    }

    /// Get the committed placement, if one has been made.
    pub fn committed(&self) -> Option<PlaneSelection> {
        self.committed
    }

    /// The orientation the next preview or commit will use.
    pub fn orientation(&self) -> Orientation {
        self.cycle.current()
    }

    /// Dispatch a pointer event to the matching handler. Returns the new committed
    /// placement for [`PointerEvent::Commit`] on an existing cell.
    pub fn handle<G: StyleSink + ?Sized>(
        &mut self,
        grid: &mut G,
        event: PointerEvent,
    ) -> Option<PlaneSelection> {
        match event {
            PointerEvent::Hover(cell) => {
                self.on_hover(grid, cell);
                None
            }
            PointerEvent::HoverEnd(cell) => {
                self.on_hover_end(grid, cell);
                None
            }
            PointerEvent::Rotate => {
                self.on_rotate(grid);
                None
            }
            PointerEvent::Commit(cell) => self.on_commit(grid, cell),
        }
    }

    /// The pointer entered `cell`: preview the shape there at the current orientation.
    /// A preview left behind on another cell is cleared first.
    pub fn on_hover<G: StyleSink + ?Sized>(&mut self, grid: &mut G, cell: Cell) {
        self.clear_preview(grid);
        if !grid.contains(cell) {
            trace!("ignoring hover outside of the grid at {:?}", cell);
            return;
        }
        let selection = PlaneSelection::new(cell, self.cycle.current());
        mark(
            grid,
            &self.shape,
            selection.head,
            selection.orientation,
            Highlight::Preview,
        );
        self.phase = PlacementPhase::Previewing(selection);
    }

    /// The pointer left `cell`: remove its preview. Leaving a cell that is not the
    /// previewed head does nothing.
    pub fn on_hover_end<G: StyleSink + ?Sized>(&mut self, grid: &mut G, cell: Cell) {
        match self.phase {
            PlacementPhase::Previewing(selection) if selection.head == cell => {
                self.clear_preview(grid);
            }
            _ => trace!("ignoring hover end on {} without a preview", cell),
        }
    }

    /// Advance the orientation a quarter turn and return it. A shown preview is redrawn
    /// around the same head at the new orientation.
    pub fn on_rotate<G: StyleSink + ?Sized>(&mut self, grid: &mut G) -> Orientation {
        match self.phase {
            PlacementPhase::Previewing(old) => {
                unmark(grid, &self.shape, old.head, old.orientation, Highlight::Preview);
                let orientation = self.cycle.rotate();
                let new = PlaneSelection::new(old.head, orientation);
                mark(grid, &self.shape, new.head, new.orientation, Highlight::Preview);
                self.phase = PlacementPhase::Previewing(new);
                orientation
            }
            PlacementPhase::NoSelection => self.cycle.rotate(),
        }
    }

    /// Commit the shape with its head at `cell`, facing the current orientation.
    ///
    /// The previous committed footprint, recomputed from its own head and orientation,
    /// is cleared before the new one is drawn, so cells shared by both stay marked.
    /// Returns the new placement, or `None` if `cell` is not on the grid.
    pub fn on_commit<G: StyleSink + ?Sized>(
        &mut self,
        grid: &mut G,
        cell: Cell,
    ) -> Option<PlaneSelection> {
        if !grid.contains(cell) {
            trace!("ignoring commit outside of the grid at {:?}", cell);
            return None;
        }
        if let Some(previous) = self.committed.take() {
            unmark(
                grid,
                &self.shape,
                previous.head,
                previous.orientation,
                Highlight::Committed,
            );
        }
        let selection = PlaneSelection::new(cell, self.cycle.current());
        mark(
            grid,
            &self.shape,
            selection.head,
            selection.orientation,
            Highlight::Committed,
        );
        self.committed = Some(selection);
        debug!("committed plane at {}", selection);
        Some(selection)
    }

    /// Remove the preview, if any, and return to [`PlacementPhase::NoSelection`].
    fn clear_preview<G: StyleSink + ?Sized>(&mut self, grid: &mut G) {
        if let PlacementPhase::Previewing(old) = self.phase {
            unmark(grid, &self.shape, old.head, old.orientation, Highlight::Preview);
            self.phase = PlacementPhase::NoSelection;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{rectangular::RectDimensions, HighlightGrid};

    fn grid() -> HighlightGrid {
        HighlightGrid::new(RectDimensions::default())
    }

    fn marked(grid: &HighlightGrid, highlight: Highlight) -> Vec<Cell> {
        grid.cells_with(highlight).collect()
    }

    /// Head and footprint of a plane, sorted row major like `cells_with`.
    fn drawn(head: Cell, orientation: Orientation, dim: &RectDimensions) -> Vec<Cell> {
        let mut cells = Plane.footprint(head, orientation, dim);
        cells.push(head);
        cells.sort_by_key(|cell| (cell.y, cell.x));
        cells
    }

    #[test]
    fn hover_previews_at_current_orientation() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        let head = Cell::new(4, 4);

        machine.on_hover(&mut grid, head);
        assert_eq!(
            machine.phase(),
            PlacementPhase::Previewing(PlaneSelection::new(head, Orientation::North))
        );
        assert_eq!(
            marked(&grid, Highlight::Preview),
            drawn(head, Orientation::North, grid.dimensions())
        );

        machine.on_hover_end(&mut grid, head);
        assert_eq!(machine.phase(), PlacementPhase::NoSelection);
        assert!(marked(&grid, Highlight::Preview).is_empty());
    }

    #[test]
    fn hover_end_on_another_cell_is_ignored() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        machine.on_hover(&mut grid, Cell::new(4, 4));
        machine.on_hover_end(&mut grid, Cell::new(5, 5));
        assert!(machine.preview().is_some());
        assert_eq!(marked(&grid, Highlight::Preview).len(), 10);
    }

    #[test]
    fn moving_between_cells_leaves_no_stale_preview() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        machine.on_hover(&mut grid, Cell::new(2, 2));
        // Hover end for the first cell never arrives.
        machine.on_hover(&mut grid, Cell::new(6, 5));
        assert_eq!(
            marked(&grid, Highlight::Preview),
            drawn(Cell::new(6, 5), Orientation::North, grid.dimensions())
        );
    }

    #[test]
    fn rotate_redraws_preview_around_same_head() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        let head = Cell::new(4, 4);
        machine.on_hover(&mut grid, head);

        assert_eq!(machine.on_rotate(&mut grid), Orientation::East);
        assert_eq!(
            machine.preview(),
            Some(PlaneSelection::new(head, Orientation::East))
        );
        assert_eq!(
            marked(&grid, Highlight::Preview),
            drawn(head, Orientation::East, grid.dimensions())
        );
    }

    #[test]
    fn four_rotations_restore_the_preview() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        machine.on_hover(&mut grid, Cell::new(3, 6));
        let before = marked(&grid, Highlight::Preview);
        for _ in 0..4 {
            machine.on_rotate(&mut grid);
        }
        assert_eq!(machine.orientation(), Orientation::North);
        assert_eq!(marked(&grid, Highlight::Preview), before);
    }

    #[test]
    fn rotate_without_hover_only_advances() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        assert_eq!(machine.on_rotate(&mut grid), Orientation::East);
        assert!(marked(&grid, Highlight::Preview).is_empty());

        machine.on_hover(&mut grid, Cell::new(5, 5));
        assert_eq!(
            machine.preview().map(|s| s.orientation()),
            Some(Orientation::East)
        );
    }

    #[test]
    fn first_commit_marks_footprint() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        let head = Cell::new(4, 4);
        machine.on_hover(&mut grid, head);

        let placed = machine.on_commit(&mut grid, head).unwrap();
        assert_eq!(placed.head_address().to_string(), "E5");
        assert_eq!(placed.orientation(), Orientation::North);
        assert_eq!(placed.to_string(), "E5 N");
        assert_eq!(machine.committed(), Some(placed));
        assert_eq!(
            marked(&grid, Highlight::Committed),
            drawn(head, Orientation::North, grid.dimensions())
        );
        // The preview is independent of the commit.
        assert_eq!(marked(&grid, Highlight::Preview).len(), 10);
    }

    #[test]
    fn recommit_is_idempotent() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        let head = Cell::new(4, 4);
        machine.on_hover(&mut grid, head);
        machine.on_commit(&mut grid, head);
        let once = marked(&grid, Highlight::Committed);
        machine.on_commit(&mut grid, head);
        machine.on_hover_end(&mut grid, head);

        assert_eq!(marked(&grid, Highlight::Committed), once);
        assert!(marked(&grid, Highlight::Preview).is_empty());
    }

    #[test]
    fn commit_replaces_previous_placement() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        let first = Cell::new(4, 2);
        machine.on_commit(&mut grid, first);
        machine.on_rotate(&mut grid);
        machine.on_rotate(&mut grid);
        // South facing plane at E7 shares its tail row with the first plane.
        let second = Cell::new(4, 6);
        let placed = machine.on_commit(&mut grid, second).unwrap();

        assert_eq!(placed, PlaneSelection::new(second, Orientation::South));
        assert_eq!(
            marked(&grid, Highlight::Committed),
            drawn(second, Orientation::South, grid.dimensions())
        );
        let shared = Cell::new(4, 5);
        assert!(Plane.occupies(first, Orientation::North, shared));
        assert!(grid.has_highlight(shared, Highlight::Committed));
    }

    #[test]
    fn commit_off_grid_is_ignored() {
        let mut grid = grid();
        let mut machine = PlacementMachine::new();
        machine.on_commit(&mut grid, Cell::new(1, 1));
        assert_eq!(machine.on_commit(&mut grid, Cell::new(10, 1)), None);
        assert_eq!(
            machine.committed(),
            Some(PlaneSelection::new(Cell::new(1, 1), Orientation::North))
        );
    }

    #[test]
    fn events_dispatch_to_handlers() {
        let mut grid = grid();
        let mut machine = PlacementMachine::with_shape(
            Plane,
            OrientationCycle::starting_at(Orientation::West),
        );
        let head = Cell::new(0, 2);
        assert_eq!(machine.handle(&mut grid, PointerEvent::Hover(head)), None);
        assert_eq!(machine.handle(&mut grid, PointerEvent::Rotate), None);
        assert_eq!(machine.orientation(), Orientation::North);
        let placed = machine.handle(&mut grid, PointerEvent::Commit(head));
        assert_eq!(placed, Some(PlaneSelection::new(head, Orientation::North)));
        assert_eq!(machine.handle(&mut grid, PointerEvent::HoverEnd(head)), None);
        assert_eq!(machine.phase(), PlacementPhase::NoSelection);
    }

    #[test]
    fn fits_within_reports_clipping() {
        let dim = RectDimensions::default();
        assert!(PlaneSelection::new(Cell::new(4, 4), Orientation::North).fits_within(&dim));
        assert!(!PlaneSelection::new(Cell::new(9, 0), Orientation::North).fits_within(&dim));
        assert_eq!(
            PlaneSelection::new(Cell::new(9, 0), Orientation::North)
                .footprint(&dim)
                .len(),
            6
        );
    }
}
