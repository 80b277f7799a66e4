//! Property-based invariant tests for plane footprints.
//!
//! 1. An anchor with three cells of room on every side yields all nine cells
//! 2. The four orientations of one anchor are quarter turns of each other
//! 3. Clipped footprints only hold in-bounds cells
//! 4. Growing the grid never shrinks a footprint
//! 5. Addresses and cells convert back and forth

use battleplanes::{
    board::{rectangular::RectDimensions, Cell, GridQuery},
    shapes::{Plane, Shape, PLANE_CELLS},
    Orientation,
};
use proptest::prelude::*;

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    (0usize..4).prop_map(Orientation::from_index)
}

/// Dimensions plus an anchor inside them.
fn grid_and_anchor() -> impl Strategy<Value = (RectDimensions, Cell)> {
    (1usize..30, 1usize..30).prop_flat_map(|(w, h)| {
        (0..w, 0..h).prop_map(move |(x, y)| (RectDimensions::new(w, h), Cell::new(x, y)))
    })
}

/// Offsets of the footprint relative to the anchor.
fn relative(anchor: Cell, cells: &[Cell]) -> Vec<(isize, isize)> {
    cells
        .iter()
        .map(|c| (c.x as isize - anchor.x as isize, c.y as isize - anchor.y as isize))
        .collect()
}

proptest! {
    #[test]
    fn interior_anchor_has_full_footprint(
        x in 3usize..40,
        y in 3usize..40,
        orientation in orientation_strategy(),
    ) {
        let dim = RectDimensions::new(x + 4, y + 4);
        let footprint = Plane.footprint(Cell::new(x, y), orientation, &dim);
        prop_assert_eq!(footprint.len(), PLANE_CELLS);
        prop_assert!(!Plane.clipped(Cell::new(x, y), orientation, &dim));
    }

    #[test]
    fn orientations_are_quarter_turns(x in 3usize..40, y in 3usize..40) {
        let dim = RectDimensions::new(x + 4, y + 4);
        let anchor = Cell::new(x, y);
        for &orientation in Orientation::ALL {
            let here = relative(anchor, &Plane.footprint(anchor, orientation, &dim));
            let next = relative(anchor, &Plane.footprint(anchor, orientation.next(), &dim));
            let turned: Vec<_> = here.iter().map(|&(dx, dy)| (-dy, dx)).collect();
            prop_assert_eq!(turned, next);
        }
    }

    #[test]
    fn clipped_footprint_stays_in_bounds(
        (dim, anchor) in grid_and_anchor(),
        orientation in orientation_strategy(),
    ) {
        let footprint = Plane.footprint(anchor, orientation, &dim);
        prop_assert!(footprint.len() <= PLANE_CELLS);
        for cell in &footprint {
            prop_assert!(dim.contains(*cell));
            prop_assert!(Plane.occupies(anchor, orientation, *cell));
        }
        prop_assert_eq!(
            Plane.clipped(anchor, orientation, &dim),
            footprint.len() < PLANE_CELLS
        );
    }

    #[test]
    fn growing_the_grid_never_shrinks_the_footprint(
        (dim, anchor) in grid_and_anchor(),
        grow_w in 0usize..5,
        grow_h in 0usize..5,
        orientation in orientation_strategy(),
    ) {
        let bigger = RectDimensions::new(dim.width() + grow_w, dim.height() + grow_h);
        let small = Plane.footprint(anchor, orientation, &dim);
        let large = Plane.footprint(anchor, orientation, &bigger);
        prop_assert!(small.len() <= large.len());
        for cell in &small {
            prop_assert!(large.contains(cell));
        }
    }

    #[test]
    fn addresses_are_bijective(x in 0usize..100_000, y in 0usize..100_000) {
        let cell = Cell::new(x, y);
        let text = cell.address().to_string();
        prop_assert_eq!(text.parse::<Cell>(), Ok(cell));
        prop_assert_eq!(cell.address().number(), y + 1);
    }
}
