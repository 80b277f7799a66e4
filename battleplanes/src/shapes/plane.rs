// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::{
    orientation::Orientation,
    shapes::{Offset, Shape},
};

/// Number of cells a plane occupies besides its head.
pub const PLANE_CELLS: usize = 9;

// Wing row, body, tail. The head sits in front of the middle of the wing row, and
// rows grow downward, so a north-facing plane trails towards larger `y`. Each table
// is the previous one turned a quarter clockwise: `(dx, dy) -> (-dy, dx)`.
#[rustfmt::skip]
const NORTH: [Offset; PLANE_CELLS] = [
    (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1),
    (0, 2),
    (-1, 3), (0, 3), (1, 3),
];
#[rustfmt::skip]
const EAST: [Offset; PLANE_CELLS] = [
    (-1, -2), (-1, -1), (-1, 0), (-1, 1), (-1, 2),
    (-2, 0),
    (-3, -1), (-3, 0), (-3, 1),
];
#[rustfmt::skip]
const SOUTH: [Offset; PLANE_CELLS] = [
    (2, -1), (1, -1), (0, -1), (-1, -1), (-2, -1),
    (0, -2),
    (1, -3), (0, -3), (-1, -3),
];
#[rustfmt::skip]
const WEST: [Offset; PLANE_CELLS] = [
    (1, 2), (1, 1), (1, 0), (1, -1), (1, -2),
    (2, 0),
    (3, 1), (3, 0), (3, -1),
];

/// The plane shape: a five-cell wing row, a one-cell body, and a three-cell tail
/// trailing behind the head.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Plane;

impl Shape for Plane {
    fn offsets(&self, orientation: Orientation) -> &[Offset] {
        match orientation {
            Orientation::North => &NORTH,
            Orientation::East => &EAST,
            Orientation::South => &SOUTH,
            Orientation::West => &WEST,
        }
    }
}
