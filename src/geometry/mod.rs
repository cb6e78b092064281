//! Grid geometry: transforms, constellations, adjacency and vision.
//!
//! ## Key Types
//!
//! - `Coordinate` lives in `core`; this module operates on it
//! - `Constellation`: validated, non-empty piece shape
//! - `Transform` / `Rotation`: rotation and mirror descriptor
//!
//! Free functions mirror the constellation methods for callers that hold
//! raw coordinate slices.

mod adjacency;
mod constellation;
mod transform;
mod vision;

pub use adjacency::{
    adjacent_coordinates, adjacent_coordinates_of_constellation, diagonal_coordinates,
    DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS,
};
pub use constellation::Constellation;
pub use transform::{
    add, mirror_along_x_axis, mirror_along_y_axis, normalise, rotate_clockwise,
    rotate_counter_clockwise, separate, transform, translate_to, CoordinateList, Rotation,
    Transform,
};
pub use vision::{half_width, reveal_area, vision_disc};
