//! Point model: the flat/3D variant pair and its ordering rule.
//!
//! Purpose
//! - Represent "a `Point3D` is a `Point` with depth" as a two-case sum type.
//!   Consumers match on the case; nothing ever narrows a `Point3D` into a
//!   `Point` implicitly.
//! - Provide one total order (`compare`) shared by the sorter and by tests.
//!
//! Ordering policy
//! - `x`, then `y`, then depth. A flat point has no depth, and absent depth sorts
//!   before every real depth, so `Point(x, y) < Point3D(x, y, z)` for all `z`.

mod order;
mod types;

pub use order::compare;
pub use types::{Point, Point3D, PointKind, PointVariant};

#[cfg(test)]
mod tests;
