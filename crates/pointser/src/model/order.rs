//! Total order over point variants.

use std::cmp::Ordering;

use super::types::PointVariant;

/// Compare two variants: `x`, then `y`, then depth (absent depth first).
///
/// Total and transitive; returns `Equal` only for identical values, because a
/// flat point and a 3D point never tie on depth.
pub fn compare(a: &PointVariant, b: &PointVariant) -> Ordering {
    a.x()
        .cmp(&b.x())
        .then_with(|| a.y().cmp(&b.y()))
        // `None < Some(_)` is exactly the absent-depth-first rule.
        .then_with(|| a.z().cmp(&b.z()))
}

impl Ord for PointVariant {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for PointVariant {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
