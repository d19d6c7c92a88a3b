//! Collection sorter.
//!
//! Stable, in place, keyed on `model::compare`. Elements that compare equal
//! keep their relative order, which keeps round trips after a sort
//! deterministic.

use std::cmp::Ordering;

use crate::model::{compare, PointVariant};

/// Sort a point collection in place.
#[inline]
pub fn sort_points(points: &mut [PointVariant]) {
    sort_by_point(points, |p| p);
}

/// Stable sort of arbitrary items by the point each one carries.
pub fn sort_by_point<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &PointVariant,
{
    // slice::sort_by is a stable merge sort
    items.sort_by(|a, b| compare(key(a), key(b)));
}

/// True when no adjacent pair is out of order.
pub fn is_sorted(points: &[PointVariant]) -> bool {
    points
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
