use std::cmp::Ordering;

use super::*;

fn p(x: i32, y: i32) -> PointVariant {
    Point::new(x, y).into()
}

fn p3(x: i32, y: i32, z: i32) -> PointVariant {
    Point3D::new(x, y, z).into()
}

#[test]
fn primary_and_secondary_keys() {
    assert_eq!(compare(&p(1, 9), &p(2, 0)), Ordering::Less);
    assert_eq!(compare(&p(2, 1), &p(2, 0)), Ordering::Greater);
    // x dominates depth and variant
    assert_eq!(compare(&p3(0, 5, 100), &p(1, 0)), Ordering::Less);
    assert_eq!(compare(&p(-3, 4), &p3(-4, 4, 4)), Ordering::Greater);
}

#[test]
fn depth_breaks_ties_between_3d_points() {
    assert_eq!(compare(&p3(1, 1, -1), &p3(1, 1, 0)), Ordering::Less);
    assert_eq!(compare(&p3(1, 1, 7), &p3(1, 1, 7)), Ordering::Equal);
}

#[test]
fn flat_point_sorts_before_any_depth() {
    for z in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(compare(&p(2, 3), &p3(2, 3, z)), Ordering::Less);
        assert_eq!(compare(&p3(2, 3, z), &p(2, 3)), Ordering::Greater);
    }
}

#[test]
fn equal_only_for_identical_values() {
    assert_eq!(compare(&p(0, 0), &p(0, 0)), Ordering::Equal);
    assert_ne!(compare(&p(0, 0), &p3(0, 0, 0)), Ordering::Equal);
    assert_ne!(p(0, 0), p3(0, 0, 0));
}

#[test]
fn variant_accessors() {
    let flat = p(4, -2);
    let deep = p3(4, -2, 9);
    assert!(!flat.is_3d());
    assert!(deep.is_3d());
    assert_eq!(flat.kind(), PointKind::Point);
    assert_eq!(deep.kind(), PointKind::Point3D);
    assert_eq!(flat.z(), None);
    assert_eq!(deep.z(), Some(9));
    // both answer the base contract
    assert_eq!(deep.as_point(), Point::new(4, -2));
    assert_eq!(flat.as_point(), Point::new(4, -2));
}

#[test]
fn kind_names_and_arity() {
    assert_eq!("Point".parse::<PointKind>(), Ok(PointKind::Point));
    assert_eq!("Point3D".parse::<PointKind>(), Ok(PointKind::Point3D));
    assert!("point".parse::<PointKind>().is_err());
    assert!("Oval".parse::<PointKind>().is_err());
    assert_eq!(PointKind::Point.arity(), 2);
    assert_eq!(PointKind::Point3D.arity(), 3);
}

#[test]
fn display_forms() {
    assert_eq!(p(1, 2).to_string(), "Point(1, 2)");
    assert_eq!(p3(3, -4, 5).to_string(), "Point3D(3, -4, 5)");
}

#[test]
fn ord_matches_compare() {
    let mut v = vec![p3(1, 1, 1), p(1, 1), p(0, 5)];
    v.sort();
    assert_eq!(v, vec![p(0, 5), p(1, 1), p3(1, 1, 1)]);
}
