//! Point value types.
//!
//! - `Point`, `Point3D`: plain integer coordinates, public fields.
//! - `PointVariant`: the collection element; one case per point type.
//! - `PointKind`: the variant tag on its own, with its wire name and arity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Location in 2D integer space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Location in 3D integer space; a `Point` plus depth `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The planar part. Explicit projection; drops `z`.
    #[inline]
    pub fn base(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Element of a point collection.
///
/// Serde's default (externally tagged) representation is the tag the binary
/// backend persists: the variant index precedes the coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointVariant {
    Point(Point),
    Point3D(Point3D),
}

impl PointVariant {
    #[inline]
    pub fn kind(&self) -> PointKind {
        match self {
            PointVariant::Point(_) => PointKind::Point,
            PointVariant::Point3D(_) => PointKind::Point3D,
        }
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        matches!(self, PointVariant::Point3D(_))
    }

    #[inline]
    pub fn x(&self) -> i32 {
        match self {
            PointVariant::Point(p) => p.x,
            PointVariant::Point3D(p) => p.x,
        }
    }

    #[inline]
    pub fn y(&self) -> i32 {
        match self {
            PointVariant::Point(p) => p.y,
            PointVariant::Point3D(p) => p.y,
        }
    }

    /// Depth, if this is the 3D case.
    #[inline]
    pub fn z(&self) -> Option<i32> {
        match self {
            PointVariant::Point(_) => None,
            PointVariant::Point3D(p) => Some(p.z),
        }
    }

    /// View any variant through the base `Point` contract.
    #[inline]
    pub fn as_point(&self) -> Point {
        match self {
            PointVariant::Point(p) => *p,
            PointVariant::Point3D(p) => p.base(),
        }
    }
}

impl From<Point> for PointVariant {
    fn from(p: Point) -> Self {
        PointVariant::Point(p)
    }
}

impl From<Point3D> for PointVariant {
    fn from(p: Point3D) -> Self {
        PointVariant::Point3D(p)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3D({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for PointVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointVariant::Point(p) => p.fmt(f),
            PointVariant::Point3D(p) => p.fmt(f),
        }
    }
}

/// Variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    Point,
    Point3D,
}

impl PointKind {
    /// Tag spelling shared by every textual format.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            PointKind::Point => "Point",
            PointKind::Point3D => "Point3D",
        }
    }

    /// Number of coordinates the variant carries.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            PointKind::Point => 2,
            PointKind::Point3D => 3,
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match on the tag spelling.
impl FromStr for PointKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(PointKind::Point),
            "Point3D" => Ok(PointKind::Point3D),
            _ => Err(()),
        }
    }
}
