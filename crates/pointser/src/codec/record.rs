//! Flat wire record shared by the markup and object-notation backends.
//!
//! Those formats carry a declared type name next to the coordinates
//! (`type="Point3D"` in XML, `"@type": "Point3D"` in JSON). Decoding checks the
//! declaration against the fields present; a `Point3D` without `z` or a `Point`
//! with one is a `TypeMismatch`, never a silent conversion.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::model::{Point, Point3D, PointKind, PointVariant};

use super::Format;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct PointRecord {
    /// `@` marks an attribute for the XML backend and is an ordinary key in JSON.
    #[serde(rename = "@type")]
    pub kind: String,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
}

impl From<&PointVariant> for PointRecord {
    fn from(p: &PointVariant) -> Self {
        Self {
            kind: p.kind().name().to_string(),
            x: p.x(),
            y: p.y(),
            z: p.z(),
        }
    }
}

impl PointRecord {
    /// Rebuild the variant the record declares. `index` is the element position.
    pub fn into_variant(self, format: Format, index: usize) -> Result<PointVariant, CodecError> {
        let declared: PointKind = self.kind.parse().map_err(|_| {
            CodecError::payload(
                format,
                format!("element {index} has unknown type `{}`", self.kind),
            )
        })?;
        match (declared, self.z) {
            (PointKind::Point, None) => Ok(Point::new(self.x, self.y).into()),
            (PointKind::Point3D, Some(z)) => Ok(Point3D::new(self.x, self.y, z).into()),
            (PointKind::Point, Some(_)) => Err(CodecError::TypeMismatch {
                index,
                declared,
                detail: "but carries a depth field",
            }),
            (PointKind::Point3D, None) => Err(CodecError::TypeMismatch {
                index,
                declared,
                detail: "but has no depth field",
            }),
        }
    }
}

pub(super) fn to_records(points: &[PointVariant]) -> Vec<PointRecord> {
    points.iter().map(PointRecord::from).collect()
}

pub(super) fn from_records(
    format: Format,
    records: Vec<PointRecord>,
) -> Result<Vec<PointVariant>, CodecError> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_variant(format, i))
        .collect()
}
