//! YAML backend: a sequence of tagged mappings.
//!
//! ```text
//! - !Point
//!   x: 1
//!   y: 2
//! - !Point3D
//!   x: 3
//!   y: 4
//!   z: 5
//! ```
//!
//! The tag is read separately from the fields, so a `!Point` carrying `z` or a
//! `!Point3D` without one is a `TypeMismatch`, the same as in JSON and XML.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::model::{PointKind, PointVariant};

use super::record::{from_records, PointRecord};
use super::{DecodeCfg, Format};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Coords {
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<i32>,
}

/// One element; the variant name is the YAML tag.
#[derive(Debug, Serialize, Deserialize)]
enum Tagged {
    Point(Coords),
    Point3D(Coords),
}

impl From<&PointVariant> for Tagged {
    fn from(p: &PointVariant) -> Self {
        let coords = Coords {
            x: p.x(),
            y: p.y(),
            z: p.z(),
        };
        match p.kind() {
            PointKind::Point => Tagged::Point(coords),
            PointKind::Point3D => Tagged::Point3D(coords),
        }
    }
}

impl From<Tagged> for PointRecord {
    fn from(t: Tagged) -> Self {
        let (kind, c) = match t {
            Tagged::Point(c) => (PointKind::Point, c),
            Tagged::Point3D(c) => (PointKind::Point3D, c),
        };
        PointRecord {
            kind: kind.name().to_string(),
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

pub(super) fn encode(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    let tagged: Vec<Tagged> = points.iter().map(Tagged::from).collect();
    serde_yaml::to_string(&tagged)
        .map(String::into_bytes)
        .map_err(|e| CodecError::payload(Format::Yaml, e))
}

pub(super) fn decode(bytes: &[u8], _cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let tagged: Vec<Tagged> =
        serde_yaml::from_slice(bytes).map_err(|e| CodecError::payload(Format::Yaml, e))?;
    from_records(Format::Yaml, tagged.into_iter().map(PointRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{Point, Point3D};

    #[test]
    fn elements_carry_yaml_tags() {
        let pts: Vec<PointVariant> = vec![Point::new(1, 2).into(), Point3D::new(3, 4, 5).into()];
        let text = String::from_utf8(encode(&pts).unwrap()).unwrap();
        assert!(text.contains("!Point\n"));
        assert!(text.contains("!Point3D\n"));
        assert!(!text.contains("null"));
        assert_eq!(decode(text.as_bytes(), DecodeCfg::default()).unwrap(), pts);
    }

    #[test]
    fn flat_tag_with_depth_is_a_mismatch() {
        let doc = b"- !Point\n  x: 1\n  y: 2\n  z: 9\n";
        let err = decode(doc, DecodeCfg::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(matches!(
            err,
            CodecError::TypeMismatch {
                index: 0,
                declared: PointKind::Point,
                ..
            }
        ));
    }

    #[test]
    fn deep_tag_without_depth_is_a_mismatch() {
        let doc = b"- !Point\n  x: 0\n  y: 0\n- !Point3D\n  x: 1\n  y: 2\n";
        let err = decode(doc, DecodeCfg::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TypeMismatch {
                index: 1,
                declared: PointKind::Point3D,
                ..
            }
        ));
    }

    #[test]
    fn unknown_tag_or_field_is_malformed() {
        let doc = b"- !Oval\n  x: 1\n  y: 2\n";
        let err = decode(doc, DecodeCfg::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        let doc = b"- !Point\n  x: 1\n  y: 2\n  w: 3\n";
        let err = decode(doc, DecodeCfg::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    }
}
