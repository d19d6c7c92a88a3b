//! Custom line format (`.myml`).
//!
//! Grammar, one record per line, input ends at end-of-input:
//!
//! ```text
//! (Point-<x>:<y>)
//! (Point3D-<x>:<y>:<z>)
//! ```
//!
//! Encoding writes canonical decimal integers and terminates every record with
//! `\n`. Decoding strips one `(` and one `)`, splits at the first `-` into tag
//! and fields (so `(Point--1:2)` reads as x = -1), then splits the fields on `:`.
//! A trailing `\r` on any line (CRLF files, or a last line ending in a bare
//! `\r`) and a missing final newline are tolerated.
//!
//! ```
//! use pointser::codec::custom;
//! use pointser::{Point, Point3D, PointVariant};
//!
//! let pts: Vec<PointVariant> = vec![Point::new(1, 2).into(), Point3D::new(3, 4, 5).into()];
//! let text = custom::encode(&pts);
//! assert_eq!(text, "(Point-1:2)\n(Point3D-3:4:5)\n");
//! assert_eq!(custom::decode(&text).unwrap(), pts);
//! ```

use crate::error::{CodecError, RecordFault};
use crate::model::{Point, Point3D, PointKind, PointVariant};

use super::{DecodeCfg, DecodeMode, Format};

/// Render one record, without line terminator.
pub fn record(p: &PointVariant) -> String {
    match p {
        PointVariant::Point(p) => format!("(Point-{}:{})", p.x, p.y),
        PointVariant::Point3D(p) => format!("(Point3D-{}:{}:{})", p.x, p.y, p.z),
    }
}

/// Encode a collection; one `\n`-terminated record per element, input order.
pub fn encode(points: &[PointVariant]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for p in points {
        out.push_str(&record(p));
        out.push('\n');
    }
    out
}

/// Strict decode: the first malformed line fails the whole input.
#[inline]
pub fn decode(text: &str) -> Result<Vec<PointVariant>, CodecError> {
    decode_with(text, DecodeCfg::default())
}

pub fn decode_with(text: &str, cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        // lines() leaves a lone `\r` on an unterminated last line
        let line = line.trim_end_matches('\r');
        match parse_record(line) {
            Ok(p) => out.push(p),
            Err(fault) => match cfg.mode {
                DecodeMode::Strict => {
                    return Err(CodecError::MalformedRecord {
                        line: idx + 1,
                        record: line.to_string(),
                        fault,
                    })
                }
                DecodeMode::Lenient => {
                    tracing::warn!(line = idx + 1, record = line, %fault, "skipping record");
                }
            },
        }
    }
    Ok(out)
}

/// Parse a single record. `line` must not contain the `\n` terminator.
pub fn parse_record(line: &str) -> Result<PointVariant, RecordFault> {
    if line.is_empty() {
        return Err(RecordFault::Blank);
    }
    let inner = line
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or(RecordFault::Parens)?;
    let (tag, rest) = inner
        .split_once('-')
        .ok_or(RecordFault::MissingSeparator)?;
    let kind: PointKind = tag
        .parse()
        .map_err(|_| RecordFault::UnknownTag(tag.to_string()))?;

    let fields: Vec<&str> = rest.split(':').collect();
    if fields.len() != kind.arity() {
        return Err(RecordFault::FieldCount {
            kind,
            expected: kind.arity(),
            found: fields.len(),
        });
    }
    let mut coords = [0i32; 3];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| RecordFault::BadInteger(field.to_string()))?;
    }
    Ok(match kind {
        PointKind::Point => Point::new(coords[0], coords[1]).into(),
        PointKind::Point3D => Point3D::new(coords[0], coords[1], coords[2]).into(),
    })
}

pub(super) fn encode_bytes(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    Ok(encode(points).into_bytes())
}

pub(super) fn decode_bytes(bytes: &[u8], cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let text = std::str::from_utf8(bytes).map_err(|e| CodecError::payload(Format::Custom, e))?;
    decode_with(text, cfg)
}
