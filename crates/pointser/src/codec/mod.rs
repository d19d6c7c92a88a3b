//! Format dispatcher.
//!
//! Purpose
//! - Route a point collection to the codec for a declared format and back.
//! - Keep per-format code out of the call sites: `STRATEGIES` maps each
//!   `Format` to an `(encode, decode)` pair, and both directions go through one
//!   lookup. Adding a format means adding a module and one table row.
//!
//! Backends
//! - `custom`: the line format owned by this crate (`(Point-1:2)`).
//! - `binary`: bincode over `PointVariant`; the variant index is the tag.
//! - `markup`: XML (`ArrayOfPoint`) and a SOAP-style envelope around it.
//! - `json`: array of objects with an `@type` key.
//! - `yaml`: sequence of `!Point` / `!Point3D` tagged mappings.
//!
//! Every call is self-contained; nothing is cached between calls.

pub mod custom;

mod binary;
mod json;
mod markup;
mod record;
mod yaml;

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::error::CodecError;
use crate::model::PointVariant;

/// Closed set of supported formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Binary,
    Soap,
    Xml,
    Json,
    Yaml,
    Custom,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Binary,
        Format::Soap,
        Format::Xml,
        Format::Json,
        Format::Yaml,
        Format::Custom,
    ];

    /// Identifier accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Format::Binary => "binary",
            Format::Soap => "soap",
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Custom => "custom",
        }
    }

    /// Whether the encoded form is UTF-8 text.
    pub fn is_textual(self) -> bool {
        !matches!(self, Format::Binary)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CodecError::UnsupportedFormat(s.to_string()))
    }
}

/// How the custom codec treats lines it cannot parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Reject the whole input at the first bad line.
    #[default]
    Strict,
    /// Skip bad lines (logged at `warn`). The result may be shorter than the input.
    Lenient,
}

/// Decoder configuration. Only the custom codec consults it; the serde
/// backends are always strict.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeCfg {
    pub mode: DecodeMode,
}

impl DecodeCfg {
    pub fn lenient() -> Self {
        Self {
            mode: DecodeMode::Lenient,
        }
    }
}

type EncodeFn = fn(&[PointVariant]) -> Result<Vec<u8>, CodecError>;
type DecodeFn = fn(&[u8], DecodeCfg) -> Result<Vec<PointVariant>, CodecError>;

/// One row of the strategy table.
struct CodecEntry {
    format: Format,
    encode: EncodeFn,
    decode: DecodeFn,
}

static STRATEGIES: [CodecEntry; 6] = [
    CodecEntry {
        format: Format::Binary,
        encode: binary::encode,
        decode: binary::decode,
    },
    CodecEntry {
        format: Format::Soap,
        encode: markup::encode_soap,
        decode: markup::decode_soap,
    },
    CodecEntry {
        format: Format::Xml,
        encode: markup::encode_xml,
        decode: markup::decode_xml,
    },
    CodecEntry {
        format: Format::Json,
        encode: json::encode,
        decode: json::decode,
    },
    CodecEntry {
        format: Format::Yaml,
        encode: yaml::encode,
        decode: yaml::decode,
    },
    CodecEntry {
        format: Format::Custom,
        encode: custom::encode_bytes,
        decode: custom::decode_bytes,
    },
];

fn strategy(format: Format) -> Result<&'static CodecEntry, CodecError> {
    STRATEGIES
        .iter()
        .find(|e| e.format == format)
        .ok_or_else(|| CodecError::UnsupportedFormat(format.name().to_string()))
}

/// Encode `points` in the format named `format` (e.g. `"json"`).
pub fn encode(format: &str, points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    encode_as(format.parse()?, points)
}

/// Decode `bytes` in the format named `format`, strictly.
pub fn decode(format: &str, bytes: &[u8]) -> Result<Vec<PointVariant>, CodecError> {
    decode_as(format.parse()?, bytes)
}

pub fn encode_as(format: Format, points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    let entry = strategy(format)?;
    let bytes = (entry.encode)(points)?;
    tracing::debug!(%format, points = points.len(), bytes = bytes.len(), "encoded");
    Ok(bytes)
}

#[inline]
pub fn decode_as(format: Format, bytes: &[u8]) -> Result<Vec<PointVariant>, CodecError> {
    decode_with(format, bytes, DecodeCfg::default())
}

pub fn decode_with(
    format: Format,
    bytes: &[u8],
    cfg: DecodeCfg,
) -> Result<Vec<PointVariant>, CodecError> {
    let entry = strategy(format)?;
    let points = (entry.decode)(bytes, cfg)?;
    tracing::debug!(%format, bytes = bytes.len(), points = points.len(), "decoded");
    Ok(points)
}

/// Encode into a caller-owned sink. A sink failure mid-write leaves it truncated.
pub fn write_to<W: Write + ?Sized>(
    format: Format,
    points: &[PointVariant],
    sink: &mut W,
) -> Result<(), CodecError> {
    let bytes = encode_as(format, points)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Decode everything a caller-owned source yields.
pub fn read_from<R: Read + ?Sized>(
    format: Format,
    source: &mut R,
    cfg: DecodeCfg,
) -> Result<Vec<PointVariant>, CodecError> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    decode_with(format, &bytes, cfg)
}
