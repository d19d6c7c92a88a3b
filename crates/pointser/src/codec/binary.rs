//! Binary backend: bincode over `Vec<PointVariant>`.
//!
//! Fixed-width integers, a `u64` length prefix, and a `u32` variant index per
//! element. Trailing bytes are rejected so a concatenated or padded file does
//! not decode as a shorter collection.

use bincode::Options;

use crate::error::CodecError;
use crate::model::PointVariant;

use super::{DecodeCfg, Format};

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

pub(super) fn encode(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    options()
        .serialize(points)
        .map_err(|e| CodecError::payload(Format::Binary, e))
}

pub(super) fn decode(bytes: &[u8], _cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    options()
        .deserialize(bytes)
        .map_err(|e| CodecError::payload(Format::Binary, e))
}
