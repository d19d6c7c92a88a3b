//! JSON backend: an array of flat records, each naming its type under `@type`.

use crate::error::CodecError;
use crate::model::PointVariant;

use super::record::{from_records, to_records, PointRecord};
use super::{DecodeCfg, Format};

pub(super) fn encode(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec_pretty(&to_records(points)).map_err(|e| CodecError::payload(Format::Json, e))
}

pub(super) fn decode(bytes: &[u8], _cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let records: Vec<PointRecord> =
        serde_json::from_slice(bytes).map_err(|e| CodecError::payload(Format::Json, e))?;
    from_records(Format::Json, records)
}
