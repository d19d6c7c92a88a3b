//! Polymorphic point persistence.
//!
//! A collection mixes flat `Point`s and `Point3D`s. Every codec in this crate
//! writes and reads that collection so that each element comes back as the
//! same variant with the same fields, in the same order.
//!
//! Layout
//! - `model`: point types, the variant sum type, and the ordering rule.
//! - `sort`: stable in-place sort over the ordering rule.
//! - `codec`: the format dispatcher, the bespoke line codec (`custom`), and the
//!   adapters around serde backends (binary, SOAP-style XML, XML, JSON, YAML).
//! - `sample`: seeded sample collections for front ends and benches.
//! - `error`: the engine-wide error type.
//!
//! Nothing here opens files or keeps state between calls; callers own the
//! collection and the byte sink/source.

pub mod codec;
pub mod error;
pub mod model;
pub mod sample;
pub mod sort;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use codec::{
    decode, decode_as, decode_with, encode, encode_as, read_from, write_to, DecodeCfg,
    DecodeMode, Format,
};
pub use error::{CodecError, ErrorKind, RecordFault};
pub use model::{compare, Point, Point3D, PointKind, PointVariant};
pub use sort::{is_sorted, sort_by_point, sort_points};

/// Common exports for front ends.
pub mod prelude {
    pub use crate::codec::{custom, DecodeCfg, DecodeMode, Format};
    pub use crate::error::{CodecError, ErrorKind};
    pub use crate::model::{compare, Point, Point3D, PointKind, PointVariant};
    pub use crate::sample::{generate, KindWeights, ReplayToken, SampleCfg};
    pub use crate::sort::{is_sorted, sort_points};
}
