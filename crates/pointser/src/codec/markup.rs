//! XML and SOAP-style XML backends (quick-xml + serde).
//!
//! XML document:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <ArrayOfPoint><Point type="Point"><x>1</x><y>2</y></Point>
//!   <Point type="Point3D"><x>3</x><y>4</y><z>5</z></Point></ArrayOfPoint>
//! ```
//!
//! The SOAP flavour wraps the same `ArrayOfPoint` in `Envelope/Body`. Elements
//! are always named `Point`; the `type` attribute selects the variant.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::model::PointVariant;

use super::record::{from_records, to_records, PointRecord};
use super::{DecodeCfg, Format};

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "ArrayOfPoint")]
struct ArrayOfPoint {
    #[serde(rename = "Point", default)]
    points: Vec<PointRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "Envelope")]
struct SoapEnvelope {
    #[serde(rename = "@xmlns", default)]
    xmlns: String,
    #[serde(rename = "Body")]
    body: SoapBody,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SoapBody {
    #[serde(rename = "ArrayOfPoint", default)]
    array: ArrayOfPoint,
}

fn write_doc<T: Serialize>(format: Format, doc: &T) -> Result<Vec<u8>, CodecError> {
    let body = quick_xml::se::to_string(doc).map_err(|e| CodecError::payload(format, e))?;
    let mut out = String::with_capacity(XML_DECL.len() + body.len() + 1);
    out.push_str(XML_DECL);
    out.push_str(&body);
    out.push('\n');
    Ok(out.into_bytes())
}

fn read_doc<T: for<'de> Deserialize<'de>>(format: Format, bytes: &[u8]) -> Result<T, CodecError> {
    let text = std::str::from_utf8(bytes).map_err(|e| CodecError::payload(format, e))?;
    quick_xml::de::from_str(text).map_err(|e| CodecError::payload(format, e))
}

pub(super) fn encode_xml(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    let doc = ArrayOfPoint {
        points: to_records(points),
    };
    write_doc(Format::Xml, &doc)
}

pub(super) fn decode_xml(bytes: &[u8], _cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let doc: ArrayOfPoint = read_doc(Format::Xml, bytes)?;
    from_records(Format::Xml, doc.points)
}

pub(super) fn encode_soap(points: &[PointVariant]) -> Result<Vec<u8>, CodecError> {
    let doc = SoapEnvelope {
        xmlns: SOAP_ENV_NS.to_string(),
        body: SoapBody {
            array: ArrayOfPoint {
                points: to_records(points),
            },
        },
    };
    write_doc(Format::Soap, &doc)
}

pub(super) fn decode_soap(bytes: &[u8], _cfg: DecodeCfg) -> Result<Vec<PointVariant>, CodecError> {
    let doc: SoapEnvelope = read_doc(Format::Soap, bytes)?;
    from_records(Format::Soap, doc.body.array.points)
}
