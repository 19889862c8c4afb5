//! Transport layer: HTTP and wire-format details (serialization/deserialization).

pub mod bulk;
pub mod chat;
pub mod error;
pub mod message;
mod page;
pub mod reply;
pub mod request;
pub mod schedule;
pub mod send;
pub mod session;
mod time;

use crate::domain::{BulkSessionStatus, DeliveryStatus, MessageDirection};

pub use error::decode_api_error;
pub use request::{RestRequest, build_url};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown status code: {code:?}")]
    UnknownStatusCode { code: String },

    #[error("unknown direction code: {code:?}")]
    UnknownDirectionCode { code: String },

    #[error("unknown resource type: {value:?}")]
    UnknownResourceType { value: String },

    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid count value: {value:?}")]
    Count { value: String },
}

/// The API encodes enums as exactly one character; anything else is malformed.
fn single_code(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Some(code),
        _ => None,
    }
}

pub(crate) fn delivery_status_from_wire(value: &str) -> Result<DeliveryStatus, DecodeError> {
    single_code(value)
        .and_then(DeliveryStatus::from_code)
        .ok_or_else(|| DecodeError::UnknownStatusCode {
            code: value.to_owned(),
        })
}

pub(crate) fn direction_from_wire(value: &str) -> Result<MessageDirection, DecodeError> {
    single_code(value)
        .and_then(MessageDirection::from_code)
        .ok_or_else(|| DecodeError::UnknownDirectionCode {
            code: value.to_owned(),
        })
}

pub(crate) fn bulk_status_from_wire(value: &str) -> Result<BulkSessionStatus, DecodeError> {
    single_code(value)
        .and_then(BulkSessionStatus::from_code)
        .ok_or_else(|| DecodeError::UnknownStatusCode {
            code: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_must_be_single_characters() {
        assert_eq!(
            delivery_status_from_wire("q").unwrap(),
            DeliveryStatus::Queued
        );
        assert!(delivery_status_from_wire("qq").is_err());
        assert!(delivery_status_from_wire("").is_err());

        assert_eq!(
            direction_from_wire("i").unwrap(),
            MessageDirection::Incoming
        );
        assert!(direction_from_wire("io").is_err());

        assert_eq!(
            bulk_status_from_wire("c").unwrap(),
            BulkSessionStatus::Completed
        );
        assert!(bulk_status_from_wire("x").is_err());
    }
}
