use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::time::decode_wire_time;
use super::DecodeError;
use crate::domain::{Page, Session};

pub const RESOURCE: &str = "sessions";
pub const RESOURCE_ONE: &str = "sessions/{id}";
pub const RESOURCE_MESSAGES: &str = "sessions/{id}/messages";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionJson {
    id: u64,
    start_time: String,
    text: String,
    source: String,
    #[serde(default)]
    reference_id: Option<String>,
    price: f64,
    numbers_count: u32,
}

pub fn get_request(id: u64) -> RestRequest {
    RestRequest::get(RESOURCE_ONE).with_path_param("id", id.to_string())
}

pub fn list_request(page: u32, limit: u32) -> RestRequest {
    RestRequest::get(RESOURCE)
        .with_query_param("page", page.to_string())
        .with_query_param("limit", limit.to_string())
}

pub fn delete_request(id: u64) -> RestRequest {
    RestRequest::delete(RESOURCE_ONE).with_path_param("id", id.to_string())
}

pub fn messages_request(id: u64, page: u32, limit: u32) -> RestRequest {
    RestRequest::get(RESOURCE_MESSAGES)
        .with_path_param("id", id.to_string())
        .with_query_param("page", page.to_string())
        .with_query_param("limit", limit.to_string())
}

pub fn decode_session_json(json: &str) -> Result<Session, DecodeError> {
    let parsed: SessionJson = serde_json::from_str(json)?;
    session_from_wire(parsed)
}

pub fn decode_sessions_page_json(json: &str) -> Result<Page<Session>, DecodeError> {
    page::decode_page(json, session_from_wire)
}

pub(super) fn session_from_wire(wire: SessionJson) -> Result<Session, DecodeError> {
    Ok(Session {
        id: wire.id,
        start_time: decode_wire_time(&wire.start_time)?,
        text: wire.text,
        source: wire.source,
        reference_id: wire.reference_id,
        price: wire.price,
        numbers_count: wire.numbers_count,
    })
}
