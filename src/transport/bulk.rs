use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::session::{self, SessionJson};
use super::time::decode_wire_time;
use super::{bulk_status_from_wire, DecodeError};
use crate::domain::{BulkSession, Page};

pub const RESOURCE: &str = "bulks";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkSessionJson {
    id: u64,
    status: String,
    items_processed: u32,
    items_total: u32,
    created_at: String,
    session: SessionJson,
    text: String,
}

pub fn list_request(page: u32, limit: u32) -> RestRequest {
    RestRequest::get(RESOURCE)
        .with_query_param("page", page.to_string())
        .with_query_param("limit", limit.to_string())
}

pub fn decode_bulk_sessions_page_json(json: &str) -> Result<Page<BulkSession>, DecodeError> {
    page::decode_page(json, bulk_session_from_wire)
}

fn bulk_session_from_wire(wire: BulkSessionJson) -> Result<BulkSession, DecodeError> {
    Ok(BulkSession {
        id: wire.id,
        status: bulk_status_from_wire(&wire.status)?,
        items_processed: wire.items_processed,
        items_total: wire.items_total,
        created_at: decode_wire_time(&wire.created_at)?,
        session: session::session_from_wire(wire.session)?,
        text: wire.text,
    })
}
