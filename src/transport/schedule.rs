use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::session::{self, SessionJson};
use super::time::decode_wire_time;
use super::DecodeError;
use crate::domain::{Page, Schedule};

pub const RESOURCE: &str = "schedules";
pub const RESOURCE_ONE: &str = "schedules/{id}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleJson {
    id: u64,
    #[serde(default)]
    next_send: Option<String>,
    #[serde(default)]
    rrule: Option<String>,
    session: SessionJson,
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

pub fn decode_schedule_json(json: &str) -> Result<Schedule, DecodeError> {
    let parsed: ScheduleJson = serde_json::from_str(json)?;
    schedule_from_wire(parsed)
}

pub fn decode_schedules_page_json(json: &str) -> Result<Page<Schedule>, DecodeError> {
    page::decode_page(json, schedule_from_wire)
}

fn schedule_from_wire(wire: ScheduleJson) -> Result<Schedule, DecodeError> {
    let next_send = wire
        .next_send
        .as_deref()
        .map(decode_wire_time)
        .transpose()?;

    Ok(Schedule {
        id: wire.id,
        next_send,
        rrule: wire.rrule,
        session: session::session_from_wire(wire.session)?,
    })
}
