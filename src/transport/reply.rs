use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::time::decode_wire_time;
use super::DecodeError;
use crate::domain::{Page, Reply};

pub const RESOURCE: &str = "replies";
pub const RESOURCE_ONE: &str = "replies/{id}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyJson {
    id: u64,
    sender: String,
    receiver: String,
    text: String,
    message_time: String,
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

pub fn decode_reply_json(json: &str) -> Result<Reply, DecodeError> {
    let parsed: ReplyJson = serde_json::from_str(json)?;
    reply_from_wire(parsed)
}

pub fn decode_replies_page_json(json: &str) -> Result<Page<Reply>, DecodeError> {
    page::decode_page(json, reply_from_wire)
}

fn reply_from_wire(wire: ReplyJson) -> Result<Reply, DecodeError> {
    Ok(Reply {
        id: wire.id,
        sender: wire.sender,
        receiver: wire.receiver,
        text: wire.text,
        message_time: decode_wire_time(&wire.message_time)?,
    })
}
