use serde::Deserialize;

use super::request::RestRequest;
use super::DecodeError;
use crate::domain::{
    MessageText, RawPhoneNumber, SendMessage, SendResult, SendResultKind, SenderId, UnixTimestamp,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResultJson {
    id: u64,
    href: String,
    r#type: String,
    #[serde(default)]
    session_id: Option<u64>,
    #[serde(default)]
    bulk_id: Option<u64>,
    #[serde(default)]
    message_id: Option<u64>,
    #[serde(default)]
    schedule_id: Option<u64>,
}

pub fn send_request(request: &SendMessage) -> RestRequest {
    let phones = request
        .phones()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");

    let mut rest = RestRequest::post(super::message::RESOURCE)
        .with_body_param(MessageText::FIELD, request.text().as_str())
        .with_body_param(RawPhoneNumber::FIELD, phones);

    let options = request.options();
    if let Some(from) = options.from.as_ref() {
        rest = rest.with_body_param(SenderId::FIELD, from.as_str());
    }
    if let Some(sending_time) = options.sending_time {
        rest = rest.with_body_param(UnixTimestamp::FIELD, sending_time.value().to_string());
    }
    if let Some(rrule) = options.rrule.as_deref() {
        rest = rest.with_body_param("rrule", rrule);
    }
    if options.dummy {
        rest = rest.with_body_param("dummy", "1");
    }
    rest
}

pub fn decode_send_result_json(json: &str) -> Result<SendResult, DecodeError> {
    let parsed: SendResultJson = serde_json::from_str(json)?;
    let kind = match parsed.r#type.as_str() {
        "message" => SendResultKind::Message,
        "session" => SendResultKind::Session,
        "schedule" => SendResultKind::Schedule,
        "bulk" => SendResultKind::Bulk,
        other => {
            return Err(DecodeError::UnknownResourceType {
                value: other.to_owned(),
            });
        }
    };

    Ok(SendResult {
        id: parsed.id,
        href: parsed.href,
        kind,
        session_id: parsed.session_id,
        bulk_id: parsed.bulk_id,
        message_id: parsed.message_id,
        schedule_id: parsed.schedule_id,
    })
}
