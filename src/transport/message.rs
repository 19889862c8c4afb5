use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::time::decode_wire_time;
use super::{delivery_status_from_wire, DecodeError};
use crate::domain::{Message, Page};

pub const RESOURCE: &str = "messages";
pub const RESOURCE_ONE: &str = "messages/{id}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson {
    id: u64,
    sender: String,
    receiver: String,
    text: String,
    charset: String,
    status: String,
    message_time: String,
    price: f64,
    parts_count: u32,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    country: Option<String>,
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

pub fn decode_message_json(json: &str) -> Result<Message, DecodeError> {
    let parsed: MessageJson = serde_json::from_str(json)?;
    message_from_wire(parsed)
}

pub fn decode_messages_page_json(json: &str) -> Result<Page<Message>, DecodeError> {
    page::decode_page(json, message_from_wire)
}

fn message_from_wire(wire: MessageJson) -> Result<Message, DecodeError> {
    Ok(Message {
        id: wire.id,
        sender: wire.sender,
        receiver: wire.receiver,
        text: wire.text,
        charset: wire.charset,
        status: delivery_status_from_wire(&wire.status)?,
        message_time: decode_wire_time(&wire.message_time)?,
        price: wire.price,
        parts_count: wire.parts_count,
        first_name: wire.first_name,
        last_name: wire.last_name,
        country: wire.country,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};
    use reqwest::Method;

    use super::*;
    use crate::domain::DeliveryStatus;

    const MESSAGE_JSON: &str = r#"{ "id": 49575710, "receiver": "999123456", "messageTime": "2015-05-25T06:40:45+0000", "status": "q", "text": "Test message", "charset": "ISO-8859-1", "firstName": null, "lastName": null, "country": "EE", "sender": "447624800500", "price": 0.037, "partsCount": 1 }"#;

    #[test]
    fn get_request_binds_one_path_param() {
        let request = get_request(49575710);
        assert_eq!(request.resource(), "messages/{id}");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.param_count(), 1);
        assert_eq!(request.param("id"), Some("49575710"));
    }

    #[test]
    fn list_request_serializes_page_and_limit_as_decimal_strings() {
        let request = list_request(2, 3);
        assert_eq!(request.resource(), "messages");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.query_params(),
            &[("page", "2".to_owned()), ("limit", "3".to_owned())]
        );
        assert_eq!(request.param_count(), 2);
    }

    #[test]
    fn delete_request_binds_only_the_id() {
        let request = delete_request(49575710);
        assert_eq!(request.resource(), "messages/{id}");
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.param_count(), 1);
        assert_eq!(request.param("id"), Some("49575710"));
    }

    #[test]
    fn decodes_message_payload_field_for_field() {
        let message = decode_message_json(MESSAGE_JSON).unwrap();
        assert_eq!(message.id, 49575710);
        assert_eq!(message.status, DeliveryStatus::Queued);
        assert_eq!(message.sender, "447624800500");
        assert_eq!(message.receiver, "999123456");
        assert_eq!(
            message.message_time,
            Utc.with_ymd_and_hms(2015, 5, 25, 6, 40, 45)
                .unwrap()
                .with_timezone(&Local)
        );
        assert_eq!(message.charset, "ISO-8859-1");
        assert_eq!(message.country.as_deref(), Some("EE"));
        assert_eq!(message.price, 0.037);
        assert_eq!(message.parts_count, 1);
        assert_eq!(message.first_name, None);
        assert_eq!(message.last_name, None);
    }

    #[test]
    fn unknown_status_code_is_a_decode_error() {
        let json = MESSAGE_JSON.replace(r#""status": "q""#, r#""status": "z""#);
        let err = decode_message_json(&json).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownStatusCode { code } if code == "z"));
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let json = MESSAGE_JSON.replace(r#""charset": "ISO-8859-1","#, "");
        assert!(matches!(
            decode_message_json(&json),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn decodes_message_page_preserving_order_and_statuses() {
        let second = MESSAGE_JSON
            .replace("49575710", "49575711")
            .replace(r#""status": "q""#, r#""status": "a""#)
            .replace(r#""firstName": null"#, r#""firstName": "Albert""#);
        let third = MESSAGE_JSON
            .replace("49575710", "49575712")
            .replace(r#""status": "q""#, r#""status": "d""#);
        let json = format!(
            r#"{{ "page": 2, "limit": 3, "pageCount": 3, "resources": [{MESSAGE_JSON}, {second}, {third}] }}"#
        );

        let page = decode_messages_page_json(&json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 3);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.resources.len(), 3);
        assert_eq!(page.resources[0].id, 49575710);
        assert_eq!(page.resources[1].id, 49575711);
        assert_eq!(page.resources[2].id, 49575712);
        assert_eq!(page.resources[0].status, DeliveryStatus::Queued);
        assert_eq!(page.resources[1].status, DeliveryStatus::Acked);
        assert_eq!(page.resources[2].status, DeliveryStatus::Delivered);
        assert_eq!(page.resources[1].first_name.as_deref(), Some("Albert"));
    }
}
