use serde::Deserialize;

use super::page;
use super::request::RestRequest;
use super::time::decode_wire_time;
use super::{delivery_status_from_wire, direction_from_wire, DecodeError};
use crate::domain::{Chat, ChatMessage, Contact, Page};

pub const RESOURCE: &str = "chats";
pub const RESOURCE_ONE: &str = "chats/{phone}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatJson {
    id: u64,
    phone: String,
    #[serde(default)]
    contact: Option<ContactJson>,
    unread: WireCount,
    updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactJson {
    id: u64,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatMessageJson {
    id: u64,
    sender: String,
    receiver: String,
    text: String,
    message_time: String,
    status: String,
    direction: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// The API serializes some counters as JSON strings (`"unread": "5"`).
enum WireCount {
    Number(u32),
    Text(String),
}

impl WireCount {
    fn into_u32(self) -> Result<u32, DecodeError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(value) => value
                .trim()
                .parse()
                .map_err(|_| DecodeError::Count { value }),
        }
    }
}

pub fn list_request(page: u32, limit: u32) -> RestRequest {
    RestRequest::get(RESOURCE)
        .with_query_param("page", page.to_string())
        .with_query_param("limit", limit.to_string())
}

pub fn messages_request(phone: &str, page: u32, limit: u32) -> RestRequest {
    RestRequest::get(RESOURCE_ONE)
        .with_path_param("phone", phone)
        .with_query_param("page", page.to_string())
        .with_query_param("limit", limit.to_string())
}

pub fn decode_chats_page_json(json: &str) -> Result<Page<Chat>, DecodeError> {
    page::decode_page(json, chat_from_wire)
}

pub fn decode_chat_messages_page_json(json: &str) -> Result<Page<ChatMessage>, DecodeError> {
    page::decode_page(json, chat_message_from_wire)
}

fn chat_from_wire(wire: ChatJson) -> Result<Chat, DecodeError> {
    Ok(Chat {
        id: wire.id,
        phone: wire.phone,
        contact: wire.contact.map(contact_from_wire),
        unread: wire.unread.into_u32()?,
        updated_at: decode_wire_time(&wire.updated_at)?,
    })
}

fn contact_from_wire(wire: ContactJson) -> Contact {
    Contact {
        id: wire.id,
        first_name: wire.first_name,
        last_name: wire.last_name,
        phone: wire.phone,
    }
}

fn chat_message_from_wire(wire: ChatMessageJson) -> Result<ChatMessage, DecodeError> {
    Ok(ChatMessage {
        id: wire.id,
        sender: wire.sender,
        receiver: wire.receiver,
        text: wire.text,
        message_time: decode_wire_time(&wire.message_time)?,
        status: delivery_status_from_wire(&wire.status)?,
        direction: direction_from_wire(&wire.direction)?,
        first_name: wire.first_name,
        last_name: wire.last_name,
    })
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::domain::{DeliveryStatus, MessageDirection};

    const CHATS_PAGE_JSON: &str = r#"{"page":2,"limit":3,"pageCount":3,"resources":[
        {"id":44577,"phone":"999123456","contact":null,"unread":"0","updatedAt":"2015-04-08T11:58:49+0000"},
        {"id":44433,"phone":"999123457","contact":null,"unread":"5","updatedAt":"2014-08-13T05:36:40+0000"},
        {"id":39564,"phone":"999123458","contact":null,"unread":0,"updatedAt":"2014-08-13T05:36:28+0000"}
    ]}"#;

    const CHAT_MESSAGES_PAGE_JSON: &str = r#"{"page":2,"limit":3,"pageCount":3,"resources":[
        {"id":49360873,"sender":"9990001234","messageTime":"2014-08-13T05:05:51+0000","text":"Hello. Please reply.","receiver":"999123456","status":"f","firstName":null,"lastName":null,"direction":"o"},
        {"id":49430972,"sender":"999123456","messageTime":"2014-09-19T05:34:22+0000","text":"testing","receiver":"9990001234","status":"d","firstName":null,"lastName":null,"direction":"i"}
    ]}"#;

    #[test]
    fn list_request_binds_page_and_limit() {
        let request = list_request(2, 3);
        assert_eq!(request.resource(), "chats");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.query_params(),
            &[("page", "2".to_owned()), ("limit", "3".to_owned())]
        );
    }

    #[test]
    fn messages_request_binds_phone_page_and_limit() {
        let request = messages_request("999123456", 2, 3);
        assert_eq!(request.resource(), "chats/{phone}");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.param_count(), 3);
        assert_eq!(request.param("phone"), Some("999123456"));
        assert_eq!(request.param("page"), Some("2"));
        assert_eq!(request.param("limit"), Some("3"));
    }

    #[test]
    fn decodes_chats_with_string_or_numeric_unread() {
        let page = decode_chats_page_json(CHATS_PAGE_JSON).unwrap();
        assert_eq!(page.resources.len(), 3);
        assert_eq!(page.resources[0].unread, 0);
        assert_eq!(page.resources[1].unread, 5);
        assert_eq!(page.resources[2].unread, 0);
        assert_eq!(page.resources[1].phone, "999123457");
        assert_eq!(page.resources[0].contact, None);
    }

    #[test]
    fn decodes_contact_when_present() {
        let json = r#"{"page":1,"limit":1,"pageCount":1,"resources":[
            {"id":1,"phone":"999123456","contact":{"id":7,"firstName":"Albert","lastName":null,"phone":"999123456"},"unread":"1","updatedAt":"2015-04-08T11:58:49+0000"}
        ]}"#;
        let page = decode_chats_page_json(json).unwrap();
        let contact = page.resources[0].contact.as_ref().unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.first_name.as_deref(), Some("Albert"));
        assert_eq!(contact.last_name, None);
    }

    #[test]
    fn non_numeric_unread_is_a_decode_error() {
        let json = CHATS_PAGE_JSON.replace(r#""unread":"5""#, r#""unread":"many""#);
        let err = decode_chats_page_json(&json).unwrap_err();
        assert!(matches!(err, DecodeError::Count { value } if value == "many"));
    }

    #[test]
    fn decodes_chat_messages_with_directions() {
        let page = decode_chat_messages_page_json(CHAT_MESSAGES_PAGE_JSON).unwrap();
        assert_eq!(page.resources.len(), 2);
        assert_eq!(page.resources[0].direction, MessageDirection::Outgoing);
        assert_eq!(page.resources[1].direction, MessageDirection::Incoming);
        assert_eq!(page.resources[0].status, DeliveryStatus::Failed);
        assert_eq!(page.resources[1].status, DeliveryStatus::Delivered);
        assert_eq!(page.resources[1].text, "testing");
        assert_eq!(page.resources[1].sender, "999123456");
    }

    #[test]
    fn unknown_direction_is_a_decode_error() {
        let json = CHAT_MESSAGES_PAGE_JSON.replace(r#""direction":"i""#, r#""direction":"x""#);
        let err = decode_chat_messages_page_json(&json).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownDirectionCode { code } if code == "x"));
    }
}
