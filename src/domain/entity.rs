use std::collections::BTreeMap;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery state of an outbound message, decoded from the API's
/// single-character status code.
pub enum DeliveryStatus {
    Queued,
    Scheduled,
    Enroute,
    Acked,
    Delivered,
    Buffered,
    Failed,
    Rejected,
    Unknown,
}

impl DeliveryStatus {
    /// Map a wire status character to its variant. Unknown characters map to `None`;
    /// the transport layer turns that into a decode error.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'q' => Self::Queued,
            's' => Self::Scheduled,
            'e' => Self::Enroute,
            'a' => Self::Acked,
            'd' => Self::Delivered,
            'b' => Self::Buffered,
            'f' => Self::Failed,
            'j' => Self::Rejected,
            'u' => Self::Unknown,
            _ => return None,
        })
    }

    /// The wire character for this status.
    pub fn code(self) -> char {
        match self {
            Self::Queued => 'q',
            Self::Scheduled => 's',
            Self::Enroute => 'e',
            Self::Acked => 'a',
            Self::Delivered => 'd',
            Self::Buffered => 'b',
            Self::Failed => 'f',
            Self::Rejected => 'j',
            Self::Unknown => 'u',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Direction of a chat message relative to the account.
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

impl MessageDirection {
    /// Map a wire direction character to its variant.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'i' => Self::Incoming,
            'o' => Self::Outgoing,
            _ => return None,
        })
    }

    /// The wire character for this direction.
    pub fn code(self) -> char {
        match self {
            Self::Incoming => 'i',
            Self::Outgoing => 'o',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Processing state of a bulk send session.
pub enum BulkSessionStatus {
    New,
    Working,
    Completed,
    Failed,
}

impl BulkSessionStatus {
    /// Map a wire status character to its variant.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'n' => Self::New,
            'w' => Self::Working,
            'c' => Self::Completed,
            'f' => Self::Failed,
            _ => return None,
        })
    }

    /// The wire character for this status.
    pub fn code(self) -> char {
        match self {
            Self::New => 'n',
            Self::Working => 'w',
            Self::Completed => 'c',
            Self::Failed => 'f',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A single outbound message.
pub struct Message {
    pub id: u64,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    pub charset: String,
    pub status: DeliveryStatus,
    /// Send time, converted from the API's UTC wire form to local time.
    pub message_time: DateTime<Local>,
    pub price: f64,
    pub parts_count: u32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Two-letter country id of the receiver, when the API knows it.
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An inbound reply to a previously sent message.
pub struct Reply {
    pub id: u64,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    pub message_time: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
/// A logical outbound send context under which one or more messages are dispatched.
pub struct Session {
    pub id: u64,
    pub start_time: DateTime<Local>,
    pub text: String,
    /// Originating channel code as reported by the API (for example `A` for API sends).
    pub source: String,
    pub reference_id: Option<String>,
    pub price: f64,
    pub numbers_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
/// A deferred or recurring send tied to a session.
pub struct Schedule {
    pub id: u64,
    /// Next fire time; `None` once the schedule has run out.
    pub next_send: Option<DateTime<Local>>,
    /// iCalendar recurrence rule, when the schedule repeats.
    pub rrule: Option<String>,
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Address-book contact attached to a chat, when one exists.
pub struct Contact {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// A running two-way conversation thread with a single phone number.
pub struct Chat {
    pub id: u64,
    pub phone: String,
    pub contact: Option<Contact>,
    pub unread: u32,
    pub updated_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
/// One message inside a chat thread, either direction.
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    pub message_time: DateTime<Local>,
    pub status: DeliveryStatus,
    pub direction: MessageDirection,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// A mass send to many numbers, tracked with processed/total item counts.
pub struct BulkSession {
    pub id: u64,
    pub status: BulkSessionStatus,
    pub items_processed: u32,
    pub items_total: u32,
    pub created_at: DateTime<Local>,
    pub session: Session,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
/// One page of a list endpoint.
///
/// `resources` preserves server response order; `page`, `limit`, and
/// `page_count` pass through from the response envelope unmodified.
pub struct Page<T> {
    pub page: u32,
    pub limit: u32,
    pub page_count: u32,
    pub resources: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Error payload returned by the API alongside a non-2xx HTTP status.
pub struct ApiError {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Application-level error code, when the body carried one.
    pub code: Option<i32>,
    /// Human-readable error description, when the body carried one.
    pub message: Option<String>,
    /// Per-field validation errors, keyed by field name.
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message.as_deref() {
            Some(message) => write!(f, "HTTP {}: {message}", self.http_status),
            None => write!(f, "HTTP {}", self.http_status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a delete call.
///
/// The API answers a delete of a nonexistent id with its normal error
/// envelope; that is an expected outcome, so it is data here rather than
/// an `Err`.
pub enum DeleteResult {
    Deleted,
    Rejected(ApiError),
}

impl DeleteResult {
    /// Whether the resource was deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// What kind of resource a send request produced.
pub enum SendResultKind {
    Message,
    Session,
    Schedule,
    Bulk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Link-style response to a send request: the created resource plus ids of
/// everything the API spawned alongside it.
pub struct SendResult {
    pub id: u64,
    pub href: String,
    pub kind: SendResultKind,
    pub session_id: Option<u64>,
    pub bulk_id: Option<u64>,
    pub message_id: Option<u64>,
    pub schedule_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_status_round_trips_known_codes() {
        for code in ['q', 's', 'e', 'a', 'd', 'b', 'f', 'j', 'u'] {
            let status = DeliveryStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(DeliveryStatus::from_code('x'), None);
    }

    #[test]
    fn direction_round_trips_known_codes() {
        assert_eq!(
            MessageDirection::from_code('i'),
            Some(MessageDirection::Incoming)
        );
        assert_eq!(
            MessageDirection::from_code('o'),
            Some(MessageDirection::Outgoing)
        );
        assert_eq!(MessageDirection::from_code('q'), None);
    }

    #[test]
    fn bulk_status_round_trips_known_codes() {
        for code in ['n', 'w', 'c', 'f'] {
            let status = BulkSessionStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(BulkSessionStatus::from_code('z'), None);
    }

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = ApiError {
            http_status: 404,
            code: Some(404),
            message: Some("Resource not found".to_owned()),
            field_errors: BTreeMap::new(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Resource not found");

        let bare = ApiError {
            http_status: 500,
            code: None,
            message: None,
            field_errors: BTreeMap::new(),
        };
        assert_eq!(bare.to_string(), "HTTP 500");
    }
}
