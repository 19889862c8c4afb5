//! Domain layer: strong types with validation and invariants (no I/O).

mod entity;
mod request;
mod validation;
mod value;

pub use entity::{
    ApiError, BulkSession, BulkSessionStatus, Chat, ChatMessage, Contact, DeleteResult,
    DeliveryStatus, Message, MessageDirection, Page, Reply, Schedule, SendResult, SendResultKind,
    Session,
};
pub use request::{SEND_MESSAGE_MAX_PHONES, SendMessage, SendOptions};
pub use validation::ValidationError;
pub use value::{
    ApiToken, MessageText, PhoneNumber, RawPhoneNumber, SenderId, UnixTimestamp, Username,
};
