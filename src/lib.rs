//! Typed Rust client for the TextMagic REST API v2.
//!
//! The design is layered: a domain layer of strong types, a transport layer
//! for wire-format quirks (resource templates, `+0000` timestamps,
//! single-character status codes), and a small client layer orchestrating
//! requests over an injected HTTP transport.
//!
//! ```rust,no_run
//! use textmagic::{Credentials, TextMagicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textmagic::TextMagicError> {
//!     let client = TextMagicClient::new(Credentials::new("username", "token")?);
//!     let messages = client.get_messages(1, 10).await?;
//!     for message in messages.resources {
//!         println!("{} {:?} {}", message.id, message.status, message.receiver);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, TextMagicClient, TextMagicClientBuilder, TextMagicError};
pub use domain::{
    ApiError, ApiToken, BulkSession, BulkSessionStatus, Chat, ChatMessage, Contact, DeleteResult,
    DeliveryStatus, Message, MessageDirection, MessageText, Page, PhoneNumber, RawPhoneNumber,
    Reply, SEND_MESSAGE_MAX_PHONES, Schedule, SendMessage, SendOptions, SendResult, SendResultKind,
    SenderId, Session, UnixTimestamp, Username, ValidationError,
};
