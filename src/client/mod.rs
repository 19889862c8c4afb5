//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiError, ApiToken, BulkSession, Chat, ChatMessage, DeleteResult, Message, Page, Reply,
    Schedule, SendMessage, SendResult, Session, Username, ValidationError,
};
use crate::transport;
use crate::transport::{DecodeError, RestRequest};

const DEFAULT_BASE_URL: &str = "https://rest.textmagic.com/api/v2";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        base_url: &'a str,
        credentials: &'a Credentials,
        request: &'a RestRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        base_url: &'a str,
        credentials: &'a Credentials,
        request: &'a RestRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let url = transport::build_url(base_url, request)?;
            let mut builder = self.client.request(request.method(), url).basic_auth(
                credentials.username().as_str(),
                Some(credentials.token().as_str()),
            );
            if !request.body_params().is_empty() {
                builder = builder.form(request.body_params());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for TextMagic API calls: account username plus
/// an API access token, sent as HTTP basic auth on every request.
pub struct Credentials {
    username: Username,
    token: ApiToken,
}

impl Credentials {
    /// Create validated credentials (both parts must be non-empty).
    pub fn new(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            token: ApiToken::new(token)?,
        })
    }

    /// The validated account username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The validated API token.
    pub fn token(&self) -> &ApiToken {
        &self.token
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMagicClient`].
///
/// This error preserves:
/// - HTTP client / transport failures,
/// - API-level rejections (non-2xx status with the provider's error payload),
/// - parse/decode failures,
/// - validation failures from domain constructors.
pub enum TextMagicError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The API answered with a non-2xx status.
    #[error("API error: {0}")]
    Api(ApiError),

    /// Response body could not be decoded as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`TextMagicClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TextMagicClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextMagicClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextMagicClient`].
    pub fn build(self) -> Result<TextMagicClient, TextMagicError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextMagicError::Transport(Box::new(err)))?;

        Ok(TextMagicClient {
            credentials: self.credentials,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level TextMagic REST API v2 client.
///
/// Each method performs a single request against
/// `https://rest.textmagic.com/api/v2` (overridable through the builder) and
/// decodes the JSON response into domain types. There are no retries; every
/// outcome is visible in the returned `Result`.
pub struct TextMagicClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl TextMagicClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TextMagicClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TextMagicClientBuilder {
        TextMagicClientBuilder::new(credentials)
    }

    /// Fetch a single outbound message by id.
    pub async fn get_message(&self, id: u64) -> Result<Message, TextMagicError> {
        let body = self.fetch(&transport::message::get_request(id)).await?;
        transport::message::decode_message_json(&body).map_err(parse_error)
    }

    /// Fetch one page of outbound messages, newest first (server order).
    pub async fn get_messages(&self, page: u32, limit: u32) -> Result<Page<Message>, TextMagicError> {
        let body = self
            .fetch(&transport::message::list_request(page, limit))
            .await?;
        transport::message::decode_messages_page_json(&body).map_err(parse_error)
    }

    /// Delete an outbound message.
    ///
    /// Deleting an id the server no longer knows reports
    /// [`DeleteResult::Rejected`], not an `Err`.
    pub async fn delete_message(&self, message: &Message) -> Result<DeleteResult, TextMagicError> {
        self.delete(&transport::message::delete_request(message.id))
            .await
    }

    /// Send a message (or schedule one, when `sending_time`/`rrule` is set).
    pub async fn send_message(&self, request: &SendMessage) -> Result<SendResult, TextMagicError> {
        let body = self.fetch(&transport::send::send_request(request)).await?;
        transport::send::decode_send_result_json(&body).map_err(parse_error)
    }

    /// Fetch a single inbound reply by id.
    pub async fn get_reply(&self, id: u64) -> Result<Reply, TextMagicError> {
        let body = self.fetch(&transport::reply::get_request(id)).await?;
        transport::reply::decode_reply_json(&body).map_err(parse_error)
    }

    /// Fetch one page of inbound replies.
    pub async fn get_replies(&self, page: u32, limit: u32) -> Result<Page<Reply>, TextMagicError> {
        let body = self
            .fetch(&transport::reply::list_request(page, limit))
            .await?;
        transport::reply::decode_replies_page_json(&body).map_err(parse_error)
    }

    /// Delete an inbound reply.
    pub async fn delete_reply(&self, reply: &Reply) -> Result<DeleteResult, TextMagicError> {
        self.delete(&transport::reply::delete_request(reply.id)).await
    }

    /// Fetch a single schedule by id.
    pub async fn get_schedule(&self, id: u64) -> Result<Schedule, TextMagicError> {
        let body = self.fetch(&transport::schedule::get_request(id)).await?;
        transport::schedule::decode_schedule_json(&body).map_err(parse_error)
    }

    /// Fetch one page of schedules.
    pub async fn get_schedules(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<Schedule>, TextMagicError> {
        let body = self
            .fetch(&transport::schedule::list_request(page, limit))
            .await?;
        transport::schedule::decode_schedules_page_json(&body).map_err(parse_error)
    }

    /// Cancel a scheduled send.
    pub async fn delete_schedule(&self, schedule: &Schedule) -> Result<DeleteResult, TextMagicError> {
        self.delete(&transport::schedule::delete_request(schedule.id))
            .await
    }

    /// Fetch a single send session by id.
    pub async fn get_session(&self, id: u64) -> Result<Session, TextMagicError> {
        let body = self.fetch(&transport::session::get_request(id)).await?;
        transport::session::decode_session_json(&body).map_err(parse_error)
    }

    /// Fetch one page of send sessions.
    pub async fn get_sessions(&self, page: u32, limit: u32) -> Result<Page<Session>, TextMagicError> {
        let body = self
            .fetch(&transport::session::list_request(page, limit))
            .await?;
        transport::session::decode_sessions_page_json(&body).map_err(parse_error)
    }

    /// Delete a send session and its messages.
    pub async fn delete_session(&self, session: &Session) -> Result<DeleteResult, TextMagicError> {
        self.delete(&transport::session::delete_request(session.id))
            .await
    }

    /// Fetch one page of the messages dispatched under a session.
    pub async fn get_session_messages(
        &self,
        id: u64,
        page: u32,
        limit: u32,
    ) -> Result<Page<Message>, TextMagicError> {
        let body = self
            .fetch(&transport::session::messages_request(id, page, limit))
            .await?;
        transport::message::decode_messages_page_json(&body).map_err(parse_error)
    }

    /// Fetch one page of chat threads.
    pub async fn get_chats(&self, page: u32, limit: u32) -> Result<Page<Chat>, TextMagicError> {
        let body = self
            .fetch(&transport::chat::list_request(page, limit))
            .await?;
        transport::chat::decode_chats_page_json(&body).map_err(parse_error)
    }

    /// Fetch one page of the conversation with a single phone number.
    pub async fn get_chat(
        &self,
        phone: &str,
        page: u32,
        limit: u32,
    ) -> Result<Page<ChatMessage>, TextMagicError> {
        let body = self
            .fetch(&transport::chat::messages_request(phone, page, limit))
            .await?;
        transport::chat::decode_chat_messages_page_json(&body).map_err(parse_error)
    }

    /// Fetch one page of bulk send sessions.
    pub async fn get_bulk_sessions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<BulkSession>, TextMagicError> {
        let body = self
            .fetch(&transport::bulk::list_request(page, limit))
            .await?;
        transport::bulk::decode_bulk_sessions_page_json(&body).map_err(parse_error)
    }

    async fn execute(&self, request: &RestRequest) -> Result<HttpResponse, TextMagicError> {
        self.http
            .execute(&self.base_url, &self.credentials, request)
            .await
            .map_err(TextMagicError::Transport)
    }

    async fn fetch(&self, request: &RestRequest) -> Result<String, TextMagicError> {
        let response = self.execute(request).await?;
        if !(200..=299).contains(&response.status) {
            return Err(TextMagicError::Api(transport::decode_api_error(
                response.status,
                &response.body,
            )));
        }
        Ok(response.body)
    }

    async fn delete(&self, request: &RestRequest) -> Result<DeleteResult, TextMagicError> {
        let response = self.execute(request).await?;
        if (200..=299).contains(&response.status) {
            Ok(DeleteResult::Deleted)
        } else {
            Ok(DeleteResult::Rejected(transport::decode_api_error(
                response.status,
                &response.body,
            )))
        }
    }
}

fn parse_error(err: DecodeError) -> TextMagicError {
    TextMagicError::Parse(Box::new(err))
}
