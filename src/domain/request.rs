use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId, UnixTimestamp};

pub const SEND_MESSAGE_MAX_PHONES: usize = 1000;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub sending_time: Option<UnixTimestamp>,
    /// iCalendar recurrence rule for repeating sends.
    pub rrule: Option<String>,
    /// When set, the API validates the request without dispatching anything.
    pub dummy: bool,
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    phones: Vec<RawPhoneNumber>,
    text: MessageText,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(
        phones: Vec<RawPhoneNumber>,
        text: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if phones.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if phones.len() > SEND_MESSAGE_MAX_PHONES {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MESSAGE_MAX_PHONES,
                actual: phones.len(),
            });
        }
        Ok(Self {
            phones,
            text,
            options,
        })
    }

    pub fn phones(&self) -> &[RawPhoneNumber] {
        &self.phones
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
