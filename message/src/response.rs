use crate::error::{Error, Result};
use crate::message::{HttpMessage, Message};
use crate::status::default_reason_phrase;
use crate::version::ProtocolVersion;

/// HTTP response message: status code, optional reason phrase and the
/// shared message state.
#[derive(Debug)]
pub struct Response {
    message: Message,
    status_code: u16,
    reason_phrase: Option<String>,
}

impl Response {
    /// Builds a response with no explicit reason phrase and protocol
    /// version 1.1. Fails when `status_code` is out of range.
    pub fn new(status_code: u16) -> Result<Self> {
        Self::with_version(status_code, None, ProtocolVersion::default())
    }

    pub fn with_version(
        status_code: u16,
        reason_phrase: Option<&str>,
        version: ProtocolVersion,
    ) -> Result<Self> {
        validate_status_code(status_code)?;

        Ok(Response {
            message: Message {
                version,
                ..Message::default()
            },
            status_code,
            reason_phrase: reason_phrase.map(str::to_string),
        })
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Fails unless 100 <= `status_code` < 600; the response is left
    /// unchanged on failure.
    pub fn set_status_code(&mut self, status_code: u16) -> Result<&mut Self> {
        validate_status_code(status_code)?;
        self.status_code = status_code;

        Ok(self)
    }

    /// The explicit phrase when one is set, else the registered default for
    /// the current status code, else `None`.
    pub fn reason_phrase(&self) -> Option<&str> {
        self.reason_phrase
            .as_deref()
            .or_else(|| default_reason_phrase(self.status_code))
    }

    /// Stores the phrase verbatim; `None` re-enables the default-table
    /// fallback on read.
    pub fn set_reason_phrase(&mut self, reason_phrase: Option<&str>) -> &mut Self {
        self.reason_phrase = reason_phrase.map(str::to_string);
        self
    }
}

impl HttpMessage for Response {
    fn message(&self) -> &Message {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    /// Status line: `HTTP/version status reason`. An absent reason renders
    /// as the empty string.
    fn start_line(&self) -> String {
        format!(
            "HTTP/{} {} {}",
            self.message.version,
            self.status_code,
            self.reason_phrase().unwrap_or_default()
        )
    }
}

fn validate_status_code(status_code: u16) -> Result<()> {
    if !(100..600).contains(&status_code) {
        return Err(Error::InvalidArgument(format!(
            "the HTTP status code \"{status_code}\" is not valid"
        )));
    }

    Ok(())
}
