//! Object model for HTTP request and response messages.
//!
//! This crate models the messages themselves — protocol version, ordered
//! headers, body and start line — together with their validation rules and
//! wire-format string rendering. It is a data-interchange layer, not a
//! network stack: nothing here opens sockets or parses raw bytes off the
//! wire.
//!
//! Both message kinds share the behavior of the [`HttpMessage`] trait and
//! add their own start line: [`Request`] carries a method and a decomposed
//! absolute URL, [`Response`] a status code and an optional reason phrase
//! backed by the registered default-phrase table.
//!
//! # Examples
//!
//! ```
//! use message::{HttpMessage, Request};
//!
//! let mut request = Request::new("POST", "http://www.example.com/example.html")?;
//! request
//!     .add_headers([("X-Test", Some("Test"))])
//!     .set_body(Some("<test></test>".into()));
//!
//! assert_eq!(
//!     request.to_http_string()?,
//!     "POST /example.html HTTP/1.1\r\n\
//!      Host: www.example.com\r\n\
//!      X-Test: Test\r\n\
//!      \r\n\
//!      <test></test>"
//! );
//! # Ok::<(), message::Error>(())
//! ```
//!
//! ```
//! use message::{HttpMessage, Response};
//!
//! let mut response = Response::new(404)?;
//! assert_eq!(response.reason_phrase(), Some("Not Found"));
//!
//! response.set_reason_phrase(Some("Missing"));
//! assert_eq!(response.start_line(), "HTTP/1.1 404 Missing");
//! # Ok::<(), message::Error>(())
//! ```

mod body;
mod error;
mod headers;
mod message;
mod request;
mod response;
mod status;
mod url;
mod version;

pub use body::{Body, SerializeBody, XmlElement};
pub use error::{Error, Result};
pub use headers::Headers;
pub use message::{HttpMessage, Message};
pub use request::Request;
pub use response::Response;
pub use status::default_reason_phrase;
pub use version::ProtocolVersion;

pub use self::url::RequestUrl;
