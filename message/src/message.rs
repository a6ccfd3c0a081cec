use crate::body::Body;
use crate::error::Result;
use crate::headers::Headers;
use crate::version::ProtocolVersion;

/// Shared state embedded by both message kinds.
#[derive(Debug, Default)]
pub struct Message {
    pub(crate) version: ProtocolVersion,
    pub(crate) headers: Headers,
    pub(crate) body: Option<Body>,
}

/// Common behavior of HTTP messages.
///
/// Implementors expose their shared [`Message`] state and supply the start
/// line; the header, body and rendering operations are provided. Setters
/// return `&mut Self` so calls chain.
pub trait HttpMessage {
    fn message(&self) -> &Message;

    fn message_mut(&mut self) -> &mut Message;

    /// First line of the wire form: request line or status line.
    fn start_line(&self) -> String;

    fn protocol_version(&self) -> ProtocolVersion {
        self.message().version
    }

    fn set_protocol_version(&mut self, version: ProtocolVersion) -> &mut Self
    where
        Self: Sized,
    {
        self.message_mut().version = version;
        self
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.message().headers.get(name)
    }

    fn has_header(&self, name: &str) -> bool {
        self.message().headers.contains(name)
    }

    fn headers(&self) -> &Headers {
        &self.message().headers
    }

    /// `Some` inserts or overwrites in place, `None` removes the header.
    fn set_header(&mut self, name: &str, value: Option<&str>) -> &mut Self
    where
        Self: Sized,
    {
        self.message_mut().headers.apply(name, value);
        self
    }

    /// Clears all headers, then applies the pairs in order.
    fn set_headers<'a, I>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
        Self: Sized,
    {
        self.message_mut().headers.clear();
        self.add_headers(headers)
    }

    /// Applies the pairs in order without clearing first; `None` values
    /// still remove their key.
    fn add_headers<'a, I>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
        Self: Sized,
    {
        for (name, value) in headers {
            self.message_mut().headers.apply(name, value);
        }
        self
    }

    /// The body as stored, in contrast to [`body_as_string`]. A stream body
    /// is the same handle, not its contents.
    ///
    /// [`body_as_string`]: HttpMessage::body_as_string
    fn body(&self) -> Option<&Body> {
        self.message().body.as_ref()
    }

    fn set_body(&mut self, body: Option<Body>) -> &mut Self
    where
        Self: Sized,
    {
        self.message_mut().body = body;
        self
    }

    /// Invokes `producer` exactly once, immediately, and stores its result.
    /// The produced form is checked here at set time, not deferred to a
    /// later read.
    fn set_body_with<F>(&mut self, producer: F) -> &mut Self
    where
        F: FnOnce() -> Option<Body>,
        Self: Sized,
    {
        self.message_mut().body = producer();
        self
    }

    /// Textual form of the body, or `None` when no body is set. A stream
    /// body is read to EOF at this point.
    fn body_as_string(&self) -> Result<Option<String>> {
        match &self.message().body {
            Some(body) => Ok(Some(body.as_string()?)),
            None => Ok(None),
        }
    }

    /// The message as an HTTP string: start line, one `Name: value` line
    /// per header in insertion order, a blank line, then the body text when
    /// one is set. Lines are CRLF-joined with no trailing CRLF after the
    /// body.
    fn to_http_string(&self) -> Result<String> {
        let mut parts = vec![self.start_line()];

        for (name, value) in self.message().headers.iter() {
            parts.push(format!("{name}: {value}"));
        }

        parts.push(String::new());

        if let Some(body) = self.body_as_string()? {
            parts.push(body);
        }

        Ok(parts.join("\r\n"))
    }
}
