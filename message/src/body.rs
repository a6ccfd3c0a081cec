use std::cell::RefCell;
use std::fmt;
use std::io::Read;

use tracing::trace;

use crate::error::Result;

/// Object that can serialize itself to a string body.
pub trait SerializeBody {
    fn serialize(&self) -> String;
}

/// XML tree object that can render itself as XML text.
pub trait XmlElement {
    fn as_xml(&self) -> String;
}

/// Message body in one of the recognized forms.
///
/// The body is kept as stored, and `as_string` computes the textual form on
/// demand. A stream is borrowed, never rewound or closed, and is only read
/// when the textual form is requested.
pub enum Body {
    Text(String),
    Stream(RefCell<Box<dyn Read>>),
    Serializable(Box<dyn SerializeBody>),
    Xml(Box<dyn XmlElement>),
}

impl Body {
    pub fn stream(reader: impl Read + 'static) -> Self {
        Body::Stream(RefCell::new(Box::new(reader)))
    }

    pub fn serializable(value: impl SerializeBody + 'static) -> Self {
        Body::Serializable(Box::new(value))
    }

    pub fn xml(element: impl XmlElement + 'static) -> Self {
        Body::Xml(Box::new(element))
    }

    /// The textual form. A stream is consumed here: its remaining bytes are
    /// read to EOF, so a second call yields an empty string.
    pub fn as_string(&self) -> Result<String> {
        match self {
            Body::Text(text) => Ok(text.clone()),
            Body::Stream(reader) => {
                let mut contents = String::new();
                reader.borrow_mut().read_to_string(&mut contents)?;
                trace!(bytes = contents.len(), "read stream body");
                Ok(contents)
            }
            Body::Serializable(value) => Ok(value.serialize()),
            Body::Xml(element) => Ok(element.as_xml()),
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Body::Stream(_) => f.write_str("Stream(..)"),
            Body::Serializable(_) => f.write_str("Serializable(..)"),
            Body::Xml(_) => f.write_str("Xml(..)"),
        }
    }
}
