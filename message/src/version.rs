use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// HTTP protocol version carried by a message.
///
/// Only 1.0 and 1.1 are recognized; any other spelling is rejected when
/// parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProtocolVersion {
    Http10,
    #[default]
    Http11,
}

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::Http10 => "1.0",
            ProtocolVersion::Http11 => "1.1",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0" => Ok(ProtocolVersion::Http10),
            "1.1" => Ok(ProtocolVersion::Http11),
            other => Err(Error::InvalidArgument(format!(
                "unknown HTTP protocol version \"{other}\""
            ))),
        }
    }
}
