use std::fmt;

/// Errors that can occur while building or rendering markup.
#[derive(Debug)]
pub enum Error {
    /// The tag name cannot be written as an HTML tag.
    InvalidTagName(String),
    /// The attribute name cannot be written as an HTML attribute.
    InvalidAttributeName(String),
    /// A void element such as `input` was given content.
    VoidElementContent(String),
    /// Writing rendered output failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTagName(name) => write!(f, "invalid tag name: {:?}", name),
            Error::InvalidAttributeName(name) => write!(f, "invalid attribute name: {:?}", name),
            Error::VoidElementContent(name) => {
                write!(f, "void element cannot have content: {:?}", name)
            }
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
