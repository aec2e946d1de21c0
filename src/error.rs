use crate::compat::String;

/// Errors that can occur while parsing a URL or looking up parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// A port token that is not a valid port number, even after splitting
    /// off a trailing parameter block. Carries the offending token.
    InvalidPort(String),
    /// A parameter or query key that is not present in the URL.
    /// Carries the missing key.
    KeyNotFound(String),
}

impl core::fmt::Display for UrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPort(token) => write!(f, "invalid port: {token:?}"),
            Self::KeyNotFound(key) => write!(f, "key not found: {key:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, UrlError>;
