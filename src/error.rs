//! Errors raised outside the binding engine.

use paramex_core::BindError;

/// A form body or query string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form body too large: {size} bytes exceeds the limit of {limit}")]
    BodyTooLarge { size: usize, limit: usize },

    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid semicolon separator in query")]
    Semicolon,

    #[error("invalid Content-Type header")]
    InvalidContentType,

    #[error("no multipart boundary param in Content-Type")]
    MissingBoundary,

    #[error("malformed multipart body: {0}")]
    InvalidMultipart(&'static str),
}

/// Failure of a form bind: either the body could not be parsed or binding failed.
///
/// Both variants display the inner error unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Bind(#[from] BindError),
}
