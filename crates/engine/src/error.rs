use http::{HeaderMap, StatusCode};

/// Distinguishes protocol-level HTTP-query failures from generic engine
/// failures. Only the former may carry response headers that the adapter
/// honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// The engine rejected the request at the HTTP protocol level
    /// (missing query, unsupported content type, ...).
    HttpQuery,
    /// Any other failure during engine invocation.
    Other,
}

/// An engine invocation failure.
///
/// The adapter maps this onto the HTTP response: `status_code` (or 500
/// when absent) becomes the status, `message` the body, and `headers`
/// are copied onto the response when the error is [`HttpQuery`]-tagged.
///
/// [`HttpQuery`]: EngineErrorKind::HttpQuery
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
    pub status_code: Option<StatusCode>,
    pub headers: Option<HeaderMap>,
    pub kind: EngineErrorKind,
}

impl EngineError {
    pub fn http_query(status_code: StatusCode, headers: HeaderMap, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
            headers: Some(headers),
            kind: EngineErrorKind::HttpQuery,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            headers: None,
            kind: EngineErrorKind::Other,
        }
    }
}
