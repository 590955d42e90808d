//! ChatTransport port - one outbound JSON POST
//!
//! The relay builds the request and interprets the response; the transport
//! only moves bytes. Any HTTP status is a response, not an error: only
//! failures to complete the round trip are `TransportError`s.

/// Status and raw body of a completed round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The round trip did not complete (DNS, connect, reset, TLS, timeout)
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Abstract outbound HTTP interface
///
/// Implementations:
/// - `UreqTransport` - blocking HTTPS via ureq
/// - test fakes that record requests and return canned responses
pub trait ChatTransport {
    /// POST `body` as JSON to `url` with the given query parameters.
    fn post_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;
}

impl<T: ChatTransport + ?Sized> ChatTransport for &T {
    fn post_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, query, body)
    }
}

impl<T: ChatTransport + ?Sized> ChatTransport for Box<T> {
    fn post_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, query, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_message_only() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn transport_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TransportError::new("timed out"));
        assert_eq!(err.to_string(), "timed out");
        assert!(err.source().is_none());
    }
}
