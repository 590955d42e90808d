//! Blocking HTTPS transport backed by ureq.
//!
//! TLS uses ureq's bundled rustls with the webpki (Mozilla) root store.

use tracing::trace;

use crate::domain::ports::{ChatTransport, TransportError, TransportResponse};

/// Chat transport using a shared ureq agent
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&format!("footprint/{}", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self
            .agent
            .post(url)
            .set("Content-Type", "application/json");
        for (key, value) in query {
            request = request.query(key, value);
        }
        trace!(url, "POST");

        // ureq reports 4xx/5xx as errors; both are completed round trips here.
        let response = match request.send_string(&body.to_string()) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(e)) => return Err(TransportError::new(e.to_string())),
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(TransportResponse::new(status, body))
    }
}
