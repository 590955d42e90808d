//! A single chat round trip. Nothing is kept between exchanges.

use serde::Serialize;

/// How the reply text came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    /// Text produced by the conversational API
    #[default]
    Answer,
    /// The service answered with something unusable; a canned reply stands in
    Fallback,
    /// The request failed or was never sent
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatExchange {
    pub prompt: String,
    pub reply: String,
    pub kind: ReplyKind,
}

impl ChatExchange {
    pub fn new(prompt: impl Into<String>, reply: impl Into<String>) -> Self {
        Self::with_kind(prompt, reply, ReplyKind::Answer)
    }

    pub fn with_kind(prompt: impl Into<String>, reply: impl Into<String>, kind: ReplyKind) -> Self {
        Self {
            prompt: prompt.into(),
            reply: reply.into(),
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ReplyKind::Error
    }
}
