use thiserror::Error;

use crate::domain::entities::ReplyKind;
use crate::domain::ports::TransportError;

/// Reply shown when the service answers with something unusable
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't understand that.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No credential was configured; nothing was sent
    #[error("no API key configured (set {env_var})")]
    MissingCredential { env_var: String },

    /// The service refused the credential
    #[error("the conversational API rejected the API key (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-200 status
    #[error("conversational API returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// 200 but no candidate text in the body
    #[error("conversational API response has no candidate text")]
    MalformedResponse,

    /// The round trip did not complete
    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl ChatError {
    /// Text shown in place of a reply
    pub fn reply_text(&self) -> String {
        match self.reply_kind() {
            ReplyKind::Fallback => FALLBACK_REPLY.to_string(),
            _ => format!("Error: {}", self),
        }
    }

    /// Unusable answers get the fallback text; everything else is an error
    pub fn reply_kind(&self) -> ReplyKind {
        match self {
            ChatError::UnexpectedStatus { .. } | ChatError::MalformedResponse => {
                ReplyKind::Fallback
            }
            _ => ReplyKind::Error,
        }
    }
}
