//! Chat Relay
//!
//! One prompt in, one reply string out. The relay never fails its caller:
//! service and transport problems become display text.
//!
//! - `settings` - endpoint and credential, passed in explicitly
//! - `payload` - request body and candidate extraction
//! - `relay` - the round trip and its error mapping

mod error;
mod payload;
mod relay;
mod settings;

pub use error::{ChatError, FALLBACK_REPLY};
pub use payload::{first_candidate_text, request_body};
pub use relay::{ChatOutcome, ChatRelay};
pub use settings::{ApiKey, ChatSettings, DEFAULT_API_KEY_ENV, DEFAULT_CHAT_ENDPOINT};
