use tracing::{debug, warn};

use crate::domain::entities::ChatExchange;
use crate::domain::ports::ChatTransport;

use super::error::ChatError;
use super::payload::{first_candidate_text, request_body};
use super::settings::ChatSettings;

/// What the shell gets back from one "Send"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Nothing to send; no request was made
    EmptyPrompt,
    Reply(ChatExchange),
}

/// Stateless relay to the conversational API.
///
/// Parameterized by its transport so tests can count and inspect requests.
pub struct ChatRelay<T>
where
    T: ChatTransport,
{
    settings: ChatSettings,
    transport: T,
}

impl<T> ChatRelay<T>
where
    T: ChatTransport,
{
    pub fn new(settings: ChatSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Shell entry point: empty input short-circuits before any request.
    pub fn submit(&self, text: &str) -> ChatOutcome {
        if text.trim().is_empty() {
            debug!("empty chat prompt, nothing sent");
            return ChatOutcome::EmptyPrompt;
        }
        ChatOutcome::Reply(self.exchange(text))
    }

    /// Reply text for `prompt`; failures become fallback or `Error: ...` text.
    pub fn ask(&self, prompt: &str) -> String {
        self.exchange(prompt).reply
    }

    fn exchange(&self, prompt: &str) -> ChatExchange {
        match self.try_ask(prompt) {
            Ok(reply) => ChatExchange::new(prompt, reply),
            Err(err) => {
                warn!(error = %err, "chat relay returned fallback text");
                ChatExchange::with_kind(prompt, err.reply_text(), err.reply_kind())
            }
        }
    }

    /// One round trip. Exactly one transport call unless the key is missing.
    pub fn try_ask(&self, prompt: &str) -> Result<String, ChatError> {
        let key = self
            .settings
            .api_key
            .as_ref()
            .ok_or_else(|| ChatError::MissingCredential {
                env_var: self.settings.api_key_env.clone(),
            })?;

        debug!(
            endpoint = %self.settings.endpoint,
            prompt_chars = prompt.chars().count(),
            "sending chat prompt"
        );
        let response = self.transport.post_json(
            &self.settings.endpoint,
            &[("key", key.expose())],
            &request_body(prompt),
        )?;
        debug!(status = response.status, bytes = response.body.len(), "chat response");

        match response.status {
            200 => first_candidate_text(&response.body).ok_or(ChatError::MalformedResponse),
            401 | 403 => Err(ChatError::Unauthorized {
                status: response.status,
            }),
            status => Err(ChatError::UnexpectedStatus { status }),
        }
    }
}
