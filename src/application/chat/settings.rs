/// Conversational API endpoint used when none is configured
pub const DEFAULT_CHAT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta2/models/gemini-pro:generateMessage";

/// Environment variable holding the API key by default
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for empty or whitespace-only values
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Everything the relay needs from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub endpoint: String,
    pub api_key: Option<ApiKey>,
    /// Named in the missing-credential message
    pub api_key_env: String,
}

impl ChatSettings {
    pub fn new(endpoint: impl Into<String>, api_key: Option<ApiKey>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    pub fn with_api_key_env(mut self, env_var: impl Into<String>) -> Self {
        self.api_key_env = env_var.into();
        self
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_ENDPOINT, None)
    }
}
