//! Assistant endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the assistant collaborator.
///
/// No request timeout is applied: a turn runs until the
/// collaborator answers or the connection fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Full URL of the chat endpoint.
    pub endpoint: String,
    /// Connect timeout for the native HTTP client.
    pub connect_timeout_secs: u64,
}

impl AssistantConfig {
    /// Point the config at another endpoint. Trailing slashes are trimmed.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        self.endpoint = endpoint.as_ref().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ASSISTANT_ENDPOINT.to_owned(), connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}
