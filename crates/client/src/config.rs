//! Client configuration.
//!
//! Passed explicitly at construction instead of being read from ambient
//! globals, so every component is testable without a real session store.

/// Connection settings for the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    token: Option<String>,
}

impl ClientConfig {
    /// Create a config. The base URL is normalized by stripping any
    /// trailing slash so paths can always be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: None,
        }
    }

    /// Attach the bearer token for the current session.
    ///
    /// Absence is not validated client-side; the server rejects
    /// unauthenticated requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
