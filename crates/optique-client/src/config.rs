//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client can start with zero
//! configuration against a local backend.

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend HTTP API.
    /// Env: `OPTIQUE_API_URL`
    /// Default: `http://127.0.0.1:8000`
    pub api_url: String,

    /// Email used for non-interactive login when no session is stored.
    /// Env: `OPTIQUE_EMAIL`
    pub email: Option<String>,

    /// Password paired with `email`.
    /// Env: `OPTIQUE_PASSWORD`
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            email: None,
            password: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("OPTIQUE_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Ok(email) = std::env::var("OPTIQUE_EMAIL") {
            if !email.is_empty() {
                config.email = Some(email);
            }
        }

        if let Ok(password) = std::env::var("OPTIQUE_PASSWORD") {
            if !password.is_empty() {
                config.password = Some(password);
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }

    /// Both halves of the non-interactive credentials, when configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.clone(), password.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn credentials_require_both_halves() {
        let config = ClientConfig {
            email: Some("a@b.c".to_string()),
            password: None,
            ..Default::default()
        };
        assert!(config.credentials().is_none());
    }
}
