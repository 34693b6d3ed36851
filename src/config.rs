//! Runtime settings for the configurator client.

use std::path::Path;

/// Environment variable overriding the backend base URL.
pub const BACKEND_URL_VAR: &str = "CONFIGURATOR_BACKEND_URL";
/// Local development backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup(BACKEND_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self { backend_url }
    }

    /// Replaces the backend URL when an explicit override is given.
    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.backend_url = url;
        }
        self
    }

    /// Loads a `.env` file from the working directory if one exists.
    pub fn load_env_file() -> Result<(), dotenvy::Error> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::debug!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
