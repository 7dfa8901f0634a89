//! Client configuration.

use gocardless_core::Environment;

use crate::client::GoCardlessClient;
use crate::error::ClientError;

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_VAR: &str = "GOCARDLESS_ACCESS_TOKEN";

/// Environment variable holding the environment tag (`sandbox` or `live`).
pub const ENVIRONMENT_VAR: &str = "GOCARDLESS_ENVIRONMENT";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "GOCARDLESS_TIMEOUT_SECONDS";

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("gocardless-client-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the `User-Agent`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Everything needed to build a [`GoCardlessClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer token used to authenticate requests.
    pub access_token: String,
    /// Target environment.
    pub environment: Environment,
    /// Transport options.
    pub options: ClientOptions,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("options", &self.options)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// `GOCARDLESS_ENVIRONMENT` defaults to `sandbox` and
    /// `GOCARDLESS_TIMEOUT_SECONDS` to 30.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the token is missing or the
    /// environment tag is not recognised.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::Configuration(format!("{ACCESS_TOKEN_VAR} is not set")))?;

        let environment = lookup(ENVIRONMENT_VAR)
            .unwrap_or_else(|| Environment::Sandbox.as_str().to_string())
            .parse::<Environment>()?;

        let mut options = ClientOptions::default();
        if let Some(timeout) = lookup(TIMEOUT_VAR).and_then(|s| s.parse().ok()) {
            options.timeout_seconds = timeout;
        }

        Ok(Self {
            access_token,
            environment,
            options,
        })
    }

    /// Build a client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn into_client(self) -> Result<GoCardlessClient, ClientError> {
        GoCardlessClient::with_environment(self.access_token, self.environment, &self.options)
    }
}
