//! Deployment environments and their base URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Version sent in the `GoCardless-Version` header of every request.
pub const API_VERSION: &str = "2015-07-06";

/// Base URL of the live API.
pub const BASE_LIVE_URL: &str = "https://api.gocardless.com";

/// Base URL of the sandbox API.
pub const BASE_SANDBOX_URL: &str = "https://api-sandbox.gocardless.com";

/// A GoCardless deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Test environment; no real money moves.
    Sandbox,
    /// Production environment.
    Live,
}

impl Environment {
    /// Base URL requests are sent to in this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => BASE_SANDBOX_URL,
            Self::Live => BASE_LIVE_URL,
        }
    }

    /// Symbolic tag of the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            other => Err(CoreError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
