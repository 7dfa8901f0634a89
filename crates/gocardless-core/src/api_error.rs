//! Structured errors returned by the GoCardless API.
//!
//! Failed requests carry a body of the form:
//!
//! ```json
//! {"error": {"documentation_url": "...", "message": "...", "type": "...",
//!            "code": 422, "request_id": "...", "errors": [...]}}
//! ```
//!
//! These types are only ever produced by decoding such a body; they are
//! `#[non_exhaustive]` so callers outside this crate cannot build them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope wrapping an [`ApiError`] in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// The wrapped error.
    pub error: ApiError,
}

/// An error reported by the GoCardless API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Default))]
#[non_exhaustive]
pub struct ApiError {
    /// Link to the documentation for this error.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub documentation_url: String,

    /// Human-readable description.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub message: String,

    /// Identifier of the failed request, for support queries.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub request_id: String,

    /// Field-level details.
    #[serde(default, rename = "errors", deserialize_with = "crate::de::null_as_default")]
    pub details: Vec<ErrorDetail>,

    /// Error type tag, e.g. `validation_failed`.
    #[serde(default, rename = "type", deserialize_with = "crate::de::null_as_default")]
    pub error_type: String,

    /// HTTP status code reported by the API.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub code: i64,
}

/// A single field-level problem within an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Default))]
#[non_exhaustive]
pub struct ErrorDetail {
    /// Description of the problem.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub message: String,

    /// Name of the offending field.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub field: String,

    /// JSON pointer into the request body.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub request_pointer: String,
}

impl fmt::Display for ApiError {
    /// Writes the JSON encoding of the error.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for ApiError {}
