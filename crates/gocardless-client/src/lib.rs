//! GoCardless Client SDK.
//!
//! This crate provides a client library for the GoCardless REST API, covering
//! the customer resource.
//!
//! # Example
//!
//! ```no_run
//! use gocardless_client::{Customer, GoCardlessClient};
//!
//! # async fn example() -> Result<(), gocardless_client::ClientError> {
//! let client = GoCardlessClient::new("your-access-token", "sandbox")?;
//!
//! let mut customer = Customer::new()
//!     .with_email("user@example.com")
//!     .with_name("Frank", "Osborne");
//! client.create_customer(&mut customer).await?;
//!
//! println!("Created customer {:?}", customer.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors and rate limiting
//!
//! A 429 answer surfaces as [`ClientError::RateLimitExceeded`]; nothing is
//! retried. Any other unexpected status surfaces as [`ClientError::Api`],
//! carrying the decoded [`ApiError`] when the body had the usual shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod client;
mod config;
mod error;
mod mock;
mod response;

pub use api::CustomerApi;
pub use client::{decode_error, GoCardlessClient, JSON_MIME_TYPE, VERSION_HEADER};
pub use config::{ClientConfig, ClientOptions, ACCESS_TOKEN_VAR, ENVIRONMENT_VAR, TIMEOUT_VAR};
pub use error::ClientError;
pub use gocardless_core::{ApiError, Customer, Environment, ErrorDetail, Scheme, API_VERSION};
pub use mock::MockClient;
pub use response::{
    Response, RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
};
