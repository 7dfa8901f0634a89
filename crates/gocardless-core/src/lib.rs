//! Core types for the GoCardless API client.
//!
//! This crate provides the wire data model shared by the client:
//!
//! - **Environments**: `Environment`, `API_VERSION`, base URLs
//! - **Customers**: `Customer` and its request/response envelopes
//! - **API errors**: `ApiError`, `ErrorDetail`, `ApiErrorResponse`
//! - **Schemes**: `Scheme`
//!
//! # Envelopes
//!
//! Resources travel wrapped in a JSON object keyed by their plural name,
//! both on requests and on responses:
//!
//! ```json
//! {"customers": {"id": "CU123", "email": "user@example.com"}}
//! {"customers": [{"id": "CU123"}, {"id": "CU124"}]}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api_error;
pub mod customer;
mod de;
pub mod environment;
pub mod error;
pub mod scheme;

pub use api_error::{ApiError, ApiErrorResponse, ErrorDetail};
pub use customer::{Customer, CustomerListResponse, CustomerRequest, CustomerResponse, CUSTOMERS};
pub use environment::{Environment, API_VERSION, BASE_LIVE_URL, BASE_SANDBOX_URL};
pub use error::{CoreError, Result};
pub use scheme::Scheme;
