//! GoCardless HTTP client implementation.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use gocardless_core::{
    ApiError, ApiErrorResponse, Customer, CustomerListResponse, CustomerRequest,
    CustomerResponse, Environment, API_VERSION, CUSTOMERS,
};

use crate::config::ClientOptions;
use crate::error::ClientError;
use crate::response::Response;

/// Header carrying the pinned API version.
pub const VERSION_HEADER: &str = "GoCardless-Version";

/// MIME type used for `Accept` and `Content-Type`.
pub const JSON_MIME_TYPE: &str = "application/json";

/// GoCardless API client.
///
/// Holds the access token and base URL; both are fixed at construction.
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct GoCardlessClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl fmt::Debug for GoCardlessClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoCardlessClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GoCardlessClient {
    /// Create a client for the environment named by `environment`.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Bearer token used to authenticate requests
    /// * `environment` - `"sandbox"` or `"live"`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the environment is not
    /// recognised, or [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(access_token: impl Into<String>, environment: &str) -> Result<Self, ClientError> {
        let environment: Environment = environment.parse()?;
        Self::with_environment(access_token, environment, &ClientOptions::default())
    }

    /// Create a client for `environment` with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_environment(
        access_token: impl Into<String>,
        environment: Environment,
        options: &ClientOptions,
    ) -> Result<Self, ClientError> {
        Self::with_base_url(access_token, environment.base_url(), options)
    }

    /// Create a client targeting an arbitrary base URL.
    ///
    /// Trailing slashes are removed from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        options: &ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent.clone())
            .build()?;

        Ok(Self::with_http_client(access_token, base_url, client))
    }

    /// Create a client that sends requests through a preconfigured
    /// `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token used to authenticate requests.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Build a request for `path` with the standard headers.
    ///
    /// `path` is appended to the base URL as-is and should start with `/`.
    /// `method` is case-insensitive. `body` is sent verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidMethod`] for `PATCH`, which the API does
    /// not accept, or for a string that is not an HTTP method.
    pub fn build_request(
        &self,
        path: &str,
        method: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Request, ClientError> {
        let method = parse_method(method)?;
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(VERSION_HEADER, API_VERSION)
            .header(ACCEPT, JSON_MIME_TYPE)
            .header(CONTENT_TYPE, JSON_MIME_TYPE);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }

    /// Send a built request.
    ///
    /// Any status other than 429 is returned as a [`Response`]; checking it
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure and
    /// [`ClientError::RateLimitExceeded`] when the API answers 429.
    pub async fn execute(&self, request: reqwest::Request) -> Result<Response, ClientError> {
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Sending GoCardless request"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(url = %response.url(), "GoCardless rate limit exceeded");
            return Err(ClientError::RateLimitExceeded);
        }

        tracing::debug!(status = status.as_u16(), "Received GoCardless response");
        Ok(Response::new(response))
    }

    /// Create a customer.
    ///
    /// On success `customer` is replaced by the server's copy, which carries
    /// the assigned `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API does not answer 201.
    pub async fn create_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        let body = serde_json::to_vec(&CustomerRequest {
            customers: customer,
        })?;

        let response: CustomerResponse = self
            .send(&customers_path(), "POST", Some(body), StatusCode::CREATED)
            .await?;

        *customer = response.customers;
        Ok(())
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingId`] for an empty ID,
    /// [`ClientError::InvalidId`] for `.` or `..`, or an error if the request
    /// fails or the API does not answer 200.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, ClientError> {
        let response: CustomerResponse = self
            .send(&customer_path(id)?, "GET", None, StatusCode::OK)
            .await?;

        Ok(response.customers)
    }

    /// List customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API does not answer 200.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        let response: CustomerListResponse = self
            .send(&customers_path(), "GET", None, StatusCode::OK)
            .await?;

        Ok(response.customers)
    }

    /// Update a customer.
    ///
    /// On success `customer` is replaced by the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingId`] if `customer` has no ID,
    /// [`ClientError::InvalidId`] if it is `.` or `..`, or an error if the
    /// request fails or the API does not answer 200.
    pub async fn update_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        let path = customer_path(customer.id.as_deref().unwrap_or_default())?;

        let body = serde_json::to_vec(&CustomerRequest {
            customers: customer,
        })?;

        let response: CustomerResponse =
            self.send(&path, "PUT", Some(body), StatusCode::OK).await?;

        *customer = response.customers;
        Ok(())
    }

    /// Build, execute, check the status and decode the body.
    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        method: &str,
        body: Option<Vec<u8>>,
        expected: StatusCode,
    ) -> Result<T, ClientError> {
        let request = self.build_request(path, method, body)?;
        let response = self.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != expected {
            return Err(ClientError::Api {
                status: status.as_u16(),
                error: decode_error(&body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Decode an error envelope from a response body.
///
/// Returns `None` when the body is not a well-formed `{"error": {...}}`
/// envelope; that is not treated as a failure.
#[must_use]
pub fn decode_error(body: &[u8]) -> Option<ApiError> {
    match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(envelope) => Some(envelope.error),
        Err(err) => {
            tracing::debug!(error = %err, "Response body is not a GoCardless error envelope");
            None
        }
    }
}

fn parse_method(method: &str) -> Result<Method, ClientError> {
    let upper = method.to_ascii_uppercase();
    if upper == Method::PATCH.as_str() {
        return Err(ClientError::InvalidMethod(upper));
    }
    Method::from_bytes(upper.as_bytes()).map_err(|_| ClientError::InvalidMethod(upper))
}

fn customers_path() -> String {
    format!("/{CUSTOMERS}")
}

/// Path of a single customer, with `id` encoded as one path segment.
fn customer_path(id: &str) -> Result<String, ClientError> {
    match id {
        "" => Err(ClientError::MissingId),
        "." | ".." => Err(ClientError::InvalidId(id.to_string())),
        _ => Ok(format!("/{CUSTOMERS}/{}", urlencoding::encode(id))),
    }
}
