//! The customer operations as a trait, so callers can swap in a test double.

use async_trait::async_trait;
use gocardless_core::Customer;

use crate::client::GoCardlessClient;
use crate::error::ClientError;

/// Customer operations offered by the GoCardless API.
///
/// Implemented by [`GoCardlessClient`] and by [`MockClient`](crate::MockClient).
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Create a customer, replacing `customer` with the server's copy.
    async fn create_customer(&self, customer: &mut Customer) -> Result<(), ClientError>;

    /// Get a customer by ID.
    async fn get_customer(&self, id: &str) -> Result<Customer, ClientError>;

    /// List customers.
    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError>;

    /// Update a customer, replacing `customer` with the server's copy.
    async fn update_customer(&self, customer: &mut Customer) -> Result<(), ClientError>;
}

#[async_trait]
impl CustomerApi for GoCardlessClient {
    async fn create_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        GoCardlessClient::create_customer(self, customer).await
    }

    async fn get_customer(&self, id: &str) -> Result<Customer, ClientError> {
        GoCardlessClient::get_customer(self, id).await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        GoCardlessClient::list_customers(self).await
    }

    async fn update_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        GoCardlessClient::update_customer(self, customer).await
    }
}
