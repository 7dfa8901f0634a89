//! Test double for [`CustomerApi`].

use async_trait::async_trait;
use gocardless_core::Customer;

use crate::api::CustomerApi;
use crate::error::ClientError;

type CreateFn = Box<dyn Fn(&mut Customer) -> Result<(), ClientError> + Send + Sync>;
type GetFn = Box<dyn Fn(&str) -> Result<Customer, ClientError> + Send + Sync>;
type ListFn = Box<dyn Fn() -> Result<Vec<Customer>, ClientError> + Send + Sync>;
type UpdateFn = Box<dyn Fn(&mut Customer) -> Result<(), ClientError> + Send + Sync>;

/// A [`CustomerApi`] whose behaviour is supplied by closures.
///
/// Each operation calls the matching closure. An operation without one
/// returns [`ClientError::Configuration`].
///
/// ```
/// use gocardless_client::{ClientError, CustomerApi, MockClient};
///
/// # async fn example() {
/// let mock = MockClient::new()
///     .on_get_customer(|_| Err(ClientError::Configuration("no customer".into())));
///
/// assert!(mock.get_customer("CU123").await.is_err());
/// # }
/// ```
#[derive(Default)]
pub struct MockClient {
    create_customer_fn: Option<CreateFn>,
    get_customer_fn: Option<GetFn>,
    list_customers_fn: Option<ListFn>,
    update_customer_fn: Option<UpdateFn>,
}

impl std::fmt::Debug for MockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClient")
            .field("create_customer", &self.create_customer_fn.is_some())
            .field("get_customer", &self.get_customer_fn.is_some())
            .field("list_customers", &self.list_customers_fn.is_some())
            .field("update_customer", &self.update_customer_fn.is_some())
            .finish()
    }
}

impl MockClient {
    /// Create a mock with no behaviour configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behaviour of `create_customer`.
    #[must_use]
    pub fn on_create_customer(
        mut self,
        f: impl Fn(&mut Customer) -> Result<(), ClientError> + Send + Sync + 'static,
    ) -> Self {
        self.create_customer_fn = Some(Box::new(f));
        self
    }

    /// Set the behaviour of `get_customer`.
    #[must_use]
    pub fn on_get_customer(
        mut self,
        f: impl Fn(&str) -> Result<Customer, ClientError> + Send + Sync + 'static,
    ) -> Self {
        self.get_customer_fn = Some(Box::new(f));
        self
    }

    /// Set the behaviour of `list_customers`.
    #[must_use]
    pub fn on_list_customers(
        mut self,
        f: impl Fn() -> Result<Vec<Customer>, ClientError> + Send + Sync + 'static,
    ) -> Self {
        self.list_customers_fn = Some(Box::new(f));
        self
    }

    /// Set the behaviour of `update_customer`.
    #[must_use]
    pub fn on_update_customer(
        mut self,
        f: impl Fn(&mut Customer) -> Result<(), ClientError> + Send + Sync + 'static,
    ) -> Self {
        self.update_customer_fn = Some(Box::new(f));
        self
    }
}

fn unconfigured(operation: &str) -> ClientError {
    ClientError::Configuration(format!("MockClient has no behaviour for {operation}"))
}

#[async_trait]
impl CustomerApi for MockClient {
    async fn create_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        match &self.create_customer_fn {
            Some(f) => f(customer),
            None => Err(unconfigured("create_customer")),
        }
    }

    async fn get_customer(&self, id: &str) -> Result<Customer, ClientError> {
        match &self.get_customer_fn {
            Some(f) => f(id),
            None => Err(unconfigured("get_customer")),
        }
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        match &self.list_customers_fn {
            Some(f) => f(),
            None => Err(unconfigured("list_customers")),
        }
    }

    async fn update_customer(&self, customer: &mut Customer) -> Result<(), ClientError> {
        match &self.update_customer_fn {
            Some(f) => f(customer),
            None => Err(unconfigured("update_customer")),
        }
    }
}
