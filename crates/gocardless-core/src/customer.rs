//! The customer resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plural resource name used for endpoints and envelopes.
pub const CUSTOMERS: &str = "customers";

/// A GoCardless customer.
///
/// Every field is optional on the client side: the API validates requests,
/// and `null` values in responses decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, beginning with `CU`. Assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the customer was created. Assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name. Required unless `company_name` is provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname. Required unless `company_name` is provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// Company name. Required unless both name fields are provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// First line of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,

    /// Second line of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    /// Third line of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,

    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Region, county or department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// ISO 639-1 language code used for notification emails.
    ///
    /// When absent the server picks one from `country_code`, falling back to `en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Civic or company number, Swedish customers only. Immutable once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swedish_identity_number: Option<String>,

    /// Custom key-value data (up to 3 keys).
    #[serde(
        default,
        deserialize_with = "crate::de::null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub metadata: HashMap<String, String>,
}

impl Customer {
    /// Create an empty customer record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the given and family names.
    #[must_use]
    pub fn with_name(mut self, given: impl Into<String>, family: impl Into<String>) -> Self {
        self.given_name = Some(given.into());
        self.family_name = Some(family.into());
        self
    }

    /// Set the company name.
    #[must_use]
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Envelope wrapping a single customer on requests.
#[derive(Debug, Serialize)]
pub struct CustomerRequest<'a> {
    /// The wrapped customer.
    pub customers: &'a Customer,
}

/// Envelope wrapping a single customer on responses.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerResponse {
    /// The wrapped customer.
    pub customers: Customer,
}

/// Envelope wrapping a list of customers on responses.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerListResponse {
    /// The wrapped customers.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub customers: Vec<Customer>,
}
