//! Creditor scheme identifiers.

use serde::{Deserialize, Serialize};

/// A scheme identifier used by a creditor to collect payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    /// First line of the scheme address.
    pub address_line1: Option<String>,
    /// Second line of the scheme address.
    pub address_line2: Option<String>,
    /// Third line of the scheme address.
    pub address_line3: Option<String>,
    /// Whether a custom mandate reference may be supplied.
    pub can_specify_mandate_reference: bool,
    /// City of the scheme address.
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Minimum days of notice before a payment is collected.
    pub minimum_advance_notice: u32,
    /// Name shown to customers.
    pub name: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Postal code of the scheme address.
    pub postal_code: Option<String>,
    /// Scheme identifier reference.
    pub reference: Option<String>,
    /// Region of the scheme address.
    pub region: Option<String>,
    /// Scheme name, e.g. `bacs` or `sepa`.
    pub scheme: Option<String>,
}
