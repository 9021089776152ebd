//! Customer records.
//!
//! A customer is written once per booking. Names and contacts are free
//! text; the only rule is that neither is blank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned identity of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation error for customer details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Name and contact of the person making a booking, before it is stored.
///
/// Both values are trimmed. Blank values are rejected.
///
/// # Examples
///
/// ```
/// use tablebook::CustomerDetails;
///
/// let details = CustomerDetails::new("  Alice ", "a@x.com").unwrap();
/// assert_eq!(details.name(), "Alice");
///
/// assert!(CustomerDetails::new("", "a@x.com").is_err());
/// assert!(CustomerDetails::new("Alice", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    name: String,
    contact: String,
}

impl CustomerDetails {
    /// Validates and trims the given name and contact.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is empty after trimming whitespace.
    pub fn new(name: impl AsRef<str>, contact: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = non_blank("name", name.as_ref())?;
        let contact = non_blank("contact", contact.as_ref())?;
        Ok(Self { name, contact })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact string.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

fn non_blank(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} must be non-empty after trimming whitespace"),
        });
    }
    Ok(trimmed.to_string())
}

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    #[serde(flatten)]
    details: CustomerDetails,
}

impl Customer {
    /// Creates a customer record from its stored parts.
    #[must_use]
    pub const fn new(id: CustomerId, details: CustomerDetails) -> Self {
        Self { id, details }
    }

    /// Returns the customer id.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Returns the contact string.
    #[must_use]
    pub fn contact(&self) -> &str {
        self.details.contact()
    }

    /// Returns the name and contact pair.
    #[must_use]
    pub const fn details(&self) -> &CustomerDetails {
        &self.details
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer #{}: {} ({})", self.id, self.name(), self.contact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_trim() {
        let details = CustomerDetails::new(" Bob ", " b@x.com\n").unwrap();
        assert_eq!(details.name(), "Bob");
        assert_eq!(details.contact(), "b@x.com");
    }

    #[test]
    fn test_details_reject_blank_name() {
        let err = CustomerDetails::new(" \t", "b@x.com").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_details_reject_blank_contact() {
        let err = CustomerDetails::new("Bob", "").unwrap_err();
        assert_eq!(err.field, "contact");
        assert!(err.to_string().contains("contact must be non-empty"));
    }

    #[test]
    fn test_contact_format_not_checked() {
        // Phone numbers, e-mails and anything else are accepted as-is.
        assert!(CustomerDetails::new("Bob", "call the front desk").is_ok());
    }

    #[test]
    fn test_customer_display() {
        let customer = Customer::new(
            CustomerId::new(1),
            CustomerDetails::new("Alice", "a@x.com").unwrap(),
        );
        assert_eq!(customer.to_string(), "customer #1: Alice (a@x.com)");
    }

    #[test]
    fn test_customer_serializes_flat() {
        let customer = Customer::new(
            CustomerId::new(1),
            CustomerDetails::new("Alice", "a@x.com").unwrap(),
        );
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["contact"], "a@x.com");
    }
}
