//! Customer record returned by the lookup endpoint.

use serde::{Deserialize, Serialize};

/// A customer record as served by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Endpoint-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl Customer {
    /// Creates a new customer record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks if the customer matches a search term (case-insensitive substring
    /// match on email or name).
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term_lower = term.to_lowercase();
        self.email.to_lowercase().contains(&term_lower)
            || self.name.to_lowercase().contains(&term_lower)
    }
}
