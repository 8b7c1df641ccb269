//! Ordered, duplicate-free recipient list.

use serde::{Deserialize, Serialize};

/// The selected destination emails, in selection order.
///
/// Entries are compared exactly (no case folding), matching how chips are keyed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an email unless it is already present.
    ///
    /// Returns `true` if the email was added.
    pub fn add(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.contains(&email) {
            false
        } else {
            self.0.push(email);
            true
        }
    }

    /// Removes an email.
    ///
    /// Returns `true` if the email was present.
    pub fn remove(&mut self, email: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e != email);
        self.0.len() != before
    }

    /// Merges emails into the list, keeping existing order and skipping
    /// duplicates (both against the list and within `emails`).
    ///
    /// Returns the number of emails added.
    pub fn merge<I, S>(&mut self, emails: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        emails
            .into_iter()
            .map(|email| self.add(email))
            .filter(|added| *added)
            .count()
    }

    /// Whether the email is selected.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|e| e == email)
    }

    /// Number of recipients.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no recipient is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the recipients as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Recipients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut recipients = Self::new();
        recipients.merge(iter);
        recipients
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_add_rejects_duplicate() {
        let mut recipients = Recipients::new();
        assert!(recipients.add("ann@x.com"));
        assert!(!recipients.add("ann@x.com"));
        assert_eq!(recipients.as_slice(), ["ann@x.com"]);
    }

    #[test]
    fn test_remove() {
        let mut recipients: Recipients = ["a@x.com", "b@x.com"].into_iter().collect();
        assert!(recipients.remove("a@x.com"));
        assert!(!recipients.remove("a@x.com"));
        assert_eq!(recipients.as_slice(), ["b@x.com"]);
    }

    #[test]
    fn test_merge_preserves_existing_order() {
        let mut recipients: Recipients = ["c@x.com", "a@x.com"].into_iter().collect();
        let added = recipients.merge(["a@x.com", "b@x.com", "c@x.com", "b@x.com"]);
        assert_eq!(added, 1);
        assert_eq!(recipients.as_slice(), ["c@x.com", "a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let recipients: Recipients = ["a@x.com"].into_iter().collect();
        assert_eq!(serde_json::to_string(&recipients).unwrap(), r#"["a@x.com"]"#);
    }

    proptest! {
        #[test]
        fn merge_never_duplicates(
            existing in prop::collection::vec("[a-d]@x\\.com", 0..6),
            incoming in prop::collection::vec("[a-f]@x\\.com", 0..10),
        ) {
            let mut recipients: Recipients = existing.iter().cloned().collect();
            let before: Vec<String> = recipients.as_slice().to_vec();
            recipients.merge(incoming.iter().cloned());

            let unique: HashSet<&String> = recipients.as_slice().iter().collect();
            prop_assert_eq!(unique.len(), recipients.len());
            prop_assert_eq!(&recipients.as_slice()[..before.len()], before.as_slice());
            for email in existing.iter().chain(incoming.iter()) {
                prop_assert!(recipients.contains(email));
            }
        }
    }
}
