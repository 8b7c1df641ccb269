//! Recipient autocomplete: debounced lookup, client-side filtering, popover state.
//!
//! The lookup itself is performed by the caller (see [`LookupRequest`]) so this
//! type stays runtime-agnostic. Each request carries a generation number and
//! only the response to the newest request is applied; a slow response to an
//! older search term can never overwrite fresher suggestions.

use std::time::Duration;

use tracing::{debug, warn};

use crate::customer::Customer;
use crate::debounce::{Debouncer, Ticket};
use crate::recipients::Recipients;

/// Filters customers by a search term, excluding already-selected emails.
///
/// Matching is a case-insensitive substring test on name or email. Order of
/// `customers` is preserved.
#[must_use]
pub fn filter_suggestions(
    customers: &[Customer],
    term: &str,
    selected: &Recipients,
) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| c.matches(term))
        .filter(|c| !selected.contains(&c.email))
        .cloned()
        .collect()
}

/// A lookup the caller should run, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Generation to hand back to [`Autocomplete::suggestions_loaded`].
    pub generation: u64,
    /// Search term the suggestions are filtered by.
    pub term: String,
}

/// State of the recipient autocomplete field.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    input: String,
    suggestions: Vec<Customer>,
    is_loading: bool,
    popover_open: bool,
    debouncer: Debouncer<String>,
    generation: u64,
    active_term: Option<String>,
}

impl Autocomplete {
    /// Creates an empty field with the given debounce interval.
    #[must_use]
    pub const fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            is_loading: false,
            popover_open: false,
            debouncer: Debouncer::new(debounce),
            generation: 0,
            active_term: None,
        }
    }

    /// Current text in the input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[Customer] {
        &self.suggestions
    }

    /// Whether a lookup is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the suggestion popover is shown.
    #[must_use]
    pub const fn is_popover_open(&self) -> bool {
        self.popover_open
    }

    /// Access to the debouncer, for scheduling the quiet-period sleep.
    #[must_use]
    pub const fn debouncer(&self) -> &Debouncer<String> {
        &self.debouncer
    }

    /// Records new input text and restarts the debounce.
    pub fn input_changed(&mut self, text: impl Into<String>) -> Ticket {
        self.input = text.into();
        self.debouncer.push(self.input.clone())
    }

    /// Handles the end of a debounce period.
    ///
    /// Superseded tickets are ignored. An empty term clears the suggestions and
    /// closes the popover. Otherwise a new lookup generation starts and the
    /// request to run is returned.
    pub fn debounce_elapsed(&mut self, ticket: Ticket) -> Option<LookupRequest> {
        let term = self.debouncer.settle(ticket)?;

        if term.is_empty() {
            self.generation += 1;
            self.active_term = None;
            self.is_loading = false;
            self.suggestions.clear();
            self.popover_open = false;
            return None;
        }

        self.generation += 1;
        self.is_loading = true;
        self.active_term = Some(term.clone());
        debug!(generation = self.generation, term = %term, "Starting customer lookup");

        Some(LookupRequest {
            generation: self.generation,
            term,
        })
    }

    /// Applies the outcome of a lookup.
    ///
    /// Responses from an older generation are dropped. Returns `true` if the
    /// response was applied.
    pub fn suggestions_loaded<E: std::fmt::Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<Customer>, E>,
        selected: &Recipients,
    ) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale lookup response"
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(customers) => {
                let term = self.active_term.as_deref().unwrap_or_default();
                self.suggestions = filter_suggestions(&customers, term, selected);
                self.popover_open = !self.suggestions.is_empty();
            }
            Err(e) => {
                warn!("Failed to fetch customers: {e}");
                self.suggestions.clear();
                self.popover_open = false;
            }
        }
        true
    }

    /// Adds a suggested email to the selection and clears the field.
    ///
    /// Returns `true` if the selection grew.
    pub fn select(&mut self, email: &str, selected: &mut Recipients) -> bool {
        let added = selected.add(email);
        self.input.clear();
        self.suggestions.clear();
        self.popover_open = false;
        self.debouncer.cancel();
        added
    }

    /// Removes an email from the selection.
    pub fn remove(&mut self, email: &str, selected: &mut Recipients) -> bool {
        let removed = selected.remove(email);
        if removed {
            self.selection_changed(selected);
        }
        removed
    }

    /// Re-applies the exclusion filter after the selection changed elsewhere
    /// (e.g. a bulk load).
    pub fn selection_changed(&mut self, selected: &Recipients) {
        self.suggestions.retain(|c| !selected.contains(&c.email));
        if self.suggestions.is_empty() {
            self.popover_open = false;
        }
    }

    /// Hides the popover without touching the suggestions.
    pub const fn close_popover(&mut self) {
        self.popover_open = false;
    }

    /// Clears everything, including outstanding lookups and debounce tickets.
    pub fn reset(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.is_loading = false;
        self.popover_open = false;
        self.debouncer.cancel();
        self.generation += 1;
        self.active_term = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new("1", "Ann", "ann@x.com"),
            Customer::new("2", "Joanna Smith", "jsmith@x.com"),
            Customer::new("3", "Bob", "bob@annex.org"),
            Customer::new("4", "Carl", "carl@x.com"),
        ]
    }

    fn autocomplete() -> Autocomplete {
        Autocomplete::new(Duration::from_millis(300))
    }

    #[test]
    fn test_filter_matches_name_or_email_case_insensitive() {
        let found = filter_suggestions(&customers(), "ANN", &Recipients::new());
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_excludes_selected() {
        let selected: Recipients = ["ann@x.com"].into_iter().collect();
        let found = filter_suggestions(&customers(), "ann", &selected);
        assert!(found.iter().all(|c| c.email != "ann@x.com"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_lookup_flow_opens_popover() {
        let mut field = autocomplete();
        let ticket = field.input_changed("ann");
        let request = field.debounce_elapsed(ticket).unwrap();
        assert_eq!(request.term, "ann");
        assert!(field.is_loading());

        assert!(field.suggestions_loaded::<String>(
            request.generation,
            Ok(customers()),
            &Recipients::new()
        ));
        assert!(!field.is_loading());
        assert!(field.is_popover_open());
        assert_eq!(field.suggestions().len(), 3);
    }

    #[test]
    fn test_no_matches_keeps_popover_closed() {
        let mut field = autocomplete();
        let ticket = field.input_changed("zzz");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.suggestions_loaded::<String>(request.generation, Ok(customers()), &Recipients::new());
        assert!(field.suggestions().is_empty());
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_empty_term_clears_without_lookup() {
        let mut field = autocomplete();
        let ticket = field.input_changed("ann");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.suggestions_loaded::<String>(request.generation, Ok(customers()), &Recipients::new());
        assert!(field.is_popover_open());

        let ticket = field.input_changed("");
        assert!(field.debounce_elapsed(ticket).is_none());
        assert!(field.suggestions().is_empty());
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_whitespace_term_still_looks_up() {
        let mut field = autocomplete();
        let ticket = field.input_changed("  ");
        let request = field.debounce_elapsed(ticket).unwrap();
        assert_eq!(request.term, "  ");
        assert!(field.is_loading());

        field.suggestions_loaded::<String>(request.generation, Ok(customers()), &Recipients::new());
        assert!(!field.is_loading());
        assert!(field.suggestions().is_empty());
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_superseded_ticket_starts_no_lookup() {
        let mut field = autocomplete();
        let first = field.input_changed("a");
        let second = field.input_changed("an");
        assert!(field.debounce_elapsed(first).is_none());
        assert_eq!(field.debounce_elapsed(second).unwrap().term, "an");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut field = autocomplete();
        let ticket = field.input_changed("bob");
        let stale = field.debounce_elapsed(ticket).unwrap();
        let ticket = field.input_changed("carl");
        let fresh = field.debounce_elapsed(ticket).unwrap();

        assert!(field.suggestions_loaded::<String>(
            fresh.generation,
            Ok(customers()),
            &Recipients::new()
        ));
        assert!(!field.suggestions_loaded::<String>(
            stale.generation,
            Ok(customers()),
            &Recipients::new()
        ));

        let emails: Vec<&str> = field.suggestions().iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, ["carl@x.com"]);
    }

    #[test]
    fn test_failed_lookup_clears_state() {
        let mut field = autocomplete();
        let ticket = field.input_changed("ann");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.suggestions_loaded(request.generation, Err("connection refused"), &Recipients::new());
        assert!(!field.is_loading());
        assert!(field.suggestions().is_empty());
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_select_adds_once_and_clears_input() {
        let mut field = autocomplete();
        let mut selected = Recipients::new();
        let ticket = field.input_changed("ann");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.suggestions_loaded::<String>(request.generation, Ok(customers()), &selected);

        assert!(field.select("ann@x.com", &mut selected));
        assert!(!field.select("ann@x.com", &mut selected));
        assert_eq!(selected.as_slice(), ["ann@x.com"]);
        assert_eq!(field.input(), "");
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_select_cancels_pending_debounce() {
        let mut field = autocomplete();
        let mut selected = Recipients::new();
        let ticket = field.input_changed("an");
        field.select("ann@x.com", &mut selected);
        assert!(field.debounce_elapsed(ticket).is_none());
    }

    #[test]
    fn test_selection_change_refilters_suggestions() {
        let mut field = autocomplete();
        let ticket = field.input_changed("carl");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.suggestions_loaded::<String>(request.generation, Ok(customers()), &Recipients::new());
        assert!(field.is_popover_open());

        let selected: Recipients = ["carl@x.com"].into_iter().collect();
        field.selection_changed(&selected);
        assert!(field.suggestions().is_empty());
        assert!(!field.is_popover_open());
    }

    #[test]
    fn test_reset_drops_in_flight_lookup() {
        let mut field = autocomplete();
        let ticket = field.input_changed("ann");
        let request = field.debounce_elapsed(ticket).unwrap();
        field.reset();
        assert!(!field.suggestions_loaded::<String>(
            request.generation,
            Ok(customers()),
            &Recipients::new()
        ));
        assert!(field.suggestions().is_empty());
    }

    proptest! {
        #[test]
        fn filter_results_match_and_exclude_selected(
            names in prop::collection::vec("[a-zA-Z]{1,6}", 0..8),
            term in "[a-zA-Z]{0,3}",
            selected_mask in prop::collection::vec(any::<bool>(), 8),
        ) {
            let customers: Vec<Customer> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Customer::new(i.to_string(), n.clone(), format!("{}{i}@x.com", n.to_lowercase())))
                .collect();
            let selected: Recipients = customers
                .iter()
                .zip(&selected_mask)
                .filter(|(_, s)| **s)
                .map(|(c, _)| c.email.clone())
                .collect();

            let found = filter_suggestions(&customers, &term, &selected);
            let lower = term.to_lowercase();
            for c in &found {
                prop_assert!(
                    c.name.to_lowercase().contains(&lower) || c.email.to_lowercase().contains(&lower)
                );
                prop_assert!(!selected.contains(&c.email));
            }
            let expected = customers
                .iter()
                .filter(|c| c.matches(&term) && !selected.contains(&c.email))
                .count();
            prop_assert_eq!(found.len(), expected);
        }
    }
}
