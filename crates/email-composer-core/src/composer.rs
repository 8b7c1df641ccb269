//! Composer dialog state.
//!
//! Ties the form, the recipient autocomplete and the toast queue together.
//! Async work (lookups, simulated delivery) is returned to the caller as
//! requests and fed back through the `*_completed` / `*_loaded` methods, so
//! the GUI decides how to run it.
//!
//! Every close starts a new session. Bulk-load and submit completions carry the
//! session they were started in, and a completion from an earlier session never
//! touches the current draft.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::autocomplete::{Autocomplete, LookupRequest};
use crate::config::ComposerConfig;
use crate::customer::Customer;
use crate::debounce::Ticket;
use crate::form::{ComposeForm, EmailDraft, Field, FieldError};
use crate::notification::{Notifications, ToastKind};

/// Toast shown after a successful submit.
pub const SENT_MESSAGE: &str = "Email Sent!";
/// Toast shown after a successful bulk load.
pub const LOADED_ALL_MESSAGE: &str = "All customer emails loaded";
/// Toast shown when the bulk load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load customer emails.";

/// State of the compose dialog.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)] // Independent UI flags
pub struct Composer {
    is_open: bool,
    is_submitting: bool,
    is_loading_all: bool,
    submit_attempted: bool,
    session: u64,
    form: ComposeForm,
    errors: Vec<FieldError>,
    autocomplete: Autocomplete,
    notifications: Notifications,
}

impl Composer {
    /// Creates a closed composer.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            is_open: false,
            is_submitting: false,
            is_loading_all: false,
            submit_attempted: false,
            session: 0,
            form: ComposeForm::new(),
            errors: Vec::new(),
            autocomplete: Autocomplete::new(debounce),
            notifications: Notifications::new(),
        }
    }

    /// Creates a closed composer using the configured debounce interval.
    #[must_use]
    pub fn from_config(config: &ComposerConfig) -> Self {
        Self::new(config.debounce())
    }

    /// Whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a submit is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether a bulk load is in flight.
    #[must_use]
    pub const fn is_loading_all(&self) -> bool {
        self.is_loading_all
    }

    /// Identifies the current dialog session; bumped by every close.
    #[must_use]
    pub const fn session(&self) -> u64 {
        self.session
    }

    /// Current form values.
    #[must_use]
    pub const fn form(&self) -> &ComposeForm {
        &self.form
    }

    /// Recipient autocomplete state.
    #[must_use]
    pub const fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    /// Visible toasts.
    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// First validation error for a field, if any.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Shows the dialog.
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the dialog and discards the draft.
    ///
    /// Toasts survive so a notification raised just before closing stays
    /// visible. An in-flight submit or bulk load keeps its flag until its
    /// completion arrives, so at most one of each runs at a time.
    pub fn close(&mut self) {
        self.is_open = false;
        self.session += 1;
        self.reset_form();
    }

    /// Updates the subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.form.subject = subject.into();
        self.revalidate();
    }

    /// Updates the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
        self.revalidate();
    }

    /// Records new text in the recipient search input.
    pub fn search_changed(&mut self, text: impl Into<String>) -> Ticket {
        self.autocomplete.input_changed(text)
    }

    /// Handles the end of a debounce period; returns the lookup to run, if any.
    pub fn debounce_elapsed(&mut self, ticket: Ticket) -> Option<LookupRequest> {
        self.autocomplete.debounce_elapsed(ticket)
    }

    /// Applies a suggestion lookup outcome.
    pub fn suggestions_loaded<E: std::fmt::Display>(
        &mut self,
        generation: u64,
        result: Result<Vec<Customer>, E>,
    ) -> bool {
        self.autocomplete
            .suggestions_loaded(generation, result, &self.form.destination_emails)
    }

    /// Adds a suggested email to the recipients.
    pub fn select_suggestion(&mut self, email: &str) -> bool {
        let added = self
            .autocomplete
            .select(email, &mut self.form.destination_emails);
        self.revalidate();
        added
    }

    /// Removes a recipient chip.
    pub fn remove_recipient(&mut self, email: &str) -> bool {
        let removed = self
            .autocomplete
            .remove(email, &mut self.form.destination_emails);
        self.revalidate();
        removed
    }

    /// Hides the suggestion popover.
    pub const fn close_popover(&mut self) {
        self.autocomplete.close_popover();
    }

    /// Validates and starts a submit.
    ///
    /// Returns `None` if a submit is already running or validation fails; in
    /// the latter case the field errors are stored for display.
    pub fn begin_submit(&mut self) -> Option<EmailDraft> {
        if self.is_submitting {
            return None;
        }

        self.submit_attempted = true;
        match self.form.validate() {
            Ok(draft) => {
                self.errors.clear();
                self.is_submitting = true;
                Some(draft)
            }
            Err(errors) => {
                info!(count = errors.len(), "Compose form failed validation");
                self.errors = errors;
                None
            }
        }
    }

    /// Finishes a submit started in `session` and shows the success toast.
    ///
    /// The dialog is reset and closed only if it is still the session the
    /// submit came from. Returns the toast id.
    pub fn submit_completed(&mut self, session: u64) -> u64 {
        self.is_submitting = false;
        if session == self.session {
            self.close();
        } else {
            debug!(session, current = self.session, "Submit finished after the dialog closed");
        }
        self.notifications.push(ToastKind::Success, SENT_MESSAGE)
    }

    /// Starts a bulk load. Returns `false` if one is already running.
    pub const fn begin_load_all(&mut self) -> bool {
        if self.is_loading_all {
            return false;
        }
        self.is_loading_all = true;
        true
    }

    /// Applies a bulk load outcome and returns the id of the toast shown.
    ///
    /// Outcomes of a load started in an earlier session are dropped and show
    /// no toast.
    pub fn load_all_completed<E: std::fmt::Display>(
        &mut self,
        session: u64,
        result: Result<Vec<Customer>, E>,
    ) -> Option<u64> {
        self.is_loading_all = false;
        if session != self.session {
            debug!(session, current = self.session, "Discarding bulk load from a closed dialog");
            return None;
        }

        let id = match result {
            Ok(customers) => {
                let added = self
                    .form
                    .destination_emails
                    .merge(customers.into_iter().map(|c| c.email));
                info!(
                    added,
                    total = self.form.destination_emails.len(),
                    "Loaded all customer emails"
                );
                self.autocomplete
                    .selection_changed(&self.form.destination_emails);
                self.validate_now();
                self.notifications
                    .push(ToastKind::Success, LOADED_ALL_MESSAGE)
            }
            Err(e) => {
                warn!("Failed to load customer emails: {e}");
                self.notifications.push(ToastKind::Error, LOAD_FAILED_MESSAGE)
            }
        };
        Some(id)
    }

    /// Removes a toast.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        self.notifications.dismiss(id)
    }

    fn reset_form(&mut self) {
        self.form.reset();
        self.errors.clear();
        self.submit_attempted = false;
        self.autocomplete.reset();
    }

    /// Re-runs validation once the user has tried to submit, so messages track
    /// edits.
    fn revalidate(&mut self) {
        if self.submit_attempted {
            self.validate_now();
        }
    }

    fn validate_now(&mut self) {
        self.errors = self.form.validate().err().unwrap_or_default();
    }
}

/// Stand-in for delivery: logs the draft and waits `delay`.
///
/// Nothing is sent.
pub async fn simulate_delivery(draft: EmailDraft, delay: Duration) {
    let payload = serde_json::to_string(&draft).unwrap_or_else(|e| format!("<unserializable: {e}>"));
    info!(
        recipients = draft.destination_emails.len(),
        draft = %payload,
        "Form submitted"
    );
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio_test::{assert_pending, assert_ready, task};

    use super::*;

    fn composer() -> Composer {
        let mut composer = Composer::new(Duration::from_millis(300));
        composer.open();
        composer
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new("1", "Ann", "ann@x.com"),
            Customer::new("2", "Bob", "bob@x.com"),
        ]
    }

    fn fill_valid(composer: &mut Composer) {
        composer.set_subject("Exciting News!");
        composer.set_description("Our spring catalogue is out.");
        let ticket = composer.search_changed("ann");
        let request = composer.debounce_elapsed(ticket).unwrap();
        composer.suggestions_loaded::<String>(request.generation, Ok(customers()));
        composer.select_suggestion("ann@x.com");
    }

    #[test]
    fn test_submit_empty_form_reports_field_messages() {
        let mut composer = composer();
        assert!(composer.begin_submit().is_none());
        assert!(!composer.is_submitting());
        assert_eq!(
            composer.error_for(Field::Subject).map(FieldError::message),
            Some("Subject is required.")
        );
        assert_eq!(
            composer.error_for(Field::Description).map(FieldError::message),
            Some("Description must be at least 10 characters.")
        );
        assert_eq!(
            composer
                .error_for(Field::DestinationEmails)
                .map(FieldError::message),
            Some("At least one recipient email is required.")
        );
    }

    #[test]
    fn test_errors_hidden_until_first_submit() {
        let mut composer = composer();
        composer.set_subject("");
        assert!(composer.error_for(Field::Subject).is_none());
    }

    #[test]
    fn test_edits_after_failed_submit_revalidate() {
        let mut composer = composer();
        composer.begin_submit();
        composer.set_subject("Hello");
        assert!(composer.error_for(Field::Subject).is_none());
        assert!(composer.error_for(Field::Description).is_some());
    }

    #[test]
    fn test_valid_submit_flow() {
        let mut composer = composer();
        fill_valid(&mut composer);

        let draft = composer.begin_submit().unwrap();
        assert_eq!(draft.destination_emails, ["ann@x.com"]);
        assert!(composer.is_submitting());
        assert!(composer.begin_submit().is_none());

        let toast = composer.submit_completed(composer.session());
        assert!(!composer.is_open());
        assert!(!composer.is_submitting());
        assert_eq!(composer.form(), &ComposeForm::new());
        assert_eq!(
            composer.notifications().get(toast).map(|t| t.message.as_str()),
            Some(SENT_MESSAGE)
        );
    }

    #[test]
    fn test_load_all_merges_without_duplicates() {
        let mut composer = composer();
        fill_valid(&mut composer);
        assert!(composer.begin_load_all());
        assert!(!composer.begin_load_all());

        let toast = composer
            .load_all_completed::<String>(composer.session(), Ok(customers()))
            .unwrap();
        assert!(!composer.is_loading_all());
        assert_eq!(
            composer.form().destination_emails.as_slice(),
            ["ann@x.com", "bob@x.com"]
        );
        assert_eq!(
            composer.notifications().get(toast).map(|t| t.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn test_load_all_clears_recipient_error() {
        let mut composer = composer();
        composer.begin_submit();
        assert!(composer.error_for(Field::DestinationEmails).is_some());

        composer.begin_load_all();
        composer.load_all_completed::<String>(composer.session(), Ok(customers()));
        assert!(composer.error_for(Field::DestinationEmails).is_none());
    }

    #[test]
    fn test_load_all_failure_shows_error_toast() {
        let mut composer = composer();
        composer.begin_load_all();
        let toast = composer
            .load_all_completed(composer.session(), Err("timeout"))
            .unwrap();
        let toast = composer.notifications().get(toast).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, LOAD_FAILED_MESSAGE);
        assert!(composer.form().destination_emails.is_empty());
        assert!(!composer.is_loading_all());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut composer = composer();
        fill_valid(&mut composer);
        composer.search_changed("bo");
        composer.close();
        assert!(!composer.is_open());
        assert_eq!(composer.form(), &ComposeForm::new());
        assert_eq!(composer.autocomplete().input(), "");
    }

    #[test]
    fn test_load_all_from_closed_dialog_is_discarded() {
        let mut composer = composer();
        assert!(composer.begin_load_all());
        let first = composer.session();

        composer.close();
        composer.open();
        assert!(composer.is_loading_all());
        assert!(!composer.begin_load_all());

        assert!(
            composer
                .load_all_completed::<String>(first, Ok(customers()))
                .is_none()
        );
        assert!(composer.form().destination_emails.is_empty());
        assert!(composer.notifications().is_empty());
        assert!(!composer.is_loading_all());

        assert!(composer.begin_load_all());
        composer.load_all_completed::<String>(composer.session(), Ok(customers()));
        assert_eq!(composer.form().destination_emails.len(), 2);
    }

    #[test]
    fn test_submit_from_closed_dialog_keeps_new_draft() {
        let mut composer = composer();
        fill_valid(&mut composer);
        composer.begin_submit().unwrap();
        let first = composer.session();

        composer.close();
        composer.open();
        composer.set_subject("Second draft");
        assert!(composer.is_submitting());
        assert!(composer.begin_submit().is_none());

        let toast = composer.submit_completed(first);
        assert!(composer.is_open());
        assert!(!composer.is_submitting());
        assert_eq!(composer.form().subject, "Second draft");
        assert_eq!(
            composer.notifications().get(toast).map(|t| t.message.as_str()),
            Some(SENT_MESSAGE)
        );
    }

    #[test]
    fn test_remove_recipient() {
        let mut composer = composer();
        fill_valid(&mut composer);
        assert!(composer.remove_recipient("ann@x.com"));
        assert!(composer.form().destination_emails.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delivery_takes_configured_delay() {
        let draft = ComposeForm::new().to_draft();
        let mut delivery = task::spawn(simulate_delivery(draft, Duration::from_secs(1)));
        assert_pending!(delivery.poll());

        tokio::time::advance(Duration::from_millis(999)).await;
        assert_pending!(delivery.poll());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_ready!(delivery.poll());
    }
}
