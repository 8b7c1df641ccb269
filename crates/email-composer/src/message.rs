//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use email_composer_core::{ComposerConfig, Customer, Ticket};
use iced::widget::text_editor;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Configuration finished loading.
    ConfigLoaded(Result<ComposerConfig, String>),
    /// Open the compose dialog.
    OpenComposer,
    /// Compose dialog messages.
    Composer(ComposerMessage),
    /// A toast's display time ran out.
    DismissToast(u64),
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no effect.
    Ignored,
}

/// Messages for the compose dialog.
#[derive(Debug, Clone)]
pub enum ComposerMessage {
    /// Subject changed.
    SubjectChanged(String),
    /// Description editor action.
    DescriptionEdited(text_editor::Action),
    /// Recipient search text changed.
    SearchChanged(String),
    /// Debounce quiet period ended.
    DebounceElapsed(Ticket),
    /// Suggestion lookup finished.
    SuggestionsLoaded(u64, Result<Vec<Customer>, String>),
    /// Suggestion picked.
    SelectSuggestion(String),
    /// Recipient chip removed.
    RemoveRecipient(String),
    /// Load every customer email.
    LoadAll,
    /// Bulk load started in the given dialog session finished.
    AllLoaded(u64, Result<Vec<Customer>, String>),
    /// Submit the form.
    Submit,
    /// Simulated delivery started in the given dialog session finished.
    Submitted(u64),
    /// Close the dialog.
    Cancel,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Open the composer (Ctrl+N).
    ComposeNew,
    /// Submit the form (Ctrl+Enter).
    Send,
    /// Close the popover, else the dialog (Escape).
    Cancel,
}
