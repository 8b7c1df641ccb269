//! Transient toast notifications.

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Operation failed.
    Error,
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: u64,
    /// Severity.
    pub kind: ToastKind,
    /// Text shown.
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Notifications {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Looks up a toast by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Iterates visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Whether nothing is shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
