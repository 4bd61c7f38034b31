/// Per-page lifecycle: every list page starts loading, then is either ready
/// or stuck on an error until the user retries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Blocking yes/no prompt shown before destructive actions. Injected so
/// delete flows are testable without a terminal.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Result of a user-triggered row action (delete, status change).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Completed,
    Failed(String),
}

pub(crate) fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}
