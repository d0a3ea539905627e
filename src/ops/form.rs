//! Validated card input, shared by the TUI form and the CLI write commands.
//!
//! Input collection (modal form, clap arguments) is decoupled from
//! validation: whatever the source, a submission either becomes a
//! [`CardForm`] or is rejected with a typed reason.

use crate::model::Lane;

/// Error type for card form validation
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("title cannot be empty")]
    EmptyTitle,
}

/// A validated card submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub title: String,
    pub description: String,
    pub lane: Lane,
}

/// Validate raw form input. Titles are trimmed and must be non-empty;
/// descriptions are trimmed and may be empty.
pub fn validate(title: &str, description: &str, lane: Lane) -> Result<CardForm, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::EmptyTitle);
    }
    Ok(CardForm {
        title: title.to_string(),
        description: description.trim().to_string(),
        lane,
    })
}
