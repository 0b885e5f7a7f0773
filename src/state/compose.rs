//! Draft-message state for the compose form.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// The message being written.
///
/// The draft survives failed submissions on purpose: only a mined
/// transaction clears it, so the user never loses text to a rejected
/// prompt or a revert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    /// Current input text; may be empty or whitespace, nothing validates it.
    pub draft: String,
}

impl ComposeState {
    /// Overwrite the draft with the latest input value.
    pub fn edit(&mut self, text: String) {
        self.draft = text;
    }

    /// Record the outcome of a submission: a confirmed one clears the
    /// draft, a failed one leaves it untouched.
    pub fn resolve_submission(&mut self, confirmed: bool) {
        if confirmed {
            self.draft.clear();
        }
    }
}
