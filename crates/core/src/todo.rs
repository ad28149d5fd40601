//! Todo text validation and update-change resolution.

/// Validate the text of a new todo.
///
/// Todo text must contain at least one non-whitespace character.
pub fn validate_todo_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Todo text cannot be empty".to_string());
    }
    Ok(())
}

/// The set of fields an update request actually changes.
///
/// Built with [`TodoChanges::resolve`] so the handler and repository never
/// see a blank text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub done: Option<bool>,
}

impl TodoChanges {
    /// Resolve the raw request fields into the changes to apply.
    ///
    /// A blank `text` counts as "not supplied" and leaves the stored text
    /// alone. `done` uses explicit presence, so `Some(false)` reopens a
    /// finished todo.
    pub fn resolve(text: Option<String>, done: Option<bool>) -> Self {
        Self {
            text: text.filter(|t| !t.trim().is_empty()),
            done,
        }
    }

    /// True when the update would leave the todo untouched.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none()
    }
}
