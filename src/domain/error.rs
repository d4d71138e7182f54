use thiserror::Error;

/// Rejected user input. Surfaced as a warning dialog, never mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a task before adding!")]
    EmptyTaskName,
    #[error("Please enter a valid positive number.")]
    InvalidTime,
    #[error("Please select a task to delete!")]
    NoSelectionForDelete,
    #[error("Please select a task to start the timer!")]
    NoSelectionForTimer,
}

impl InputError {
    /// Title of the warning dialog
    pub fn title(&self) -> &'static str {
        match self {
            InputError::EmptyTaskName => "No Task",
            InputError::InvalidTime => "Invalid Time",
            InputError::NoSelectionForDelete | InputError::NoSelectionForTimer => "No Selection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_and_messages() {
        assert_eq!(InputError::EmptyTaskName.title(), "No Task");
        assert_eq!(InputError::NoSelectionForTimer.title(), "No Selection");
        assert_eq!(
            InputError::InvalidTime.to_string(),
            "Please enter a valid positive number."
        );
    }
}
