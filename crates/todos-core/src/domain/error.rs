//! User-Facing Errors
//!
//! Every failure collapses to one banner message per operation kind.

use thiserror::Error;

/// Errors surfaced to the user in the notification banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Unable to load todos")]
    Load,
    #[error("Unable to add a todo")]
    Create,
    #[error("Unable to delete a todo")]
    Delete,
    #[error("Title should not be empty")]
    EmptyTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_messages() {
        assert_eq!(TodoError::Load.to_string(), "Unable to load todos");
        assert_eq!(TodoError::Create.to_string(), "Unable to add a todo");
        assert_eq!(TodoError::Delete.to_string(), "Unable to delete a todo");
        assert_eq!(TodoError::EmptyTitle.to_string(), "Title should not be empty");
    }
}
