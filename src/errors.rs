use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contact '{0}' not found!")]
    NotFound(String),

    #[error("Invalid choice! Please select 1-6.")]
    ParseCommand(String),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Errors the menu reports and moves past. Storage failures are not
    /// recoverable and end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::ParseCommand(_) | AppError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Alice".to_string());

        assert_eq!(format!("{}", err), "Contact 'Alice' not found!");
    }

    #[test]
    fn confirm_validation_message_is_passed_through() {
        let err = AppError::Validation("Phone number is required!".to_string());

        assert_eq!(format!("{}", err), "Phone number is required!");
    }

    #[test]
    fn storage_errors_are_not_recoverable() {
        let io = AppError::from(std::io::Error::other("disk full"));
        let json = AppError::from(serde_json::from_str::<u8>("nope").unwrap_err());

        assert!(!io.is_recoverable());
        assert!(!json.is_recoverable());
        assert!(AppError::ParseCommand("9".to_string()).is_recoverable());
        assert!(AppError::NotFound("Bob".to_string()).is_recoverable());
    }
}
