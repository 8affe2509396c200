use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown type: '{0}'")]
    UnknownKind(String),

    #[error("Invalid field: '{0}'")]
    InvalidField(String),

    #[error("Malformed records file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad phone number pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl AppError {
    /// Errors caused by what the user typed. The session reports them and
    /// carries on; anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::Io(_) | AppError::Json(_) | AppError::Regex(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<usize>().unwrap_err();
        let err = AppError::from(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_invalid_field_message() {
        let err = AppError::InvalidField("email".to_string());

        assert_eq!(format!("{}", err), "Invalid field: 'email'");
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Record".to_string());

        assert_eq!(err.to_string(), "Record Not found");
    }

    #[test]
    fn input_errors_are_recoverable() {
        assert!(AppError::UnknownKind("robot".to_string()).is_recoverable());
        assert!(AppError::ParseCommand("dance".to_string()).is_recoverable());

        let io = std::io::Error::other("disk gone");
        assert!(!AppError::Io(io).is_recoverable());
    }
}
