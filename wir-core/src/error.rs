use thiserror::Error;

/// Ways a weather search can fail.
///
/// `IncompleteSelection` is recovered locally by prompting the user. The
/// remaining variants all end the same way: no result shown, loading cleared,
/// diagnostic logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Search triggered without both a coordinate and a date
    #[error("Please select a location on the map and a date.")]
    IncompleteSelection,

    /// The request could not complete (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered outside the 2xx range
    #[error("Weather service error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body was not a weather summary
    #[error("Malformed weather summary: {0}")]
    Parse(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl QueryError {
    pub fn is_incomplete_selection(&self) -> bool {
        matches!(self, QueryError::IncompleteSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code_and_text() {
        let err = QueryError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Weather service error: 503 Service Unavailable");
        assert!(!err.is_incomplete_selection());
    }

    #[test]
    fn incomplete_selection_is_distinguished() {
        assert!(QueryError::IncompleteSelection.is_incomplete_selection());
        assert!(!QueryError::Transport("refused".into()).is_incomplete_selection());
    }
}
