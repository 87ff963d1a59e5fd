use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the Meteosource client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status.
    #[error("Meteosource request failed with status {status}: {description}")]
    Status {
        status: StatusCode,
        description: String,
    },

    /// Place search returned an empty match list.
    #[error("no place matched '{query}'")]
    NoMatch { query: String },

    /// The point forecast response carried no daily entries.
    #[error("forecast response contained no daily data")]
    EmptyForecast,

    /// Transport-level failure (connect, timeout, TLS).
    #[error("failed to reach Meteosource: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body does not match the expected shape.
    #[error("failed to parse Meteosource response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProviderError {
    /// HTTP status of the provider response, when the error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_description() {
        let err = ProviderError::Status {
            status: StatusCode::NOT_FOUND,
            description: "Place not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Place not found"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn no_match_names_the_query() {
        let err = ProviderError::NoMatch { query: "Atlantis".to_string() };
        assert!(err.to_string().contains("Atlantis"));
        assert_eq!(err.status(), None);
    }
}
