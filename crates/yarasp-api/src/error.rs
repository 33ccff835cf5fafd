//! Client error types.

use reqwest::StatusCode;

/// Errors returned by [`RaspClient`](crate::RaspClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request parameter was empty or zero. Raised before any
    /// network I/O.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// HTTP transport failure (connect, timeout, cancellation).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Rate limited (HTTP 429) while the pool cursor already sat on its
    /// last key.
    #[error("rate limited (HTTP 429): api key pool of {keys} exhausted")]
    KeyPoolExhausted {
        /// Total number of keys in the pool.
        keys: usize,
    },

    /// Upstream returned a non-success status other than 429.
    #[error("{status} status code: {body}")]
    Status {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Response body text, verbatim.
        body: String,
    },

    /// JSON body failed to decode.
    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML body failed to decode.
    #[error("xml decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A format string did not name a recognized response format.
    #[error("format unsupported: {0}")]
    UnsupportedFormat(String),

    /// Client construction failed (empty key pool, unparseable base URL).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        // Arrange & Act & Assert
        let err = Error::MissingParameter("from");
        assert_eq!(err.to_string(), "missing required parameter: from");

        let err = Error::KeyPoolExhausted { keys: 2 };
        assert_eq!(
            err.to_string(),
            "rate limited (HTTP 429): api key pool of 2 exhausted"
        );

        let err = Error::Status {
            status: StatusCode::NOT_FOUND,
            body: String::from("station not found"),
        };
        assert_eq!(err.to_string(), "404 Not Found status code: station not found");

        let err = Error::UnsupportedFormat(String::from("yaml"));
        assert_eq!(err.to_string(), "format unsupported: yaml");
    }
}
