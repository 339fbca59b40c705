use reqwest::StatusCode;

/// Ways a results fetch can fail, as seen from the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server has no test with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status, including store outages behind a 5xx.
    #[error("Server responded with {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// A 2xx response whose body is not a results payload.
    #[error("Unexpected response payload: {0}")]
    UnexpectedPayload(String),

    /// Connection refused, reset, DNS failure and similar.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}
