//! Unified error type.

use http::StatusCode;
use tracing::{error, warn};

use crate::response::{IntoResponse, Response};

/// The error type returned by ponte's fallible operations.
///
/// Infrastructure failures (binding a port, a bad address, a broken base URL)
/// surface from [`Server`](crate::Server) and
/// [`routes::router`](crate::routes::router). Request-scoped failures
/// (an unreachable upstream, a rejected path segment) are returned from
/// handlers and turned into a response by [`IntoResponse`]; they never stop
/// the server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address `{addr}`: {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("upstream request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid path parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: &'static str },

    #[error("invalid url: {0}")]
    Url(String),
}

impl Error {
    /// The status a client sees when this error escapes a handler.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e.to_string())
    }
}

/// Renders as `{"error": "<message>"}` with the status from [`Error::status`].
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "handler failed: {self}");
        } else {
            warn!(%status, "request rejected: {self}");
        }

        let body = serde_json::json!({ "error": self.to_string() });
        // Serializing a `Value` built from a string cannot fail.
        let bytes = serde_json::to_vec(&body).unwrap_or_default();
        Response::builder().status(status).json(bytes)
    }
}
