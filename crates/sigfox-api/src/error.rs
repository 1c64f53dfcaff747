use thiserror::Error;

/// Top-level error type for the `sigfox-api` crate.
///
/// The first six variants are the taxonomy every façade call can surface;
/// each HTTP failure is classified exactly once in the request layer and
/// passed through unchanged. The CLI maps these into diagnostics with exit codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── HTTP status taxonomy ────────────────────────────────────────
    /// HTTP 401: the login/secret pair was rejected.
    #[error("Authentication failed: {message}. Please check your API credentials.")]
    Authentication { message: String },

    /// HTTP 403: authenticated, but the API user lacks the required profile.
    #[error(
        "Authorization failed: {message}. You don't have permission to access this resource."
    )]
    Authorization { message: String },

    /// HTTP 404.
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Any other status >= 400, with the raw body kept for diagnostics.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// No HTTP response at all: DNS, refused connection, or timeout.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    // ── Client-side ─────────────────────────────────────────────────
    /// Input rejected before any request was sent.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Base URL or request path did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── Data ────────────────────────────────────────────────────────
    /// A 2xx body was not JSON, or did not match the expected record shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The page follower hit its request bound without reaching the last page.
    #[error("Pagination aborted after {pages} pages without reaching the last page")]
    PaginationLimit { pages: usize },
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            format!("Request timeout: {source}")
        } else {
            format!("Network error: {source}")
        };
        Self::Network { message, source }
    }
}

impl Error {
    /// Returns `true` for HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for HTTP 401 and 403.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::Authorization { .. })
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Network { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// The HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::Authorization { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
