//! CLI error types with miette diagnostics.
//!
//! Maps `sigfox_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use sigfox_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Sigfox API")]
    #[diagnostic(
        code(sigfox::connection_failed),
        help(
            "Check your network connection and the base URL.\n\
             Run: sigfox config show"
        )
    )]
    ConnectionFailed {
        #[source]
        source: sigfox_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(sigfox::timeout),
        help("Increase the timeout with --timeout or: sigfox config set timeout 60")
    )]
    Timeout {
        #[source]
        source: sigfox_api::Error,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(sigfox::auth_failed),
        help(
            "Verify your API login and password.\n\
             API credentials are listed under Group > API ACCESS in the Sigfox backend."
        )
    )]
    AuthFailed { message: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(sigfox::permission_denied),
        help("The API user lacks a profile granting this operation.")
    )]
    PermissionDenied { message: String },

    #[error("No API {missing} configured")]
    #[diagnostic(
        code(sigfox::no_credentials),
        help(
            "Configure credentials with: sigfox config init\n\
             Or set SIGFOX_API_LOGIN and SIGFOX_API_PASSWORD."
        )
    )]
    NoCredentials { missing: &'static str },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(code(sigfox::not_found), help("Check the id, or list what exists with `list`."))]
    NotFound { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (status {status}): {message}")]
    #[diagnostic(code(sigfox::api_error))]
    Api { status: u16, message: String },

    #[error(transparent)]
    #[diagnostic(code(sigfox::client))]
    Client(sigfox_api::Error),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(sigfox::validation))]
    Validation { field: String, reason: String },

    #[error("Nothing to update")]
    #[diagnostic(
        code(sigfox::empty_update),
        help("Pass at least one field flag, see --help.")
    )]
    EmptyUpdate,

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(sigfox::config),
        help("Inspect the file with: sigfox config show")
    )]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Prompt failed: {0}")]
    #[diagnostic(code(sigfox::prompt))]
    Prompt(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(sigfox::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    #[diagnostic(code(sigfox::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::PermissionDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::EmptyUpdate => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── sigfox_api::Error → CliError ─────────────────────────────────────

impl From<sigfox_api::Error> for CliError {
    fn from(err: sigfox_api::Error) -> Self {
        use sigfox_api::Error as E;

        match err {
            E::Authentication { message } => Self::AuthFailed { message },
            E::Authorization { message } => Self::PermissionDenied { message },
            E::NotFound { message } => Self::NotFound { message },
            E::Api {
                status, message, ..
            } => Self::Api { status, message },
            E::Validation { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            err @ E::Network { .. } if err.is_timeout() => Self::Timeout { source: err },
            err @ E::Network { .. } => Self::ConnectionFailed { source: err },
            other => Self::Client(other),
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { missing } => Self::NoCredentials { missing },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
