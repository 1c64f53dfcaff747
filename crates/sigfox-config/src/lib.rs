//! Configuration for the sigfox CLI.
//!
//! A single TOML file with `[auth]`, `[api]` and `[output]` tables, layered
//! under `SIGFOX_`-prefixed environment variables, plus the API password
//! resolution chain (env, then system keyring, then plaintext in the file).
//! `sigfox-api` itself never reads any of this; the CLI resolves a config and
//! hands plain values to `Sigfox::new`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Keyring service name under which API passwords are stored.
pub const KEYRING_SERVICE: &str = "sigfox-cli";

/// Environment variable consulted first when resolving the API password.
pub const PASSWORD_ENV: &str = "SIGFOX_API_PASSWORD";

/// Accepted timeout range, in seconds.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=300;

/// Output formats accepted for `output.default_format`.
pub const OUTPUT_FORMATS: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(
        "unknown config key '{key}' (valid keys: api_login, api_password, api_base_url, output_format, timeout)"
    )]
    UnknownKey { key: String },

    #[error("no API {missing} configured")]
    NoCredentials { missing: &'static str },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthSection,

    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthSection {
    /// API user login (its id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_login: Option<String>,

    /// Plaintext API password. Prefer the keyring or `SIGFOX_API_PASSWORD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSection {
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_base_url() -> String {
    sigfox_api::DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    sigfox_api::DEFAULT_TIMEOUT.as_secs()
}
fn default_format() -> String {
    "table".into()
}

impl Config {
    /// Check the values a file or the environment may have set out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_timeout(self.api.timeout)?;
        validate_base_url(&self.api.base_url)?;
        validate_format(&self.output.default_format)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    /// Both a login and a plaintext password are present in the file.
    pub fn has_plaintext_credentials(&self) -> bool {
        self.auth.api_login.is_some() && self.auth.api_password.is_some()
    }

    /// Apply a `config set <key> <value>` edit.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "api_login" => self.auth.api_login = Some(value.to_owned()),
            "api_password" => self.auth.api_password = Some(value.to_owned()),
            "api_base_url" => {
                validate_base_url(value)?;
                self.api.base_url = value.to_owned();
            }
            "output_format" => {
                validate_format(value)?;
                self.output.default_format = value.to_owned();
            }
            "timeout" => {
                let secs: u64 = value.parse().map_err(|_| ConfigError::Validation {
                    field: "timeout".into(),
                    reason: format!("'{value}' is not a number of seconds"),
                })?;
                validate_timeout(secs)?;
                self.api.timeout = secs;
            }
            other => {
                return Err(ConfigError::UnknownKey { key: other.into() });
            }
        }
        Ok(())
    }
}

fn validate_timeout(secs: u64) -> Result<(), ConfigError> {
    if TIMEOUT_RANGE.contains(&secs) {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: format!(
                "{secs} is outside {}..={} seconds",
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end()
            ),
        })
    }
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    url::Url::parse(raw)
        .map(|_| ())
        .map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("'{raw}': {e}"),
        })
}

fn validate_format(raw: &str) -> Result<(), ConfigError> {
    if OUTPUT_FORMATS.contains(&raw) {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            field: "output_format".into(),
            reason: format!("expected one of {}, got '{raw}'", OUTPUT_FORMATS.join(", ")),
        })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "sigfox", "sigfox-cli").map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("sigfox-cli")
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from `path` plus environment. A missing file is not an error.
///
/// Environment keys nest on `__`: `SIGFOX_API__TIMEOUT=60` sets `api.timeout`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SIGFOX_").split("__"))
        .extract()?;
    config.validate()?;
    Ok(config)
}

/// Load only what is written in `path`, without environment overrides.
///
/// Used before editing and re-saving the file, so that values coming from
/// `SIGFOX_*` variables are not persisted.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Write `cfg` to `path`, creating parent directories. The file is made
/// owner-only on Unix since it may hold a plaintext password.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    restrict_permissions(path)?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn restrict_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// The configured API login.
pub fn resolve_login(cfg: &Config) -> Result<String, ConfigError> {
    cfg.auth
        .api_login
        .clone()
        .filter(|l| !l.is_empty())
        .ok_or(ConfigError::NoCredentials { missing: "login" })
}

/// Resolve the API password for `login` from the credential chain.
pub fn resolve_password(cfg: &Config, login: &str) -> Result<SecretString, ConfigError> {
    // 1. Env var
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(SecretString::from(pw));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(login)) {
        if let Ok(pw) = entry.get_password() {
            debug!(login, "API password read from keyring");
            return Ok(SecretString::from(pw));
        }
    }

    // 3. Plaintext in config
    plaintext_password(cfg).ok_or(ConfigError::NoCredentials {
        missing: "password",
    })
}

fn plaintext_password(cfg: &Config) -> Option<SecretString> {
    cfg.auth
        .api_password
        .as_ref()
        .filter(|p| !p.is_empty())
        .map(|p| SecretString::from(p.clone()))
}

/// Store the API password for `login` in the system keyring.
pub fn store_password(login: &str, password: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(login))?;
    entry.set_password(password)?;
    Ok(())
}

fn keyring_user(login: &str) -> String {
    format!("{login}/api-password")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults_match_api_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "https://api.sigfox.com/v2");
        assert_eq!(cfg.api.timeout, 30);
        assert_eq!(cfg.output.default_format, "table");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_sectioned_toml() {
        let cfg: Config = toml::from_str(
            r#"
            [auth]
            api_login = "5f00aa"
            api_password = "s3cret"

            [api]
            timeout = 60
            "#,
        )
        .unwrap();
        assert_eq!(cfg.auth.api_login.as_deref(), Some("5f00aa"));
        assert_eq!(cfg.api.timeout, 60);
        assert_eq!(cfg.api.base_url, "https://api.sigfox.com/v2");
        assert!(cfg.has_plaintext_credentials());
    }

    #[test]
    fn save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_value("api_login", "5f00aa").unwrap();
        cfg.set_value("timeout", "45").unwrap();
        save_config_to(&cfg, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[auth]"));
        assert!(!text.contains("api_password"));

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.auth.api_login.as_deref(), Some("5f00aa"));
        assert_eq!(loaded.api.timeout, 45);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to(&Config::default(), &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn file_only_load_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg.output.default_format, "json");
        assert_eq!(cfg.api.timeout, 30);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.api.timeout, 30);
    }

    #[test]
    fn out_of_range_timeout_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "timeout"));
    }

    #[test]
    fn set_value_validates() {
        let mut cfg = Config::default();
        assert!(cfg.set_value("timeout", "301").is_err());
        assert!(cfg.set_value("timeout", "abc").is_err());
        assert!(cfg.set_value("output_format", "xml").is_err());
        assert!(cfg.set_value("api_base_url", "not a url").is_err());
        assert!(matches!(
            cfg.set_value("color", "auto"),
            Err(ConfigError::UnknownKey { .. })
        ));
        assert_eq!(cfg, Config::default());

        cfg.set_value("output_format", "yaml").unwrap();
        assert_eq!(cfg.output.default_format, "yaml");
    }

    #[test]
    fn login_and_plaintext_password() {
        let mut cfg = Config::default();
        assert!(matches!(
            resolve_login(&cfg),
            Err(ConfigError::NoCredentials { missing: "login" })
        ));
        assert!(plaintext_password(&cfg).is_none());

        cfg.auth.api_login = Some("5f00aa".into());
        cfg.auth.api_password = Some("s3cret".into());
        assert_eq!(resolve_login(&cfg).unwrap(), "5f00aa");
        assert_eq!(plaintext_password(&cfg).unwrap().expose_secret(), "s3cret");
    }

    #[test]
    fn keyring_user_is_scoped_by_login() {
        assert_eq!(keyring_user("5f00aa"), "5f00aa/api-password");
    }
}
