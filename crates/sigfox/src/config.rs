//! Bridges CLI flags and the config file into a ready `Sigfox` session.
//!
//! Flags (and their `SIGFOX_*` env vars) override the file; the api crate
//! only ever sees the resolved values.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use sigfox_api::Sigfox;
use sigfox_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The config file in use: `--config` or the platform default.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(sigfox_config::config_path)
}

/// Load the config file named by `global`, layered with the environment.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(sigfox_config::load_config_from(&config_file(global))?)
}

/// Build an authenticated session from flags over config.
pub fn connect(global: &GlobalOpts, cfg: &Config) -> Result<Sigfox, CliError> {
    let login = match non_empty(global.api_login.as_deref()) {
        Some(login) => login.to_owned(),
        None => sigfox_config::resolve_login(cfg)?,
    };

    let password = match non_empty(global.api_password.as_deref()) {
        Some(pw) => SecretString::from(pw.to_owned()),
        None => sigfox_config::resolve_password(cfg, &login)?,
    };

    let base_url = global.base_url.as_deref().unwrap_or(&cfg.api.base_url);
    let timeout = global.timeout.map_or_else(|| cfg.timeout(), Duration::from_secs);

    tracing::debug!(%login, base_url, ?timeout, "building Sigfox client");
    Ok(Sigfox::new(login, password, base_url, timeout)?)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
