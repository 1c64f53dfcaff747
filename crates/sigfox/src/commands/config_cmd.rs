//! Config subcommand handlers.

use dialoguer::{Input, Select};

use sigfox_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const REDACTED: &str = "********";

/// Copy of `cfg` safe to print.
fn redacted(cfg: &Config) -> Config {
    let mut shown = cfg.clone();
    if shown.auth.api_password.is_some() {
        shown.auth.api_password = Some(REDACTED.into());
    }
    shown
}

fn detail(cfg: &Config) -> String {
    [
        format!("API Login:      {}", cfg.auth.api_login.as_deref().unwrap_or("-")),
        format!("API Password:   {}", cfg.auth.api_password.as_deref().unwrap_or("-")),
        format!("Base URL:       {}", cfg.api.base_url),
        format!("Timeout:        {}s", cfg.api.timeout),
        format!("Output Format:  {}", cfg.output.default_format),
    ]
    .join("\n")
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_file(global);

    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            eprintln!("Sigfox CLI configuration");
            eprintln!("  Config path: {}\n", path.display());

            let mut cfg = sigfox_config::load_config_file(&path)?;

            let login: String = Input::new()
                .with_prompt("API login")
                .interact_text()
                .map_err(prompt_err)?;
            let password = rpassword::prompt_password("API password: ").map_err(prompt_err)?;
            if login.trim().is_empty() || password.is_empty() {
                return Err(CliError::Validation {
                    field: "credentials".into(),
                    reason: "API login and password cannot be empty".into(),
                });
            }

            let base_url: String = Input::new()
                .with_prompt("API base URL")
                .default(cfg.api.base_url.clone())
                .interact_text()
                .map_err(prompt_err)?;
            cfg.set_value("api_base_url", &base_url)?;
            cfg.set_value("api_login", login.trim())?;

            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the API password?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            if store_selection == 0 {
                sigfox_config::store_password(login.trim(), &password)?;
                cfg.auth.api_password = None;
                eprintln!("  ✓ API password stored in system keyring");
            } else {
                cfg.auth.api_password = Some(password);
            }

            sigfox_config::save_config_to(&cfg, &path)?;
            output::success(global, &format!("Configuration written to {}", path.display()));
            output::info(global, "Test it: sigfox devices list --limit 1");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let format = output::resolve_format(global.output, &cfg.output.default_format);
            let shown = redacted(&cfg);
            let out = output::render_single(format, &shown, detail, |c| c.api.base_url.clone())?;
            output::print_output(&out, global.quiet);
            if cfg.has_plaintext_credentials() {
                output::warn(
                    global,
                    "API password is stored in plaintext; move it with `sigfox config set-password`.",
                );
            }
            Ok(())
        }

        // ── Set ─────────────────────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = sigfox_config::load_config_file(&path)?;
            cfg.set_value(&key, &value)?;
            sigfox_config::save_config_to(&cfg, &path)?;

            if key == "api_password" {
                output::warn(
                    global,
                    "The password is stored in plaintext; `sigfox config set-password` uses the keyring.",
                );
            }
            output::success(global, &format!("Set {key} in {}", path.display()));
            Ok(())
        }

        // ── Set password in keyring ─────────────────────────────────
        ConfigCommand::SetPassword => {
            let cfg = sigfox_config::load_config_file(&path)?;
            let login = match global.api_login.as_deref().filter(|l| !l.is_empty()) {
                Some(login) => login.to_owned(),
                None => sigfox_config::resolve_login(&cfg)?,
            };
            let password = rpassword::prompt_password(format!("API password for {login}: "))
                .map_err(prompt_err)?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }
            sigfox_config::store_password(&login, &password)?;
            output::success(global, &format!("API password for {login} stored in system keyring"));
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_never_shown() {
        let mut cfg = Config::default();
        cfg.auth.api_login = Some("5f00aa".into());
        cfg.auth.api_password = Some("s3cret".into());

        let shown = redacted(&cfg);
        assert_eq!(shown.auth.api_password.as_deref(), Some(REDACTED));
        assert!(!detail(&shown).contains("s3cret"));
        assert!(redacted(&Config::default()).auth.api_password.is_none());
    }
}
