//! Environment selection.
//!
//! `APP_ENV` picks which `.env.*` file is loaded before anything else reads the
//! environment: `production` loads `.env.production`, everything else loads
//! `.env.development`.

use crate::errors::{Error, Result};
use std::{env::VarError, path::PathBuf};
use tracing::{debug, info};

/// Variable naming the user commands act on behalf of.
pub const USER_VAR: &str = "FINANCE_LEDGER_USER";

/// Deployment environment the binary runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Local development, loads `.env.development`
    Development,
    /// Deployed build, loads `.env.production`
    Production,
}

impl AppEnv {
    /// Maps an `APP_ENV` value to an environment; unknown values mean development.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Reads `APP_ENV` from the process environment.
    #[must_use]
    pub fn current() -> Self {
        std::env::var("APP_ENV").map_or(Self::Development, |name| Self::from_name(&name))
    }

    /// Name of the `.env` file for this environment.
    #[must_use]
    pub const fn env_file(self) -> &'static str {
        match self {
            Self::Development => ".env.development",
            Self::Production => ".env.production",
        }
    }
}

/// Loads the `.env` file for the current environment, falling back to a plain
/// `.env`. A missing file is not an error since variables can be set externally.
pub fn load_env_file() -> Option<PathBuf> {
    let env = AppEnv::current();
    match dotenvy::from_filename(env.env_file()) {
        Ok(path) => {
            info!("Loaded {}", path.display());
            Some(path)
        }
        Err(e) => {
            debug!("Could not load {}: {}", env.env_file(), e);
            dotenvy::dotenv().ok()
        }
    }
}

/// Reads the acting user from [`USER_VAR`].
///
/// # Errors
/// [`Error::EnvVar`] if the variable is unset or not unicode,
/// [`Error::Config`] if it is blank.
pub fn current_user() -> Result<String> {
    user_from(std::env::var(USER_VAR))
}

fn user_from(value: std::result::Result<String, VarError>) -> Result<String> {
    let user = value?;
    let trimmed = user.trim();
    if trimmed.is_empty() {
        return Err(Error::Config {
            message: format!("{USER_VAR} is set but empty"),
        });
    }
    Ok(trimmed.to_string())
}
