//! Optional `.env` loading ahead of a load.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - `DOTENV_DISABLED=1` or `DOTENV_DISABLED=true` skips loading entirely.
//! - Variables already set in the process are never overwritten.

use tracing::debug;

use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;

/// Whether `.env` loading is switched off for this process.
pub fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `.env` from the current directory (or its ancestors) into the process
/// environment.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        debug!("dotenv loading disabled");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
