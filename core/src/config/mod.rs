//! Configuration load, migration, and persistence
//!
//! The persisted document is pretty-printed JSON, edited by operators. On
//! every load: a missing document is replaced by the generated default, an
//! unparseable one is regenerated, and one written by an older plugin
//! version is migrated forward and rewritten. A document written by a
//! *newer* version than this build is left untouched.

mod migrate;

pub use migrate::{CURRENT_VERSION, DEFAULT_PERSONAL_MESSAGE, default_config, migrate};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use supply_signal_types::Configuration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse and migrate a stored document.
///
/// Returns the ready-to-use configuration and whether the document changed
/// (absent, regenerated, or migrated) and should be rewritten.
pub fn load_document(raw: Option<&str>) -> (Configuration, bool) {
    let Some(raw) = raw else {
        return (default_config(), true);
    };

    let mut config: Configuration = match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse stored config, regenerating defaults");
            return (default_config(), true);
        }
    };

    if config.version.as_str() < CURRENT_VERSION {
        tracing::warn!(
            from = %config.version,
            to = CURRENT_VERSION,
            "config changes detected, migrating"
        );
        migrate(&mut config);
        (config, true)
    } else {
        if config.version.as_str() > CURRENT_VERSION {
            tracing::warn!(
                stored = %config.version,
                current = CURRENT_VERSION,
                "stored config was written by a newer plugin version, leaving it untouched"
            );
        }
        (config, false)
    }
}

/// Load the configuration from disk, generating or migrating as needed.
///
/// The file is rewritten whenever the loaded document differs from what
/// was stored.
pub fn load_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let (config, changed) = load_document(raw.as_deref());
    if changed {
        save_to_path(&config, path)?;
    }
    Ok(config)
}

/// Write the configuration as pretty JSON, creating parent directories.
pub fn save_to_path(config: &Configuration, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, content).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
