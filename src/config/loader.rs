use super::{Config, DEFAULT_CONFIG_FILENAME, REQUIRED_OPTIONS, SECTION, apply_env_overrides};
use crate::error::ConfigError;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use url::Url;

impl Config {
    /// `~/.telepath.cfg` for the current user.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(DEFAULT_CONFIG_FILENAME))
    }

    /// Read `path`, overlay `TELEPATH_*` environment overrides and validate.
    ///
    /// A file that does not exist is an empty source, so the caller gets the
    /// missing-section error naming `path` rather than a bare I/O error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut source = read_source(path)?;
        apply_env_overrides(&mut source)?;
        Self::from_table(&source, path)
    }

    /// Validate an already-parsed key/value source.
    ///
    /// Every missing or empty required option is reported in a single
    /// [`ConfigError::MissingOptions`]. `origin` only labels error messages.
    pub fn from_table(source: &Table, origin: &Path) -> Result<Self, ConfigError> {
        let section = match source.get(SECTION) {
            None => {
                return Err(ConfigError::MissingSection {
                    path: origin.to_path_buf(),
                });
            }
            Some(Value::Table(section)) => section,
            Some(other) => {
                return Err(ConfigError::InvalidOption {
                    option: SECTION.to_string(),
                    reason: format!("expected a table, found {}", other.type_str()),
                });
            }
        };

        let mut values = Vec::with_capacity(REQUIRED_OPTIONS.len());
        let mut missing = Vec::new();
        for option in REQUIRED_OPTIONS {
            match string_option(section, option)? {
                Some(value) => values.push(value),
                None => missing.push(option.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingOptions {
                path: origin.to_path_buf(),
                options: missing,
            });
        }

        let [endpoint, irc_nick, status_filename] = [values[0], values[1], values[2]];
        validate_endpoint(endpoint)?;

        let verify_tls = match section.get("verify_tls") {
            None => true,
            Some(Value::Boolean(verify)) => *verify,
            Some(other) => {
                return Err(ConfigError::InvalidOption {
                    option: "verify_tls".to_string(),
                    reason: format!("expected a boolean, found {}", other.type_str()),
                });
            }
        };

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            irc_nick: irc_nick.trim().to_string(),
            status_path: PathBuf::from(shellexpand::tilde(status_filename.trim()).as_ref()),
            verify_tls,
        })
    }
}

fn read_source(path: &Path) -> Result<Table, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found, using empty source");
            return Ok(Table::new());
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// `Ok(None)` for an absent or blank option, an error for a non-string value.
fn string_option<'a>(section: &'a Table, option: &str) -> Result<Option<&'a str>, ConfigError> {
    match section.get(option) {
        None => Ok(None),
        Some(Value::String(value)) if value.trim().is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(ConfigError::InvalidOption {
            option: option.to_string(),
            reason: format!("expected a string, found {}", other.type_str()),
        }),
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOption {
        option: "endpoint".to_string(),
        reason,
    };
    let url = Url::parse(endpoint.trim()).map_err(|e| invalid(format!("`{endpoint}`: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("`{endpoint}`: scheme must be http or https")));
    }
    Ok(())
}
