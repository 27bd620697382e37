use super::SECTION;
use crate::error::ConfigError;
use toml::{Table, Value};

const ENDPOINT_VAR: &str = "TELEPATH_ENDPOINT";
const IRC_NICK_VAR: &str = "TELEPATH_IRC_NICK";
const STATUS_FILENAME_VAR: &str = "TELEPATH_STATUS_FILENAME";
const VERIFY_TLS_VAR: &str = "TELEPATH_VERIFY_TLS";

pub(super) const OVERRIDE_VARS: [&str; 4] = [
    ENDPOINT_VAR,
    IRC_NICK_VAR,
    STATUS_FILENAME_VAR,
    VERIFY_TLS_VAR,
];

/// Overlay `TELEPATH_*` environment variables onto the raw source.
///
/// Runs before validation, so an override can supply an option the file
/// lacks. Empty values are ignored. If `telepath` exists but is not a table
/// it is left alone for validation to reject.
pub fn apply_env_overrides(source: &mut Table) -> Result<(), ConfigError> {
    let mut overrides: Vec<(&str, Value)> = Vec::new();

    for (var, option) in [
        (ENDPOINT_VAR, "endpoint"),
        (IRC_NICK_VAR, "irc_nick"),
        (STATUS_FILENAME_VAR, "status_filename"),
    ] {
        if let Ok(value) = std::env::var(var)
            && !value.is_empty()
        {
            overrides.push((option, Value::String(value)));
        }
    }

    if let Ok(raw) = std::env::var(VERIFY_TLS_VAR)
        && !raw.is_empty()
    {
        let verify = parse_bool(&raw).ok_or_else(|| ConfigError::InvalidOption {
            option: VERIFY_TLS_VAR.to_string(),
            reason: format!("expected true/false, got `{raw}`"),
        })?;
        overrides.push(("verify_tls", Value::Boolean(verify)));
    }

    if overrides.is_empty() {
        return Ok(());
    }

    let section = source
        .entry(SECTION)
        .or_insert(Value::Table(Table::new()));
    let Value::Table(section) = section else {
        return Ok(());
    };

    for (option, value) in overrides {
        tracing::debug!(option, "config option overridden from environment");
        section.insert(option.to_string(), value);
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
