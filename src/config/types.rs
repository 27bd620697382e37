use std::path::{Path, PathBuf};

/// Name of the recognised section in the configuration source.
pub const SECTION: &str = "telepath";

/// Options the `[telepath]` section must carry, in the order they are reported.
pub const REQUIRED_OPTIONS: [&str; 3] = ["endpoint", "irc_nick", "status_filename"];

/// File name of the per-user configuration, relative to the home directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".telepath.cfg";

/// Validated, read-only settings for one invocation.
///
/// Only constructed through [`Config::load`] or [`Config::from_table`], so a
/// `Config` in hand always has a non-empty endpoint URL, user identifier and
/// an expanded status-store path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(super) endpoint: String,
    pub(super) irc_nick: String,
    pub(super) status_path: PathBuf,
    pub(super) verify_tls: bool,
}

impl Config {
    /// Base URL of the standup endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// User identifier the report is filed under.
    pub fn irc_nick(&self) -> &str {
        &self.irc_nick
    }

    /// Absolute (tilde-expanded) location of the status store.
    pub fn status_path(&self) -> &Path {
        &self.status_path
    }

    /// Whether the endpoint's TLS certificate is verified. Defaults to `true`.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }
}
