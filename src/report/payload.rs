use crate::config::Config;
use serde::Serialize;

/// Form body accepted by the standup endpoint's `/irc` route.
///
/// `area`, `inprogress` and `impediments` are part of the endpoint's schema
/// but are not collected here; they are always sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    irc_nick: String,
    area: String,
    completed: String,
    inprogress: String,
    impediments: String,
}

impl ReportPayload {
    pub fn new(irc_nick: impl Into<String>, completed: impl Into<String>) -> Self {
        Self {
            irc_nick: irc_nick.into(),
            area: String::new(),
            completed: completed.into(),
            inprogress: String::new(),
            impediments: String::new(),
        }
    }

    pub fn for_config(config: &Config, completed: impl Into<String>) -> Self {
        Self::new(config.irc_nick(), completed)
    }

    pub fn irc_nick(&self) -> &str {
        &self.irc_nick
    }

    pub fn completed(&self) -> &str {
        &self.completed
    }
}
