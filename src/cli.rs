//! Command-line flags shared by both binaries
//!
//! Flags are the last settings layer: anything given here overrides the
//! environment and the built-in defaults.

use clap::Args;
use std::time::Duration;

use crate::config::Settings;
use crate::controller::SubmissionOrdering;

#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// Base URL the state code is appended to
    #[arg(long)]
    pub api_url: Option<String>,

    /// User-Agent header sent to the API
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Only accept codes of the 50 states
    #[arg(long)]
    pub strict: bool,

    /// Ignore responses to submissions that were superseded
    #[arg(long)]
    pub drop_stale: bool,
}

impl SettingsArgs {
    /// Environment settings with these flags on top
    pub fn settings(&self) -> Settings {
        self.apply(Settings::from_env())
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(url) = &self.api_url {
            settings.api_url = url.clone();
        }
        if let Some(agent) = &self.user_agent {
            settings.user_agent = agent.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.request_timeout = Some(Duration::from_secs(secs));
        }
        if self.strict {
            settings.strict_codes = true;
        }
        if self.drop_stale {
            settings.ordering = SubmissionOrdering::LatestSubmission;
        }
        settings
    }
}
