//! Runtime settings

use std::time::Duration;

use crate::config::CliArgs;

/// Runtime configuration settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub device_url: String,
    pub request_timeout: Option<Duration>,
    pub once: bool,
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        Settings {
            device_url: args.device_url,
            request_timeout: args.request_timeout.map(Duration::from_secs),
            once: args.once,
        }
    }
}
