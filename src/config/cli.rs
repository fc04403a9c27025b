//! Command-line argument parsing

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(name = "zerostick-config", version)]
#[clap(about = "Configuration UI client for ZeroStick WiFi devices")]
pub struct CliArgs {
    /// Base URL of the device's configuration server
    #[clap(short, long, default_value = "http://192.168.1.1")]
    pub device_url: String,

    /// Request timeout in seconds (requests wait indefinitely when unset)
    #[clap(long)]
    pub request_timeout: Option<u64>,

    /// Render the page once and exit instead of reading commands
    #[clap(long)]
    pub once: bool,
}
