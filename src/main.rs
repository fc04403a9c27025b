//! ZeroStick Configuration UI - Main Entry Point

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zerostick_config_ui::{
    client::{DeviceClient, HttpDeviceClient},
    config::{CliArgs, Settings},
    core::{
        controller::ConfigPage,
        types::{NewNetwork, Tab},
    },
    view::notify::StderrNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,zerostick_config_ui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let settings = Settings::from(CliArgs::parse());
    info!(device_url = %settings.device_url, "Starting ZeroStick configuration UI");

    let client = Arc::new(HttpDeviceClient::new(
        &settings.device_url,
        settings.request_timeout,
    )?);
    let page = ConfigPage::new(client, Arc::new(StderrNotifier));

    page.init().await;
    println!("{}", page.render().await);

    if settings.once {
        return Ok(());
    }

    run_command_loop(&page).await?;

    info!("Exiting");
    Ok(())
}

/// Read navigation and form commands from stdin, one per line
///
/// Commands: `wifi`, `nabto`, `zs`, `add [<ssid> <password> [priority]]`,
/// `delete <ssid>`, `show`, `quit`. Each accepted command re-renders the
/// page to stdout.
async fn run_command_loop<C: DeviceClient>(page: &ConfigPage<C>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("wifi") => page.select_tab(Tab::Wifi).await,
            Some("nabto") => page.select_tab(Tab::Nabto).await,
            Some("zs") => page.select_tab(Tab::ZeroStick).await,
            Some("add") => match (parts.next(), parts.next()) {
                (Some(ssid), Some(password)) => {
                    let priority = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
                    page.submit_new_network(NewNetwork {
                        ssid: ssid.to_string(),
                        password: password.to_string(),
                        priority,
                    })
                    .await;
                }
                // Bare "add" opens the form panel
                _ => page.select_tab(Tab::AddNetwork).await,
            },
            Some("delete") => match parts.next() {
                Some(ssid) => page.delete_network(ssid).await,
                None => {
                    eprintln!("usage: delete <ssid>");
                    continue;
                }
            },
            Some("show") => {}
            Some("quit") | Some("exit") => break,
            Some(other) => {
                eprintln!("unknown command: {other}");
                continue;
            }
            None => continue,
        }
        println!("{}", page.render().await);
    }

    Ok(())
}
