//! Configuration page controller

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    client::DeviceClient,
    core::{
        state::ViewState,
        types::{NewNetwork, Tab},
    },
    view::{Notifier, render},
};

/// Configuration page controller
///
/// Owns the view state and drives it from user navigation and device
/// responses. Request failures never propagate: each one surfaces through
/// the notifier with its transport status text and leaves the state
/// untouched. Operations are awaited inline, one at a time.
pub struct ConfigPage<C: DeviceClient> {
    client: Arc<C>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<ViewState>,
}

impl<C: DeviceClient> ConfigPage<C> {
    /// Create a page bound to a device client and a notification sink
    pub fn new(client: Arc<C>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            state: RwLock::new(ViewState::new()),
        }
    }

    /// Page initialization
    ///
    /// Shows the WiFi tab and populates both lists, each fetched exactly
    /// once: scan results first, then the saved networks, matching the
    /// device page's init order.
    pub async fn init(&self) {
        self.refresh_scanned_networks().await;
        self.state.write().await.select_tab(Tab::Wifi);
        self.refresh_known_networks().await;
    }

    /// Navigate to a tab
    ///
    /// Entering the WiFi tab re-fetches the saved network list before the
    /// panel is shown; every other tab only toggles visibility.
    pub async fn select_tab(&self, tab: Tab) {
        if tab == Tab::Wifi {
            self.refresh_known_networks().await;
        }
        self.state.write().await.select_tab(tab);
        debug!(panel = tab.panel_id(), "tab selected");
    }

    /// Re-fetch the saved network list
    pub async fn refresh_known_networks(&self) {
        match self.client.known_networks().await {
            Ok(networks) => {
                debug!(count = networks.len(), "got known network list");
                self.state.write().await.replace_known_networks(networks);
            }
            Err(e) => {
                warn!(error = %e, "known network list fetch failed");
                self.notifier.notify(&e.status_text());
            }
        }
    }

    /// Re-fetch the scan result list
    pub async fn refresh_scanned_networks(&self) {
        match self.client.scanned_networks().await {
            Ok(networks) => {
                debug!(count = networks.len(), "got scanned network list");
                self.state.write().await.replace_scanned_networks(networks);
            }
            Err(e) => {
                warn!(error = %e, "scanned network list fetch failed");
                self.notifier.notify(&e.status_text());
            }
        }
    }

    /// Submit the add-network form
    ///
    /// On success the saved list is re-fetched and the WiFi tab shown; on
    /// failure the current panel stays visible and the error is surfaced.
    pub async fn submit_new_network(&self, network: NewNetwork) {
        match self.client.add_network(&network).await {
            Ok(()) => {
                debug!(ssid = %network.ssid, "network saved");
                self.refresh_known_networks().await;
                self.state.write().await.select_tab(Tab::Wifi);
            }
            Err(e) => {
                warn!(error = %e, "add network failed");
                self.notifier.notify(&e.status_text());
            }
        }
    }

    /// Delete a saved network and refresh the list
    pub async fn delete_network(&self, ssid: &str) {
        match self.client.remove_network(ssid).await {
            Ok(()) => {
                debug!(%ssid, "network removed");
                self.refresh_known_networks().await;
            }
            Err(e) => {
                warn!(error = %e, "remove network failed");
                self.notifier.notify(&e.status_text());
            }
        }
    }

    /// Snapshot of the current view state
    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Render the whole page from the current state
    pub async fn render(&self) -> String {
        render::render_page(&*self.state.read().await)
    }
}
