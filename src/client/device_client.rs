//! Device client trait definition

use trait_variant::make;

use crate::core::error::ClientResult;
use crate::core::types::{KnownNetwork, NewNetwork, ScannedNetwork};

/// Abstraction over the device's configuration endpoints
///
/// This trait enables testing by allowing mock implementations
/// while the binary talks to the real device over HTTP.
#[make(Send)]
pub trait DeviceClient: Sync + 'static {
    /// Fetch the saved network list (`GET /wifi`)
    ///
    /// Entries arrive in device order and are rendered as-is.
    async fn known_networks(&self) -> ClientResult<Vec<KnownNetwork>>;

    /// Fetch the latest scan results (`GET /wifilist`)
    async fn scanned_networks(&self) -> ClientResult<Vec<ScannedNetwork>>;

    /// Save a new network on the device (`POST /wifi`)
    ///
    /// The device replaces an existing entry carrying the same SSID.
    async fn add_network(&self, network: &NewNetwork) -> ClientResult<()>;

    /// Remove a saved network by SSID (`DELETE /wifi?ssid=`)
    async fn remove_network(&self, ssid: &str) -> ClientResult<()>;
}
