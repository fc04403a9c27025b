//! Mock device client for testing

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::DeviceClient;
use crate::core::error::{ClientError, ClientResult};
use crate::core::types::{KnownNetwork, NewNetwork, ScannedNetwork};

/// Internal state for the mock client
#[derive(Debug, Clone, Default)]
struct MockState {
    known_networks: Vec<KnownNetwork>,
    scanned_networks: Vec<ScannedNetwork>,
    fail_known: Option<(u16, String)>,
    fail_scanned: Option<(u16, String)>,
    fail_writes: Option<(u16, String)>,
    known_fetches: u64,
    scanned_fetches: u64,
    added: Vec<NewNetwork>,
    removed: Vec<String>,
}

/// Mock device client for testing
///
/// Serves configured lists without a device and counts calls so
/// interaction counts can be asserted.
#[derive(Debug, Clone, Default)]
pub struct MockDeviceClient {
    inner: Arc<Mutex<MockState>>,
}

impl MockDeviceClient {
    /// Create a new mock client with empty lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the saved networks served by `known_networks`
    pub async fn set_known_networks(&self, networks: Vec<KnownNetwork>) {
        self.inner.lock().await.known_networks = networks;
    }

    /// Configure the scan results served by `scanned_networks`
    pub async fn set_scanned_networks(&self, networks: Vec<ScannedNetwork>) {
        self.inner.lock().await.scanned_networks = networks;
    }

    /// Make `known_networks` fail with the given HTTP status
    pub async fn fail_known_with(&self, code: u16, text: &str) {
        self.inner.lock().await.fail_known = Some((code, text.to_string()));
    }

    /// Make `scanned_networks` fail with the given HTTP status
    pub async fn fail_scanned_with(&self, code: u16, text: &str) {
        self.inner.lock().await.fail_scanned = Some((code, text.to_string()));
    }

    /// Make `add_network` and `remove_network` fail with the given HTTP status
    pub async fn fail_writes_with(&self, code: u16, text: &str) {
        self.inner.lock().await.fail_writes = Some((code, text.to_string()));
    }

    /// Number of `known_networks` calls so far
    pub async fn known_fetches(&self) -> u64 {
        self.inner.lock().await.known_fetches
    }

    /// Number of `scanned_networks` calls so far
    pub async fn scanned_fetches(&self) -> u64 {
        self.inner.lock().await.scanned_fetches
    }

    /// Networks submitted through `add_network`, oldest first
    pub async fn added(&self) -> Vec<NewNetwork> {
        self.inner.lock().await.added.clone()
    }

    /// SSIDs removed through `remove_network`, oldest first
    pub async fn removed(&self) -> Vec<String> {
        self.inner.lock().await.removed.clone()
    }
}

impl DeviceClient for MockDeviceClient {
    async fn known_networks(&self) -> ClientResult<Vec<KnownNetwork>> {
        let mut state = self.inner.lock().await;
        state.known_fetches += 1;
        match &state.fail_known {
            Some((code, text)) => Err(ClientError::Status {
                code: *code,
                text: text.clone(),
            }),
            None => Ok(state.known_networks.clone()),
        }
    }

    async fn scanned_networks(&self) -> ClientResult<Vec<ScannedNetwork>> {
        let mut state = self.inner.lock().await;
        state.scanned_fetches += 1;
        match &state.fail_scanned {
            Some((code, text)) => Err(ClientError::Status {
                code: *code,
                text: text.clone(),
            }),
            None => Ok(state.scanned_networks.clone()),
        }
    }

    async fn add_network(&self, network: &NewNetwork) -> ClientResult<()> {
        let mut state = self.inner.lock().await;
        if let Some((code, text)) = &state.fail_writes {
            return Err(ClientError::Status {
                code: *code,
                text: text.clone(),
            });
        }

        // Same-SSID replace, mirroring the device
        state.known_networks.retain(|n| n.ssid != network.ssid);
        state.known_networks.push(KnownNetwork {
            ssid: network.ssid.clone(),
            priority: network.priority,
        });
        state.added.push(network.clone());
        Ok(())
    }

    async fn remove_network(&self, ssid: &str) -> ClientResult<()> {
        let mut state = self.inner.lock().await;
        if let Some((code, text)) = &state.fail_writes {
            return Err(ClientError::Status {
                code: *code,
                text: text.clone(),
            });
        }

        state.known_networks.retain(|n| n.ssid != ssid);
        state.removed.push(ssid.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_serves_configured_lists() {
        tokio_test::block_on(async {
            let client = MockDeviceClient::new();

            // Initially empty
            assert_eq!(client.known_networks().await.unwrap().len(), 0);

            client
                .set_known_networks(vec![KnownNetwork {
                    ssid: "Home".to_string(),
                    priority: 5,
                }])
                .await;

            let networks = client.known_networks().await.unwrap();
            assert_eq!(networks.len(), 1);
            assert_eq!(networks[0].ssid, "Home");
            assert_eq!(client.known_fetches().await, 2);
        });
    }

    #[tokio::test]
    async fn test_mock_failure_carries_status_text() {
        let client = MockDeviceClient::new();
        client.fail_scanned_with(500, "Internal Server Error").await;

        let error = client.scanned_networks().await.unwrap_err();
        assert_eq!(error.status_text(), "Internal Server Error");
        assert_eq!(client.scanned_fetches().await, 1);
    }

    #[tokio::test]
    async fn test_mock_add_replaces_same_ssid() {
        let client = MockDeviceClient::new();
        client
            .set_known_networks(vec![KnownNetwork {
                ssid: "Home".to_string(),
                priority: 1,
            }])
            .await;

        client
            .add_network(&NewNetwork {
                ssid: "Home".to_string(),
                password: "hunter22".to_string(),
                priority: 9,
            })
            .await
            .unwrap();

        let networks = client.known_networks().await.unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].priority, 9);
        assert_eq!(client.added().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_remove_deletes_entry() {
        let client = MockDeviceClient::new();
        client
            .set_known_networks(vec![
                KnownNetwork {
                    ssid: "Home".to_string(),
                    priority: 1,
                },
                KnownNetwork {
                    ssid: "Office".to_string(),
                    priority: 2,
                },
            ])
            .await;

        client.remove_network("Home").await.unwrap();

        let networks = client.known_networks().await.unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].ssid, "Office");
        assert_eq!(client.removed().await, vec!["Home".to_string()]);
    }
}
