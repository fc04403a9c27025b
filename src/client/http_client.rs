//! HTTP device client backed by reqwest

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::DeviceClient;
use crate::core::error::{ClientError, ClientResult};
use crate::core::types::{KnownNetwork, NewNetwork, ScannedNetwork};

/// Device client talking to the configuration endpoints over HTTP
#[derive(Debug, Clone)]
pub struct HttpDeviceClient {
    base: Url,
    http: reqwest::Client,
}

impl HttpDeviceClient {
    /// Create a client for the device at `base_url`
    ///
    /// Without a timeout, requests wait as long as the underlying socket
    /// does.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base,
            http: builder.build()?,
        })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        check_status(response.status())?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a non-2xx status to an error carrying its status text
fn check_status(status: StatusCode) -> ClientResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status {
            code: status.as_u16(),
            text: status_text(status),
        })
    }
}

/// Reason phrase for a status code, falling back to the bare number
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| status.as_u16().to_string())
}

impl DeviceClient for HttpDeviceClient {
    async fn known_networks(&self) -> ClientResult<Vec<KnownNetwork>> {
        self.get_json("/wifi").await
    }

    async fn scanned_networks(&self) -> ClientResult<Vec<ScannedNetwork>> {
        self.get_json("/wifilist").await
    }

    async fn add_network(&self, network: &NewNetwork) -> ClientResult<()> {
        let url = self.endpoint("/wifi")?;
        debug!(%url, ssid = %network.ssid, "POST");

        let response = self.http.post(url).json(network).send().await?;
        check_status(response.status())
    }

    async fn remove_network(&self, ssid: &str) -> ClientResult<()> {
        let mut url = self.endpoint("/wifi")?;
        url.query_pairs_mut().append_pair("ssid", ssid);
        debug!(%url, "DELETE");

        let response = self.http.delete(url).send().await?;
        check_status(response.status())
    }
}
