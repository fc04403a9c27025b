//! Device client abstraction layer

pub mod device_client;
pub mod http_client;
pub mod mock_client;

pub use device_client::DeviceClient;
pub use http_client::HttpDeviceClient;

#[cfg(test)]
pub use mock_client::MockDeviceClient;
