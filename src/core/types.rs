//! Domain types for the device configuration page

use serde::{Deserialize, Serialize};

/// A saved network entry as served by `GET /wifi`
///
/// Uniqueness and ordering of entries are decided by the device; the client
/// renders the list exactly as received. Missing fields default to empty
/// values rather than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnownNetwork {
    /// Network SSID
    #[serde(default)]
    pub ssid: String,
    /// Device-assigned ranking used to pick a preferred network when
    /// several are in range
    #[serde(default)]
    pub priority: i32,
}

/// A network visible in the device's last scan, as served by `GET /wifilist`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannedNetwork {
    /// Network SSID
    #[serde(default)]
    pub ssid: String,
    /// Hardware address of the access point broadcasting the SSID
    #[serde(default)]
    pub bssid: String,
}

/// Payload of the add-network form, sent with `POST /wifi`
///
/// The device derives the stored WPA key from the passphrase itself and
/// replaces an existing entry carrying the same SSID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNetwork {
    pub ssid: String,
    pub password: String,
    #[serde(default)]
    pub priority: i32,
}

/// Panels of the configuration page, visible one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Wifi,
    Nabto,
    ZeroStick,
    AddNetwork,
}

impl Tab {
    /// All panels, in page order
    pub const ALL: [Tab; 4] = [Tab::Wifi, Tab::Nabto, Tab::ZeroStick, Tab::AddNetwork];

    /// Element id of the tab's panel on the device page
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Wifi => "wifi-tab",
            Tab::Nabto => "nabto-tab",
            Tab::ZeroStick => "zs-tab",
            Tab::AddNetwork => "wifiaddnetwork-tab",
        }
    }

    /// Element id of the tab's navbar button, if it has one
    ///
    /// The add-network panel is reached through the "add network" button
    /// inside the WiFi panel and has no navbar entry of its own.
    pub fn navbar_id(self) -> Option<&'static str> {
        match self {
            Tab::Wifi => Some("wifi-navbar"),
            Tab::Nabto => Some("nabto-navbar"),
            Tab::ZeroStick => Some("zs-navbar"),
            Tab::AddNetwork => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_network_decoding() {
        let networks: Vec<KnownNetwork> =
            serde_json::from_str(r#"[{"ssid":"Home","priority":5},{"ssid":"Office","priority":1}]"#)
                .unwrap();

        assert_eq!(
            networks,
            vec![
                KnownNetwork {
                    ssid: "Home".to_string(),
                    priority: 5,
                },
                KnownNetwork {
                    ssid: "Office".to_string(),
                    priority: 1,
                },
            ]
        );
    }

    #[test]
    fn test_known_network_missing_fields_default() {
        let network: KnownNetwork = serde_json::from_str("{}").unwrap();
        assert_eq!(network.ssid, "");
        assert_eq!(network.priority, 0);
    }

    #[test]
    fn test_scanned_network_missing_ssid_defaults_to_empty() {
        let network: ScannedNetwork =
            serde_json::from_str(r#"{"bssid":"aa:bb:cc:dd:ee:ff"}"#).unwrap();
        assert_eq!(network.ssid, "");
        assert_eq!(network.bssid, "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_scanned_network_order_is_preserved() {
        let json = r#"[
            {"ssid":"c","bssid":"cc:cc:cc:cc:cc:cc"},
            {"ssid":"a","bssid":"aa:aa:aa:aa:aa:aa"},
            {"ssid":"b","bssid":"bb:bb:bb:bb:bb:bb"}
        ]"#;
        let networks: Vec<ScannedNetwork> = serde_json::from_str(json).unwrap();

        let ssids: Vec<&str> = networks.iter().map(|n| n.ssid.as_str()).collect();
        assert_eq!(ssids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_new_network_serialization() {
        let network = NewNetwork {
            ssid: "Home".to_string(),
            password: "hunter22".to_string(),
            priority: 3,
        };
        let json = serde_json::to_string(&network).unwrap();
        assert_eq!(json, r#"{"ssid":"Home","password":"hunter22","priority":3}"#);
    }

    #[test]
    fn test_tab_panel_ids() {
        assert_eq!(Tab::Wifi.panel_id(), "wifi-tab");
        assert_eq!(Tab::Nabto.panel_id(), "nabto-tab");
        assert_eq!(Tab::ZeroStick.panel_id(), "zs-tab");
        assert_eq!(Tab::AddNetwork.panel_id(), "wifiaddnetwork-tab");
    }

    #[test]
    fn test_only_navbar_tabs_have_navbar_ids() {
        assert_eq!(Tab::Wifi.navbar_id(), Some("wifi-navbar"));
        assert_eq!(Tab::Nabto.navbar_id(), Some("nabto-navbar"));
        assert_eq!(Tab::ZeroStick.navbar_id(), Some("zs-navbar"));
        assert_eq!(Tab::AddNetwork.navbar_id(), None);
    }
}
