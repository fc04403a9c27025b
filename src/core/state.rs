//! View-model state of the configuration page

use crate::core::types::{KnownNetwork, ScannedNetwork, Tab};

/// Typed view-model of the configuration page
///
/// One state object replaces the original page's scattered by-id element
/// lookups; rendering is a pure function over it. List contents live only
/// until the next fetch replaces them.
#[derive(Debug, Clone)]
pub struct ViewState {
    active_tab: Tab,
    /// Navbar entry carrying the highlight. The add-network panel has no
    /// navbar button, so entering it leaves the previous highlight in place.
    active_navbar: Tab,
    known_networks: Vec<KnownNetwork>,
    scanned_networks: Vec<ScannedNetwork>,
    known_revision: u64,
    scanned_revision: u64,
}

impl ViewState {
    /// Initial page state: WiFi tab visible, both lists empty
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Wifi,
            active_navbar: Tab::Wifi,
            known_networks: Vec::new(),
            scanned_networks: Vec::new(),
            known_revision: 0,
            scanned_revision: 0,
        }
    }

    /// The currently visible panel
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The navbar button carrying the active highlight
    pub fn active_navbar(&self) -> Tab {
        self.active_navbar
    }

    /// Whether the given tab's panel is the visible one
    pub fn is_panel_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// Make `tab` the visible panel, hiding all others
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab.navbar_id().is_some() {
            self.active_navbar = tab;
        }
    }

    /// Saved networks in device order
    pub fn known_networks(&self) -> &[KnownNetwork] {
        &self.known_networks
    }

    /// Scan results in device order
    pub fn scanned_networks(&self) -> &[ScannedNetwork] {
        &self.scanned_networks
    }

    /// Replace the saved-network list wholesale and refresh its widget
    pub fn replace_known_networks(&mut self, networks: Vec<KnownNetwork>) {
        self.known_networks = networks;
        self.known_revision += 1;
    }

    /// Replace the scan-result list wholesale and refresh its widget
    pub fn replace_scanned_networks(&mut self, networks: Vec<ScannedNetwork>) {
        self.scanned_networks = networks;
        self.scanned_revision += 1;
    }

    /// Refresh count of the saved-network list widget
    pub fn known_revision(&self) -> u64 {
        self.known_revision
    }

    /// Refresh count of the scan-result list widget
    pub fn scanned_revision(&self) -> u64 {
        self.scanned_revision
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state_shows_wifi_tab() {
        let state = ViewState::new();

        assert!(state.is_panel_visible(Tab::Wifi));
        for tab in [Tab::Nabto, Tab::ZeroStick, Tab::AddNetwork] {
            assert!(!state.is_panel_visible(tab));
        }
        assert_eq!(state.active_navbar(), Tab::Wifi);
        assert!(state.known_networks().is_empty());
        assert!(state.scanned_networks().is_empty());
    }

    #[test]
    fn test_panels_are_mutually_exclusive() {
        let mut state = ViewState::new();

        for tab in Tab::ALL {
            state.select_tab(tab);
            let visible: Vec<Tab> = Tab::ALL
                .into_iter()
                .filter(|t| state.is_panel_visible(*t))
                .collect();
            assert_eq!(visible, vec![tab]);
        }
    }

    #[test]
    fn test_add_network_tab_keeps_previous_navbar_highlight() {
        let mut state = ViewState::new();

        state.select_tab(Tab::ZeroStick);
        state.select_tab(Tab::AddNetwork);

        assert!(state.is_panel_visible(Tab::AddNetwork));
        assert_eq!(state.active_navbar(), Tab::ZeroStick);
    }

    #[test]
    fn test_replace_discards_previous_list_and_bumps_revision() {
        let mut state = ViewState::new();
        assert_eq!(state.known_revision(), 0);

        state.replace_known_networks(vec![KnownNetwork {
            ssid: "Home".to_string(),
            priority: 5,
        }]);
        assert_eq!(state.known_networks().len(), 1);
        assert_eq!(state.known_revision(), 1);

        state.replace_known_networks(vec![]);
        assert!(state.known_networks().is_empty());
        assert_eq!(state.known_revision(), 2);
    }

    #[test]
    fn test_scanned_replace_does_not_touch_known_list() {
        let mut state = ViewState::new();
        state.replace_known_networks(vec![KnownNetwork {
            ssid: "Home".to_string(),
            priority: 5,
        }]);

        state.replace_scanned_networks(vec![ScannedNetwork {
            ssid: "Cafe".to_string(),
            bssid: "aa:bb:cc:dd:ee:ff".to_string(),
        }]);

        assert_eq!(state.known_networks().len(), 1);
        assert_eq!(state.scanned_networks().len(), 1);
        assert_eq!(state.known_revision(), 1);
        assert_eq!(state.scanned_revision(), 1);
    }
}
