//! Markup rendering for the configuration page
//!
//! Pure functions from view state to the markup fragments of the device
//! page, keeping the element ids and item shapes the device firmware ships.

use std::fmt::Write;

use crate::core::{
    state::ViewState,
    types::{KnownNetwork, ScannedNetwork, Tab},
};

/// Highlight class of the active navbar button
pub const ACTIVE_NAVBAR_CLASS: &str = "ui-btn-active";

/// Render the scan-result list items
///
/// One `<li>` per network, in the order given; an empty slice renders an
/// empty list with no placeholder item.
pub fn render_scanned_list(networks: &[ScannedNetwork]) -> String {
    let mut html = String::new();
    for network in networks {
        let _ = write!(
            html,
            "<li data-icon=\"plus\"><a href=\"#\"><h3>{}</h3><p>BSSID:{}</p></a></li>",
            escape(&network.ssid),
            escape(&network.bssid),
        );
    }
    html
}

/// Render the saved-network list items, each with its delete affordance
pub fn render_known_list(networks: &[KnownNetwork]) -> String {
    let mut html = String::new();
    for network in networks {
        let _ = write!(
            html,
            "<li><a href=\"#\"><h3>{}</h3><p>Priority:{}</p></a>\
             <a href=\"#\" data-icon=\"delete\">Delete</a></li>",
            escape(&network.ssid),
            network.priority,
        );
    }
    html
}

/// Render the full configuration page from the view state
///
/// Exactly one panel is visible; the others are rendered hidden so a
/// re-render after a tab switch only flips display styles.
pub fn render_page(state: &ViewState) -> String {
    let mut html = String::new();

    html.push_str("<div data-role=\"navbar\" id=\"configuration-navbar\"><ul>");
    for tab in Tab::ALL {
        if let Some(navbar_id) = tab.navbar_id() {
            let class = if state.active_navbar() == tab {
                ACTIVE_NAVBAR_CLASS
            } else {
                ""
            };
            let _ = write!(
                html,
                "<li><a href=\"#\" id=\"{navbar_id}\" class=\"{class}\">{}</a></li>",
                navbar_label(tab),
            );
        }
    }
    html.push_str("</ul></div>");

    for tab in Tab::ALL {
        let _ = write!(
            html,
            "<div id=\"{}\" class=\"configuration-tab\" style=\"display: {}\">",
            tab.panel_id(),
            if state.is_panel_visible(tab) { "block" } else { "none" },
        );
        match tab {
            Tab::Wifi => {
                let _ = write!(
                    html,
                    "<ul id=\"ul_wifinetworks\" data-revision=\"{}\">{}</ul>\
                     <ul id=\"ul_knownwifinetworks\" data-revision=\"{}\">{}</ul>\
                     <a href=\"#\" id=\"addwifibutton\" data-icon=\"plus\">Add network</a>",
                    state.scanned_revision(),
                    render_scanned_list(state.scanned_networks()),
                    state.known_revision(),
                    render_known_list(state.known_networks()),
                );
            }
            Tab::AddNetwork => {
                html.push_str(
                    "<form id=\"addnetworkform\">\
                     <input name=\"ssid\" placeholder=\"SSID\">\
                     <input name=\"password\" type=\"password\" placeholder=\"Password\">\
                     <input name=\"priority\" type=\"number\" value=\"0\">\
                     <button type=\"submit\">Save</button></form>",
                );
            }
            Tab::Nabto | Tab::ZeroStick => {}
        }
        html.push_str("</div>");
    }

    html
}

fn navbar_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Wifi => "WiFi",
        Tab::Nabto => "Nabto",
        Tab::ZeroStick => "ZeroStick",
        Tab::AddNetwork => "Add network",
    }
}

/// Escape text interpolated into markup
///
/// Identity for ordinary SSID and BSSID strings.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
