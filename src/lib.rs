//! ZeroStick Configuration UI
//!
//! Client-side implementation of the ZeroStick device configuration page:
//! fetches the saved and scanned network lists over HTTP, keeps a typed
//! view-model of the page, and renders it to markup.

pub mod client;
pub mod config;
pub mod core;
pub mod view;

pub use crate::core::{
    controller::ConfigPage,
    error::{ClientError, ClientResult},
    state::ViewState,
    types::{KnownNetwork, NewNetwork, ScannedNetwork, Tab},
};
