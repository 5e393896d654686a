//! Demo application for the adaptive search panel.
//!
//! The binary wires mock people and images into a
//! [`SearchView`](spotlight_tui::SearchView). This library half holds the
//! pieces the binary and its tests share.

pub mod app_dirs;
pub mod demo;
pub mod logging;

pub use spotlight_tui as tui;
