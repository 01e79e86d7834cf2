//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the Lens viewer:
//! - Header panel (file controls, zoom history, theme selector)
//! - Timeline panel (ruler, track rows, selection overlay)
//! - Status bar (profile metadata and range readout)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer interactions and the gesture machine bridge)

pub mod header;
pub mod input;
pub mod panel_manager;
pub mod status_bar;
pub mod timeline_panel;
