//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components drawn from `AppState`
//! - Line-producing widgets the brand panels are built from
//! - Screen layout shared with mouse hit-testing
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
