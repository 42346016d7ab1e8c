//! # Kalavya - brand guidelines in the terminal
//!
//! A terminal viewer for the Kalavya.Co brand guidelines, built with Ratatui.
//! The application follows an Elm-like architecture for predictable state
//! management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state (active section, menu, scroll)
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects requested from the host
//! - **View** (`presentation::components`): Rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use kalavya::core::{
//!     msg::{nav::NavMsg, Msg},
//!     state::{AppState, Section},
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! assert_eq!(state.active_section(), Section::Strategy);
//!
//! let (state, _commands) = update(Msg::Nav(NavMsg::SelectSection(Section::Logo)), state);
//! assert_eq!(state.active_section(), Section::Logo);
//! assert!(!state.nav.menu_expanded);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and commands
//! - [`domain`] - Brand content and text helpers
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime and application runner
//! - [`presentation`] - Components, widgets and layout
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
