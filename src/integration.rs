//! Integration layer
//!
//! Glue between the pure Elm core and the terminal:
//! - Runtime that queues messages and executes commands
//! - Render/resize coalescing decisions
//! - The application runner driving the event loop

pub mod app_runner;
pub mod coalescer;
pub mod runtime;
