//! Domain logic
//!
//! This module contains the brand content and the helpers around it:
//! - Static brand content (palette, values, typefaces, mockups)
//! - Image asset resolution
//! - Text processing utilities

pub mod asset;
pub mod brand;
pub mod text;
