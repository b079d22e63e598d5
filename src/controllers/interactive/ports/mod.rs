//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the render
//! worker and the presentation layer.

pub mod presenter;
