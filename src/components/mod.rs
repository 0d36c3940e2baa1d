//! UI components built with Leptos.
//!
//! - [`explorer`] - Document browser UI (columns, header, path bar, rows)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;

pub use explorer::Explorer;
