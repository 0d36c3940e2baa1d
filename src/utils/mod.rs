//! Utility modules for web and network operations.
//!
//! Provides:
//! - [`fetch_json`] - Fetch API wrapper returning parsed JSON

mod fetch;

pub use fetch::fetch_json;
