//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! listing endpoints, the download origin, the synthetic root identity, and
//! the sort-select choices.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page title.
pub const APP_NAME: &str = "docshelf";

// =============================================================================
// Root Folder
// =============================================================================

/// Identity of the synthetic root level. Its id doubles as the name of the
/// root listing file, so [`listing_url`] covers the root fetch too.
pub const ROOT_FOLDER_ID: &str = "documents";

/// Display name of the synthetic root level.
pub const ROOT_FOLDER_NAME: &str = "Documents";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base path for listing queries (static JSON files).
pub const QUERIES_BASE: &str = "/queries";

/// Fixed origin that file download links point at.
pub const DOWNLOAD_ORIGIN: &str = "http://localhost:3000";

/// Listing endpoint for a folder id: `/queries/{id}.json`.
pub fn listing_url(folder_id: &str) -> String {
    format!("{}/{}.json", QUERIES_BASE, folder_id)
}

/// The canned search endpoint. Always the same file: search is a stand-in,
/// not a real query.
pub fn search_url() -> String {
    format!("{}/search.json", QUERIES_BASE)
}

// =============================================================================
// Sort Options
// =============================================================================

/// Entries of the sort select, as `(token, label)` pairs. The first entry is
/// the session default.
pub const SORT_CHOICES: &[(&str, &str)] = &[
    ("name,desc", "Name, Descending"),
    ("name,asc", "Name, Ascending"),
    ("size,desc", "Size, Descending"),
    ("size,asc", "Size, Ascending"),
    ("dateAdded,desc", "Date added, Descending"),
    ("dateAdded,asc", "Date added, Ascending"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
