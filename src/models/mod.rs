//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Document`], [`FolderRef`], [`OpenedFolder`] - Folder listing wire models
//! - [`SortOption`] - Listing sort configuration (field + direction)

mod document;
mod sort;

pub use document::{Document, FolderRef, OpenedFolder};
pub use sort::SortOption;
#[cfg(test)]
pub use sort::{SortDirection, SortKey};
