//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuDownload as Download, LuFolder as Folder,
        LuHouse as Home, LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsDownload as Download, BsFolderFill as Folder,
        BsHouseFill as Home, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
