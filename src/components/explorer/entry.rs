//! Folder and file row components.
//!
//! Rows are stateless: everything they show arrives as props computed from
//! the current session snapshot, and activation calls back into the
//! composer-provided actions on [`AppContext`].

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::FolderAction;
use crate::models::Document;

stylance::import_crate_style!(css, "src/components/explorer/entry.module.css");

/// Folder row.
///
/// `can_jump` marks rows carrying the close-and-reopen wiring: every folder
/// row of the first rendered column, plus the leading search result. The
/// activation decision itself lives in [`crate::core::Session::folder_action`].
#[component]
pub fn FolderEntry(folder: Document, is_open: bool, can_jump: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = folder.id.clone();
    let name = folder.name.clone();

    let handle_activate = move |_: leptos::ev::MouseEvent| {
        let action = ctx
            .session
            .with_untracked(|session| session.folder_action(&id, can_jump));
        match action {
            FolderAction::JumpToRoot => ctx.close_folders(id.clone(), name.clone()),
            FolderAction::OpenChild => ctx.fetch_folder(id.clone(), name.clone()),
            FolderAction::Ignore => {}
        }
    };

    let row_class = if is_open {
        format!("{} {}", css::entry, css::entryOpen)
    } else {
        css::entry.to_string()
    };

    view! {
        <div class=row_class>
            <button
                class=css::entryButton
                on:click=handle_activate
                aria-label=format!("Open folder: {}", folder.name)
            >
                <Icon icon=ic::FOLDER />
            </button>
            <p class=css::entryName>{format!("{} (Folder)", folder.name)}</p>
            <p class=css::entryMeta>{format!("Size: {}", folder.size)}</p>
            <p class=css::entryMeta>{format!("Added: {}", folder.date_added)}</p>
        </div>
    }
}

/// File row with a download link.
///
/// The link points at `{origin}{path}/{id}.{type}`, opens in a new context,
/// and is marked as a download.
#[component]
pub fn FileEntry(file: Document) -> impl IntoView {
    let href = file.download_url(config::DOWNLOAD_ORIGIN).unwrap_or_default();

    view! {
        <div class=css::entry>
            <a
                class=css::entryLink
                href=href
                target="_blank"
                download=""
                aria-label=format!("Download file: {}", file.name)
            >
                <Icon icon=ic::DOWNLOAD />
            </a>
            <p class=css::entryName>{format!("{} ({})", file.name, file.kind)}</p>
            <p class=css::entryMeta>{format!("Size: {}", file.size)}</p>
            <p class=css::entryMeta>{format!("Added: {}", file.date_added)}</p>
        </div>
    }
}
