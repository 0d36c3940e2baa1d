//! Main explorer component.
//!
//! The view composer: issues the initial root fetch and selects between
//! search-result rendering and column-per-level rendering. Lists are rebuilt
//! from a session snapshot inside one reactive closure — columns and rows
//! are replaced wholesale on re-sorts and branch jumps, so keyed iteration
//! would fight the data model here.

use leptos::prelude::*;

use super::entry::{FileEntry, FolderEntry};
use super::header::Header;
use crate::app::AppContext;
use crate::core::Session;
use crate::models::{Document, OpenedFolder};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Document explorer view.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial root listing; runs once at mount.
    ctx.load_root();

    view! {
        <div class=css::explorer>
            <Header />

            <div class=css::body>
                {move || {
                    let session = ctx.session.get();
                    match session.search_results() {
                        Some(results) => search_view(results, &session),
                        None => columns_view(&session),
                    }
                }}
            </div>
        </div>
    }
}

/// One column per opened level. Only the first column's folder rows carry
/// the jump-reset wiring.
fn columns_view(session: &Session) -> AnyView {
    session
        .opened_folders()
        .iter()
        .enumerate()
        .map(|(index, level)| column_view(level, index == 0, session))
        .collect_view()
        .into_any()
}

/// A single level: its children, or a placeholder when the folder is empty.
fn column_view(level: &OpenedFolder, can_jump: bool, session: &Session) -> AnyView {
    let rows = if level.children.is_empty() {
        view! { <p class=css::emptyFolder>"Folder empty"</p> }.into_any()
    } else {
        level
            .children
            .iter()
            .map(|doc| entry_view(doc, can_jump, session))
            .collect_view()
            .into_any()
    };

    view! { <div class=css::column>{rows}</div> }.into_any()
}

/// Search results as a flat single list. Only the leading result gets the
/// jump-reset wiring, and only if it is a folder.
fn search_view(results: &[Document], session: &Session) -> AnyView {
    view! {
        <div class=css::searchResults>
            {results
                .iter()
                .enumerate()
                .map(|(index, doc)| entry_view(doc, index == 0, session))
                .collect_view()}
        </div>
    }
    .into_any()
}

fn entry_view(doc: &Document, can_jump: bool, session: &Session) -> AnyView {
    if doc.is_folder() {
        view! {
            <FolderEntry
                folder=doc.clone()
                is_open=session.is_open(&doc.id)
                can_jump=can_jump
            />
        }
        .into_any()
    } else {
        view! { <FileEntry file=doc.clone() /> }.into_any()
    }
}
