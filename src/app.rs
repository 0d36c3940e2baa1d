//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! async actions that drive the session state machine. The context owns all
//! state; child components are stateless and call back into these actions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Explorer;
use crate::config;
use crate::core::Session;
use crate::core::error::FetchError;
use crate::models::{Document, FolderRef, SortOption};
use crate::utils::fetch_json;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; any child component can reach
/// it with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation/session state: opened folders, sort option, search results.
    pub session: RwSignal<Session>,
    /// Text currently in the search box. Lives beside the session so typing
    /// does not churn the explorer tree.
    pub search_phrase: RwSignal<String>,
}

impl AppContext {
    /// Creates a new application context with an empty session.
    ///
    /// The session stack stays empty until [`Self::load_root`] populates it
    /// with the root listing.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            search_phrase: RwSignal::new(String::new()),
        }
    }

    /// Fetch the root listing and (re)initialize the stack with it.
    ///
    /// On failure: log and leave state unchanged, like every fetch here.
    pub fn load_root(&self) {
        let ctx = *self;
        spawn_local(async move {
            match fetch_json::<Vec<Document>>(&config::listing_url(config::ROOT_FOLDER_ID)).await {
                Ok(children) => ctx.session.update(|s| {
                    s.load_root(
                        FolderRef::new(config::ROOT_FOLDER_ID, config::ROOT_FOLDER_NAME),
                        children,
                    );
                }),
                Err(err) => log_fetch_error("root listing", &err),
            }
        });
    }

    /// Fetch a folder listing and append it as the deepest opened level.
    ///
    /// Fire-and-forget: nothing awaits the result, in-flight requests are
    /// not cancelled, and raced calls apply their append in completion
    /// order.
    pub fn fetch_folder(&self, id: String, name: String) {
        let ctx = *self;
        spawn_local(async move {
            match fetch_json::<Vec<Document>>(&config::listing_url(&id)).await {
                Ok(children) => ctx
                    .session
                    .update(|s| s.open_folder(FolderRef::new(id, name), children)),
                Err(err) => log_fetch_error("folder listing", &err),
            }
        });
    }

    /// Jump navigation: close back to the root synchronously, then reopen
    /// the target as level 1. The root-only stack is visible while the
    /// target's listing loads.
    pub fn close_folders(&self, id: String, name: String) {
        self.session.update(|s| s.close_to_root());
        self.fetch_folder(id, name);
    }

    /// Apply a `"field,direction"` token from the sort select.
    ///
    /// The select only emits known tokens; anything else is a wiring bug,
    /// reported to the console and otherwise ignored.
    pub fn set_sort(&self, token: &str) {
        match token.parse::<SortOption>() {
            Ok(option) => self.session.update(|s| s.set_sort(option)),
            Err(err) => web_sys::console::warn_1(&err.to_string().into()),
        }
    }

    /// Fetch the canned search results and clear the search box.
    ///
    /// The search phrase is not sent — the endpoint is a static stand-in
    /// that returns the same listing regardless of input.
    pub fn run_search(&self) {
        let ctx = *self;
        spawn_local(async move {
            match fetch_json::<Vec<Document>>(&config::search_url()).await {
                Ok(results) => {
                    ctx.session.update(|s| s.set_search_results(results));
                    ctx.search_phrase.set(String::new());
                }
                Err(err) => log_fetch_error("search results", &err),
            }
        });
    }

    /// Drop the search override; display reverts to the opened folders.
    pub fn clear_search(&self) {
        self.session.update(|s| s.clear_search());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn log_fetch_error(what: &str, err: &FetchError) {
    web_sys::console::error_2(
        &format!("Failed to fetch {}:", what).into(),
        &err.to_string().into(),
    );
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the explorer.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! { <Explorer /> }
}
