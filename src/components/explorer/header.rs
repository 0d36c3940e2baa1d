//! Explorer header component.
//!
//! Current location title (or the "Search results" heading with its
//! clear-search button), the breadcrumb path bar, the sort select, and the
//! search box.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::pathbar::PathBar;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;

stylance::import_crate_style!(css, "src/components/explorer/header.module.css");

/// Header with location title, path bar / clear-search, sort, and search.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_searching = Signal::derive(move || ctx.session.with(|s| s.is_searching()));

    // "Search results" while the override is active, the deepest opened
    // folder's name otherwise (empty before the root listing lands).
    let title = Signal::derive(move || {
        ctx.session.with(|s| {
            if s.is_searching() {
                "Search results".to_string()
            } else {
                s.current_folder()
                    .map(|parent| parent.name.clone())
                    .unwrap_or_default()
            }
        })
    });

    let on_clear_search = move |_: leptos::ev::MouseEvent| ctx.clear_search();
    let on_sort_change = move |ev: leptos::ev::Event| ctx.set_sort(&event_target_value(&ev));
    let on_search_input =
        move |ev: leptos::ev::Event| ctx.search_phrase.set(event_target_value(&ev));
    let on_search = move |_: leptos::ev::MouseEvent| ctx.run_search();

    view! {
        <header class=css::controls>
            <h1 class=css::title>{move || title.get()}</h1>

            <Show
                when=move || is_searching.get()
                fallback=|| view! { <PathBar /> }
            >
                <button class=css::clearSearch on:click=on_clear_search>
                    <span class=css::buttonIcon><Icon icon=ic::CLOSE /></span>
                    "Clear search"
                </button>
            </Show>

            <span class=css::sortOptions>
                <label class=css::sortLabel for="sortOptions">"Sort by: "</label>
                <select id="sortOptions" name="sortOptions" on:change=on_sort_change>
                    {config::SORT_CHOICES
                        .iter()
                        .map(|&(token, label)| view! { <option value=token>{label}</option> })
                        .collect_view()}
                </select>
            </span>

            <span class=css::search>
                <input
                    class=css::searchInput
                    type="text"
                    prop:value=move || ctx.search_phrase.get()
                    on:input=on_search_input
                />
                <button class=css::searchButton on:click=on_search>
                    <span class=css::buttonIcon><Icon icon=ic::SEARCH /></span>
                    "Search"
                </button>
            </span>
        </header>
    }
}
