//! Path bar component.
//!
//! Displays the opened-folder path as clickable breadcrumb segments.
//! Clicking a segment closes every deeper level (stack prefix truncation);
//! with only the root open, clicks are no-ops.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Breadcrumb path bar over the opened-folder stack.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar>
            {move || {
                let names: Vec<String> = ctx.session.with(|s| {
                    s.opened_folders()
                        .iter()
                        .map(|level| level.parent.name.clone())
                        .collect()
                });

                names
                    .into_iter()
                    .enumerate()
                    .map(|(index, name)| {
                        let icon = if index == 0 { ic::HOME } else { ic::FOLDER };
                        let on_click = move |_: leptos::ev::MouseEvent| {
                            ctx.session.update(|s| s.truncate_to(index));
                        };

                        view! {
                            <>
                                {(index > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <button class=css::segment on:click=on_click>
                                    <span class=css::segmentIcon><Icon icon=icon /></span>
                                    <span class=css::segmentLabel>{name}</span>
                                </button>
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
