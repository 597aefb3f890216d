use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use tension_shared::grades;
use tension_shared::models::ClimbSummary;

use crate::results::ResultFeed;

const LIST_ID: &str = "climb-list";

/// Distance from the bottom of the list (rendered pixels) at which the
/// next page is requested.
const LOAD_MORE_MARGIN: i32 = 200;

/// Scroll events arrive in bursts; collapse each burst into one probe.
const SCROLL_DEBOUNCE_MS: u32 = 100;

/// Quality score rendered as stars (0-3).
fn quality_stars(quality: f64) -> String {
    let filled = quality.round().clamp(0.0, 3.0) as usize;
    (0..3).map(|i| if i < filled { '★' } else { '☆' }).collect()
}

/// Whether the list viewport is scrolled near its bottom.
fn near_bottom(container_id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(container_id) else {
        return false;
    };
    element.scroll_top() + element.client_height() + LOAD_MORE_MARGIN >= element.scroll_height()
}

#[component]
pub fn ClimbList(
    feed: ReadSignal<ResultFeed>,
    on_load_more: EventHandler<()>,
    on_open_climb: EventHandler<ClimbSummary>,
) -> Element {
    let mut scroll_pending = use_signal(|| false);

    let feed_ref = feed.read();
    let total = feed_ref.total();
    let searched = feed_ref.has_searched();
    let loading = feed_ref.is_loading();
    let initial_loading = feed_ref.is_initial_loading();
    let has_more = feed_ref.has_more();
    let error = feed_ref.error().map(|m| m.to_string());
    let empty = feed_ref.climbs().is_empty();

    rsx! {
        div { class: "results-panel",
            if let Some(message) = &error {
                div { class: "error-banner", "Search failed: {message}" }
            }
            if searched && error.is_none() {
                div { class: "results-header", "{total} climbs" }
            }

            div {
                id: LIST_ID,
                class: "climb-list",
                onscroll: move |_| {
                    if *scroll_pending.read() {
                        return;
                    }
                    scroll_pending.set(true);
                    spawn(async move {
                        TimeoutFuture::new(SCROLL_DEBOUNCE_MS).await;
                        scroll_pending.set(false);
                        if near_bottom(LIST_ID) {
                            on_load_more.call(());
                        }
                    });
                },

                for climb in feed_ref.climbs().iter() {
                    {
                        let grade = grades::display_grade(climb.difficulty);
                        let stars = quality_stars(climb.quality);
                        let opened = climb.clone();
                        rsx! {
                            div {
                                key: "{climb.uuid}",
                                class: "climb-row",
                                onclick: move |_| on_open_climb.call(opened.clone()),
                                div { class: "climb-name", "{climb.name}" }
                                div { class: "climb-meta",
                                    span { class: "grade", "{grade}" }
                                    span { "{climb.setter}" }
                                    span { class: "stars", "{stars}" }
                                    span { "{climb.ascents} ascents" }
                                    span { "{climb.angle}°" }
                                    if climb.no_strict_match {
                                        span { class: "badge-mirror", "mirror" }
                                    }
                                }
                            }
                        }
                    }
                }

                if initial_loading {
                    div { class: "list-status", "Searching…" }
                } else if loading {
                    div { class: "list-status", "Loading more…" }
                } else if searched && empty && error.is_none() {
                    div { class: "list-status", "No matching climbs" }
                } else if searched && !has_more && !empty {
                    div { class: "list-status end", "No more climbs" }
                }
            }
        }
    }
}
