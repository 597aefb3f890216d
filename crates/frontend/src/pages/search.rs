use dioxus::prelude::*;

use tension_shared::grades;
use tension_shared::layout::HoldLayout;
use tension_shared::models::{ClimbSummary, SearchCriteria};

use crate::api;
use crate::components::board_view::{BoardView, DisplayMode};
use crate::components::climb_list::ClimbList;
use crate::components::filter_panel::FilterPanel;
use crate::results::{FetchTicket, ResultFeed};
use crate::selection::SelectionState;

/// Kick off one page fetch. The completion is folded back into the feed,
/// which discards it if a restart happened in the meantime.
fn dispatch_fetch(ticket: FetchTicket, criteria: SearchCriteria, mut feed: Signal<ResultFeed>) {
    spawn(async move {
        let result = api::search_climbs(&criteria, ticket.page()).await;
        if let Err(message) = &result {
            tracing::warn!(page = ticket.page(), error = %message, "climb search failed");
        }
        feed.write().complete(ticket, result);
    });
}

#[component]
pub fn Search() -> Element {
    // Board dataset
    let mut layout = use_signal(HoldLayout::default);
    let mut holds_error = use_signal(|| None::<String>);
    let _holds_loader = use_resource(move || async move {
        match api::fetch_holds().await {
            Ok(holds) => {
                tracing::info!(holds = holds.len(), "loaded hold layout");
                layout.set(HoldLayout::new(holds));
            }
            Err(message) => {
                tracing::warn!(error = %message, "failed to load hold layout");
                holds_error.set(Some(message));
            }
        }
    });

    // Selection + filter state
    let mut selection = use_signal(SelectionState::new);
    let setter = use_signal(String::new);
    let include_mirrored = use_signal(|| false);
    let require_type_match = use_signal(|| false);
    let difficulty_min = use_signal(|| 0usize);
    let difficulty_max = use_signal(|| grades::DIFFICULTY_OPTIONS.len() - 1);
    let angle = use_signal(|| None::<u32>);

    // Results. `active_criteria` is frozen at search time so later pages
    // of the same search ignore edits made to the form since.
    let mut feed = use_signal(ResultFeed::new);
    let mut active_criteria = use_signal(SearchCriteria::default);

    // Replay
    let mut active_climb = use_signal(|| None::<ClimbSummary>);
    let mut display_mode = use_signal(|| DisplayMode::Filter);

    let build_criteria = move || SearchCriteria {
        holds: selection
            .read()
            .selected()
            .iter()
            .map(|h| (h.id.clone(), h.role))
            .collect(),
        setter: setter.read().clone(),
        include_mirrored: *include_mirrored.read(),
        require_type_match: *require_type_match.read(),
        difficulty_min: *difficulty_min.read(),
        difficulty_max: *difficulty_max.read(),
        angle: *angle.read(),
    };

    let on_search = move |_| {
        let criteria = build_criteria();
        active_criteria.set(criteria.clone());
        let ticket = feed.write().restart();
        dispatch_fetch(ticket, criteria, feed);
    };

    let on_load_more = move |_| {
        let ticket = feed.write().request_more();
        if let Some(ticket) = ticket {
            dispatch_fetch(ticket, active_criteria.read().clone(), feed);
        }
    };

    let on_open_climb = move |climb: ClimbSummary| {
        api::track_climb_view_fire(&climb.uuid);
        active_climb.set(Some(climb));
        display_mode.set(DisplayMode::Climb);
    };

    let on_clear = move |_| {
        if !selection.read().is_empty() {
            selection.write().clear();
        }
    };

    let selected_count = selection.read().len();
    let mode = *display_mode.read();
    let climb_open = active_climb.read().is_some();

    // Banner data for the replayed climb.
    let banner = active_climb.read().as_ref().map(|c| {
        (
            c.name.clone(),
            grades::display_grade(c.difficulty),
            c.setter.clone(),
            c.angle,
        )
    });

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Tension Board 2 Climb Finder" }
                div { class: "display-tabs",
                    button {
                        class: if mode == DisplayMode::Filter { "active" } else { "" },
                        onclick: move |_| display_mode.set(DisplayMode::Filter),
                        "Filter"
                    }
                    button {
                        class: if mode == DisplayMode::Climb { "active" } else { "" },
                        disabled: !climb_open,
                        onclick: move |_| {
                            if active_climb.read().is_some() {
                                display_mode.set(DisplayMode::Climb);
                            }
                        },
                        "Climb"
                    }
                }
            }

            div { class: "sidebar",
                FilterPanel {
                    setter: setter,
                    include_mirrored: include_mirrored,
                    require_type_match: require_type_match,
                    difficulty_min: difficulty_min,
                    difficulty_max: difficulty_max,
                    angle: angle,
                    selected_count: selected_count,
                    on_clear: on_clear,
                    on_search: on_search,
                }

                ClimbList {
                    feed: feed,
                    on_load_more: on_load_more,
                    on_open_climb: on_open_climb,
                }
            }

            div { class: "board-panel",
                if let Some(message) = &*holds_error.read() {
                    div { class: "error-banner", "Failed to load holds: {message}" }
                }
                if mode == DisplayMode::Climb {
                    if let Some((name, grade, climb_setter, climb_angle)) = &banner {
                        div { class: "climb-banner",
                            span { class: "climb-banner-name", "{name}" }
                            span { class: "grade", "{grade}" }
                            span { "by {climb_setter}" }
                            span { "{climb_angle}°" }
                        }
                    }
                }
                BoardView {
                    display_mode: display_mode,
                    layout: layout,
                    selection: selection,
                    active_climb: active_climb,
                }
            }
        }
    }
}
