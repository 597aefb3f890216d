use dioxus::prelude::*;

use tension_shared::board::ANGLE_OPTIONS;
use tension_shared::grades::DIFFICULTY_OPTIONS;

#[component]
#[allow(clippy::too_many_arguments)]
pub fn FilterPanel(
    setter: Signal<String>,
    include_mirrored: Signal<bool>,
    require_type_match: Signal<bool>,
    difficulty_min: Signal<usize>,
    difficulty_max: Signal<usize>,
    angle: Signal<Option<u32>>,
    selected_count: usize,
    on_clear: EventHandler<()>,
    on_search: EventHandler<()>,
) -> Element {
    let mut setter = setter;
    let mut include_mirrored = include_mirrored;
    let mut require_type_match = require_type_match;
    let mut difficulty_min = difficulty_min;
    let mut difficulty_max = difficulty_max;
    let mut angle = angle;

    let cur_min = *difficulty_min.read();
    let cur_max = *difficulty_max.read();
    let cur_angle = *angle.read();

    rsx! {
        div { class: "panel",
            h3 { "Filter" }

            div { class: "field-row",
                label { "Setter:" }
                input {
                    r#type: "text",
                    placeholder: "Any setter",
                    value: "{setter}",
                    oninput: move |evt: Event<FormData>| {
                        setter.set(evt.value().to_string());
                    },
                }
            }

            div { class: "field-row",
                label { "Min difficulty:" }
                select {
                    value: "{cur_min}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(v) = evt.value().parse::<usize>() {
                            // Keep min <= max by dragging the other bound along.
                            if v > *difficulty_max.read() {
                                difficulty_max.set(v);
                            }
                            difficulty_min.set(v);
                        }
                    },
                    for (i, label) in DIFFICULTY_OPTIONS.iter().enumerate() {
                        option { value: "{i}", selected: cur_min == i, "{label}" }
                    }
                }
            }

            div { class: "field-row",
                label { "Max difficulty:" }
                select {
                    value: "{cur_max}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(v) = evt.value().parse::<usize>() {
                            if v < *difficulty_min.read() {
                                difficulty_min.set(v);
                            }
                            difficulty_max.set(v);
                        }
                    },
                    for (i, label) in DIFFICULTY_OPTIONS.iter().enumerate() {
                        option { value: "{i}", selected: cur_max == i, "{label}" }
                    }
                }
            }

            div { class: "field-row",
                label { "Angle:" }
                select {
                    onchange: move |evt: Event<FormData>| {
                        angle.set(evt.value().parse::<u32>().ok());
                    },
                    option { value: "", selected: cur_angle.is_none(), "Any" }
                    for a in ANGLE_OPTIONS {
                        option { value: "{a}", selected: cur_angle == Some(a), "{a}°" }
                    }
                }
            }

            div { class: "field-row",
                label {
                    input {
                        r#type: "checkbox",
                        checked: *include_mirrored.read(),
                        onchange: move |evt: Event<FormData>| {
                            include_mirrored.set(evt.checked());
                        },
                    }
                    "Include mirrored climbs"
                }
            }

            div { class: "field-row",
                label {
                    input {
                        r#type: "checkbox",
                        checked: *require_type_match.read(),
                        onchange: move |evt: Event<FormData>| {
                            require_type_match.set(evt.checked());
                        },
                    }
                    "Require hold type match"
                }
            }

            div { class: "selection-row",
                span { "{selected_count} holds selected" }
                button {
                    class: "secondary",
                    disabled: selected_count == 0,
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
            }

            button {
                class: "search-button",
                onclick: move |_| on_search.call(()),
                "Search"
            }
        }
    }
}
