use dioxus::prelude::*;

use tension_shared::board;
use tension_shared::frames;
use tension_shared::layout::{HoldLayout, Position};
use tension_shared::models::ClimbSummary;
use tension_shared::roles::Role;

use crate::coords;
use crate::selection::{SelectedHold, SelectionState};

const BOARD_CONTAINER_ID: &str = "board-container";

/// Reference container width (desktop board panel) used to normalize
/// marker sizes; narrower containers get proportionally larger markers.
const REFERENCE_WIDTH: f64 = 600.0;

/// Selection marker geometry in photo pixels, before the mobile boost.
const MARKER_RADIUS: f64 = 22.0;
const MARKER_STROKE: f64 = 4.0;

/// Replayed climb markers are slightly larger and semi-transparent.
const CLIMB_MARKER_RADIUS: f64 = 26.0;
const CLIMB_MARKER_STROKE: f64 = 6.0;

/// Distance (photo pixels, before boost) within which a click counts as
/// a direct activation of an existing marker rather than a background
/// click.
const MARKER_HIT_RADIUS: f64 = 26.0;

/// What the board view renders and how it responds to clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayMode {
    /// Interactive hold selection for filtering.
    Filter,
    /// Read-only replay of one climb's holds.
    Climb,
}

/// Marker stroke color per role.
fn role_color(role: Role) -> &'static str {
    match role {
        Role::Start => "#00FF00",
        Role::Middle => "#0000FF",
        Role::Finish => "#FF0000",
        Role::Foot => "#FF00FF",
    }
}

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the board container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(BOARD_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

fn container_width() -> f64 {
    container_rect().map(|r| r.width()).unwrap_or(REFERENCE_WIDTH)
}

/// Scale factor keeping markers a consistent physical size on screen
/// regardless of container width.
fn size_boost(container_w: f64) -> f64 {
    (REFERENCE_WIDTH / container_w).max(1.0)
}

// ---------------------------------------------------------------------------
// Click dispatch
// ---------------------------------------------------------------------------

/// Id of the selected hold whose marker contains the click, choosing the
/// nearest when markers overlap.
fn find_marker_hit<'a>(
    selection: &'a [SelectedHold],
    click: (f64, f64),
    threshold: f64,
) -> Option<&'a str> {
    let mut best: Option<&str> = None;
    let mut best_d2 = threshold * threshold;
    for hold in selection {
        let (px, py) = coords::board_to_image_px(hold.position);
        let dx = px - click.0;
        let dy = py - click.1;
        let d2 = dx * dx + dy * dy;
        if d2 < best_d2 {
            best_d2 = d2;
            best = Some(&hold.id);
        }
    }
    best
}

// ---------------------------------------------------------------------------
// SVG builders
// ---------------------------------------------------------------------------

/// Build the overlay SVG content as a string for reliable rendering.
/// Positions are in native photo pixel space (1200x1300).
fn build_selection_markers(svg: &mut String, selection: &[SelectedHold], boost: f64) {
    let r = MARKER_RADIUS * boost;
    let sw = MARKER_STROKE * boost;
    for hold in selection {
        let (px, py) = coords::board_to_image_px(hold.position);
        let color = role_color(hold.role);
        svg.push_str(&format!(
            r##"<circle cx="{px}" cy="{py}" r="{r}" fill="none" stroke="{color}" stroke-width="{sw}"/>"##
        ));
    }
}

fn build_climb_markers(svg: &mut String, holds: &[(Position, Role)], boost: f64) {
    let r = CLIMB_MARKER_RADIUS * boost;
    let sw = CLIMB_MARKER_STROKE * boost;
    for &(position, role) in holds {
        let (px, py) = coords::board_to_image_px(position);
        let color = role_color(role);
        svg.push_str(&format!(
            r##"<circle cx="{px}" cy="{py}" r="{r}" fill="none" stroke="{color}" stroke-width="{sw}" opacity="0.85"/>"##
        ));
    }
}

fn build_svg_document(content: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">{}</svg>"#,
        board::IMAGE_WIDTH_PX,
        board::IMAGE_HEIGHT_PX,
        content
    )
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn BoardView(
    display_mode: ReadSignal<DisplayMode>,
    layout: ReadSignal<HoldLayout>,
    selection: Signal<SelectionState>,
    active_climb: ReadSignal<Option<ClimbSummary>>,
) -> Element {
    let mut selection = selection;

    // Memoize SVG generation — recomputes when the mode, selection,
    // layout, or active climb change.
    let svg_html = use_memo(move || {
        let boost = size_boost(container_width());
        let mut content = String::with_capacity(2048);
        match *display_mode.read() {
            DisplayMode::Filter => {
                build_selection_markers(&mut content, selection.read().selected(), boost);
            }
            DisplayMode::Climb => {
                if let Some(climb) = &*active_climb.read() {
                    let layout = layout.read();
                    let resolved: Vec<(Position, Role)> = frames::resolve(&climb.frames, &layout)
                        .into_iter()
                        .map(|(hold, role)| (hold.position, role))
                        .collect();
                    build_climb_markers(&mut content, &resolved, boost);
                }
            }
        }
        build_svg_document(&content)
    });

    rsx! {
        div {
            id: BOARD_CONTAINER_ID,
            class: "board-container",

            onclick: move |evt: Event<MouseData>| {
                // Replay mode is read-only.
                if *display_mode.read() == DisplayMode::Climb {
                    return;
                }
                let client = evt.client_coordinates();
                let Some((img_x, img_y)) =
                    coords::click_to_image_px(client.x, client.y, BOARD_CONTAINER_ID)
                else {
                    return;
                };

                let layout = layout.read();
                let threshold = MARKER_HIT_RADIUS * size_boost(container_width());

                // Apply to a copy and commit only on a real change, so
                // consumers are notified exactly when the selection changes.
                let mut next = selection.read().clone();
                let hit = find_marker_hit(next.selected(), (img_x, img_y), threshold)
                    .map(|id| id.to_string());
                let changed = match hit {
                    Some(id) => next.activate_on(&id, &layout),
                    None => next.activate_at(coords::image_px_to_board(img_x, img_y), &layout),
                };
                if changed {
                    selection.set(next);
                }
            },

            img {
                src: "/static/images/tension2.png",
                draggable: "false",
                alt: "Tension Board 2",
            }

            div {
                dangerous_inner_html: "{svg_html}",
                style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
            }
        }
    }
}
