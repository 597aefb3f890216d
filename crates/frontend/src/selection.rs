use std::collections::HashMap;

use tension_shared::layout::{HoldLayout, Position};
use tension_shared::roles::{self, Role};

/// A hold in the current filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedHold {
    pub id: String,
    pub position: Position,
    pub role: Role,
}

/// Owns the filter selection: which holds are selected, which role each
/// currently carries, and how many times each hold has been activated.
///
/// Background clicks go through [`SelectionState::activate_at`] (select
/// only — they never advance the cycle); clicks on an existing marker go
/// through [`SelectionState::activate_on`]. Both return `true` iff the
/// selection changed, so callers can notify consumers on real changes
/// only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Vec<SelectedHold>,
    clicks: HashMap<String, u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected holds in insertion order.
    pub fn selected(&self) -> &[SelectedHold] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|h| h.id == id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.clicks.clear();
    }

    /// Background activation at a board-space point: select the nearest
    /// hold with its default role. No-op on an empty layout and on holds
    /// that are already selected.
    pub fn activate_at(&mut self, point: Position, layout: &HoldLayout) -> bool {
        let Some(hold) = layout.nearest(point) else {
            return false;
        };
        if self.is_selected(&hold.id) {
            return false;
        }
        self.clicks.insert(hold.id.clone(), 1);
        self.selected.push(SelectedHold {
            id: hold.id.clone(),
            position: hold.position,
            role: hold.default_role,
        });
        true
    }

    /// Direct activation on a hold's marker: advance its role cycle.
    ///
    /// The click counter is bumped exactly once and the new role derives
    /// from the post-increment count. When the cycle ends the hold is
    /// removed and its counter reset to 0, so re-selecting it restarts
    /// the cycle at the default role.
    pub fn activate_on(&mut self, id: &str, layout: &HoldLayout) -> bool {
        let Some(hold) = layout.get(id) else {
            return false;
        };
        let Some(index) = self.selected.iter().position(|h| h.id == id) else {
            // Not currently selected: plain selection at the default role.
            self.clicks.insert(hold.id.clone(), 1);
            self.selected.push(SelectedHold {
                id: hold.id.clone(),
                position: hold.position,
                role: hold.default_role,
            });
            return true;
        };
        let counter = self.clicks.entry(hold.id.clone()).or_insert(0);
        *counter += 1;
        let count = *counter;
        match roles::next_role(hold.default_role, count) {
            Some(role) => {
                let changed = self.selected[index].role != role;
                self.selected[index].role = role;
                changed
            }
            None => {
                self.selected.remove(index);
                self.clicks.insert(hold.id.clone(), 0);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tension_shared::layout::Hold;

    fn layout() -> HoldLayout {
        HoldLayout::new(vec![
            Hold {
                id: "p1347".to_string(),
                position: Position { x: 0.0, y: 60.0 },
                default_role: Role::Middle,
            },
            Hold {
                id: "p1352".to_string(),
                position: Position { x: 40.0, y: 60.0 },
                default_role: Role::Start,
            },
            Hold {
                id: "p1400".to_string(),
                position: Position { x: -40.0, y: 12.0 },
                default_role: Role::Foot,
            },
        ])
    }

    #[test]
    fn test_activate_at_selects_nearest_with_default_role() {
        let layout = layout();
        let mut state = SelectionState::new();
        let changed = state.activate_at(Position { x: 2.0, y: 58.0 }, &layout);
        assert!(changed);
        assert_eq!(state.selected().len(), 1);
        assert_eq!(state.selected()[0].id, "p1347");
        assert_eq!(state.selected()[0].role, Role::Middle);
    }

    #[test]
    fn test_activate_at_empty_layout_is_noop() {
        let empty = HoldLayout::new(vec![]);
        let mut state = SelectionState::new();
        assert!(!state.activate_at(Position { x: 0.0, y: 0.0 }, &empty));
        assert!(state.is_empty());
    }

    #[test]
    fn test_activate_at_already_selected_does_not_advance_cycle() {
        let layout = layout();
        let mut state = SelectionState::new();
        assert!(state.activate_at(Position { x: 0.0, y: 60.0 }, &layout));
        // A second background click on the same hold changes nothing.
        assert!(!state.activate_at(Position { x: 1.0, y: 59.0 }, &layout));
        assert_eq!(state.selected().len(), 1);
        assert_eq!(state.selected()[0].role, Role::Middle);
    }

    #[test]
    fn test_full_role_cycle_with_reset() {
        // Default role Middle (6): clicks walk 6, 7, 8, 5, then deselect,
        // and a fresh activation starts over at 6.
        let layout = layout();
        let mut state = SelectionState::new();

        assert!(state.activate_at(Position { x: 0.0, y: 60.0 }, &layout));
        assert_eq!(state.selected()[0].role, Role::Middle);

        assert!(state.activate_on("p1347", &layout));
        assert_eq!(state.selected()[0].role, Role::Finish);

        assert!(state.activate_on("p1347", &layout));
        assert_eq!(state.selected()[0].role, Role::Foot);

        assert!(state.activate_on("p1347", &layout));
        assert_eq!(state.selected()[0].role, Role::Start);

        // Fifth activation deselects.
        assert!(state.activate_on("p1347", &layout));
        assert!(state.is_empty());

        // The counter was reset, so re-selecting restarts at the default
        // role instead of deselecting again.
        assert!(state.activate_at(Position { x: 0.0, y: 60.0 }, &layout));
        assert_eq!(state.selected().len(), 1);
        assert_eq!(state.selected()[0].role, Role::Middle);
        assert!(state.activate_on("p1347", &layout));
        assert_eq!(state.selected()[0].role, Role::Finish);
    }

    #[test]
    fn test_selection_never_holds_duplicates() {
        let layout = layout();
        let mut state = SelectionState::new();
        for _ in 0..7 {
            state.activate_at(Position { x: 0.0, y: 60.0 }, &layout);
            state.activate_at(Position { x: 40.0, y: 60.0 }, &layout);
            state.activate_on("p1347", &layout);
        }
        let mut ids: Vec<&str> = state.selected().iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.selected().len());
    }

    #[test]
    fn test_activate_on_unselected_hold_selects_it() {
        let layout = layout();
        let mut state = SelectionState::new();
        assert!(state.activate_on("p1352", &layout));
        assert_eq!(state.selected()[0].id, "p1352");
        assert_eq!(state.selected()[0].role, Role::Start);
        // The next direct activation advances the cycle from the default.
        assert!(state.activate_on("p1352", &layout));
        assert_eq!(state.selected()[0].role, Role::Middle);
    }

    #[test]
    fn test_activate_on_unknown_hold_is_noop() {
        let layout = layout();
        let mut state = SelectionState::new();
        assert!(!state.activate_on("p9999", &layout));
        assert!(state.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let layout = layout();
        let mut state = SelectionState::new();
        state.activate_at(Position { x: -40.0, y: 12.0 }, &layout);
        state.activate_at(Position { x: 40.0, y: 60.0 }, &layout);
        state.activate_at(Position { x: 0.0, y: 60.0 }, &layout);
        let ids: Vec<&str> = state.selected().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["p1400", "p1352", "p1347"]);
    }

    #[test]
    fn test_deselect_keeps_other_holds() {
        let layout = layout();
        let mut state = SelectionState::new();
        state.activate_at(Position { x: 0.0, y: 60.0 }, &layout);
        state.activate_at(Position { x: 40.0, y: 60.0 }, &layout);
        for _ in 0..4 {
            state.activate_on("p1347", &layout);
        }
        assert_eq!(state.selected().len(), 1);
        assert_eq!(state.selected()[0].id, "p1352");
    }

    #[test]
    fn test_clear() {
        let layout = layout();
        let mut state = SelectionState::new();
        state.activate_at(Position { x: 0.0, y: 60.0 }, &layout);
        state.activate_on("p1347", &layout);
        state.clear();
        assert!(state.is_empty());
        // Cleared counters mean the cycle restarts from the default role.
        state.activate_at(Position { x: 0.0, y: 60.0 }, &layout);
        assert_eq!(state.selected()[0].role, Role::Middle);
    }
}
