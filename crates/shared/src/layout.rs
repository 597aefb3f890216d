use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// A point in board space (x grows toward the right edge, y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One hold of the board dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Hold {
    pub id: String,
    pub position: Position,
    pub default_role: Role,
}

/// Immutable hold dataset with id lookup and nearest-point search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoldLayout {
    holds: Vec<Hold>,
    by_id: HashMap<String, usize>,
}

impl HoldLayout {
    /// Duplicate ids keep the first record.
    pub fn new(holds: Vec<Hold>) -> Self {
        let mut kept = Vec::with_capacity(holds.len());
        let mut by_id = HashMap::with_capacity(holds.len());
        for hold in holds {
            if by_id.contains_key(&hold.id) {
                continue;
            }
            by_id.insert(hold.id.clone(), kept.len());
            kept.push(hold);
        }
        Self { holds: kept, by_id }
    }

    pub fn len(&self) -> usize {
        self.holds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holds.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Hold> {
        self.by_id.get(id).map(|&i| &self.holds[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hold> {
        self.holds.iter()
    }

    /// Hold closest to `point` by squared Euclidean distance; ties keep
    /// the earlier hold in dataset order. `None` only for an empty layout.
    pub fn nearest(&self, point: Position) -> Option<&Hold> {
        let mut best: Option<&Hold> = None;
        let mut best_d2 = f64::INFINITY;
        for hold in &self.holds {
            let dx = hold.position.x - point.x;
            let dy = hold.position.y - point.y;
            let d2 = dx * dx + dy * dy;
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(hold);
            }
        }
        best
    }
}
