use serde::{Deserialize, Serialize};

/// Function a hold plays in a climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Start,
    Middle,
    Finish,
    Foot,
}

/// All roles in wire-id order (5, 6, 7, 8). Per-hold cycles are rotations
/// of this sequence.
pub const BASE_ROLES: [Role; 4] = [Role::Start, Role::Middle, Role::Finish, Role::Foot];

impl Role {
    /// Wire identifier used in hold frames and the search payload.
    pub const fn id(self) -> u8 {
        match self {
            Role::Start => 5,
            Role::Middle => 6,
            Role::Finish => 7,
            Role::Foot => 8,
        }
    }

    pub fn from_id(id: u8) -> Option<Role> {
        match id {
            5 => Some(Role::Start),
            6 => Some(Role::Middle),
            7 => Some(Role::Finish),
            8 => Some(Role::Foot),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Start => write!(f, "Start"),
            Role::Middle => write!(f, "Middle"),
            Role::Finish => write!(f, "Finish"),
            Role::Foot => write!(f, "Foot"),
        }
    }
}

/// The base sequence rotated so `default_role` comes first.
pub fn rotated_sequence(default_role: Role) -> [Role; 4] {
    let idx = BASE_ROLES
        .iter()
        .position(|r| *r == default_role)
        .unwrap_or(0);
    [
        BASE_ROLES[idx],
        BASE_ROLES[(idx + 1) % 4],
        BASE_ROLES[(idx + 2) % 4],
        BASE_ROLES[(idx + 3) % 4],
    ]
}

/// Role a hold should carry after `click_count` activations, or `None`
/// when the cycle ends and the hold deselects.
///
/// Click 1 selects with the default role, clicks 2-4 walk the rest of
/// the rotated sequence, the 5th click deselects.
pub fn next_role(default_role: Role, click_count: u32) -> Option<Role> {
    if click_count <= 1 {
        return Some(default_role);
    }
    let seq = rotated_sequence(default_role);
    seq.get(click_count as usize - 1).copied()
}
