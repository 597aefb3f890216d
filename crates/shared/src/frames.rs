use crate::layout::{Hold, HoldLayout};
use crate::roles::Role;

/// One parsed token of a climb's hold encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub point_id: String,
    pub role: Role,
}

/// Parse a climb encoding like `"p1347r6p1352r5"` into frames.
///
/// The encoding is a delimiter-free concatenation of
/// `p<digits>r<digits>` tokens. Malformed tokens and unknown role ids
/// are skipped, token order is preserved, and an empty encoding yields
/// an empty list.
pub fn parse(encoding: &str) -> Vec<Frame> {
    let bytes = encoding.as_bytes();
    let mut frames = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'p' {
            i += 1;
            continue;
        }
        let point_end = scan_digits(bytes, i + 1);
        if point_end == i + 1 {
            i += 1;
            continue;
        }
        if bytes.get(point_end) != Some(&b'r') {
            i = point_end;
            continue;
        }
        let role_end = scan_digits(bytes, point_end + 1);
        if role_end == point_end + 1 {
            i = point_end + 1;
            continue;
        }
        let role_digits = &encoding[point_end + 1..role_end];
        if let Some(role) = role_digits.parse::<u8>().ok().and_then(Role::from_id) {
            frames.push(Frame {
                point_id: encoding[i..point_end].to_string(),
                role,
            });
        }
        i = role_end;
    }
    frames
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Resolve an encoding against the hold layout, dropping tokens whose
/// point id is not in the dataset.
pub fn resolve<'a>(encoding: &str, layout: &'a HoldLayout) -> Vec<(&'a Hold, Role)> {
    parse(encoding)
        .into_iter()
        .filter_map(|frame| layout.get(&frame.point_id).map(|hold| (hold, frame.role)))
        .collect()
}
