/// Offset between the UI's 0-based difficulty index and the backend's
/// grade codes.
pub const GRADE_OFFSET: i32 = 10;

/// Selectable difficulty range, ordered easiest to hardest. The UI
/// stores indices into this table; `GRADE_OFFSET` converts an index to
/// the backend grade code.
pub const DIFFICULTY_OPTIONS: [&str; 24] = [
    "4a/V0", "4b/V0", "4c/V0",
    "5a/V1", "5b/V1", "5c/V2",
    "6a/V3", "6a+/V3", "6b/V4", "6b+/V4",
    "6c/V5", "6c+/V5",
    "7a/V6", "7a+/V7",
    "7b/V8", "7b+/V8",
    "7c/V9", "7c+/V10",
    "8a/V11", "8a+/V12",
    "8b/V13", "8b+/V14",
    "8c/V15", "8c+/V16",
];

/// V-grade label for a backend difficulty code.
pub fn display_grade(code: i32) -> &'static str {
    match code {
        1..=12 => "V0",
        13..=14 => "V1",
        15 => "V2",
        16 => "V3",
        17 => "V3+",
        18 => "V4",
        19 => "V4+",
        20 => "V5",
        21 => "V5+",
        22 => "V6",
        23 => "V7",
        24 => "V8",
        25 => "V8+",
        26 => "V9",
        27 => "V10",
        28 => "V11",
        29 => "V12",
        30 => "V13",
        31 => "V14",
        32 => "V15",
        33 => "V16",
        34 => "V17",
        _ => "V?",
    }
}
