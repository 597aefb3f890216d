use serde::{Deserialize, Serialize};

use crate::grades::{DIFFICULTY_OPTIONS, GRADE_OFFSET};
use crate::roles::Role;

/// Climbs per page, fixed by the search endpoint contract.
pub const PAGE_SIZE: u32 = 10;

/// Board layout identifier sent with every search.
pub const LAYOUT_ID: &str = "TENSION_2_MIRROR";

/// Everything a search is filtered by. `holds` is the selection in
/// insertion order: one (point id, active role) pair per selected hold.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub holds: Vec<(String, Role)>,
    pub setter: String,
    pub include_mirrored: bool,
    pub require_type_match: bool,
    pub difficulty_min: usize,
    pub difficulty_max: usize,
    /// Board angle shown in the UI; not part of the wire payload.
    pub angle: Option<u32>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            holds: Vec::new(),
            setter: String::new(),
            include_mirrored: false,
            require_type_match: false,
            difficulty_min: 0,
            difficulty_max: DIFFICULTY_OPTIONS.len() - 1,
            angle: None,
        }
    }
}

/// Search request wire format. Field names must match the endpoint
/// contract, hence the camelCase rename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub page: u32,
    pub page_size: u32,
    pub layout: &'static str,
    pub setter: Option<String>,
    pub include_climbs_with_mirrored_holds: bool,
    pub hold_frames: Vec<String>,
    pub require_type_match: bool,
    pub min_grade: i32,
    pub max_grade: i32,
}

impl SearchRequest {
    pub fn from_criteria(page: u32, criteria: &SearchCriteria) -> Self {
        let hold_frames = criteria
            .holds
            .iter()
            .map(|(id, role)| format!("{}r{}", id, role.id()))
            .collect();
        let setter = criteria.setter.trim();
        Self {
            page,
            page_size: PAGE_SIZE,
            layout: LAYOUT_ID,
            setter: (!setter.is_empty()).then(|| setter.to_string()),
            include_climbs_with_mirrored_holds: criteria.include_mirrored,
            hold_frames,
            require_type_match: criteria.require_type_match,
            min_grade: criteria.difficulty_min as i32 + GRADE_OFFSET,
            max_grade: criteria.difficulty_max as i32 + GRADE_OFFSET,
        }
    }
}

/// One climb as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimbSummary {
    pub uuid: String,
    pub name: String,
    pub setter: String,
    pub difficulty: i32,
    /// Quality score, 0-3.
    pub quality: f64,
    pub ascents: u32,
    pub angle: u32,
    /// Hold encoding; may be absent for climbs without frame data.
    #[serde(default)]
    pub frames: String,
    /// Set when the climb only matched through its mirrored variant.
    #[serde(default)]
    pub no_strict_match: bool,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub items: Vec<ClimbSummary>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

/// Whether pages beyond `page` exist.
pub fn has_more(page: u32, page_size: u32, total: u64) -> bool {
    (page as u64 + 1) * (page_size as u64) < total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria_with_holds() -> SearchCriteria {
        SearchCriteria {
            holds: vec![
                ("p1347".to_string(), Role::Middle),
                ("p1352".to_string(), Role::Start),
            ],
            setter: "alex".to_string(),
            include_mirrored: true,
            require_type_match: false,
            difficulty_min: 0,
            difficulty_max: 5,
            angle: Some(40),
        }
    }

    #[test]
    fn test_request_field_names_match_contract() {
        let req = SearchRequest::from_criteria(2, &criteria_with_holds());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["layout"], "TENSION_2_MIRROR");
        assert_eq!(json["setter"], "alex");
        assert_eq!(json["includeClimbsWithMirroredHolds"], true);
        assert_eq!(json["requireTypeMatch"], false);
        assert_eq!(json["minGrade"], 10);
        assert_eq!(json["maxGrade"], 15);
    }

    #[test]
    fn test_request_hold_frames_in_selection_order() {
        let req = SearchRequest::from_criteria(0, &criteria_with_holds());
        assert_eq!(req.hold_frames, vec!["p1347r6", "p1352r5"]);
    }

    #[test]
    fn test_request_grade_offset() {
        // UI difficulty range [0, 5] serializes to grades [10, 15].
        let criteria = SearchCriteria {
            difficulty_min: 0,
            difficulty_max: 5,
            ..SearchCriteria::default()
        };
        let req = SearchRequest::from_criteria(0, &criteria);
        assert_eq!(req.min_grade, 10);
        assert_eq!(req.max_grade, 15);
    }

    #[test]
    fn test_request_blank_setter_is_null() {
        let criteria = SearchCriteria {
            setter: "   ".to_string(),
            ..SearchCriteria::default()
        };
        let req = SearchRequest::from_criteria(0, &criteria);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["setter"].is_null());
    }

    #[test]
    fn test_request_has_no_angle_field() {
        let req = SearchRequest::from_criteria(0, &criteria_with_holds());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("angle").is_none());
    }

    #[test]
    fn test_result_page_deserializes() {
        let json = r#"{
            "items": [{
                "uuid": "c-1",
                "name": "Left Hook",
                "setter": "mia",
                "difficulty": 17,
                "quality": 2.5,
                "ascents": 41,
                "angle": 40,
                "frames": "p1347r6p1352r5",
                "noStrictMatch": true
            }],
            "page": 0,
            "pageSize": 10,
            "total": 24
        }"#;
        let page: ResultPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Left Hook");
        assert_eq!(page.items[0].difficulty, 17);
        assert!(page.items[0].no_strict_match);
        assert_eq!(page.total, 24);
    }

    #[test]
    fn test_climb_summary_defaults() {
        // Frames and the mirror flag may be absent.
        let json = r#"{
            "uuid": "c-2",
            "name": "No Frames",
            "setter": "mia",
            "difficulty": 20,
            "quality": 3.0,
            "ascents": 2,
            "angle": 30
        }"#;
        let climb: ClimbSummary = serde_json::from_str(json).unwrap();
        assert_eq!(climb.frames, "");
        assert!(!climb.no_strict_match);
    }

    #[test]
    fn test_has_more() {
        assert!(has_more(0, 10, 24));
        assert!(has_more(1, 10, 24));
        assert!(!has_more(2, 10, 24));
        assert!(!has_more(0, 10, 10));
        assert!(!has_more(0, 10, 0));
    }
}
