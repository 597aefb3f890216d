use serde::Deserialize;

use tension_shared::layout::{Hold, Position};
use tension_shared::models::{ResultPage, SearchCriteria, SearchRequest};
use tension_shared::roles::Role;

/// Raw record shape of the holds dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldRecord {
    pub id: String,
    pub hole: HolePosition,
    pub default_role_id: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolePosition {
    pub x: f64,
    pub y: f64,
}

/// Convert dataset records to holds, skipping records whose default
/// role id is not in the known set.
pub fn holds_from_records(records: Vec<HoldRecord>) -> Vec<Hold> {
    records
        .into_iter()
        .filter_map(|r| {
            let default_role = Role::from_id(r.default_role_id)?;
            Some(Hold {
                id: r.id,
                position: Position {
                    x: r.hole.x,
                    y: r.hole.y,
                },
                default_role,
            })
        })
        .collect()
}

fn origin() -> String {
    // In production, same origin. In dev, might be different.
    let window = web_sys::window().unwrap();
    window.location().origin().unwrap()
}

fn search_url() -> String {
    format!("{}/api/climbs/search", origin())
}

fn holds_url() -> String {
    format!("{}/static/data/holds.json", origin())
}

/// Fetch the static holds dataset.
pub async fn fetch_holds() -> Result<Vec<Hold>, String> {
    let resp = reqwest::get(holds_url()).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status().as_u16()));
    }
    let records: Vec<HoldRecord> = resp.json().await.map_err(|e| e.to_string())?;
    Ok(holds_from_records(records))
}

/// Run one page of a climb search.
pub async fn search_climbs(criteria: &SearchCriteria, page: u32) -> Result<ResultPage, String> {
    let request = SearchRequest::from_criteria(page, criteria);

    let resp = reqwest::Client::new()
        .post(search_url())
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status().as_u16()));
    }

    resp.json().await.map_err(|e| e.to_string())
}

/// Fire-and-forget view counter ping when a climb is opened for replay.
pub fn track_climb_view_fire(uuid: &str) {
    let uuid = uuid.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = track_climb_view(&uuid).await;
    });
}

async fn track_climb_view(uuid: &str) -> Result<(), String> {
    let url = format!("{}/api/climbs/{}/view", origin(), uuid);
    let resp = reqwest::Client::new()
        .post(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status().as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_record_deserializes() {
        let json = r#"{"id":"p1347","hole":{"x":-8.0,"y":116.0},"default_role_id":6}"#;
        let record: HoldRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "p1347");
        assert_eq!(record.hole.x, -8.0);
        assert_eq!(record.default_role_id, 6);
    }

    #[test]
    fn test_holds_from_records_maps_roles() {
        let records = vec![
            HoldRecord {
                id: "p1".to_string(),
                hole: HolePosition { x: 0.0, y: 10.0 },
                default_role_id: 5,
            },
            HoldRecord {
                id: "p2".to_string(),
                hole: HolePosition { x: 8.0, y: 10.0 },
                default_role_id: 8,
            },
        ];
        let holds = holds_from_records(records);
        assert_eq!(holds.len(), 2);
        assert_eq!(holds[0].default_role, Role::Start);
        assert_eq!(holds[1].default_role, Role::Foot);
    }

    #[test]
    fn test_holds_from_records_skips_unknown_role() {
        let records = vec![
            HoldRecord {
                id: "p1".to_string(),
                hole: HolePosition { x: 0.0, y: 10.0 },
                default_role_id: 3,
            },
            HoldRecord {
                id: "p2".to_string(),
                hole: HolePosition { x: 8.0, y: 10.0 },
                default_role_id: 6,
            },
        ];
        let holds = holds_from_records(records);
        assert_eq!(holds.len(), 1);
        assert_eq!(holds[0].id, "p2");
    }
}
