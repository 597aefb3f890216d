use tension_shared::board;
use tension_shared::layout::Position;

/// Pure function: convert container-relative coordinates to native
/// board-photo pixels. Usable in unit tests (no web_sys dependency).
///
/// Only `container_w` is needed because the photo renders with
/// `width:100%; height:auto`, so both axes share the same scale factor
/// (`IMAGE_WIDTH_PX / container_w`).
pub fn client_to_image_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
) -> Option<(f64, f64)> {
    if container_w <= 0.0 {
        return None;
    }
    let scale = board::IMAGE_WIDTH_PX / container_w;
    let img_x = (container_x * scale).clamp(0.0, board::IMAGE_WIDTH_PX);
    let img_y = (container_y * scale).clamp(0.0, board::IMAGE_HEIGHT_PX);
    Some((img_x, img_y))
}

/// Get container-relative click coordinates using web_sys, then convert
/// from rendered pixel space to photo pixel space.
pub fn click_to_image_px(client_x: f64, client_y: f64, container_id: &str) -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();

    let container_x = client_x - rect.left();
    let container_y = client_y - rect.top();

    client_to_image_px(container_x, container_y, rect.width())
}

/// Photo pixel position of a board-space point.
pub fn board_to_image_px(pos: Position) -> (f64, f64) {
    board::TENSION2.to_pixel(pos)
}

/// Board-space point under a photo pixel position.
pub fn image_px_to_board(px: f64, py: f64) -> Position {
    board::TENSION2.to_board(px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_to_image_px_full_width_container() {
        // Container width equals the native photo width: identity scale.
        let (x, y) = client_to_image_px(600.0, 650.0, board::IMAGE_WIDTH_PX).unwrap();
        assert!((x - 600.0).abs() < 1e-9);
        assert!((y - 650.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_image_px_half_width_container() {
        let (x, y) = client_to_image_px(300.0, 325.0, board::IMAGE_WIDTH_PX / 2.0).unwrap();
        assert!((x - 600.0).abs() < 1e-9);
        assert!((y - 650.0).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_image_px_clamps_to_photo() {
        let (x, y) = client_to_image_px(-50.0, 99999.0, 600.0).unwrap();
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - board::IMAGE_HEIGHT_PX).abs() < 1e-9);
    }

    #[test]
    fn test_client_to_image_px_invalid_container() {
        assert!(client_to_image_px(10.0, 10.0, 0.0).is_none());
        assert!(client_to_image_px(10.0, 10.0, -5.0).is_none());
    }

    #[test]
    fn test_board_pixel_round_trip() {
        let pos = Position { x: -12.0, y: 96.0 };
        let (px, py) = board_to_image_px(pos);
        let back = image_px_to_board(px, py);
        assert!((back.x - pos.x).abs() < 1e-9);
        assert!((back.y - pos.y).abs() < 1e-9);
    }
}
