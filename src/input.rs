use glam::Vec2;
use web_sys as web;

/// Latest pointer position in normalized device coordinates.
///
/// x runs -1 (left) to 1 (right), y runs -1 (bottom) to 1 (top). Starts
/// centered so the scene rests until the pointer moves.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
}

#[inline]
pub fn client_to_ndc(x_css: f32, y_css: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x_css / width) * 2.0 - 1.0,
        -((y_css / height) * 2.0 - 1.0),
    )
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    client_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
