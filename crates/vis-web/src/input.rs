use web_sys as web;

/// Last known pointer state in normalized canvas coordinates. Single writer
/// (the pointer event handlers), read once per frame as a snapshot.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub u: f32,
    pub v: f32,
    pub down: bool,
    /// False until the first pointer event; before that the simulation gets
    /// no pointer at all rather than a phantom one at the origin.
    pub seen: bool,
}

/// Normalize CSS-pixel coordinates against an element's CSS size.
#[inline]
pub fn normalized_uv(x_css: f32, y_css: f32, width: f32, height: f32) -> [f32; 2] {
    if width > 0.0 && height > 0.0 {
        [
            (x_css / width).clamp(0.0, 1.0),
            (y_css / height).clamp(0.0, 1.0),
        ]
    } else {
        [0.5, 0.5]
    }
}

#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    normalized_uv(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
