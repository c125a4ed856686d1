/// Size of the demo page in points (A4).
pub const PAGE_SIZE_POINTS: [f32; 2] = [595.0, 842.0];

/// Margin around the page in the document view, in pixels.
pub const PAGE_MARGIN: f32 = 16.0;

/// Keyboard zoom step: one preset level.
pub const ZOOM_STEP: f64 = 1.189_207_115_002_721;

/// Vertical padding of the popup frame, in pixels.
pub const POPUP_FRAME_PADDING: f32 = 12.0;

/// Path of the zoom menu description inside the embedded assets.
pub const ZOOM_MENU_PATH: &str = "zoom_menu.ron";
