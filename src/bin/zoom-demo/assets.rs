//! Asset embedding and loading utilities.

use crate::constants::ZOOM_MENU_PATH;
use rust_embed::RustEmbed;
use zoom_control::{MenuLoadError, ZoomMenu};

/// Embeds the assets/ directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Loads the zoom menu description from embedded assets.
pub fn load_zoom_menu() -> Result<ZoomMenu, MenuLoadError> {
    let file = Assets::get(ZOOM_MENU_PATH)
        .ok_or_else(|| MenuLoadError::NotFound(ZOOM_MENU_PATH.to_owned()))?;
    let source = std::str::from_utf8(&file.data)?;
    ZoomMenu::from_ron(source)
}
