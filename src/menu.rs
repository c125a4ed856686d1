//! The declarative description of the zoom popup menu.

use crate::model::SizingMode;
use crate::presets::ZOOM_PRESETS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a menu description.
#[derive(Error, Debug)]
pub enum MenuLoadError {
    #[error("zoom menu description not found: {0}")]
    NotFound(String),
    #[error("invalid UTF-8 in zoom menu description: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse zoom menu description: {0}")]
    ParseError(#[from] ron::de::SpannedError),
}

/// What happens when a menu item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MenuAction {
    SizingMode(SizingMode),
    /// Switch to free sizing at this logical scale.
    Zoom(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

/// The two sections of the zoom menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    /// Fixed sizing modes ("Fit Page", ...).
    Modes,
    /// Preset zoom levels up to the model's maximum scale.
    FreeZoom,
}

/// Menu shown by the zoom control's dropdown.
///
/// Only the modes section is part of the description; the free zoom section
/// is always generated by [`ZoomMenu::populate_free_zoom`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomMenu {
    modes: Vec<MenuItem>,
    #[serde(skip)]
    free_zoom: Vec<MenuItem>,
}

impl ZoomMenu {
    pub fn new(modes: Vec<MenuItem>) -> Self {
        Self {
            modes,
            free_zoom: Vec::new(),
        }
    }

    /// The menu used when no description is supplied.
    pub fn standard() -> Self {
        let item = |label: &str, mode| MenuItem {
            label: label.to_owned(),
            action: MenuAction::SizingMode(mode),
        };
        Self::new(vec![
            item("Fit Page", SizingMode::FitPage),
            item("Fit Width", SizingMode::FitWidth),
            item("Automatic", SizingMode::Automatic),
        ])
    }

    /// Parses a RON menu description.
    pub fn from_ron(source: &str) -> Result<Self, MenuLoadError> {
        Ok(ron::from_str(source)?)
    }

    pub fn section(&self, section: MenuSection) -> &[MenuItem] {
        match section {
            MenuSection::Modes => &self.modes,
            MenuSection::FreeZoom => &self.free_zoom,
        }
    }

    /// All items in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.modes.iter().chain(&self.free_zoom)
    }

    /// Replaces the free zoom section with the presets allowed by `max_scale`.
    pub fn populate_free_zoom(&mut self, max_scale: f64) {
        let items = free_zoom_items(max_scale);
        log::debug!(
            "free zoom section: {} presets up to scale {max_scale}",
            items.len()
        );
        self.free_zoom = items;
    }

    /// Width of the entry in characters: the longest mode label plus one for
    /// the dropdown icon.
    pub fn entry_width_chars(&self) -> usize {
        let longest = self
            .modes
            .iter()
            .map(|item| item.label.chars().count())
            .max()
            .unwrap_or(0);
        longest + 1
    }
}

impl Default for ZoomMenu {
    fn default() -> Self {
        Self::standard()
    }
}

/// Menu items for every preset up to and including `max_scale`.
pub fn free_zoom_items(max_scale: f64) -> Vec<MenuItem> {
    ZOOM_PRESETS
        .iter()
        .take_while(|preset| preset.level <= max_scale)
        .map(|preset| MenuItem {
            label: preset.name.to_owned(),
            action: MenuAction::Zoom(preset.level),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_zoom_items_prefix() {
        let items = free_zoom_items(4.0);
        let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "50%", "70%", "85%", "100%", "125%", "150%", "175%", "200%", "300%", "400%"
            ]
        );
        assert_eq!(items[9].action, MenuAction::Zoom(4.0));
    }

    #[test]
    fn test_free_zoom_items_count_matches_presets() {
        for max_scale in [0.1, 0.5, 1.0, 3.0, 16.0, 64.0, 1000.0] {
            let expected = ZOOM_PRESETS
                .iter()
                .filter(|preset| preset.level <= max_scale)
                .count();
            assert_eq!(free_zoom_items(max_scale).len(), expected, "{max_scale}");
        }
    }

    #[test]
    fn test_lower_max_scale_never_grows() {
        let mut previous = usize::MAX;
        for max_scale in [100.0, 64.0, 20.0, 8.0, 2.5, 1.0, 0.6, 0.2] {
            let count = free_zoom_items(max_scale).len();
            assert!(count <= previous);
            previous = count;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_populate_replaces_section() {
        let mut menu = ZoomMenu::standard();
        menu.populate_free_zoom(64.0);
        assert_eq!(menu.section(MenuSection::FreeZoom).len(), 14);

        menu.populate_free_zoom(1.0);
        assert_eq!(menu.section(MenuSection::FreeZoom).len(), 4);
        assert_eq!(menu.section(MenuSection::Modes).len(), 3);
        assert_eq!(menu.items().count(), 7);
    }

    #[test]
    fn test_entry_width_chars() {
        assert_eq!(ZoomMenu::standard().entry_width_chars(), 10);
        assert_eq!(ZoomMenu::new(Vec::new()).entry_width_chars(), 1);
    }

    #[test]
    fn test_from_ron() {
        let menu = ZoomMenu::from_ron(
            r#"(modes: [(label: "Ajustar página", action: SizingMode(FitPage))])"#,
        )
        .unwrap();
        assert_eq!(menu.section(MenuSection::Modes)[0].label, "Ajustar página");
        assert!(menu.section(MenuSection::FreeZoom).is_empty());
        assert_eq!(menu.entry_width_chars(), 15);
    }

    #[test]
    fn test_bundled_description_matches_standard() {
        let menu = ZoomMenu::from_ron(include_str!("../assets/zoom_menu.ron")).unwrap();
        assert_eq!(menu, ZoomMenu::standard());
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(matches!(
            ZoomMenu::from_ron("(modes: 3)"),
            Err(MenuLoadError::ParseError(_))
        ));
    }
}
