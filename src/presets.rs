//! The fixed table of preset zoom levels.

/// Tolerance used when matching a scale against a preset level.
pub const EPSILON: f64 = 0.000001;

/// Index of the first preset whose label is used verbatim when formatting.
///
/// The three smallest presets are only offered in the menu; a scale matching
/// one of them is formatted numerically.
pub const FIRST_LABELLED_PRESET: usize = 3;

/// A named zoom level offered for quick selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPreset {
    /// Label shown in the entry and the menu (e.g. "100%").
    pub name: &'static str,
    /// Logical scale factor, 1.0 = 100%.
    pub level: f64,
}

const fn preset(name: &'static str, level: f64) -> ZoomPreset {
    ZoomPreset { name, level }
}

/// Preset zoom levels in ascending order.
///
/// Levels step by the fourth root of two, so every fourth entry doubles.
pub const ZOOM_PRESETS: [ZoomPreset; 14] = [
    preset("50%", 0.5),
    preset("70%", 0.7071067811),
    preset("85%", 0.8408964152),
    preset("100%", 1.0),
    preset("125%", 1.1892071149),
    preset("150%", 1.4142135623),
    preset("175%", 1.6817928304),
    preset("200%", 2.0),
    preset("300%", 2.8284271247),
    preset("400%", 4.0),
    preset("800%", 8.0),
    preset("1600%", 16.0),
    preset("3200%", 32.0),
    preset("6400%", 64.0),
];

/// Returns the labelled preset matching `scale` within [`EPSILON`], if any.
pub fn labelled_preset(scale: f64) -> Option<&'static ZoomPreset> {
    ZOOM_PRESETS[FIRST_LABELLED_PRESET..]
        .iter()
        .find(|preset| (scale - preset.level).abs() < EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_ascending() {
        assert!(ZOOM_PRESETS.windows(2).all(|w| w[0].level < w[1].level));
        assert_eq!(ZOOM_PRESETS.first().map(|p| p.level), Some(0.5));
        assert_eq!(ZOOM_PRESETS.last().map(|p| p.level), Some(64.0));
    }

    #[test]
    fn test_labelled_preset_skips_smallest_levels() {
        assert!(labelled_preset(0.5).is_none());
        assert!(labelled_preset(0.7071067811).is_none());
        assert!(labelled_preset(0.8408964152).is_none());
        assert_eq!(labelled_preset(1.0).map(|p| p.name), Some("100%"));
        assert_eq!(labelled_preset(1.4142135623).map(|p| p.name), Some("150%"));
    }

    #[test]
    fn test_labelled_preset_tolerance() {
        assert_eq!(labelled_preset(2.0 + 0.0000005).map(|p| p.name), Some("200%"));
        assert!(labelled_preset(2.0 + 0.00001).is_none());
    }
}
