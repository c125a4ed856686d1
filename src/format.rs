//! Conversion between scale factors and the percentage text shown in the entry.

use crate::presets::labelled_preset;
use thiserror::Error;

/// Errors produced when parsing user-entered zoom text.
///
/// Both kinds are handled the same way by [`crate::ZoomAction`]: the entry is
/// reverted to the current scale and the model is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("zoom level is empty")]
    Empty,
    #[error("zoom level is not a percentage")]
    Invalid,
}

/// Formats a logical scale factor as a percentage, e.g. `1.0` as `"100%"`.
///
/// Scales matching a labelled preset use the preset's name. Whole percentages
/// are printed without decimals, everything else with two.
pub fn format_zoom_level(scale: f64) -> String {
    if let Some(preset) = labelled_preset(scale) {
        return preset.name.to_owned();
    }

    let percent = scale * 100.0;
    let rounded = percent.round();
    if (rounded - percent).abs() < 0.001 {
        format!("{rounded:.0}%")
    } else {
        format!("{percent:.2}%")
    }
}

/// Parses entry text such as `"150"`, `"150%"` or `"133.33%"` into a logical
/// scale factor (`1.5`, `1.5`, `1.3333`).
///
/// The numeral is read greedily from the start of the text. The only
/// character allowed to follow it is `%`; whatever comes after that sign is
/// ignored.
pub fn parse_zoom_level(text: &str) -> Result<f64, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let trimmed = text.trim_start();
    let consumed = numeral_len(trimmed);
    if consumed == 0 {
        // Nothing converted: the whole text, leading whitespace included, is
        // what follows the (empty) numeral.
        return if text.starts_with('%') {
            Ok(0.0)
        } else {
            Err(ParseError::Invalid)
        };
    }

    let (numeral, rest) = trimmed.split_at(consumed);
    if !rest.is_empty() && !rest.starts_with('%') {
        return Err(ParseError::Invalid);
    }

    let percent: f64 = numeral.parse().map_err(|_| ParseError::Invalid)?;
    Ok(percent / 100.0)
}

/// Length in bytes of the longest decimal floating-point numeral at the start
/// of `text`, or 0 if there is none.
fn numeral_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = digits_from(pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digits_from(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}
