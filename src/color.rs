//! Color math for contrast rules: relative luminance, contrast ratio, WCAG AA.
//!
//! These are exported alongside [`crate::validate`] so rule authors and UI
//! consumers share one implementation. All functions are pure; unparseable
//! colors surface as [`ColorParseError`] rather than a silent default.

use thiserror::Error;

/// A color string could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unrecognized color '{0}' (expected #RGB, #RRGGBB, 'black' or 'white')")]
    Unrecognized(String),
}

/// Parse a color into sRGB bytes.
///
/// Accepts 3- and 6-digit hex (leading `#` optional, any case) plus the named
/// colors `black` and `white` — the forms the editor actually emits.
fn parse_srgb(color: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let trimmed = color.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "black" => return Ok((0, 0, 0)),
        "white" => return Ok((255, 255, 255)),
        _ => {}
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expand = |h: &str, i: usize| u8::from_str_radix(&h[i..i + 1].repeat(2), 16);
    let pair = |h: &str, i: usize| u8::from_str_radix(&h[i..i + 2], 16);

    let parsed = match hex.len() {
        3 if hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            Some((expand(hex, 0), expand(hex, 1), expand(hex, 2)))
        }
        6 if hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            Some((pair(hex, 0), pair(hex, 2), pair(hex, 4)))
        }
        _ => None,
    };

    match parsed {
        Some((Ok(r), Ok(g), Ok(b))) => Ok((r, g, b)),
        _ => Err(ColorParseError::Unrecognized(color.to_string())),
    }
}

/// Relative luminance of an sRGB color per the WCAG definition.
///
/// Channels are linearized with the 0.03928 threshold, then weighted
/// 0.2126 / 0.7152 / 0.0722.
pub fn relative_luminance(color: &str) -> Result<f64, ColorParseError> {
    let (r, g, b) = parse_srgb(color)?;

    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    }

    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// WCAG contrast ratio between two colors: `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Ranges from 1.0 (identical) to 21.0 (black on white).
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorParseError> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Whether a foreground/background pair meets the WCAG AA threshold.
///
/// 4.5:1 for normal text, 3.0:1 for large text. Whether the text counts as
/// "large" is the caller's decision; the engine does no size-based inference.
pub fn meets_aa(foreground: &str, background: &str, large_text: bool) -> Result<bool, ColorParseError> {
    let required = if large_text { 3.0 } else { 4.5 };
    Ok(contrast_ratio(foreground, background)? >= required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_maximum_contrast() {
        let ratio = contrast_ratio("#FFFFFF", "#000000").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!(meets_aa("#FFFFFF", "#000000", false).unwrap());
    }

    #[test]
    fn near_identical_grays_fail_aa() {
        let ratio = contrast_ratio("#777777", "#888888").unwrap();
        assert!(ratio < 4.5, "ratio was {ratio}");
        assert!(!meets_aa("#777777", "#888888", false).unwrap());
    }

    #[test]
    fn large_text_threshold_is_looser() {
        // ~3.5:1 — fails normal text, passes large text.
        let ratio = contrast_ratio("#FFFFFF", "#8A8A8A").unwrap();
        assert!(ratio > 3.0 && ratio < 4.5, "ratio was {ratio}");
        assert!(meets_aa("#FFFFFF", "#8A8A8A", true).unwrap());
        assert!(!meets_aa("#FFFFFF", "#8A8A8A", false).unwrap());
    }

    #[test]
    fn short_hex_named_and_case_variants_agree() {
        let full = relative_luminance("#FF0000").unwrap();
        assert_eq!(relative_luminance("#f00").unwrap(), full);
        assert_eq!(relative_luminance("ff0000").unwrap(), full);
        assert_eq!(relative_luminance("black").unwrap(), relative_luminance("#000").unwrap());
        assert_eq!(relative_luminance("WHITE").unwrap(), relative_luminance("#FfFfFf").unwrap());
    }

    #[test]
    fn garbage_colors_are_rejected() {
        assert!(relative_luminance("").is_err());
        assert!(relative_luminance("#12345").is_err());
        assert!(relative_luminance("blurple").is_err());
        assert!(contrast_ratio("#000", "not-a-color").is_err());
    }
}
