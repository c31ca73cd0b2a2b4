//! Window-shell colors.
//!
//! The full palette lives in the custom properties of
//! [`super::GLOBAL_STYLES`]; only what the native window needs is here.

use starfolio_core::Theme;

// === PAGE BACKGROUNDS (top of gradient, as RGB) ===
pub const NIGHT_TOP: (u8, u8, u8) = (3, 7, 18);
pub const DAY_TOP: (u8, u8, u8) = (249, 250, 251);

/// Webview background before the first paint, per theme. Matches the top of
/// the page gradient so a dark launch does not flash white.
pub fn window_background(theme: Theme) -> (u8, u8, u8, u8) {
    let (r, g, b) = match theme {
        Theme::Dark => NIGHT_TOP,
        Theme::Light => DAY_TOP,
    };
    (r, g, b, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_window_matches_the_night_gradient() {
        assert_eq!(window_background(Theme::Dark), (3, 7, 18, 255));
    }

    #[test]
    fn light_window_is_near_white() {
        let (r, g, b, a) = window_background(Theme::Light);
        assert!(r > 240 && g > 240 && b > 240);
        assert_eq!(a, 255);
    }
}
