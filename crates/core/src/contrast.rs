use std::fmt;

use crate::color::{ColorValue, Space};

/// WCAG 2.1 "AA normal text" pass/fail line.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// The binary foreground choice for text over a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    pub fn as_str(&self) -> &'static str {
        match self {
            Foreground::Black => "black",
            Foreground::White => "white",
        }
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// WCAG 2.1 relative luminance over linearized sRGB.
///
/// Out-of-gamut colors are clamped to the displayable range for scoring
/// only; what a reader sees is the clamped color anyway.
pub fn relative_luminance(color: &ColorValue) -> f64 {
    let [r, g, b] = color.to(Space::Srgb).channels();
    let lin = |c: f64| {
        let c = (c / 255.0).clamp(0.0, 1.0);
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// WCAG 2.1 contrast ratio, in [1, 21].
pub fn contrast_ratio(a: &ColorValue, b: &ColorValue) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick the legible text color for a background: black when it clears the
/// AA threshold against black, white otherwise.
pub fn foreground_for(background: &ColorValue) -> Foreground {
    let black = ColorValue::srgb(0.0, 0.0, 0.0);
    if contrast_ratio(background, &black) >= AA_NORMAL_TEXT {
        Foreground::Black
    } else {
        Foreground::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn white_on_black_is_maximal() {
        let white = ColorValue::parse("white").unwrap();
        let black = ColorValue::parse("black").unwrap();
        assert!((contrast_ratio(&white, &black) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colors_score_one() {
        for literal in ["#ff0000", "#123456", "white"] {
            let color = ColorValue::parse(literal).unwrap();
            assert_eq!(contrast_ratio(&color, &color), 1.0);
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = ColorValue::parse("#8b5cf6").unwrap();
        let b = ColorValue::parse("#f5f5dc").unwrap();
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn foreground_picks_black_on_light_backgrounds() {
        let white = ColorValue::parse("white").unwrap();
        assert_eq!(foreground_for(&white), Foreground::Black);
    }

    #[test]
    fn foreground_picks_white_on_dark_backgrounds() {
        let black = ColorValue::parse("black").unwrap();
        assert_eq!(foreground_for(&black), Foreground::White);
        let navy = ColorValue::parse("navy").unwrap();
        assert_eq!(foreground_for(&navy), Foreground::White);
    }
}
