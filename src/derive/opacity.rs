//! Fixed opacity tables.
//!
//! One source of truth for transparency so "selection" carries the same
//! visual weight on every surface. [`OpacityLevels`] is the full scale;
//! [`OpacitySemantics`] binds purposes to entries of that scale. Both are
//! constants and never mutated.

use crate::color::{self, Rgb};

/// The 16 named opacity fractions, `0.00`-`0.75`.
pub struct OpacityLevels;

impl OpacityLevels {
    pub const TRANSPARENT: f64 = 0.00;
    pub const GHOST: f64 = 0.02;
    pub const FAINT: f64 = 0.03;
    pub const WHISPER: f64 = 0.04;
    pub const SUBTLE: f64 = 0.05;
    pub const LIGHT: f64 = 0.08;
    pub const SOFT: f64 = 0.10;
    pub const GENTLE: f64 = 0.12;
    pub const MILD: f64 = 0.15;
    pub const MODERATE: f64 = 0.20;
    pub const MEDIUM: f64 = 0.25;
    pub const NOTABLE: f64 = 0.30;
    pub const STRONG: f64 = 0.35;
    pub const BOLD: f64 = 0.40;
    pub const HEAVY: f64 = 0.50;
    pub const DENSE: f64 = 0.75;

    pub const ALL: [(&'static str, f64); 16] = [
        ("transparent", Self::TRANSPARENT),
        ("ghost", Self::GHOST),
        ("faint", Self::FAINT),
        ("whisper", Self::WHISPER),
        ("subtle", Self::SUBTLE),
        ("light", Self::LIGHT),
        ("soft", Self::SOFT),
        ("gentle", Self::GENTLE),
        ("mild", Self::MILD),
        ("moderate", Self::MODERATE),
        ("medium", Self::MEDIUM),
        ("notable", Self::NOTABLE),
        ("strong", Self::STRONG),
        ("bold", Self::BOLD),
        ("heavy", Self::HEAVY),
        ("dense", Self::DENSE),
    ];
}

/// Semantic purposes bound to entries of [`OpacityLevels`].
pub struct OpacitySemantics;

impl OpacitySemantics {
    pub const HOVER: f64 = OpacityLevels::SOFT;
    pub const FOCUS: f64 = OpacityLevels::MODERATE;
    pub const SELECTION: f64 = OpacityLevels::MEDIUM;
    pub const HIGHLIGHT: f64 = OpacityLevels::MILD;
    pub const FIND_MATCH: f64 = OpacityLevels::NOTABLE;
    pub const LINE_HIGHLIGHT: f64 = OpacityLevels::SUBTLE;
    pub const ERROR: f64 = OpacityLevels::MODERATE;
    pub const WARNING: f64 = OpacityLevels::MILD;
    pub const INFO: f64 = OpacityLevels::GENTLE;
    pub const SUCCESS: f64 = OpacityLevels::GENTLE;

    pub const ALL: [(&'static str, f64); 10] = [
        ("hover", Self::HOVER),
        ("focus", Self::FOCUS),
        ("selection", Self::SELECTION),
        ("highlight", Self::HIGHLIGHT),
        ("find-match", Self::FIND_MATCH),
        ("line-highlight", Self::LINE_HIGHLIGHT),
        ("error", Self::ERROR),
        ("warning", Self::WARNING),
        ("info", Self::INFO),
        ("success", Self::SUCCESS),
    ];
}

/// Two-digit lowercase hex for an opacity fraction.
pub fn to_hex(opacity: f64) -> String {
    format!("{:02x}", (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// True alpha compositing of `fg` over `bg`, producing a solid color.
///
/// For the cases that need an opaque result rather than a translucent
/// alpha suffix.
pub fn blend(fg: &str, bg: &str, opacity: f64) -> String {
    let (Some(f), Some(b)) = (color::hex_to_rgb(fg), color::hex_to_rgb(bg)) else {
        return bg.to_string();
    };
    let a = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f64::from(f) * a + f64::from(b) * (1.0 - a)).round() as u8;
    color::rgb_to_hex(Rgb {
        r: mix(f.r, b.r),
        g: mix(f.g, b.g),
        b: mix(f.b, b.b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_endpoints() {
        assert_eq!(to_hex(0.0), "00");
        assert_eq!(to_hex(1.0), "ff");
        assert_eq!(to_hex(0.25), "40");
        assert_eq!(to_hex(0.5), "80");
    }

    #[test]
    fn to_hex_is_always_two_lowercase_digits() {
        for i in 0..=100 {
            let s = to_hex(f64::from(i) / 100.0);
            assert_eq!(s.len(), 2);
            assert!(s.bytes().all(|b| b.is_ascii_hexdigit()));
            assert_eq!(s, s.to_lowercase());
        }
    }

    #[test]
    fn levels_are_sorted_and_bounded() {
        let values: Vec<f64> = OpacityLevels::ALL.iter().map(|(_, v)| *v).collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&0.75));
    }

    #[test]
    fn every_semantic_aliases_a_level() {
        for (name, value) in OpacitySemantics::ALL {
            assert!(
                OpacityLevels::ALL.iter().any(|(_, v)| v == &value),
                "{name} does not alias a level"
            );
        }
    }

    #[test]
    fn blend_composites_in_rgb() {
        assert_eq!(blend("#ffffff", "#000000", 0.5), "#808080");
        assert_eq!(blend("#ff0000", "#000000", 1.0), "#ff0000");
        assert_eq!(blend("#ff0000", "#000000", 0.0), "#000000");
    }
}
