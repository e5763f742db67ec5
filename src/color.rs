//! Hex/RGB/HSL color math.
//!
//! Every function here is pure, stateless, and total over valid hex input;
//! transforms handed a string they cannot parse return it unchanged. All
//! downstream derivation composes these functions, so reproducibility of
//! generated themes rests on this module staying deterministic.
//!
//! Hex strings are `#rgb` or `#rrggbb`; 3-digit forms expand by digit
//! duplication. Emitted hex is always 6-digit lowercase.

/// An sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL representation: hue in degrees `[0, 360)`, saturation and lightness
/// in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse `#rgb`, `#rrggbb`, or the same without `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut expanded = String::with_capacity(6);
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            parse_rrggbb(&expanded)
        }
        6 => parse_rrggbb(digits),
        _ => None,
    }
}

fn parse_rrggbb(digits: &str) -> Option<Rgb> {
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Format as 6-digit lowercase hex.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s,
        l,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: channel(hue_to_channel(p, q, h)),
        b: channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Nearest-integer channel rounding, clamped to `[0, 255]`.
fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Linear interpolation of a single channel.
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let t = t.clamp(0.0, 1.0);
    (f64::from(a) * (1.0 - t) + f64::from(b) * t).round() as u8
}

/// RGB linear interpolation toward white by `f` in `[0, 1]`.
pub fn lighten(hex: &str, f: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    rgb_to_hex(Rgb {
        r: lerp_channel(rgb.r, 255, f),
        g: lerp_channel(rgb.g, 255, f),
        b: lerp_channel(rgb.b, 255, f),
    })
}

/// RGB linear interpolation toward black by `f` in `[0, 1]`.
pub fn darken(hex: &str, f: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    rgb_to_hex(Rgb {
        r: lerp_channel(rgb.r, 0, f),
        g: lerp_channel(rgb.g, 0, f),
        b: lerp_channel(rgb.b, 0, f),
    })
}

/// RGB linear interpolation from `a` to `b` by `ratio`.
pub fn blend_colors(a: &str, b: &str, ratio: f64) -> String {
    let (Some(ca), Some(cb)) = (hex_to_rgb(a), hex_to_rgb(b)) else {
        return a.to_string();
    };
    rgb_to_hex(Rgb {
        r: lerp_channel(ca.r, cb.r, ratio),
        g: lerp_channel(ca.g, cb.g, ratio),
        b: lerp_channel(ca.b, cb.b, ratio),
    })
}

/// Shift lightness in HSL space, clamped to `[0, 1]`.
pub fn adjust_lightness(hex: &str, delta: f64) -> String {
    let Some(mut hsl) = hex_to_hsl(hex) else {
        return hex.to_string();
    };
    hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
    hsl_to_hex(hsl)
}

/// Shift saturation in HSL space, clamped to `[0, 1]`.
pub fn adjust_saturation(hex: &str, delta: f64) -> String {
    let Some(mut hsl) = hex_to_hsl(hex) else {
        return hex.to_string();
    };
    hsl.s = (hsl.s + delta).clamp(0.0, 1.0);
    hsl_to_hex(hsl)
}

/// Rotate hue by `degrees`; wraps mod 360.
pub fn adjust_hue(hex: &str, degrees: f64) -> String {
    let Some(mut hsl) = hex_to_hsl(hex) else {
        return hex.to_string();
    };
    hsl.h = (hsl.h + degrees).rem_euclid(360.0);
    hsl_to_hex(hsl)
}

/// Append a 2-digit lowercase alpha suffix: `round(opacity * 255)`.
///
/// The base color is re-emitted in canonical 6-digit form so 3-digit inputs
/// produce a well-formed 8-digit result.
pub fn with_opacity(hex: &str, opacity: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{}{:02x}", rgb_to_hex(rgb), alpha)
}

/// WCAG 2.1 relative luminance of a color, in `[0, 1]`.
pub fn relative_luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        return 0.0;
    };
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// Pick black or white text for a background, whichever contrasts more.
pub fn contrast_text(background: &str) -> &'static str {
    let lum = relative_luminance(background);
    let white_contrast = 1.05 / (lum + 0.05);
    let black_contrast = (lum + 0.05) / 0.05;
    if white_contrast >= black_contrast {
        "#ffffff"
    } else {
        "#000000"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_round_trip_is_exact() {
        for hex in ["#000000", "#ffffff", "#1a2b3c", "#ff0000", "#c5c8c6"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb), hex);
        }
    }

    #[test]
    fn three_digit_expands_by_duplication() {
        assert_eq!(hex_to_rgb("#f0c"), hex_to_rgb("#ff00cc"));
        assert_eq!(hex_to_rgb("abc"), hex_to_rgb("#aabbcc"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(hex_to_rgb("#12345").is_none());
        assert!(hex_to_rgb("#zzzzzz").is_none());
        assert!(hex_to_rgb("").is_none());
        assert!(hex_to_rgb("#").is_none());
    }

    #[test]
    fn hsl_round_trip_stays_close() {
        // HSL conversion rounds channels to the nearest integer, so the
        // round trip may drift by at most one step per channel.
        for hex in ["#cc6666", "#81a2be", "#b5bd68", "#0a0a0a"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!(i16::from(rgb.r).abs_diff(i16::from(back.r)) <= 1);
            assert!(i16::from(rgb.g).abs_diff(i16::from(back.g)) <= 1);
            assert!(i16::from(rgb.b).abs_diff(i16::from(back.b)) <= 1);
        }
    }

    #[test]
    fn primary_hues_land_on_sector_angles() {
        assert_eq!(rgb_to_hsl(hex_to_rgb("#ff0000").unwrap()).h, 0.0);
        assert_eq!(rgb_to_hsl(hex_to_rgb("#00ff00").unwrap()).h, 120.0);
        assert_eq!(rgb_to_hsl(hex_to_rgb("#0000ff").unwrap()).h, 240.0);
    }

    #[test]
    fn lighten_darken_endpoints() {
        assert_eq!(lighten("#345678", 0.0), "#345678");
        assert_eq!(lighten("#345678", 1.0), "#ffffff");
        assert_eq!(darken("#345678", 1.0), "#000000");
        assert_eq!(darken("#345678", 0.0), "#345678");
    }

    #[test]
    fn blend_midpoint() {
        assert_eq!(blend_colors("#000000", "#c86432", 0.5), "#643219");
        assert_eq!(blend_colors("#102030", "#102030", 0.7), "#102030");
    }

    #[test]
    fn hue_rotation_wraps() {
        let rotated = adjust_hue("#ff0000", 360.0);
        assert_eq!(rotated, "#ff0000");
        let half = adjust_hue("#ff0000", -120.0);
        assert_eq!(hex_to_hsl(&half).unwrap().h, 240.0);
    }

    #[test]
    fn lightness_clamps() {
        assert_eq!(adjust_lightness("#808080", 1.0), "#ffffff");
        assert_eq!(adjust_lightness("#808080", -1.0), "#000000");
    }

    #[test]
    fn opacity_suffix_is_two_lowercase_digits() {
        assert_eq!(with_opacity("#ff0000", 0.25), "#ff000040");
        assert_eq!(with_opacity("#ff0000", 0.0), "#ff000000");
        assert_eq!(with_opacity("#ff0000", 1.0), "#ff0000ff");
        // 3-digit input normalizes before the suffix goes on.
        assert_eq!(with_opacity("#f00", 1.0), "#ff0000ff");
    }

    #[test]
    fn transforms_pass_invalid_input_through() {
        assert_eq!(lighten("not-a-color", 0.5), "not-a-color");
        assert_eq!(with_opacity("nope", 0.5), "nope");
        assert_eq!(adjust_hue("", 90.0), "");
    }

    #[test]
    fn contrast_text_picks_the_readable_side() {
        assert_eq!(contrast_text("#000000"), "#ffffff");
        assert_eq!(contrast_text("#ffffff"), "#000000");
        assert_eq!(contrast_text("#1d1f21"), "#ffffff");
        assert_eq!(contrast_text("#f0c674"), "#000000");
    }
}
