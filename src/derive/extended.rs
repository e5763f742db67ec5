//! Mechanical palette extension.
//!
//! Derives the named variant and special-purpose colors the mapper and
//! token rules draw on. Every derived color is one named transform of a
//! palette input, never a foreign literal, so the source scheme's character
//! survives into the generated theme.

use crate::color;
use crate::defaults;
use crate::model::GhosttyColorSet;

/// Lightness shift for the light/dark variants.
const VARIANT_LIGHTNESS: f64 = 0.15;

/// Saturation drop for the muted variants.
const VARIANT_MUTE: f64 = -0.30;

/// One primary hue and its mechanical variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueVariants {
    pub base: String,
    pub light: String,
    pub dark: String,
    pub muted: String,
}

impl HueVariants {
    fn derive(base: String) -> Self {
        Self {
            light: color::adjust_lightness(&base, VARIANT_LIGHTNESS),
            dark: color::adjust_lightness(&base, -VARIANT_LIGHTNESS),
            muted: color::adjust_saturation(&base, VARIANT_MUTE),
            base,
        }
    }
}

/// The six primary hues, their variants, the foreground, and the
/// special-purpose colors.
///
/// Each special-purpose field is a fixed recipe over palette inputs; the
/// recipe is named by the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedPalette {
    pub red: HueVariants,
    pub green: HueVariants,
    pub yellow: HueVariants,
    pub blue: HueVariants,
    pub magenta: HueVariants,
    pub cyan: HueVariants,
    pub foreground: String,

    /// blend(red, yellow, 0.6)
    pub orange_warm: String,
    /// blend(red, yellow, 0.4)
    pub orange_soft: String,
    /// lighten(magenta, 0.15)
    pub pink: String,
    /// desaturate(blue, 0.25)
    pub type_annotation: String,
    /// hue_rotate(green, -30°)
    pub lifetime: String,
    /// blend(yellow, cyan, 0.5)
    pub attribute: String,
    /// hue_rotate(magenta, 15°)
    pub macro_call: String,
    /// desaturate(cyan, 0.20)
    pub namespace: String,
    /// blend(cyan, blue, 0.5)
    pub enum_member: String,
    /// blend(green, foreground, 0.5)
    pub doc_comment: String,
    /// hue_rotate(cyan, 20°)
    pub escape_sequence: String,
    /// blend(red, magenta, 0.5)
    pub regex_literal: String,
    /// lighten(yellow, 0.10)
    pub decorator: String,
    /// saturate(blue, 0.15)
    pub link: String,
    /// lighten(green, 0.05)
    pub diff_added: String,
    /// lighten(red, 0.05)
    pub diff_removed: String,
    /// lighten(blue, 0.05)
    pub diff_modified: String,
}

/// Derive the extended palette from the 6 primary hue slots.
pub fn extend_palette(set: &GhosttyColorSet) -> ExtendedPalette {
    let red = defaults::palette_slot(set, 1);
    let green = defaults::palette_slot(set, 2);
    let yellow = defaults::palette_slot(set, 3);
    let blue = defaults::palette_slot(set, 4);
    let magenta = defaults::palette_slot(set, 5);
    let cyan = defaults::palette_slot(set, 6);
    let foreground = defaults::foreground(set);

    ExtendedPalette {
        orange_warm: color::blend_colors(&red, &yellow, 0.6),
        orange_soft: color::blend_colors(&red, &yellow, 0.4),
        pink: color::lighten(&magenta, 0.15),
        type_annotation: color::adjust_saturation(&blue, -0.25),
        lifetime: color::adjust_hue(&green, -30.0),
        attribute: color::blend_colors(&yellow, &cyan, 0.5),
        macro_call: color::adjust_hue(&magenta, 15.0),
        namespace: color::adjust_saturation(&cyan, -0.20),
        enum_member: color::blend_colors(&cyan, &blue, 0.5),
        doc_comment: color::blend_colors(&green, &foreground, 0.5),
        escape_sequence: color::adjust_hue(&cyan, 20.0),
        regex_literal: color::blend_colors(&red, &magenta, 0.5),
        decorator: color::lighten(&yellow, 0.10),
        link: color::adjust_saturation(&blue, 0.15),
        diff_added: color::lighten(&green, 0.05),
        diff_removed: color::lighten(&red, 0.05),
        diff_modified: color::lighten(&blue, 0.05),
        red: HueVariants::derive(red),
        green: HueVariants::derive(green),
        yellow: HueVariants::derive(yellow),
        blue: HueVariants::derive(blue),
        magenta: HueVariants::derive(magenta),
        cyan: HueVariants::derive(cyan),
        foreground,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hex_to_hsl, hex_to_rgb};

    fn sample_set() -> GhosttyColorSet {
        let mut set = GhosttyColorSet {
            foreground: Some("#c5c8c6".into()),
            ..Default::default()
        };
        for (idx, hex) in [
            (1, "#cc6666"),
            (2, "#b5bd68"),
            (3, "#f0c674"),
            (4, "#81a2be"),
            (5, "#b294bb"),
            (6, "#8abeb7"),
        ] {
            set.palette.insert(idx, hex.to_string());
        }
        set
    }

    #[test]
    fn every_derived_color_is_valid_hex() {
        let ext = extend_palette(&sample_set());
        let all = [
            &ext.red.base,
            &ext.red.light,
            &ext.red.dark,
            &ext.red.muted,
            &ext.green.base,
            &ext.green.light,
            &ext.green.dark,
            &ext.green.muted,
            &ext.yellow.base,
            &ext.yellow.light,
            &ext.yellow.dark,
            &ext.yellow.muted,
            &ext.blue.base,
            &ext.blue.light,
            &ext.blue.dark,
            &ext.blue.muted,
            &ext.magenta.base,
            &ext.magenta.light,
            &ext.magenta.dark,
            &ext.magenta.muted,
            &ext.cyan.base,
            &ext.cyan.light,
            &ext.cyan.dark,
            &ext.cyan.muted,
            &ext.foreground,
            &ext.orange_warm,
            &ext.orange_soft,
            &ext.pink,
            &ext.type_annotation,
            &ext.lifetime,
            &ext.attribute,
            &ext.macro_call,
            &ext.namespace,
            &ext.enum_member,
            &ext.doc_comment,
            &ext.escape_sequence,
            &ext.regex_literal,
            &ext.decorator,
            &ext.link,
            &ext.diff_added,
            &ext.diff_removed,
            &ext.diff_modified,
        ];
        for hex in all {
            assert!(hex_to_rgb(hex).is_some(), "invalid derived color {hex}");
        }
    }

    #[test]
    fn variants_move_as_named() {
        let ext = extend_palette(&sample_set());
        let base = hex_to_hsl(&ext.red.base).unwrap();
        assert!(hex_to_hsl(&ext.red.light).unwrap().l > base.l);
        assert!(hex_to_hsl(&ext.red.dark).unwrap().l < base.l);
        assert!(hex_to_hsl(&ext.red.muted).unwrap().s < base.s);
    }

    #[test]
    fn orange_sits_between_red_and_yellow() {
        let ext = extend_palette(&sample_set());
        let red = hex_to_rgb(&ext.red.base).unwrap();
        let yellow = hex_to_rgb(&ext.yellow.base).unwrap();
        let orange = hex_to_rgb(&ext.orange_warm).unwrap();
        let (lo, hi) = (red.g.min(yellow.g), red.g.max(yellow.g));
        assert!(orange.g >= lo && orange.g <= hi);
    }

    #[test]
    fn lifetime_rotates_off_the_green_hue() {
        let ext = extend_palette(&sample_set());
        let green = hex_to_hsl(&ext.green.base).unwrap();
        let lifetime = hex_to_hsl(&ext.lifetime).unwrap();
        let delta = (green.h - lifetime.h).rem_euclid(360.0);
        assert!((delta - 30.0).abs() < 2.0, "rotation was {delta}");
    }

    #[test]
    fn falls_back_to_default_slots_when_missing() {
        let ext = extend_palette(&GhosttyColorSet::default());
        assert_eq!(ext.red.base, crate::defaults::DEFAULT_PALETTE[1]);
        assert_eq!(ext.foreground, crate::defaults::DEFAULT_FOREGROUND);
    }
}
