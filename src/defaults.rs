//! The single source of fallback colors.
//!
//! Any palette slot or semantic color missing from a parsed scheme is
//! replaced from this table before it reaches a derivation stage. Keeping
//! the literals in one place stops the mapper, token rules, and palette
//! extender drifting apart.

use crate::model::GhosttyColorSet;

/// Fallback 16-slot ANSI palette (slots 0-7 normal, 8-15 bright).
pub const DEFAULT_PALETTE: [&str; 16] = [
    "#1d1f21", // 0 black
    "#cc6666", // 1 red
    "#b5bd68", // 2 green
    "#f0c674", // 3 yellow
    "#81a2be", // 4 blue
    "#b294bb", // 5 magenta
    "#8abeb7", // 6 cyan
    "#c5c8c6", // 7 white
    "#969896", // 8 bright black
    "#d54e53", // 9 bright red
    "#b9ca4a", // 10 bright green
    "#e7c547", // 11 bright yellow
    "#7aa6da", // 12 bright blue
    "#c397d8", // 13 bright magenta
    "#70c0b1", // 14 bright cyan
    "#ffffff", // 15 bright white
];

pub const DEFAULT_BACKGROUND: &str = "#1d1f21";
pub const DEFAULT_FOREGROUND: &str = "#c5c8c6";

/// Palette slot with fallback. Slots past 15 have no fallback and resolve
/// to slot 7; derivation only consumes 0-15.
pub fn palette_slot(set: &GhosttyColorSet, index: usize) -> String {
    if let Some(stored) = set.slot(index as u32) {
        return stored.to_string();
    }
    DEFAULT_PALETTE
        .get(index)
        .unwrap_or(&DEFAULT_PALETTE[7])
        .to_string()
}

/// The scheme's `background` key with fallback.
pub fn background(set: &GhosttyColorSet) -> String {
    set.background
        .clone()
        .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string())
}

/// The scheme's `foreground` key with fallback.
pub fn foreground(set: &GhosttyColorSet) -> String {
    set.foreground
        .clone()
        .unwrap_or_else(|| DEFAULT_FOREGROUND.to_string())
}

/// The cursor color, falling back to the foreground.
pub fn cursor(set: &GhosttyColorSet) -> String {
    set.cursor.clone().unwrap_or_else(|| foreground(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    #[test]
    fn every_fallback_is_valid_hex() {
        for hex in DEFAULT_PALETTE {
            assert!(hex_to_rgb(hex).is_some(), "bad fallback {hex}");
        }
        assert!(hex_to_rgb(DEFAULT_BACKGROUND).is_some());
        assert!(hex_to_rgb(DEFAULT_FOREGROUND).is_some());
    }

    #[test]
    fn stored_slot_wins_over_fallback() {
        let mut set = GhosttyColorSet::default();
        set.palette.insert(1, "#ff0000".to_string());
        assert_eq!(palette_slot(&set, 1), "#ff0000");
        assert_eq!(palette_slot(&set, 2), DEFAULT_PALETTE[2]);
    }

    #[test]
    fn cursor_falls_back_to_foreground() {
        let set = GhosttyColorSet {
            foreground: Some("#e0e0e0".to_string()),
            ..Default::default()
        };
        assert_eq!(cursor(&set), "#e0e0e0");
    }
}
