//! Accent selection.
//!
//! The most saturated of the red/blue/magenta slots becomes the editor's
//! dominant accent (cursor, focus, buttons). A secondary accent is chosen
//! from the green/yellow/cyan slots only when one sits on the complementary
//! hue arc. Plenty of palettes have no good complement, and forcing one
//! looks worse than going without.

use crate::color;
use crate::defaults;
use crate::derive::opacity::OpacitySemantics;
use crate::model::GhosttyColorSet;

/// Slots considered for the primary accent: red, blue, magenta.
const PRIMARY_CANDIDATES: [usize; 3] = [1, 4, 5];

/// Slots considered for the secondary accent: green, yellow, cyan.
const SECONDARY_CANDIDATES: [usize; 3] = [2, 3, 6];

/// One accent and its fixed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accent {
    pub base: String,
    pub light: String,
    pub dark: String,
    pub muted: String,
}

/// The theme's accent colors. `secondary` is intentionally optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentSystem {
    pub primary: Accent,
    pub secondary: Option<Accent>,
}

/// Highest-saturation candidate among {color1, color4, color5}.
///
/// Ties keep the earliest candidate, so the choice is stable.
pub fn select_primary_accent(set: &GhosttyColorSet) -> String {
    let mut best = defaults::palette_slot(set, PRIMARY_CANDIDATES[0]);
    let mut best_sat = saturation(&best);
    for &slot in &PRIMARY_CANDIDATES[1..] {
        let candidate = defaults::palette_slot(set, slot);
        let sat = saturation(&candidate);
        if sat > best_sat {
            best = candidate;
            best_sat = sat;
        }
    }
    best
}

/// First candidate among {color2, color3, color6} whose hue lies in the
/// open complementary arc `(primary + 120°, primary + 240°)` mod 360.
pub fn select_secondary_accent(set: &GhosttyColorSet, primary_hue: f64) -> Option<String> {
    SECONDARY_CANDIDATES.iter().find_map(|&slot| {
        let candidate = defaults::palette_slot(set, slot);
        let hue = color::hex_to_hsl(&candidate)?.h;
        let delta = (hue - primary_hue).rem_euclid(360.0);
        (delta > 120.0 && delta < 240.0).then_some(candidate)
    })
}

/// Derive the fixed variants for one accent base.
pub fn create_accent(base: &str) -> Accent {
    Accent {
        light: color::adjust_lightness(base, 0.15),
        dark: color::adjust_lightness(base, -0.15),
        muted: color::adjust_saturation(base, -0.28),
        base: base.to_string(),
    }
}

/// Select and derive the full accent system for a color set.
pub fn create_accent_system(set: &GhosttyColorSet) -> AccentSystem {
    let primary_base = select_primary_accent(set);
    let primary_hue = color::hex_to_hsl(&primary_base).map_or(0.0, |hsl| hsl.h);
    let secondary = select_secondary_accent(set, primary_hue).map(|hex| create_accent(&hex));
    AccentSystem {
        primary: create_accent(&primary_base),
        secondary,
    }
}

/// Fixed accent-carrying workbench keys.
///
/// Applied on top of the base map, so these entries win. Secondary keys are
/// only emitted when a secondary accent exists; the base map already gives
/// them non-accent values.
pub fn apply_accent_system(system: &AccentSystem) -> Vec<(&'static str, String)> {
    let p = &system.primary;
    let mut entries = vec![
        ("focusBorder", p.base.clone()),
        ("editorCursor.foreground", p.base.clone()),
        (
            "editor.selectionBackground",
            color::with_opacity(&p.base, OpacitySemantics::SELECTION),
        ),
        (
            "editor.selectionHighlightBackground",
            color::with_opacity(&p.base, OpacitySemantics::HIGHLIGHT),
        ),
        (
            "selection.background",
            color::with_opacity(&p.base, OpacitySemantics::SELECTION),
        ),
        ("button.background", p.base.clone()),
        ("button.hoverBackground", p.light.clone()),
        ("badge.background", p.base.clone()),
        ("activityBarBadge.background", p.base.clone()),
        ("activityBar.activeBorder", p.base.clone()),
        ("progressBar.background", p.base.clone()),
        ("textLink.foreground", p.base.clone()),
        ("textLink.activeForeground", p.light.clone()),
        ("tab.activeBorderTop", p.base.clone()),
        ("panelTitle.activeBorder", p.base.clone()),
        ("statusBarItem.remoteBackground", p.dark.clone()),
        ("list.highlightForeground", p.base.clone()),
    ];

    if let Some(s) = &system.secondary {
        entries.push(("pickerGroup.foreground", s.base.clone()));
        entries.push(("editorLink.activeForeground", s.light.clone()));
        entries.push(("statusBarItem.prominentBackground", s.dark.clone()));
    }

    entries
}

fn saturation(hex: &str) -> f64 {
    color::hex_to_hsl(hex).map_or(0.0, |hsl| hsl.s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(slots: &[(u32, &str)]) -> GhosttyColorSet {
        let mut set = GhosttyColorSet::default();
        for (idx, hex) in slots {
            set.palette.insert(*idx, (*hex).to_string());
        }
        set
    }

    #[test]
    fn primary_is_the_most_saturated_candidate() {
        let set = set_with(&[
            (1, "#ff0000"), // saturation 1.0
            (4, "#8899aa"),
            (5, "#997799"),
        ]);
        assert_eq!(select_primary_accent(&set), "#ff0000");

        let set = set_with(&[(1, "#884444"), (4, "#0000ff"), (5, "#885588")]);
        assert_eq!(select_primary_accent(&set), "#0000ff");
    }

    #[test]
    fn secondary_requires_a_complementary_hue() {
        // Primary red (hue 0). Cyan at hue 180 falls inside (120, 240).
        let set = set_with(&[(1, "#ff0000"), (2, "#ff3300"), (3, "#ff6600"), (6, "#00ffff")]);
        let secondary = select_secondary_accent(&set, 0.0);
        assert_eq!(secondary.as_deref(), Some("#00ffff"));
    }

    #[test]
    fn secondary_is_none_without_a_complement() {
        // Everything clusters near the primary hue; nothing lands in the arc.
        let set = set_with(&[(1, "#ff0000"), (2, "#ff2200"), (3, "#ff5500"), (6, "#ff8800")]);
        assert!(select_secondary_accent(&set, 0.0).is_none());
    }

    #[test]
    fn arc_boundaries_are_exclusive() {
        // Exactly +120° must not qualify.
        let set = set_with(&[(1, "#ff0000"), (2, "#00ff00"), (3, "#ff0000"), (6, "#ff0000")]);
        assert!(select_secondary_accent(&set, 0.0).is_none());
    }

    #[test]
    fn accent_variants_move_in_the_right_directions() {
        let accent = create_accent("#cc6666");
        let base = color::hex_to_hsl("#cc6666").unwrap();
        assert!(color::hex_to_hsl(&accent.light).unwrap().l > base.l);
        assert!(color::hex_to_hsl(&accent.dark).unwrap().l < base.l);
        assert!(color::hex_to_hsl(&accent.muted).unwrap().s < base.s);
        assert_eq!(accent.base, "#cc6666");
    }

    #[test]
    fn applied_system_covers_the_fixed_keys() {
        let system = create_accent_system(&set_with(&[(1, "#ff0000"), (6, "#00ffff")]));
        let entries = apply_accent_system(&system);
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"focusBorder"));
        assert!(keys.contains(&"editor.selectionBackground"));
        assert!(keys.contains(&"button.background"));
        assert!(entries.len() >= 15);
    }

    #[test]
    fn selection_background_uses_the_selection_opacity() {
        let system = create_accent_system(&set_with(&[(1, "#ff0000")]));
        let entries = apply_accent_system(&system);
        let (_, selection) = entries
            .iter()
            .find(|(k, _)| *k == "editor.selectionBackground")
            .unwrap();
        assert_eq!(selection, "#ff000040");
    }
}
