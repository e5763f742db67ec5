//! Surface-elevation hierarchy.
//!
//! Eight layered shades derived from one base color convey panel depth
//! without hard borders. Steps are logarithmically spaced: near-base
//! levels stay subtle while the far ends differentiate clearly.

use crate::color;

/// Theme polarity: which direction "receding" surfaces move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Dark,
    Light,
}

/// The 8-level elevation scale. `canvas` is the base color unchanged;
/// `void` is the furthest-receded surface, `elevated` the most raised.
///
/// For dark polarity, lightness is monotonically non-decreasing from
/// `void` through `elevated`; light polarity inverts the directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundHierarchy {
    pub void: String,
    pub shadow: String,
    pub depth: String,
    pub surface: String,
    pub canvas: String,
    pub overlay: String,
    pub interactive: String,
    pub elevated: String,
}

impl BackgroundHierarchy {
    /// Levels in elevation order, lowest first.
    pub fn levels(&self) -> [(&'static str, &str); 8] {
        [
            ("void", &self.void),
            ("shadow", &self.shadow),
            ("depth", &self.depth),
            ("surface", &self.surface),
            ("canvas", &self.canvas),
            ("overlay", &self.overlay),
            ("interactive", &self.interactive),
            ("elevated", &self.elevated),
        ]
    }
}

/// Log-spaced step size for level `i`.
fn step(i: usize) -> f64 {
    ((i + 2) as f64).ln() * 0.04
}

/// Build the 8-level hierarchy around `base`.
///
/// `void`..`surface` recede from the base (steps 3..0), `canvas` is the
/// base itself, `overlay`..`elevated` rise from it (steps 4..6).
pub fn create_hierarchy(base: &str, polarity: Polarity) -> BackgroundHierarchy {
    let (recede, rise): (fn(&str, f64) -> String, fn(&str, f64) -> String) = match polarity {
        Polarity::Dark => (color::darken, color::lighten),
        Polarity::Light => (color::lighten, color::darken),
    };

    BackgroundHierarchy {
        void: recede(base, step(3)),
        shadow: recede(base, step(2)),
        depth: recede(base, step(1)),
        surface: recede(base, step(0)),
        canvas: base.to_string(),
        overlay: rise(base, step(4)),
        interactive: rise(base, step(5)),
        elevated: rise(base, step(6)),
    }
}

/// Fixed mapping of the 8 levels onto concrete surface keys.
///
/// This mapping is shared across all generated themes; changing it changes
/// the perceived depth model everywhere, so treat it as frozen.
pub fn map_to_ui_elements(h: &BackgroundHierarchy) -> Vec<(&'static str, String)> {
    vec![
        ("editor.background", h.canvas.clone()),
        ("editorGutter.background", h.canvas.clone()),
        ("panel.background", h.canvas.clone()),
        ("sideBar.background", h.surface.clone()),
        ("sideBarSectionHeader.background", h.depth.clone()),
        ("activityBar.background", h.depth.clone()),
        ("statusBar.background", h.depth.clone()),
        ("titleBar.activeBackground", h.shadow.clone()),
        ("tab.inactiveBackground", h.shadow.clone()),
        ("editorGroupHeader.tabsBackground", h.void.clone()),
        ("editorWidget.background", h.overlay.clone()),
        ("editorSuggestWidget.background", h.overlay.clone()),
        ("editorHoverWidget.background", h.overlay.clone()),
        ("input.background", h.interactive.clone()),
        ("dropdown.background", h.interactive.clone()),
        ("quickInput.background", h.elevated.clone()),
        ("notifications.background", h.elevated.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_hsl;

    #[test]
    fn dark_hierarchy_lightness_is_monotonic() {
        let h = create_hierarchy("#1d1f21", Polarity::Dark);
        let lightness: Vec<f64> = h
            .levels()
            .iter()
            .map(|(_, hex)| hex_to_hsl(hex).unwrap().l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(
                pair[0] <= pair[1] + 1e-9,
                "lightness not monotonic: {lightness:?}"
            );
        }
    }

    #[test]
    fn light_hierarchy_inverts() {
        let h = create_hierarchy("#fafafa", Polarity::Light);
        let lightness: Vec<f64> = h
            .levels()
            .iter()
            .map(|(_, hex)| hex_to_hsl(hex).unwrap().l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] >= pair[1] - 1e-9);
        }
    }

    #[test]
    fn canvas_is_the_base_unchanged() {
        let h = create_hierarchy("#282a36", Polarity::Dark);
        assert_eq!(h.canvas, "#282a36");
    }

    #[test]
    fn steps_grow_logarithmically() {
        assert!(step(0) < step(1));
        // Spacing shrinks as i grows.
        assert!(step(1) - step(0) > step(6) - step(5));
    }

    #[test]
    fn ui_mapping_covers_core_surfaces() {
        let h = create_hierarchy("#1d1f21", Polarity::Dark);
        let mapping = map_to_ui_elements(&h);
        assert!(mapping.len() >= 15);
        let keys: Vec<_> = mapping.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"editor.background"));
        assert!(keys.contains(&"sideBar.background"));
        assert!(keys.contains(&"input.background"));
    }
}
