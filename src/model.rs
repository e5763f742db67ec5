//! Data model for parsed theme files.
//!
//! A [`GhosttyColorSet`] is created once by the parser and never mutated;
//! every derivation stage reads it and returns freshly allocated results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::defaults;
use crate::error::ParseWarning;

/// Validated colors extracted from a Ghostty scheme.
///
/// Every stored value is validated, lowercased `#rgb`/`#rrggbb` hex; unknown
/// keys are dropped with a warning and never land here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhosttyColorSet {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor: Option<String>,
    pub cursor_text: Option<String>,
    pub selection_background: Option<String>,
    pub selection_foreground: Option<String>,
    /// Indexed palette slots (`color0`..). Ghostty accepts indices up to
    /// 255; derivation consumes 0-15.
    pub palette: BTreeMap<u32, String>,
}

impl GhosttyColorSet {
    /// Number of colors stored (semantic slots plus palette entries).
    pub fn len(&self) -> usize {
        let semantic = [
            &self.background,
            &self.foreground,
            &self.cursor,
            &self.cursor_text,
            &self.selection_background,
            &self.selection_foreground,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count();
        semantic + self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored palette slot, if the file defined it.
    pub fn slot(&self, index: u32) -> Option<&str> {
        self.palette.get(&index).map(String::as_str)
    }
}

/// Facts about the source file, captured at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub file_name: String,
    pub byte_size: u64,
    pub line_count: usize,
    pub modified: Option<DateTime<Utc>>,
}

/// Outcome of per-line validation: the warning list and whether the file
/// parsed clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStatus {
    pub warnings: Vec<ParseWarning>,
    pub is_valid: bool,
}

impl ValidationStatus {
    pub fn from_warnings(warnings: Vec<ParseWarning>) -> Self {
        Self {
            is_valid: warnings.is_empty(),
            warnings,
        }
    }
}

/// A parsed theme file: colors, source metadata, validation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedThemeFile {
    pub colors: GhosttyColorSet,
    pub metadata: FileMetadata,
    pub validation: ValidationStatus,
}

/// Read-only preview projection: one source color, where it ends up.
///
/// Consumed by preview UIs; never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRole {
    pub name: &'static str,
    pub hex: String,
    pub used_for: Vec<&'static str>,
}

/// Project the roles each source color plays in the generated theme.
pub fn color_roles(set: &GhosttyColorSet) -> Vec<ColorRole> {
    vec![
        ColorRole {
            name: "color0",
            hex: defaults::palette_slot(set, 0),
            used_for: vec!["editor background", "panel background", "terminal black"],
        },
        ColorRole {
            name: "background",
            hex: defaults::background(set),
            used_for: vec!["activity bar", "side bar", "status bar", "title bar"],
        },
        ColorRole {
            name: "foreground",
            hex: defaults::foreground(set),
            used_for: vec!["editor text", "variables", "UI foreground"],
        },
        ColorRole {
            name: "color1",
            hex: defaults::palette_slot(set, 1),
            used_for: vec!["strings", "errors", "invalid code"],
        },
        ColorRole {
            name: "color2",
            hex: defaults::palette_slot(set, 2),
            used_for: vec!["insertions", "success indicators"],
        },
        ColorRole {
            name: "color3",
            hex: defaults::palette_slot(set, 3),
            used_for: vec!["warnings", "modified markers"],
        },
        ColorRole {
            name: "color4",
            hex: defaults::palette_slot(set, 4),
            used_for: vec!["info indicators", "accent candidate"],
        },
        ColorRole {
            name: "color5",
            hex: defaults::palette_slot(set, 5),
            used_for: vec!["classes", "accent candidate"],
        },
        ColorRole {
            name: "color6",
            hex: defaults::palette_slot(set, 6),
            used_for: vec!["operators", "punctuation"],
        },
        ColorRole {
            name: "color8",
            hex: defaults::palette_slot(set, 8),
            used_for: vec!["comments", "disabled text"],
        },
        ColorRole {
            name: "cursor",
            hex: defaults::cursor(set),
            used_for: vec!["editor cursor", "terminal cursor"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_semantic_and_palette() {
        let mut set = GhosttyColorSet {
            background: Some("#111111".into()),
            foreground: Some("#eeeeee".into()),
            ..Default::default()
        };
        set.palette.insert(0, "#000000".into());
        set.palette.insert(1, "#ff0000".into());
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
    }

    #[test]
    fn empty_set_reports_empty() {
        assert!(GhosttyColorSet::default().is_empty());
    }

    #[test]
    fn validation_status_tracks_cleanliness() {
        assert!(ValidationStatus::from_warnings(Vec::new()).is_valid);
        let dirty = ValidationStatus::from_warnings(vec![ParseWarning::Malformed { line: 3 }]);
        assert!(!dirty.is_valid);
        assert_eq!(dirty.warnings.len(), 1);
    }

    #[test]
    fn color_roles_reflect_stored_colors() {
        let mut set = GhosttyColorSet::default();
        set.palette.insert(0, "#0a0a0a".into());
        let roles = color_roles(&set);
        let editor = roles.iter().find(|r| r.name == "color0").unwrap();
        assert_eq!(editor.hex, "#0a0a0a");
        assert!(editor.used_for.contains(&"editor background"));
    }
}
