//! Generator configuration.
//!
//! Resource limits protect the parser from hostile or accidentally huge
//! input; they are checked before a single line is interpreted. The name
//! alias table lets a caller map resolved theme names onto publication names
//! without baking string comparisons into the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hard ceiling on theme file size. Real Ghostty schemes are a few KB.
pub const MAX_THEME_FILE_BYTES: u64 = 512 * 1024;

/// Hard ceiling on theme file line count.
pub const MAX_THEME_FILE_LINES: usize = 4096;

/// Longest key the parser will consider before skipping the line.
pub const MAX_KEY_BYTES: usize = 64;

/// Longest value the parser will consider before skipping the line.
pub const MAX_VALUE_BYTES: usize = 128;

/// Resource limits enforced before parsing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct InputLimits {
    pub max_file_bytes: u64,
    pub max_line_count: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_THEME_FILE_BYTES,
            max_line_count: MAX_THEME_FILE_LINES,
        }
    }
}

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorOptions {
    /// Explicit theme name; wins over anything derived from the file.
    pub explicit_name: Option<String>,

    /// Resolved-name → publication-name overrides, applied after
    /// kebab-casing. Keyed by the resolved name.
    pub name_aliases: BTreeMap<String, String>,

    /// Parser resource limits.
    pub limits: InputLimits,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        let mut name_aliases = BTreeMap::new();
        // The flagship scheme ships under its project name.
        name_aliases.insert("root".to_string(), "eidolon-root".to_string());
        Self {
            explicit_name: None,
            name_aliases,
            limits: InputLimits::default(),
        }
    }
}

impl GeneratorOptions {
    /// Options with an explicit theme name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            explicit_name: Some(name.into()),
            ..Self::default()
        }
    }
}
