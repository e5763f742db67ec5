//! Defensive parsing of Ghostty theme files.
//!
//! The input is untrusted, line-oriented text. Resource limits (byte size,
//! line count) are enforced before any line is interpreted; after that,
//! every line is classified exactly once into a [`LineClass`] and handled
//! from the tag. Per-line problems are recovered locally: the line is
//! skipped, a [`ParseWarning`] is recorded, and parsing continues. Only
//! unreadable or oversized files fail the whole parse.
//!
//! Recognized grammars:
//! - `palette = N=VALUE` assigns indexed palette slot `colorN`
//! - `KEY = VALUE` / `KEY: VALUE` assigns semantic keys (`background`,
//!   `foreground`, `cursor`, `cursor-color`, `cursor-text`,
//!   `selection-background`, `selection-foreground`, `_`/`-` spellings
//!   interchangeable) or `color\d+`
//!
//! `VALUE` accepts `#rrggbb`, `#rgb`, or bare 3/6 hex digits.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{InputLimits, MAX_KEY_BYTES, MAX_VALUE_BYTES};
use crate::error::{ParseWarning, ProcessingError, ThemeError, ValidationError};
use crate::model::{FileMetadata, GhosttyColorSet, ParsedThemeFile, ValidationStatus};

static PALETTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^palette\s*=\s*(\d+)\s*=\s*(.*)$").expect("valid regex"));

static KEY_VALUE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)\s*[=:]\s*(.*)$").expect("valid regex")
});

static INDEXED_COLOR_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^color(\d+)$").expect("valid regex"));

/// Semantic keys the parser stores, in their normalized (`_`) spelling.
const KNOWN_KEYS: [&str; 7] = [
    "background",
    "foreground",
    "cursor",
    "cursor_color",
    "cursor_text",
    "selection_background",
    "selection_foreground",
];

/// One line of input, classified before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `palette = N=VALUE`
    Palette { index: u32, value: String },
    /// A known semantic key or `colorN`, normalized to `_` spelling.
    Color { key: String, value: String },
    /// Syntactically a key/value pair, but not a key we store.
    Metadata { key: String, value: String },
    /// Nothing we recognize.
    Malformed,
}

/// Classify a single (non-blank, non-comment) line.
pub fn classify_line(line: &str) -> LineClass {
    if let Some(caps) = PALETTE_LINE.captures(line) {
        let Ok(index) = caps[1].parse::<u32>() else {
            return LineClass::Malformed;
        };
        return LineClass::Palette {
            index,
            value: caps[2].trim().to_string(),
        };
    }

    if let Some(caps) = KEY_VALUE_LINE.captures(line) {
        let raw_key = &caps[1];
        let value = caps[2].trim().to_string();
        let key = raw_key.to_ascii_lowercase().replace('-', "_");
        if key == "palette" {
            // A palette line that failed the `palette = N=VALUE` grammar.
            return LineClass::Malformed;
        }
        if KNOWN_KEYS.contains(&key.as_str()) || INDEXED_COLOR_KEY.is_match(&key) {
            return LineClass::Color { key, value };
        }
        return LineClass::Metadata {
            key: raw_key.to_string(),
            value,
        };
    }

    LineClass::Malformed
}

/// Sanitize a candidate color value: drop shell-ish metacharacters, trim,
/// and prefix `#` onto bare 3/6 hex digits. Idempotent.
pub fn sanitize_color_value(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, ';' | '<' | '>' | '"' | '\'' | '`'))
        .collect();
    let trimmed = stripped.trim();
    let bare_hex = matches!(trimmed.len(), 3 | 6)
        && trimmed.bytes().all(|b| b.is_ascii_hexdigit());
    if bare_hex {
        format!("#{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Validate and canonicalize a sanitized value to lowercase `#rgb`/`#rrggbb`.
pub fn normalize_hex(value: &str) -> Option<String> {
    let digits = value.strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(value.to_ascii_lowercase())
}

/// Parse a theme file from disk.
///
/// Fails only on: unreadable file, oversized file, oversized line count.
pub fn parse_theme_file(
    path: &Path,
    limits: &InputLimits,
) -> Result<ParsedThemeFile, ThemeError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath.into());
    }
    let path = absolutize(path)?;

    let stat = std::fs::metadata(&path).map_err(|source| ProcessingError::Stat {
        path: path.clone(),
        source,
    })?;
    if stat.len() > limits.max_file_bytes {
        return Err(ValidationError::FileTooLarge {
            path,
            size: stat.len(),
            limit: limits.max_file_bytes,
        }
        .into());
    }

    let text = std::fs::read_to_string(&path).map_err(|source| ProcessingError::Read {
        path: path.clone(),
        source,
    })?;

    let line_count = text.lines().count();
    if line_count > limits.max_line_count {
        return Err(ValidationError::TooManyLines {
            path,
            lines: line_count,
            limit: limits.max_line_count,
        }
        .into());
    }

    let (colors, warnings) = parse_source(&text);
    tracing::debug!(
        path = %path.display(),
        colors = colors.len(),
        warnings = warnings.len(),
        "parsed theme file"
    );

    let metadata = FileMetadata {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        byte_size: stat.len(),
        line_count,
        modified: stat.modified().ok().map(Into::into),
    };

    Ok(ParsedThemeFile {
        colors,
        metadata,
        validation: ValidationStatus::from_warnings(warnings),
    })
}

fn absolutize(path: &Path) -> Result<PathBuf, ThemeError> {
    std::path::absolute(path).map_err(|source| {
        ProcessingError::Stat {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Parse theme text that is already in memory. Limits do not apply here;
/// they gate the file read.
pub fn parse_source(text: &str) -> (GhosttyColorSet, Vec<ParseWarning>) {
    let mut colors = GhosttyColorSet::default();
    let mut warnings = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        match classify_line(line) {
            LineClass::Palette { index, value } => {
                store_color(
                    &mut colors,
                    &mut warnings,
                    line_no,
                    &format!("color{index}"),
                    &value,
                );
            }
            LineClass::Color { key, value } => {
                if value.len() > MAX_VALUE_BYTES {
                    warnings.push(ParseWarning::OversizedValue {
                        line: line_no,
                        key,
                        limit: MAX_VALUE_BYTES,
                    });
                    continue;
                }
                store_color(&mut colors, &mut warnings, line_no, &key, &value);
            }
            LineClass::Metadata { key, .. } => {
                if key.len() > MAX_KEY_BYTES {
                    warnings.push(ParseWarning::OversizedKey {
                        line: line_no,
                        limit: MAX_KEY_BYTES,
                    });
                } else {
                    tracing::debug!(line = line_no, key = %key, "ignoring unknown key");
                    warnings.push(ParseWarning::UnknownKey { line: line_no, key });
                }
            }
            LineClass::Malformed => {
                tracing::debug!(line = line_no, "ignoring unrecognized line");
                warnings.push(ParseWarning::Malformed { line: line_no });
            }
        }
    }

    (colors, warnings)
}

/// Sanitize, validate, and store one candidate color. An invalid value
/// produces a warning and skips the line; it never aborts the parse.
fn store_color(
    colors: &mut GhosttyColorSet,
    warnings: &mut Vec<ParseWarning>,
    line_no: usize,
    key: &str,
    raw_value: &str,
) {
    let sanitized = sanitize_color_value(raw_value);
    let Some(hex) = normalize_hex(&sanitized) else {
        tracing::warn!(line = line_no, key, value = raw_value, "invalid color value");
        warnings.push(ParseWarning::InvalidColorValue {
            line: line_no,
            key: key.to_string(),
            value: raw_value.to_string(),
        });
        return;
    };

    if let Some(caps) = INDEXED_COLOR_KEY.captures(key) {
        if let Ok(index) = caps[1].parse::<u32>() {
            colors.palette.insert(index, hex);
            return;
        }
    }

    match key {
        "background" => colors.background = Some(hex),
        "foreground" => colors.foreground = Some(hex),
        "cursor" | "cursor_color" => colors.cursor = Some(hex),
        "cursor_text" => colors.cursor_text = Some(hex),
        "selection_background" => colors.selection_background = Some(hex),
        "selection_foreground" => colors.selection_foreground = Some(hex),
        // classify_line only hands us known keys; anything else would be a
        // classification bug, so drop it with a warning rather than panic.
        other => {
            warnings.push(ParseWarning::UnknownKey {
                line: line_no,
                key: other.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_palette_lines() {
        assert_eq!(
            classify_line("palette = 4=#81a2be"),
            LineClass::Palette {
                index: 4,
                value: "#81a2be".into()
            }
        );
        assert_eq!(
            classify_line("palette=0=1d1f21"),
            LineClass::Palette {
                index: 0,
                value: "1d1f21".into()
            }
        );
    }

    #[test]
    fn classifies_known_keys_with_either_separator() {
        assert_eq!(
            classify_line("background = #1a1a1a"),
            LineClass::Color {
                key: "background".into(),
                value: "#1a1a1a".into()
            }
        );
        assert_eq!(
            classify_line("selection-background: #44475a"),
            LineClass::Color {
                key: "selection_background".into(),
                value: "#44475a".into()
            }
        );
        assert_eq!(
            classify_line("cursor-color = #ff79c6"),
            LineClass::Color {
                key: "cursor_color".into(),
                value: "#ff79c6".into()
            }
        );
        assert_eq!(
            classify_line("color12 = #7aa6da"),
            LineClass::Color {
                key: "color12".into(),
                value: "#7aa6da".into()
            }
        );
    }

    #[test]
    fn unknown_keys_classify_as_metadata() {
        assert!(matches!(
            classify_line("font-family = JetBrains Mono"),
            LineClass::Metadata { .. }
        ));
    }

    #[test]
    fn garbage_classifies_as_malformed() {
        assert_eq!(classify_line("!!!"), LineClass::Malformed);
        assert_eq!(classify_line("= no key"), LineClass::Malformed);
        assert_eq!(classify_line("palette = x=#fff"), LineClass::Malformed);
    }

    #[test]
    fn sanitize_strips_and_prefixes() {
        assert_eq!(sanitize_color_value("  #1A2B3C; "), "#1A2B3C");
        assert_eq!(sanitize_color_value("ff0000"), "#ff0000");
        assert_eq!(sanitize_color_value("f00"), "#f00");
        assert_eq!(sanitize_color_value("\"#abc\""), "#abc");
        assert_eq!(sanitize_color_value("<script>"), "script");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["  #1A2B3C; ", "ff0000", "f00", "'quoted'", "junk value"] {
            let once = sanitize_color_value(raw);
            assert_eq!(sanitize_color_value(&once), once);
        }
    }

    #[test]
    fn normalize_lowercases_and_validates() {
        assert_eq!(normalize_hex("#FF00AA"), Some("#ff00aa".into()));
        assert_eq!(normalize_hex("#F0A"), Some("#f0a".into()));
        assert_eq!(normalize_hex("#ff00a"), None);
        assert_eq!(normalize_hex("ff00aa"), None);
    }

    #[test]
    fn valid_lines_store_and_garbage_warns() {
        let text = "\
background = #1a1a1a
foreground = #e0e0e0
palette = 0=#000000
palette = 1=#ff0000
this is nonsense
color2 = not-a-color
shader = bloom.glsl
";
        let (colors, warnings) = parse_source(text);
        assert_eq!(colors.len(), 4);
        assert_eq!(warnings.len(), 3);
        assert_eq!(colors.background.as_deref(), Some("#1a1a1a"));
        assert_eq!(colors.slot(1), Some("#ff0000"));
        assert!(colors.slot(2).is_none());
    }

    #[test]
    fn comments_and_blanks_are_free() {
        let text = "# a comment\n\n// another\nbackground = #101010\n";
        let (colors, warnings) = parse_source(text);
        assert_eq!(colors.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_color_never_aborts_the_parse() {
        let (colors, warnings) = parse_source("color0 = #zzz\ncolor1 = #ff0000\n");
        assert_eq!(colors.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            ParseWarning::InvalidColorValue { line: 1, .. }
        ));
    }

    #[test]
    fn values_are_lowercased() {
        let (colors, _) = parse_source("cursor = #AABBCC\n");
        assert_eq!(colors.cursor.as_deref(), Some("#aabbcc"));
    }

    #[test]
    fn oversized_value_warns_and_skips() {
        let long = "f".repeat(MAX_VALUE_BYTES + 1);
        let (colors, warnings) = parse_source(&format!("background = {long}\n"));
        assert!(colors.is_empty());
        assert!(matches!(
            warnings[0],
            ParseWarning::OversizedValue { line: 1, .. }
        ));
    }

    #[test]
    fn oversized_key_warns_and_skips() {
        let key = "k".repeat(MAX_KEY_BYTES + 1);
        let (colors, warnings) = parse_source(&format!("{key} = #fff\n"));
        assert!(colors.is_empty());
        assert!(matches!(
            warnings[0],
            ParseWarning::OversizedKey { line: 1, .. }
        ));
    }

    #[test]
    fn high_palette_indices_are_stored() {
        let (colors, warnings) = parse_source("palette = 231=#ffffff\n");
        assert!(warnings.is_empty());
        assert_eq!(colors.slot(231), Some("#ffffff"));
    }
}
