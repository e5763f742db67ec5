//! Orchestration: parse → derive → assemble.
//!
//! The assembler owns name resolution and the final artifact shape. It
//! performs no semantic validation of its own: the parser has already
//! validated every color, and the derivation stages are total.

use std::path::Path;

use crate::config::GeneratorOptions;
use crate::error::ThemeError;
use crate::model::{FileMetadata, ParsedThemeFile};
use crate::parser;
use crate::vscode::{VSCodeTheme, tokens, workbench};

/// Resolve the published theme name.
///
/// Priority: explicit name, then the parsed file's metadata name, then the
/// path's file stem. The winner is kebab-cased and run through the alias
/// table.
pub fn resolve_theme_name(
    explicit: Option<&str>,
    metadata: Option<&FileMetadata>,
    path: &Path,
    options: &GeneratorOptions,
) -> String {
    let raw = explicit
        .map(str::to_string)
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            metadata
                .map(|meta| file_stem(&meta.file_name))
                .filter(|stem| !stem.is_empty())
        })
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "theme".to_string())
        });

    let name = kebab_case(&raw);
    options
        .name_aliases
        .get(&name)
        .cloned()
        .unwrap_or(name)
}

/// Assemble the final theme from a parsed file.
pub fn build_vscode_theme(
    parsed: &ParsedThemeFile,
    options: &GeneratorOptions,
) -> Result<VSCodeTheme, ThemeError> {
    let name = resolve_theme_name(
        options.explicit_name.as_deref(),
        Some(&parsed.metadata),
        Path::new(&parsed.metadata.file_name),
        options,
    );

    let colors = workbench::build_workbench_colors(&parsed.colors);
    let token_colors = tokens::build_token_colors(&parsed.colors);
    tracing::debug!(
        name = %name,
        color_keys = colors.len(),
        token_rules = token_colors.len(),
        "assembled theme"
    );

    Ok(VSCodeTheme {
        name,
        kind: "dark".to_string(),
        colors,
        token_colors,
    })
}

/// End-to-end generation: parse the file, derive, assemble.
///
/// Fails only with the parse stage's errors; every error already carries
/// the source file path.
pub fn generate_theme(path: &Path, options: &GeneratorOptions) -> Result<VSCodeTheme, ThemeError> {
    let parsed = parser::parse_theme_file(path, &options.limits)?;
    build_vscode_theme(&parsed, options)
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercase, non-alphanumerics collapsed to single `-`, trimmed.
fn kebab_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GhosttyColorSet, ValidationStatus};

    fn opts() -> GeneratorOptions {
        GeneratorOptions::default()
    }

    #[test]
    fn kebab_case_normalizes() {
        assert_eq!(kebab_case("My_Theme"), "my-theme");
        assert_eq!(kebab_case("  Solar Flare!  "), "solar-flare");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
        assert_eq!(kebab_case("__"), "");
    }

    #[test]
    fn name_resolution_prefers_explicit() {
        let name = resolve_theme_name(
            Some("Midnight Root"),
            None,
            Path::new("/x/other.txt"),
            &opts(),
        );
        assert_eq!(name, "midnight-root");
    }

    #[test]
    fn name_resolution_falls_back_to_path_stem() {
        let name = resolve_theme_name(None, None, Path::new("/x/My_Theme.txt"), &opts());
        assert_eq!(name, "my-theme");
    }

    #[test]
    fn alias_table_rewrites_resolved_names() {
        let name = resolve_theme_name(None, None, Path::new("/x/root.txt"), &opts());
        assert_eq!(name, "eidolon-root");
    }

    #[test]
    fn alias_applies_to_metadata_names_too() {
        let metadata = FileMetadata {
            file_name: "root.conf".into(),
            ..Default::default()
        };
        let name = resolve_theme_name(None, Some(&metadata), Path::new("/elsewhere"), &opts());
        assert_eq!(name, "eidolon-root");
    }

    #[test]
    fn blank_explicit_name_is_ignored() {
        let name = resolve_theme_name(Some("   "), None, Path::new("/x/dusk.txt"), &opts());
        assert_eq!(name, "dusk");
    }

    #[test]
    fn builds_a_complete_theme() {
        let parsed = ParsedThemeFile {
            colors: GhosttyColorSet::default(),
            metadata: FileMetadata {
                file_name: "dusk.conf".into(),
                ..Default::default()
            },
            validation: ValidationStatus::from_warnings(Vec::new()),
        };
        let theme = build_vscode_theme(&parsed, &opts()).unwrap();
        assert_eq!(theme.name, "dusk");
        assert_eq!(theme.kind, "dark");
        assert!(theme.colors.len() >= 600);
        assert!(!theme.token_colors.is_empty());
    }

    #[test]
    fn building_twice_is_byte_identical() {
        let parsed = ParsedThemeFile {
            colors: GhosttyColorSet::default(),
            metadata: FileMetadata {
                file_name: "dusk.conf".into(),
                ..Default::default()
            },
            validation: ValidationStatus::from_warnings(Vec::new()),
        };
        let a = serde_json::to_string(&build_vscode_theme(&parsed, &opts()).unwrap()).unwrap();
        let b = serde_json::to_string(&build_vscode_theme(&parsed, &opts()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
