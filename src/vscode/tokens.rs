//! Syntax token rules.
//!
//! A fixed scope → palette-slot table, plus a generated 9-level JSON
//! nesting rainbow. The rainbow scopes are the one place selectors are
//! built programmatically: each level's selector nests one dictionary
//! deeper than the last, so the strings grow cumulatively per level.

use crate::defaults;
use crate::derive::extended;
use crate::model::GhosttyColorSet;

use super::{TokenColor, TokenSettings};

/// Palette slots the JSON rainbow cycles through, outermost level first.
const RAINBOW_SLOTS: [usize; 9] = [4, 2, 3, 5, 6, 1, 12, 10, 11];

fn rule(name: &str, scopes: &[&str], foreground: String, font_style: Option<&str>) -> TokenColor {
    TokenColor {
        name: name.to_string(),
        scope: scopes.iter().map(|s| s.to_string()).collect(),
        settings: TokenSettings {
            foreground: Some(foreground),
            font_style: font_style.map(str::to_string),
        },
    }
}

/// Build the ordered token rule list for a color set.
pub fn build_token_colors(set: &GhosttyColorSet) -> Vec<TokenColor> {
    let slot = |i: usize| defaults::palette_slot(set, i);
    let ext = extended::extend_palette(set);

    let mut rules = vec![
        rule(
            "Comments",
            &["comment", "punctuation.definition.comment"],
            slot(8),
            Some("italic"),
        ),
        rule(
            "Documentation comments",
            &["comment.block.documentation", "comment.line.documentation"],
            ext.doc_comment.clone(),
            Some("italic"),
        ),
        rule(
            "Keywords and storage",
            &["keyword", "storage.type", "storage.modifier", "keyword.control"],
            slot(10),
            None,
        ),
        rule(
            "Strings",
            &["string", "punctuation.definition.string"],
            slot(1),
            None,
        ),
        rule(
            "String escapes",
            &["constant.character.escape", "string source"],
            ext.escape_sequence.clone(),
            None,
        ),
        rule(
            "Regular expressions",
            &["string.regexp"],
            ext.regex_literal.clone(),
            None,
        ),
        rule(
            "Functions",
            &[
                "entity.name.function",
                "support.function",
                "meta.function-call.generic",
            ],
            slot(12),
            None,
        ),
        rule(
            "Classes and types",
            &[
                "entity.name.class",
                "entity.name.type",
                "support.class",
                "support.type",
            ],
            slot(5),
            None,
        ),
        rule(
            "Type annotations",
            &["meta.type.annotation", "entity.name.type.parameter"],
            ext.type_annotation.clone(),
            None,
        ),
        rule(
            "Numbers and constants",
            &[
                "constant.numeric",
                "constant.language",
                "constant.other",
                "variable.other.constant",
            ],
            slot(9),
            None,
        ),
        rule(
            "Operators and punctuation",
            &["keyword.operator", "punctuation"],
            slot(6),
            None,
        ),
        rule(
            "Tags",
            &["entity.name.tag", "punctuation.definition.tag"],
            slot(11),
            None,
        ),
        rule(
            "Attributes",
            &["entity.other.attribute-name"],
            ext.attribute.clone(),
            None,
        ),
        rule(
            "Variables",
            &["variable", "variable.parameter"],
            defaults::foreground(set),
            None,
        ),
        rule(
            "Properties and members",
            &["variable.other.property", "support.variable.property"],
            slot(4),
            None,
        ),
        rule(
            "Namespaces and modules",
            &["entity.name.namespace", "entity.name.module"],
            ext.namespace.clone(),
            None,
        ),
        rule(
            "Macros and decorators",
            &["entity.name.function.macro", "meta.decorator", "punctuation.decorator"],
            ext.macro_call.clone(),
            None,
        ),
        rule(
            "Lifetimes and labels",
            &["storage.modifier.lifetime", "entity.name.label"],
            ext.lifetime.clone(),
            Some("italic"),
        ),
        rule(
            "Markup headings",
            &["markup.heading", "entity.name.section"],
            slot(4),
            Some("bold"),
        ),
        rule("Markup emphasis", &["markup.italic"], slot(5), Some("italic")),
        rule("Markup strong", &["markup.bold"], slot(3), Some("bold")),
        rule("Markup links", &["markup.underline.link"], ext.link.clone(), None),
        rule(
            "Diff inserted",
            &["markup.inserted"],
            ext.diff_added.clone(),
            None,
        ),
        rule(
            "Diff removed",
            &["markup.deleted"],
            ext.diff_removed.clone(),
            None,
        ),
        rule("Invalid", &["invalid", "invalid.illegal"], slot(1), Some("underline")),
    ];

    rules.extend(json_rainbow(set));
    rules
}

/// The 9-level JSON key rainbow.
///
/// Level 0 colors top-level keys; each deeper level's selector appends one
/// more `dictionary.value > dictionary` hop before the property name, so
/// the selector strings are cumulative and must be generated.
fn json_rainbow(set: &GhosttyColorSet) -> Vec<TokenColor> {
    let mut nesting = String::from("source.json meta.structure.dictionary.json");
    RAINBOW_SLOTS
        .iter()
        .enumerate()
        .map(|(level, &slot)| {
            if level > 0 {
                nesting.push_str(
                    " meta.structure.dictionary.value.json meta.structure.dictionary.json",
                );
            }
            let scope = format!("{nesting} support.type.property-name.json");
            TokenColor {
                name: format!("JSON key level {level}"),
                scope: vec![scope],
                settings: TokenSettings {
                    foreground: Some(defaults::palette_slot(set, slot)),
                    font_style: None,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_rgb;

    #[test]
    fn fixed_rules_precede_the_rainbow() {
        let rules = build_token_colors(&GhosttyColorSet::default());
        assert!(rules.len() > 30);
        assert_eq!(rules[0].name, "Comments");
        assert_eq!(rules[0].settings.font_style.as_deref(), Some("italic"));
        assert!(rules.last().unwrap().name.starts_with("JSON key level"));
    }

    #[test]
    fn comment_rule_uses_bright_black() {
        let mut set = GhosttyColorSet::default();
        set.palette.insert(8, "#555555".into());
        let rules = build_token_colors(&set);
        assert_eq!(rules[0].settings.foreground.as_deref(), Some("#555555"));
    }

    #[test]
    fn invalid_rule_is_underlined_red() {
        let mut set = GhosttyColorSet::default();
        set.palette.insert(1, "#ff0055".into());
        let rules = build_token_colors(&set);
        let invalid = rules.iter().find(|r| r.name == "Invalid").unwrap();
        assert_eq!(invalid.settings.foreground.as_deref(), Some("#ff0055"));
        assert_eq!(invalid.settings.font_style.as_deref(), Some("underline"));
    }

    #[test]
    fn rainbow_has_nine_levels_with_growing_selectors() {
        let rules = build_token_colors(&GhosttyColorSet::default());
        let rainbow: Vec<_> = rules
            .iter()
            .filter(|r| r.name.starts_with("JSON key level"))
            .collect();
        assert_eq!(rainbow.len(), 9);

        let mut previous_len = 0;
        for (level, rule) in rainbow.iter().enumerate() {
            let scope = &rule.scope[0];
            assert!(scope.starts_with("source.json"));
            assert!(scope.ends_with("support.type.property-name.json"));
            assert!(scope.len() > previous_len, "level {level} did not nest deeper");
            previous_len = scope.len();
            // Each level nests exactly `level` value hops deep.
            assert_eq!(
                scope.matches("meta.structure.dictionary.value.json").count(),
                level
            );
        }
    }

    #[test]
    fn rainbow_cycles_distinct_palette_colors() {
        let rules = build_token_colors(&GhosttyColorSet::default());
        let mut seen = std::collections::BTreeSet::new();
        for rule in rules.iter().filter(|r| r.name.starts_with("JSON key level")) {
            let fg = rule.settings.foreground.clone().unwrap();
            assert!(hex_to_rgb(&fg).is_some());
            seen.insert(fg);
        }
        assert_eq!(seen.len(), 9, "rainbow colors must be distinct");
    }

    #[test]
    fn every_rule_has_a_valid_foreground() {
        let rules = build_token_colors(&GhosttyColorSet::default());
        for rule in &rules {
            let fg = rule.settings.foreground.as_deref().unwrap();
            assert!(hex_to_rgb(fg).is_some(), "{} has bad color {fg}", rule.name);
        }
    }
}
