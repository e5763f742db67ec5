//! The generated theme artifact.
//!
//! [`VSCodeTheme`] is built once per generation request and owned by the
//! caller; the file-generation side serializes it as pretty-printed JSON.
//! The color map is a `BTreeMap` so serialization is byte-stable across
//! runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod tokens;
pub mod workbench;

/// Flat workbench color map, UI-element id → `#rrggbb` or `#rrggbbaa`.
pub type VSCodeThemeColors = BTreeMap<String, String>;

/// A complete VS Code color theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VSCodeTheme {
    pub name: String,
    /// Always `"dark"`; the engine targets dark terminal schemes.
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: VSCodeThemeColors,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// One syntax-highlighting rule: TextMate scopes → style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColor {
    pub name: String,
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}
