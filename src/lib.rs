#![forbid(unsafe_code)]

//! Derive complete VS Code color themes from Ghostty terminal schemes.
//!
//! The pipeline is deterministic: one Ghostty color file in, one
//! [`VSCodeTheme`] out, identical bytes on every run.
//!
//! # Stages
//! - [`parser`] reads and validates the scheme file. Resource limits are
//!   enforced before parsing; bad lines become warnings, never failures.
//! - [`derive`] turns the validated colors into the derived systems: the
//!   background elevation hierarchy, opacity tables, accent selection, and
//!   the extended palette.
//! - [`vscode`] assembles the full workbench color map and the syntax
//!   token rules.
//! - [`assembler`] orchestrates the stages and resolves the theme name.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use eidolon::{GeneratorOptions, generate_theme};
//!
//! let theme = generate_theme(Path::new("themes/root.conf"), &GeneratorOptions::default())?;
//! let json = serde_json::to_string_pretty(&theme)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The crate performs no file writes; serializing the theme to disk and
//! scaffolding an extension around it belong to the caller.

pub mod assembler;
pub mod color;
pub mod config;
pub mod defaults;
pub mod derive;
pub mod error;
pub mod model;
pub mod parser;
pub mod vscode;

pub use assembler::{build_vscode_theme, generate_theme, resolve_theme_name};
pub use config::{GeneratorOptions, InputLimits};
pub use error::{ParseWarning, ProcessingError, ThemeError, ValidationError};
pub use model::{ColorRole, FileMetadata, GhosttyColorSet, ParsedThemeFile, ValidationStatus, color_roles};
pub use parser::parse_theme_file;
pub use vscode::{TokenColor, TokenSettings, VSCodeTheme, VSCodeThemeColors};
