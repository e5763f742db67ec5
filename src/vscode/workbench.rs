//! The full workbench color map.
//!
//! Produces every UI color key the generated theme ships. VS Code treats a
//! missing key as "use the default theme's value", which silently changes
//! the editor's look, so omission is a behavior change rather than a neutral
//! default. Every key is emitted on every run.
//!
//! The two-tone split at the heart of the mapping: the editor surface takes
//! palette slot 0 (terminal black), while the chrome around it (activity
//! bar, side bar, status bar, title bar, tab strip) takes the scheme's
//! `background` key. Schemes where those differ get the layered depth look;
//! schemes where they match degrade gracefully to a flat theme.
//!
//! Keys are assigned in grouped per-section builders and merged into one
//! flat map; accent-carrying keys are overlaid last so the accent system
//! always wins.

use std::array;

use crate::color::{contrast_text, lighten, with_opacity};
use crate::defaults;
use crate::derive::accent::{self, AccentSystem};
use crate::derive::background::{self, BackgroundHierarchy, Polarity};
use crate::derive::extended::{self, ExtendedPalette};
use crate::derive::opacity::{OpacityLevels, OpacitySemantics};
use crate::model::GhosttyColorSet;

use super::VSCodeThemeColors;

/// Fully transparent. Borders use this unless they carry meaning.
const TRANSPARENT: &str = "#00000000";

/// Lightness lift for floating widget surfaces over the editor.
const WIDGET_LIFT: f64 = 0.02;

/// Lightness lift for input fields over the editor.
const INPUT_LIFT: f64 = 0.08;

/// Everything the section builders draw on.
struct Ctx {
    p: [String; 16],
    editor_bg: String,
    activity_bg: String,
    fg: String,
    widget_bg: String,
    input_bg: String,
    cursor: String,
    hierarchy: BackgroundHierarchy,
    ext: ExtendedPalette,
    accents: AccentSystem,
}

impl Ctx {
    fn new(set: &GhosttyColorSet) -> Self {
        let p: [String; 16] = array::from_fn(|i| defaults::palette_slot(set, i));
        let editor_bg = p[0].clone();
        Self {
            activity_bg: defaults::background(set),
            fg: defaults::foreground(set),
            widget_bg: lighten(&editor_bg, WIDGET_LIFT),
            input_bg: lighten(&editor_bg, INPUT_LIFT),
            cursor: defaults::cursor(set),
            hierarchy: background::create_hierarchy(&editor_bg, Polarity::Dark),
            ext: extended::extend_palette(set),
            accents: accent::create_accent_system(set),
            editor_bg,
            p,
        }
    }
}

fn put(out: &mut VSCodeThemeColors, key: &str, value: impl Into<String>) {
    out.insert(key.to_string(), value.into());
}

/// Build the complete workbench color map for a color set.
pub fn build_workbench_colors(set: &GhosttyColorSet) -> VSCodeThemeColors {
    let ctx = Ctx::new(set);
    let mut out = VSCodeThemeColors::new();

    base_and_text(&ctx, &mut out);
    buttons_and_inputs(&ctx, &mut out);
    lists_and_trees(&ctx, &mut out);
    activity_and_side_bars(&ctx, &mut out);
    editor_groups_and_tabs(&ctx, &mut out);
    editor_core(&ctx, &mut out);
    editor_gutter_and_ruler(&ctx, &mut out);
    editor_diagnostics(&ctx, &mut out);
    editor_widgets(&ctx, &mut out);
    diff_and_merge(&ctx, &mut out);
    peek_view(&ctx, &mut out);
    panels(&ctx, &mut out);
    status_and_title_bars(&ctx, &mut out);
    menus_and_command_center(&ctx, &mut out);
    notifications_and_banner(&ctx, &mut out);
    extensions_and_pickers(&ctx, &mut out);
    terminal_colors(&ctx, &mut out);
    debug_colors(&ctx, &mut out);
    testing_colors(&ctx, &mut out);
    git_and_settings(&ctx, &mut out);
    symbols_and_charts(&ctx, &mut out);
    notebook_colors(&ctx, &mut out);
    misc_chrome(&ctx, &mut out);

    // Accent-carrying keys win over anything the sections assigned.
    for (key, value) in accent::apply_accent_system(&ctx.accents) {
        out.insert(key.to_string(), value);
    }

    out
}

fn base_and_text(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "foreground", &ctx.fg);
    put(out, "descriptionForeground", &ctx.p[8]);
    put(out, "disabledForeground", with_opacity(&ctx.fg, OpacityLevels::HEAVY));
    put(out, "errorForeground", &ctx.p[1]);
    put(out, "icon.foreground", &ctx.fg);
    put(out, "focusBorder", &ctx.p[4]);
    put(out, "selection.background", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "widget.shadow", with_opacity(&ctx.hierarchy.void, OpacityLevels::HEAVY));
    put(out, "widget.border", TRANSPARENT);
    put(out, "sash.hoverBorder", &ctx.p[4]);

    put(out, "textBlockQuote.background", &ctx.widget_bg);
    put(out, "textBlockQuote.border", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "textCodeBlock.background", &ctx.widget_bg);
    put(out, "textLink.foreground", &ctx.ext.link);
    put(out, "textLink.activeForeground", &ctx.ext.blue.light);
    put(out, "textPreformat.foreground", &ctx.p[3]);
    put(out, "textPreformat.background", &ctx.widget_bg);
    put(out, "textSeparator.foreground", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
}

fn buttons_and_inputs(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "button.background", &ctx.p[4]);
    put(out, "button.foreground", contrast_text(&ctx.p[4]));
    put(out, "button.hoverBackground", &ctx.ext.blue.light);
    put(out, "button.border", TRANSPARENT);
    put(out, "button.separator", with_opacity(contrast_text(&ctx.p[4]), OpacityLevels::BOLD));
    put(out, "button.secondaryBackground", &ctx.hierarchy.interactive);
    put(out, "button.secondaryForeground", &ctx.fg);
    put(out, "button.secondaryHoverBackground", &ctx.hierarchy.elevated);

    put(out, "checkbox.background", &ctx.input_bg);
    put(out, "checkbox.foreground", &ctx.fg);
    put(out, "checkbox.border", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
    put(out, "checkbox.selectBackground", &ctx.input_bg);
    put(out, "checkbox.selectBorder", &ctx.p[4]);

    put(out, "radio.activeForeground", &ctx.fg);
    put(out, "radio.activeBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "radio.activeBorder", &ctx.p[4]);
    put(out, "radio.inactiveForeground", &ctx.p[8]);
    put(out, "radio.inactiveBackground", &ctx.input_bg);
    put(out, "radio.inactiveBorder", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
    put(out, "radio.inactiveHoverBackground", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));

    put(out, "dropdown.background", &ctx.input_bg);
    put(out, "dropdown.listBackground", &ctx.widget_bg);
    put(out, "dropdown.border", TRANSPARENT);
    put(out, "dropdown.foreground", &ctx.fg);

    put(out, "input.background", &ctx.input_bg);
    put(out, "input.border", TRANSPARENT);
    put(out, "input.foreground", &ctx.fg);
    put(out, "input.placeholderForeground", &ctx.p[8]);
    put(out, "inputOption.activeBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "inputOption.activeBorder", &ctx.p[4]);
    put(out, "inputOption.activeForeground", &ctx.fg);
    put(out, "inputOption.hoverBackground", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));

    put(out, "inputValidation.errorBackground", &ctx.ext.red.dark);
    put(out, "inputValidation.errorBorder", &ctx.p[1]);
    put(out, "inputValidation.errorForeground", contrast_text(&ctx.ext.red.dark));
    put(out, "inputValidation.infoBackground", &ctx.ext.blue.dark);
    put(out, "inputValidation.infoBorder", &ctx.p[4]);
    put(out, "inputValidation.infoForeground", contrast_text(&ctx.ext.blue.dark));
    put(out, "inputValidation.warningBackground", &ctx.ext.yellow.dark);
    put(out, "inputValidation.warningBorder", &ctx.p[3]);
    put(out, "inputValidation.warningForeground", contrast_text(&ctx.ext.yellow.dark));
}

fn lists_and_trees(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "list.activeSelectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "list.activeSelectionForeground", &ctx.fg);
    put(out, "list.activeSelectionIconForeground", &ctx.fg);
    put(out, "list.inactiveSelectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::HIGHLIGHT));
    put(out, "list.inactiveSelectionForeground", &ctx.fg);
    put(out, "list.focusBackground", with_opacity(&ctx.p[4], OpacitySemantics::FOCUS));
    put(out, "list.focusForeground", &ctx.fg);
    put(out, "list.focusOutline", TRANSPARENT);
    put(out, "list.inactiveFocusBackground", with_opacity(&ctx.p[4], OpacityLevels::SOFT));
    put(out, "list.inactiveFocusOutline", TRANSPARENT);
    put(out, "list.hoverBackground", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "list.hoverForeground", &ctx.fg);
    put(out, "list.dropBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "list.dropBetweenBackground", &ctx.p[4]);
    put(out, "list.highlightForeground", &ctx.p[4]);
    put(out, "list.focusHighlightForeground", &ctx.p[4]);
    put(out, "list.invalidItemForeground", &ctx.p[1]);
    put(out, "list.errorForeground", &ctx.p[1]);
    put(out, "list.warningForeground", &ctx.p[3]);
    put(out, "list.deemphasizedForeground", &ctx.p[8]);
    put(out, "list.filterMatchBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "list.filterMatchBorder", TRANSPARENT);
    put(out, "listFilterWidget.background", &ctx.widget_bg);
    put(out, "listFilterWidget.outline", TRANSPARENT);
    put(out, "listFilterWidget.noMatchesOutline", &ctx.p[1]);
    put(out, "listFilterWidget.shadow", with_opacity(&ctx.hierarchy.void, OpacityLevels::HEAVY));

    put(out, "tree.indentGuidesStroke", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "tree.inactiveIndentGuidesStroke", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "tree.tableColumnsBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "tree.tableOddRowsBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));
}

fn activity_and_side_bars(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "activityBar.background", &ctx.activity_bg);
    put(out, "activityBar.foreground", &ctx.fg);
    put(out, "activityBar.inactiveForeground", &ctx.p[8]);
    put(out, "activityBar.border", TRANSPARENT);
    put(out, "activityBar.activeBorder", &ctx.p[4]);
    put(out, "activityBar.activeBackground", with_opacity(&ctx.p[4], OpacityLevels::SOFT));
    put(out, "activityBar.activeFocusBorder", &ctx.p[4]);
    put(out, "activityBar.dropBorder", &ctx.p[4]);
    put(out, "activityBarBadge.background", &ctx.p[4]);
    put(out, "activityBarBadge.foreground", contrast_text(&ctx.p[4]));
    put(out, "activityBarTop.foreground", &ctx.fg);
    put(out, "activityBarTop.inactiveForeground", &ctx.p[8]);
    put(out, "activityBarTop.activeBorder", &ctx.p[4]);
    put(out, "activityBarTop.dropBorder", &ctx.p[4]);

    put(out, "sideBar.background", &ctx.activity_bg);
    put(out, "sideBar.foreground", &ctx.fg);
    put(out, "sideBar.border", TRANSPARENT);
    put(out, "sideBar.dropBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "sideBarTitle.foreground", &ctx.fg);
    put(out, "sideBarSectionHeader.background", &ctx.hierarchy.depth);
    put(out, "sideBarSectionHeader.foreground", &ctx.fg);
    put(out, "sideBarSectionHeader.border", TRANSPARENT);
}

fn editor_groups_and_tabs(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "editorGroup.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "editorGroup.dropBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "editorGroup.emptyBackground", &ctx.editor_bg);
    put(out, "editorGroup.focusedEmptyBorder", TRANSPARENT);
    put(out, "editorGroup.dropIntoPromptBackground", &ctx.widget_bg);
    put(out, "editorGroup.dropIntoPromptForeground", &ctx.fg);
    put(out, "editorGroupHeader.noTabsBackground", &ctx.editor_bg);
    put(out, "editorGroupHeader.tabsBackground", &ctx.activity_bg);
    put(out, "editorGroupHeader.tabsBorder", TRANSPARENT);
    put(out, "editorGroupHeader.border", TRANSPARENT);

    put(out, "tab.activeBackground", &ctx.editor_bg);
    put(out, "tab.unfocusedActiveBackground", &ctx.editor_bg);
    put(out, "tab.activeForeground", &ctx.fg);
    put(out, "tab.border", TRANSPARENT);
    put(out, "tab.activeBorder", TRANSPARENT);
    put(out, "tab.unfocusedActiveBorder", TRANSPARENT);
    put(out, "tab.activeBorderTop", &ctx.p[4]);
    put(out, "tab.unfocusedActiveBorderTop", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "tab.lastPinnedBorder", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "tab.inactiveBackground", &ctx.activity_bg);
    put(out, "tab.unfocusedInactiveBackground", &ctx.activity_bg);
    put(out, "tab.inactiveForeground", &ctx.p[8]);
    put(out, "tab.unfocusedActiveForeground", with_opacity(&ctx.fg, OpacityLevels::HEAVY));
    put(out, "tab.unfocusedInactiveForeground", &ctx.p[8]);
    put(out, "tab.hoverBackground", &ctx.hierarchy.surface);
    put(out, "tab.unfocusedHoverBackground", &ctx.hierarchy.surface);
    put(out, "tab.hoverForeground", &ctx.fg);
    put(out, "tab.hoverBorder", TRANSPARENT);
    put(out, "tab.activeModifiedBorder", &ctx.p[3]);
    put(out, "tab.inactiveModifiedBorder", with_opacity(&ctx.p[3], OpacityLevels::HEAVY));
    put(out, "tab.unfocusedActiveModifiedBorder", with_opacity(&ctx.p[3], OpacityLevels::HEAVY));
    put(out, "tab.unfocusedInactiveModifiedBorder", with_opacity(&ctx.p[3], OpacityLevels::BOLD));
    put(out, "tab.dragAndDropBorder", &ctx.p[4]);

    put(out, "editorPane.background", &ctx.editor_bg);
    put(out, "sideBySideEditor.horizontalBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "sideBySideEditor.verticalBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
}

fn editor_core(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "editor.background", &ctx.editor_bg);
    put(out, "editor.foreground", &ctx.fg);
    put(out, "editorLineNumber.foreground", &ctx.p[8]);
    put(out, "editorLineNumber.activeForeground", &ctx.fg);
    put(out, "editorLineNumber.dimmedForeground", with_opacity(&ctx.p[8], OpacityLevels::HEAVY));
    put(out, "editorCursor.foreground", &ctx.cursor);
    put(out, "editorCursor.background", &ctx.editor_bg);
    put(out, "editorMultiCursor.primary.foreground", &ctx.cursor);
    put(out, "editorMultiCursor.secondary.foreground", with_opacity(&ctx.cursor, OpacityLevels::HEAVY));

    put(out, "editor.selectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "editor.inactiveSelectionBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "editor.selectionHighlightBackground", with_opacity(&ctx.p[4], OpacitySemantics::HIGHLIGHT));
    put(out, "editor.selectionHighlightBorder", TRANSPARENT);

    put(out, "editor.wordHighlightBackground", with_opacity(&ctx.p[4], OpacitySemantics::HIGHLIGHT));
    put(out, "editor.wordHighlightBorder", TRANSPARENT);
    put(out, "editor.wordHighlightStrongBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "editor.wordHighlightStrongBorder", TRANSPARENT);
    put(out, "editor.wordHighlightTextBackground", with_opacity(&ctx.p[4], OpacityLevels::SOFT));
    put(out, "editor.wordHighlightTextBorder", TRANSPARENT);

    put(out, "editor.findMatchBackground", with_opacity(&ctx.p[3], OpacitySemantics::FIND_MATCH));
    put(out, "editor.findMatchBorder", TRANSPARENT);
    put(out, "editor.findMatchHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "editor.findMatchHighlightBorder", TRANSPARENT);
    put(out, "editor.findRangeHighlightBackground", with_opacity(&ctx.p[3], OpacityLevels::SUBTLE));
    put(out, "editor.findRangeHighlightBorder", TRANSPARENT);

    put(out, "editor.hoverHighlightBackground", with_opacity(&ctx.p[4], OpacitySemantics::HOVER));
    put(out, "editor.lineHighlightBackground", with_opacity(&ctx.fg, OpacitySemantics::LINE_HIGHLIGHT));
    put(out, "editor.lineHighlightBorder", TRANSPARENT);
    put(out, "editor.rangeHighlightBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));
    put(out, "editor.rangeHighlightBorder", TRANSPARENT);
    put(out, "editor.symbolHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "editor.symbolHighlightBorder", TRANSPARENT);

    put(out, "editorLink.activeForeground", &ctx.ext.link);
    put(out, "editor.foldBackground", with_opacity(&ctx.p[4], OpacityLevels::SUBTLE));
    put(out, "editor.foldPlaceholderForeground", &ctx.p[8]);
    put(out, "editorWhitespace.foreground", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "editorIndentGuide.background1", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "editorIndentGuide.activeBackground1", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
    put(out, "editorRuler.foreground", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "editor.linkedEditingBackground", with_opacity(&ctx.p[5], OpacityLevels::SOFT));
    put(out, "editorCodeLens.foreground", &ctx.p[8]);
    put(out, "editorLightBulb.iconForeground", &ctx.p[3]);
    put(out, "editorLightBulbAutoFix.iconForeground", &ctx.p[4]);
    put(out, "editorLightBulbAi.iconForeground", &ctx.p[5]);

    put(out, "editorInlayHint.background", with_opacity(&ctx.p[8], OpacityLevels::SOFT));
    put(out, "editorInlayHint.foreground", &ctx.p[8]);
    put(out, "editorInlayHint.typeBackground", with_opacity(&ctx.p[8], OpacityLevels::SOFT));
    put(out, "editorInlayHint.typeForeground", &ctx.ext.type_annotation);
    put(out, "editorInlayHint.parameterBackground", with_opacity(&ctx.p[8], OpacityLevels::SOFT));
    put(out, "editorInlayHint.parameterForeground", &ctx.p[8]);

    put(out, "editorBracketMatch.background", with_opacity(&ctx.p[6], OpacitySemantics::HIGHLIGHT));
    put(out, "editorBracketMatch.border", with_opacity(&ctx.p[6], OpacityLevels::HEAVY));
    put(out, "editorBracketHighlight.foreground1", &ctx.p[3]);
    put(out, "editorBracketHighlight.foreground2", &ctx.p[5]);
    put(out, "editorBracketHighlight.foreground3", &ctx.p[4]);
    put(out, "editorBracketHighlight.foreground4", &ctx.p[2]);
    put(out, "editorBracketHighlight.foreground5", &ctx.p[6]);
    put(out, "editorBracketHighlight.foreground6", &ctx.p[1]);
    put(out, "editorBracketHighlight.unexpectedBracket.foreground", &ctx.p[9]);
    put(out, "editorBracketPairGuide.background1", with_opacity(&ctx.p[3], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.background2", with_opacity(&ctx.p[5], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.background3", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.background4", with_opacity(&ctx.p[2], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.background5", with_opacity(&ctx.p[6], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.background6", with_opacity(&ctx.p[1], OpacityLevels::GENTLE));
    put(out, "editorBracketPairGuide.activeBackground1", with_opacity(&ctx.p[3], OpacityLevels::NOTABLE));
    put(out, "editorBracketPairGuide.activeBackground2", with_opacity(&ctx.p[5], OpacityLevels::NOTABLE));
    put(out, "editorBracketPairGuide.activeBackground3", with_opacity(&ctx.p[4], OpacityLevels::NOTABLE));
    put(out, "editorBracketPairGuide.activeBackground4", with_opacity(&ctx.p[2], OpacityLevels::NOTABLE));
    put(out, "editorBracketPairGuide.activeBackground5", with_opacity(&ctx.p[6], OpacityLevels::NOTABLE));
    put(out, "editorBracketPairGuide.activeBackground6", with_opacity(&ctx.p[1], OpacityLevels::NOTABLE));

    put(out, "editorUnicodeHighlight.border", &ctx.p[3]);
    put(out, "editorUnicodeHighlight.background", with_opacity(&ctx.p[3], OpacityLevels::SOFT));
    put(out, "editor.snippetTabstopHighlightBackground", with_opacity(&ctx.p[2], OpacityLevels::GENTLE));
    put(out, "editor.snippetTabstopHighlightBorder", TRANSPARENT);
    put(out, "editor.snippetFinalTabstopHighlightBackground", with_opacity(&ctx.p[2], OpacityLevels::MODERATE));
    put(out, "editor.snippetFinalTabstopHighlightBorder", TRANSPARENT);
    put(out, "editor.stackFrameHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "editor.focusedStackFrameHighlightBackground", with_opacity(&ctx.p[2], OpacitySemantics::HIGHLIGHT));
    put(out, "editorGhostText.foreground", &ctx.p[8]);
    put(out, "editorGhostText.background", TRANSPARENT);
    put(out, "editorGhostText.border", TRANSPARENT);
    put(out, "editorWatermark.foreground", &ctx.p[8]);
}

fn editor_gutter_and_ruler(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "editorGutter.background", &ctx.editor_bg);
    put(out, "editorGutter.modifiedBackground", &ctx.ext.diff_modified);
    put(out, "editorGutter.addedBackground", &ctx.ext.diff_added);
    put(out, "editorGutter.deletedBackground", &ctx.ext.diff_removed);
    put(out, "editorGutter.commentRangeForeground", &ctx.p[8]);
    put(out, "editorGutter.commentGlyphForeground", &ctx.p[8]);
    put(out, "editorGutter.commentUnresolvedGlyphForeground", &ctx.p[3]);
    put(out, "editorGutter.foldingControlForeground", &ctx.p[8]);

    put(out, "editorOverviewRuler.border", TRANSPARENT);
    put(out, "editorOverviewRuler.background", &ctx.editor_bg);
    put(out, "editorOverviewRuler.findMatchForeground", with_opacity(&ctx.p[3], OpacityLevels::HEAVY));
    put(out, "editorOverviewRuler.rangeHighlightForeground", with_opacity(&ctx.p[4], OpacityLevels::HEAVY));
    put(out, "editorOverviewRuler.selectionHighlightForeground", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "editorOverviewRuler.wordHighlightForeground", with_opacity(&ctx.p[5], OpacityLevels::BOLD));
    put(out, "editorOverviewRuler.wordHighlightStrongForeground", with_opacity(&ctx.p[5], OpacityLevels::HEAVY));
    put(out, "editorOverviewRuler.wordHighlightTextForeground", with_opacity(&ctx.p[5], OpacityLevels::NOTABLE));
    put(out, "editorOverviewRuler.modifiedForeground", &ctx.ext.diff_modified);
    put(out, "editorOverviewRuler.addedForeground", &ctx.ext.diff_added);
    put(out, "editorOverviewRuler.deletedForeground", &ctx.ext.diff_removed);
    put(out, "editorOverviewRuler.errorForeground", &ctx.p[1]);
    put(out, "editorOverviewRuler.warningForeground", &ctx.p[3]);
    put(out, "editorOverviewRuler.infoForeground", &ctx.p[4]);
    put(out, "editorOverviewRuler.bracketMatchForeground", &ctx.p[6]);
    put(out, "editorOverviewRuler.currentContentForeground", &ctx.p[2]);
    put(out, "editorOverviewRuler.incomingContentForeground", &ctx.p[4]);
    put(out, "editorOverviewRuler.commonContentForeground", &ctx.p[8]);
}

fn editor_diagnostics(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "editorError.foreground", &ctx.p[1]);
    put(out, "editorError.border", TRANSPARENT);
    put(out, "editorError.background", TRANSPARENT);
    put(out, "editorWarning.foreground", &ctx.p[3]);
    put(out, "editorWarning.border", TRANSPARENT);
    put(out, "editorWarning.background", TRANSPARENT);
    put(out, "editorInfo.foreground", &ctx.p[4]);
    put(out, "editorInfo.border", TRANSPARENT);
    put(out, "editorInfo.background", TRANSPARENT);
    put(out, "editorHint.foreground", &ctx.ext.cyan.muted);
    put(out, "editorHint.border", TRANSPARENT);
    put(out, "problemsErrorIcon.foreground", &ctx.p[1]);
    put(out, "problemsWarningIcon.foreground", &ctx.p[3]);
    put(out, "problemsInfoIcon.foreground", &ctx.p[4]);
}

fn editor_widgets(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "editorWidget.background", &ctx.widget_bg);
    put(out, "editorWidget.foreground", &ctx.fg);
    put(out, "editorWidget.border", with_opacity(&ctx.fg, OpacityLevels::GENTLE));
    put(out, "editorWidget.resizeBorder", &ctx.p[4]);

    put(out, "editorSuggestWidget.background", &ctx.widget_bg);
    put(out, "editorSuggestWidget.border", with_opacity(&ctx.fg, OpacityLevels::GENTLE));
    put(out, "editorSuggestWidget.foreground", &ctx.fg);
    put(out, "editorSuggestWidget.focusHighlightForeground", &ctx.ext.blue.light);
    put(out, "editorSuggestWidget.highlightForeground", &ctx.p[4]);
    put(out, "editorSuggestWidget.selectedBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "editorSuggestWidget.selectedForeground", &ctx.fg);
    put(out, "editorSuggestWidget.selectedIconForeground", &ctx.fg);
    put(out, "editorSuggestWidgetStatus.foreground", &ctx.p[8]);

    put(out, "editorHoverWidget.background", &ctx.widget_bg);
    put(out, "editorHoverWidget.foreground", &ctx.fg);
    put(out, "editorHoverWidget.border", with_opacity(&ctx.fg, OpacityLevels::GENTLE));
    put(out, "editorHoverWidget.highlightForeground", &ctx.p[4]);
    put(out, "editorHoverWidget.statusBarBackground", &ctx.hierarchy.overlay);

    put(out, "editorStickyScroll.background", &ctx.editor_bg);
    put(out, "editorStickyScroll.border", TRANSPARENT);
    put(out, "editorStickyScroll.shadow", with_opacity(&ctx.hierarchy.void, OpacityLevels::BOLD));
    put(out, "editorStickyScrollHover.background", &ctx.hierarchy.surface);

    put(out, "debugExceptionWidget.background", &ctx.ext.red.dark);
    put(out, "debugExceptionWidget.border", &ctx.p[1]);
    put(out, "editorMarkerNavigation.background", &ctx.widget_bg);
    put(out, "editorMarkerNavigationError.background", &ctx.p[1]);
    put(out, "editorMarkerNavigationError.headerBackground", with_opacity(&ctx.p[1], OpacityLevels::SOFT));
    put(out, "editorMarkerNavigationWarning.background", &ctx.p[3]);
    put(out, "editorMarkerNavigationWarning.headerBackground", with_opacity(&ctx.p[3], OpacityLevels::SOFT));
    put(out, "editorMarkerNavigationInfo.background", &ctx.p[4]);
    put(out, "editorMarkerNavigationInfo.headerBackground", with_opacity(&ctx.p[4], OpacityLevels::SOFT));
}

fn diff_and_merge(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "diffEditor.insertedTextBackground", with_opacity(&ctx.p[2], OpacitySemantics::HIGHLIGHT));
    put(out, "diffEditor.insertedTextBorder", TRANSPARENT);
    put(out, "diffEditor.removedTextBackground", with_opacity(&ctx.p[1], OpacitySemantics::HIGHLIGHT));
    put(out, "diffEditor.removedTextBorder", TRANSPARENT);
    put(out, "diffEditor.insertedLineBackground", with_opacity(&ctx.p[2], OpacityLevels::LIGHT));
    put(out, "diffEditor.removedLineBackground", with_opacity(&ctx.p[1], OpacityLevels::LIGHT));
    put(out, "diffEditor.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "diffEditor.diagonalFill", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "diffEditor.unchangedRegionBackground", &ctx.hierarchy.surface);
    put(out, "diffEditor.unchangedRegionForeground", &ctx.p[8]);
    put(out, "diffEditor.unchangedCodeBackground", with_opacity(&ctx.p[8], OpacityLevels::SUBTLE));
    put(out, "diffEditor.move.border", with_opacity(&ctx.p[5], OpacityLevels::HEAVY));
    put(out, "diffEditor.moveActive.border", &ctx.p[5]);
    put(out, "diffEditorGutter.insertedLineBackground", with_opacity(&ctx.p[2], OpacityLevels::GENTLE));
    put(out, "diffEditorGutter.removedLineBackground", with_opacity(&ctx.p[1], OpacityLevels::GENTLE));
    put(out, "diffEditorOverview.insertedForeground", &ctx.ext.diff_added);
    put(out, "diffEditorOverview.removedForeground", &ctx.ext.diff_removed);
    put(out, "multiDiffEditor.headerBackground", &ctx.hierarchy.depth);
    put(out, "multiDiffEditor.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));

    put(out, "merge.currentHeaderBackground", with_opacity(&ctx.p[2], OpacityLevels::BOLD));
    put(out, "merge.currentContentBackground", with_opacity(&ctx.p[2], OpacityLevels::GENTLE));
    put(out, "merge.incomingHeaderBackground", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "merge.incomingContentBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "merge.commonHeaderBackground", with_opacity(&ctx.p[8], OpacityLevels::BOLD));
    put(out, "merge.commonContentBackground", with_opacity(&ctx.p[8], OpacityLevels::GENTLE));
    put(out, "merge.border", TRANSPARENT);
    put(out, "mergeEditor.change.background", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "mergeEditor.change.word.background", with_opacity(&ctx.p[4], OpacitySemantics::HIGHLIGHT));
    put(out, "mergeEditor.conflict.unhandledUnfocused.border", with_opacity(&ctx.p[3], OpacityLevels::HEAVY));
    put(out, "mergeEditor.conflict.unhandledFocused.border", &ctx.p[3]);
    put(out, "mergeEditor.conflict.handledUnfocused.border", with_opacity(&ctx.p[2], OpacityLevels::BOLD));
    put(out, "mergeEditor.conflict.handledFocused.border", &ctx.p[2]);
    put(out, "mergeEditor.conflict.handled.minimapOverViewRuler", &ctx.p[2]);
    put(out, "mergeEditor.conflict.unhandled.minimapOverViewRuler", &ctx.p[3]);
}

fn peek_view(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "peekView.border", &ctx.p[4]);
    put(out, "peekViewEditor.background", &ctx.hierarchy.surface);
    put(out, "peekViewEditor.matchHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::FIND_MATCH));
    put(out, "peekViewEditor.matchHighlightBorder", TRANSPARENT);
    put(out, "peekViewEditorGutter.background", &ctx.hierarchy.surface);
    put(out, "peekViewEditorStickyScroll.background", &ctx.hierarchy.surface);
    put(out, "peekViewResult.background", &ctx.hierarchy.depth);
    put(out, "peekViewResult.fileForeground", &ctx.fg);
    put(out, "peekViewResult.lineForeground", &ctx.p[8]);
    put(out, "peekViewResult.matchHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "peekViewResult.selectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "peekViewResult.selectionForeground", &ctx.fg);
    put(out, "peekViewTitle.background", &ctx.hierarchy.depth);
    put(out, "peekViewTitleDescription.foreground", &ctx.p[8]);
    put(out, "peekViewTitleLabel.foreground", &ctx.fg);
}

fn panels(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "panel.background", &ctx.editor_bg);
    put(out, "panel.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "panel.dropBorder", &ctx.p[4]);
    put(out, "panelTitle.activeBorder", &ctx.p[4]);
    put(out, "panelTitle.activeForeground", &ctx.fg);
    put(out, "panelTitle.inactiveForeground", &ctx.p[8]);
    put(out, "panelInput.border", with_opacity(&ctx.fg, OpacityLevels::GENTLE));
    put(out, "panelSection.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "panelSection.dropBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "panelSectionHeader.background", &ctx.hierarchy.depth);
    put(out, "panelSectionHeader.foreground", &ctx.fg);
    put(out, "panelSectionHeader.border", TRANSPARENT);
    put(out, "outputView.background", &ctx.editor_bg);
    put(out, "outputViewStickyScroll.background", &ctx.editor_bg);
}

fn status_and_title_bars(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "statusBar.background", &ctx.activity_bg);
    put(out, "statusBar.foreground", &ctx.fg);
    put(out, "statusBar.border", TRANSPARENT);
    put(out, "statusBar.focusBorder", &ctx.p[4]);
    put(out, "statusBar.debuggingBackground", &ctx.ext.orange_warm);
    put(out, "statusBar.debuggingForeground", contrast_text(&ctx.ext.orange_warm));
    put(out, "statusBar.debuggingBorder", TRANSPARENT);
    put(out, "statusBar.noFolderBackground", &ctx.ext.magenta.dark);
    put(out, "statusBar.noFolderForeground", contrast_text(&ctx.ext.magenta.dark));
    put(out, "statusBar.noFolderBorder", TRANSPARENT);
    put(out, "statusBarItem.activeBackground", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "statusBarItem.hoverBackground", with_opacity(&ctx.fg, OpacityLevels::SOFT));
    put(out, "statusBarItem.hoverForeground", &ctx.fg);
    put(out, "statusBarItem.compactHoverBackground", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "statusBarItem.focusBorder", &ctx.p[4]);
    put(out, "statusBarItem.prominentForeground", &ctx.fg);
    put(out, "statusBarItem.prominentBackground", &ctx.hierarchy.depth);
    put(out, "statusBarItem.prominentHoverBackground", &ctx.hierarchy.surface);
    put(out, "statusBarItem.prominentHoverForeground", &ctx.fg);
    put(out, "statusBarItem.remoteBackground", &ctx.ext.blue.dark);
    put(out, "statusBarItem.remoteForeground", contrast_text(&ctx.ext.blue.dark));
    put(out, "statusBarItem.remoteHoverBackground", &ctx.p[4]);
    put(out, "statusBarItem.remoteHoverForeground", contrast_text(&ctx.p[4]));
    put(out, "statusBarItem.errorBackground", &ctx.ext.red.dark);
    put(out, "statusBarItem.errorForeground", contrast_text(&ctx.ext.red.dark));
    put(out, "statusBarItem.errorHoverBackground", &ctx.p[1]);
    put(out, "statusBarItem.errorHoverForeground", contrast_text(&ctx.p[1]));
    put(out, "statusBarItem.warningBackground", &ctx.ext.yellow.dark);
    put(out, "statusBarItem.warningForeground", contrast_text(&ctx.ext.yellow.dark));
    put(out, "statusBarItem.warningHoverBackground", &ctx.p[3]);
    put(out, "statusBarItem.warningHoverForeground", contrast_text(&ctx.p[3]));
    put(out, "statusBarItem.offlineBackground", &ctx.ext.red.muted);
    put(out, "statusBarItem.offlineForeground", contrast_text(&ctx.ext.red.muted));

    put(out, "titleBar.activeBackground", &ctx.activity_bg);
    put(out, "titleBar.activeForeground", &ctx.fg);
    put(out, "titleBar.inactiveBackground", &ctx.activity_bg);
    put(out, "titleBar.inactiveForeground", &ctx.p[8]);
    put(out, "titleBar.border", TRANSPARENT);
}

fn menus_and_command_center(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "menubar.selectionForeground", &ctx.fg);
    put(out, "menubar.selectionBackground", with_opacity(&ctx.fg, OpacityLevels::SOFT));
    put(out, "menubar.selectionBorder", TRANSPARENT);
    put(out, "menu.foreground", &ctx.fg);
    put(out, "menu.background", &ctx.hierarchy.overlay);
    put(out, "menu.selectionForeground", &ctx.fg);
    put(out, "menu.selectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "menu.selectionBorder", TRANSPARENT);
    put(out, "menu.separatorBackground", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "menu.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));

    put(out, "commandCenter.foreground", &ctx.fg);
    put(out, "commandCenter.activeForeground", &ctx.fg);
    put(out, "commandCenter.inactiveForeground", &ctx.p[8]);
    put(out, "commandCenter.background", &ctx.hierarchy.depth);
    put(out, "commandCenter.activeBackground", &ctx.hierarchy.surface);
    put(out, "commandCenter.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "commandCenter.inactiveBorder", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "commandCenter.activeBorder", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "commandCenter.debuggingBackground", with_opacity(&ctx.ext.orange_warm, OpacityLevels::MEDIUM));
}

fn notifications_and_banner(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "notificationCenter.border", TRANSPARENT);
    put(out, "notificationCenterHeader.foreground", &ctx.fg);
    put(out, "notificationCenterHeader.background", &ctx.hierarchy.overlay);
    put(out, "notificationToast.border", TRANSPARENT);
    put(out, "notifications.foreground", &ctx.fg);
    put(out, "notifications.background", &ctx.hierarchy.elevated);
    put(out, "notifications.border", &ctx.hierarchy.overlay);
    put(out, "notificationLink.foreground", &ctx.ext.link);
    put(out, "notificationsErrorIcon.foreground", &ctx.p[1]);
    put(out, "notificationsWarningIcon.foreground", &ctx.p[3]);
    put(out, "notificationsInfoIcon.foreground", &ctx.p[4]);

    put(out, "banner.background", &ctx.hierarchy.elevated);
    put(out, "banner.foreground", &ctx.fg);
    put(out, "banner.iconForeground", &ctx.p[4]);
}

fn extensions_and_pickers(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "extensionButton.background", &ctx.p[4]);
    put(out, "extensionButton.foreground", contrast_text(&ctx.p[4]));
    put(out, "extensionButton.hoverBackground", &ctx.ext.blue.light);
    put(out, "extensionButton.separator", with_opacity(contrast_text(&ctx.p[4]), OpacityLevels::BOLD));
    put(out, "extensionButton.prominentBackground", &ctx.p[4]);
    put(out, "extensionButton.prominentForeground", contrast_text(&ctx.p[4]));
    put(out, "extensionButton.prominentHoverBackground", &ctx.ext.blue.light);
    put(out, "extensionBadge.remoteBackground", &ctx.p[4]);
    put(out, "extensionBadge.remoteForeground", contrast_text(&ctx.p[4]));
    put(out, "extensionIcon.starForeground", &ctx.p[3]);
    put(out, "extensionIcon.verifiedForeground", &ctx.p[4]);
    put(out, "extensionIcon.preReleaseForeground", &ctx.ext.orange_warm);
    put(out, "extensionIcon.sponsorForeground", &ctx.p[5]);

    put(out, "pickerGroup.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "pickerGroup.foreground", &ctx.p[4]);
    put(out, "quickInput.background", &ctx.widget_bg);
    put(out, "quickInput.foreground", &ctx.fg);
    put(out, "quickInputList.focusBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "quickInputList.focusForeground", &ctx.fg);
    put(out, "quickInputList.focusIconForeground", &ctx.fg);
    put(out, "quickInputTitle.background", &ctx.hierarchy.overlay);

    put(out, "keybindingLabel.background", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "keybindingLabel.foreground", &ctx.fg);
    put(out, "keybindingLabel.border", with_opacity(&ctx.fg, OpacityLevels::MILD));
    put(out, "keybindingLabel.bottomBorder", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
    put(out, "keybindingTable.headerBackground", &ctx.hierarchy.depth);
    put(out, "keybindingTable.rowsBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));

    put(out, "badge.background", &ctx.p[4]);
    put(out, "badge.foreground", contrast_text(&ctx.p[4]));
    put(out, "progressBar.background", &ctx.p[4]);
    put(out, "profileBadge.background", &ctx.hierarchy.interactive);
    put(out, "profileBadge.foreground", &ctx.fg);
}

fn terminal_colors(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "terminal.background", &ctx.editor_bg);
    put(out, "terminal.foreground", &ctx.fg);
    put(out, "terminal.ansiBlack", &ctx.p[0]);
    put(out, "terminal.ansiRed", &ctx.p[1]);
    put(out, "terminal.ansiGreen", &ctx.p[2]);
    put(out, "terminal.ansiYellow", &ctx.p[3]);
    put(out, "terminal.ansiBlue", &ctx.p[4]);
    put(out, "terminal.ansiMagenta", &ctx.p[5]);
    put(out, "terminal.ansiCyan", &ctx.p[6]);
    put(out, "terminal.ansiWhite", &ctx.p[7]);
    put(out, "terminal.ansiBrightBlack", &ctx.p[8]);
    put(out, "terminal.ansiBrightRed", &ctx.p[9]);
    put(out, "terminal.ansiBrightGreen", &ctx.p[10]);
    put(out, "terminal.ansiBrightYellow", &ctx.p[11]);
    put(out, "terminal.ansiBrightBlue", &ctx.p[12]);
    put(out, "terminal.ansiBrightMagenta", &ctx.p[13]);
    put(out, "terminal.ansiBrightCyan", &ctx.p[14]);
    put(out, "terminal.ansiBrightWhite", &ctx.p[15]);
    put(out, "terminal.border", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "terminal.selectionBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "terminal.selectionForeground", &ctx.fg);
    put(out, "terminal.inactiveSelectionBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "terminal.findMatchBackground", with_opacity(&ctx.p[3], OpacitySemantics::FIND_MATCH));
    put(out, "terminal.findMatchBorder", TRANSPARENT);
    put(out, "terminal.findMatchHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "terminal.findMatchHighlightBorder", TRANSPARENT);
    put(out, "terminal.hoverHighlightBackground", with_opacity(&ctx.p[4], OpacitySemantics::HOVER));
    put(out, "terminal.dropBackground", with_opacity(&ctx.p[4], OpacityLevels::GENTLE));
    put(out, "terminal.tab.activeBorder", &ctx.p[4]);
    put(out, "terminal.initialHintForeground", &ctx.p[8]);
    put(out, "terminalCursor.foreground", &ctx.cursor);
    put(out, "terminalCursor.background", &ctx.editor_bg);
    put(out, "terminalCommandDecoration.defaultBackground", &ctx.p[8]);
    put(out, "terminalCommandDecoration.successBackground", &ctx.p[2]);
    put(out, "terminalCommandDecoration.errorBackground", &ctx.p[1]);
    put(out, "terminalOverviewRuler.cursorForeground", &ctx.cursor);
    put(out, "terminalOverviewRuler.findMatchForeground", with_opacity(&ctx.p[3], OpacityLevels::HEAVY));
    put(out, "terminalStickyScroll.background", &ctx.editor_bg);
    put(out, "terminalStickyScrollHover.background", &ctx.hierarchy.surface);
}

fn debug_colors(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "debugToolBar.background", &ctx.hierarchy.elevated);
    put(out, "debugToolBar.border", TRANSPARENT);
    put(out, "debugIcon.breakpointForeground", &ctx.p[1]);
    put(out, "debugIcon.breakpointDisabledForeground", &ctx.p[8]);
    put(out, "debugIcon.breakpointUnverifiedForeground", &ctx.ext.red.muted);
    put(out, "debugIcon.breakpointCurrentStackframeForeground", &ctx.p[3]);
    put(out, "debugIcon.breakpointStackframeForeground", &ctx.p[2]);
    put(out, "debugIcon.startForeground", &ctx.p[2]);
    put(out, "debugIcon.pauseForeground", &ctx.p[3]);
    put(out, "debugIcon.stopForeground", &ctx.p[1]);
    put(out, "debugIcon.disconnectForeground", &ctx.p[1]);
    put(out, "debugIcon.restartForeground", &ctx.p[2]);
    put(out, "debugIcon.stepOverForeground", &ctx.p[4]);
    put(out, "debugIcon.stepIntoForeground", &ctx.p[4]);
    put(out, "debugIcon.stepOutForeground", &ctx.p[4]);
    put(out, "debugIcon.continueForeground", &ctx.p[2]);
    put(out, "debugIcon.stepBackForeground", &ctx.p[4]);
    put(out, "debugConsole.infoForeground", &ctx.p[4]);
    put(out, "debugConsole.warningForeground", &ctx.p[3]);
    put(out, "debugConsole.errorForeground", &ctx.p[1]);
    put(out, "debugConsole.sourceForeground", &ctx.fg);
    put(out, "debugConsoleInputIcon.foreground", &ctx.p[6]);
    put(out, "debugTokenExpression.name", &ctx.p[4]);
    put(out, "debugTokenExpression.value", &ctx.fg);
    put(out, "debugTokenExpression.string", &ctx.p[1]);
    put(out, "debugTokenExpression.boolean", &ctx.p[9]);
    put(out, "debugTokenExpression.number", &ctx.p[9]);
    put(out, "debugTokenExpression.error", &ctx.p[1]);
    put(out, "debugView.exceptionLabelForeground", contrast_text(&ctx.p[1]));
    put(out, "debugView.exceptionLabelBackground", &ctx.p[1]);
    put(out, "debugView.stateLabelForeground", &ctx.fg);
    put(out, "debugView.stateLabelBackground", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "debugView.valueChangedHighlight", &ctx.p[3]);
}

fn testing_colors(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "testing.iconPassed", &ctx.p[2]);
    put(out, "testing.iconFailed", &ctx.p[1]);
    put(out, "testing.iconErrored", &ctx.p[9]);
    put(out, "testing.iconQueued", &ctx.p[3]);
    put(out, "testing.iconUnset", &ctx.p[8]);
    put(out, "testing.iconSkipped", &ctx.p[8]);
    put(out, "testing.runAction", &ctx.p[2]);
    put(out, "testing.peekBorder", &ctx.p[1]);
    put(out, "testing.peekHeaderBackground", with_opacity(&ctx.p[1], OpacityLevels::SOFT));
    put(out, "testing.message.error.decorationForeground", &ctx.p[1]);
    put(out, "testing.message.error.lineBackground", with_opacity(&ctx.p[1], OpacityLevels::LIGHT));
    put(out, "testing.message.info.decorationForeground", &ctx.p[4]);
    put(out, "testing.message.info.lineBackground", with_opacity(&ctx.p[4], OpacityLevels::LIGHT));
}

fn git_and_settings(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "gitDecoration.addedResourceForeground", &ctx.p[2]);
    put(out, "gitDecoration.modifiedResourceForeground", &ctx.p[3]);
    put(out, "gitDecoration.deletedResourceForeground", &ctx.p[1]);
    put(out, "gitDecoration.renamedResourceForeground", &ctx.p[6]);
    put(out, "gitDecoration.stageModifiedResourceForeground", &ctx.p[3]);
    put(out, "gitDecoration.stageDeletedResourceForeground", &ctx.p[1]);
    put(out, "gitDecoration.untrackedResourceForeground", &ctx.ext.green.light);
    put(out, "gitDecoration.ignoredResourceForeground", &ctx.p[8]);
    put(out, "gitDecoration.conflictingResourceForeground", &ctx.ext.orange_warm);
    put(out, "gitDecoration.submoduleResourceForeground", &ctx.p[4]);

    put(out, "settings.headerForeground", &ctx.fg);
    put(out, "settings.settingsHeaderHoverForeground", &ctx.ext.blue.light);
    put(out, "settings.modifiedItemIndicator", &ctx.p[4]);
    put(out, "settings.headerBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "settings.sashBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "settings.dropdownBackground", &ctx.input_bg);
    put(out, "settings.dropdownForeground", &ctx.fg);
    put(out, "settings.dropdownBorder", TRANSPARENT);
    put(out, "settings.dropdownListBorder", with_opacity(&ctx.fg, OpacityLevels::GENTLE));
    put(out, "settings.checkboxBackground", &ctx.input_bg);
    put(out, "settings.checkboxForeground", &ctx.fg);
    put(out, "settings.checkboxBorder", with_opacity(&ctx.fg, OpacityLevels::MODERATE));
    put(out, "settings.rowHoverBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));
    put(out, "settings.textInputBackground", &ctx.input_bg);
    put(out, "settings.textInputForeground", &ctx.fg);
    put(out, "settings.textInputBorder", TRANSPARENT);
    put(out, "settings.numberInputBackground", &ctx.input_bg);
    put(out, "settings.numberInputForeground", &ctx.fg);
    put(out, "settings.numberInputBorder", TRANSPARENT);
    put(out, "settings.focusedRowBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));
    put(out, "settings.focusedRowBorder", &ctx.p[4]);

    put(out, "breadcrumb.foreground", &ctx.p[8]);
    put(out, "breadcrumb.background", &ctx.editor_bg);
    put(out, "breadcrumb.focusForeground", &ctx.fg);
    put(out, "breadcrumb.activeSelectionForeground", &ctx.fg);
    put(out, "breadcrumbPicker.background", &ctx.widget_bg);
}

fn symbols_and_charts(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "symbolIcon.arrayForeground", &ctx.fg);
    put(out, "symbolIcon.booleanForeground", &ctx.p[9]);
    put(out, "symbolIcon.classForeground", &ctx.p[3]);
    put(out, "symbolIcon.colorForeground", &ctx.p[6]);
    put(out, "symbolIcon.constantForeground", &ctx.p[9]);
    put(out, "symbolIcon.constructorForeground", &ctx.p[5]);
    put(out, "symbolIcon.enumeratorForeground", &ctx.p[3]);
    put(out, "symbolIcon.enumeratorMemberForeground", &ctx.ext.enum_member);
    put(out, "symbolIcon.eventForeground", &ctx.p[3]);
    put(out, "symbolIcon.fieldForeground", &ctx.p[4]);
    put(out, "symbolIcon.fileForeground", &ctx.fg);
    put(out, "symbolIcon.folderForeground", &ctx.fg);
    put(out, "symbolIcon.functionForeground", &ctx.p[12]);
    put(out, "symbolIcon.interfaceForeground", &ctx.p[4]);
    put(out, "symbolIcon.keyForeground", &ctx.p[4]);
    put(out, "symbolIcon.keywordForeground", &ctx.p[10]);
    put(out, "symbolIcon.methodForeground", &ctx.p[12]);
    put(out, "symbolIcon.moduleForeground", &ctx.ext.namespace);
    put(out, "symbolIcon.namespaceForeground", &ctx.ext.namespace);
    put(out, "symbolIcon.nullForeground", &ctx.p[9]);
    put(out, "symbolIcon.numberForeground", &ctx.p[9]);
    put(out, "symbolIcon.objectForeground", &ctx.p[3]);
    put(out, "symbolIcon.operatorForeground", &ctx.p[6]);
    put(out, "symbolIcon.packageForeground", &ctx.ext.namespace);
    put(out, "symbolIcon.propertyForeground", &ctx.p[4]);
    put(out, "symbolIcon.referenceForeground", &ctx.p[4]);
    put(out, "symbolIcon.snippetForeground", &ctx.fg);
    put(out, "symbolIcon.stringForeground", &ctx.p[1]);
    put(out, "symbolIcon.structForeground", &ctx.p[3]);
    put(out, "symbolIcon.textForeground", &ctx.fg);
    put(out, "symbolIcon.typeParameterForeground", &ctx.ext.type_annotation);
    put(out, "symbolIcon.unitForeground", &ctx.p[9]);
    put(out, "symbolIcon.variableForeground", &ctx.fg);

    put(out, "charts.foreground", &ctx.fg);
    put(out, "charts.lines", &ctx.p[8]);
    put(out, "charts.red", &ctx.p[1]);
    put(out, "charts.blue", &ctx.p[4]);
    put(out, "charts.yellow", &ctx.p[3]);
    put(out, "charts.orange", &ctx.ext.orange_warm);
    put(out, "charts.green", &ctx.p[2]);
    put(out, "charts.purple", &ctx.p[5]);
}

fn notebook_colors(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "notebook.editorBackground", &ctx.editor_bg);
    put(out, "notebook.cellBorderColor", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "notebook.cellHoverBackground", with_opacity(&ctx.fg, OpacityLevels::FAINT));
    put(out, "notebook.cellInsertionIndicator", &ctx.p[4]);
    put(out, "notebook.cellStatusBarItemHoverBackground", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "notebook.cellToolbarSeparator", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "notebook.cellEditorBackground", &ctx.hierarchy.surface);
    put(out, "notebook.focusedCellBackground", TRANSPARENT);
    put(out, "notebook.focusedCellBorder", &ctx.p[4]);
    put(out, "notebook.focusedEditorBorder", &ctx.p[4]);
    put(out, "notebook.inactiveFocusedCellBorder", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "notebook.outputContainerBackgroundColor", &ctx.hierarchy.surface);
    put(out, "notebook.outputContainerBorderColor", TRANSPARENT);
    put(out, "notebook.selectedCellBackground", with_opacity(&ctx.p[4], OpacityLevels::LIGHT));
    put(out, "notebook.selectedCellBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "notebook.symbolHighlightBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "notebookScrollbarSlider.background", with_opacity(&ctx.p[8], OpacityLevels::MEDIUM));
    put(out, "notebookScrollbarSlider.hoverBackground", with_opacity(&ctx.p[8], OpacityLevels::STRONG));
    put(out, "notebookScrollbarSlider.activeBackground", with_opacity(&ctx.p[8], OpacityLevels::HEAVY));
    put(out, "notebookStatusErrorIcon.foreground", &ctx.p[1]);
    put(out, "notebookStatusRunningIcon.foreground", &ctx.p[4]);
    put(out, "notebookStatusSuccessIcon.foreground", &ctx.p[2]);
    put(out, "notebookEditorOverviewRuler.runningCellForeground", &ctx.p[4]);
}

fn misc_chrome(ctx: &Ctx, out: &mut VSCodeThemeColors) {
    put(out, "scrollbar.shadow", with_opacity(&ctx.hierarchy.void, OpacityLevels::HEAVY));
    put(out, "scrollbarSlider.background", with_opacity(&ctx.p[8], OpacityLevels::MEDIUM));
    put(out, "scrollbarSlider.hoverBackground", with_opacity(&ctx.p[8], OpacityLevels::STRONG));
    put(out, "scrollbarSlider.activeBackground", with_opacity(&ctx.p[8], OpacityLevels::HEAVY));

    put(out, "minimap.background", &ctx.editor_bg);
    put(out, "minimap.findMatchHighlight", with_opacity(&ctx.p[3], OpacitySemantics::FIND_MATCH));
    put(out, "minimap.selectionHighlight", with_opacity(&ctx.p[4], OpacitySemantics::SELECTION));
    put(out, "minimap.selectionOccurrenceHighlight", with_opacity(&ctx.p[4], OpacitySemantics::HIGHLIGHT));
    put(out, "minimap.errorHighlight", with_opacity(&ctx.p[1], OpacityLevels::BOLD));
    put(out, "minimap.warningHighlight", with_opacity(&ctx.p[3], OpacityLevels::BOLD));
    put(out, "minimap.infoHighlight", with_opacity(&ctx.p[4], OpacityLevels::BOLD));
    put(out, "minimapSlider.background", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "minimapSlider.hoverBackground", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "minimapSlider.activeBackground", with_opacity(&ctx.fg, OpacityLevels::SOFT));
    put(out, "minimapGutter.addedBackground", &ctx.ext.diff_added);
    put(out, "minimapGutter.modifiedBackground", &ctx.ext.diff_modified);
    put(out, "minimapGutter.deletedBackground", &ctx.ext.diff_removed);

    put(out, "search.resultsInfoForeground", &ctx.p[8]);
    put(out, "searchEditor.findMatchBackground", with_opacity(&ctx.p[3], OpacitySemantics::HIGHLIGHT));
    put(out, "searchEditor.findMatchBorder", TRANSPARENT);
    put(out, "searchEditor.textInputBorder", TRANSPARENT);

    put(out, "welcomePage.background", &ctx.editor_bg);
    put(out, "welcomePage.progress.background", &ctx.hierarchy.surface);
    put(out, "welcomePage.progress.foreground", &ctx.p[4]);
    put(out, "welcomePage.tileBackground", &ctx.hierarchy.surface);
    put(out, "welcomePage.tileHoverBackground", &ctx.hierarchy.overlay);
    put(out, "welcomePage.tileBorder", with_opacity(&ctx.fg, OpacityLevels::LIGHT));
    put(out, "walkThrough.embeddedEditorBackground", &ctx.hierarchy.surface);
    put(out, "walkthrough.stepTitle.foreground", &ctx.fg);

    put(out, "toolbar.hoverBackground", with_opacity(&ctx.fg, OpacityLevels::SUBTLE));
    put(out, "toolbar.hoverOutline", TRANSPARENT);
    put(out, "toolbar.activeBackground", with_opacity(&ctx.fg, OpacityLevels::LIGHT));

    put(out, "window.activeBorder", TRANSPARENT);
    put(out, "window.inactiveBorder", TRANSPARENT);
    put(out, "ports.iconRunningProcessForeground", &ctx.p[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    use regex::Regex;

    static COLOR_VALUE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}([0-9a-f]{2})?$").unwrap());

    fn sample_set() -> GhosttyColorSet {
        let mut set = GhosttyColorSet {
            background: Some("#1a1a1a".into()),
            foreground: Some("#e0e0e0".into()),
            ..Default::default()
        };
        set.palette.insert(0, "#000000".into());
        set.palette.insert(1, "#ff0000".into());
        set
    }

    #[test]
    fn emits_the_full_key_set() {
        let colors = build_workbench_colors(&sample_set());
        assert!(
            colors.len() >= 600,
            "expected the full workbench map, got {} keys",
            colors.len()
        );
    }

    #[test]
    fn every_value_is_hex_or_hex_alpha() {
        let colors = build_workbench_colors(&sample_set());
        for (key, value) in &colors {
            assert!(COLOR_VALUE.is_match(value), "{key} has bad value {value}");
        }
    }

    #[test]
    fn editor_takes_palette_black_and_chrome_takes_background() {
        let colors = build_workbench_colors(&sample_set());
        assert_eq!(colors["editor.background"], "#000000");
        assert_eq!(colors["activityBar.background"], "#1a1a1a");
        assert_eq!(colors["sideBar.background"], "#1a1a1a");
        assert_eq!(colors["statusBar.background"], "#1a1a1a");
        assert_eq!(colors["titleBar.activeBackground"], "#1a1a1a");
    }

    #[test]
    fn widget_and_input_surfaces_lift_off_the_editor() {
        let colors = build_workbench_colors(&sample_set());
        assert_eq!(colors["editorWidget.background"], lighten("#000000", WIDGET_LIFT));
        assert_eq!(colors["input.background"], lighten("#000000", INPUT_LIFT));
        assert_ne!(colors["editorWidget.background"], colors["input.background"]);
    }

    #[test]
    fn accent_overlay_wins_over_section_defaults() {
        // Red is the most saturated primary candidate, so the accent system
        // must own the selection background.
        let colors = build_workbench_colors(&sample_set());
        assert_eq!(colors["editor.selectionBackground"], "#ff000040");
        assert_eq!(colors["focusBorder"], "#ff0000");
    }

    #[test]
    fn terminal_palette_maps_slot_for_slot() {
        let colors = build_workbench_colors(&sample_set());
        assert_eq!(colors["terminal.ansiBlack"], "#000000");
        assert_eq!(colors["terminal.ansiRed"], "#ff0000");
        assert_eq!(
            colors["terminal.ansiBrightWhite"],
            crate::defaults::DEFAULT_PALETTE[15]
        );
    }

    #[test]
    fn output_is_deterministic() {
        let set = sample_set();
        let a = build_workbench_colors(&set);
        let b = build_workbench_colors(&set);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
