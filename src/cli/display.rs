// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for rendered responses.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `GLINT_THEME` ("dark" or "light"), then `COLORFGBG`, then defaults to dark.
//! Highlighted segments are drawn bold in the accent color; short answers are
//! bold. `NO_COLOR` and non-TTY stdout turn all of it off, leaving plain text
//! with `[` `]` around highlights so pipelines still see them.
//!
//! Rows have a left rule only. Result text is often CJK, and double-width
//! glyphs make a closed right border misalign.

use std::sync::OnceLock;

use glint::{Card, Heading, Panel, Rendered, Span};

/// Width of section rules.
pub const RULE_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("GLINT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

#[derive(Clone, Copy)]
enum Role {
    Accent,
    Heading,
    Link,
    Muted,
}

fn role_color(role: Role) -> String {
    let rgb_value = match (theme(), role) {
        (Theme::Dark, Role::Accent) => (229, 192, 123),  // #e5c07b
        (Theme::Dark, Role::Heading) => (152, 195, 121), // #98c379
        (Theme::Dark, Role::Link) => (97, 175, 239),     // #61afef
        (Theme::Dark, Role::Muted) => (92, 99, 112),     // #5c6370
        (Theme::Light, Role::Accent) => (193, 132, 1),   // #c18401
        (Theme::Light, Role::Heading) => (80, 161, 79),  // #50a14f
        (Theme::Light, Role::Link) => (64, 120, 242),    // #4078f2
        (Theme::Light, Role::Muted) => (160, 161, 167),  // #a0a1a7
    };
    rgb(rgb_value)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(role: Role, bold: bool, text: &str, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, role_color(role), text, RESET)
}

/// Draw spans with highlights emphasised.
pub fn paint_spans(spans: &[Span], colors: bool) -> String {
    spans
        .iter()
        .map(|span| match (span.highlighted, colors) {
            (false, _) => span.text.clone(),
            (true, true) => paint(Role::Accent, true, &span.text, true),
            (true, false) => format!("[{}]", span.text),
        })
        .collect()
}

fn heading_text(heading: &Heading, colors: bool) -> String {
    match heading {
        Heading::Highlighted(spans) => paint_spans(spans, colors),
        Heading::Strong(text) if colors => format!("{}{}{}", BOLD, text, RESET),
        Heading::Strong(text) => text.clone(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ─────────
fn section_top(out: &mut String, label: &str, colors: bool) {
    let rule_len = RULE_WIDTH.saturating_sub(label.chars().count() + 3);
    out.push_str(&paint(Role::Muted, false, "┌─ ", colors));
    out.push_str(&paint(Role::Heading, true, label, colors));
    out.push(' ');
    out.push_str(&paint(Role::Muted, false, &"─".repeat(rule_len), colors));
    out.push('\n');
}

fn row(out: &mut String, content: &str, colors: bool) {
    if content.is_empty() {
        out.push_str(&paint(Role::Muted, false, "│", colors));
        out.push('\n');
        return;
    }
    for line in content.lines() {
        out.push_str(&paint(Role::Muted, false, "│ ", colors));
        out.push_str(line);
        out.push('\n');
    }
}

fn section_bot(out: &mut String, colors: bool) {
    out.push_str(&paint(Role::Muted, false, &format!("└{}", "─".repeat(RULE_WIDTH)), colors));
    out.push('\n');
}

fn card(out: &mut String, card: &Card, colors: bool) {
    if let Some(tab) = &card.tab {
        row(out, &paint(Role::Muted, false, tab, colors), colors);
    }
    row(out, &heading_text(&card.heading, colors), colors);
    if let Some(link) = &card.link {
        row(out, &paint(Role::Link, false, link, colors), colors);
    }
    row(out, &paint_spans(&card.body, colors), colors);
    if card.ratings {
        let id = if card.result_id.is_empty() { "-" } else { &card.result_id };
        row(out, &paint(Role::Muted, false, &format!("👍 👎  {}", id), colors), colors);
    }
}

fn panel(out: &mut String, panel: &Panel, colors: bool) {
    section_top(out, panel.bucket.as_str(), colors);
    for (idx, c) in panel.cards.iter().enumerate() {
        if idx > 0 {
            row(out, "", colors);
        }
        card(out, c, colors);
    }
    section_bot(out, colors);
}

/// Format a rendered response for the terminal.
pub fn format_rendered(rendered: &Rendered, colors: bool) -> String {
    let mut out = String::new();
    for p in rendered.panels() {
        panel(&mut out, p, colors);
    }

    section_top(&mut out, &rendered.documents.heading, colors);
    if let Some(placeholder) = &rendered.documents.placeholder {
        row(&mut out, placeholder, colors);
    }
    for (idx, c) in rendered.documents.cards.iter().enumerate() {
        if idx > 0 {
            row(&mut out, "", colors);
        }
        card(&mut out, c, colors);
    }
    section_bot(&mut out, colors);
    out
}
