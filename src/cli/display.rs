// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal table output for the cuisinesearch CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `CUISINESEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so piping the
//! table into a file gives plain box-drawn text.

use std::sync::OnceLock;

use cuisinesearch::RestaurantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CUISINESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Cyan,
    Gray,
}

impl Tone {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Tone::Green) => (152, 195, 121),
            (Theme::Dark, Tone::Yellow) => (229, 192, 123),
            (Theme::Dark, Tone::Red) => (224, 108, 117),
            (Theme::Dark, Tone::Cyan) => (86, 182, 194),
            (Theme::Dark, Tone::Gray) => (92, 99, 112),
            (Theme::Light, Tone::Green) => (80, 161, 79),
            (Theme::Light, Tone::Yellow) => (193, 132, 1),
            (Theme::Light, Tone::Red) => (228, 86, 73),
            (Theme::Light, Tone::Cyan) => (1, 132, 188),
            (Theme::Light, Tone::Gray) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(enabled: bool, tone: Option<Tone>, bold: bool, text: &str) -> String {
    if !enabled || (tone.is_none() && !bold) {
        return text.to_string();
    }
    let mut out = String::new();
    if bold {
        out.push_str(BOLD);
    }
    if let Some(tone) = tone {
        out.push_str(&tone.escape());
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn rank_tone(rank: i64) -> Tone {
    match rank {
        i64::MIN..=2 => Tone::Green,
        3..=6 => Tone::Yellow,
        _ => Tone::Red,
    }
}

const HEADERS: [&str; 7] = ["id", "name", "cuisine", "rating", "distance", "price", "rank"];

/// Render records as a box-drawn table. `show_rank` hides the rank column for
/// unranked listings.
pub fn render_table(records: &[RestaurantRecord], show_rank: bool, colors: bool) -> String {
    let columns = if show_rank { HEADERS.len() } else { HEADERS.len() - 1 };

    let cells: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.id.to_string(),
                paint(colors, None, true, &r.name),
                paint(colors, Some(Tone::Cyan), false, &r.cuisine_name),
                r.rating.to_string(),
                r.distance.to_string(),
                r.price.to_string(),
            ];
            if show_rank {
                row.push(paint(colors, Some(rank_tone(r.rank)), false, &r.rank.to_string()));
            }
            row
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            cells
                .iter()
                .map(|row| visible_len(&row[c]))
                .chain(std::iter::once(HEADERS[c].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let line = widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect::<Vec<_>>()
            .join(mid);
        paint(colors, Some(Tone::Gray), false, &format!("{}{}{}", left, line, right))
    };
    let bar = paint(colors, Some(Tone::Gray), false, "│");
    let line = |row: &[String]| {
        let body = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - visible_len(cell))))
            .collect::<Vec<_>>()
            .join(bar.as_str());
        format!("{}{}{}", bar, body, bar)
    };

    let header: Vec<String> = HEADERS[..columns]
        .iter()
        .map(|h| paint(colors, None, true, h))
        .collect();

    let mut out = Vec::with_capacity(cells.len() + 4);
    out.push(border("┌", "┬", "┐"));
    out.push(line(header.as_slice()));
    out.push(border("├", "┼", "┤"));
    out.extend(cells.iter().map(|row| line(row.as_slice())));
    out.push(border("└", "┴", "┘"));
    out.join("\n")
}
