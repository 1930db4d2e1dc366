//! Rendering for command output.

use std::io::IsTerminal;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;

use finvault_core::score::{ScoreBand, ScoreHistoryPoint};

/// Terminal facts that decide how output is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    pub color: bool,
    pub unicode: bool,
}

impl Terminal {
    /// Color only on a TTY, and never with `NO_COLOR` set or `TERM=dumb`.
    pub fn detect() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }
}

fn format_change(change: i32, color: bool) -> String {
    let text = if change > 0 {
        format!("+{}", change)
    } else {
        change.to_string()
    };
    if !color {
        return text;
    }
    match change.signum() {
        1 => text.green().to_string(),
        -1 => text.red().to_string(),
        _ => text.dimmed().to_string(),
    }
}

/// Score history as a bordered table.
pub fn history_table(term: Terminal, points: &[ScoreHistoryPoint]) -> String {
    let mut table = Table::new();
    if term.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Month", "Score", "Change", "Band"]);

    for point in points {
        table.add_row(vec![
            Cell::new(point.date.format("%Y-%m")),
            Cell::new(point.score).set_alignment(CellAlignment::Right),
            Cell::new(format_change(point.change, term.color))
                .set_alignment(CellAlignment::Right),
            Cell::new(ScoreBand::from_score(point.score).label()),
        ]);
    }

    table.to_string()
}

/// One-line summary printed under the table.
pub fn history_summary(points: &[ScoreHistoryPoint]) -> Option<String> {
    let first = points.first()?;
    let last = points.last()?;
    let delta = i32::from(last.score) - i32::from(first.score);
    Some(format!(
        "{} months: {} -> {} ({})",
        points.len(),
        first.score,
        last.score,
        format_change(delta, false)
    ))
}

pub fn history_json(points: &[ScoreHistoryPoint]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(month: u32, score: u16, change: i32) -> ScoreHistoryPoint {
        ScoreHistoryPoint {
            date: NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
            score,
            change,
        }
    }

    #[test]
    fn test_format_change_plain() {
        assert_eq!(format_change(12, false), "+12");
        assert_eq!(format_change(-7, false), "-7");
        assert_eq!(format_change(0, false), "0");
    }

    #[test]
    fn test_history_table_plain() {
        let points = vec![point(1, 700, 0), point(2, 712, 12)];
        let rendered = history_table(Terminal::plain(), &points);
        assert!(rendered.contains("Month"));
        assert!(rendered.contains("2026-02"));
        assert!(rendered.contains("+12"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_history_summary() {
        let points = vec![point(1, 700, 0), point(2, 690, -10), point(3, 712, 22)];
        assert_eq!(
            history_summary(&points).unwrap(),
            "3 months: 700 -> 712 (+12)"
        );
        assert!(history_summary(&[]).is_none());
    }

    #[test]
    fn test_history_json_shape() {
        let json = history_json(&[point(3, 640, 0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"], "2026-03-01");
        assert_eq!(value[0]["score"], 640);
        assert_eq!(value[0]["change"], 0);
    }
}
