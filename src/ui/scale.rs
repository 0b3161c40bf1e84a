//! The 0..40 BMI scale: coloured bands, a marker and tick labels.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::bmi::{Category, SCALE_MAX};
use crate::ui::theme::{category_color, HEADER_TEXT, MUTED_TEXT};

const TICKS: [u8; 4] = [15, 25, 30, 40];

/// Column of the marker on a track `width` cells wide.
pub fn marker_column(marker: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = f64::from(width - 1);
    (marker.clamp(0.0, 1.0) * last).round() as u16
}

/// Rows of the scale: value label, marker, band track and tick labels.
/// Label and marker rows are blank while there is nothing to point at.
///
/// With fewer than four `rows` the scale shrinks to marker, then track,
/// then ticks, in that order of importance.
pub fn scale_lines(width: u16, marker: Option<(f64, &str)>, rows: u16) -> Vec<Line<'static>> {
    let cells = usize::from(width);
    let mut lines = Vec::with_capacity(4);

    match marker {
        Some((position, value)) => {
            let column = usize::from(marker_column(position, width));
            let label_len = value.chars().count();
            let label_start = column
                .saturating_sub(label_len / 2)
                .min(cells.saturating_sub(label_len));
            let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(label_start)),
                Span::styled(value.to_string(), label_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(column)),
                Span::styled("▼", Style::default().fg(HEADER_TEXT)),
            ]));
        }
        None => {
            lines.push(Line::default());
            lines.push(Line::default());
        }
    }

    let track: Vec<Span<'static>> = (0..cells)
        .map(|cell| {
            let bmi = (cell as f64 + 0.5) / cells as f64 * SCALE_MAX;
            Span::styled("█", Style::default().fg(category_color(Category::classify(bmi))))
        })
        .collect();
    lines.push(Line::from(track));

    lines.push(Line::styled(tick_row(width), Style::default().fg(MUTED_TEXT)));

    // [value label, marker, track, ticks]
    match rows {
        0 => Vec::new(),
        1 => lines.drain(1..2).collect(),
        2 => lines.drain(1..3).collect(),
        3 => lines.drain(1..).collect(),
        _ => lines,
    }
}

fn tick_row(width: u16) -> String {
    let cells = usize::from(width);
    let mut row = vec![' '; cells];
    for tick in TICKS {
        let label = tick.to_string();
        let column = usize::from(marker_column(f64::from(tick) / SCALE_MAX, width));
        let start = column.min(cells.saturating_sub(label.len()));
        for (offset, ch) in label.chars().enumerate() {
            if let Some(slot) = row.get_mut(start + offset) {
                *slot = ch;
            }
        }
    }
    row.into_iter().collect()
}
