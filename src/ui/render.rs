use crate::locale::Texts;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::scale::scale_lines;
use crate::ui::theme::{
    category_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR,
};
use crate::ui::view::{FormView, ResultView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const FORM_WIDTH: u16 = 64;
const FIELD_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
const HINT_HEIGHT: u16 = 2;
/// Rows the result region uses when nothing has to be squeezed.
const RESULT_FULL_HEIGHT: u16 = 9;

/// Row budget of the result region, filled by [`result_rows`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultRows {
    pub spacer: u16,
    /// Scale rows, see [`scale_lines`].
    pub scale: u16,
    pub value: u16,
    pub label: u16,
    pub tip: u16,
}

/// Splits `available` rows over the result region.
///
/// The category label and the marker get a row first, then the value,
/// the band track and the tip. Tick labels, the value above the marker
/// and the spacer only appear when rows are left.
pub fn result_rows(available: u16) -> ResultRows {
    let mut rows = ResultRows::default();
    let mut left = available;
    let mut grant = |slot: &mut u16| {
        if left > 0 {
            *slot += 1;
            left -= 1;
        }
    };
    grant(&mut rows.label);
    grant(&mut rows.scale);
    grant(&mut rows.value);
    grant(&mut rows.scale);
    grant(&mut rows.tip);
    grant(&mut rows.tip);
    grant(&mut rows.scale);
    grant(&mut rows.scale);
    grant(&mut rows.spacer);
    rows.tip += left;
    rows
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let texts = app.locale().texts();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(texts.heading, texts.subtitle).widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Footer::new(texts.key_hints).widget(footer), footer);

    let view = app.view();
    let error_height = u16::from(view.error.is_some());
    let result_height = if view.result.is_some() { RESULT_FULL_HEIGHT } else { 0 };
    // borders + fields + error + buttons
    let fixed_height = 2 + FIELD_HEIGHT * 2 + error_height + BUTTON_HEIGHT;
    // The hint is the first thing to go on short terminals.
    let hint_height = if fixed_height + HINT_HEIGHT + result_height <= body.height {
        HINT_HEIGHT
    } else {
        0
    };
    let form_height = fixed_height + hint_height + result_height;
    let form_area = centered_rect_by_size(body, FORM_WIDTH, form_height);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", texts.form_title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hint_height),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(error_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    if hint_height > 0 {
        frame.render_widget(
            Paragraph::new(texts.form_hint)
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center),
            rows[0],
        );
    }

    let fields = [
        (
            Focus::Height,
            texts.height_label,
            texts.height_unit,
            texts.height_placeholder,
            view.height.as_str(),
            rows[1],
        ),
        (
            Focus::Weight,
            texts.weight_label,
            texts.weight_unit,
            texts.weight_placeholder,
            view.weight.as_str(),
            rows[2],
        ),
    ];
    for (focus, label, unit, placeholder, value, area) in fields {
        let focused = app.focus() == focus;
        draw_field(frame, area, label, unit, placeholder, value, focused);
    }

    if let Some(error) = view.error {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(STATUS_ERROR))
                .alignment(Alignment::Center),
            rows[3],
        );
    }

    draw_buttons(frame, rows[4], texts, &view, app.focus());

    if let Some(result) = &view.result {
        draw_result(frame, rows[5], texts, result);
    }
}

fn draw_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    unit: &str,
    placeholder: &str,
    value: &str,
    focused: bool,
) {
    let [label_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .areas(area);

    frame.render_widget(
        Paragraph::new(format!("{label} ({unit})"))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        label_area,
    );

    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let content = if value.is_empty() {
        Line::styled(placeholder.to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(value.to_string(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        input_area,
    );

    if focused && input_area.width > 2 && input_area.height > 2 {
        let typed = Line::from(value).width() as u16;
        let x = input_area.x + 1 + typed.min(input_area.width - 3);
        frame.set_cursor_position((x, input_area.y + 1));
    }
}

fn draw_buttons(frame: &mut Frame<'_>, area: Rect, texts: &Texts, view: &FormView, focus: Focus) {
    let [calculate_area, reset_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .areas(area);

    let buttons = [
        (
            texts.calculate,
            Focus::Calculate,
            view.calculate_enabled,
            calculate_area,
        ),
        (texts.reset, Focus::Reset, true, reset_area),
    ];
    for (caption, button, enabled, area) in buttons {
        let mut style = Style::default().fg(HEADER_TEXT);
        if !enabled {
            style = style.fg(MUTED_TEXT).add_modifier(Modifier::DIM);
        }
        if focus == button {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        let border = if focus == button { ACCENT } else { GLOBAL_BORDER };
        frame.render_widget(
            Paragraph::new(caption)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                ),
            area,
        );
    }
}

fn draw_result(frame: &mut Frame<'_>, area: Rect, texts: &Texts, result: &ResultView) {
    let rows = result_rows(area.height);
    let [_, scale_area, value_area, label_area, tip_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.spacer),
            Constraint::Length(rows.scale),
            Constraint::Length(rows.value),
            Constraint::Length(rows.label),
            Constraint::Length(rows.tip),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(scale_lines(
            scale_area.width,
            Some((result.marker, result.value.as_str())),
            rows.scale,
        )),
        scale_area,
    );

    let color = category_color(result.category);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", texts.your_bmi), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                result.value.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center),
        value_area,
    );
    frame.render_widget(
        Paragraph::new(result.label)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(result.tip)
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        tip_area,
    );
}
