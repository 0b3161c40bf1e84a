use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    heading: &'static str,
    subtitle: &'static str,
}

impl Header {
    pub fn new(heading: &'static str, subtitle: &'static str) -> Self {
        Self { heading, subtitle }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(
                self.heading,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(self.subtitle, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
