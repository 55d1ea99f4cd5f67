//! Boot screen widget

use crate::boot::BootSequence;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};
use std::time::Instant;

pub struct BootScreen<'a> {
    boot: &'a BootSequence,
    now: Instant,
}

impl<'a> BootScreen<'a> {
    pub fn new(boot: &'a BootSequence, now: Instant) -> Self {
        Self { boot, now }
    }

    fn line_style(line: &str) -> Style {
        if line.starts_with("[OK]") || line.starts_with("[DONE]") {
            Style::default().fg(Color::LightGreen)
        } else if line.starts_with('[') {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        }
    }
}

impl Widget for &BootScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" QP-OS BOOT ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = self
            .boot
            .visible_lines(self.now)
            .iter()
            .map(|line| Line::from(Span::styled(*line, BootScreen::line_style(line))))
            .collect();
        Paragraph::new(lines).render(chunks[0], buf);

        let percent = self.boot.progress_percent(self.now);
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent)
            .label(format!("BOOT {}%  ·  press any key", percent))
            .render(chunks[1], buf);
    }
}
