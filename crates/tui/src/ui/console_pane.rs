//! Console Pane Widget
//!
//! Displays the shell console:
//! - Display log of typed lines (system, command, info, success, error)
//! - Current input line with cursor

use qpos_core::{Category, Response};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Display log lines kept before the oldest are dropped
pub const MAX_LOG_LINES: usize = 500;

pub const PROMPT: &str = "qpos> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    System,
    Command,
    Info,
    Success,
    Error,
}

impl LogKind {
    fn style(self) -> Style {
        match self {
            LogKind::System => Style::default().fg(Color::Magenta),
            LogKind::Command => Style::default().fg(Color::Green),
            LogKind::Info => Style::default().fg(Color::Cyan),
            LogKind::Success => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            LogKind::Error => Style::default().fg(Color::Red),
        }
    }
}

impl From<Category> for LogKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Info => LogKind::Info,
            Category::Success => LogKind::Success,
            Category::Error => LogKind::Error,
        }
    }
}

/// A single display log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The console pane state
///
/// `cursor` is a byte offset into `input` and always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub log: Vec<LogLine>,
    pub input: String,
    pub cursor: usize,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.log.push(LogLine::new(kind, text));
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(..excess);
        }
    }

    /// Echo a submitted line
    pub fn push_command(&mut self, line: &str) {
        self.push(LogKind::Command, format!("> {}", line));
    }

    pub fn push_response(&mut self, response: &Response) {
        self.push(response.category.into(), response.text.clone());
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Replace the input (history recall), cursor at the end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.input.len();
    }

    /// Take the input, leaving an empty line
    pub fn take_input(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.input.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(ch) = self.input[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

/// The console pane widget
pub struct ConsolePane<'a> {
    state: &'a ConsoleState,
    focused: bool,
    dimmed: bool,
    accent: Color,
}

impl<'a> ConsolePane<'a> {
    pub fn new(state: &'a ConsoleState) -> Self {
        Self {
            state,
            focused: true,
            dimmed: false,
            accent: Color::Cyan,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Recruiter mode pushes the console into the background
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = self
            .state
            .log
            .iter()
            .map(|entry| Line::from(Span::styled(entry.text.clone(), entry.kind.style())))
            .collect();

        let mut input_spans = vec![Span::styled(
            PROMPT.to_string(),
            Style::default().fg(self.accent),
        )];

        if self.focused {
            let (before, after) = self.state.input.split_at(self.state.cursor);
            if !before.is_empty() {
                input_spans.push(Span::raw(before.to_string()));
            }

            // Block cursor over the next character, or a space at the end
            let cursor_len = after.chars().next().map_or(0, char::len_utf8);
            let cursor_char = if after.is_empty() {
                " "
            } else {
                &after[..cursor_len]
            };
            input_spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));

            if after.len() > cursor_len {
                input_spans.push(Span::raw(after[cursor_len..].to_string()));
            }
        } else {
            input_spans.push(Span::raw(self.state.input.clone()));
        }

        lines.push(Line::from(input_spans));
        lines
    }
}

/// Split a line into rows of at most `width` characters, keeping span styles
fn wrap_line(line: Line<'_>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in line.spans {
        let mut piece = String::new();
        for ch in span.content.chars() {
            if used == width {
                if !piece.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut piece), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            piece.push(ch);
            used += 1;
        }
        if !piece.is_empty() {
            row.push(Span::styled(piece, span.style));
        }
    }
    rows.push(Line::from(row));
    rows
}

impl Widget for &ConsolePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title(" CONSOLE ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.max(1) as usize;
        let rows: Vec<Line<'static>> = self
            .build_lines()
            .into_iter()
            .flat_map(|line| wrap_line(line, width))
            .collect();

        // Auto-scroll by wrapped rows so the input line stays at the bottom
        let visible_height = inner.height as usize;
        let skip = rows.len().saturating_sub(visible_height);
        let visible: Vec<Line<'static>> = rows.into_iter().skip(skip).collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
