//! Module views
//!
//! Renders the focused module from the content tables, or the home screen
//! when nothing is focused. The skills view switches to the graph overlay
//! style while the overlay flag is active.

use qpos_core::Module;
use qpos_core::content::{
    self, ABOUT_FACTS, ABOUT_PARAGRAPHS, CAREER_SUMMARY, CONTACT_CHANNELS, CONTACT_NOTES,
    EXPERIENCE, PROFILE_STATS, PROJECTS, ProjectStatus, SKILLS, STACK_OVERVIEW,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const BAR_WIDTH: usize = 20;

/// Text progress bar, `percent` clamped to 100
pub fn bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Production => Color::LightGreen,
        ProjectStatus::Active => Color::Cyan,
        ProjectStatus::Beta => Color::Yellow,
        ProjectStatus::Development => Color::Magenta,
    }
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_value(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", key), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn gauge_line(gauge: &content::Gauge, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<18}", gauge.label)),
        Span::styled(bar(gauge.percent, BAR_WIDTH), style),
        Span::raw(format!(" {}", gauge.level)),
    ])
}

/// The module view widget
pub struct ModulePane {
    focus: Option<Module>,
    graph_active: bool,
    accent: Color,
}

impl ModulePane {
    pub fn new(focus: Option<Module>) -> Self {
        Self {
            focus,
            graph_active: false,
            accent: Color::Cyan,
        }
    }

    pub fn graph_active(mut self, active: bool) -> Self {
        self.graph_active = active;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn title(&self) -> String {
        match self.focus {
            Some(Module::Skills) if self.graph_active => " SKILLS.json ▸ GRAPH ".to_string(),
            Some(module) => format!(" {} ", module.heading()),
            None => " HOME ".to_string(),
        }
    }

    pub fn build_lines(&self) -> Vec<Line<'static>> {
        match self.focus {
            None => home_lines(),
            Some(Module::About) => about_lines(),
            Some(Module::Projects) => project_lines(),
            Some(Module::Skills) => skill_lines(self.graph_active),
            Some(Module::Experience) => experience_lines(),
            Some(Module::Contact) => contact_lines(),
        }
    }
}

fn home_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Welcome to the Quantum Portfolio OS"),
        Line::raw(""),
        Line::raw("Select a module with F1-F5, or type its name in the console."),
        Line::raw(""),
    ];
    for module in Module::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  F{}  {:<12}", module.hotkey(), module.id()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(module.description()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Type \"help\" for commands. Ctrl+O toggles overdrive.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn about_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("# About"), Line::raw("")];
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::raw(*paragraph));
        lines.push(Line::raw(""));
    }
    for (key, value) in ABOUT_FACTS {
        lines.push(key_value(key, value));
    }
    lines.push(Line::raw(""));
    lines.push(heading("Profile stats"));
    let style = Style::default().fg(Color::LightGreen);
    lines.extend(PROFILE_STATS.iter().map(|g| gauge_line(g, style)));
    lines
}

fn project_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Projects"), Line::raw("")];
    for (i, project) in PROJECTS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] {}", i + 1, project.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status),
                Style::default().fg(status_color(project.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.tech),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::raw(format!("    {}", project.description)));
        lines.push(Line::raw(""));
    }
    let counts: Vec<String> = content::project_status_counts()
        .iter()
        .map(|(status, n)| format!("{} {}", status, n))
        .collect();
    lines.push(Line::from(Span::styled(
        counts.join(" · "),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "Type \"open <n>\" to focus a project.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn skill_lines(graph_active: bool) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Skills"), Line::raw("")];
    for category in SKILLS {
        lines.push(Line::from(Span::styled(
            category.name.to_string(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::raw(format!("  {}", category.items.join(" · "))));
    }
    lines.push(Line::raw(""));

    let (title, style) = if graph_active {
        (
            "Stack overview ▸ graph overlay",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Stack overview", Style::default().fg(Color::LightGreen))
    };
    lines.push(heading(title));
    lines.extend(STACK_OVERVIEW.iter().map(|g| gauge_line(g, style)));
    if !graph_active {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Type \"analyze\" or \"graph\" in this module.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn experience_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Experience"), Line::raw("")];
    for role in EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled(
                role.title.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", role.period),
                Style::default().fg(Color::Yellow),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", role.company),
            Style::default().fg(Color::Cyan),
        )));
        for highlight in role.highlights {
            lines.push(Line::raw(format!("  • {}", highlight)));
        }
        lines.push(Line::raw(""));
    }
    lines.push(heading("Summary"));
    for (key, value) in CAREER_SUMMARY {
        lines.push(key_value(key, value));
    }
    lines
}

fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("[channels]"), Line::raw("")];
    for channel in CONTACT_CHANNELS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", channel.label),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(channel.handle.to_string()),
            Span::styled(
                format!("  <{}>", channel.url),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(heading("[notes]"));
    for (key, value) in CONTACT_NOTES {
        lines.push(key_value(key, value));
    }
    lines
}

impl Widget for &ModulePane {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.graph_active && self.focus == Some(Module::Skills) {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent)
        };

        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.build_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
