//! HUD widgets: the header bar and the sidebar with the module list,
//! telemetry readouts, quick stats and the system topology map.

use crate::hud::Telemetry;
use qpos_core::Module;
use qpos_core::content::QUICK_STATS;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Sparkline, Widget},
};

/// Frame color for the current power mode
pub fn accent(overdrive: bool) -> Color {
    if overdrive {
        Color::LightMagenta
    } else {
        Color::Cyan
    }
}

pub fn mode_label(recruiter: bool) -> &'static str {
    if recruiter { "RECRUITER" } else { "PORTFOLIO" }
}

/// Links of the topology map, drawn as `from ── to`
const TOPOLOGY_LINKS: &[(&str, &str)] = &[
    ("about", "core"),
    ("core", "skills"),
    ("core", "experience"),
    ("about", "projects"),
    ("projects", "skills"),
    ("skills", "contact"),
    ("experience", "contact"),
];

const TOPOLOGY_NODES: usize = 6;

/// Extra links lit while the experience module is focused
const EXPERIENCE_DEPENDENCIES: &[(&str, &str)] =
    &[("experience", "projects"), ("experience", "skills")];

/// Modules highlighted for recruiters
fn recruiter_pick(module: Module) -> bool {
    matches!(module, Module::Projects | Module::Skills)
}

/// Top bar: title, system status, mode and clock
pub struct HeaderBar<'a> {
    telemetry: &'a Telemetry,
    recruiter: bool,
    clock: String,
}

impl<'a> HeaderBar<'a> {
    pub fn new(telemetry: &'a Telemetry, recruiter: bool, clock: impl Into<String>) -> Self {
        Self {
            telemetry,
            recruiter,
            clock: clock.into(),
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = accent(self.telemetry.overdrive);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let status_style = if self.telemetry.overdrive {
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        } else {
            Style::default().fg(Color::LightGreen)
        };
        let mode_style = if self.recruiter {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let line = Line::from(vec![
            Span::styled(
                " QUANTUM PORTFOLIO OS ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▸ "),
            Span::styled(self.telemetry.status_text(), status_style),
            Span::raw(" ▸ MODE: "),
            Span::styled(mode_label(self.recruiter), mode_style),
            Span::raw(" ▸ "),
            Span::styled(self.clock.clone(), Style::default().fg(Color::White)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// Sidebar with the module list and telemetry
pub struct HudPane<'a> {
    telemetry: &'a Telemetry,
    focus: Option<Module>,
    recruiter: bool,
}

impl<'a> HudPane<'a> {
    pub fn new(telemetry: &'a Telemetry) -> Self {
        Self {
            telemetry,
            focus: None,
            recruiter: false,
        }
    }

    pub fn focus(mut self, focus: Option<Module>) -> Self {
        self.focus = focus;
        self
    }

    pub fn recruiter(mut self, recruiter: bool) -> Self {
        self.recruiter = recruiter;
        self
    }

    fn module_items(&self) -> Vec<ListItem<'static>> {
        Module::ALL
            .iter()
            .map(|&module| {
                let mut style = Style::default().fg(Color::White);
                if self.recruiter && recruiter_pick(module) {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                }
                if self.focus == Some(module) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let marker = if self.focus == Some(module) { "▶" } else { " " };
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{} F{} {}", marker, module.hotkey(), module.title()),
                        style,
                    )),
                    Line::from(Span::styled(
                        format!("      {}", module.description()),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect()
    }
}

impl Widget for &HudPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = accent(self.telemetry.overdrive);
        // Recruiter mode drops the network readout to reduce noise
        let network_height = if self.recruiter { 0 } else { 5 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Module::ALL.len() as u16 * 2 + 2),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(QUICK_STATS.len().div_ceil(2) as u16 + 2),
                Constraint::Length(network_height),
                Constraint::Min(0),
            ])
            .split(area);

        let list = List::new(self.module_items()).block(titled(" MODULES ", color));
        Widget::render(list, chunks[0], buf);

        self.render_telemetry(chunks[1], chunks[2], color, buf);

        Paragraph::new(quick_stat_lines())
            .block(titled(" QUICK STATS ", color))
            .render(chunks[3], buf);

        if !self.recruiter {
            let samples = self.telemetry.cpu_samples();
            Sparkline::default()
                .block(titled(" NETWORK ACTIVITY ", color))
                .data(&samples)
                .max(100)
                .style(Style::default().fg(color))
                .render(chunks[4], buf);
        }

        Paragraph::new(self.topology_lines())
            .block(titled(" SYSTEM TOPOLOGY ", color))
            .render(chunks[5], buf);
    }
}

fn titled(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn quick_stat_lines() -> Vec<Line<'static>> {
    QUICK_STATS
        .chunks(2)
        .map(|pair| {
            let mut spans = Vec::new();
            for (label, value) in pair {
                spans.push(Span::styled(
                    format!(" {:<11}", label),
                    Style::default().fg(Color::DarkGray),
                ));
                spans.push(Span::styled(
                    format!("{:<6}", value),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

impl HudPane<'_> {
    fn topology_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!(" nodes: {} · links: {}", TOPOLOGY_NODES, TOPOLOGY_LINKS.len()),
            Style::default().fg(Color::DarkGray),
        ))];
        for (from, to) in TOPOLOGY_LINKS {
            lines.push(Line::raw(format!(" {:<10} ── {}", from, to)));
        }
        if self.focus == Some(Module::Experience) {
            let lit = Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD);
            for (from, to) in EXPERIENCE_DEPENDENCIES {
                lines.push(Line::from(Span::styled(
                    format!(" {:<10} ━━ {}", from, to),
                    lit,
                )));
            }
        }
        lines
    }

    fn render_telemetry(&self, cpu_area: Rect, sweep_area: Rect, color: Color, buf: &mut Buffer) {
        let samples = self.telemetry.cpu_samples();
        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title(format!(" CPU {}% ", self.telemetry.cpu_now()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .data(&samples)
            .max(100)
            .style(Style::default().fg(Color::LightGreen));
        sparkline.render(cpu_area, buf);

        let sweep = self.telemetry.sweep().min(100);
        let gauge = Gauge::default()
            .block(titled(" SYSTEM OPTIMIZATION ", color))
            .gauge_style(Style::default().fg(color))
            .percent(sweep)
            .label(format!("{}%", sweep));
        gauge.render(sweep_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_mode_and_accent() {
        assert_eq!(mode_label(true), "RECRUITER");
        assert_eq!(mode_label(false), "PORTFOLIO");
        assert_ne!(accent(true), accent(false));
    }

    #[test]
    fn test_header_render() {
        let mut telemetry = Telemetry::new(Instant::now());
        telemetry.toggle_overdrive();
        let header = HeaderBar::new(&telemetry, true, "12:34:56");

        let area = Rect::new(0, 0, 100, 3);
        let mut buf = Buffer::empty(area);
        (&header).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("OVERDRIVE MODE"));
        assert!(text.contains("RECRUITER"));
        assert!(text.contains("12:34:56"));
    }

    #[test]
    fn test_module_list_marks_focus() {
        let telemetry = Telemetry::new(Instant::now());
        let pane = HudPane::new(&telemetry).focus(Some(Module::Skills));

        let area = Rect::new(0, 0, 48, 50);
        let mut buf = Buffer::empty(area);
        (&pane).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("▶ F3 Skills Module"));
        assert!(text.contains("  F1 About Module"));
        assert!(text.contains("CPU 51%"));
        assert!(text.contains("SYSTEM OPTIMIZATION"));
    }

    #[test]
    fn test_recruiter_hides_network_activity() {
        let telemetry = Telemetry::new(Instant::now());
        let area = Rect::new(0, 0, 48, 50);

        let mut buf = Buffer::empty(area);
        (&HudPane::new(&telemetry)).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("NETWORK ACTIVITY"));

        let mut buf = Buffer::empty(area);
        (&HudPane::new(&telemetry).recruiter(true)).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("F2 Projects Module"));
        assert!(!text.contains("NETWORK ACTIVITY"));
        assert!(text.contains("CPU 51%"));
        assert!(text.contains("SYSTEM OPTIMIZATION"));
        assert!(text.contains("QUICK STATS"));
    }

    #[test]
    fn test_quick_stats() {
        let telemetry = Telemetry::new(Instant::now());
        let area = Rect::new(0, 0, 48, 50);
        let mut buf = Buffer::empty(area);
        (&HudPane::new(&telemetry)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("PROJECTS   24+"));
        assert!(text.contains("SKILLS     30+"));
    }

    #[test]
    fn test_topology_lights_experience_dependencies() {
        let telemetry = Telemetry::new(Instant::now());
        let to_text = |lines: Vec<Line<'static>>| -> Vec<String> {
            lines.iter().map(|l| l.to_string()).collect()
        };

        let home = to_text(HudPane::new(&telemetry).topology_lines());
        assert_eq!(home[0], " nodes: 6 · links: 7");
        assert_eq!(home.len(), 1 + TOPOLOGY_LINKS.len());
        assert!(!home.iter().any(|l| l.contains("━━")));

        let focused = to_text(
            HudPane::new(&telemetry)
                .focus(Some(Module::Experience))
                .topology_lines(),
        );
        assert!(focused.contains(&" experience ━━ projects".to_string()));
        assert!(focused.contains(&" experience ━━ skills".to_string()));

        let other = HudPane::new(&telemetry).focus(Some(Module::Skills));
        assert_eq!(other.topology_lines().len(), home.len());
    }

    #[test]
    fn test_recruiter_highlight() {
        let telemetry = Telemetry::new(Instant::now());
        let pane = HudPane::new(&telemetry).recruiter(true);
        let items = pane.module_items();
        assert_eq!(items.len(), Module::ALL.len());
        assert!(recruiter_pick(Module::Projects));
        assert!(recruiter_pick(Module::Skills));
        assert!(!recruiter_pick(Module::Contact));
    }
}
