//! Layout Manager
//!
//! Splits the screen into the header, the HUD sidebar, the module view,
//! the console and the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Percentage of width for the HUD sidebar (0-100)
    pub sidebar_width_percent: u16,
    /// Minimum width for each pane
    pub min_pane_width: u16,
    /// Height of the console, borders included
    pub console_height: u16,
    /// Height reserved for the header
    pub header_height: u16,
    /// Height reserved for status bar
    pub status_bar_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width_percent: 32,
            min_pane_width: 28,
            console_height: 10,
            header_height: 3,
            status_bar_height: 1,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sidebar width percentage
    pub fn sidebar_width(mut self, percent: u16) -> Self {
        self.sidebar_width_percent = percent.clamp(10, 60);
        self
    }
}

/// The computed layout areas
#[derive(Debug, Clone, Copy)]
pub struct ComputedLayout {
    pub header: Rect,
    /// Module list and telemetry
    pub sidebar: Rect,
    /// Focused module view, or the home screen
    pub view: Rect,
    pub console: Rect,
    pub status: Rect,
}

impl ComputedLayout {
    /// Compute the layout for a given terminal area
    pub fn compute(area: Rect, config: &LayoutConfig) -> Self {
        // Console gives way to the view on short terminals
        let console_height = config.console_height.min(area.height / 2);

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(config.header_height),
                Constraint::Min(0),
                Constraint::Length(console_height),
                Constraint::Length(config.status_bar_height),
            ])
            .split(area);

        let header = vertical_chunks[0];
        let main_area = vertical_chunks[1];
        let console = vertical_chunks[2];
        let status = vertical_chunks[3];

        let min_split_width = config.min_pane_width * 2;
        let (sidebar, view) = if main_area.width >= min_split_width {
            let horizontal_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(config.sidebar_width_percent),
                    Constraint::Percentage(100 - config.sidebar_width_percent),
                ])
                .split(main_area);
            (horizontal_chunks[0], horizontal_chunks[1])
        } else {
            // Too narrow - the view takes the whole row
            (Rect::default(), main_area)
        };

        Self {
            header,
            sidebar,
            view,
            console,
            status,
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar.width > 0 && self.sidebar.height > 0
    }
}

/// Status bar content
#[derive(Debug, Clone, Default)]
pub struct StatusContent {
    /// Current focus (module heading or home)
    pub location: String,
    /// PORTFOLIO or RECRUITER
    pub mode: String,
    /// Key hints
    pub hints: String,
    /// Any additional status message
    pub message: Option<String>,
}

impl StatusContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = hints.into();
        self
    }

    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Format for display
    pub fn format(&self, width: u16) -> String {
        let left = format!(" {} ", self.location);
        let middle = self.message.clone().unwrap_or_default();
        let right = format!(" {} | {} ", self.mode, self.hints);

        let used = left.chars().count() + middle.chars().count() + right.chars().count();
        let padding_needed = (width as usize).saturating_sub(used);

        let left_pad = padding_needed / 2;
        let right_pad = padding_needed - left_pad;

        format!(
            "{}{}{}{}{}",
            left,
            " ".repeat(left_pad),
            middle,
            " ".repeat(right_pad),
            right
        )
    }
}
