//! TUI Application
//!
//! Main application state: the shell, the console display log, the boot
//! sequence and the HUD telemetry. Key events come in through `handle_key`,
//! time advances through `tick`, and `render` draws the current frame.
//!
//! Opening a heavy module from its hotkey plays staged loading lines before
//! the focus changes. Those lines are queued with their due time and
//! released by `tick`.

use crate::boot::BootSequence;
use crate::hud::{self, Telemetry};
use crate::keys::{self, Signal, convert_key};
use crate::ui::boot_screen::BootScreen;
use crate::ui::console_pane::{ConsolePane, ConsoleState, LogKind};
use crate::ui::hud_pane::{self, HeaderBar, HudPane};
use crate::ui::layout::{ComputedLayout, LayoutConfig, StatusContent};
use crate::ui::module_pane::ModulePane;
use crossterm::event::KeyEvent;
use qpos_core::{Module, Mutation, SessionStore, Shell, ShellConfig};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Gap between staged loading lines
const STAGE_STEP: Duration = Duration::from_millis(180);
/// Pause after the last staged line before the module opens
const STAGE_SETTLE: Duration = Duration::from_millis(220);

const HEAVY_STAGES: [&str; 3] = [
    "Allocating memory...",
    "Compiling interface...",
    "Optimizing graph...",
];

const GREETING: &str = "Quantum kernel standing by...";
const GREETING_HINT: &str =
    "Type \"help\" for available commands or press F1-F5 to open a Module.";

/// Work queued for a later tick
#[derive(Debug, Clone, PartialEq, Eq)]
enum Staged {
    Line(LogKind, String),
    Open(Module),
}

/// Main application state
pub struct App {
    pub shell: Shell<Box<dyn SessionStore>>,
    pub console: ConsoleState,
    /// Present until the boot screen is finished or skipped
    pub boot: Option<BootSequence>,
    pub telemetry: Telemetry,
    pub layout_config: LayoutConfig,
    pub should_quit: bool,
    /// Status message (clears after next key)
    pub status_message: Option<String>,
    staged: VecDeque<(Instant, Staged)>,
    now: Instant,
}

impl App {
    pub fn new(
        shell: Shell<Box<dyn SessionStore>>,
        config: &ShellConfig,
        show_boot: bool,
        now: Instant,
    ) -> Self {
        let mut console = ConsoleState::new();
        console.push(LogKind::System, GREETING);
        console.push(LogKind::Info, GREETING_HINT);

        if let Some(snapshot) = shell.recovered() {
            console.push(LogKind::System, "Recovered previous session state.");
            if let Some(module) = snapshot.last_module {
                console.push(
                    LogKind::Info,
                    format!("Last session focus: {}", module.id().to_uppercase()),
                );
            }
        }

        Self {
            shell,
            console,
            boot: show_boot.then(|| BootSequence::from_config(config, now)),
            telemetry: Telemetry::new(now),
            layout_config: LayoutConfig::default(),
            should_quit: false,
            status_message: None,
            staged: VecDeque::new(),
            now,
        }
    }

    pub fn is_booting(&self) -> bool {
        self.boot.is_some()
    }

    /// Advance clocks: boot auto-continue, telemetry and staged lines
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.telemetry.tick(now);

        if let Some(boot) = &self.boot
            && boot.is_finished(now)
        {
            tracing::debug!("boot sequence finished");
            self.boot = None;
        }

        while let Some((due, _)) = self.staged.front() {
            if *due > now {
                break;
            }
            if let Some((_, step)) = self.staged.pop_front() {
                self.run_staged(step);
            }
        }
    }

    fn run_staged(&mut self, step: Staged) {
        match step {
            Staged::Line(kind, text) => self.console.push(kind, text),
            Staged::Open(module) => {
                self.shell.focus(Some(module));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let signal = convert_key(key);
        if signal != Signal::Ignore {
            self.status_message = None;
        }

        if self.boot.is_some() {
            if signal == Signal::Quit {
                self.should_quit = true;
            } else if keys::skips_boot(&key) {
                tracing::debug!("boot sequence skipped");
                self.boot = None;
            }
            return;
        }

        match signal {
            Signal::Insert(c) => self.console.insert_char(c),
            Signal::Backspace => self.console.backspace(),
            Signal::Delete => self.console.delete(),
            Signal::Left => self.console.cursor_left(),
            Signal::Right => self.console.cursor_right(),
            Signal::Home => self.console.cursor_home(),
            Signal::End => self.console.cursor_end(),
            Signal::Submit => self.submit(),
            Signal::HistoryOlder => {
                if let Some(line) = self.shell.recall_older() {
                    self.console.set_input(line);
                }
            }
            Signal::HistoryNewer => {
                if let Some(line) = self.shell.recall_newer() {
                    self.console.set_input(line);
                }
            }
            Signal::OpenModule(module) => self.open_module(module),
            Signal::CloseModule => self.close_module(),
            Signal::ToggleOverdrive => {
                let on = self.telemetry.toggle_overdrive();
                tracing::debug!(overdrive = on, "overdrive toggled");
                self.status_message = Some(if on {
                    "Overdrive engaged".to_string()
                } else {
                    "Overdrive released".to_string()
                });
            }
            Signal::Quit => self.should_quit = true,
            Signal::Ignore => {}
        }
    }

    /// Submit the console input to the shell
    fn submit(&mut self) {
        if self.console.input.trim().is_empty() {
            return;
        }
        let line = self.console.take_input();
        let outcome = self.shell.submit(&line, self.now);

        if outcome.has(&Mutation::ClearConsole) {
            self.console.clear_log();
            return;
        }

        self.console.push_command(&line);
        if let Some(response) = &outcome.response {
            self.console.push_response(response);
        }
    }

    /// Open a module from its hotkey, echoing the selection in the console
    pub fn open_module(&mut self, module: Module) {
        // A new selection replaces one still loading
        self.staged.clear();
        tracing::info!(module = %module, heavy = module.is_heavy(), "opening module");

        let mut at = self.now;
        let mut steps = Vec::new();
        if module.is_heavy() {
            for text in HEAVY_STAGES {
                steps.push((at, Staged::Line(LogKind::System, text.to_string())));
                at += STAGE_STEP;
            }
            at += STAGE_SETTLE;
        }

        steps.push((
            at,
            Staged::Line(
                LogKind::Command,
                format!("> open {}", module.title().to_lowercase()),
            ),
        ));
        steps.push((
            at,
            Staged::Line(LogKind::Success, format!("Opening {}...", module.title())),
        ));
        if module == Module::Experience {
            steps.push((
                at,
                Staged::Line(
                    LogKind::Info,
                    "Resolving dependencies… skills ▸ projects ▸ experience".to_string(),
                ),
            ));
        }
        steps.push((at, Staged::Open(module)));

        self.staged.extend(steps);
        // Release whatever is already due
        self.tick(self.now);
    }

    /// Return to the home view
    pub fn close_module(&mut self) {
        self.staged.clear();
        if self.shell.focus(None) {
            tracing::debug!("returned home");
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if let Some(boot) = &self.boot {
            frame.render_widget(&BootScreen::new(boot, self.now), area);
            return;
        }

        let layout = ComputedLayout::compute(area, &self.layout_config);
        let state = self.shell.state();
        let recruiter = state.recruiter_mode;
        let accent = hud_pane::accent(self.telemetry.overdrive);

        let header = HeaderBar::new(&self.telemetry, recruiter, hud::clock_text());
        frame.render_widget(&header, layout.header);

        if layout.sidebar_visible() {
            let sidebar = HudPane::new(&self.telemetry)
                .focus(state.focus)
                .recruiter(recruiter);
            frame.render_widget(&sidebar, layout.sidebar);
        }

        let view = ModulePane::new(state.focus)
            .graph_active(self.shell.graph_active(self.now))
            .accent(accent);
        frame.render_widget(&view, layout.view);

        let console = ConsolePane::new(&self.console)
            .focused(true)
            .dimmed(recruiter)
            .accent(accent);
        frame.render_widget(&console, layout.console);

        self.render_status_bar(frame, layout.status);
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let location = self
            .shell
            .focused()
            .map_or("~/home", |module| module.heading());
        let mut status = StatusContent::new()
            .location(location)
            .mode(hud_pane::mode_label(self.shell.state().recruiter_mode))
            .hints("F1-F5 modules · Esc home · Ctrl+C quit");
        if let Some(msg) = &self.status_message {
            status = status.message(msg.clone());
        } else if self.shell.is_browsing_history() {
            status = status.message("history");
        }

        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        let paragraph = Paragraph::new(Line::from(Span::styled(status.format(area.width), style)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use qpos_core::{MemoryStore, SessionSnapshot};
    use ratatui::{Terminal, backend::TestBackend};

    fn app_with(store: MemoryStore, show_boot: bool) -> App {
        let config = ShellConfig::default();
        let shell = Shell::open(Box::new(store) as Box<dyn SessionStore>, &config);
        App::new(shell, &config, show_boot, Instant::now())
    }

    fn app() -> App {
        app_with(MemoryStore::new(), false)
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    fn log_texts(app: &App) -> Vec<&str> {
        app.console.log.iter().map(|l| l.text.as_str()).collect()
    }

    fn stored(app: &App) -> Result<SessionSnapshot, String> {
        let raw = app
            .shell
            .store()
            .load()
            .map_err(|e| e.to_string())?
            .ok_or("nothing stored")?;
        Ok(SessionSnapshot::from_json(&raw))
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert!(!app.is_booting());
        assert!(!app.should_quit);
        assert_eq!(log_texts(&app), vec![GREETING, GREETING_HINT]);
        assert_eq!(app.shell.focused(), None);
    }

    #[test]
    fn test_submit_echoes_and_responds() -> Result<(), String> {
        let mut app = app();
        type_line(&mut app, "whoami");

        let log = log_texts(&app);
        assert_eq!(log[2], "> whoami");
        assert_eq!(app.console.log[2].kind, LogKind::Command);
        assert_eq!(log.len(), 4);
        assert!(app.console.input.is_empty());
        assert_eq!(stored(&app)?.command_history, vec!["whoami"]);
        Ok(())
    }

    #[test]
    fn test_unknown_command_is_error() {
        let mut app = app();
        type_line(&mut app, "rm -rf");
        let last = app.console.log.last().map(|l| (l.kind, l.text.as_str()));
        assert_eq!(last, Some((LogKind::Error, "Command not found")));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = app();
        type_line(&mut app, "   ");
        assert_eq!(app.console.log.len(), 2);
        assert!(app.shell.state().history.is_empty());
    }

    #[test]
    fn test_history_navigation() {
        let mut app = app();
        type_line(&mut app, "help");
        type_line(&mut app, "scan");

        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.console.input, "scan");
        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.console.input, "help");
        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.console.input, "help");

        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.console.input, "scan");
        app.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.console.input, "");
    }

    #[test]
    fn test_history_navigation_empty() {
        let mut app = app();
        app.console.set_input("draft");
        app.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(app.console.input, "draft");
    }

    #[test]
    fn test_clear_empties_console() -> Result<(), String> {
        let mut app = app();
        type_line(&mut app, "whoami");
        type_line(&mut app, "clear");
        assert!(app.console.log.is_empty());
        assert!(app.shell.state().history.is_empty());
        assert!(stored(&app)?.command_history.is_empty());
        Ok(())
    }

    #[test]
    fn test_typed_module_command() {
        let mut app = app();
        type_line(&mut app, "skills");
        assert_eq!(app.shell.focused(), Some(Module::Skills));
        assert_eq!(app.console.log.last().map(|l| l.text.as_str()), Some("Opening skills..."));
    }

    #[test]
    fn test_hotkey_opens_light_module() -> Result<(), String> {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::F(1)));

        assert_eq!(app.shell.focused(), Some(Module::About));
        let log = log_texts(&app);
        assert_eq!(log[2..], ["> open about module", "Opening About Module..."]);
        // Direct selection persists focus but is not a typed command
        let snapshot = stored(&app)?;
        assert_eq!(snapshot.last_module, Some(Module::About));
        assert!(snapshot.command_history.is_empty());
        Ok(())
    }

    #[test]
    fn test_heavy_module_is_staged() {
        let mut app = app();
        let start = app.now;
        app.handle_key(KeyEvent::from(KeyCode::F(4)));

        assert_eq!(app.shell.focused(), None);
        assert_eq!(log_texts(&app).last(), Some(&"Allocating memory..."));

        app.tick(start + Duration::from_millis(400));
        assert_eq!(log_texts(&app).last(), Some(&"Optimizing graph..."));
        assert_eq!(app.shell.focused(), None);

        app.tick(start + Duration::from_millis(760));
        assert_eq!(app.shell.focused(), Some(Module::Experience));
        assert_eq!(
            log_texts(&app)[app.console.log.len() - 3..],
            [
                "> open experience module",
                "Opening Experience Module...",
                "Resolving dependencies… skills ▸ projects ▸ experience",
            ]
        );
    }

    #[test]
    fn test_escape_goes_home() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::F(3)));
        assert_eq!(app.shell.focused(), Some(Module::Skills));
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.shell.focused(), None);
    }

    #[test]
    fn test_escape_cancels_staged_open() {
        let mut app = app();
        let start = app.now;
        app.handle_key(KeyEvent::from(KeyCode::F(2)));
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        app.tick(start + Duration::from_secs(2));
        assert_eq!(app.shell.focused(), None);
    }

    #[test]
    fn test_recovered_session_lines() {
        let store = MemoryStore::with_record(r#"{"lastModule":"skills","commandHistory":["ls"]}"#);
        let app = app_with(store, false);
        let log = log_texts(&app);
        assert_eq!(
            log[2..],
            ["Recovered previous session state.", "Last session focus: SKILLS"]
        );
        assert_eq!(app.shell.focused(), Some(Module::Skills));
    }

    #[test]
    fn test_recovered_history_without_focus() {
        let store = MemoryStore::with_record(r#"{"lastModule":null,"commandHistory":["ls"]}"#);
        let app = app_with(store, false);
        assert_eq!(log_texts(&app).last(), Some(&"Recovered previous session state."));
    }

    #[test]
    fn test_boot_skip_and_auto_continue() {
        let mut app = app_with(MemoryStore::new(), true);
        assert!(app.is_booting());
        // Module keys do nothing while booting
        app.handle_key(KeyEvent::from(KeyCode::F(1)));
        assert!(app.is_booting());
        assert_eq!(app.shell.focused(), None);

        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(!app.is_booting());
        // The skip key is not typed into the console
        assert!(app.console.input.is_empty());

        let mut app = app_with(MemoryStore::new(), true);
        let start = app.now;
        app.tick(start + Duration::from_secs(10));
        assert!(!app.is_booting());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = app_with(MemoryStore::new(), true);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_overdrive_toggle() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
        assert!(app.telemetry.overdrive);
        assert_eq!(app.status_message.as_deref(), Some("Overdrive engaged"));
        app.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_failing_store_keeps_running() {
        let mut app = app_with(MemoryStore::failing(), false);
        type_line(&mut app, "projects");
        assert_eq!(app.shell.focused(), Some(Module::Projects));
        assert_eq!(app.shell.state().history.len(), 1);
    }

    #[test]
    fn test_render() -> Result<(), String> {
        let mut app = app();
        type_line(&mut app, "recruiter --summary");
        app.handle_key(KeyEvent::from(KeyCode::F(3)));

        let mut terminal =
            Terminal::new(TestBackend::new(120, 40)).map_err(|e| e.to_string())?;
        terminal
            .draw(|frame| app.render(frame))
            .map_err(|e| e.to_string())?;

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("QUANTUM PORTFOLIO OS"));
        assert!(text.contains("RECRUITER"));
        assert!(text.contains("SKILLS.json"));
        assert!(text.contains("CONSOLE"));
        Ok(())
    }

    #[test]
    fn test_render_boot() -> Result<(), String> {
        let app = app_with(MemoryStore::new(), true);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).map_err(|e| e.to_string())?;
        terminal
            .draw(|frame| app.render(frame))
            .map_err(|e| e.to_string())?;
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("QP-OS BOOT"));
        Ok(())
    }

    #[test]
    fn test_prompt_visible_after_long_output() -> Result<(), String> {
        let mut app = app();
        for _ in 0..4 {
            type_line(&mut app, "help");
        }
        for c in "xyz".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).map_err(|e| e.to_string())?;
        terminal
            .draw(|frame| app.render(frame))
            .map_err(|e| e.to_string())?;
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("qpos> xyz"), "typed draft scrolled out of view");
        Ok(())
    }
}
