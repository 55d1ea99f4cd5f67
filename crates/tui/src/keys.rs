//! Key conversion from crossterm to shell input signals.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use qpos_core::Module;

/// What a key press means to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Submit,
    /// Up: recall an older command
    HistoryOlder,
    /// Down: recall a newer command
    HistoryNewer,
    OpenModule(Module),
    CloseModule,
    ToggleOverdrive,
    Quit,
    Ignore,
}

/// Convert a crossterm KeyEvent to a shell signal.
pub fn convert_key(event: KeyEvent) -> Signal {
    // Some terminals also report releases
    if event.kind == KeyEventKind::Release {
        return Signal::Ignore;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            // Ctrl+C, Ctrl+D (EOF), Ctrl+Q all quit
            KeyCode::Char('c') | KeyCode::Char('d') | KeyCode::Char('q') => Signal::Quit,
            KeyCode::Char('o') => Signal::ToggleOverdrive,
            _ => Signal::Ignore,
        };
    }

    match event.code {
        KeyCode::Char(c) => Signal::Insert(c),
        KeyCode::Esc => Signal::CloseModule,
        KeyCode::Backspace => Signal::Backspace,
        KeyCode::Delete => Signal::Delete,
        KeyCode::Left => Signal::Left,
        KeyCode::Right => Signal::Right,
        KeyCode::Up => Signal::HistoryOlder,
        KeyCode::Down => Signal::HistoryNewer,
        KeyCode::Home => Signal::Home,
        KeyCode::End => Signal::End,
        KeyCode::Enter => Signal::Submit,
        KeyCode::F(n) => Module::from_hotkey(n).map_or(Signal::Ignore, Signal::OpenModule),
        _ => Signal::Ignore,
    }
}

/// Keys that fast-forward the boot screen
pub fn skips_boot(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
        && matches!(event.code, KeyCode::Char(_) | KeyCode::Enter)
}
