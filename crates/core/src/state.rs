//! Shell state and the mutations that change it
//!
//! The interpreter never touches state directly: it reads a `ShellState` and
//! returns a list of `Mutation`s, which the caller applies in order.

use crate::config::ShellConfig;
use crate::history::CommandHistory;
use crate::module::Module;
use crate::session::SessionSnapshot;
use crate::transient::TransientFlag;
use std::time::{Duration, Instant};

/// A single state change requested by the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Open a module
    SetFocus(Module),
    /// Return to the home view
    ClearFocus,
    /// Drop every history entry
    ClearHistory,
    /// Wipe the display log and the current input (presentation only)
    ClearConsole,
    /// Record a submitted line
    AppendHistory(String),
    /// Raise the skills graph overlay
    TriggerGraphOverlay,
    SetRecruiterMode(bool),
}

/// Everything the interpreter can see or change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub focus: Option<Module>,
    pub history: CommandHistory,
    pub recruiter_mode: bool,
    pub graph_overlay: TransientFlag,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::with_config(&ShellConfig::default())
    }
}

impl ShellState {
    pub fn new(history_cap: usize, graph_delay: Duration) -> Self {
        Self {
            focus: None,
            history: CommandHistory::with_cap(history_cap),
            recruiter_mode: false,
            graph_overlay: TransientFlag::new(graph_delay),
        }
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self::new(config.history_cap, config.graph_overlay())
    }

    /// Rehydrate focus and history from a stored snapshot
    pub fn from_snapshot(snapshot: SessionSnapshot, config: &ShellConfig) -> Self {
        let mut state = Self::with_config(config);
        state.focus = snapshot.last_module;
        state.history = CommandHistory::from_entries(snapshot.command_history, config.history_cap);
        state
    }

    /// The persisted part of the state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            last_module: self.focus,
            command_history: self.history.to_vec(),
        }
    }

    pub fn graph_active(&self, now: Instant) -> bool {
        self.graph_overlay.is_active(now)
    }

    /// Apply one mutation. Returns true when a persisted field (focus or history) changed.
    pub fn apply(&mut self, mutation: &Mutation, now: Instant) -> bool {
        match mutation {
            Mutation::SetFocus(module) => {
                let changed = self.focus != Some(*module);
                self.focus = Some(*module);
                changed
            }
            Mutation::ClearFocus => self.focus.take().is_some(),
            Mutation::ClearHistory => {
                let changed = !self.history.is_empty();
                self.history.clear();
                changed
            }
            Mutation::AppendHistory(line) => {
                self.history.push(line.clone());
                true
            }
            Mutation::TriggerGraphOverlay => {
                self.graph_overlay.trigger(now);
                false
            }
            Mutation::SetRecruiterMode(on) => {
                self.recruiter_mode = *on;
                false
            }
            Mutation::ClearConsole => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_changes_are_persistent() {
        let now = Instant::now();
        let mut state = ShellState::default();
        assert!(state.apply(&Mutation::SetFocus(Module::Skills), now));
        assert!(!state.apply(&Mutation::SetFocus(Module::Skills), now));
        assert!(state.apply(&Mutation::ClearFocus, now));
        assert!(!state.apply(&Mutation::ClearFocus, now));
    }

    #[test]
    fn test_history_mutations() {
        let now = Instant::now();
        let mut state = ShellState::default();
        assert!(!state.apply(&Mutation::ClearHistory, now));
        assert!(state.apply(&Mutation::AppendHistory("whoami".into()), now));
        assert_eq!(state.history.len(), 1);
        assert!(state.apply(&Mutation::ClearHistory, now));
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_visual_flags_are_not_persistent() {
        let now = Instant::now();
        let mut state = ShellState::default();
        assert!(!state.apply(&Mutation::SetRecruiterMode(true), now));
        assert!(state.recruiter_mode);
        assert!(!state.apply(&Mutation::TriggerGraphOverlay, now));
        assert!(state.graph_active(now));
        assert!(!state.apply(&Mutation::ClearConsole, now));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let now = Instant::now();
        let config = ShellConfig::default();
        let mut state = ShellState::with_config(&config);
        state.apply(&Mutation::SetFocus(Module::Contact), now);
        state.apply(&Mutation::AppendHistory("contact".into()), now);

        let restored = ShellState::from_snapshot(state.snapshot(), &config);
        assert_eq!(restored.focus, Some(Module::Contact));
        assert_eq!(restored.history.to_vec(), vec!["contact"]);
        assert!(!restored.recruiter_mode);
    }

    #[test]
    fn test_from_snapshot_applies_cap() {
        let config = ShellConfig {
            history_cap: 2,
            ..ShellConfig::default()
        };
        let snapshot = SessionSnapshot {
            last_module: None,
            command_history: vec!["a".into(), "b".into(), "c".into()],
        };
        let state = ShellState::from_snapshot(snapshot, &config);
        assert_eq!(state.history.to_vec(), vec!["b", "c"]);
    }
}
