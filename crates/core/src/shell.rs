//! Stateful shell
//!
//! `Shell` ties the pure interpreter to its state, the history recall cursor
//! and the session store. It is what a front end drives: submit lines, step
//! through history, and select modules directly. After every change to focus
//! or history the session snapshot is written; storage failures are logged
//! and dropped, never returned to the caller.

use crate::config::ShellConfig;
use crate::history::HistoryCursor;
use crate::interpreter::{Outcome, interpret};
use crate::module::Module;
use crate::session::{self, SessionError, SessionSnapshot, SessionStore};
use crate::state::{Mutation, ShellState};
use std::time::Instant;

pub struct Shell<S: SessionStore> {
    state: ShellState,
    store: S,
    cursor: HistoryCursor,
    recovered: Option<SessionSnapshot>,
}

impl<S: SessionStore> Shell<S> {
    /// Open a shell, rehydrating focus and history from the store
    pub fn open(store: S, config: &ShellConfig) -> Self {
        let snapshot = session::restore(&store);
        let recovered = (!snapshot.is_empty()).then(|| snapshot.clone());
        if let Some(ref s) = recovered {
            tracing::info!(
                last_module = ?s.last_module,
                entries = s.command_history.len(),
                "recovered previous session"
            );
        }
        Self {
            state: ShellState::from_snapshot(snapshot, config),
            store,
            cursor: HistoryCursor::new(),
            recovered,
        }
    }

    /// Open a shell with an empty session, overwriting whatever was stored
    pub fn fresh(store: S, config: &ShellConfig) -> Self {
        let shell = Self {
            state: ShellState::with_config(config),
            store,
            cursor: HistoryCursor::new(),
            recovered: None,
        };
        shell.save_best_effort();
        shell
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn focused(&self) -> Option<Module> {
        self.state.focus
    }

    /// The snapshot found at startup, if it held anything
    pub fn recovered(&self) -> Option<&SessionSnapshot> {
        self.recovered.as_ref()
    }

    pub fn graph_active(&self, now: Instant) -> bool {
        self.state.graph_active(now)
    }

    pub fn is_browsing_history(&self) -> bool {
        self.cursor.is_browsing()
    }

    /// Interpret and apply one submitted line
    pub fn submit(&mut self, line: &str, now: Instant) -> Outcome {
        let outcome = interpret(&self.state, line);
        if outcome.response.is_none() && outcome.mutations.is_empty() {
            return outcome;
        }

        let mut dirty = false;
        for mutation in &outcome.mutations {
            dirty |= self.state.apply(mutation, now);
        }
        self.cursor.reset();

        if dirty {
            self.save_best_effort();
        }
        outcome
    }

    /// Select a module directly (hotkey, module list) or go home with None
    pub fn focus(&mut self, module: Option<Module>) -> bool {
        let mutation = match module {
            Some(m) => Mutation::SetFocus(m),
            None => Mutation::ClearFocus,
        };
        let changed = self.state.apply(&mutation, Instant::now());
        if changed {
            self.save_best_effort();
        }
        changed
    }

    /// Step to an older history entry; None when there is no history
    pub fn recall_older(&mut self) -> Option<String> {
        self.cursor.older(&self.state.history).map(str::to_string)
    }

    /// Step to a newer history entry; the empty draft past the newest
    pub fn recall_newer(&mut self) -> Option<String> {
        self.cursor.newer(&self.state.history).map(str::to_string)
    }

    /// Write the current snapshot, reporting failures
    pub fn save(&self) -> Result<(), SessionError> {
        session::persist(&self.store, &self.state.snapshot())
    }

    fn save_best_effort(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("session not saved: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Category;
    use crate::session::MemoryStore;

    fn shell() -> Shell<MemoryStore> {
        Shell::open(MemoryStore::new(), &ShellConfig::default())
    }

    fn stored(shell: &Shell<MemoryStore>) -> SessionSnapshot {
        shell
            .store()
            .record()
            .map(|raw| SessionSnapshot::from_json(&raw))
            .unwrap_or_default()
    }

    #[test]
    fn test_submit_appends_and_persists() {
        let mut shell = shell();
        let outcome = shell.submit("Skills", Instant::now());
        assert_eq!(
            outcome.response.map(|r| r.category),
            Some(Category::Success)
        );
        assert_eq!(shell.focused(), Some(Module::Skills));

        let snapshot = stored(&shell);
        assert_eq!(snapshot.last_module, Some(Module::Skills));
        assert_eq!(snapshot.command_history, vec!["Skills"]);
    }

    #[test]
    fn test_empty_submit_changes_nothing() {
        let mut shell = shell();
        shell.submit("   ", Instant::now());
        assert!(shell.state().history.is_empty());
        assert_eq!(shell.store().record(), None);
    }

    #[test]
    fn test_clear_empties_history() {
        let mut shell = shell();
        let now = Instant::now();
        shell.submit("whoami", now);
        shell.submit("scan", now);
        let outcome = shell.submit("clear", now);
        assert!(outcome.response.is_none());
        assert!(shell.state().history.is_empty());
        assert!(stored(&shell).command_history.is_empty());
    }

    #[test]
    fn test_recall_resets_after_submit() {
        let mut shell = shell();
        let now = Instant::now();
        shell.submit("a", now);
        shell.submit("b", now);

        assert_eq!(shell.recall_older().as_deref(), Some("b"));
        assert_eq!(shell.recall_older().as_deref(), Some("a"));
        shell.submit("c", now);
        assert!(!shell.is_browsing_history());
        assert_eq!(shell.recall_older().as_deref(), Some("c"));
    }

    #[test]
    fn test_reopen_restores_session() {
        let store = MemoryStore::with_record(
            r#"{"lastModule":"skills","commandHistory":["ls","analyze"]}"#,
        );
        let shell = Shell::open(store, &ShellConfig::default());
        assert_eq!(shell.focused(), Some(Module::Skills));
        assert_eq!(shell.state().history.to_vec(), vec!["ls", "analyze"]);
        assert!(shell.recovered().is_some());
    }

    #[test]
    fn test_fresh_discards_stored_session() {
        let store = MemoryStore::with_record(r#"{"lastModule":"about","commandHistory":["x"]}"#);
        let shell = Shell::fresh(store, &ShellConfig::default());
        assert_eq!(shell.focused(), None);
        assert!(shell.recovered().is_none());
        assert_eq!(stored(&shell), SessionSnapshot::default());
    }

    #[test]
    fn test_failing_store_never_surfaces() {
        let mut shell = Shell::open(MemoryStore::failing(), &ShellConfig::default());
        let outcome = shell.submit("about", Instant::now());
        assert!(outcome.response.is_some());
        assert_eq!(shell.focused(), Some(Module::About));
        // The explicit path still reports the failure
        assert!(shell.save().is_err());
    }

    #[test]
    fn test_direct_focus_persists() {
        let mut shell = shell();
        assert!(shell.focus(Some(Module::Contact)));
        assert!(!shell.focus(Some(Module::Contact)));
        assert_eq!(stored(&shell).last_module, Some(Module::Contact));
        assert!(shell.focus(None));
        assert_eq!(stored(&shell).last_module, None);
    }

    #[test]
    fn test_graph_overlay_through_shell() {
        let mut shell = shell();
        let now = Instant::now();
        shell.submit("skills", now);
        shell.submit("graph", now);
        assert!(shell.graph_active(now));
        assert!(!shell.graph_active(now + ShellConfig::default().graph_overlay()));
    }
}
