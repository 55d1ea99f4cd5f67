//! Core of the Quantum Portfolio OS shell
//!
//! Everything here is independent of the terminal front end:
//! - `interpreter` - keyword dispatch table producing responses and mutations
//! - `state` / `shell` - explicit shell state and the stateful driver
//! - `history` - bounded command history and Up/Down recall
//! - `session` - JSON session snapshot and its stores
//! - `content` - the portfolio data shown by the module views
//! - `config` - TOML/env configuration

pub mod config;
pub mod content;
pub mod history;
pub mod interpreter;
pub mod module;
pub mod response;
pub mod session;
pub mod shell;
pub mod state;
pub mod transient;

pub use config::ShellConfig;
pub use history::{CommandHistory, HistoryCursor};
pub use interpreter::{Outcome, interpret};
pub use module::Module;
pub use response::{Category, Response};
pub use session::{FileStore, MemoryStore, SessionError, SessionSnapshot, SessionStore};
pub use shell::Shell;
pub use state::{Mutation, ShellState};
pub use transient::TransientFlag;
