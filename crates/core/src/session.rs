//! Session snapshot persistence
//!
//! The snapshot is a single JSON record:
//!
//! ```json
//! { "lastModule": "skills", "commandHistory": ["ls", "analyze"] }
//! ```
//!
//! Decoding is lenient and per-field. Anything that cannot be understood
//! falls back to the empty default for that field, so a corrupt record never
//! prevents startup. Storage goes through the `SessionStore` trait; callers
//! get an explicit `Result` here and decide whether to surface it.

use crate::module::Module;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const KEY_LAST_MODULE: &str = "lastModule";
const KEY_COMMAND_HISTORY: &str = "commandHistory";

/// Wire form of the snapshot; field names match the decode keys
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord<'a> {
    last_module: Option<&'a str>,
    command_history: &'a [String],
}

/// Durable part of the shell state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub last_module: Option<Module>,
    pub command_history: Vec<String>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.last_module.is_none() && self.command_history.is_empty()
    }

    /// Encode as the JSON record
    pub fn to_json(&self) -> Result<String, SessionError> {
        let record = SessionRecord {
            last_module: self.last_module.map(Module::id),
            command_history: &self.command_history,
        };
        serde_json::to_string(&record).map_err(SessionError::Encode)
    }

    /// Decode a JSON record, falling back to defaults field by field
    pub fn from_json(raw: &str) -> Self {
        let record = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(record)) => record,
            Ok(_) => {
                tracing::debug!("session record is not an object, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::debug!("session record is not valid JSON ({}), using defaults", e);
                return Self::default();
            }
        };

        let last_module = record
            .get(KEY_LAST_MODULE)
            .and_then(Value::as_str)
            .and_then(Module::parse);

        let command_history = record
            .get(KEY_COMMAND_HISTORY)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            last_module,
            command_history,
        }
    }
}

/// Storage failure. Never fatal: reads fall back to defaults and writes are dropped.
#[derive(Debug)]
pub enum SessionError {
    /// Underlying file I/O failed
    Io(std::io::Error),
    /// The snapshot could not be serialized
    Encode(serde_json::Error),
    /// The store refused the operation (quota, read-only, test double)
    Unavailable(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "session storage I/O error: {}", e),
            SessionError::Encode(e) => write!(f, "session snapshot encoding error: {}", e),
            SessionError::Unavailable(msg) => write!(f, "session storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Encode(e) => Some(e),
            SessionError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e)
    }
}

/// Where the session record is kept
pub trait SessionStore {
    /// Raw record contents, or None if nothing has been stored yet
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Replace the stored record
    fn save(&self, contents: &str) -> Result<(), SessionError>;
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn load(&self) -> Result<Option<String>, SessionError> {
        (**self).load()
    }

    fn save(&self, contents: &str) -> Result<(), SessionError> {
        (**self).save(contents)
    }
}

/// Read and decode the snapshot. Missing or unreadable records yield defaults.
pub fn restore(store: &dyn SessionStore) -> SessionSnapshot {
    match store.load() {
        Ok(Some(raw)) => SessionSnapshot::from_json(&raw),
        Ok(None) => SessionSnapshot::default(),
        Err(e) => {
            tracing::warn!("could not read session, starting fresh: {}", e);
            SessionSnapshot::default()
        }
    }
}

/// Encode and write the snapshot
pub fn persist(store: &dyn SessionStore, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
    let json = snapshot.to_json()?;
    store.save(&json)
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, contents: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file first so a crash never leaves half a record
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store, used when no session path is available and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            failing: false,
        }
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            record: Mutex::new(None),
            failing: true,
        }
    }

    /// Current record contents
    pub fn record(&self) -> Option<String> {
        self.record.lock().ok().and_then(|r| r.clone())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        if self.failing {
            return Err(SessionError::Unavailable("store is failing".to_string()));
        }
        self.record
            .lock()
            .map(|r| r.clone())
            .map_err(|_| SessionError::Unavailable("store lock poisoned".to_string()))
    }

    fn save(&self, contents: &str) -> Result<(), SessionError> {
        if self.failing {
            return Err(SessionError::Unavailable("quota exceeded".to_string()));
        }
        let mut record = self
            .record
            .lock()
            .map_err(|_| SessionError::Unavailable("store lock poisoned".to_string()))?;
        *record = Some(contents.to_string());
        Ok(())
    }
}
