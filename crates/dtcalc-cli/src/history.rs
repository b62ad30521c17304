//! Persistent line-editing history for the interactive prompt.
//!
//! History is loaded once when the prompt starts and saved once when it
//! exits. A missing file is the normal first-run case and is not reported.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    path: Option<PathBuf>,
}

impl HistoryStore {
    /// A store backed by `path`; `None` keeps history in memory only.
    pub fn new(path: Option<PathBuf>) -> Self {
        HistoryStore { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self, editor: &mut DefaultEditor) {
        let Some(path) = &self.path else {
            return;
        };
        match editor.load_history(path) {
            Ok(()) => debug!(
                "loaded {} history entries from {}",
                editor.history().len(),
                path.display()
            ),
            Err(ReadlineError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                debug!("no history file at {}", path.display());
            }
            Err(err) => warn!("could not load history from {}: {err}", path.display()),
        }
    }

    pub fn save(&self, editor: &mut DefaultEditor) {
        let Some(path) = &self.path else {
            return;
        };
        match editor.save_history(path) {
            Ok(()) => debug!("saved history to {}", path.display()),
            Err(err) => warn!("could not save history to {}: {err}", path.display()),
        }
    }
}
