//! Module lookup for the flattener.

use std::collections::HashMap;
use std::path::PathBuf;

/// Source of library module content, keyed by module name.
///
/// `None` means the module is unavailable. Any read failure counts as
/// unavailable; the flattener falls back to the original directive line
/// rather than aborting.
pub trait ModuleSource {
    fn load(&self, name: &str) -> Option<String>;
}

/// Directory-backed module source reading `<root>/<name>`.
#[derive(Debug, Clone)]
pub struct LibDir {
    root: PathBuf,
}

impl LibDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LibDir { root: root.into() }
    }
}

impl ModuleSource for LibDir {
    fn load(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(name)).ok()
    }
}

/// In-memory module source, used by tests across the workspace.
impl ModuleSource for HashMap<String, String> {
    fn load(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
