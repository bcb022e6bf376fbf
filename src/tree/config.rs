//! Configuration types for tree rendering

use std::collections::HashSet;

use glob::Pattern;

use super::entry::EntryKind;

/// Directory names skipped by default: version control and build artifacts.
const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules", ".next", "__pycache__", ".env"];

/// File names skipped by default: platform metadata and placeholders.
const DEFAULT_IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", ".gitkeep"];

/// Names excluded from traversal and display.
///
/// Holds one set per entry kind. A name is only checked against the set
/// matching its kind: a file named `.git` is not ignored by the directory
/// set, and vice versa.
#[derive(Debug, Clone)]
pub struct IgnoreSets {
    pub dirs: HashSet<String>,
    pub files: HashSet<String>,
}

impl IgnoreSets {
    /// Ignore nothing (used by `--all`).
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
        }
    }

    pub fn is_ignored(&self, name: &str, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Directory => self.dirs.contains(name),
            EntryKind::File => self.files.contains(name),
        }
    }
}

impl Default for IgnoreSets {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub ignore: IgnoreSets,
    /// Extra name patterns to skip, matched against both files and directories.
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreSets::default(),
            ignore_patterns: Vec::new(),
            max_depth: None,
            dirs_only: false,
        }
    }
}

impl RenderConfig {
    /// Check whether a child should be dropped from the listing.
    pub fn is_ignored(&self, name: &str, kind: EntryKind) -> bool {
        if self.ignore.is_ignored(name, kind) {
            return true;
        }
        self.ignore_patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
    }
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
