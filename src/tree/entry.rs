//! Directory listing and classification

use std::fs;
use std::io;
use std::path::Path;

use super::config::RenderConfig;

/// Kind of a directory child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single child of a listed directory.
///
/// Ephemeral: built per listing call and discarded after its line is
/// rendered.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List, classify, filter, and sort the immediate children of `path`.
///
/// Classification follows symlinks. Children whose metadata cannot be read
/// (broken symlinks, entries that vanish mid-listing) and children that are
/// neither files nor directories (sockets, fifos) are skipped without
/// comment. Directories sort before files; within a kind, names compare
/// case-insensitively.
pub fn list_entries(path: &Path, config: &RenderConfig) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let kind = match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => continue,
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if config.is_ignored(&name, kind) {
            continue;
        }
        if config.dirs_only && kind == EntryKind::File {
            continue;
        }

        entries.push(DirectoryEntry { name, kind });
    }

    entries.sort_by_key(|e| (e.kind == EntryKind::File, e.name.to_lowercase()));

    Ok(entries)
}
