//! TreeRenderer - depth-first recursive tree rendering

use std::io;
use std::path::Path;

use super::config::RenderConfig;
use super::entry::list_entries;

/// Callback for render output - receives one line's worth of information.
///
/// Formatters own the connector glyphs and the `/` suffix on directory
/// names; the renderer only reports structure.
pub trait RenderSink {
    /// The root line. Emitted once, before any entry.
    fn root(&mut self, name: &str) -> io::Result<()>;

    /// One child entry at the given prefix.
    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()>;

    /// An inline listing-failure marker at the given prefix.
    fn error(&mut self, prefix: &str, message: &str) -> io::Result<()>;
}

/// Recursive tree renderer.
///
/// Walks depth-first, pre-order: a directory's own line is emitted before
/// any of its children are visited. Each recursive call owns its prefix
/// string and its listing snapshot. Listing failures become inline marker
/// lines and never abort traversal of sibling or ancestor directories; only
/// sink write errors propagate.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the tree rooted at `root`.
    ///
    /// `root` is expected to be an existing directory; the entry point
    /// validates this once, not on recursive calls.
    pub fn render<S: RenderSink>(&self, root: &Path, sink: &mut S) -> io::Result<()> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        sink.root(&name)?;
        self.render_dir(root, 0, "", sink)
    }

    fn render_dir<S: RenderSink>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        sink: &mut S,
    ) -> io::Result<()> {
        let entries = match list_entries(path, &self.config) {
            Ok(entries) => entries,
            Err(err) => return sink.error(prefix, &listing_marker(&err)),
        };

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            sink.entry(&entry.name, entry.is_dir(), is_last, prefix)?;

            if entry.is_dir() && !self.at_max_depth(depth + 1) {
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                self.render_dir(&path.join(&entry.name), depth + 1, &child_prefix, sink)?;
            }
        }

        Ok(())
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Map a listing failure to its inline marker text.
fn listing_marker(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::PermissionDenied {
        "[Permission Denied]".to_string()
    } else {
        format!("[Error: {}]", err)
    }
}
