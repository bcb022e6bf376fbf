//! Bough - tree, minus the clutter
//!
//! Prints a plain-text tree of a directory, skipping version-control and
//! build-artifact names by default.

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{OutputConfig, PlainFormatter, StreamFormatter};
pub use tree::{DirectoryEntry, EntryKind, IgnoreSets, RenderConfig, RenderSink, TreeRenderer};
