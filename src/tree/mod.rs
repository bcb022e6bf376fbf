//! Directory tree walking and rendering
//!
//! Listing and classification live in `entry`, ignore rules and renderer
//! options in `config`, and the recursive renderer plus its output trait in
//! `render`. Rendering streams line by line through a `RenderSink`; nothing
//! is buffered beyond one directory's sorted listing.

mod config;
mod entry;
mod render;

pub use config::{IgnoreSets, RenderConfig, glob_match};
pub use entry::{DirectoryEntry, EntryKind, list_entries};
pub use render::{RenderSink, TreeRenderer};
