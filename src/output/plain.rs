//! Plain-text formatter buffering into a String
//!
//! Used by the library surface and by tests that want to assert on exact
//! output without capturing stdout.

use std::io;

use crate::tree::RenderSink;

/// Buffering formatter - collects the rendered tree as plain text.
#[derive(Debug, Default)]
pub struct PlainFormatter {
    buf: String,
}

impl PlainFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl RenderSink for PlainFormatter {
    fn root(&mut self, name: &str) -> io::Result<()> {
        self.buf.push_str(name);
        self.buf.push_str("/\n");
        Ok(())
    }

    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        self.buf.push_str(prefix);
        self.buf.push_str(connector);
        self.buf.push_str(name);
        if is_dir {
            self.buf.push('/');
        }
        self.buf.push('\n');
        Ok(())
    }

    fn error(&mut self, prefix: &str, message: &str) -> io::Result<()> {
        self.buf.push_str(prefix);
        self.buf.push_str(message);
        self.buf.push('\n');
        Ok(())
    }
}
