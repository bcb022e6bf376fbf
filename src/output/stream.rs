//! Streaming output formatter
//!
//! Writes tree lines directly to stdout as the renderer produces them.
//! Directory names print blue and bold, inline error markers red, file
//! names unstyled.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::RenderSink;

use super::config::OutputConfig;

/// Streaming formatter - outputs directly to stdout without buffering.
pub struct StreamFormatter {
    stdout: StandardStream,
}

impl StreamFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn dir_color(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue)).set_bold(true);
        spec
    }
}

impl RenderSink for StreamFormatter {
    fn root(&mut self, name: &str) -> io::Result<()> {
        self.stdout.set_color(&self.dir_color())?;
        writeln!(self.stdout, "{}/", name)?;
        self.stdout.reset()
    }

    fn entry(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        write!(self.stdout, "{}{}", prefix, connector)?;

        if is_dir {
            self.stdout.set_color(&self.dir_color())?;
            writeln!(self.stdout, "{}/", name)?;
            self.stdout.reset()
        } else {
            writeln!(self.stdout, "{}", name)
        }
    }

    fn error(&mut self, prefix: &str, message: &str) -> io::Result<()> {
        write!(self.stdout, "{}", prefix)?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(self.stdout, "{}", message)?;
        self.stdout.reset()
    }
}
