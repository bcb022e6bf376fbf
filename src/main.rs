//! CLI entry point for bough

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use bough::{IgnoreSets, OutputConfig, RenderConfig, StreamFormatter, TreeRenderer};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bough")]
#[command(about = "Print a directory tree, skipping version-control and build-artifact clutter")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show all entries (disable the default ignore sets)
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    if !args.path.exists() {
        eprintln!("Error: Directory '{}' does not exist.", args.path.display());
        process::exit(1);
    }
    if !args.path.is_dir() {
        eprintln!("Error: '{}' is not a directory.", args.path.display());
        process::exit(1);
    }

    // Resolve the absolute path so the root line shows the real basename
    // even for "." or trailing-dot arguments.
    let root = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot resolve '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let ignore = if args.all {
        IgnoreSets::empty()
    } else {
        IgnoreSets::default()
    };

    let config = RenderConfig {
        ignore,
        ignore_patterns: args.ignore.clone(),
        max_depth: args.level,
        dirs_only: args.dirs_only,
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut formatter = StreamFormatter::new(output_config);

    let renderer = TreeRenderer::new(config);
    if let Err(e) = renderer.render(&root, &mut formatter) {
        eprintln!("bough: error writing output: {}", e);
        process::exit(1);
    }
}
