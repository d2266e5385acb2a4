//! Command-line argument definitions for the Weft CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control input/output paths, icon
//! resolution, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Weft diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input topology (JSON)
    #[arg(help = "Path to the input topology file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Base URL for icon references; icons resolve to
    /// `<icon-base>/<key>.svg`
    #[arg(long, default_value = "https://icons.example")]
    pub icon_base: String,

    /// Fetch icon bytes over HTTP and embed them inline instead of
    /// linking externally
    #[arg(long)]
    pub fetch_icons: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Builds the icon URL function handed to the engine.
    pub fn icon_url(&self) -> impl Fn(&str) -> String {
        let base = self.icon_base.trim_end_matches('/').to_string();
        move |key: &str| format!("{base}/{key}.svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_joins_base_and_key() {
        let args = Args::parse_from(["weft", "topology.json", "--icon-base", "http://0.1.2.3/"]);
        assert_eq!(
            args.icon_url()("precise/mongodb-21"),
            "http://0.1.2.3/precise/mongodb-21.svg"
        );
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["weft", "topology.json"]);
        assert_eq!(args.output, "out.svg");
        assert!(!args.fetch_icons);
        assert_eq!(args.log_level, "info");
    }
}
