use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use intake_logging::LogDestination;

/// Terminal front end for the upload dashboard.
#[derive(Debug, Parser)]
#[command(name = "intake", version, about)]
pub struct Cli {
    /// RON file with dashboard settings. Defaults to ./intake.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[arg(long, default_value = "./intake.log")]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory downloads are saved into when a command names none.
    #[arg(long, default_value = "./downloads")]
    pub download_dir: PathBuf,

    /// Files dropped as the first batch on startup.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_initial_batch() {
        let cli = Cli::parse_from(["intake", "a.pdf", "b.png"]);
        assert_eq!(cli.log, LogTarget::File);
        assert_eq!(cli.download_dir, PathBuf::from("./downloads"));
        assert_eq!(cli.files, vec![PathBuf::from("a.pdf"), PathBuf::from("b.png")]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn log_target_flag() {
        let cli = Cli::parse_from(["intake", "--log", "both", "-v"]);
        assert_eq!(LogDestination::from(cli.log), LogDestination::Both);
        assert!(cli.verbose);
    }
}
