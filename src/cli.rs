use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubemon")]
#[command(version = crate::VERSION)]
#[command(about = "Kubernetes pod health and AI event analysis reports")]
#[command(long_about = "Reconciles polled pod snapshots from the KubeMon backend into one record per pod, derives restart and CrashLoopBackOff statistics, and normalizes AI event analyses into ordered, risk-ranked categories. Payloads are read from files or stdin.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a `/pods` payload and report pod health
    Pods {
        /// JSON payload file (`-` or omitted for stdin)
        #[arg(value_name = "PAYLOAD")]
        path: Option<PathBuf>,

        /// Output format (table, json, summary)
        #[arg(short, long)]
        format: Option<String>,

        /// List every reconciled pod, not only problematic ones
        #[arg(short, long)]
        all: bool,
    },

    /// Normalize an `/events/analyze` payload and report categories and overall risk
    Analysis {
        /// JSON payload file (`-` or omitted for stdin)
        #[arg(value_name = "PAYLOAD")]
        path: Option<PathBuf>,

        /// Output format (table, json, summary)
        #[arg(short, long)]
        format: Option<String>,

        /// Keep AI text as-is (skip phrase substitution)
        #[arg(long)]
        raw: bool,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration to ~/.kubemon.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
