use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outcome")]
#[command(about = "Compose and render operation outcomes", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an outcome from flags and print it
    Render {
        /// Mark the outcome as failed
        #[arg(long)]
        fail: bool,

        /// Name of a catalog template to format (see `outcome catalog`)
        #[arg(long, conflicts_with = "message")]
        template: Option<String>,

        /// Literal message template, e.g. "{0} not found"
        #[arg(long)]
        message: Option<String>,

        /// Placeholder argument, in order: --arg first --arg second
        #[arg(long = "arg")]
        args: Vec<String>,

        /// Extra message appended verbatim (repeatable)
        #[arg(long = "note")]
        notes: Vec<String>,

        /// String payload to attach to the outcome
        #[arg(long)]
        data: Option<String>,

        /// TOML file with custom templates
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the message catalog
    Catalog {
        /// TOML file with custom templates
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
