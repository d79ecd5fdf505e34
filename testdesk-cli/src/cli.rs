use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal client for the testdesk test-management dashboard
#[derive(Parser)]
#[clap(name = "testdesk", version, about)]
pub struct Cli {
    /// Act as this user id or name (the TESTDESK_USER env var works too)
    #[clap(long)]
    pub user: Option<String>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive dashboard shell (the default)
    Shell,

    /// Write the dataset to a file
    Export {
        /// Output format: json or yaml
        #[clap(long, default_value = "json")]
        format: String,

        /// Destination file
        #[clap(long, default_value = "testdesk-export.json")]
        output: PathBuf,
    },
}
