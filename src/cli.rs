//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Formpilot CLI.
#[derive(Parser)]
#[command(name = "formpilot")]
#[command(about = "Desktop form-filling automation service")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server in foreground (default)
    Serve {
        /// Server host
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List stored form names
    Forms,

    /// Print the JSON Schema for a stored form
    Schema {
        /// Form name
        form: String,

        /// Mark every labelled field as required
        #[arg(long)]
        require_all: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an empty fillable template for a stored form
    Template {
        /// Form name
        form: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
