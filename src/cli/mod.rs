//! Command-line interface: argument parsing plus the terminal
//! implementations of the renderer and field-collector capabilities.

mod terminal;

pub use terminal::{StdinCollector, TerminalRenderer};

use clap::{Parser, Subcommand};

/// Galleria - virtual art gallery engine
#[derive(Parser)]
#[command(name = "galleria")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive gallery shell over the hash-route surface
    #[command(alias = "b")]
    Browse,

    /// One-shot search across artworks and artists
    #[command(alias = "s")]
    Search {
        /// Search query, e.g. "Sun"
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Reinitialize the snapshot from the seed dataset
    Reset,
}
