use clap::Subcommand;
use std::path::PathBuf;

pub mod execute;
pub mod export;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the container header and a sectioned dump of the document
    Info {
        /// Source .vrm / .glb file
        file: PathBuf,

        /// Accept documents with missing top-level sections
        #[arg(long)]
        lenient: bool,
    },

    /// Export the parsed document as JSON
    Json {
        /// Source .vrm / .glb file
        file: PathBuf,

        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,

        /// Accept documents with missing top-level sections
        #[arg(long)]
        lenient: bool,
    },

    /// Write the BIN chunk payload to a file
    Binary {
        /// Source .vrm / .glb file
        file: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Resolve one accessor out of the BIN chunk
    Accessor {
        /// Source .vrm / .glb file
        file: PathBuf,

        /// Accessor index
        index: usize,

        /// Write the tightly packed bytes to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
