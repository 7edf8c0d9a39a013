//! Command execution implementations

use super::Commands;
use super::{export, inspect};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Info { file, lenient } => inspect::info(file, *lenient),
            Commands::Json { file, output, compact, lenient } => {
                export::json(file, output.as_deref(), *compact, *lenient)
            }
            Commands::Binary { file, output } => export::binary(file, output),
            Commands::Accessor { file, index, output } => {
                inspect::accessor(file, *index, output.as_deref())
            }
        }
    }
}
