//! `xmldoc members` command implementation.

use std::path::PathBuf;

use clap::Args;
use xmldoc_members::DocumentationFile;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the members command.
#[derive(Args)]
pub(crate) struct MembersArgs {
    /// Documentation file (`.xml`) produced by the compiler.
    file: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl MembersArgs {
    /// Execute the members command.
    ///
    /// # Errors
    ///
    /// Returns an error if the documentation file cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let file = DocumentationFile::load(&self.file)?;
        for id in file.member_ids() {
            output.document(id)?;
        }
        output.info(&summary(&file));
        Ok(())
    }
}

/// One-line description of a documentation file.
fn summary(file: &DocumentationFile) -> String {
    let count = file.len();
    let noun = if count == 1 { "member" } else { "members" };
    match file.assembly() {
        Some(assembly) => format!("{count} {noun} in {assembly}"),
        None => format!("{count} {noun}"),
    }
}
