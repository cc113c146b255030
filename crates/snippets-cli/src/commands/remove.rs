//! Remove command
//!
//! Usage: snippets remove <NAME>
//!
//! Removal is not implemented in the store; this command always fails with
//! a non-zero exit so scripts cannot mistake it for a deletion.

use clap::Args;
use snippets_store::SnippetStore;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Name of the snippet
    pub name: String,
}

pub fn execute(
    store: &mut SnippetStore,
    args: RemoveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    store.remove(&args.name)?;
    Ok(())
}
