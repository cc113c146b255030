//! Put command
//!
//! Usage: snippets put <NAME> <SNIPPET>

use crate::output::Printer;
use clap::Args;
use snippets_store::SnippetStore;
use std::io::Write;

#[derive(Debug, Args)]
pub struct PutArgs {
    /// Name of the snippet
    pub name: String,

    /// Snippet text
    pub snippet: String,
}

pub fn execute<W: Write>(
    store: &mut SnippetStore,
    args: PutArgs,
    printer: &mut Printer<W>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stored = store.put(&args.name, &args.snippet)?;
    printer.stored(&stored)?;
    Ok(())
}
