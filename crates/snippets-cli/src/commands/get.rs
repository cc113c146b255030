//! Get command
//!
//! Usage: snippets get <NAME>

use crate::output::Printer;
use clap::Args;
use snippets_store::SnippetStore;
use std::io::Write;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Name of the snippet
    pub name: String,
}

pub fn execute<W: Write>(
    store: &mut SnippetStore,
    args: GetArgs,
    printer: &mut Printer<W>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = store.get(&args.name)?;
    printer.snippet(&lookup)?;
    Ok(())
}
