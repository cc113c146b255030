//! Search command
//!
//! Usage: snippets search <STRING>

use crate::output::Printer;
use clap::Args;
use snippets_store::SnippetStore;
use std::io::Write;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// String to search for (matched literally, case-sensitive)
    pub string: String,
}

pub fn execute<W: Write>(
    store: &mut SnippetStore,
    args: SearchArgs,
    printer: &mut Printer<W>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = store.search(&args.string)?;
    printer.messages(&lookup)?;
    Ok(())
}
