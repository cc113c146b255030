//! Catalog command
//!
//! Usage: snippets catalog

use crate::output::Printer;
use snippets_store::SnippetStore;
use std::io::Write;

pub fn execute<W: Write>(
    store: &mut SnippetStore,
    printer: &mut Printer<W>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = store.catalog()?;
    printer.keywords(&lookup)?;
    Ok(())
}
