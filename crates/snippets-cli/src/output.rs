//! Terminal rendering of store results
//!
//! Text mode prints one row per line and the classic "404" messages on a
//! miss; JSON mode prints one document per command.

use serde::Serialize;
use snippets_core::{Lookup, Snippet};
use std::io::{self, Write};

pub const SNIPPET_NOT_FOUND: &str = "404: Snippet Not Found";
pub const NO_KEYWORDS_FOUND: &str = "404: No Keywords Found";
pub const NO_MESSAGES_FOUND: &str = "404: No Messages Found";

pub struct Printer<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn stored(&mut self, snippet: &Snippet) -> io::Result<()> {
        if self.json {
            return self.json_line(snippet);
        }
        writeln!(
            self.out,
            "Stored {:?} as {:?}",
            snippet.message, snippet.keyword
        )
    }

    pub fn snippet(&mut self, lookup: &Lookup<String>) -> io::Result<()> {
        if self.json {
            return self.json_line(lookup);
        }
        match lookup {
            Lookup::Found(message) => writeln!(self.out, "Retrieved snippet: {:?}", message),
            Lookup::NotFound => writeln!(self.out, "{}", SNIPPET_NOT_FOUND),
        }
    }

    pub fn keywords(&mut self, lookup: &Lookup<Vec<String>>) -> io::Result<()> {
        self.rows(lookup, "Keywords:", NO_KEYWORDS_FOUND)
    }

    pub fn messages(&mut self, lookup: &Lookup<Vec<String>>) -> io::Result<()> {
        self.rows(lookup, "Snippets:", NO_MESSAGES_FOUND)
    }

    fn rows(
        &mut self,
        lookup: &Lookup<Vec<String>>,
        heading: &str,
        not_found: &str,
    ) -> io::Result<()> {
        if self.json {
            return self.json_line(lookup);
        }
        match lookup {
            Lookup::Found(rows) => {
                writeln!(self.out, "{}", heading)?;
                for row in rows {
                    writeln!(self.out, "{}", row)?;
                }
                Ok(())
            }
            Lookup::NotFound => writeln!(self.out, "{}", not_found),
        }
    }

    fn json_line<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(json: bool, f: F) -> String
    where
        F: FnOnce(&mut Printer<Vec<u8>>) -> io::Result<()>,
    {
        let mut printer = Printer::new(Vec::new(), json);
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_stored_text() {
        let out = render(false, |p| p.stored(&Snippet::new("k", "say \"hi\"")));
        assert_eq!(out, "Stored \"say \\\"hi\\\"\" as \"k\"\n");
    }

    #[test]
    fn test_snippet_not_found_text() {
        let out = render(false, |p| p.snippet(&Lookup::NotFound));
        assert_eq!(out, "404: Snippet Not Found\n");
    }

    #[test]
    fn test_keywords_one_per_line() {
        let rows = Lookup::Found(vec!["apple".to_string(), "banana".to_string()]);
        let out = render(false, |p| p.keywords(&rows));
        assert_eq!(out, "Keywords:\napple\nbanana\n");
    }

    #[test]
    fn test_messages_not_found_text() {
        let out = render(false, |p| p.messages(&Lookup::NotFound));
        assert_eq!(out, "404: No Messages Found\n");
    }

    #[test]
    fn test_json_lookup_shapes() {
        let found = render(true, |p| p.snippet(&Lookup::Found("v".to_string())));
        assert_eq!(found, "{\"status\":\"found\",\"value\":\"v\"}\n");

        let missing = render(true, |p| p.keywords(&Lookup::NotFound));
        assert_eq!(missing, "{\"status\":\"not_found\"}\n");
    }

    #[test]
    fn test_json_stored() {
        let out = render(true, |p| p.stored(&Snippet::new("k", "v")));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "keyword": "k", "message": "v" }));
    }
}
