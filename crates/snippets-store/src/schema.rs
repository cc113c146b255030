//! Schema bootstrap for the snippets table
//!
//! Creates the table when it is missing and refuses to run against an
//! existing table that lacks the columns, the NOT NULL constraints or the
//! keyword uniqueness the store relies on. There is no migration history.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use snippets_core::errors::SnippetError;

pub const TABLE_NAME: &str = "snippets";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY NOT NULL,
    message TEXT NOT NULL
)";

/// Ensure the snippets table exists and has a usable shape
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_TABLE_SQL, []).map_err(from_rusqlite)?;
    verify_schema(conn)
}

/// Check an existing table for NOT NULL `keyword`/`message` columns and a
/// unique keyword
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let columns = table_columns(conn)?;

    for required in ["keyword", "message"] {
        let column = columns.iter().find(|c| c.name == required).ok_or_else(|| {
            SnippetError::Schema {
                reason: format!("missing column '{}'", required),
            }
        })?;
        // Reads map both columns straight to String.
        if !column.not_null {
            return Err(SnippetError::Schema {
                reason: format!("column '{}' is nullable", required),
            }
            .into());
        }
    }

    // Upsert depends on the database rejecting a second row per keyword.
    let keyword_is_sole_pk = columns
        .iter()
        .filter(|c| c.pk > 0)
        .map(|c| c.name.as_str())
        .eq(["keyword"]);

    if !keyword_is_sole_pk && !has_unique_keyword_index(conn)? {
        return Err(SnippetError::Schema {
            reason: "column 'keyword' is neither the primary key nor uniquely indexed"
                .to_string(),
        }
        .into());
    }

    Ok(())
}

struct ColumnInfo {
    name: String,
    not_null: bool,
    /// Position in the primary key, 0 when not part of it
    pk: i64,
}

fn table_columns(conn: &Connection) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn
        .prepare("SELECT name, \"notnull\", pk FROM pragma_table_info(?1)")
        .map_err(from_rusqlite)?;
    let columns = stmt
        .query_map([TABLE_NAME], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                not_null: row.get(1)?,
                pk: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(columns)
}

/// A full (non-partial) unique index on `keyword` alone
fn has_unique_keyword_index(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare(
            "SELECT il.name
             FROM pragma_index_list(?1) AS il
             WHERE il.\"unique\" = 1
               AND il.partial = 0
               AND (SELECT COUNT(*) FROM pragma_index_info(il.name)) = 1
               AND (SELECT name FROM pragma_index_info(il.name)) = 'keyword'",
        )
        .map_err(from_rusqlite)?;
    let exists = stmt.exists([TABLE_NAME]).map_err(from_rusqlite)?;
    Ok(exists)
}
