//! Snippet store operations
//!
//! `SnippetStore` owns the process's single SQLite connection. Every
//! operation runs in its own transaction; a `rusqlite::Transaction` rolls
//! back when dropped, so an early `?` return never leaves a transaction
//! open on the connection.

use crate::db;
use crate::errors::{from_rusqlite, is_unique_violation, persistence_in, Result};
use crate::schema;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use snippets_core::errors::SnippetError;
use snippets_core::{log_op_end, log_op_error, log_op_not_found, log_op_start};
use snippets_core::{Lookup, Snippet};
use std::path::Path;
use std::time::Instant;

const OP_PUT: &str = "put";
const OP_GET: &str = "get";
const OP_CATALOG: &str = "catalog";
const OP_SEARCH: &str = "search";
const OP_REMOVE: &str = "remove";

/// Outcome of the insert half of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAttempt {
    /// A new row was written
    Inserted,
    /// The keyword is taken; the caller must update instead
    AlreadyExists,
}

impl InsertAttempt {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertAttempt::Inserted => "inserted",
            InsertAttempt::AlreadyExists => "updated",
        }
    }
}

/// Named snippet storage backed by one SQLite connection
///
/// Operations take `&mut self`: the connection is never shared between two
/// in-flight operations.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open (or create) a file-backed store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an already-open connection, creating the table if needed
    pub fn from_connection(conn: Connection) -> Result<Self> {
        schema::ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Store `snippet` under `name`, replacing any existing message
    ///
    /// Returns the stored snippet.
    ///
    /// # Errors
    ///
    /// `Persistence` for any database failure other than the keyword
    /// already existing; `ConstraintViolation` if the row vanished between
    /// the insert attempt and the update.
    pub fn put(&mut self, name: &str, snippet: &str) -> Result<Snippet> {
        let started = Instant::now();
        log_op_start!(OP_PUT, keyword = name, message_len = snippet.len());

        match self.upsert(name, snippet) {
            Ok(attempt) => {
                log_op_end!(
                    OP_PUT,
                    duration_ms = elapsed_ms(started),
                    keyword = name,
                    outcome = attempt.as_str()
                );
                Ok(Snippet::new(name, snippet))
            }
            Err(err) => {
                log_op_error!(OP_PUT, err.clone(), duration_ms = elapsed_ms(started), keyword = name);
                Err(err)
            }
        }
    }

    /// Look up the message stored under `name`
    ///
    /// # Errors
    ///
    /// `Persistence` if the database cannot be read. A missing keyword is
    /// `Ok(Lookup::NotFound)`.
    pub fn get(&mut self, name: &str) -> Result<Lookup<String>> {
        let started = Instant::now();
        log_op_start!(OP_GET, keyword = name);

        let result = self
            .with_read(OP_GET, |tx| {
                tx.query_row(
                    "SELECT message FROM snippets WHERE keyword = ?1",
                    [name],
                    |row| row.get::<_, String>(0),
                )
                .optional()
            })
            .map(Lookup::from);

        match result {
            Ok(found @ Lookup::Found(_)) => {
                log_op_end!(OP_GET, duration_ms = elapsed_ms(started), keyword = name);
                Ok(found)
            }
            Ok(Lookup::NotFound) => {
                log_op_not_found!(OP_GET, duration_ms = elapsed_ms(started), keyword = name);
                Ok(Lookup::NotFound)
            }
            Err(err) => {
                log_op_error!(OP_GET, err.clone(), duration_ms = elapsed_ms(started), keyword = name);
                Err(err)
            }
        }
    }

    /// Every keyword in the table, ascending
    pub fn catalog(&mut self) -> Result<Lookup<Vec<String>>> {
        let started = Instant::now();
        log_op_start!(OP_CATALOG);

        let result = self.with_read(OP_CATALOG, |tx| {
            query_strings(tx, "SELECT keyword FROM snippets ORDER BY keyword", [])
        });

        finish_rows(OP_CATALOG, started, "", result)
    }

    /// Every message containing `substring`, ordered by keyword
    ///
    /// Matching is a case-sensitive literal containment test on the bound
    /// value: `%`, `_` and quotes in `substring` carry no special meaning.
    pub fn search(&mut self, substring: &str) -> Result<Lookup<Vec<String>>> {
        let started = Instant::now();
        log_op_start!(OP_SEARCH, pattern = substring);

        let result = self.with_read(OP_SEARCH, |tx| {
            query_strings(
                tx,
                "SELECT message FROM snippets WHERE instr(message, ?1) > 0 ORDER BY keyword",
                [substring],
            )
        });

        finish_rows(OP_SEARCH, started, substring, result)
    }

    /// Remove the snippet stored under `name`
    ///
    /// # Errors
    ///
    /// Always fails with `SnipErrorKind::NotImplemented` and leaves the
    /// table untouched, whether or not `name` exists.
    pub fn remove(&mut self, name: &str) -> Result<Lookup<()>> {
        let started = Instant::now();
        log_op_start!(OP_REMOVE, keyword = name);

        let err: snippets_core::SnipError = SnippetError::RemoveUnimplemented {
            keyword: name.to_string(),
        }
        .into();
        log_op_error!(OP_REMOVE, err.clone(), duration_ms = elapsed_ms(started), keyword = name);
        Err(err)
    }

    /// Insert, falling back to an update in a fresh transaction on conflict
    fn upsert(&mut self, name: &str, snippet: &str) -> Result<InsertAttempt> {
        let tx = self.conn.transaction().map_err(persistence_in(OP_PUT))?;

        match try_insert(&tx, name, snippet)? {
            InsertAttempt::Inserted => {
                tx.commit().map_err(persistence_in(OP_PUT))?;
                Ok(InsertAttempt::Inserted)
            }
            InsertAttempt::AlreadyExists => {
                tx.rollback().map_err(persistence_in(OP_PUT))?;

                let tx = self.conn.transaction().map_err(persistence_in(OP_PUT))?;
                let updated = tx
                    .execute(
                        "UPDATE snippets SET message = ?1 WHERE keyword = ?2",
                        params![snippet, name],
                    )
                    .map_err(persistence_in(OP_PUT))?;
                if updated == 0 {
                    return Err(SnippetError::UpsertLostRow {
                        keyword: name.to_string(),
                    }
                    .into());
                }
                tx.commit().map_err(persistence_in(OP_PUT))?;
                Ok(InsertAttempt::AlreadyExists)
            }
        }
    }

    /// Run a read inside its own transaction and commit it
    fn with_read<T, F>(&mut self, op: &'static str, read: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    {
        let tx = self.conn.transaction().map_err(persistence_in(op))?;
        let value = read(&tx).map_err(persistence_in(op))?;
        tx.commit().map_err(persistence_in(op))?;
        Ok(value)
    }
}

fn try_insert(tx: &Transaction<'_>, name: &str, snippet: &str) -> Result<InsertAttempt> {
    match tx.execute(
        "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)",
        params![name, snippet],
    ) {
        Ok(_) => Ok(InsertAttempt::Inserted),
        Err(err) if is_unique_violation(&err) => Ok(InsertAttempt::AlreadyExists),
        Err(err) => Err(from_rusqlite(err).with_op(OP_PUT).with_keyword(name)),
    }
}

fn query_strings<P: rusqlite::Params>(
    tx: &Transaction<'_>,
    sql: &str,
    params: P,
) -> rusqlite::Result<Vec<String>> {
    let mut stmt = tx.prepare(sql)?;
    let rows = stmt
        .query_map(params, |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Log and wrap the result of a multi-row read
fn finish_rows(
    op: &'static str,
    started: Instant,
    pattern: &str,
    result: Result<Vec<String>>,
) -> Result<Lookup<Vec<String>>> {
    match result {
        Ok(rows) if rows.is_empty() => {
            log_op_not_found!(op, duration_ms = elapsed_ms(started), pattern = pattern);
            Ok(Lookup::NotFound)
        }
        Ok(rows) => {
            log_op_end!(
                op,
                duration_ms = elapsed_ms(started),
                pattern = pattern,
                row_count = rows.len()
            );
            Ok(Lookup::from_rows(rows))
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = elapsed_ms(started), pattern = pattern);
            Err(err)
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
