//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines at debug level
    Development,
    /// JSON structured lines at info level
    Production,
}

impl Profile {
    fn default_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }

    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "snippets=debug",
            Profile::Production => "snippets=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility, appending to a log file
///
/// The file is created if missing. ANSI colouring is disabled so the file
/// stays greppable. `RUST_LOG` overrides the profile's default filter.
/// Only the first successful call in a process has any effect, and a
/// subscriber installed elsewhere (e.g. test capture) wins.
///
/// # Errors
///
/// Returns the I/O error if the log file cannot be opened.
pub fn init_to_file(profile: Profile, path: &Path) -> std::io::Result<()> {
    if INIT_ONCE.is_completed() {
        return Ok(());
    }
    let file = open_log_file(path)?;

    INIT_ONCE.call_once(|| {
        let writer = Mutex::new(file);
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.default_filter())
                .with_ansi(false)
                .with_writer(writer)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.default_filter())
                .with_writer(writer)
                .finish()
                .try_init(),
        };
    });

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
