//! Locate and remove partial download artifacts left behind by
//! interrupted Soulseek transfers.
//!
//! The whole run is a single call: [`cleanup_directory`] scans the
//! configured root for files matching the incomplete-download patterns
//! and, unless the run is a dry run, deletes each one, collecting the
//! outcome into a [`CleaningReport`].

pub mod cleaner;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;

pub use self::cleaner::{cleanup_directory, remove_targets};
pub use self::config::{CleaningConfig, Settings, DEFAULT_PATTERNS};
pub use self::error::{Error, Result};
pub use self::report::{format_report, CleaningReport};
pub use self::scanner::gather_targets;
