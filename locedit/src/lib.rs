#![forbid(unsafe_code)]
//! Core library for viewing and editing Apple `.strings` localization files.
//!
//! Scans a directory tree for `.strings` files, groups them by logical file
//! across language bundles, parses them into key-sorted pairs, and writes a
//! file back when a single translation changes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locedit::{LocalizationProvider, UpdateOutcome};
//!
//! let provider = LocalizationProvider::new();
//! let groups = provider.localizations("MyApp")?;
//!
//! let localization = &groups[0].localizations[0];
//! match provider.update_localization(localization, "greeting", "Hello!")? {
//!     UpdateOutcome::Unchanged => println!("nothing to do"),
//!     UpdateOutcome::Updated(updated) => println!("wrote {}", updated.path.display()),
//! }
//! # Ok::<(), locedit::Error>(())
//! ```
//!
//! # Behavior
//!
//! - Output files are always sorted by key, so diffs stay stable.
//! - Updating a key to its current value writes nothing.
//! - A file that fails to parse is listed with zero translations; the scan
//!   itself keeps going.
//! - All I/O is synchronous and blocking; concurrent updates to the same
//!   path are last-writer-wins and not guarded here.

pub mod error;
pub mod provider;
pub mod strings;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    provider::{LocalizationProvider, ScanConfig, UpdateOutcome},
    traits::Parser,
    types::{Localization, LocalizationGroup, LocalizationString},
};
