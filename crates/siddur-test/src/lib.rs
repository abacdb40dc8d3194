//! Siddur integration test support.
//!
//! Re-exports the workspace crates under one name and locates the fixture
//! library shipped with this crate.

use std::path::PathBuf;

pub use siddur_app as app;
pub use siddur_core as core;
pub use siddur_luach as luach;
pub use siddur_markup as markup;
pub use siddur_service as service;

/// Directory holding the fixture documents and configuration.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// The fixture document library.
#[must_use]
pub fn prayers_dir() -> PathBuf {
    fixtures_dir().join("prayers")
}
