//! Breaking-change detection between two versions of an OpenAPI 3 document.
//!
//! A [`Comparator`] runs a catalogue of independent [`Rule`]s over an old and a
//! new document and collects every [`Change`] they report into a [`Diff`].
//! Each change carries a [`Severity`] and a flag saying whether clients of the
//! old document may break.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let diff = oas_compat::compare_files(Path::new("v1.yaml"), Path::new("v2.yaml"))?;
//! if diff.has_breaking() {
//!     println!("{}", oas_compat::report::render_text(&diff));
//! }
//! # Ok::<(), oas_compat::Error>(())
//! ```

use std::path::Path;

use openapiv3::OpenAPI;

pub mod change;
pub mod diff;
pub mod document;
pub mod engine;
pub mod error;
pub mod loader;
pub mod report;
pub mod rules;
pub mod version;

pub use change::{Change, ChangeError, ChangeKind, Location, Severity};
pub use diff::Diff;
pub use engine::{Comparator, CompareError};
pub use error::{Error, Result};
pub use rules::Rule;

/// Compares two parsed documents with the full rule catalogue.
pub fn compare(old: &OpenAPI, new: &OpenAPI) -> std::result::Result<Diff, CompareError> {
    Comparator::new().compare(old, new)
}

/// Loads both documents from disk and compares them.
pub fn compare_files(old: &Path, new: &Path) -> Result<Diff> {
    let old = loader::load_file(old)?;
    let new = loader::load_file(new)?;
    Ok(compare(&old, &new)?)
}
