//! Top-level error type for the library entry points.

use thiserror::Error;

use crate::engine::CompareError;
use crate::loader::LoadError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Compare(#[from] CompareError),
}
