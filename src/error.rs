//! The error module holds the crate-wide error type. Note that the analysis
//! functions in [system](../system/index.html) never fail: bad or dangling
//! data degrades to empty results. Errors only come from building models and
//! from the ingestion boundary.

use thiserror::Error;

/// An error type for when model construction or ingestion goes awry.
#[derive(Error, Debug)]
pub enum Error {
    /// A builder was missing a required field
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// A payload handed to the ingestion layer could not be parsed
    #[error("ingest failed: {0}")]
    Ingest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
