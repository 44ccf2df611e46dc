//! Fatal errors raised while inspecting the firmware tree.
//!
//! A missing file is not an error; it is recorded in the validation output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PreflightError>;
