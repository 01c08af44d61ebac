use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors returned by `altcat`.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error("unable to open {}: file does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to open {}: {e}", path.display())]
    Open {
        #[source]
        e: io::Error,
        path: PathBuf,
    },

    #[error("no input files given")]
    Usage,
}
