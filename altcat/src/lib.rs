//! A `cat` that never copies file contents through user space.
//!
//! The whole program is the pipeline in [`run`]: normalize the output descriptor out of
//! append mode, open every input up front, then hand each one to the kernel-side
//! transfer engine in [`core`] in command line order. There is no buffering, no
//! concurrency, and no partial-success reporting; the first failure aborts the run.

use std::{os::fd::AsFd, path::Path};

pub use altcat_core as core;
use altcat_core::append;

pub use error::Error;

mod error;
mod inputs;

pub type Result<T> = ::core::result::Result<T, Error>;

/// Concatenates the named files to `output` using zero-copy kernel transfers.
///
/// The output is an explicit handle rather than ambient process state, so callers (and
/// tests) can point it at a pipe or a scratch file as easily as at stdout.
///
/// All inputs are opened before any byte moves: a path that can't be opened aborts the
/// run with nothing written, even for files earlier in the list that opened fine. An
/// empty path list is a usage error, caught before the output descriptor is touched.
pub fn run<P: AsRef<Path>>(output: impl AsFd, paths: impl IntoIterator<Item = P>) -> Result<()> {
    let output = output.as_fd();

    let paths: Vec<P> = paths.into_iter().collect();
    if paths.is_empty() {
        return Err(Error::Usage);
    }

    append::normalize(output)?;

    // Each input is consumed exactly once, in list order, and dropped (closed) as soon
    // as its bytes have landed.
    for input in inputs::open_all(&paths)? {
        altcat_core::transfer(&input, output)?;
    }

    Ok(())
}
