//! The core transfer machinery used by `altcat`.
//!
//! Everything here works on plain borrowed descriptors (`impl AsFd`), so callers can
//! point it at stdout, a pipe, or a scratch file interchangeably. The interesting part
//! is [`transfer`]: it moves a file's contents to another descriptor entirely inside
//! the kernel, picking between `splice(2)` and `sendfile(2)` based on which one the
//! descriptor pairing supports.

use std::os::fd::AsFd;

pub use nix;
use nix::{
    errno::Errno,
    fcntl::{SpliceFFlags, splice},
    sys::{sendfile::sendfile, stat::fstat},
};
use thiserror::Error;

pub mod append;

pub type Result<T> = core::result::Result<T, Error>;

/// Moves the full contents of `input` to `output` without copying through user space.
///
/// The input's size is taken from a single `fstat` at the start of the call, and exactly
/// that many bytes are requested from the kernel. `splice` is tried first, since at
/// least one pipe endpoint is the common case when stdout is a shell pipe; if the
/// pairing isn't spliceable the kernel reports `EINVAL` and we retry with `sendfile`,
/// which only needs the *source* to be a regular file.
///
/// Returns the number of bytes moved. A transfer that moves fewer bytes than the stat
/// reported is an error, not something to resume: the size was fixed at stat time, so a
/// short result means the primitive itself misbehaved.
pub fn transfer(input: impl AsFd, output: impl AsFd) -> Result<u64> {
    let input = input.as_fd();
    let output = output.as_fd();

    let size = fstat(input).map_err(|e| Error::Stat { e })?.st_size as usize;

    let moved = match splice(input, None, output, None, size, SpliceFFlags::empty()) {
        Ok(moved) => moved,
        Err(Errno::EINVAL) => {
            // splice() requires at least one endpoint to be a pipe, and EINVAL is how it
            // reports a pairing with none. That's the one failure the fallback covers;
            // anything else from either primitive is fatal.
            #[cfg(feature = "tracing")]
            tracing::debug!(size, "neither descriptor is a pipe; falling back to sendfile");

            sendfile(output, input, None, size).map_err(|e| Error::Transfer { e })?
        }
        Err(e) => return Err(Error::Transfer { e }),
    };

    if moved != size {
        return Err(Error::ShortTransfer {
            expected: size as u64,
            moved: moved as u64,
        });
    }

    Ok(moved as u64)
}

/// Errors returned by `altcat-core`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to append to files")]
    AppendOnly,

    #[error("querying status flags on the output descriptor: {e}")]
    GetFlags {
        #[source]
        e: Errno,
    },

    #[error("updating status flags on the output descriptor: {e}")]
    SetFlags {
        #[source]
        e: Errno,
    },

    #[error("short transfer: moved {moved} of {expected} bytes")]
    ShortTransfer { expected: u64, moved: u64 },

    #[error("querying the size of the input: {e}")]
    Stat {
        #[source]
        e: Errno,
    },

    #[error("checking whether the output descriptor is a terminal: {e}")]
    Terminal {
        #[source]
        e: Errno,
    },

    #[error("transferring data: {e}")]
    Transfer {
        #[source]
        e: Errno,
    },
}
