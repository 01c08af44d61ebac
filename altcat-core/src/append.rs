//! Append-mode handling for the output descriptor.
//!
//! Neither `splice(2)` nor `sendfile(2)` accepts a destination with `O_APPEND` set, so
//! the flag has to be dealt with before any transfer starts. [`normalize`] implements
//! the policy; [`is_append`] and [`clear_append`] are the mechanisms.

use std::os::fd::AsFd;

use nix::{
    fcntl::{FcntlArg, OFlag, fcntl},
    unistd::isatty,
};

use crate::{Error, Result};

/// Returns true if the descriptor has `O_APPEND` set.
pub fn is_append(fd: impl AsFd) -> Result<bool> {
    let flags = fcntl(fd, FcntlArg::F_GETFL).map_err(|e| Error::GetFlags { e })?;

    Ok(OFlag::from_bits_retain(flags).contains(OFlag::O_APPEND))
}

/// Clears `O_APPEND` on the descriptor, leaving the other status flags untouched.
pub fn clear_append(fd: impl AsFd) -> Result<()> {
    let fd = fd.as_fd();
    let flags = fcntl(fd, FcntlArg::F_GETFL).map_err(|e| Error::GetFlags { e })?;
    let cleared = OFlag::from_bits_retain(flags) & !OFlag::O_APPEND;

    fcntl(fd, FcntlArg::F_SETFL(cleared)).map_err(|e| Error::SetFlags { e })?;

    Ok(())
}

/// Ensures the descriptor is not in append mode, clearing the flag when that is safe.
///
/// Some launchers (`make`, notably) leave `O_APPEND` set on a terminal-connected stdout,
/// where the flag carries no meaning; it can be cleared there without consequence. On a
/// redirected descriptor the flag is left alone, since the caller may be relying on
/// append semantics to keep a file from being overwritten. If the flag is still set
/// after that, the transfer primitives can't be used and [`Error::AppendOnly`] is
/// returned rather than degrading to a buffered copy.
pub fn normalize(fd: impl AsFd) -> Result<()> {
    let fd = fd.as_fd();

    if is_append(fd)? && isatty(fd).map_err(|e| Error::Terminal { e })? {
        #[cfg(feature = "tracing")]
        tracing::debug!("clearing stray O_APPEND on a terminal-connected output");

        clear_append(fd)?;
    }

    if is_append(fd)? {
        return Err(Error::AppendOnly);
    }

    Ok(())
}
