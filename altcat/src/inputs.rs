use std::{fs::File, io, path::Path};

use crate::{Error, Result};

/// Opens every path read-only, in order, failing the whole batch on the first error.
///
/// Fail-fast and all-or-nothing: the first path that can't be opened aborts the run,
/// remaining paths are never tried, and the files opened so far are closed unread. A
/// missing file gets its own message, since that's the mistake people actually make.
pub(crate) fn open_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<File>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::NotFound {
                    path: path.to_path_buf(),
                },
                _ => Error::Open {
                    e,
                    path: path.to_path_buf(),
                },
            })
        })
        .collect()
}
