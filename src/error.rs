// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

use std::io;
use std::path::PathBuf;

/// I/O failure while checksumming a file. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The file the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Open { path, .. } | Error::Read { path, .. } => path,
        }
    }
}
