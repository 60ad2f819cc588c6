//! Failure modes of a generation run.  All of them are fatal; nothing is retried.
use std::fmt;
use std::path::PathBuf;

use ss_core::err_impl;

use crate::model::EventKey;

/// An event whose foreign key does not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingKey {
    pub event: EventKey,
    pub id: u32,
}

impl fmt::Display for DanglingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id {} referenced by {}", self.id, self.event)
    }
}

err_impl! {ConfigError,
    #[error("{0} must be at least 1")]
    InvalidCount(String),

    #[error("malformed weight table: {0}")]
    MalformedWeights(String),
}

err_impl! {JoinError,
    #[error("no user matches {0}")]
    UnknownUser(DanglingKey),

    #[error("no track matches {0}")]
    UnknownTrack(DanglingKey),
}

err_impl! {ExportError,
    #[error("could not create output directory {}", .0.display())]
    CreateDir(PathBuf),

    #[error("could not write events to {}", .0.display())]
    Write(PathBuf),
}
