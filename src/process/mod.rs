mod table;

pub use table::*;

use sysinfo::Pid;
use thiserror::Error;

/// One row of the displayed list. Fixed at insertion; rows are only ever
/// inserted or removed, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub name: String,
    pub pid: Pid,
}

/// Why a terminate request did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TerminateError {
    #[error("process {0} no longer exists")]
    ProcessNotFound(Pid),
    #[error("no permission to end process {0}")]
    PermissionDenied(Pid),
    #[error("ending processes is not supported on this platform")]
    Unsupported,
}
