//! Contract with the service that actually moves files.
//!
//! The session never transfers bytes itself. It asks a [`TransferService`] to
//! announce a selected file (yielding an invite code) or to retrieve the file
//! behind a code, and shows the outcome.

pub mod error;
pub mod memory;

use crate::FileHandle;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use error::TransferError;
pub use memory::MemoryTransferService;

/// Opaque code identifying a shared file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteCode(String);

impl InviteCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upload/announce and retrieval entry points of the external transfer service
pub trait TransferService: Send + Sync {
    /// Begin sharing `file` and return the code a peer can retrieve it with
    fn announce(&self, file: FileHandle) -> BoxFuture<'_, Result<InviteCode, TransferError>>;

    /// Resolve a trimmed invite code to the shared file
    fn retrieve(&self, code: String) -> BoxFuture<'_, Result<FileHandle, TransferError>>;
}
