//! In-process transfer service.
//!
//! Keeps announced files in a registry keyed by invite code. Codes are drawn
//! from the dynamic port range, which is where a socket-based sharer would
//! serve the file from. No bytes are moved.

use super::{InviteCode, TransferError, TransferService};
use crate::FileHandle;
use futures_util::future::BoxFuture;
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// First code handed out (start of the IANA dynamic port range)
pub const DYNAMIC_CODE_START: u16 = 49152;
/// Last code handed out
pub const DYNAMIC_CODE_END: u16 = 65535;

const CODE_SPACE: usize = (DYNAMIC_CODE_END - DYNAMIC_CODE_START) as usize + 1;

#[derive(Default)]
pub struct MemoryTransferService {
    shared: RwLock<HashMap<u16, FileHandle>>,
    /// Artificial delay applied to every call
    latency: Duration,
}

impl MemoryTransferService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each response, to make pending states observable
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of files currently announced
    pub async fn shared_count(&self) -> usize {
        self.shared.read().await.len()
    }

    async fn offer(&self, file: FileHandle) -> Result<InviteCode, TransferError> {
        let mut shared = self.shared.write().await;
        if shared.len() >= CODE_SPACE {
            tracing::warn!("All {} invite codes are in use", CODE_SPACE);
            return Err(TransferError::Unavailable);
        }

        // Draw until we hit an unused code
        let code = loop {
            let candidate = rand::rng().random_range(DYNAMIC_CODE_START..=DYNAMIC_CODE_END);
            if !shared.contains_key(&candidate) {
                break candidate;
            }
        };

        tracing::info!("Offering {} under code {}", file.name, code);
        shared.insert(code, file);
        Ok(InviteCode::new(code.to_string()))
    }

    async fn lookup(&self, code: String) -> Result<FileHandle, TransferError> {
        let key: u16 = code
            .parse()
            .map_err(|_| TransferError::InvalidCode(code.clone()))?;

        match self.shared.read().await.get(&key) {
            Some(file) => {
                tracing::info!("Code {} resolved to {}", code, file.name);
                Ok(file.clone())
            }
            None => {
                tracing::warn!("No file found for code {}", code);
                Err(TransferError::NotFound(code))
            }
        }
    }
}

impl TransferService for MemoryTransferService {
    fn announce(&self, file: FileHandle) -> BoxFuture<'_, Result<InviteCode, TransferError>> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            self.offer(file).await
        })
    }

    fn retrieve(&self, code: String) -> BoxFuture<'_, Result<FileHandle, TransferError>> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            self.lookup(code).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_announce_issues_code_in_dynamic_range() {
        let service = MemoryTransferService::new();
        let code = service
            .announce(FileHandle::new("notes.txt", 42))
            .await
            .expect("Announce should succeed");

        let port: u16 = code.as_str().parse().expect("Code should be numeric");
        assert!((DYNAMIC_CODE_START..=DYNAMIC_CODE_END).contains(&port));
        assert_eq!(service.shared_count().await, 1);
    }

    #[tokio::test]
    async fn test_codes_are_unique() {
        let service = MemoryTransferService::new();
        let mut codes = std::collections::HashSet::new();
        for i in 0..200 {
            let code = service
                .announce(FileHandle::new(format!("file_{}.bin", i), i))
                .await
                .unwrap();
            assert!(codes.insert(code), "Duplicate invite code issued");
        }
    }

    #[tokio::test]
    async fn test_retrieve_round_trip() {
        let service = MemoryTransferService::new();
        let file = FileHandle::new("photo.png", 2048);
        let code = service.announce(file.clone()).await.unwrap();

        let retrieved = service.retrieve(code.to_string()).await.unwrap();
        assert_eq!(retrieved, file);
    }

    #[tokio::test]
    async fn test_retrieve_rejects_non_numeric_code() {
        let service = MemoryTransferService::new();
        let err = service.retrieve("abc".to_string()).await.unwrap_err();
        assert_eq!(err, TransferError::InvalidCode("abc".to_string()));
    }

    #[tokio::test]
    async fn test_retrieve_unknown_code() {
        let service = MemoryTransferService::new();
        let err = service.retrieve("50000".to_string()).await.unwrap_err();
        assert_eq!(err, TransferError::NotFound("50000".to_string()));
    }
}
