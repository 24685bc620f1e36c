use super::{Effect, RequestId};
use crate::FileHandle;
use crate::transfer::TransferError;
use uuid::Uuid;

/// Visible outcome of the last retrieval
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RetrievalStatus {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
        code: String,
    },
    Succeeded {
        file: FileHandle,
    },
    Failed {
        reason: String,
    },
}

/// Receive mode: the invite code being typed and the retrieval it triggers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiveState {
    invite_code: String,
    retrieval: RetrievalStatus,
}

impl ReceiveState {
    pub fn invite_code(&self) -> &str {
        &self.invite_code
    }

    pub fn retrieval_status(&self) -> &RetrievalStatus {
        &self.retrieval
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.retrieval, RetrievalStatus::Pending { .. })
    }

    /// Store the code exactly as typed
    pub fn set_invite_code(&mut self, text: impl Into<String>) {
        self.invite_code = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.invite_code.trim().is_empty() && !self.is_pending()
    }

    /// Start a retrieval with the trimmed code
    pub fn submit_retrieval(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }
        let code = self.invite_code.trim().to_string();
        let request_id = Uuid::new_v4();
        tracing::debug!("Submitting retrieval {} for code {}", request_id, code);
        self.retrieval = RetrievalStatus::Pending {
            request_id,
            code: code.clone(),
        };
        Some(Effect::Retrieve { request_id, code })
    }

    /// Apply a retrieval result; results for superseded requests are ignored
    pub fn complete_retrieval(
        &mut self,
        request_id: RequestId,
        result: Result<FileHandle, TransferError>,
    ) {
        match &self.retrieval {
            RetrievalStatus::Pending { request_id: pending, .. } if *pending == request_id => {}
            _ => {
                tracing::debug!("Ignoring stale retrieval result {}", request_id);
                return;
            }
        }

        self.retrieval = match result {
            Ok(file) => RetrievalStatus::Succeeded { file },
            Err(e) => RetrievalStatus::Failed {
                reason: e.to_string(),
            },
        };
    }
}
