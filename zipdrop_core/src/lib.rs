//! ZipDrop core: session state for the share/receive view and the backend
//! that runs transfer requests on its behalf.
//!
//! - [`session`]: the per-view [`Session`] and its transitions
//! - [`transfer`]: the [`TransferService`] contract and an in-process implementation
//! - [`format`]: byte counts for display
//! - [`config`]: persisted app settings

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub mod config;
pub mod file_handle;
pub mod format;
pub mod session;
pub mod transfer;

pub use config::AppConfig;
pub use file_handle::FileHandle;
pub use format::format_bytes;
pub use session::{Effect, Mode, RequestId, Session, SessionEvent};
pub use transfer::{InviteCode, MemoryTransferService, TransferError, TransferService};

//Command from GUI to Core
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Share a file and obtain its invite code
    Announce {
        request_id: RequestId,
        file: FileHandle,
    },
    /// Resolve an invite code
    Retrieve { request_id: RequestId, code: String },
    /// Session closed: abandon in-flight requests and stop
    Shutdown,
}

//Report from Core to GUI
#[derive(Debug, Clone)]
pub enum AppEvent {
    Status(String),

    Announced {
        request_id: RequestId,
        result: Result<InviteCode, TransferError>,
    },

    Retrieved {
        request_id: RequestId,
        result: Result<FileHandle, TransferError>,
    },
}

impl AppCommand {
    /// Command that carries out a session effect, if it runs on the backend
    pub fn from_effect(effect: Effect) -> Option<Self> {
        match effect {
            Effect::OpenFilePicker => None,
            Effect::Announce { request_id, file } => Some(Self::Announce { request_id, file }),
            Effect::Retrieve { request_id, code } => Some(Self::Retrieve { request_id, code }),
        }
    }
}

impl AppEvent {
    /// Session event to apply for this backend report
    pub fn into_session_event(self) -> Option<SessionEvent> {
        match self {
            AppEvent::Status(_) => None,
            AppEvent::Announced { request_id, result } => {
                Some(SessionEvent::AnnounceCompleted { request_id, result })
            }
            AppEvent::Retrieved { request_id, result } => {
                Some(SessionEvent::RetrievalCompleted { request_id, result })
            }
        }
    }
}

pub async fn run_backend(
    mut cmd_rx: mpsc::Receiver<AppCommand>,
    event_tx: mpsc::Sender<AppEvent>,
    service: Arc<dyn TransferService>,
    config: AppConfig,
) {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    let shutdown = CancellationToken::new();
    let limit = config.request_timeout();

    let _ = event_tx
        .send(AppEvent::Status(format!(
            "Transfer backend ready (timeout {}s)",
            limit.as_secs()
        )))
        .await;

    // Main loop: Wait for commands from UI
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            AppCommand::Announce { request_id, file } => {
                tracing::info!(
                    "Announcing {} ({}, {})",
                    file.name,
                    format_bytes(file.size_bytes),
                    file.mime_type
                );
                let service = service.clone();
                let evt = event_tx.clone();
                let token = shutdown.child_token();

                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => return,
                        res = with_timeout(limit, service.announce(file)) => res,
                    };
                    match &result {
                        Ok(code) => tracing::info!("Announce {} issued code {}", request_id, code),
                        Err(e) => tracing::warn!("Announce {} failed: {}", request_id, e),
                    }
                    let _ = evt.send(AppEvent::Announced { request_id, result }).await;
                });
            }
            AppCommand::Retrieve { request_id, code } => {
                tracing::info!("Retrieving code {}", code);
                let service = service.clone();
                let evt = event_tx.clone();
                let token = shutdown.child_token();

                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = token.cancelled() => return,
                        res = with_timeout(limit, service.retrieve(code)) => res,
                    };
                    match &result {
                        Ok(file) => tracing::info!("Retrieve {} resolved {}", request_id, file.name),
                        Err(e) => tracing::warn!("Retrieve {} failed: {}", request_id, e),
                    }
                    let _ = evt.send(AppEvent::Retrieved { request_id, result }).await;
                });
            }
            AppCommand::Shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
        }
    }

    shutdown.cancel();
    tracing::info!("Transfer backend stopped");
}

async fn with_timeout<T>(
    limit: Duration,
    fut: impl Future<Output = Result<T, TransferError>>,
) -> Result<T, TransferError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => Err(TransferError::TimedOut(limit.as_secs())),
    }
}
