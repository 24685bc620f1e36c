//! Per-view session state and its transitions.
//!
//! A [`Session`] is created when the share/receive view opens and dropped
//! when it closes. Every user interaction is fed in as a [`SessionEvent`];
//! transitions that need the outside world return an [`Effect`] for the host
//! to carry out.

pub mod drop_zone;
pub mod receive;
pub mod share;

use crate::FileHandle;
use crate::transfer::{InviteCode, TransferError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use drop_zone::{DragEvent, DropZone, VisualState};
pub use receive::{ReceiveState, RetrievalStatus};
pub use share::{AnnounceStatus, ShareState};

/// Correlates a transfer request with its result
pub type RequestId = Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Share,
    Receive,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the platform file picker
    OpenFilePicker,
    /// Hand the file to the transfer service and obtain an invite code
    Announce {
        request_id: RequestId,
        file: FileHandle,
    },
    /// Ask the transfer service for the file behind `code`
    Retrieve { request_id: RequestId, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SwitchMode(Mode),
    DragEnter(DragEvent),
    DragOver(DragEvent),
    DragLeave(DragEvent),
    Drop(DragEvent),
    BrowseActivated,
    /// Picker closed; `None` when cancelled
    FilePicked(Option<FileHandle>),
    ShareRequested,
    AnnounceCompleted {
        request_id: RequestId,
        result: Result<InviteCode, TransferError>,
    },
    InviteCodeChanged(String),
    SubmitRequested,
    RetrievalCompleted {
        request_id: RequestId,
        result: Result<FileHandle, TransferError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    active_mode: Mode,
    share: ShareState,
    receive: ReceiveState,
}

impl Session {
    pub fn new(active_mode: Mode) -> Self {
        Self {
            active_mode,
            ..Self::default()
        }
    }

    pub fn active_mode(&self) -> Mode {
        self.active_mode
    }

    pub fn share(&self) -> &ShareState {
        &self.share
    }

    pub fn receive(&self) -> &ReceiveState {
        &self.receive
    }

    /// Change the visible workflow; both workflows keep their state
    pub fn switch_mode(&mut self, target: Mode) {
        if self.active_mode != target {
            tracing::debug!("Switching mode {:?} -> {:?}", self.active_mode, target);
        }
        self.active_mode = target;
    }

    pub fn update(&mut self, event: SessionEvent) -> Option<Effect> {
        match event {
            SessionEvent::SwitchMode(mode) => {
                self.switch_mode(mode);
                None
            }
            SessionEvent::DragEnter(mut e) => {
                self.share.on_drag_enter(&mut e);
                None
            }
            SessionEvent::DragOver(mut e) => {
                self.share.on_drag_over(&mut e);
                None
            }
            SessionEvent::DragLeave(mut e) => {
                self.share.on_drag_leave(&mut e);
                None
            }
            SessionEvent::Drop(mut e) => {
                self.share.on_drop(&mut e);
                None
            }
            SessionEvent::BrowseActivated => Some(self.share.on_browse_activate()),
            SessionEvent::FilePicked(picked) => {
                self.share.on_file_picked(picked);
                None
            }
            SessionEvent::ShareRequested => self.share.request_share(),
            SessionEvent::AnnounceCompleted { request_id, result } => {
                self.share.complete_announce(request_id, result);
                None
            }
            SessionEvent::InviteCodeChanged(text) => {
                self.receive.set_invite_code(text);
                None
            }
            SessionEvent::SubmitRequested => self.receive.submit_retrieval(),
            SessionEvent::RetrievalCompleted { request_id, result } => {
                self.receive.complete_retrieval(request_id, result);
                None
            }
        }
    }
}
