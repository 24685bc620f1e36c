use super::drop_zone::{DragEvent, DropZone, VisualState};
use super::{Effect, RequestId};
use crate::FileHandle;
use crate::transfer::{InviteCode, TransferError};
use uuid::Uuid;

/// Progress of announcing the selected file to the transfer service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnnounceStatus {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
    Ready {
        code: InviteCode,
    },
    Failed {
        reason: String,
    },
}

/// Share mode: one selected file and the zone that captures it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    selected_file: Option<FileHandle>,
    drop_zone: DropZone,
    announce: AnnounceStatus,
}

impl ShareState {
    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.selected_file.as_ref()
    }

    pub fn drop_zone(&self) -> &DropZone {
        &self.drop_zone
    }

    pub fn announce_status(&self) -> &AnnounceStatus {
        &self.announce
    }

    pub fn visual_state(&self) -> VisualState {
        self.drop_zone.visual_state(self.selected_file.is_some())
    }

    /// Replace the selection; last write wins
    pub fn select_file(&mut self, handle: FileHandle) {
        tracing::debug!("Selected {} ({} bytes)", handle.name, handle.size_bytes);
        self.selected_file = Some(handle);
        // A code issued for the previous file no longer applies
        self.announce = AnnounceStatus::Idle;
    }

    pub fn on_drag_enter(&mut self, event: &mut DragEvent) {
        self.drop_zone.on_drag_enter(event);
    }

    pub fn on_drag_over(&mut self, event: &mut DragEvent) {
        self.drop_zone.on_drag_over(event);
    }

    pub fn on_drag_leave(&mut self, event: &mut DragEvent) {
        self.drop_zone.on_drag_leave(event);
    }

    pub fn on_drop(&mut self, event: &mut DragEvent) {
        if let Some(handle) = self.drop_zone.on_drop(event) {
            self.select_file(handle);
        }
    }

    pub fn on_browse_activate(&self) -> Effect {
        Effect::OpenFilePicker
    }

    /// Result of the file picker; `None` means the user cancelled
    pub fn on_file_picked(&mut self, picked: Option<FileHandle>) {
        match picked {
            Some(handle) => self.select_file(handle),
            None => tracing::debug!("File picker cancelled"),
        }
    }

    pub fn can_share(&self) -> bool {
        self.selected_file.is_some() && !matches!(self.announce, AnnounceStatus::Pending { .. })
    }

    /// Ask the transfer service to announce the selected file
    pub fn request_share(&mut self) -> Option<Effect> {
        if !self.can_share() {
            return None;
        }
        let file = self.selected_file.clone()?;
        let request_id = Uuid::new_v4();
        self.announce = AnnounceStatus::Pending { request_id };
        Some(Effect::Announce { request_id, file })
    }

    /// Apply an announce result; results for superseded requests are ignored
    pub fn complete_announce(
        &mut self,
        request_id: RequestId,
        result: Result<InviteCode, TransferError>,
    ) {
        match &self.announce {
            AnnounceStatus::Pending { request_id: pending } if *pending == request_id => {}
            _ => {
                tracing::debug!("Ignoring stale announce result {}", request_id);
                return;
            }
        }

        self.announce = match result {
            Ok(code) => AnnounceStatus::Ready { code },
            Err(e) => AnnounceStatus::Failed {
                reason: e.to_string(),
            },
        };
    }
}
