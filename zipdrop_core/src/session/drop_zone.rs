//! Drag-and-drop capture for a single file.

use crate::FileHandle;

/// A drag event delivered to the drop zone.
///
/// Carries the dragged files (only populated on drop) and whether the
/// platform's own handling of the drag has been suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    files: Vec<FileHandle>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: Vec<FileHandle>) -> Self {
        Self {
            files,
            default_prevented: false,
        }
    }

    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    /// Stop the platform from opening or navigating to the dragged file
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What the drop zone looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    DragActive,
    FileSelected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZone {
    drag_over: bool,
}

impl DropZone {
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn on_drag_enter(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        self.drag_over = true;
    }

    pub fn on_drag_over(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        self.drag_over = true;
    }

    pub fn on_drag_leave(&mut self, event: &mut DragEvent) {
        event.prevent_default();
        self.drag_over = false;
    }

    /// End the drag and hand back the first dropped file, if any.
    /// Further files in the same drop are discarded.
    pub fn on_drop(&mut self, event: &mut DragEvent) -> Option<FileHandle> {
        event.prevent_default();
        self.drag_over = false;

        let mut files = std::mem::take(&mut event.files).into_iter();
        let first = files.next()?;
        let discarded = files.count();
        if discarded > 0 {
            tracing::debug!("Drop carried {} extra files, keeping {}", discarded, first.name);
        }
        Some(first)
    }

    /// Drag-active wins over file-selected
    pub fn visual_state(&self, has_selection: bool) -> VisualState {
        if self.drag_over {
            VisualState::DragActive
        } else if has_selection {
            VisualState::FileSelected
        } else {
            VisualState::Idle
        }
    }
}
