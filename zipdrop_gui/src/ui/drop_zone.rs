use super::{ACCENT, ACCENT_FILL, IDLE_BORDER, SUCCESS, SUCCESS_FILL};
use eframe::egui;
use egui_phosphor::regular::UPLOAD_SIMPLE;
use zipdrop_core::FileHandle;
use zipdrop_core::SessionEvent;
use zipdrop_core::session::{DragEvent, VisualState};

/// Turns egui's per-frame hover/drop snapshot into enter/over/leave/drop events
#[derive(Default)]
pub struct DragTracker {
    hovering: bool,
}

impl DragTracker {
    pub fn collect(&mut self, ctx: &egui::Context) -> Vec<SessionEvent> {
        let (hovered, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });

        let mut events = Vec::new();
        if !dropped.is_empty() {
            let files = dropped.iter().filter_map(handle_from_dropped).collect();
            events.push(SessionEvent::Drop(DragEvent::with_files(files)));
            self.hovering = false;
        } else if hovered {
            events.push(if self.hovering {
                SessionEvent::DragOver(DragEvent::new())
            } else {
                SessionEvent::DragEnter(DragEvent::new())
            });
            self.hovering = true;
        } else if self.hovering {
            events.push(SessionEvent::DragLeave(DragEvent::new()));
            self.hovering = false;
        }
        events
    }

    /// End a drag that is still in progress, e.g. when leaving the Share tab
    pub fn cancel(&mut self) -> Option<SessionEvent> {
        if !self.hovering {
            return None;
        }
        self.hovering = false;
        Some(SessionEvent::DragLeave(DragEvent::new()))
    }
}

fn handle_from_dropped(file: &egui::DroppedFile) -> Option<FileHandle> {
    match &file.path {
        Some(path) => match FileHandle::from_path(path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Ignoring dropped file: {:#}", e);
                None
            }
        },
        None => {
            let size = file.bytes.as_ref().map(|b| b.len() as u64).unwrap_or(0);
            let mut handle = FileHandle::new(file.name.clone(), size);
            if !file.mime.is_empty() {
                handle.mime_type = file.mime.clone();
            }
            Some(handle)
        }
    }
}

/// Draw the drop zone; returns true when it was clicked
pub fn show(ui: &mut egui::Ui, visual: VisualState) -> bool {
    let (border, fill) = match visual {
        VisualState::DragActive => (ACCENT, ACCENT_FILL),
        VisualState::FileSelected => (SUCCESS, SUCCESS_FILL),
        VisualState::Idle => (IDLE_BORDER, egui::Color32::TRANSPARENT),
    };

    let response = egui::Frame::new()
        .stroke(egui::Stroke::new(2.0, border))
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(UPLOAD_SIMPLE)
                        .size(40.0)
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Drag & drop a file here, or click to select")
                        .size(16.0)
                        .strong(),
                );
                ui.label(egui::RichText::new("Share any file with your peers securely").weak());
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    response.clicked()
}
