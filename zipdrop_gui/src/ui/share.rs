use super::qr_code::{self, QrCodeCache};
use super::{ACCENT, ERROR, drop_zone};
use eframe::egui;
use egui_phosphor::regular::{COPY, FILE, SHARE_NETWORK, X_CIRCLE};
use zipdrop_core::session::{AnnounceStatus, ShareState};
use zipdrop_core::{SessionEvent, format_bytes};

pub fn show(
    ui: &mut egui::Ui,
    share: &ShareState,
    qrcode_cache: &mut QrCodeCache,
    events: &mut Vec<SessionEvent>,
) {
    if drop_zone::show(ui, share.visual_state()) {
        events.push(SessionEvent::BrowseActivated);
    }

    let Some(file) = share.selected_file() else {
        return;
    };

    // Selected file card
    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(FILE).size(28.0).color(ACCENT));
            ui.vertical(|ui| {
                ui.add(egui::Label::new(egui::RichText::new(&file.name).strong()).truncate());
                ui.label(egui::RichText::new(format_bytes(file.size_bytes)).weak());
            });
        });
    });

    ui.add_space(8.0);
    if ui
        .add_enabled(
            share.can_share(),
            egui::Button::new(format!("{} Share File", SHARE_NETWORK)),
        )
        .clicked()
    {
        events.push(SessionEvent::ShareRequested);
    }

    match share.announce_status() {
        AnnounceStatus::Idle => {}
        AnnounceStatus::Pending { .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Preparing invite code...");
            });
        }
        AnnounceStatus::Ready { code } => {
            ui.add_space(8.0);
            ui.label("Invite code:");
            ui.horizontal(|ui| {
                ui.heading(code.as_str());
                if ui
                    .button(COPY.to_string())
                    .on_hover_text("Copy to clipboard")
                    .clicked()
                {
                    ui.ctx().copy_text(code.to_string());
                }
            });
            qr_code::show(ui, qrcode_cache, code.as_str());
        }
        AnnounceStatus::Failed { reason } => {
            ui.colored_label(ERROR, format!("{} Share failed: {}", X_CIRCLE, reason));
        }
    }
}
