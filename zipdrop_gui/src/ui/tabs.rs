use super::ACCENT;
use eframe::egui;
use egui_phosphor::regular::{DOWNLOAD_SIMPLE, UPLOAD_SIMPLE};
use zipdrop_core::{Mode, SessionEvent};

/// Product header and the Share/Receive tab strip
pub fn show(ui: &mut egui::Ui, active: Mode, events: &mut Vec<SessionEvent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new("ZipDrop")
                .size(40.0)
                .strong()
                .color(ACCENT),
        );
        ui.label(egui::RichText::new("Fast and Secure File Sharing").weak());
        ui.add_space(16.0);
    });

    ui.horizontal(|ui| {
        let tabs = [
            (Mode::Share, format!("{} Share a File", UPLOAD_SIMPLE)),
            (Mode::Receive, format!("{} Receive a File", DOWNLOAD_SIMPLE)),
        ];
        for (mode, label) in tabs {
            if ui.selectable_label(active == mode, label).clicked() && active != mode {
                events.push(SessionEvent::SwitchMode(mode));
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);
}
