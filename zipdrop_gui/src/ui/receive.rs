use super::{ERROR, SUCCESS};
use eframe::egui;
use egui_phosphor::regular::{CHECK_CIRCLE, DOWNLOAD_SIMPLE, X_CIRCLE};
use zipdrop_core::session::{ReceiveState, RetrievalStatus};
use zipdrop_core::{SessionEvent, format_bytes};

pub fn show(ui: &mut egui::Ui, receive: &ReceiveState, events: &mut Vec<SessionEvent>) {
    ui.label("Invite Code");

    let mut code = receive.invite_code().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut code)
            .hint_text("Enter invite code")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        events.push(SessionEvent::InviteCodeChanged(code));
    }
    let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    let button = egui::Button::new(format!("{} Download File", DOWNLOAD_SIMPLE))
        .min_size(egui::vec2(ui.available_width(), 32.0));
    let clicked = ui.add_enabled(receive.can_submit(), button).clicked();

    // The session re-checks the code, so Enter on a blank field is harmless
    if clicked || enter_pressed {
        events.push(SessionEvent::SubmitRequested);
    }

    ui.add_space(8.0);
    match receive.retrieval_status() {
        RetrievalStatus::Idle => {}
        RetrievalStatus::Pending { code, .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Looking up {}...", code));
            });
        }
        RetrievalStatus::Succeeded { file } => {
            ui.colored_label(
                SUCCESS,
                format!(
                    "{} {} ({}) is ready",
                    CHECK_CIRCLE,
                    file.name,
                    format_bytes(file.size_bytes)
                ),
            );
        }
        RetrievalStatus::Failed { reason } => {
            ui.colored_label(ERROR, format!("{} {}", X_CIRCLE, reason));
        }
    }
}
