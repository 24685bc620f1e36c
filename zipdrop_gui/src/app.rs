use crate::ui;
use crate::ui::drop_zone::DragTracker;
use crate::ui::qr_code::QrCodeCache;
use eframe::egui;
use std::time::Duration;
use tokio::sync::mpsc;
use zipdrop_core::{
    AppCommand, AppConfig, AppEvent, Effect, FileHandle, Mode, Session, SessionEvent,
    TransferError,
};

pub struct ZipDropApp {
    // Channels
    cmd_sender: mpsc::Sender<AppCommand>,
    event_receiver: mpsc::Receiver<AppEvent>,

    // App State
    session: Session,
    config: AppConfig,
    drag_tracker: DragTracker,
    qrcode_cache: QrCodeCache,
    backend_status: String,
}

impl ZipDropApp {
    pub fn new(
        tx: mpsc::Sender<AppCommand>,
        rx: mpsc::Receiver<AppEvent>,
        config: AppConfig,
    ) -> Self {
        Self {
            cmd_sender: tx,
            event_receiver: rx,
            session: Session::new(config.default_mode),
            config,
            drag_tracker: DragTracker::default(),
            qrcode_cache: QrCodeCache::default(),
            backend_status: "Starting backend...".to_string(),
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        if let Some(effect) = self.session.update(event) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        if effect == Effect::OpenFilePicker {
            let picked = rfd::FileDialog::new()
                .pick_file()
                .and_then(|path| match FileHandle::from_path(&path) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        tracing::warn!("Cannot use picked file: {:#}", e);
                        None
                    }
                });
            self.dispatch(SessionEvent::FilePicked(picked));
            return;
        }

        let fallback = unavailable_result(&effect);
        let Some(cmd) = AppCommand::from_effect(effect) else {
            return;
        };
        if let Err(e) = self.cmd_sender.try_send(cmd) {
            tracing::error!("Backend unreachable: {}", e);
            // Settle the request so the UI does not stay pending
            if let Some(event) = fallback {
                self.dispatch(event);
            }
        }
    }

    fn is_waiting(&self) -> bool {
        use zipdrop_core::session::AnnounceStatus;
        self.session.receive().is_pending()
            || matches!(
                self.session.share().announce_status(),
                AnnounceStatus::Pending { .. }
            )
    }
}

/// Failure to report when an effect never reaches the backend
fn unavailable_result(effect: &Effect) -> Option<SessionEvent> {
    match effect {
        Effect::OpenFilePicker => None,
        Effect::Announce { request_id, .. } => Some(SessionEvent::AnnounceCompleted {
            request_id: *request_id,
            result: Err(TransferError::Unavailable),
        }),
        Effect::Retrieve { request_id, .. } => Some(SessionEvent::RetrievalCompleted {
            request_id: *request_id,
            result: Err(TransferError::Unavailable),
        }),
    }
}

impl eframe::App for ZipDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if let AppEvent::Status(msg) = &event {
                tracing::debug!("Backend status: {}", msg);
                self.backend_status = msg.clone();
            }
            if let Some(session_event) = event.into_session_event() {
                self.dispatch(session_event);
            }
        }

        // Drag input only reaches the share workflow while its tab is open
        if self.session.active_mode() == Mode::Share {
            for event in self.drag_tracker.collect(ctx) {
                self.dispatch(event);
            }
        } else if let Some(event) = self.drag_tracker.cancel() {
            self.dispatch(event);
        }

        let mut events = Vec::new();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.backend_status).small().weak());
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let mode = self.session.active_mode();
            ui::tabs::show(ui, mode, &mut events);
            match mode {
                Mode::Share => {
                    ui::share::show(ui, self.session.share(), &mut self.qrcode_cache, &mut events)
                }
                Mode::Receive => ui::receive::show(ui, self.session.receive(), &mut events),
            }
        });

        for event in events {
            self.dispatch(event);
        }

        // Poll the backend more often while a request is outstanding
        if self.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

impl Drop for ZipDropApp {
    fn drop(&mut self) {
        let _ = self.cmd_sender.try_send(AppCommand::Shutdown);

        self.config.default_mode = self.session.active_mode();
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {:#}", e);
        }
    }
}
