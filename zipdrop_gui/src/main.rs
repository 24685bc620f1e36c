#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use eframe::egui;
use std::sync::Arc;
use std::thread;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use zipdrop_core::{AppCommand, AppConfig, AppEvent, MemoryTransferService, run_backend};

mod app;
mod ui;

use app::ZipDropApp;

fn main() -> Result<(), eframe::Error> {
    // 0. Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load();

    // 1. Create channels (bounded with capacity 1000 for backpressure)
    let (tx_cmd, rx_cmd) = mpsc::channel::<AppCommand>(1000);
    let (tx_event, rx_event) = mpsc::channel::<AppEvent>(1000);

    // 2. Spawn Backend thread
    let backend_config = config.clone();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build backend runtime");

        rt.block_on(async move {
            let service = Arc::new(MemoryTransferService::new());
            run_backend(rx_cmd, tx_event, service, backend_config).await;
        });
    });

    // 3. Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 620.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // 4. Run App
    eframe::run_native(
        "ZipDrop",
        options,
        Box::new(move |cc| {
            // Initialize phosphor icons font
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ZipDropApp::new(tx_cmd, rx_event, config)))
        }),
    )
}
