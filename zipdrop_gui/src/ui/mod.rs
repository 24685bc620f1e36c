pub mod drop_zone;
pub mod qr_code;
pub mod receive;
pub mod share;
pub mod tabs;

use eframe::egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_FILL: Color32 = Color32::from_rgb(239, 246, 255);
pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const SUCCESS_FILL: Color32 = Color32::from_rgb(240, 253, 244);
pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
pub const IDLE_BORDER: Color32 = Color32::from_rgb(209, 213, 219);
