use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use qrcode::QrCode;

/// Cached QR code texture and the text it was generated for
#[derive(Default)]
pub struct QrCodeCache {
    text: String,
    texture: Option<TextureHandle>,
}

/// Generate a QR code image from a string
fn generate_qr_image(text: &str) -> Option<ColorImage> {
    let code = QrCode::new(text.as_bytes()).ok()?;

    let qr_image = code
        .render::<image::Luma<u8>>()
        .min_dimensions(160, 160)
        .max_dimensions(320, 320)
        .build();

    let width = qr_image.width() as usize;
    let height = qr_image.height() as usize;

    // Grayscale to RGBA
    let rgba: Vec<u8> = qr_image
        .pixels()
        .flat_map(|p| {
            let luma = p.0[0];
            [luma, luma, luma, 255u8]
        })
        .collect();

    Some(ColorImage::from_rgba_unmultiplied([width, height], &rgba))
}

/// Draw the QR code for `text`, regenerating the texture only when it changes
pub fn show(ui: &mut egui::Ui, cache: &mut QrCodeCache, text: &str) {
    if cache.text != text || cache.texture.is_none() {
        cache.texture = generate_qr_image(text)
            .map(|image| ui.ctx().load_texture("invite_qr", image, TextureOptions::NEAREST));
        cache.text = text.to_string();
    }

    ui.vertical_centered(|ui| match &cache.texture {
        Some(texture) => {
            ui.image((texture.id(), egui::vec2(160.0, 160.0)));
        }
        None => {
            ui.label("Failed to generate QR code");
        }
    });
}
