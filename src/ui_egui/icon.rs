//! Window icon decoding.

use thiserror::Error;

/// PNG shipped with the binary
pub const APP_ICON_PNG: &[u8] = include_bytes!("../../assets/icon.png");

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to decode icon: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported icon color type {0:?}")]
    UnsupportedColor(png::ColorType),
}

/// Decode PNG bytes into RGBA pixels for the window icon
pub fn decode_icon(icon_data: &[u8]) -> Result<egui::IconData, IconError> {
    let mut decoder = png::Decoder::new(icon_data);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf
            .iter()
            .flat_map(|&v| [v, v, v, u8::MAX])
            .collect(),
        other => return Err(IconError::UnsupportedColor(other)),
    };

    Ok(egui::IconData {
        rgba,
        width: info.width,
        height: info.height,
    })
}

/// The bundled icon, or `None` if it cannot be decoded
pub fn app_icon() -> Option<egui::IconData> {
    match decode_icon(APP_ICON_PNG) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("Failed to load window icon: {}", err);
            None
        }
    }
}
