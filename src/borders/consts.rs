use image::Rgba;

pub const FILL_COLOUR: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Share of the canvas left empty on every side.
pub const PADDING_RATIO: f64 = 0.05;
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=86400";
