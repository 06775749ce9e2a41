use crate::borders::consts::{FILL_COLOUR, PADDING_RATIO};
use geo::{BoundingRect, Coord, LineString, MultiLineString};
use image::{ImageError, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Square canvas with every outline filled in, centered and scaled with equal axes. The
/// background stays transparent.
pub fn silhouette(outlines: &[&LineString<f64>], size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    let Some(projection) = Projection::fit(outlines, size) else {
        return canvas;
    };
    for outline in outlines {
        let points: Vec<(f64, f64)> = outline
            .coords()
            .map(|&coord| projection.apply(coord))
            .collect();
        fill_ring(&mut canvas, &points);
    }
    canvas
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let (width, height) = image.dimensions();
    let estimated_size = (width as usize) * (height as usize) / 4;
    let mut buffer = Cursor::new(Vec::with_capacity(estimated_size));
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Maps `(lon, lat)` coordinates onto canvas pixels, latitude growing upwards.
struct Projection {
    scale: f64,
    center_lon: f64,
    center_lat: f64,
    half_size: f64,
}

impl Projection {
    fn fit(outlines: &[&LineString<f64>], size: u32) -> Option<Self> {
        let extent =
            MultiLineString::new(outlines.iter().map(|&outline| outline.clone()).collect())
                .bounding_rect()?;
        let span = extent.width().max(extent.height());
        let drawable = size as f64 * (1.0 - 2.0 * PADDING_RATIO);
        let center = extent.center();
        Some(Self {
            scale: if span > 0.0 { drawable / span } else { 1.0 },
            center_lon: center.x,
            center_lat: center.y,
            half_size: size as f64 / 2.0,
        })
    }

    fn apply(&self, coord: Coord<f64>) -> (f64, f64) {
        (
            self.half_size + (coord.x - self.center_lon) * self.scale,
            self.half_size - (coord.y - self.center_lat) * self.scale,
        )
    }
}

/// Even-odd scanline fill sampled at pixel centres.
fn fill_ring(canvas: &mut RgbaImage, points: &[(f64, f64)]) {
    let (width, height) = canvas.dimensions();
    let mut crossings = Vec::new();
    for row in 0..height {
        let y = row as f64 + 0.5;
        crossings.clear();
        for (index, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(index + 1) % points.len()];
            if (y0 <= y) != (y1 <= y) {
                crossings.push(x0 + (y - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().clamp(0.0, width as f64) as u32;
            let end = (span[1] - 0.5).ceil().clamp(0.0, width as f64) as u32;
            for column in start..end {
                canvas.put_pixel(column, row, FILL_COLOUR);
            }
        }
    }
}
