use std::io::Cursor;

use egui::{Color32, Pos2};
use image::{ImageFormat, Rgba, RgbaImage, imageops};

use crate::error::EditorResult;

/// The single mutable pixel buffer shown on screen and exported.
///
/// All drawing is immediate: once a stroke or outline is rasterized it is
/// indistinguishable from the rest of the buffer.
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// Creates a fully transparent raster
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Erases every pixel to transparent
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    /// Composites `src` over the buffer at the origin (source-over), clipped to the buffer
    pub fn draw_image(&mut self, src: &RgbaImage) {
        imageops::overlay(&mut self.pixels, src, 0, 0);
    }

    /// Strokes a straight segment with round caps.
    ///
    /// A zero-length segment produces a round dot of diameter `width`.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let half = width / 2.0;
        let Some((x0, x1)) = pixel_span(from.x.min(to.x) - half, from.x.max(to.x) + half, self.width())
        else {
            return;
        };
        let Some((y0, y1)) = pixel_span(from.y.min(to.y) - half, from.y.max(to.y) + half, self.height())
        else {
            return;
        };

        let rgba = to_rgba(color);
        let dir = to - from;
        let len_sq = dir.length_sq();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = pixel_center(x, y);
                let t = if len_sq > 0.0 {
                    ((center - from).dot(dir) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let nearest = from + dir * t;
                if (center - nearest).length() <= half {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Strokes the outline of the rectangle spanned by `start` and `end`.
    ///
    /// The outline is centred on the rectangle's edges, so half of `width`
    /// falls outside and half inside. Corners may be given in any order.
    pub fn stroke_rect(&mut self, start: Pos2, end: Pos2, width: f32, color: Color32) {
        let half = width / 2.0;
        let (left, right) = (start.x.min(end.x), start.x.max(end.x));
        let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));

        let Some((x0, x1)) = pixel_span(left - half, right + half, self.width()) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(top - half, bottom + half, self.height()) else {
            return;
        };

        let rgba = to_rgba(color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let c = pixel_center(x, y);
                let in_outer = c.x >= left - half
                    && c.x <= right + half
                    && c.y >= top - half
                    && c.y <= bottom + half;
                let in_inner = c.x > left + half
                    && c.x < right - half
                    && c.y > top + half
                    && c.y < bottom - half;
                if in_outer && !in_inner {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Encodes the buffer as PNG
    pub fn encode_png(&self) -> EditorResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

fn pixel_center(x: u32, y: u32) -> Pos2 {
    Pos2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Inclusive range of pixel indices whose centres may fall within `[lo, hi]`,
/// clipped to `[0, limit)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
    if limit == 0 || !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let first = lo.floor().max(0.0);
    let last = hi.ceil().min((limit - 1) as f32);
    if first > last {
        return None;
    }
    Some((first as u32, last as u32))
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}
