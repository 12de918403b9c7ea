//! Synthetic image builders shared by the integration tests.

#![allow(dead_code)]

use tryon_vision::PixelBuffer;

pub const DARK: [u8; 4] = [30, 30, 30, 255];
pub const DARK_GRAY: [u8; 4] = [60, 60, 60, 255];
pub const MID_GRAY: [u8; 4] = [150, 150, 150, 255];
pub const HAIR: [u8; 4] = [60, 40, 30, 255];
pub const SKIN: [u8; 4] = [210, 160, 130, 255];
pub const SKIN_ALT: [u8; 4] = [200, 150, 120, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Mutable RGBA canvas for drawing test scenes.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        let data = background
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    fn put(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let offset = ((y * self.width + x) * 4) as usize;
        self.data[offset..offset + 4].copy_from_slice(&color);
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
    pub fn rect(mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 4]) -> Self {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.put(x, y, color);
            }
        }
        self
    }

    /// Fill an axis-aligned ellipse.
    pub fn ellipse(mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: [u8; 4]) -> Self {
        for y in 0..self.height {
            for x in 0..self.width {
                let dx = (x as f64 - cx) / rx;
                let dy = (y as f64 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
        self
    }

    pub fn circle(self, cx: f64, cy: f64, radius: f64, color: [u8; 4]) -> Self {
        self.ellipse(cx, cy, radius, radius, color)
    }

    pub fn build(self) -> PixelBuffer {
        PixelBuffer::new(self.width, self.height, self.data).expect("canvas size is consistent")
    }
}

/// Shopper facing the camera: skin across the whole head/face band.
pub fn front_portrait() -> PixelBuffer {
    Canvas::new(400, 400, DARK)
        .rect(120, 60, 280, 160, SKIN)
        .build()
}

/// Shopper facing away: hair on top, garment over the torso, bare arms.
pub fn back_portrait() -> PixelBuffer {
    Canvas::new(400, 400, DARK)
        .rect(0, 60, 400, 120, HAIR)
        .rect(0, 120, 400, 240, MID_GRAY)
        .rect(0, 180, 400, 200, SKIN)
        .build()
}

/// Encode a buffer as PNG.
pub fn png_bytes(image: &PixelBuffer) -> Vec<u8> {
    use image::{ImageOutputFormat, RgbaImage};
    use std::io::Cursor;

    let img = RgbaImage::from_raw(image.width(), image.height(), image.as_raw().to_vec())
        .expect("buffer length matches dimensions");
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageOutputFormat::Png)
        .expect("PNG encoding succeeds");
    out.into_inner()
}
