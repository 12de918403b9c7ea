use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates.
///
/// A region may extend past the edges of the image it is applied to;
/// callers sample only the part returned by [`Region::clip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    /// Left edge x-coordinate (may be negative)
    pub x: i64,
    /// Top edge y-coordinate (may be negative)
    pub y: i64,
    /// Region width
    pub width: u32,
    /// Region height
    pub height: u32,
}

impl Region {
    /// Create a new region.
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region expressed as fractions of an image's dimensions.
    ///
    /// Origin and size are floored to whole pixels.
    pub fn from_fractions(
        image_width: u32,
        image_height: u32,
        fx: f64,
        fy: f64,
        fw: f64,
        fh: f64,
    ) -> Self {
        let w = image_width as f64;
        let h = image_height as f64;
        Self {
            x: (w * fx).floor() as i64,
            y: (h * fy).floor() as i64,
            width: (w * fw).floor().max(0.0) as u32,
            height: (h * fh).floor().max(0.0) as u32,
        }
    }

    /// Square of side `side_fraction * min(width, height)` centered on the image midpoint.
    pub fn centered_square(image_width: u32, image_height: u32, side_fraction: f64) -> Self {
        let side = (image_width.min(image_height) as f64 * side_fraction)
            .floor()
            .max(0.0);
        Self {
            x: ((image_width as f64 - side) / 2.0).floor() as i64,
            y: ((image_height as f64 - side) / 2.0).floor() as i64,
            width: side as u32,
            height: side as u32,
        }
    }

    /// Center point of the declared (unclipped) region.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Half of the shorter side.
    #[inline]
    pub fn half_minor(&self) -> f64 {
        self.width.min(self.height) as f64 / 2.0
    }

    /// Intersect with a `width` x `height` image.
    ///
    /// Returns half-open bounds `(x0, y0, x1, y1)`, or `None` when nothing
    /// of the region lies inside the image.
    pub fn clip(&self, image_width: u32, image_height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = (self.x + self.width as i64).min(image_width as i64);
        let y1 = (self.y + self.height as i64).min(image_height as i64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}
