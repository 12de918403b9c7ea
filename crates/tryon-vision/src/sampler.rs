//! Strided sampling over image regions.

use tryon_models::{PixelBuffer, Region};

/// Hit/sample counts for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionTally {
    pub samples: u64,
    pub hits: u64,
}

impl RegionTally {
    /// `hits / samples`, or 0 when nothing was sampled.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.hits as f64 / self.samples as f64
        }
    }
}

/// Visits every `stride`-th pixel in both axes of a region.
///
/// The grid is anchored at the clipped origin. Pixels outside the buffer
/// are never visited.
#[derive(Debug, Clone, Copy)]
pub struct RegionSampler<'a> {
    image: &'a PixelBuffer,
    region: Region,
    stride: u32,
}

impl<'a> RegionSampler<'a> {
    /// A zero stride is treated as 1.
    pub fn new(image: &'a PixelBuffer, region: Region, stride: u32) -> Self {
        Self {
            image,
            region,
            stride: stride.max(1),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Call `visit(x, y, rgba)` for each sampled pixel; returns the sample count.
    pub fn for_each<F>(&self, mut visit: F) -> u64
    where
        F: FnMut(u32, u32, [u8; 4]),
    {
        let Some((x0, y0, x1, y1)) = self.region.clip(self.image.width(), self.image.height())
        else {
            return 0;
        };

        let mut samples = 0;
        for y in (y0..y1).step_by(self.stride as usize) {
            for x in (x0..x1).step_by(self.stride as usize) {
                if let Some(px) = self.image.pixel(x, y) {
                    visit(x, y, px);
                    samples += 1;
                }
            }
        }
        samples
    }

    /// Count sampled pixels matching `predicate`.
    pub fn tally<F>(&self, mut predicate: F) -> RegionTally
    where
        F: FnMut(u32, u32, [u8; 4]) -> bool,
    {
        let mut hits = 0;
        let samples = self.for_each(|x, y, px| {
            if predicate(x, y, px) {
                hits += 1;
            }
        });
        RegionTally { samples, hits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_samples() {
        assert_eq!(RegionTally::default().ratio(), 0.0);
        assert_eq!(RegionTally { samples: 4, hits: 1 }.ratio(), 0.25);
    }

    #[test]
    fn test_stride_sample_count() {
        let image = PixelBuffer::filled(10, 10, [0, 0, 0, 255]).unwrap();
        let sampler = RegionSampler::new(&image, Region::new(0, 0, 10, 10), 3);
        // positions 0, 3, 6, 9 on each axis
        assert_eq!(sampler.for_each(|_, _, _| {}), 16);
    }

    #[test]
    fn test_out_of_bounds_skipped() {
        let image = PixelBuffer::filled(4, 4, [1, 2, 3, 255]).unwrap();
        let sampler = RegionSampler::new(&image, Region::new(-2, -2, 4, 4), 1);

        let mut seen = Vec::new();
        let samples = sampler.for_each(|x, y, _| seen.push((x, y)));

        assert_eq!(samples, 4);
        assert_eq!(seen, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_region_outside_image() {
        let image = PixelBuffer::filled(4, 4, [1, 2, 3, 255]).unwrap();
        let sampler = RegionSampler::new(&image, Region::new(10, 10, 4, 4), 1);
        assert_eq!(sampler.tally(|_, _, _| true), RegionTally::default());
    }

    #[test]
    fn test_zero_stride_treated_as_one() {
        let image = PixelBuffer::filled(3, 3, [0, 0, 0, 255]).unwrap();
        let sampler = RegionSampler::new(&image, Region::new(0, 0, 3, 3), 0);
        assert_eq!(sampler.for_each(|_, _, _| {}), 9);
    }

    #[test]
    fn test_tally_counts_hits() {
        let image = PixelBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
        let sampler = RegionSampler::new(&image, Region::new(0, 0, 4, 4), 1);
        let tally = sampler.tally(|x, _, _| x < 2);
        assert_eq!(tally, RegionTally { samples: 16, hits: 8 });
    }
}
