use crate::AssetError;

/// Grayscale height samples in the 0..=255 range, row-major with z as rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: usize,
    depth: usize,
    samples: Vec<f32>,
}

impl Heightmap {
    pub fn new(width: usize, depth: usize, samples: Vec<f32>) -> Result<Self, AssetError> {
        if width < 2 || depth < 2 {
            return Err(AssetError::HeightmapTooSmall { width, depth });
        }
        if samples.len() != width * depth {
            return Err(AssetError::SampleCount {
                expected: width * depth,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            depth,
            samples,
        })
    }

    /// Reads RGBA8 pixels; each sample is the plain average of r, g and b.
    pub fn from_rgba(width: usize, depth: usize, bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.len() != width * depth * 4 {
            return Err(AssetError::SampleCount {
                expected: width * depth * 4,
                actual: bytes.len(),
            });
        }

        let samples = bytes
            .chunks_exact(4)
            .map(|px| (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0)
            .collect();
        Self::new(width, depth, samples)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sample(&self, x: usize, z: usize) -> f32 {
        self.samples[x + z * self.width]
    }

    /// Half resolution on both axes, averaging each 2x2 block. Odd trailing
    /// rows and columns are dropped.
    pub fn halved(&self) -> Result<Self, AssetError> {
        let width = self.width / 2;
        let depth = self.depth / 2;
        let mut samples = Vec::with_capacity(width * depth);

        for z in 0..depth {
            for x in 0..width {
                let (sx, sz) = (x * 2, z * 2);
                let sum = self.sample(sx, sz)
                    + self.sample(sx + 1, sz)
                    + self.sample(sx, sz + 1)
                    + self.sample(sx + 1, sz + 1);
                samples.push(sum / 4.0);
            }
        }

        Self::new(width, depth, samples)
    }

    /// Gray samples packed back into RGBA8, for previews.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|&gray| {
                let value = gray.round().clamp(0.0, 255.0) as u8;
                [value, value, value, 255]
            })
            .collect()
    }
}
