//! The brush texture — the static weight mask shaping every stamp.

use crate::{PaintError, PaintResult};

/// A read-only grid of stamp weights in `[0, 1]`, sampled by normalised
/// coordinates over the agent's footprint window.
///
/// Brush bitmaps are decoded by the host (asset loading is outside the
/// core) and handed in through [`from_weights`](Self::from_weights);
/// [`radial`](Self::radial) builds the default soft round brush
/// procedurally for hosts and tests that have no asset pipeline.
#[derive(Clone, Debug)]
pub struct BrushTexture {
    width:   usize,
    height:  usize,
    weights: Vec<f32>,
}

impl BrushTexture {
    /// Wrap a host-decoded weight grid (row-major, `width * height` values).
    pub fn from_weights(width: usize, height: usize, weights: Vec<f32>) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::ZeroDimension(width, height));
        }
        if weights.len() != width * height {
            return Err(PaintError::WeightCountMismatch {
                width,
                height,
                got: weights.len(),
            });
        }
        Ok(Self { width, height, weights })
    }

    /// A `size × size` soft round brush: weight `(1 - d)^2` of the
    /// normalised distance `d` from the center, zero outside the disc.
    pub fn radial(size: usize) -> Self {
        let size = size.max(1);
        let half = (size as f32 - 1.0) * 0.5;
        let radius = half.max(0.5);
        let mut weights = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let dx = (x as f32 - half) / radius;
                let dy = (y as f32 - half) / radius;
                let d = (dx * dx + dy * dy).sqrt();
                let w = (1.0 - d).max(0.0);
                weights.push(w * w);
            }
        }
        Self { width: size, height: size, weights }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Nearest-neighbour sample at normalised coordinates; `u`/`v` outside
    /// `[0, 1]` clamp to the edge texel.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let tx = (u.clamp(0.0, 1.0) * (self.width - 1) as f32).round() as usize;
        let ty = (v.clamp(0.0, 1.0) * (self.height - 1) as f32).round() as usize;
        self.weights[ty * self.width + tx]
    }
}
