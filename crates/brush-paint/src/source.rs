//! The per-tick source texture.
//!
//! The intended feed is a camera render of an underlying scene, delivered
//! fresh every tick by the presentation adapter; the paint kernel blends
//! it into the light buffer additively.  The core sees only a plain
//! read-only RGBA grid.

use brush_core::Rgba;

use crate::{PaintError, PaintResult};

/// A read-only RGBA texture with the same dimensions as the light buffer.
#[derive(Clone, Debug)]
pub struct SourceTexture {
    width:  usize,
    height: usize,
    texels: Vec<Rgba>,
}

impl SourceTexture {
    /// An all-zero (black, transparent) source.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            texels: vec![Rgba::ZERO; width * height],
        }
    }

    /// Wrap host-supplied texel data (row-major, `width * height` values).
    pub fn from_texels(width: usize, height: usize, texels: Vec<Rgba>) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::ZeroDimension(width, height));
        }
        if texels.len() != width * height {
            return Err(PaintError::TexelCountMismatch {
                width,
                height,
                got: texels.len(),
            });
        }
        Ok(Self { width, height, texels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one texel; out-of-range coordinates return `Rgba::ZERO`.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Rgba {
        if x < self.width && y < self.height {
            self.texels[y * self.width + x]
        } else {
            Rgba::ZERO
        }
    }

    /// Overwrite one texel — for hosts assembling a source frame in place
    /// (and for tests).
    pub fn set_texel(&mut self, x: usize, y: usize, value: Rgba) {
        if x < self.width && y < self.height {
            self.texels[y * self.width + x] = value;
        }
    }
}
