//! The light-buffer texel type.
//!
//! `Rgba` is an unclamped linear-space color: the paint kernel accumulates
//! stamps additively and relies on exponential decay, not saturation, to
//! keep values bounded.  Hosts clamp to display range at presentation time.

use std::ops::{Add, AddAssign, Mul, Sub};

/// An RGBA color with `f32` components, linear space, unclamped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const ZERO: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Largest absolute component — used by boundedness checks.
    pub fn max_component(self) -> f32 {
        self.r.abs().max(self.g.abs()).max(self.b.abs()).max(self.a.abs())
    }

    /// Sum of absolute components.  A cheap "how much paint is here"
    /// measure for tests and progress reporting.
    pub fn energy(self) -> f32 {
        self.r.abs() + self.g.abs() + self.b.abs() + self.a.abs()
    }
}

impl Add for Rgba {
    type Output = Rgba;
    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Rgba) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl Sub for Rgba {
    type Output = Rgba;
    #[inline]
    fn sub(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: f32) -> Rgba {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
