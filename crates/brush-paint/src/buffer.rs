//! The persistent light buffer.
//!
//! A row-major grid of [`Rgba`] cells plus an equally sized scratch plane.
//! The gather pass of the paint kernel reads the front plane and writes the
//! scratch plane, then the planes swap — classic ping-pong, so no pixel
//! ever reads a value its own pass already wrote.  The stamp pass mutates
//! the (new) front plane in place.

use brush_core::Rgba;

/// The accumulation texture holding the current painted state.
///
/// Owned by the simulation driver; presentation adapters get `&LightBuffer`
/// views, never mutable access.
pub struct LightBuffer {
    width:   usize,
    height:  usize,
    cells:   Vec<Rgba>,
    scratch: Vec<Rgba>,
}

impl LightBuffer {
    /// Allocate a zeroed buffer.  Dimensions are validated by `SimParams`
    /// before any buffer is created.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![Rgba::ZERO; width * height],
            scratch: vec![Rgba::ZERO; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one cell.  Out-of-range coordinates return `Rgba::ZERO` rather
    /// than panicking — kernel windows clip at the edges.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Rgba::ZERO
        }
    }

    /// Write one cell; out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Rgba) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }

    /// Row-major view of the current front plane.
    #[inline]
    pub fn cells(&self) -> &[Rgba] {
        &self.cells
    }

    /// Split borrow for the gather pass: read-only front plane, mutable
    /// scratch plane.
    #[inline]
    pub(crate) fn planes_mut(&mut self) -> (&[Rgba], &mut [Rgba]) {
        (&self.cells, &mut self.scratch)
    }

    /// Mutable front plane for the in-place stamp pass.
    #[inline]
    pub(crate) fn front_mut(&mut self) -> &mut [Rgba] {
        &mut self.cells
    }

    /// Promote the scratch plane written by the gather pass.
    #[inline]
    pub(crate) fn swap_planes(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Sum of [`Rgba::energy`] over all cells — a scalar "amount of paint"
    /// measure for tests and progress reporting.
    pub fn total_energy(&self) -> f32 {
        self.cells.iter().map(|c| c.energy()).sum()
    }

    /// Largest per-component magnitude across the buffer.
    pub fn peak(&self) -> f32 {
        self.cells.iter().map(|c| c.max_component()).fold(0.0, f32::max)
    }
}
