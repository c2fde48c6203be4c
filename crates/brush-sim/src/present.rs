//! The presentation-adapter boundary.
//!
//! Windowing, cameras, and display surfaces live outside this workspace.
//! What crosses the boundary is exactly two things: a fresh read-only
//! source texture coming in each tick, and the painted light buffer going
//! out.  `PresentationAdapter` is that seam as a trait.

use brush_paint::{LightBuffer, SourceTexture};

/// Host-side collaborator supplying per-tick inputs and consuming the
/// painted output.
///
/// Both methods have defaults so sourceless/headless hosts can implement
/// only what they need (or use [`NoopPresenter`]).
pub trait PresentationAdapter {
    /// The scene texture for this tick (e.g. a camera render), or `None`
    /// when no underlying scene feeds the painting.  Must match the light
    /// buffer's dimensions; a mismatched texture is ignored for the tick.
    fn source(&mut self) -> Option<&SourceTexture> {
        None
    }

    /// Receive read-only access to the light buffer after an executed
    /// tick, for display or capture.
    fn present(&mut self, _light: &LightBuffer) {}
}

/// A [`PresentationAdapter`] with no scene and no display.
pub struct NoopPresenter;

impl PresentationAdapter for NoopPresenter {}
