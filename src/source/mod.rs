//! The image-generation collaborator boundary.
//!
//! The viewer renders no scene content itself: each frame it hands the
//! current view transform to a [`FrameSource`] and presents whatever
//! pixels come back. Neural-field inference, CPU volume renderers, and
//! the built-in [`RaycastSource`] all sit behind the same trait.

/// Built-in procedural frame source.
pub mod raycast;

use glam::{Mat4, Vec3};
pub use raycast::RaycastSource;

/// Everything a source needs to produce one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    /// World-to-view transform for this frame.
    pub view: Mat4,
    /// World-space eye position.
    pub eye: Vec3,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

/// Produces a pixel buffer for a given view transform.
///
/// The returned slice is a tightly packed RGBA8 image of
/// `width × height` pixels, row-major from the top-left.
/// Implementations are expected to reuse an internal buffer across
/// frames; the viewer copies the data to the GPU before the next call.
pub trait FrameSource {
    /// Render one frame for the requested view.
    fn render_frame(&mut self, request: &FrameRequest) -> &[u8];
}
