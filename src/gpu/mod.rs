//! GPU presentation path: device/surface ownership and the frame blit.
//!
//! The crate renders nothing on the GPU beyond a single textured
//! fullscreen pass; all scene content arrives as CPU pixel buffers from
//! the frame source.

/// Frame texture upload and fullscreen blit pass.
pub mod blit;
/// wgpu device, queue, and surface ownership.
pub mod context;
