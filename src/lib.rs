// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unused_qualifications)]
// Graphics allowances — numeric casts and float comparisons are routine here
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::items_after_statements)]

//! Orbit-camera viewer shell built on wgpu and winit.
//!
//! Orbview owns the interactive part of an image-based viewer: an arcball
//! camera (pivot, azimuth, elevation, distance), the pointer state machine
//! that drives it, and the window/presentation glue that displays whatever
//! a [`source::FrameSource`] renders for the current view transform. The
//! frame source is the pluggable half — neural-field inference, CPU volume
//! renderers, and the built-in ray-cast test scene all produce pixels
//! behind the same trait.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - the standalone window; builder-configured
//! - [`camera::OrbitController`] - the interaction state machine
//! - [`source::FrameSource`] - the image-generation boundary
//! - [`options::Options`] - TOML-backed runtime configuration
//!
//! # Architecture
//!
//! All input and rendering run on the event-loop thread: pointer events
//! mutate the camera in arrival order, then each redraw derives the view
//! transform once, asks the frame source for pixels, and blits them to the
//! swapchain. The camera state has a single owner; the renderer only ever
//! sees derived values.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod source;
pub mod viewer;

pub use camera::OrbitController;
pub use error::OrbviewError;
pub use options::Options;
pub use source::{FrameRequest, FrameSource};
pub use viewer::Viewer;
