//! Platform-agnostic pointer vocabulary and winit conversions.

use serde::{Deserialize, Serialize};

/// Pointer button identifier decoupled from any windowing backend.
///
/// Serializes as a lowercase name so button bindings read naturally in
/// options files (`rotate_button = "left"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button; never bound to a camera gesture.
    Other,
}

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

/// Normalize a winit scroll delta to `(horizontal, vertical)` offsets.
///
/// Wheel lines pass through unchanged; trackpad pixel deltas are scaled
/// down to comparable magnitudes.
#[must_use]
pub fn scroll_offsets(delta: &winit::event::MouseScrollDelta) -> (f32, f32) {
    match delta {
        winit::event::MouseScrollDelta::LineDelta(x, y) => (*x, *y),
        winit::event::MouseScrollDelta::PixelDelta(pos) => {
            (pos.x as f32 * 0.01, pos.y as f32 * 0.01)
        }
    }
}
