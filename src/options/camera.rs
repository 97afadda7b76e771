use serde::{Deserialize, Serialize};

use crate::input::PointerButton;

/// Orbit-camera configuration: initial placement, sensitivities, clamp
/// bounds, and button bindings.
///
/// Angles are degrees in option files and are converted to radians when
/// the controller is built. Validation happens at controller
/// construction, not here; this struct is plain data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Orbit center in world coordinates.
    pub pivot: [f32; 3],
    /// Initial angle around the vertical axis, degrees.
    pub initial_azimuth: f32,
    /// Initial angle above the horizontal plane, degrees.
    pub initial_elevation: f32,
    /// Initial pivot-to-eye distance, world units.
    pub initial_distance: f32,
    /// Rotation sensitivity, radians per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Pan sensitivity, world units per pixel per unit of distance.
    pub pan_sensitivity: f32,
    /// Multiplicative zoom-in step, in `(0, 1)`.
    pub zoom_factor: f32,
    /// Lower elevation clamp, degrees, strictly above −90.
    pub elevation_min: f32,
    /// Upper elevation clamp, degrees, strictly below 90.
    pub elevation_max: f32,
    /// Minimum pivot-to-eye distance, positive.
    pub min_distance: f32,
    /// Maximum pivot-to-eye distance, at least `min_distance`.
    pub max_distance: f32,
    /// Button that starts a rotation drag.
    pub rotate_button: PointerButton,
    /// Button that starts a pan drag.
    pub pan_button: PointerButton,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pivot: [0.0, 0.0, 0.0],
            initial_azimuth: 0.0,
            initial_elevation: -30.0,
            initial_distance: 6.0,
            rotate_sensitivity: 0.01,
            pan_sensitivity: 0.001,
            zoom_factor: 0.9,
            elevation_min: -89.0,
            elevation_max: 89.0,
            min_distance: 0.5,
            max_distance: 500.0,
            rotate_button: PointerButton::Left,
            pan_button: PointerButton::Right,
        }
    }
}
