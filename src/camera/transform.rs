//! View-transform derivation from camera state.
//!
//! Pure functions only: the controller owns the state, the renderer calls
//! these once per frame to obtain the current transform.

use glam::{Mat4, Vec3};

use super::state::CameraState;

/// World-up reference used by the look-at construction.
const WORLD_UP: Vec3 = Vec3::Y;

/// Substitute up vector for a nearly vertical view direction.
const FALLBACK_UP: Vec3 = Vec3::Z;

/// `|forward · up|` beyond which the fallback up vector is used.
const UP_COLLINEAR_LIMIT: f32 = 0.999;

/// Unit offset from pivot toward the eye for the given angles (Y-up).
fn orbit_direction(azimuth: f32, elevation: f32) -> Vec3 {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_el, cos_el) = elevation.sin_cos();
    Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
}

/// Up vector for the given forward direction. The elevation clamp keeps
/// ordinary states away from the collinear case; this guard covers the
/// remaining numerical margin.
fn up_hint(forward: Vec3) -> Vec3 {
    if forward.dot(WORLD_UP).abs() > UP_COLLINEAR_LIMIT {
        FALLBACK_UP
    } else {
        WORLD_UP
    }
}

/// World-space eye position derived from the state.
#[must_use]
pub fn eye_position(state: &CameraState) -> Vec3 {
    state.pivot()
        + state.distance()
            * orbit_direction(state.azimuth(), state.elevation())
}

/// Right-handed view matrix aimed from the eye back at the pivot.
#[must_use]
pub fn view_matrix(state: &CameraState) -> Mat4 {
    let offset = orbit_direction(state.azimuth(), state.elevation());
    let eye = state.pivot() + state.distance() * offset;
    Mat4::look_at_rh(eye, state.pivot(), up_hint(-offset))
}

/// Camera-space right and up vectors for the state's orientation.
///
/// Used as the pan basis: both are unit length, orthogonal to the view
/// direction and to each other.
#[must_use]
pub fn camera_basis(state: &CameraState) -> (Vec3, Vec3) {
    let forward = -orbit_direction(state.azimuth(), state.elevation());
    let right = forward.cross(up_hint(forward)).normalize();
    let up = right.cross(forward);
    (right, up)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec4;

    use super::*;
    use crate::camera::state::CameraLimits;

    fn state(azimuth: f32, elevation: f32, distance: f32) -> CameraState {
        CameraState::new(
            Vec3::new(128.0, 128.0, 128.0),
            azimuth,
            elevation,
            distance,
            CameraLimits::default(),
        )
    }

    #[test]
    fn eye_position_at_zero_angles_sits_behind_pivot_on_z() {
        let s = state(0.0, 0.0, 5.0);
        let eye = eye_position(&s);
        assert!((eye - Vec3::new(128.0, 128.0, 133.0)).length() < 1e-4);
    }

    #[test]
    fn eye_position_follows_azimuth() {
        let s = state(FRAC_PI_2, 0.0, 5.0);
        let eye = eye_position(&s);
        assert!((eye - Vec3::new(133.0, 128.0, 128.0)).length() < 1e-4);
    }

    #[test]
    fn pivot_maps_to_negative_view_z_at_distance() {
        let s = state(1.3, -0.7, 42.0);
        let view = view_matrix(&s);
        let in_view = view * Vec4::new(128.0, 128.0, 128.0, 1.0);
        assert!(in_view.x.abs() < 1e-3);
        assert!(in_view.y.abs() < 1e-3);
        assert!((in_view.z + 42.0).abs() < 1e-3);
    }

    #[test]
    fn basis_is_orthonormal() {
        let s = state(2.4, 0.9, 7.0);
        let (right, up) = camera_basis(&s);
        let forward = (s.pivot() - eye_position(&s)).normalize();
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
        assert!(right.dot(forward).abs() < 1e-5);
        assert!(up.dot(forward).abs() < 1e-5);
    }

    #[test]
    fn up_hint_falls_back_for_vertical_forward() {
        assert_eq!(up_hint(Vec3::Y), Vec3::Z);
        assert_eq!(up_hint(-Vec3::Y), Vec3::Z);
        assert_eq!(up_hint(Vec3::new(0.0, 0.0, -1.0)), Vec3::Y);
    }

    #[test]
    fn view_matrix_is_finite_at_the_elevation_bound() {
        let s = state(0.0, 89f32.to_radians(), 5.0);
        let view = view_matrix(&s);
        assert!(view.is_finite());
    }
}
