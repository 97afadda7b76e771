//! Scroll-wheel zoom control.

use crate::error::OrbviewError;

use super::state::CameraState;

/// Multiplicative zoom step applied to the camera distance.
///
/// Stateless apart from the configured factor: each step multiplies the
/// distance and the state clamps it, which makes repeated steps at a
/// bound no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f32,
}

impl Zoom {
    /// Create a zoom helper. `factor` is the zoom-in multiplier and must
    /// lie in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for factors outside `(0, 1)`.
    pub fn new(factor: f32) -> Result<Self, OrbviewError> {
        if !factor.is_finite() || factor <= 0.0 || factor >= 1.0 {
            return Err(OrbviewError::Config(format!(
                "zoom factor must lie in (0, 1), got {factor}"
            )));
        }
        Ok(Self { factor })
    }

    /// The zoom-in multiplier.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Step the camera closer: distance × factor, clamped.
    pub fn zoom_in(&self, state: &mut CameraState) {
        state.scale_distance(self.factor);
    }

    /// Step the camera away: distance ÷ factor, clamped.
    pub fn zoom_out(&self, state: &mut CameraState) {
        state.scale_distance(self.factor.recip());
    }

    /// Map a scroll offset to a zoom step: a negative vertical offset
    /// zooms in, anything else zooms out. Non-finite offsets are
    /// discarded.
    pub fn apply_scroll(&self, state: &mut CameraState, vertical: f32) {
        if !vertical.is_finite() {
            return;
        }
        if vertical < 0.0 {
            self.zoom_in(state);
        } else {
            self.zoom_out(state);
        }
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self { factor: 0.9 }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::state::CameraLimits;

    fn state(distance: f32) -> CameraState {
        let limits =
            CameraLimits::new(-1.0, 1.0, 1.0, 4096.0).unwrap();
        CameraState::new(Vec3::ZERO, 0.0, 0.0, distance, limits)
    }

    #[test]
    fn zoom_in_scales_by_factor() {
        let zoom = Zoom::new(0.9).unwrap();
        let mut s = state(512.0);
        zoom.zoom_in(&mut s);
        assert!((s.distance() - 460.8).abs() < 1e-3);
    }

    #[test]
    fn zoom_out_is_the_reciprocal_step() {
        let zoom = Zoom::new(0.9).unwrap();
        let mut s = state(90.0);
        zoom.zoom_out(&mut s);
        assert!((s.distance() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn distance_stays_within_bounds_for_any_sequence() {
        let zoom = Zoom::new(0.5).unwrap();
        let mut s = state(100.0);
        for i in 0..64 {
            if i % 3 == 0 {
                zoom.zoom_out(&mut s);
            } else {
                zoom.zoom_in(&mut s);
            }
            assert!(s.distance() >= 1.0);
            assert!(s.distance() <= 4096.0);
        }
    }

    #[test]
    fn zoom_in_is_idempotent_at_the_minimum() {
        let zoom = Zoom::new(0.9).unwrap();
        let mut s = state(1.0);
        zoom.zoom_in(&mut s);
        assert_eq!(s.distance(), 1.0);
        zoom.zoom_in(&mut s);
        assert_eq!(s.distance(), 1.0);
    }

    #[test]
    fn scroll_mapping_is_fixed() {
        let zoom = Zoom::new(0.9).unwrap();
        let mut s = state(100.0);
        zoom.apply_scroll(&mut s, -1.0);
        assert!(s.distance() < 100.0);
        let mut s = state(100.0);
        zoom.apply_scroll(&mut s, 1.0);
        assert!(s.distance() > 100.0);
        // Zero is not negative, so it zooms out.
        let mut s = state(100.0);
        zoom.apply_scroll(&mut s, 0.0);
        assert!(s.distance() > 100.0);
    }

    #[test]
    fn non_finite_scroll_is_discarded() {
        let zoom = Zoom::new(0.9).unwrap();
        let mut s = state(100.0);
        zoom.apply_scroll(&mut s, f32::NAN);
        assert_eq!(s.distance(), 100.0);
    }

    #[test]
    fn factor_outside_unit_interval_is_rejected() {
        assert!(Zoom::new(0.0).is_err());
        assert!(Zoom::new(1.0).is_err());
        assert!(Zoom::new(1.5).is_err());
        assert!(Zoom::new(-0.5).is_err());
        assert!(Zoom::new(f32::NAN).is_err());
        assert!(Zoom::new(0.9).is_ok());
    }
}
