//! Pointer-driven interaction state machine for the orbit camera.

use glam::{Mat4, Vec2, Vec3};

use crate::error::OrbviewError;
use crate::input::PointerButton;
use crate::options::CameraOptions;

use super::state::{CameraLimits, CameraState};
use super::transform;
use super::zoom::Zoom;

/// Pan reference captured at press time.
///
/// A pan drag is a pure function of this anchor and the current cursor
/// position: offsets are measured against the anchor screen position and
/// applied to the anchor pivot along the anchor basis, so per-event
/// rounding never accumulates and a mid-drag zoom cannot shift the
/// reference.
#[derive(Debug, Clone, Copy)]
struct PanAnchor {
    screen: Vec2,
    pivot: Vec3,
    right: Vec3,
    up: Vec3,
    distance: f32,
}

/// The active drag session. One pointer drives one gesture at a time.
#[derive(Debug, Clone, Copy)]
enum DragSession {
    Idle,
    Rotating,
    Panning(PanAnchor),
}

/// Interaction state machine owning the camera state.
///
/// Maps press/drag/release events onto rotation and panning and scroll
/// events onto zoom, keeping the camera invariants intact throughout.
/// Out-of-sequence input (drags with no session, stray releases, nested
/// presses) is ignored rather than treated as an error: with
/// asynchronous input delivery such events are normal.
pub struct OrbitController {
    state: CameraState,
    session: DragSession,
    rotate_sensitivity: f32,
    pan_sensitivity: f32,
    zoom: Zoom,
    rotate_button: PointerButton,
    pan_button: PointerButton,
}

impl OrbitController {
    /// Build a controller from options, converting angles from degrees
    /// and validating every bound. This is the fail-fast gate: a
    /// controller that constructs successfully can never leave the
    /// configured ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for inverted or pole-touching
    /// elevation bounds, non-positive distances or sensitivities, a zoom
    /// factor outside `(0, 1)`, or identical rotate/pan buttons.
    pub fn from_options(options: &CameraOptions) -> Result<Self, OrbviewError> {
        let limits = CameraLimits::new(
            options.elevation_min.to_radians(),
            options.elevation_max.to_radians(),
            options.min_distance,
            options.max_distance,
        )?;
        let zoom = Zoom::new(options.zoom_factor)?;
        for (name, value) in [
            ("rotate_sensitivity", options.rotate_sensitivity),
            ("pan_sensitivity", options.pan_sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrbviewError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if options.rotate_button == options.pan_button {
            return Err(OrbviewError::Config(format!(
                "rotate and pan cannot share a button ({:?})",
                options.rotate_button
            )));
        }

        let state = CameraState::new(
            Vec3::from(options.pivot),
            options.initial_azimuth.to_radians(),
            options.initial_elevation.to_radians(),
            options.initial_distance,
            limits,
        );
        Ok(Self {
            state,
            session: DragSession::Idle,
            rotate_sensitivity: options.rotate_sensitivity,
            pan_sensitivity: options.pan_sensitivity,
            zoom,
            rotate_button: options.rotate_button,
            pan_button: options.pan_button,
        })
    }

    /// Begin a drag session for a bound button.
    ///
    /// Ignored while a session is active: a second press reassigning the
    /// anchor mid-drag would make the view jump. Unbound buttons and
    /// non-finite coordinates are also ignored.
    pub fn press(&mut self, x: f32, y: f32, button: PointerButton) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        if !matches!(self.session, DragSession::Idle) {
            return;
        }
        if button == self.rotate_button {
            self.session = DragSession::Rotating;
        } else if button == self.pan_button {
            let (right, up) = transform::camera_basis(&self.state);
            self.session = DragSession::Panning(PanAnchor {
                screen: Vec2::new(x, y),
                pivot: self.state.pivot(),
                right,
                up,
                distance: self.state.distance(),
            });
        }
    }

    /// Apply pointer motion to the active session.
    ///
    /// Rotating consumes the relative deltas; panning re-derives the
    /// pivot from the anchor and the absolute position. A drag with no
    /// session, or with any non-finite component, is ignored.
    pub fn drag(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        if !(x.is_finite() && y.is_finite() && dx.is_finite() && dy.is_finite())
        {
            return;
        }
        match self.session {
            DragSession::Idle => {}
            DragSession::Rotating => {
                self.state.rotate_by(
                    -dx * self.rotate_sensitivity,
                    -dy * self.rotate_sensitivity,
                );
            }
            DragSession::Panning(anchor) => {
                let offset = Vec2::new(x, y) - anchor.screen;
                let step = (anchor.up * offset.y - anchor.right * offset.x)
                    * (self.pan_sensitivity * anchor.distance);
                self.state.set_pivot(anchor.pivot + step);
            }
        }
    }

    /// End the active session when `button` matches its gesture.
    ///
    /// Always honored for the matching button, even after an interrupted
    /// drag; releases for other buttons (or with no session) are no-ops.
    pub fn release(&mut self, _x: f32, _y: f32, button: PointerButton) {
        let ends = match self.session {
            DragSession::Idle => false,
            DragSession::Rotating => button == self.rotate_button,
            DragSession::Panning(_) => button == self.pan_button,
        };
        if ends {
            self.session = DragSession::Idle;
        }
    }

    /// Map a scroll offset onto the zoom helper. The horizontal
    /// component is unused.
    pub fn scroll(&mut self, _horizontal: f32, vertical: f32) {
        self.zoom.apply_scroll(&mut self.state, vertical);
    }

    /// Current view matrix, derived on demand.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        transform::view_matrix(&self.state)
    }

    /// Current world-space eye position, derived on demand.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        transform::eye_position(&self.state)
    }

    /// Read-only view of the camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use glam::Vec4;

    use super::*;

    /// The viewer scenario used throughout: the camera orbits the center
    /// of a 256³ volume from 512 units out, tilted 60° below horizontal.
    fn options() -> CameraOptions {
        CameraOptions {
            pivot: [128.0, 128.0, 128.0],
            initial_azimuth: 0.0,
            initial_elevation: -60.0,
            initial_distance: 512.0,
            rotate_sensitivity: 0.01,
            pan_sensitivity: 0.001,
            zoom_factor: 0.9,
            elevation_min: -89.0,
            elevation_max: 89.0,
            min_distance: 1.0,
            max_distance: 4096.0,
            ..CameraOptions::default()
        }
    }

    fn controller() -> OrbitController {
        OrbitController::from_options(&options()).unwrap()
    }

    #[test]
    fn zoom_then_rotate_scenario() {
        let mut c = controller();
        c.scroll(0.0, -1.0);
        assert!((c.camera().distance() - 460.8).abs() < 1e-3);

        c.press(10.0, 10.0, PointerButton::Left);
        c.drag(20.0, 10.0, 10.0, 0.0);
        assert!((c.camera().azimuth() - (TAU - 0.1)).abs() < 1e-5);
        assert!(
            (c.camera().elevation() - (-60f32).to_radians()).abs() < 1e-6
        );
    }

    #[test]
    fn press_release_without_drag_leaves_state_unchanged() {
        let mut c = controller();
        let before = c.camera().clone();
        c.press(55.0, 70.0, PointerButton::Left);
        c.release(55.0, 70.0, PointerButton::Left);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn nested_press_keeps_the_original_mode() {
        let mut c = controller();
        let pivot_before = c.camera().pivot();
        c.press(10.0, 10.0, PointerButton::Left);
        c.press(10.0, 10.0, PointerButton::Right);
        c.drag(30.0, 10.0, 20.0, 0.0);
        // Interpreted as a rotation, not a pan.
        assert!((c.camera().azimuth() - (TAU - 0.2)).abs() < 1e-5);
        assert_eq!(c.camera().pivot(), pivot_before);
    }

    #[test]
    fn drag_without_session_is_ignored() {
        let mut c = controller();
        let before = c.camera().clone();
        c.drag(100.0, 100.0, 40.0, -25.0);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut c = controller();
        let before = c.camera().clone();
        c.release(0.0, 0.0, PointerButton::Right);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn mismatched_release_keeps_the_session_alive() {
        let mut c = controller();
        c.press(0.0, 0.0, PointerButton::Left);
        c.release(0.0, 0.0, PointerButton::Right);
        c.drag(10.0, 0.0, 10.0, 0.0);
        // Still rotating after the unrelated release.
        assert!((c.camera().azimuth() - (TAU - 0.1)).abs() < 1e-5);
    }

    #[test]
    fn release_always_returns_to_idle() {
        let mut c = controller();
        c.press(0.0, 0.0, PointerButton::Left);
        c.drag(5.0, 5.0, 5.0, 5.0);
        c.release(5.0, 5.0, PointerButton::Left);
        let after_release = c.camera().clone();
        c.drag(50.0, 50.0, 45.0, 45.0);
        assert_eq!(c.camera(), &after_release);
    }

    #[test]
    fn rotation_invariants_hold_for_long_drag_sequences() {
        let mut c = controller();
        c.press(0.0, 0.0, PointerButton::Left);
        for i in 0..500 {
            let dx = (i as f32 * 0.7).sin() * 900.0;
            let dy = (i as f32 * 1.3).cos() * 900.0;
            c.drag(dx, dy, dx, dy);
            let azimuth = c.camera().azimuth();
            let elevation = c.camera().elevation();
            assert!((0.0..TAU).contains(&azimuth));
            assert!(elevation >= (-89f32).to_radians());
            assert!(elevation <= 89f32.to_radians());
        }
    }

    #[test]
    fn pan_moves_pivot_along_the_anchor_basis() {
        let mut opts = options();
        opts.initial_elevation = 0.0;
        let mut c = OrbitController::from_options(&opts).unwrap();
        // At azimuth 0 / elevation 0 the camera looks down −Z, so right
        // is +X and up is +Y.
        c.press(100.0, 100.0, PointerButton::Right);
        c.drag(110.0, 100.0, 10.0, 0.0);
        let expected =
            Vec3::new(128.0 - 10.0 * 0.001 * 512.0, 128.0, 128.0);
        assert!((c.camera().pivot() - expected).length() < 1e-3);

        c.drag(110.0, 120.0, 0.0, 20.0);
        let expected = expected + Vec3::new(0.0, 20.0 * 0.001 * 512.0, 0.0);
        assert!((c.camera().pivot() - expected).length() < 1e-3);
    }

    #[test]
    fn pan_keeps_the_grabbed_point_under_the_cursor() {
        // With pan sensitivity matched to the projection, the world point
        // on the pivot plane under the anchor must track the cursor.
        let width = 800.0f32;
        let height = 800.0f32;
        let fovy = 45f32.to_radians();
        let tan_half = (fovy * 0.5).tan();

        let mut opts = options();
        opts.pan_sensitivity = 2.0 * tan_half / height;
        let mut c = OrbitController::from_options(&opts).unwrap();

        let proj =
            Mat4::perspective_rh(fovy, width / height, 0.1, 10_000.0);
        let project = |view: Mat4, point: Vec3| -> Vec2 {
            let clip = proj * view * Vec4::from((point, 1.0));
            let ndc = clip / clip.w;
            Vec2::new(
                (ndc.x + 1.0) * 0.5 * width,
                (1.0 - ndc.y) * 0.5 * height,
            )
        };

        // World point on the pivot plane under the anchor position.
        let anchor = Vec2::new(250.0, 300.0);
        let view = c.view_matrix();
        let distance = c.camera().distance();
        let view_x = (2.0 * anchor.x / width - 1.0)
            * distance
            * tan_half
            * (width / height);
        let view_y = (1.0 - 2.0 * anchor.y / height) * distance * tan_half;
        let grabbed = view
            .inverse()
            .transform_point3(Vec3::new(view_x, view_y, -distance));
        let at_anchor = project(view, grabbed);
        assert!((at_anchor - anchor).length() < 1e-2);

        c.press(anchor.x, anchor.y, PointerButton::Right);
        let target = anchor + Vec2::new(30.0, -20.0);
        c.drag(target.x, target.y, 30.0, -20.0);

        let after = project(c.view_matrix(), grabbed);
        assert!((after - target).length() < 0.05);
    }

    #[test]
    fn pan_is_anchored_against_mid_drag_zoom() {
        let mut c = controller();
        c.press(100.0, 100.0, PointerButton::Right);
        c.drag(130.0, 100.0, 30.0, 0.0);
        let pivot_single_step = c.camera().pivot();

        // Zooming mid-drag must not change what the same cursor position
        // means: the pan is re-derived from the anchor snapshot.
        c.scroll(0.0, -1.0);
        c.drag(130.0, 100.0, 0.0, 0.0);
        assert!((c.camera().pivot() - pivot_single_step).length() < 1e-4);
    }

    #[test]
    fn non_finite_drag_events_are_discarded() {
        let mut c = controller();
        c.press(0.0, 0.0, PointerButton::Left);
        let before = c.camera().clone();
        c.drag(f32::NAN, 0.0, 1.0, 1.0);
        c.drag(0.0, 0.0, f32::INFINITY, 1.0);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn non_finite_press_is_discarded() {
        let mut c = controller();
        c.press(f32::NAN, 0.0, PointerButton::Left);
        let before = c.camera().clone();
        c.drag(10.0, 0.0, 10.0, 0.0);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn unbound_button_does_not_start_a_session() {
        let mut c = controller();
        c.press(0.0, 0.0, PointerButton::Middle);
        let before = c.camera().clone();
        c.drag(10.0, 0.0, 10.0, 0.0);
        assert_eq!(c.camera(), &before);
    }

    #[test]
    fn initial_values_outside_bounds_are_clamped() {
        let mut opts = options();
        opts.initial_elevation = -150.0;
        opts.initial_distance = 100_000.0;
        let c = OrbitController::from_options(&opts).unwrap();
        assert_eq!(c.camera().elevation(), (-89f32).to_radians());
        assert_eq!(c.camera().distance(), 4096.0);
    }

    #[test]
    fn invalid_configuration_fails_construction() {
        let mut opts = options();
        opts.min_distance = 10.0;
        opts.max_distance = 1.0;
        assert!(OrbitController::from_options(&opts).is_err());

        let mut opts = options();
        opts.elevation_max = 95.0;
        assert!(OrbitController::from_options(&opts).is_err());

        let mut opts = options();
        opts.zoom_factor = 1.5;
        assert!(OrbitController::from_options(&opts).is_err());

        let mut opts = options();
        opts.rotate_sensitivity = 0.0;
        assert!(OrbitController::from_options(&opts).is_err());

        let mut opts = options();
        opts.pan_button = opts.rotate_button;
        assert!(OrbitController::from_options(&opts).is_err());
    }
}
