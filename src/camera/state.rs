//! Spherical orbit-camera state.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::OrbviewError;

/// Validated clamp ranges for elevation and distance.
///
/// Elevation bounds are radians and must lie strictly inside
/// `(-π/2, π/2)`; distance bounds must be positive and ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    elevation_min: f32,
    elevation_max: f32,
    distance_min: f32,
    distance_max: f32,
}

impl CameraLimits {
    /// Create validated limits. Elevation bounds are radians.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when any bound is non-finite, a range
    /// is inverted, the elevation range touches `±π/2`, or a distance
    /// bound is not positive.
    pub fn new(
        elevation_min: f32,
        elevation_max: f32,
        distance_min: f32,
        distance_max: f32,
    ) -> Result<Self, OrbviewError> {
        let all_finite = elevation_min.is_finite()
            && elevation_max.is_finite()
            && distance_min.is_finite()
            && distance_max.is_finite();
        if !all_finite {
            return Err(OrbviewError::Config(
                "camera limits must be finite".into(),
            ));
        }
        if elevation_min > elevation_max {
            return Err(OrbviewError::Config(format!(
                "elevation bounds inverted: {elevation_min} > {elevation_max}"
            )));
        }
        // The look-at construction degenerates at the poles; the bounds
        // must keep a strict margin from ±π/2.
        if elevation_min <= -TAU / 4.0 || elevation_max >= TAU / 4.0 {
            return Err(OrbviewError::Config(format!(
                "elevation bounds [{elevation_min}, {elevation_max}] must lie strictly inside (-pi/2, pi/2)"
            )));
        }
        if distance_min <= 0.0 {
            return Err(OrbviewError::Config(format!(
                "min distance must be positive, got {distance_min}"
            )));
        }
        if distance_min > distance_max {
            return Err(OrbviewError::Config(format!(
                "distance bounds inverted: {distance_min} > {distance_max}"
            )));
        }
        Ok(Self {
            elevation_min,
            elevation_max,
            distance_min,
            distance_max,
        })
    }

    /// Lower elevation bound, radians.
    #[must_use]
    pub fn elevation_min(&self) -> f32 {
        self.elevation_min
    }

    /// Upper elevation bound, radians.
    #[must_use]
    pub fn elevation_max(&self) -> f32 {
        self.elevation_max
    }

    /// Minimum pivot-to-eye distance.
    #[must_use]
    pub fn distance_min(&self) -> f32 {
        self.distance_min
    }

    /// Maximum pivot-to-eye distance.
    #[must_use]
    pub fn distance_max(&self) -> f32 {
        self.distance_max
    }
}

impl Default for CameraLimits {
    /// Elevation ±89°, distance `[0.5, 500]`.
    fn default() -> Self {
        Self {
            elevation_min: -89f32.to_radians(),
            elevation_max: 89f32.to_radians(),
            distance_min: 0.5,
            distance_max: 500.0,
        }
    }
}

/// Camera placement in spherical coordinates around a pivot.
///
/// Every mutator re-establishes the invariants: azimuth wrapped into
/// `[0, 2π)`, elevation and distance clamped to the limits, non-finite
/// inputs discarded. Values read back are therefore always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pivot: Vec3,
    azimuth: f32,
    elevation: f32,
    distance: f32,
    limits: CameraLimits,
}

impl CameraState {
    /// Create a state from raw values, routed through the clamping
    /// mutators so out-of-range initial values land on the nearest bound.
    #[must_use]
    pub fn new(
        pivot: Vec3,
        azimuth: f32,
        elevation: f32,
        distance: f32,
        limits: CameraLimits,
    ) -> Self {
        let mut state = Self {
            pivot: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
            distance: limits.distance_min,
            limits,
        };
        state.set_pivot(pivot);
        state.set_azimuth(azimuth);
        state.set_elevation(elevation);
        state.set_distance(distance);
        state
    }

    /// Orbit center in world coordinates.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Angle around the vertical axis, radians in `[0, 2π)`.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Angle above the horizontal plane, radians, within the limits.
    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Pivot-to-eye distance, within the limits.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The clamp ranges this state enforces.
    #[must_use]
    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// Move the orbit center. Non-finite points are discarded.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        if pivot.is_finite() {
            self.pivot = pivot;
        }
    }

    /// Set the azimuth, wrapped into `[0, 2π)`.
    pub fn set_azimuth(&mut self, azimuth: f32) {
        if azimuth.is_finite() {
            let wrapped = azimuth.rem_euclid(TAU);
            // rem_euclid can round up to TAU itself for tiny negative
            // inputs; the invariant excludes TAU.
            self.azimuth = if wrapped >= TAU { 0.0 } else { wrapped };
        }
    }

    /// Set the elevation, clamped to the limits.
    pub fn set_elevation(&mut self, elevation: f32) {
        if elevation.is_finite() {
            self.elevation = elevation
                .clamp(self.limits.elevation_min, self.limits.elevation_max);
        }
    }

    /// Set the distance, clamped to the limits.
    pub fn set_distance(&mut self, distance: f32) {
        if distance.is_finite() {
            self.distance = distance
                .clamp(self.limits.distance_min, self.limits.distance_max);
        }
    }

    /// Apply an angular delta to azimuth and elevation.
    pub fn rotate_by(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        self.set_azimuth(self.azimuth + delta_azimuth);
        self.set_elevation(self.elevation + delta_elevation);
    }

    /// Multiply the distance by `factor` (clamped). Non-positive or
    /// non-finite factors are discarded.
    pub fn scale_distance(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.set_distance(self.distance * factor);
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, -30f32.to_radians(), 6.0, CameraLimits::default())
    }
}
