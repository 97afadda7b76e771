//! Built-in procedural frame source.
//!
//! Ray-casts a small fixed scene (a checkered ground plane and a matte
//! sphere) on the CPU. It exists so the binary runs without an external
//! renderer and so orbit, pan, and zoom are visually verifiable against
//! stable geometry.

use glam::Vec3;

use super::{FrameRequest, FrameSource};

const SPHERE_CENTER: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SPHERE_RADIUS: f32 = 1.0;
const SPHERE_COLOR: Vec3 = Vec3::new(0.85, 0.45, 0.25);
const CHECKER_LIGHT: Vec3 = Vec3::new(0.62, 0.62, 0.64);
const CHECKER_DARK: Vec3 = Vec3::new(0.38, 0.38, 0.42);
const SKY_HORIZON: Vec3 = Vec3::new(0.74, 0.82, 0.92);
const SKY_ZENITH: Vec3 = Vec3::new(0.28, 0.45, 0.72);
const LIGHT_DIR: Vec3 = Vec3::new(-0.45, 0.85, -0.3);

/// Vertical field of view of the cast rays, radians.
const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

/// Distance over which the ground fades into the horizon color.
const FOG_RANGE: f32 = 60.0;

/// CPU ray-cast test scene.
pub struct RaycastSource {
    buffer: Vec<u8>,
}

impl RaycastSource {
    /// Create an empty source; the buffer grows to match the first
    /// request.
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    fn shade(eye: Vec3, dir: Vec3) -> Vec3 {
        let light = LIGHT_DIR.normalize();

        // Sphere first: it occludes the plane.
        let to_center = eye - SPHERE_CENTER;
        let b = to_center.dot(dir);
        let c = to_center.length_squared() - SPHERE_RADIUS * SPHERE_RADIUS;
        let discriminant = b * b - c;
        if discriminant > 0.0 {
            let t = -b - discriminant.sqrt();
            if t > 0.0 {
                let normal = (eye + dir * t - SPHERE_CENTER).normalize();
                let diffuse = normal.dot(light).max(0.0);
                return SPHERE_COLOR * (0.25 + 0.75 * diffuse);
            }
        }

        // Ground plane y = 0 with a unit checkerboard.
        if dir.y < -1e-4 {
            let t = -eye.y / dir.y;
            if t > 0.0 {
                let hit = eye + dir * t;
                let parity = (hit.x.floor() + hit.z.floor()) as i64 & 1;
                let base = if parity == 0 {
                    CHECKER_LIGHT
                } else {
                    CHECKER_DARK
                };
                let fade = (t / FOG_RANGE).min(1.0);
                return base.lerp(SKY_HORIZON, fade);
            }
        }

        // Sky gradient by ray height.
        SKY_HORIZON.lerp(SKY_ZENITH, dir.y.max(0.0))
    }
}

impl Default for RaycastSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for RaycastSource {
    fn render_frame(&mut self, request: &FrameRequest) -> &[u8] {
        let width = request.width.max(1) as usize;
        let height = request.height.max(1) as usize;
        self.buffer.resize(width * height * 4, 0);

        // Camera basis from the inverse view transform.
        let inverse_view = request.view.inverse();
        let right = inverse_view.x_axis.truncate();
        let up = inverse_view.y_axis.truncate();
        let forward = -inverse_view.z_axis.truncate();

        let tan_half = (FOV_Y * 0.5).tan();
        let aspect = width as f32 / height as f32;

        for y in 0..height {
            let ndc_y = 1.0 - 2.0 * (y as f32 + 0.5) / height as f32;
            for x in 0..width {
                let ndc_x = 2.0 * (x as f32 + 0.5) / width as f32 - 1.0;
                let dir = (forward
                    + right * (ndc_x * tan_half * aspect)
                    + up * (ndc_y * tan_half))
                    .normalize();
                let color = Self::shade(request.eye, dir);
                let offset = (y * width + x) * 4;
                self.buffer[offset] = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
                self.buffer[offset + 1] =
                    (color.y.clamp(0.0, 1.0) * 255.0) as u8;
                self.buffer[offset + 2] =
                    (color.z.clamp(0.0, 1.0) * 255.0) as u8;
                self.buffer[offset + 3] = 255;
            }
        }
        &self.buffer
    }
}
