//! Perspective camera with keyboard-driven movement.
//!
//! `Camera` is pure math (glam); `FlyController` maps held keys into
//! dt-scaled translation/rotation each frame.

mod controller;

use glam::{Mat4, Vec3};

pub use controller::FlyController;

/// Pitch is kept just short of straight up/down so the look-at basis stays
/// well-formed.
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Free-look perspective camera.
///
/// `yaw = 0, pitch = 0` looks along -Z; positive yaw turns right, positive
/// pitch looks up. Angles in radians.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,

    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, -cy * cp)
    }

    /// Unit vector to the camera's right, parallel to the ground plane.
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, sy)
    }

    /// View matrix (world → camera).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Projection matrix for the given aspect ratio (0..1 depth, wgpu style).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.z_near, self.z_far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Clamps pitch into `[-MAX_PITCH, MAX_PITCH]`.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 45.0f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = Camera::default();
        assert_vec3_near(cam.forward(), Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(cam.right(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turn_right_faces_positive_x() {
        let cam = Camera {
            yaw: std::f32::consts::FRAC_PI_2,
            ..Camera::default()
        };
        assert_vec3_near(cam.forward(), Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(cam.right(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn pitch_up_tilts_forward_vector() {
        let cam = Camera {
            pitch: std::f32::consts::FRAC_PI_4,
            ..Camera::default()
        };
        let f = cam.forward();
        assert!(f.y > 0.7 && f.z < 0.0);
    }

    #[test]
    fn clamp_pitch_stays_short_of_vertical() {
        let mut cam = Camera {
            pitch: 10.0,
            ..Camera::default()
        };
        cam.clamp_pitch();
        assert!(cam.pitch <= MAX_PITCH);
        cam.pitch = -10.0;
        cam.clamp_pitch();
        assert!(cam.pitch >= -MAX_PITCH);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = Camera::default();
        let clip = cam.view_proj(4.0 / 3.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < 1e-5 && ndc_y.abs() < 1e-5);
    }

    #[test]
    fn depth_range_is_zero_to_one() {
        let cam = Camera::default();
        let proj = cam.projection(1.0);

        let near = proj * Vec4::new(0.0, 0.0, -cam.z_near, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -cam.z_far, 1.0);

        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }
}
