use glam::Vec3;

use crate::input::{InputState, Key};

use super::Camera;

/// Keyboard fly controller.
///
/// Bindings:
/// - `W`/`S` move along the view direction, `A`/`D` strafe, `R`/`F` move
///   along world up/down
/// - arrow keys rotate (left/right yaw, up/down pitch)
///
/// Speeds are per second; call [`update`](Self::update) once per frame with
/// the frame's delta time.
#[derive(Debug, Copy, Clone)]
pub struct FlyController {
    /// Translation speed, world units per second.
    pub move_speed: f32,

    /// Rotation speed, radians per second.
    pub look_speed: f32,
}

impl FlyController {
    /// Applies held keys to `camera`, scaled by `dt` seconds.
    pub fn update(&self, camera: &mut Camera, input: &InputState, dt: f32) {
        let yaw = axis(input, Key::ArrowRight, Key::ArrowLeft);
        let pitch = axis(input, Key::ArrowUp, Key::ArrowDown);

        if yaw != 0.0 || pitch != 0.0 {
            camera.yaw += yaw * self.look_speed * dt;
            camera.pitch += pitch * self.look_speed * dt;
            camera.clamp_pitch();
        }

        let fwd = axis(input, Key::W, Key::S);
        let strafe = axis(input, Key::D, Key::A);
        let lift = axis(input, Key::R, Key::F);

        if fwd != 0.0 || strafe != 0.0 || lift != 0.0 {
            let step = camera.forward() * fwd + camera.right() * strafe + Vec3::Y * lift;
            camera.position += step * self.move_speed * dt;
        }
    }
}

impl Default for FlyController {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            look_speed: 1.5,
        }
    }
}

fn axis(input: &InputState, positive: Key, negative: Key) -> f32 {
    let mut v = 0.0;
    if input.key_down(positive) {
        v += 1.0;
    }
    if input.key_down(negative) {
        v -= 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputFrame, KeyState};

    fn held(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    repeat: false,
                },
            );
        }
        state
    }

    #[test]
    fn w_moves_toward_view_direction() {
        let mut cam = Camera::default();
        let ctl = FlyController::default();

        ctl.update(&mut cam, &held(&[Key::W]), 0.5);

        // Default camera looks down -Z.
        assert!(cam.position.z < 2.0);
        assert_eq!(cam.position.x, 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut cam = Camera::default();
        let ctl = FlyController::default();
        let before = cam.position;

        ctl.update(&mut cam, &held(&[Key::W, Key::S]), 0.5);

        assert_eq!(cam.position, before);
    }

    #[test]
    fn arrows_rotate_and_respect_pitch_clamp() {
        let mut cam = Camera::default();
        let ctl = FlyController {
            move_speed: 2.0,
            look_speed: 100.0,
        };

        ctl.update(&mut cam, &held(&[Key::ArrowRight, Key::ArrowUp]), 1.0);

        assert!(cam.yaw > 0.0);
        assert!(cam.pitch > 0.0 && cam.pitch <= crate::camera::MAX_PITCH);
    }

    #[test]
    fn translation_scales_with_dt() {
        let ctl = FlyController::default();

        let mut a = Camera::default();
        ctl.update(&mut a, &held(&[Key::R]), 0.1);

        let mut b = Camera::default();
        ctl.update(&mut b, &held(&[Key::R]), 0.2);

        assert!((b.position.y - 2.0 * a.position.y).abs() < 1e-6);
    }
}
