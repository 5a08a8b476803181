use glam::{Mat4, Vec3};

/// Default yaw in degrees (looking down -Z).
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees (level with the horizon).
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default look sensitivity (degrees per pixel of cursor motion).
pub const DEFAULT_SENSITIVITY: f32 = 0.25;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOVY: f32 = 45.0;

/// Pitch is clamped strictly inside +/-90 degrees so `forward` never becomes
/// parallel to the world up vector.
const PITCH_LIMIT: f32 = 89.9;
/// Field-of-view bounds for scroll zoom.
const FOVY_MIN: f32 = 1.0;
const FOVY_MAX: f32 = 45.0;

/// Discrete movement direction, decoupled from any window-system input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the camera's forward vector.
    Forward,
    /// Against the camera's forward vector.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
}

/// Free-fly camera driven by accumulated yaw/pitch input.
///
/// The only persisted orientation state is the Euler angle pair; the
/// `forward`/`right`/`up` basis is a pure function of yaw, pitch and
/// `world_up`, recomputed eagerly after every angle change so it can never
/// go stale. Callers read the basis but never set it.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Fixed world up reference, set at construction.
    world_up: Vec3,
    /// Yaw in degrees. Unconstrained; wraps via trigonometric periodicity.
    yaw: f32,
    /// Pitch in degrees, kept strictly inside +/-90 under constrained look.
    pitch: f32,
    /// Derived view direction (unit length).
    forward: Vec3,
    /// Derived right vector (unit length).
    right: Vec3,
    /// Derived up vector (unit length).
    up: Vec3,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pixel of cursor motion.
    pub look_sensitivity: f32,
    /// Vertical field of view in degrees, driven by scroll zoom.
    pub fovy: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl FlyCamera {
    /// Create a camera at `position` with the given world up reference and
    /// initial Euler angles (degrees). Tuning scalars start at their
    /// defaults.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: DEFAULT_SPEED,
            look_sensitivity: DEFAULT_SENSITIVITY,
            fovy: DEFAULT_FOVY,
        };
        camera.update_vectors();
        camera
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current view direction (unit length).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Current right vector (unit length).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Current up vector (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix mapping world coordinates into camera-relative
    /// coordinates, looking from `position` toward `position + forward`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Translate the camera along its basis for `dt` seconds of movement.
    ///
    /// `dt` must be non-negative (elapsed frame time); `dt == 0` is a no-op.
    pub fn apply_movement(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.forward * velocity,
            MoveDirection::Backward => self.position -= self.forward * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Accumulate raw cursor-motion deltas into the Euler angles and
    /// recompute the basis.
    ///
    /// `dx` yaws, `dy` pitches (positive = up). With `constrain_pitch` the
    /// pitch is clamped inside +/-90 degrees so the view cannot flip.
    pub fn apply_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.look_sensitivity;
        self.pitch += dy * self.look_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Zoom by narrowing the field of view: scroll up (`dy > 0`) zooms in.
    ///
    /// A value already outside [1, 45] snaps back to the nearest bound
    /// instead of applying the delta; that branch only runs if the invariant
    /// was somehow violated externally.
    pub fn apply_zoom(&mut self, dy: f32) {
        if (FOVY_MIN..=FOVY_MAX).contains(&self.fovy) {
            self.fovy = (self.fovy - dy).clamp(FOVY_MIN, FOVY_MAX);
        } else {
            self.fovy = self.fovy.clamp(FOVY_MIN, FOVY_MAX);
        }
    }

    /// Rebuild the orthonormal basis from the current Euler angles.
    ///
    /// Canonical spherical-to-Cartesian derivation; `world_up` and `forward`
    /// are never parallel (pitch stays inside +/-90), so the cross products
    /// never degenerate.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let forward = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.forward = forward.normalize();
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_unit(v: Vec3) {
        assert!((v.length() - 1.0).abs() < EPS, "not unit length: {v:?}");
    }

    #[test]
    fn basis_is_orthonormal_across_angles() {
        for yaw in [-180.0_f32, -90.0, -45.0, 0.0, 30.0, 90.0, 270.0, 720.0] {
            for pitch in [-89.9_f32, -60.0, -10.0, 0.0, 15.0, 45.0, 89.9] {
                let cam = FlyCamera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_unit(cam.forward());
                assert_unit(cam.right());
                assert_unit(cam.up());
                assert!(cam.forward().dot(cam.right()).abs() < EPS);
                assert!(cam.forward().dot(cam.up()).abs() < EPS);
                assert!(cam.right().dot(cam.up()).abs() < EPS);
            }
        }
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert!((cam.forward() - Vec3::NEG_Z).length() < EPS);
        assert!((cam.right() - Vec3::X).length() < EPS);
        assert!((cam.up() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn forward_movement_scales_with_speed_and_dt() {
        let mut cam = FlyCamera::default();
        cam.movement_speed = 2.5;
        cam.apply_movement(MoveDirection::Forward, 1.0);
        assert!((cam.position - Vec3::new(0.0, 0.0, -2.5)).length() < EPS);
    }

    #[test]
    fn zero_dt_movement_is_a_noop() {
        let mut cam = FlyCamera::default();
        cam.apply_movement(MoveDirection::Left, 0.0);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn forward_then_backward_round_trips_position() {
        let mut cam = FlyCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 37.0, -20.0);
        let start = cam.position;
        cam.apply_movement(MoveDirection::Forward, 0.73);
        cam.apply_movement(MoveDirection::Backward, 0.73);
        assert!((cam.position - start).length() < EPS);

        cam.apply_movement(MoveDirection::Right, 0.31);
        cam.apply_movement(MoveDirection::Left, 0.31);
        assert!((cam.position - start).length() < EPS);
    }

    #[test]
    fn constrained_look_clamps_pitch() {
        let mut cam = FlyCamera::default();
        cam.look_sensitivity = 1.0;
        cam.apply_look(0.0, 1000.0, true);
        assert_eq!(cam.pitch(), 89.9);

        cam.apply_look(0.0, -10_000.0, true);
        assert_eq!(cam.pitch(), -89.9);
    }

    #[test]
    fn unconstrained_look_leaves_pitch_free() {
        let mut cam = FlyCamera::default();
        cam.look_sensitivity = 1.0;
        cam.apply_look(0.0, 120.0, false);
        assert_eq!(cam.pitch(), 120.0);
    }

    #[test]
    fn look_updates_basis_eagerly() {
        let mut cam = FlyCamera::default();
        cam.look_sensitivity = 1.0;
        // Yaw from -90 to 0: forward swings to +X.
        cam.apply_look(90.0, 0.0, true);
        assert!((cam.forward() - Vec3::X).length() < EPS);
    }

    #[test]
    fn zoom_clamps_to_bounds() {
        let mut cam = FlyCamera::default();
        cam.apply_zoom(50.0);
        assert_eq!(cam.fovy, 1.0);

        cam.apply_zoom(-100.0);
        assert_eq!(cam.fovy, 45.0);
    }

    #[test]
    fn repeated_zoom_stays_in_bounds() {
        let mut cam = FlyCamera::default();
        for dy in [3.0_f32, -7.5, 60.0, -60.0, 0.25, 44.0, -0.1] {
            cam.apply_zoom(dy);
            assert!((1.0..=45.0).contains(&cam.fovy), "fovy = {}", cam.fovy);
        }
    }

    #[test]
    fn zoom_recovers_from_out_of_range_state() {
        // Snap to the nearest bound, ignoring the delta.
        let mut cam = FlyCamera::default();
        cam.fovy = 0.2;
        cam.apply_zoom(-30.0);
        assert_eq!(cam.fovy, 1.0);

        cam.fovy = 80.0;
        cam.apply_zoom(10.0);
        assert_eq!(cam.fovy, 45.0);
    }

    #[test]
    fn view_matrix_maps_look_target_to_view_axis() {
        let cam = FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
        let view = cam.view_matrix();
        // A point one unit ahead of the camera lands on the -Z view axis.
        let target = cam.position + cam.forward();
        let in_view = view.transform_point3(target);
        assert!((in_view - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }
}
