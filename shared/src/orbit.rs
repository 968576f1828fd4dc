//! Arc-rotate camera rig.
//!
//! The camera sits on a sphere around `target`, parameterised by a
//! longitude `alpha`, a colatitude `beta` measured from +Y, and a `radius`.

use bevy::math::Vec3;
use std::f32::consts::PI;

use crate::TARGET_STEP;

/// Closest `beta` may get to either pole.
pub const BETA_LIMIT: f32 = 0.01;
pub const MIN_RADIUS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
}

impl OrbitRig {
    pub fn new(alpha: f32, beta: f32, radius: f32, target: Vec3) -> Self {
        let mut rig = Self {
            alpha,
            beta,
            radius,
            target,
        };
        rig.clamp();
        rig
    }

    fn clamp(&mut self) {
        self.beta = self.beta.clamp(BETA_LIMIT, PI - BETA_LIMIT);
        self.radius = self.radius.max(MIN_RADIUS);
    }

    /// World position of the camera.
    pub fn eye(&self) -> Vec3 {
        let (sin_alpha, cos_alpha) = self.alpha.sin_cos();
        let (sin_beta, cos_beta) = self.beta.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_alpha * sin_beta, cos_beta, sin_alpha * sin_beta)
    }

    pub fn rotate(&mut self, delta_alpha: f32, delta_beta: f32) {
        self.alpha += delta_alpha;
        self.beta += delta_beta;
        self.clamp();
    }

    /// Moves the camera towards (negative) or away from (positive) the target.
    pub fn zoom(&mut self, delta_radius: f32) {
        self.radius += delta_radius;
        self.clamp();
    }

    pub fn nudge_target(&mut self, delta_y: f32) {
        self.target.y += delta_y;
    }
}

/// Vertical target step for a pressed logical key: `w`/`W` up, `s`/`S` down.
pub fn target_step_for_key(key: &str) -> Option<f32> {
    match key {
        "w" | "W" => Some(TARGET_STEP),
        "s" | "S" => Some(-TARGET_STEP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SPHERE_CAMERA_ALPHA, SPHERE_CAMERA_BETA, SPHERE_CAMERA_RADIUS};

    #[test]
    fn test_sphere_preset_looks_along_z() {
        let rig = OrbitRig::new(
            SPHERE_CAMERA_ALPHA,
            SPHERE_CAMERA_BETA,
            SPHERE_CAMERA_RADIUS,
            Vec3::ZERO,
        );
        assert!((rig.eye() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_eye_distance_is_radius() {
        let rig = OrbitRig::new(0.3, 1.1, 30.0, Vec3::new(1.0, 2.0, 3.0));
        assert!(((rig.eye() - rig.target).length() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_beta_and_radius_clamped() {
        let mut rig = OrbitRig::new(0.0, 1.0, 5.0, Vec3::ZERO);
        rig.rotate(0.0, 10.0);
        assert_eq!(rig.beta, PI - BETA_LIMIT);
        rig.rotate(0.0, -10.0);
        assert_eq!(rig.beta, BETA_LIMIT);
        rig.zoom(-100.0);
        assert_eq!(rig.radius, MIN_RADIUS);
    }

    #[test]
    fn test_key_steps() {
        assert_eq!(target_step_for_key("w"), Some(1.0));
        assert_eq!(target_step_for_key("W"), Some(1.0));
        assert_eq!(target_step_for_key("s"), Some(-1.0));
        assert_eq!(target_step_for_key("S"), Some(-1.0));
        assert_eq!(target_step_for_key("a"), None);
        assert_eq!(target_step_for_key("ww"), None);
    }

    #[test]
    fn test_nudge_moves_target_only() {
        let mut rig = OrbitRig::new(1.0, 1.0, 20.0, Vec3::ZERO);
        let eye_before = rig.eye();
        rig.nudge_target(1.0);
        rig.nudge_target(1.0);
        rig.nudge_target(-1.0);
        assert_eq!(rig.target, Vec3::new(0.0, 1.0, 0.0));
        assert!((rig.eye() - eye_before - Vec3::Y).length() < 1e-4);
    }
}
