//! Arc-rotate cameras driven by mouse drag, wheel and the W/S keys.

use bevy::{
    input::{
        keyboard::{Key, KeyboardInput},
        mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
        ButtonState,
    },
    prelude::*,
};
use seascape_shared::{
    orbit::{target_step_for_key, OrbitRig},
    sets::SceneUpdateSet,
};

use crate::constants::{ORBIT_SENSITIVITY, ZOOM_PER_LINE, ZOOM_PER_PIXEL};

/// Camera placed by an `OrbitRig` around its target.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub rig: OrbitRig,
    /// The wheel zooms this camera. Scenes that use the wheel for
    /// scrolling leave it off.
    pub zoom_enabled: bool,
}

impl OrbitCamera {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.rig.eye()).looking_at(self.rig.target, Vec3::Y)
    }
}

/// Marks cameras whose target follows the W/S keys.
#[derive(Component)]
pub struct TargetKeys;

pub struct OrbitCameraPlugin;
impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (rotate_orbit_cameras, zoom_orbit_cameras, nudge_camera_targets)
                    .in_set(SceneUpdateSet::Input),
                apply_orbit_transforms.in_set(SceneUpdateSet::Rendering),
            ),
        );
    }
}

pub fn rotate_orbit_cameras(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || motion.delta == Vec2::ZERO {
        return;
    }
    let delta = motion.delta * ORBIT_SENSITIVITY;
    for mut camera in &mut cameras {
        camera.rig.rotate(-delta.x, -delta.y);
    }
}

pub fn zoom_orbit_cameras(
    scroll: Res<AccumulatedMouseScroll>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let step = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y * ZOOM_PER_LINE,
        MouseScrollUnit::Pixel => scroll.delta.y * ZOOM_PER_PIXEL,
    };
    for mut camera in cameras.iter_mut().filter(|camera| camera.zoom_enabled) {
        camera.rig.zoom(-step);
    }
}

/// Keydown listener: each press (and key repeat) of a target key moves the
/// camera target by one step.
pub fn nudge_camera_targets(
    mut keys: EventReader<KeyboardInput>,
    mut cameras: Query<&mut OrbitCamera, With<TargetKeys>>,
) {
    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let Key::Character(ref typed) = event.logical_key else {
            continue;
        };
        let Some(step) = target_step_for_key(typed.as_str()) else {
            continue;
        };
        for mut camera in &mut cameras {
            camera.rig.nudge_target(step);
            debug!("Camera target moved to y = {}", camera.rig.target.y);
        }
    }
}

pub fn apply_orbit_transforms(
    mut cameras: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (camera, mut transform) in &mut cameras {
        *transform = camera.transform();
    }
}
