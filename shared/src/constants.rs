use std::f32::consts::PI;

/// Scale applied to the engine's millisecond frame delta to get seconds.
pub const MILLIS_TO_SECONDS: f32 = 0.001;

pub const OCEAN_WIDTH: f32 = 512.0;
pub const OCEAN_DEPTH: f32 = 512.0;
pub const OCEAN_SUBDIVISIONS: u32 = 100;
/// Upper bound on grid subdivisions, keeping the vertex count near one million.
pub const MAX_OCEAN_SUBDIVISIONS: u32 = 1024;

/// Scroll distance (in logical pixels) at which the fog reaches its deep colour.
pub const MAX_SCROLL: f32 = 2000.0;

pub const SKY_CLEAR_COLOR: [f32; 4] = [0.5, 0.8, 1.0, 1.0];
pub const SURFACE_FOG_COLOR: [f32; 3] = [0.5, 0.8, 1.0];
pub const DEEP_FOG_COLOR: [f32; 3] = [0.0, 0.2, 0.5];

/// Direction the ocean sun shines towards.
pub const SUN_DIRECTION: [f32; 3] = [-1.0, -2.0, -1.0];

pub const SPHERE_DIAMETER: f32 = 2.0;

pub const SPHERE_CAMERA_ALPHA: f32 = PI / 2.0;
pub const SPHERE_CAMERA_BETA: f32 = PI / 2.0;
pub const SPHERE_CAMERA_RADIUS: f32 = 10.0;

pub const OCEAN_CAMERA_ALPHA: f32 = PI / 2.0;
pub const OCEAN_CAMERA_BETA: f32 = PI / 2.4;
pub const OCEAN_CAMERA_RADIUS: f32 = 30.0;

/// How far one W/S key press moves the camera target along Y.
pub const TARGET_STEP: f32 = 1.0;
