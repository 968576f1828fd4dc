pub const BINDS_FILE: &str = "binds.ron";
pub const DEFAULT_ASSETS_FOLDER: &str = "../data";

/// Radians of orbit per pixel of mouse drag.
pub const ORBIT_SENSITIVITY: f32 = 0.005;
/// Radius change per wheel line when zooming.
pub const ZOOM_PER_LINE: f32 = 1.0;
pub const ZOOM_PER_PIXEL: f32 = 0.01;

pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
pub const HEMISPHERIC_ILLUMINANCE: f32 = 2_000.0;
pub const SUN_ILLUMINANCE: f32 = 8_000.0;
pub const SKYBOX_BRIGHTNESS: f32 = 1_000.0;
