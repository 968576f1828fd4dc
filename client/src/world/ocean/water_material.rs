//! Water material for the ocean surface.
//!
//! Extends Bevy's `StandardMaterial` with a bump map that drifts with the
//! wind and a tint towards the water colour. Geometry is not touched here;
//! the waves come from the CPU displacement of the mesh.

use bevy::{
    image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor},
    pbr::{ExtendedMaterial, MaterialExtension},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};
use seascape_shared::assets::WATER_BUMP_TEXTURE_PATH;

pub const OCEAN_WATER_SHADER: &str = "embedded://seascape/world/ocean/ocean_water.wgsl";

/// Uniform data for the water shader (matches the WGSL `OceanWater` struct).
#[derive(Clone, Copy, Debug, ShaderType, Reflect)]
pub struct OceanWaterUniform {
    /// Colour the surface is tinted towards
    pub water_color: Vec4,
    /// Direction the bump map drifts in (x, z)
    pub wind_direction: Vec2,
    /// Bump drift speed; the sign flips the drift direction
    pub wind_force: f32,
    /// Strength of the crest highlight
    pub wave_height: f32,
    /// How strongly the bump map bends the surface normal
    pub bump_height: f32,
    /// Bump map tiling, smaller means more repetitions
    pub wave_length: f32,
    pub wave_speed: f32,
    /// Blend between the base colour (0.0) and `water_color` (1.0)
    pub color_blend_factor: f32,
}

impl Default for OceanWaterUniform {
    fn default() -> Self {
        Self {
            water_color: Vec4::new(0.1, 0.1, 0.6, 1.0),
            wind_direction: Vec2::new(0.0, 1.0),
            wind_force: -5.0,
            wave_height: 0.5,
            bump_height: 4.5,
            wave_length: 0.05,
            wave_speed: 1.0,
            color_blend_factor: 0.002,
        }
    }
}

#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct OceanWaterExtension {
    #[uniform(100)]
    pub settings: OceanWaterUniform,

    #[texture(101)]
    #[sampler(102)]
    pub bump_texture: Option<Handle<Image>>,
}

impl MaterialExtension for OceanWaterExtension {
    fn fragment_shader() -> ShaderRef {
        OCEAN_WATER_SHADER.into()
    }
}

pub type OceanWaterMaterial = ExtendedMaterial<StandardMaterial, OceanWaterExtension>;

/// Surface opacity (0 = fully transparent, 1 = fully opaque).
pub const WATER_ALPHA: f32 = 0.6;

pub fn create_ocean_water_material(bump_texture: Option<Handle<Image>>) -> OceanWaterMaterial {
    ExtendedMaterial {
        base: StandardMaterial {
            base_color: Color::srgba(0.2, 0.45, 0.7, WATER_ALPHA),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.1,
            reflectance: 0.5,
            cull_mode: None, // Visible from below when the camera dives
            double_sided: true,
            ..default()
        },
        extension: OceanWaterExtension {
            settings: OceanWaterUniform::default(),
            bump_texture,
        },
    }
}

/// Loads the bump map with a repeating sampler so it can tile and drift.
pub fn load_bump_texture(asset_server: &AssetServer) -> Handle<Image> {
    asset_server.load_with_settings(
        WATER_BUMP_TEXTURE_PATH,
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..ImageSamplerDescriptor::linear()
            });
        },
    )
}
