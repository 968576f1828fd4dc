pub mod ocean;

use bevy::{asset::embedded_asset, prelude::*};

use ocean::{
    fog::OceanFog,
    water_material::{OceanWaterExtension, OceanWaterMaterial},
};

/// Registers the ocean's render assets. Scene entities are spawned by the
/// scene plugins.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        // Embed the shader at compile time
        embedded_asset!(app, "ocean/ocean_water.wgsl");

        app.add_plugins(MaterialPlugin::<OceanWaterMaterial>::default())
            .register_type::<OceanWaterExtension>()
            .register_type::<OceanFog>();
    }
}
