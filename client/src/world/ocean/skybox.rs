//! Daylight skybox for the ocean scene.
//!
//! The six faces ship as separate BMP files. Once all of them are loaded
//! they are stacked into one cube texture and attached to the ocean camera.

use bevy::{
    asset::{LoadState, RenderAssetUsages},
    core_pipeline::Skybox,
    prelude::*,
    render::render_resource::{
        Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
    },
};
use seascape_shared::assets::{skybox_face_paths, stack_cube_faces, CubeFace, CubemapError};

use crate::constants::SKYBOX_BRIGHTNESS;

#[derive(Debug, thiserror::Error)]
pub enum SkyboxError {
    #[error("skybox face {0} could not be converted to RGBA8")]
    Conversion(usize),

    #[error("skybox face {0} has no pixel data")]
    MissingData(usize),

    #[error(transparent)]
    Cubemap(#[from] CubemapError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyboxLoad {
    #[default]
    Loading,
    Attached,
    Failed,
}

/// Face handles in GPU cube layer order.
#[derive(Resource, Debug)]
pub struct SkyboxFaces {
    pub handles: [Handle<Image>; 6],
    pub state: SkyboxLoad,
}

/// Camera that receives the skybox.
#[derive(Component)]
pub struct OceanCamera;

pub fn load_skybox_faces(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handles = skybox_face_paths().map(|path| asset_server.load(path));
    commands.insert_resource(SkyboxFaces {
        handles,
        state: SkyboxLoad::Loading,
    });
}

/// Stacks six decoded faces into a cube texture.
pub fn assemble_cubemap(faces: [&Image; 6]) -> Result<Image, SkyboxError> {
    let mut converted = Vec::with_capacity(6);
    for (index, face) in faces.iter().enumerate() {
        let rgba = if face.texture_descriptor.format == TextureFormat::Rgba8UnormSrgb {
            (*face).clone()
        } else {
            face.convert(TextureFormat::Rgba8UnormSrgb)
                .ok_or(SkyboxError::Conversion(index))?
        };
        converted.push(rgba);
    }

    let mut views = Vec::with_capacity(6);
    for (index, image) in converted.iter().enumerate() {
        let data = image.data.as_deref().ok_or(SkyboxError::MissingData(index))?;
        views.push(CubeFace {
            width: image.width(),
            height: image.height(),
            data,
        });
    }
    let cube = stack_cube_faces(&views)?;

    let mut image = Image::new(
        Extent3d {
            width: cube.size,
            height: cube.size,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        cube.data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(image)
}

pub fn attach_skybox_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    faces: Option<ResMut<SkyboxFaces>>,
    cameras: Query<Entity, With<OceanCamera>>,
) {
    let Some(mut faces) = faces else {
        return;
    };
    if faces.state != SkyboxLoad::Loading {
        return;
    }

    let failed = faces
        .handles
        .iter()
        .enumerate()
        .find_map(|(index, handle)| match asset_server.load_state(handle.id()) {
            LoadState::Failed(err) => Some((index, err)),
            _ => None,
        });
    if let Some((index, err)) = failed {
        warn!("Skybox face {index} failed to load, keeping the clear colour: {err}");
        faces.state = SkyboxLoad::Failed;
        return;
    }
    if !faces.handles.iter().all(|handle| images.contains(handle.id())) {
        return;
    }

    let Ok(camera) = cameras.single() else {
        return;
    };

    let loaded: Option<Vec<&Image>> = faces.handles.iter().map(|h| images.get(h)).collect();
    let Some(Ok(loaded)) = loaded.map(<[&Image; 6]>::try_from) else {
        return;
    };

    match assemble_cubemap(loaded) {
        Ok(cubemap) => {
            let image = images.add(cubemap);
            commands.entity(camera).insert(Skybox {
                image,
                brightness: SKYBOX_BRIGHTNESS,
                rotation: Quat::IDENTITY,
            });
            faces.state = SkyboxLoad::Attached;
            info!("Skybox attached");
        }
        Err(err) => {
            warn!("Could not build the skybox: {err}");
            faces.state = SkyboxLoad::Failed;
        }
    }
}
