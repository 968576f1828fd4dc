//! Per-frame ocean displacement.
//!
//! The water entity carries its own `WaveDisplacer`. Each frame the
//! displacer advances by Bevy's frame delta and rewrites the height channel
//! of the mesh's position buffer in place.

use bevy::{
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology, VertexAttributeValues},
        view::NoFrustumCulling,
    },
};
use seascape_shared::{
    config::OceanConfig,
    ocean::{GroundGrid, WaveDisplacer},
};

use crate::scene::AppState;

/// Water surface animated by a `WaveDisplacer`.
#[derive(Component, Debug)]
pub struct OceanSurface {
    pub displacer: WaveDisplacer,
    pub recompute_normals: bool,
}

/// Converts a ground grid into a Bevy mesh whose buffers stay CPU-accessible.
pub fn ocean_mesh(grid: GroundGrid) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, grid.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, grid.normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, grid.uvs);
    mesh.insert_indices(Indices::U32(grid.indices));
    mesh
}

/// Builds the ocean mesh and its displacer from the same resting grid.
pub fn build_ocean_surface(config: &OceanConfig) -> (Mesh, OceanSurface) {
    let grid = GroundGrid::new(config.width, config.depth, config.subdivisions);
    let surface = OceanSurface {
        displacer: WaveDisplacer::new(&grid.positions),
        recompute_normals: config.recompute_normals,
    };
    (ocean_mesh(grid), surface)
}

/// Bundle for the water entity. Frustum culling is skipped because the
/// displaced surface leaves the flat grid's bounds.
pub fn ocean_surface_bundle(
    surface: OceanSurface,
    mesh: Handle<Mesh>,
    material: impl Bundle,
) -> impl Bundle {
    (
        Name::new("ocean"),
        surface,
        Mesh3d(mesh),
        material,
        Transform::default(),
        NoFrustumCulling,
        StateScoped(AppState::Ocean),
    )
}

pub fn displace_ocean_surface(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut surfaces: Query<(&Mesh3d, &mut OceanSurface)>,
) {
    let delta = time.delta_secs();
    for (mesh_handle, mut surface) in &mut surfaces {
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        else {
            warn_once!("Ocean mesh has no Float32x3 position buffer");
            continue;
        };
        surface.displacer.advance(delta, positions);

        if surface.recompute_normals {
            mesh.compute_normals();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use seascape_shared::ocean::ocean_height;
    use std::time::Duration;

    fn positions(app: &App, handle: &Handle<Mesh>) -> Vec<[f32; 3]> {
        let meshes = app.world().resource::<Assets<Mesh>>();
        match meshes
            .get(handle)
            .and_then(|mesh| mesh.attribute(Mesh::ATTRIBUTE_POSITION))
        {
            Some(VertexAttributeValues::Float32x3(positions)) => positions.clone(),
            _ => panic!("ocean mesh lost its positions"),
        }
    }

    fn surface_app(config: &OceanConfig) -> (App, Entity, Handle<Mesh>, Vec<[f32; 3]>) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
            .add_systems(Update, displace_ocean_surface);

        let (mesh, surface) = build_ocean_surface(config);
        let resting = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(positions)) => positions.clone(),
            _ => panic!("fresh ocean mesh has no positions"),
        };
        let handle = app.world_mut().resource_mut::<Assets<Mesh>>().add(mesh);
        let entity = app
            .world_mut()
            .spawn((surface, Mesh3d(handle.clone())))
            .id();
        (app, entity, handle, resting)
    }

    fn small_config() -> OceanConfig {
        OceanConfig {
            width: 64.0,
            depth: 64.0,
            subdivisions: 8,
            recompute_normals: false,
        }
    }

    #[test]
    fn test_frames_write_wave_heights() {
        let (mut app, entity, handle, resting) = surface_app(&small_config());
        for _ in 0..5 {
            app.update();
        }

        let time = app
            .world()
            .get::<OceanSurface>(entity)
            .expect("surface")
            .displacer
            .time();
        assert!(time > 0.0, "frames should advance the wave clock");

        let live = positions(&app, &handle);
        assert_eq!(live.len(), resting.len());
        for (now, rest) in live.iter().zip(resting.iter()) {
            assert_eq!(now[0].to_bits(), rest[0].to_bits());
            assert_eq!(now[2].to_bits(), rest[2].to_bits());
            assert!((now[1] - ocean_height(rest[0], rest[2], time)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normals_recomputed_when_enabled() {
        let config = OceanConfig {
            recompute_normals: true,
            ..small_config()
        };
        let (mut app, _, handle, _) = surface_app(&config);
        for _ in 0..3 {
            app.update();
        }

        let meshes = app.world().resource::<Assets<Mesh>>();
        let normals = match meshes
            .get(&handle)
            .and_then(|mesh| mesh.attribute(Mesh::ATTRIBUTE_NORMAL))
        {
            Some(VertexAttributeValues::Float32x3(normals)) => normals.clone(),
            _ => panic!("ocean mesh lost its normals"),
        };
        assert!(normals.iter().any(|n| (n[1] - 1.0).abs() > 1e-4));
    }

    #[test]
    fn test_mesh_matches_grid() {
        let (mesh, surface) = build_ocean_surface(&OceanConfig::default());
        assert_eq!(mesh.count_vertices(), 101 * 101);
        assert_eq!(surface.displacer.len(), 101 * 101);
        assert!(!surface.recompute_normals);
    }
}
