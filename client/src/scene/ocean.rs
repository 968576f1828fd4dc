//! Ocean scene: skybox, sun, translucent water and scroll-driven fog.

use bevy::{pbr::FogFalloff, prelude::*};
use seascape_shared::{
    config::SeascapeConfig,
    orbit::OrbitRig,
    sets::{SceneOnEnterSet, SceneUpdateSet},
    OCEAN_CAMERA_ALPHA, OCEAN_CAMERA_BETA, OCEAN_CAMERA_RADIUS, SKY_CLEAR_COLOR, SUN_DIRECTION,
};

use crate::{
    camera::{OrbitCamera, TargetKeys},
    constants::{AMBIENT_BRIGHTNESS, HEMISPHERIC_ILLUMINANCE, SUN_ILLUMINANCE},
    scene::{
        sphere::{hemispheric_light, restore_default_lighting},
        AppState,
    },
    world::ocean::{
        fog::{accumulate_scroll, fog_color, update_fog_color, OceanFog, ScrollState},
        skybox::{attach_skybox_when_loaded, load_skybox_faces, OceanCamera, SkyboxFaces},
        surface::{build_ocean_surface, displace_ocean_surface, ocean_surface_bundle},
        water_material::{create_ocean_water_material, load_bump_texture, OceanWaterMaterial},
    },
};

pub fn ocean_plugin(app: &mut App) {
    app.add_systems(
        OnEnter(AppState::Ocean),
        (
            (insert_ocean_resources, load_skybox_faces).in_set(SceneOnEnterSet::Resources),
            spawn_ocean_scene.in_set(SceneOnEnterSet::Entities),
        ),
    )
    .add_systems(
        OnExit(AppState::Ocean),
        (remove_ocean_resources, restore_default_lighting),
    )
    .add_systems(
        Update,
        (
            accumulate_scroll.in_set(SceneUpdateSet::Input),
            displace_ocean_surface.in_set(SceneUpdateSet::Simulation),
            (update_fog_color, attach_skybox_when_loaded).in_set(SceneUpdateSet::Rendering),
        )
            .run_if(in_state(AppState::Ocean)),
    );
}

pub fn insert_ocean_resources(mut commands: Commands, config: Res<SeascapeConfig>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.insert_resource(ScrollState::from_config(&config.scroll));
    commands.insert_resource(OceanFog::new(config.fog.enabled));
}

pub fn remove_ocean_resources(mut commands: Commands) {
    commands.remove_resource::<ScrollState>();
    commands.remove_resource::<OceanFog>();
    commands.remove_resource::<SkyboxFaces>();
}

pub fn ocean_camera() -> impl Bundle {
    let [r, g, b, a] = SKY_CLEAR_COLOR;
    let orbit = OrbitCamera {
        rig: OrbitRig::new(
            OCEAN_CAMERA_ALPHA,
            OCEAN_CAMERA_BETA,
            OCEAN_CAMERA_RADIUS,
            Vec3::ZERO,
        ),
        // The wheel scrolls the page here
        zoom_enabled: false,
    };
    (
        Name::new("ocean camera"),
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgba(r, g, b, a)),
            ..default()
        },
        orbit.transform(),
        orbit,
        TargetKeys,
        OceanCamera,
        StateScoped(AppState::Ocean),
    )
}

/// Exponential fog for the ocean camera, or `None` when fog is disabled.
pub fn ocean_distance_fog(config: &SeascapeConfig, fog: &OceanFog) -> Option<DistanceFog> {
    config.fog.enabled.then(|| DistanceFog {
        color: fog_color(fog.color),
        falloff: FogFalloff::Exponential {
            density: config.fog.density,
        },
        ..default()
    })
}

pub fn spawn_ocean_scene(
    mut commands: Commands,
    config: Res<SeascapeConfig>,
    fog: Res<OceanFog>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut water_materials: ResMut<Assets<OceanWaterMaterial>>,
) {
    let mut camera = commands.spawn(ocean_camera());
    if let Some(distance_fog) = ocean_distance_fog(&config, &fog) {
        camera.insert(distance_fog);
    }

    commands.spawn((
        hemispheric_light(Vec3::Y, HEMISPHERIC_ILLUMINANCE),
        StateScoped(AppState::Ocean),
    ));

    let sun_direction = Vec3::from_array(SUN_DIRECTION);
    commands.spawn((
        Name::new("sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(sun_direction, Vec3::Y),
        StateScoped(AppState::Ocean),
    ));

    let (mesh, surface) = build_ocean_surface(&config.ocean);
    let material = create_ocean_water_material(Some(load_bump_texture(&asset_server)));
    commands.spawn(ocean_surface_bundle(
        surface,
        meshes.add(mesh),
        MeshMaterial3d(water_materials.add(material)),
    ));

    info!(
        "Ocean scene ready: {}x{} grid with {} subdivisions",
        config.ocean.width, config.ocean.depth, config.ocean.subdivisions
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scene::tests::state_app, world::ocean::skybox::SkyboxLoad};

    #[test]
    fn test_ocean_resources_follow_state() {
        let mut app = state_app(AppState::Ocean);
        app.insert_resource(SeascapeConfig::default())
            .insert_resource(SkyboxFaces {
                handles: Default::default(),
                state: SkyboxLoad::Loading,
            })
            .add_systems(OnEnter(AppState::Ocean), insert_ocean_resources)
            .add_systems(
                OnExit(AppState::Ocean),
                (remove_ocean_resources, restore_default_lighting),
            );
        app.update();

        assert!(app.world().contains_resource::<ScrollState>());
        assert!(!app.world().resource::<OceanFog>().enabled);
        assert_eq!(
            app.world().resource::<AmbientLight>().brightness,
            AMBIENT_BRIGHTNESS
        );

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Sphere);
        app.update();

        assert!(!app.world().contains_resource::<ScrollState>());
        assert!(!app.world().contains_resource::<OceanFog>());
        assert!(!app.world().contains_resource::<SkyboxFaces>());
        assert_eq!(
            app.world().resource::<AmbientLight>().brightness,
            AmbientLight::default().brightness
        );
    }

    #[test]
    fn test_distance_fog_only_when_enabled() {
        let mut config = SeascapeConfig::default();
        let fog = OceanFog::new(false);
        assert!(ocean_distance_fog(&config, &fog).is_none());

        config.fog.enabled = true;
        let distance_fog = ocean_distance_fog(&config, &fog).expect("fog enabled");
        assert_eq!(distance_fog.color, Color::srgb(0.5, 0.8, 1.0));
        assert!(matches!(
            distance_fog.falloff,
            FogFalloff::Exponential { density } if density == 0.01
        ));
    }

    #[test]
    fn test_ocean_camera_does_not_zoom() {
        let mut world = World::new();
        let camera = world.spawn(ocean_camera()).id();
        let orbit = world.get::<OrbitCamera>(camera).expect("orbit camera");
        assert!(!orbit.zoom_enabled);
        assert_eq!(orbit.rig.radius, OCEAN_CAMERA_RADIUS);
        assert!(world.get::<TargetKeys>(camera).is_some());
    }
}
