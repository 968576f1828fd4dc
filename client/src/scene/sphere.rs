use bevy::prelude::*;
use seascape_shared::{
    orbit::OrbitRig,
    sets::SceneOnEnterSet,
    SPHERE_CAMERA_ALPHA, SPHERE_CAMERA_BETA, SPHERE_CAMERA_RADIUS, SPHERE_DIAMETER,
};

use crate::{
    camera::OrbitCamera,
    constants::{AMBIENT_BRIGHTNESS, HEMISPHERIC_ILLUMINANCE},
    scene::AppState,
};

#[derive(Component)]
pub struct SphereMesh;

pub fn sphere_plugin(app: &mut App) {
    app.add_systems(
        OnEnter(AppState::Sphere),
        (
            insert_sphere_lighting.in_set(SceneOnEnterSet::Resources),
            spawn_sphere_scene.in_set(SceneOnEnterSet::Entities),
        ),
    )
    .add_systems(OnExit(AppState::Sphere), restore_default_lighting);
}

/// Hemispheric light pointing up: ambient fill plus a light shining straight down.
pub fn hemispheric_light(direction: Vec3, illuminance: f32) -> impl Bundle {
    (
        Name::new("hemispheric light"),
        DirectionalLight {
            illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(-direction, Vec3::Z),
    )
}

pub fn insert_sphere_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

pub fn restore_default_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight::default());
}

pub fn spawn_sphere_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let orbit = OrbitCamera {
        rig: OrbitRig::new(
            SPHERE_CAMERA_ALPHA,
            SPHERE_CAMERA_BETA,
            SPHERE_CAMERA_RADIUS,
            Vec3::ZERO,
        ),
        zoom_enabled: true,
    };
    commands.spawn((
        Name::new("sphere camera"),
        Camera3d::default(),
        orbit.transform(),
        orbit,
        StateScoped(AppState::Sphere),
    ));

    commands.spawn((hemispheric_light(Vec3::Y, HEMISPHERIC_ILLUMINANCE), StateScoped(AppState::Sphere)));

    commands.spawn((
        Name::new("sphere"),
        SphereMesh,
        Mesh3d(meshes.add(Sphere::new(SPHERE_DIAMETER / 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial::default())),
        Transform::default(),
        StateScoped(AppState::Sphere),
    ));

    info!("Sphere scene ready");
}
