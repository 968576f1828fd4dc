//! Scene lifecycle.
//!
//! Each scene is an `AppState`. Everything a scene spawns is tagged
//! `StateScoped`, so leaving the state despawns its camera, lights and meshes
//! and drops the asset handles they own. Listener systems are gated on the
//! state, so they stop with it.

pub mod ocean;
pub mod sphere;

use bevy::{prelude::*, window::WindowResized};
use seascape_shared::sets::{SceneOnEnterSet, SceneUpdateSet};

use crate::{
    input::{data::SceneAction, keyboard::is_action_just_pressed},
    KeyMap,
};

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States, clap::ValueEnum)]
pub enum AppState {
    #[default]
    Ocean,
    Sphere,
}

impl AppState {
    pub fn next(self) -> Self {
        match self {
            AppState::Ocean => AppState::Sphere,
            AppState::Sphere => AppState::Ocean,
        }
    }
}

/// Last size reported by the window, in logical pixels.
#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

pub struct ScenePlugin {
    pub initial: AppState,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_state(self.initial)
            .enable_state_scoped_entities::<AppState>()
            .init_resource::<ViewportSize>()
            .register_type::<ViewportSize>()
            .configure_sets(
                Update,
                (
                    SceneUpdateSet::Input,
                    SceneUpdateSet::Simulation,
                    SceneUpdateSet::Rendering,
                    SceneUpdateSet::Ui,
                )
                    .chain(),
            )
            .configure_sets(
                OnEnter(AppState::Ocean),
                (
                    SceneOnEnterSet::Resources,
                    SceneOnEnterSet::Entities,
                    SceneOnEnterSet::Ui,
                )
                    .chain(),
            )
            .configure_sets(
                OnEnter(AppState::Sphere),
                (
                    SceneOnEnterSet::Resources,
                    SceneOnEnterSet::Entities,
                    SceneOnEnterSet::Ui,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (track_viewport, switch_scene).in_set(SceneUpdateSet::Input),
            )
            .add_plugins((sphere::sphere_plugin, ocean::ocean_plugin));
    }
}

/// Resize listener. The renderer follows the window on its own; this keeps
/// the size visible to the rest of the app.
pub fn track_viewport(mut resized: EventReader<WindowResized>, mut viewport: ResMut<ViewportSize>) {
    if let Some(event) = resized.read().last() {
        viewport.width = event.width;
        viewport.height = event.height;
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}

pub fn switch_scene(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if is_action_just_pressed(SceneAction::NextScene, &keyboard_input, &key_map) {
        let next = state.get().next();
        info!("Switching scene: {:?} -> {:?}", state.get(), next);
        next_state.set(next);
    }
}
