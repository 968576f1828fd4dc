pub mod hud;
pub mod inspector;

use bevy::prelude::*;
use seascape_shared::{
    config::SeascapeConfig,
    sets::{SceneOnEnterSet, SceneUpdateSet},
};

use crate::{
    scene::AppState,
    ui::{
        hud::{
            setup::setup_hud,
            text::{fps_text_update_system, scroll_text_update_system},
            toggle_hud_system,
        },
        inspector::{inspector_ui, toggle_inspector_system, InspectorVisible},
    },
};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // The config is inserted before the plugins are added
        let show_inspector = app
            .world()
            .get_resource::<SeascapeConfig>()
            .is_some_and(|config| config.debug.show_inspector);

        app.insert_resource(InspectorVisible(show_inspector))
            .add_systems(
                OnEnter(AppState::Ocean),
                setup_hud.in_set(SceneOnEnterSet::Ui),
            )
            .add_systems(
                OnEnter(AppState::Sphere),
                setup_hud.in_set(SceneOnEnterSet::Ui),
            )
            .add_systems(
                Update,
                (
                    fps_text_update_system,
                    scroll_text_update_system,
                    toggle_hud_system,
                    toggle_inspector_system,
                )
                    .in_set(SceneUpdateSet::Ui),
            )
            .add_systems(
                Update,
                inspector_ui
                    .after(SceneUpdateSet::Ui)
                    .run_if(resource_equals(InspectorVisible(true))),
            );
    }
}
