//! egui window showing the live scene resources.

use bevy::{prelude::*, window::PrimaryWindow};
use bevy_inspector_egui::{bevy_egui::EguiContext, bevy_inspector::ui_for_resource};

use crate::{
    input::{data::SceneAction, keyboard::is_action_just_pressed},
    scene::ViewportSize,
    world::ocean::fog::OceanFog,
    KeyMap,
};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InspectorVisible(pub bool);

pub fn toggle_inspector_system(
    kbd: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    mut visible: ResMut<InspectorVisible>,
) {
    if is_action_just_pressed(SceneAction::ToggleInspector, &kbd, &key_map) {
        visible.0 = !visible.0;
        debug!("Inspector visible: {}", visible.0);
    }
}

pub fn inspector_ui(world: &mut World) {
    let Ok(egui_context) = world
        .query_filtered::<&mut EguiContext, With<PrimaryWindow>>()
        .single(world)
    else {
        return;
    };
    let mut egui_context = egui_context.clone();

    egui::Window::new("Inspector")
        .default_width(280.0)
        .show(egui_context.get_mut(), |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Viewport");
                ui_for_resource::<ViewportSize>(world, ui);

                // Only present while the ocean scene is active
                if world.contains_resource::<OceanFog>() {
                    ui.separator();
                    ui.heading("Fog");
                    ui_for_resource::<OceanFog>(world, ui);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f3_toggles_inspector() {
        let mut app = App::new();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::F3);
        app.insert_resource(keyboard)
            .insert_resource(KeyMap::default())
            .init_resource::<InspectorVisible>()
            .add_systems(Update, toggle_inspector_system);

        app.update();
        assert_eq!(*app.world().resource::<InspectorVisible>(), InspectorVisible(true));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert_eq!(*app.world().resource::<InspectorVisible>(), InspectorVisible(true));
    }
}
