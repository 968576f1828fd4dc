pub mod setup;
pub mod text;

use bevy::prelude::*;

use crate::{
    input::{data::SceneAction, keyboard::is_action_just_pressed},
    KeyMap,
};

/// Marker to find the container entity so we can show/hide the HUD
#[derive(Component)]
pub struct HudRoot;

/// Toggle the HUD when pressing F1
pub fn toggle_hud_system(
    mut q: Query<&mut Visibility, With<HudRoot>>,
    kbd: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
) {
    if !is_action_just_pressed(SceneAction::ToggleHud, &kbd, &key_map) {
        return;
    }
    for mut vis in &mut q {
        *vis = match *vis {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_hud_flips_visibility() {
        let mut app = App::new();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::F1);
        app.insert_resource(keyboard)
            .insert_resource(KeyMap::default())
            .add_systems(Update, toggle_hud_system);
        let root = app.world_mut().spawn((HudRoot, Visibility::Visible)).id();

        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(root).expect("visibility"),
            Visibility::Hidden
        );

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(root).expect("visibility"),
            Visibility::Hidden
        );
    }
}
