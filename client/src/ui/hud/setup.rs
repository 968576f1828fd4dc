use bevy::prelude::*;
use seascape_shared::config::SeascapeConfig;

use super::{
    text::{FpsText, ScrollText},
    HudRoot,
};
use crate::{
    input::{data::SceneAction, keyboard::get_action_keys},
    scene::AppState,
    KeyMap,
};

const HUD_FONT_SIZE: f32 = 16.0;

fn key_names(action: SceneAction, key_map: &KeyMap) -> String {
    let keys = get_action_keys(action, key_map);
    if keys.is_empty() {
        return "<unbound>".to_string();
    }
    keys.iter()
        .map(|key| format!("{key:?}"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Help lines shown under the FPS counter for `scene`.
pub fn hint_lines(scene: AppState, key_map: &KeyMap) -> Vec<String> {
    let mut lines = vec![format!("Scene: {scene:?}")];
    match scene {
        AppState::Ocean => {
            lines.push("Drag: orbit   Wheel: dive".to_string());
            lines.push("W/S: raise/lower target".to_string());
        }
        AppState::Sphere => lines.push("Drag: orbit   Wheel: zoom".to_string()),
    }
    lines.push(format!(
        "{}: next scene",
        key_names(SceneAction::NextScene, key_map)
    ));
    lines.push(format!(
        "{}: inspector   {}: HUD",
        key_names(SceneAction::ToggleInspector, key_map),
        key_names(SceneAction::ToggleHud, key_map)
    ));
    lines
}

fn hud_text(value: impl Into<String>) -> impl Bundle {
    (
        Text::new(value),
        TextFont::from_font_size(HUD_FONT_SIZE),
        TextColor(Color::WHITE),
    )
}

pub fn setup_hud(
    mut commands: Commands,
    state: Res<State<AppState>>,
    config: Res<SeascapeConfig>,
    key_map: Res<KeyMap>,
) {
    let scene = *state.get();
    let visibility = if config.debug.show_hud {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    let root = commands
        .spawn((
            HudRoot,
            StateScoped(scene),
            visibility,
            BackgroundColor(Color::BLACK.with_alpha(0.5)),
            // Always drawn over the scene
            GlobalZIndex(i32::MAX),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(1.),
                top: Val::Percent(1.),
                bottom: Val::Auto,
                right: Val::Auto,
                padding: UiRect::all(Val::Px(4.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .id();

    let fps_text = commands
        .spawn(hud_text("FPS: "))
        .with_child((
            FpsText,
            TextSpan::new("N/A"),
            TextFont::from_font_size(HUD_FONT_SIZE),
            TextColor(Color::WHITE),
        ))
        .id();
    commands.entity(root).add_child(fps_text);

    if scene == AppState::Ocean {
        let scroll_text = commands
            .spawn((ScrollText, hud_text("Scroll: 0px (0% deep)")))
            .id();
        commands.entity(root).add_child(scroll_text);
    }

    for line in hint_lines(scene, &key_map) {
        let hint = commands.spawn(hud_text(line)).id();
        commands.entity(root).add_child(hint);
    }
}
