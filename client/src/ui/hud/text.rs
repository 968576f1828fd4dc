use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    prelude::*,
};

use crate::world::ocean::fog::OceanFog;

#[derive(Component)]
pub struct FpsText;

/// Scroll depth readout, only spawned in the ocean scene.
#[derive(Component)]
pub struct ScrollText;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut TextSpan, With<FpsText>>,
) {
    for mut span in &mut query {
        if let Some(value) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
        {
            **span = format!("{value:.2}");
        }
    }
}

pub fn scroll_text_update_system(
    fog: Option<Res<OceanFog>>,
    mut query: Query<&mut Text, With<ScrollText>>,
) {
    let Some(fog) = fog else {
        return;
    };
    if !fog.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = format_scroll(&fog);
    }
}

pub fn format_scroll(fog: &OceanFog) -> String {
    format!(
        "Scroll: {:.0}px ({:.0}% deep)",
        fog.scroll_y,
        fog.factor * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_text_follows_fog() {
        let mut app = App::new();
        app.insert_resource(OceanFog::new(false))
            .add_systems(Update, scroll_text_update_system);
        let text = app
            .world_mut()
            .spawn((ScrollText, Text::new("")))
            .id();

        app.world_mut().resource_mut::<OceanFog>().scroll_y = 500.0;
        app.world_mut().resource_mut::<OceanFog>().factor = 0.25;
        app.update();

        assert_eq!(
            app.world().get::<Text>(text).expect("text").0,
            "Scroll: 500px (25% deep)"
        );
    }
}
