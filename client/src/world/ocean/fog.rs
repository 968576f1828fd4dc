//! Scroll listener and fog colour for the ocean scene.
//!
//! The wheel scrolls a virtual page. Its offset drives the fog colour from
//! the sky blue at the surface to deep blue at `max_scroll`. The colour is
//! always tracked; the camera only carries `DistanceFog` when fog is enabled
//! in the config.

use bevy::{
    input::mouse::{AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};
use seascape_shared::{
    config::ScrollConfig,
    scroll::{fog_color_at, scroll_factor, ScrollOffset},
};

/// Page scroll state of the ocean scene.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScrollState {
    pub offset: ScrollOffset,
    pub max_scroll: f32,
    pub pixels_per_line: f32,
}

impl ScrollState {
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            offset: ScrollOffset::with_extent(config.page_extent),
            max_scroll: config.max_scroll,
            pixels_per_line: config.pixels_per_line,
        }
    }
}

/// Current fog values, exposed to the inspector.
#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct OceanFog {
    pub scroll_y: f32,
    pub factor: f32,
    pub color: Vec3,
    pub enabled: bool,
}

impl OceanFog {
    pub fn new(enabled: bool) -> Self {
        Self {
            scroll_y: 0.0,
            factor: 0.0,
            color: fog_color_at(0.0, 1.0),
            enabled,
        }
    }
}

pub fn fog_color(color: Vec3) -> Color {
    Color::srgb(color.x, color.y, color.z)
}

pub fn accumulate_scroll(scroll: Res<AccumulatedMouseScroll>, mut state: ResMut<ScrollState>) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let pixels = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y * state.pixels_per_line,
        MouseScrollUnit::Pixel => scroll.delta.y,
    };
    // Wheel up is positive, page down is positive
    state.offset.scroll_by(-pixels);
}

pub fn update_fog_color(
    state: Res<ScrollState>,
    mut fog: ResMut<OceanFog>,
    mut distance_fogs: Query<&mut DistanceFog>,
) {
    if !state.is_changed() {
        return;
    }
    let scroll_y = state.offset.value();
    fog.scroll_y = scroll_y;
    fog.factor = scroll_factor(scroll_y, state.max_scroll);
    fog.color = fog_color_at(scroll_y, state.max_scroll);

    for mut distance_fog in &mut distance_fogs {
        distance_fog.color = fog_color(fog.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fog_app() -> App {
        let mut app = App::new();
        app.insert_resource(ScrollState::from_config(&ScrollConfig::default()))
            .insert_resource(OceanFog::new(true))
            .insert_resource(AccumulatedMouseScroll::default())
            .add_systems(Update, (accumulate_scroll, update_fog_color).chain());
        app
    }

    fn wheel(app: &mut App, unit: MouseScrollUnit, y: f32) {
        *app.world_mut().resource_mut::<AccumulatedMouseScroll>() = AccumulatedMouseScroll {
            unit,
            delta: Vec2::new(0.0, y),
        };
        app.update();
    }

    #[test]
    fn test_scrolling_down_deepens_fog() {
        let mut app = fog_app();
        let fog_entity = app.world_mut().spawn(DistanceFog::default()).id();

        wheel(&mut app, MouseScrollUnit::Line, -10.0);

        let fog = app.world().resource::<OceanFog>();
        assert_eq!(fog.scroll_y, 1000.0);
        assert_eq!(fog.factor, 0.5);
        assert!((fog.color - Vec3::new(0.25, 0.5, 0.75)).length() < 1e-6);

        let distance_fog = app.world().get::<DistanceFog>(fog_entity).expect("fog");
        assert_eq!(distance_fog.color, Color::srgb(0.25, 0.5, 0.75));
    }

    #[test]
    fn test_scroll_clamped_at_page_ends() {
        let mut app = fog_app();
        wheel(&mut app, MouseScrollUnit::Pixel, 500.0);
        assert_eq!(app.world().resource::<OceanFog>().scroll_y, 0.0);

        wheel(&mut app, MouseScrollUnit::Pixel, -9000.0);
        let fog = app.world().resource::<OceanFog>();
        assert_eq!(fog.scroll_y, 2000.0);
        assert!((fog.color - Vec3::new(0.0, 0.2, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_fog_starts_at_sky_color() {
        let fog = OceanFog::new(false);
        assert_eq!(fog.color, Vec3::new(0.5, 0.8, 1.0));
        assert!(!fog.enabled);
    }
}
