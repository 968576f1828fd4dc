//! Scroll-driven fog colour.
//!
//! Scrolling down "dives" the ocean scene: the fog blends from the sky colour
//! at the surface to a deep blue once the page has scrolled `MAX_SCROLL`.

use bevy::math::Vec3;

use crate::{DEEP_FOG_COLOR, MAX_SCROLL, SURFACE_FOG_COLOR};

/// Vertical scroll position of the page, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    value: f32,
    /// Furthest the page can scroll
    extent: f32,
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::with_extent(MAX_SCROLL)
    }
}

impl ScrollOffset {
    pub fn with_extent(extent: f32) -> Self {
        Self {
            value: 0.0,
            extent: extent.max(0.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Scrolls by `delta` pixels, positive meaning down the page.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        if delta.is_finite() {
            self.value = (self.value + delta).clamp(0.0, self.extent);
        }
        self.value
    }
}

/// Fraction of the dive reached at `scroll_y`, in `[0, 1]`.
pub fn scroll_factor(scroll_y: f32, max_scroll: f32) -> f32 {
    if max_scroll <= 0.0 {
        return 1.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Fog colour (linear RGB components as authored) for a scroll position.
pub fn fog_color_at(scroll_y: f32, max_scroll: f32) -> Vec3 {
    let start = Vec3::from_array(SURFACE_FOG_COLOR);
    let end = Vec3::from_array(DEEP_FOG_COLOR);
    start + (end - start) * scroll_factor(scroll_y, max_scroll)
}
