//! Ocean scene rendering: the displaced water surface, its material, the
//! skybox and the scroll-driven fog.

pub mod fog;
pub mod skybox;
pub mod surface;
pub mod water_material;
