//! Flat ground grid used as the resting ocean surface.
//!
//! ## Layout
//! Vertices are emitted row-major, `subdivisions + 1` per row. Columns run
//! along +X from `-width / 2`, rows run along -Z from `+depth / 2`. All heights
//! start at zero.

use bevy::math::Vec3;

use crate::MAX_OCEAN_SUBDIVISIONS;

#[derive(Debug, Default, Clone)]
pub struct GroundGrid {
    pub positions: Vec<[f32; 3]>,
    /// All pointing up; the ocean never recomputes them unless asked to
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, counter-clockwise seen from +Y
    pub indices: Vec<u32>,
}

impl GroundGrid {
    /// Builds a `width` x `depth` grid split into `subdivisions` cells per side.
    ///
    /// `subdivisions` is clamped to `1..=MAX_OCEAN_SUBDIVISIONS`.
    pub fn new(width: f32, depth: f32, subdivisions: u32) -> Self {
        let cells = Self::clamp_subdivisions(subdivisions);
        if cells != subdivisions {
            log::warn!(
                "Ocean subdivisions {} out of range, using {}",
                subdivisions,
                cells
            );
        }
        let side = cells + 1;
        let vertex_count = Self::vertex_count(cells);

        let mut grid = Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity((cells * cells * 6) as usize),
        };

        let cells_f = cells as f32;
        for row in 0..=cells {
            for col in 0..=cells {
                let x = col as f32 * width / cells_f - width / 2.0;
                let z = (cells - row) as f32 * depth / cells_f - depth / 2.0;
                grid.positions.push([x, 0.0, z]);
                grid.normals.push([0.0, 1.0, 0.0]);
                grid.uvs.push([col as f32 / cells_f, 1.0 - row as f32 / cells_f]);
            }
        }

        for row in 0..cells {
            for col in 0..cells {
                let top_left = row * side + col;
                let top_right = top_left + 1;
                let bottom_left = top_left + side;
                let bottom_right = bottom_left + 1;

                grid.indices
                    .extend_from_slice(&[top_left, top_right, bottom_right]);
                grid.indices
                    .extend_from_slice(&[top_left, bottom_right, bottom_left]);
            }
        }

        grid
    }

    /// Number of vertices produced for `subdivisions` cells per side.
    pub fn vertex_count(subdivisions: u32) -> usize {
        let side = Self::clamp_subdivisions(subdivisions) as usize + 1;
        side * side
    }

    pub fn clamp_subdivisions(subdivisions: u32) -> u32 {
        subdivisions.clamp(1, MAX_OCEAN_SUBDIVISIONS)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Geometric normal of triangle `index`, from its current positions.
    pub fn face_normal(&self, index: usize) -> Vec3 {
        let corner = |i: usize| Vec3::from_array(self.positions[self.indices[index * 3 + i] as usize]);
        let (a, b, c) = (corner(0), corner(1), corner(2));
        (b - a).cross(c - a).normalize_or_zero()
    }
}
