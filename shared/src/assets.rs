//! Asset paths and cubemap face assembly.
//!
//! Paths are relative to the asset root handed to the engine.

/// Prefix shared by the six skybox face images.
pub const SKYBOX_PATH_PREFIX: &str = "textures/skybox/DaylightBox";

/// Skybox face suffixes, listed as +X, +Y, +Z, -X, -Y, -Z.
pub const SKYBOX_FACE_SUFFIXES: [&str; 6] = [
    "_Left.bmp",
    "_Top.bmp",
    "_Back.bmp",
    "_Right.bmp",
    "_Bottom.bmp",
    "_Front.bmp",
];

/// Bump map scrolled across the water surface.
pub const WATER_BUMP_TEXTURE_PATH: &str = "textures/waterbump.png";

/// Index into `SKYBOX_FACE_SUFFIXES` for each GPU cube layer (+X, -X, +Y, -Y, +Z, -Z).
pub const CUBE_LAYER_SOURCE: [usize; 6] = [0, 3, 1, 4, 2, 5];

/// Bytes per pixel of the faces fed to `stack_cube_faces`.
pub const RGBA8_PIXEL_SIZE: usize = 4;

/// Full paths of the skybox faces, in GPU cube layer order.
pub fn skybox_face_paths() -> [String; 6] {
    CUBE_LAYER_SOURCE.map(|source| format!("{SKYBOX_PATH_PREFIX}{}", SKYBOX_FACE_SUFFIXES[source]))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CubemapError {
    #[error("expected 6 cubemap faces, got {0}")]
    FaceCount(usize),

    #[error("cubemap face {face} is {width}x{height}, faces must be square")]
    NotSquare { face: usize, width: u32, height: u32 },

    #[error("cubemap face {face} is {got}px wide, expected {expected}px")]
    SizeMismatch { face: usize, expected: u32, got: u32 },

    #[error("cubemap face {face} has {got} bytes, expected {expected}")]
    ByteLength {
        face: usize,
        expected: usize,
        got: usize,
    },
}

/// One decoded RGBA8 face.
#[derive(Debug, Clone, Copy)]
pub struct CubeFace<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

/// Six faces packed layer after layer, ready to upload as a cube texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedCube {
    pub size: u32,
    pub data: Vec<u8>,
}

/// Concatenates six RGBA8 faces already in GPU layer order.
pub fn stack_cube_faces(faces: &[CubeFace]) -> Result<StackedCube, CubemapError> {
    if faces.len() != 6 {
        return Err(CubemapError::FaceCount(faces.len()));
    }

    let size = faces[0].width;
    let face_bytes = size as usize * size as usize * RGBA8_PIXEL_SIZE;
    let mut data = Vec::with_capacity(face_bytes * 6);

    for (face, image) in faces.iter().enumerate() {
        if image.width != image.height {
            return Err(CubemapError::NotSquare {
                face,
                width: image.width,
                height: image.height,
            });
        }
        if image.width != size {
            return Err(CubemapError::SizeMismatch {
                face,
                expected: size,
                got: image.width,
            });
        }
        if image.data.len() != face_bytes {
            return Err(CubemapError::ByteLength {
                face,
                expected: face_bytes,
                got: image.data.len(),
            });
        }
        data.extend_from_slice(image.data);
    }

    Ok(StackedCube { size, data })
}
