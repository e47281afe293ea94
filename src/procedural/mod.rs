//! Procedural generation of the drawn geometry.

pub use self::cube::{cube_vertices, ColoredVertex, CubeFace, CUBE_FACES, CUBE_VERTEX_COUNT};

mod cube;
