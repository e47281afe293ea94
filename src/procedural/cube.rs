use crate::color::{Color, BLUE, CYAN, LIME, MAGENTA, RED, YELLOW};
use bytemuck::{Pod, Zeroable};
use glamx::Vec3;

/// A vertex of the flat-colored cube.
/// Layout must match flat_color.wgsl VertexInput struct.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position in object space.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl ColoredVertex {
    /// The vertex buffer layout of a `ColoredVertex` array.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColoredVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// One face of the cube: a quad with a single color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeFace {
    /// Human-readable face name.
    pub name: &'static str,
    /// The flat color of the whole face.
    pub color: Color,
    /// The quad corners, in drawing order.
    pub corners: [Vec3; 4],
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// The six faces of the cube, in drawing order.
///
/// The bottom face lists the same two corners twice and is degenerate. It is kept
/// that way on purpose so the drawn geometry stays identical to the historical demo.
pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        name: "front",
        color: RED,
        corners: [v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0)],
    },
    CubeFace {
        name: "back",
        color: LIME,
        corners: [v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, -1.0, -1.0)],
    },
    CubeFace {
        name: "top",
        color: BLUE,
        corners: [v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, -1.0)],
    },
    CubeFace {
        name: "bottom",
        color: YELLOW,
        corners: [v(-1.0, -1.0, -1.0), v(1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0)],
    },
    CubeFace {
        name: "right",
        color: MAGENTA,
        corners: [v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, -1.0, 1.0)],
    },
    CubeFace {
        name: "left",
        color: CYAN,
        corners: [v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0)],
    },
];

/// Number of vertices produced by [`cube_vertices`].
pub const CUBE_VERTEX_COUNT: usize = CUBE_FACES.len() * 6;

/// Expands the cube faces into a triangle list.
///
/// Each quad `(a, b, c, d)` becomes the triangles `(a, b, c)` and `(a, c, d)`, and every
/// vertex carries the color of its face.
pub fn cube_vertices() -> Vec<ColoredVertex> {
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);

    for face in CUBE_FACES.iter() {
        let color = [face.color.r, face.color.g, face.color.b];
        let [a, b, c, d] = face.corners;

        for corner in [a, b, c, a, c, d] {
            vertices.push(ColoredVertex {
                position: corner.into(),
                color,
            });
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_area(tri: &[ColoredVertex]) -> f32 {
        let a = Vec3::from(tri[0].position);
        let b = Vec3::from(tri[1].position);
        let c = Vec3::from(tri[2].position);
        (b - a).cross(c - a).length() / 2.0
    }

    #[test]
    fn cube_has_two_triangles_per_face() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), CUBE_VERTEX_COUNT);
        assert_eq!(vertices.len(), 36);
    }

    #[test]
    fn vertices_stay_in_the_unit_cube() {
        for vertex in cube_vertices() {
            for coord in vertex.position {
                assert!(coord == -1.0 || coord == 1.0);
            }
        }
    }

    #[test]
    fn every_face_has_one_flat_color() {
        let vertices = cube_vertices();

        for (face, chunk) in CUBE_FACES.iter().zip(vertices.chunks(6)) {
            let expected = [face.color.r, face.color.g, face.color.b];
            assert!(chunk.iter().all(|v| v.color == expected), "{}", face.name);
        }

        let colors: Vec<_> = CUBE_FACES.iter().map(|f| f.color).collect();
        assert_eq!(colors, vec![RED, LIME, BLUE, YELLOW, MAGENTA, CYAN]);
    }

    #[test]
    fn bottom_face_is_degenerate() {
        let vertices = cube_vertices();
        let bottom = &vertices[18..24];

        assert_eq!(CUBE_FACES[3].name, "bottom");
        assert_eq!(triangle_area(&bottom[0..3]), 0.0);
        assert_eq!(triangle_area(&bottom[3..6]), 0.0);
    }

    #[test]
    fn other_faces_are_full_squares() {
        let vertices = cube_vertices();

        for (i, chunk) in vertices.chunks(6).enumerate() {
            if CUBE_FACES[i].name == "bottom" {
                continue;
            }

            let area = triangle_area(&chunk[0..3]) + triangle_area(&chunk[3..6]);
            assert!((area - 4.0).abs() < 1.0e-6, "{}", CUBE_FACES[i].name);
        }
    }
}
