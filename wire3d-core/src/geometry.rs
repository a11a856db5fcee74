/// Geometry primitives: triangles and meshes with per-mesh transform state
use nalgebra::{Point3, Vector3};

use crate::transform::RotationState;

/// A triangle defined by three ordered points
///
/// The same type carries model-space, camera-space and screen-space
/// triangles; only the pipeline stage that produced it tells them apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Convenience constructor for screen-space triangles (z = 0)
    pub fn flat(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Self {
        Self::new(
            Point3::new(a.0, a.1, 0.0),
            Point3::new(b.0, b.1, 0.0),
            Point3::new(c.0, c.1, 0.0),
        )
    }
}

/// A mesh: immutable geometry plus the transform state that animates it
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
    pub rotation: RotationState,
    pub offset: Vector3<f32>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            rotation: RotationState::zero(),
            offset: Vector3::zeros(),
        }
    }

    /// Set the initial rotation angles (degrees)
    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the translation applied after rotation and camera standoff
    pub fn with_offset(mut self, offset: Vector3<f32>) -> Self {
        self.offset = offset;
        self
    }

    /// Average of every triangle vertex, or the origin for an empty mesh
    pub fn centroid(&self) -> Point3<f32> {
        if self.triangles.is_empty() {
            return Point3::origin();
        }

        let sum = self
            .triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);

        Point3::from(sum / (self.triangles.len() * 3) as f32)
    }

    /// Axis-aligned cube centred on the origin, two triangles per face
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let corners = [
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];

        // Corner indices per triangle, grouped by face
        const FACES: [[usize; 3]; 12] = [
            // Front
            [4, 5, 6],
            [4, 6, 7],
            // Back
            [0, 3, 2],
            [0, 2, 1],
            // Top
            [3, 7, 6],
            [3, 6, 2],
            // Bottom
            [0, 1, 5],
            [0, 5, 4],
            // Right
            [1, 2, 6],
            [1, 6, 5],
            // Left
            [0, 4, 7],
            [0, 7, 3],
        ];

        let triangles = FACES
            .iter()
            .map(|&[a, b, c]| Triangle::new(corners[a], corners[b], corners[c]))
            .collect();

        Self::new(triangles)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
