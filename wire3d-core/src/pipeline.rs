/// Model space to screen space transform pipeline
use nalgebra::{Matrix4, Point3, Vector3};

use crate::geometry::{Mesh, Triangle};
use crate::projection::Camera;
use crate::transform::Transform;

/// Projects mesh triangles onto the screen.
///
/// The projection matrix is built once from the camera and never changes;
/// the rotation matrix is rebuilt from the mesh's angles on every call.
#[derive(Debug, Clone)]
pub struct Pipeline {
    camera: Camera,
    projection: Matrix4<f32>,
}

impl Pipeline {
    pub fn new(camera: Camera) -> Self {
        let projection = camera.projection_matrix();
        log::debug!(
            "projection: fov={} aspect={:.4} near={} far={}",
            camera.fov,
            camera.aspect,
            camera.near,
            camera.far
        );
        Self { camera, projection }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Rotate, push away from the camera and translate a model-space triangle
    pub fn to_camera_space(&self, triangle: &Triangle, mesh: &Mesh) -> Triangle {
        let rotation = Transform::rotation_matrix(&mesh.rotation);
        let standoff = Vector3::new(0.0, 0.0, self.camera.standoff);

        Triangle {
            vertices: triangle
                .vertices
                .map(|p| Transform::normal_multiply(&rotation, &p) + standoff + mesh.offset),
        }
    }

    /// Project a single camera-space point to pixel coordinates.
    ///
    /// Points behind the camera are projected anyway; nothing is clipped.
    pub fn project_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let ndc = Transform::multiply_point(&self.projection, point);
        self.camera.to_screen(ndc)
    }

    /// Run the whole pipeline for one triangle of `mesh`
    pub fn project_triangle(&self, triangle: &Triangle, mesh: &Mesh) -> Triangle {
        let camera_space = self.to_camera_space(triangle, mesh);
        Triangle {
            vertices: camera_space.vertices.map(|p| self.project_point(&p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RotationState;

    fn pipeline() -> Pipeline {
        Pipeline::new(Camera::default())
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let mesh = Mesh::default();
        let triangle = Triangle::new(Point3::origin(), Point3::origin(), Point3::origin());
        let projected = pipeline().project_triangle(&triangle, &mesh);

        for v in &projected.vertices {
            assert!((v.x - 320.0).abs() < 0.5);
            assert!((v.y - 240.0).abs() < 0.5);
        }
    }

    #[test]
    fn test_camera_space_adds_standoff_and_offset() {
        let mesh = Mesh::default().with_offset(Vector3::new(0.0, 1.2, 2.0));
        let triangle = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let moved = pipeline().to_camera_space(&triangle, &mesh);

        assert!((moved.vertices[0] - Point3::new(1.0, 1.2, 5.0)).norm() < 1e-6);
        assert!((moved.vertices[1] - Point3::new(0.0, 2.2, 5.0)).norm() < 1e-6);
        assert!((moved.vertices[2] - Point3::new(0.0, 1.2, 6.0)).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_applies_before_standoff() {
        let mesh = Mesh::default().with_rotation(RotationState::new(0.0, 90.0, 0.0));
        let triangle = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::origin(),
            Point3::origin(),
        );
        let moved = pipeline().to_camera_space(&triangle, &mesh);
        assert!((moved.vertices[0] - Point3::new(0.0, 0.0, 4.0)).norm() < 1e-5);
    }

    #[test]
    fn test_off_axis_point() {
        // At depth 3 with a 90 degree fov, x = 3 / aspect lands on the right edge
        let p = Point3::new(3.0 * 0.75, 3.0, 3.0);
        let screen = pipeline().project_point(&p);
        assert!((screen.x - 640.0).abs() < 1e-3);
        assert!((screen.y - 480.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_on_camera_plane_collapses() {
        // w == 0: the degenerate origin is then mapped to the screen center
        let screen = pipeline().project_point(&Point3::new(5.0, 5.0, 0.0));
        assert_eq!((screen.x, screen.y), (320.0, 240.0));
    }
}
