/// Camera and projection utilities
use nalgebra::{Matrix4, Point3};

use crate::config::RenderConfig;

/// Camera fixed at the origin looking down +Z
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Distance added along +Z to every rotated vertex
    pub standoff: f32,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(&RenderConfig {
            width,
            height,
            ..RenderConfig::default()
        })
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            fov: config.fov,
            aspect: config.aspect_ratio(),
            near: config.near,
            far: config.far,
            standoff: config.standoff,
            width: config.width,
            height: config.height,
        }
    }

    /// Create the perspective projection matrix, laid out for
    /// [`Transform::multiply_point`](crate::transform::Transform::multiply_point)
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let inverse_tan = 1.0 / (self.fov / 2.0).to_radians().tan();
        let depth = self.far - self.near;

        let mut m = Matrix4::zeros();
        m[(0, 0)] = self.aspect * inverse_tan;
        m[(1, 1)] = inverse_tan;
        m[(2, 2)] = self.far / depth;
        m[(2, 3)] = 1.0;
        m[(3, 2)] = -self.far * self.near / depth;
        m
    }

    /// Map normalized device coordinates onto pixels.
    ///
    /// x and y are shifted from [-1, 1] to [0, 2] and scaled by half the
    /// surface size; z passes through untouched.
    pub fn to_screen(&self, ndc: Point3<f32>) -> Point3<f32> {
        Point3::new(
            (ndc.x + 1.0) * self.width as f32 / 2.0,
            (ndc.y + 1.0) * self.height as f32 / 2.0,
            ndc.z,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}
