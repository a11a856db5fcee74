/// Per-frame orchestration over every mesh in the scene
use crate::canvas::{Canvas, Color};
use crate::config::RenderConfig;
use crate::geometry::Mesh;
use crate::pipeline::Pipeline;
use crate::projection::Camera;
use crate::raster;

/// Owns all meshes for the lifetime of the run
pub struct Scene {
    meshes: Vec<Mesh>,
    pipeline: Pipeline,
    spin_per_frame: f32,
    fill: bool,
}

impl Scene {
    pub fn new(meshes: Vec<Mesh>, config: &RenderConfig) -> Self {
        Self {
            meshes,
            pipeline: Pipeline::new(Camera::from_config(config)),
            spin_per_frame: config.spin_per_frame,
            fill: config.fill,
        }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangles.len()).sum()
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.fill = fill;
    }

    /// Clear the canvas and draw every triangle in insertion order
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear(Color::BLACK);

        for mesh in &self.meshes {
            for triangle in &mesh.triangles {
                let projected = self.pipeline.project_triangle(triangle, mesh);
                if self.fill {
                    raster::fill_triangle(&projected, canvas);
                }
                raster::draw_edges(&projected, canvas);
            }
        }
    }

    /// Spin every mesh about Y and wrap all of its angles
    pub fn advance(&mut self) {
        for mesh in &mut self.meshes {
            mesh.rotation.rotate(0.0, self.spin_per_frame, 0.0);
            mesh.rotation.wrap();
        }
    }
}
