/// Process-wide render configuration
use std::time::Duration;

/// Fixed rendering parameters shared by the pipeline, the scene and the host
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,
    pub target_fps: u32,
    pub near: f32,
    pub far: f32,
    /// Distance pushed along +Z between the camera and every mesh
    pub standoff: f32,
    /// Degrees added to each mesh's Y angle per frame
    pub spin_per_frame: f32,
    /// Fill triangles in addition to drawing their edges
    pub fill: bool,
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Target duration of one frame, `1000 / fps` whole milliseconds
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 90.0,
            target_fps: 360,
            near: 0.1,
            far: 1000.0,
            standoff: 3.0,
            spin_per_frame: 0.1,
            fill: false,
        }
    }
}
