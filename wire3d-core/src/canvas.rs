/// The drawing capability the renderer needs from a presentation host

/// An RGBA draw colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Wireframe edges
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Filled spans
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A surface that accepts straight segments between integer pixel positions
pub trait Canvas {
    /// Fill the whole surface with a colour
    fn clear(&mut self, color: Color);

    /// Colour used by subsequent [`Canvas::draw_line`] calls
    fn set_color(&mut self, color: Color);

    /// Draw a segment including both end points
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32));
}
