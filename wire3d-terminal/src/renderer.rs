/// Terminal canvas: maps the pixel surface onto character cells
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Canvas, Color};

/// Guards Cohen-Sutherland against non-converging input (NaN, infinities)
const MAX_CLIP_ITERATIONS: u32 = 8;

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

type Point = (f32, f32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

/// Character-cell canvas for a fixed-size pixel surface.
///
/// Lines arrive in pixel coordinates, are scaled onto the cell grid, clipped
/// and stepped with Bresenham. The glyph follows the on-screen slope.
pub struct TerminalCanvas {
    cols: usize,
    rows: usize,
    pixel_width: f32,
    pixel_height: f32,
    color: Color,
    background: Color,
    cells: Vec<Option<Cell>>,
}

impl TerminalCanvas {
    pub fn new(cols: usize, rows: usize, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            cols,
            rows,
            pixel_width: pixel_width.max(1) as f32,
            pixel_height: pixel_height.max(1) as f32,
            color: Color::RED,
            background: Color::BLACK,
            cells: vec![None; cols * rows],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Rebuild the cell grid for a new terminal size
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    /// Glyph and colour drawn at a cell, if any
    pub fn cell(&self, col: usize, row: usize) -> Option<(char, Color)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col].map(|c| (c.glyph, c.color))
    }

    /// Queue the whole grid, one cursor move per row
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(to_terminal(self.background)))?;

        let mut current = None;
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(cell) => {
                        if current != Some(cell.color) {
                            writer.queue(SetForegroundColor(to_terminal(cell.color)))?;
                            current = Some(cell.color);
                        }
                        writer.queue(Print(cell.glyph))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    fn to_cells(&self, (x, y): (i32, i32)) -> Point {
        (
            x as f32 * self.cols as f32 / self.pixel_width,
            y as f32 * self.rows as f32 / self.pixel_height,
        )
    }

    fn outcode(&self, (x, y): Point) -> u8 {
        let mut code = 0;
        if x < 0.0 {
            code |= LEFT;
        } else if x > (self.cols - 1) as f32 {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= TOP;
        } else if y > (self.rows - 1) as f32 {
            code |= BOTTOM;
        }
        code
    }

    /// Cohen-Sutherland clip against the cell grid
    fn clip(&self, mut p0: Point, mut p1: Point) -> Option<(Point, Point)> {
        let x_max = (self.cols - 1) as f32;
        let y_max = (self.rows - 1) as f32;

        let mut code0 = self.outcode(p0);
        let mut code1 = self.outcode(p1);

        for _ in 0..MAX_CLIP_ITERATIONS {
            if code0 | code1 == 0 {
                return Some((p0, p1));
            }
            if code0 & code1 != 0 {
                return None;
            }

            let code_out = if code0 != 0 { code0 } else { code1 };
            let dx = p1.0 - p0.0;
            let dy = p1.1 - p0.1;

            let point = if code_out & BOTTOM != 0 {
                (p0.0 + dx * (y_max - p0.1) / dy, y_max)
            } else if code_out & TOP != 0 {
                (p0.0 - dx * p0.1 / dy, 0.0)
            } else if code_out & RIGHT != 0 {
                (x_max, p0.1 + dy * (x_max - p0.0) / dx)
            } else {
                (0.0, p0.1 - dy * p0.0 / dx)
            };

            if code_out == code0 {
                p0 = point;
                code0 = self.outcode(p0);
            } else {
                p1 = point;
                code1 = self.outcode(p1);
            }
        }

        None
    }

    fn plot(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Some(cell);
    }
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }

        let cell = Cell {
            glyph: slope_glyph(from, to),
            color: self.color,
        };

        let Some((p0, p1)) = self.clip(self.to_cells(from), self.to_cells(to)) else {
            return;
        };

        // Bresenham over the clipped cell coordinates
        let (mut x, mut y) = (p0.0.floor() as i32, p0.1.floor() as i32);
        let (x1, y1) = (p1.0.floor() as i32, p1.1.floor() as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, cell);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Pick a line glyph from the pixel-space direction (y grows downwards)
fn slope_glyph(from: (i32, i32), to: (i32, i32)) -> char {
    let dx = (i64::from(to.0) - i64::from(from.0)) as f64;
    let dy = (i64::from(to.1) - i64::from(from.1)) as f64;

    if dy.abs() * 2.0 <= dx.abs() {
        '-'
    } else if dx.abs() * 2.0 <= dy.abs() {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

fn to_terminal(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
