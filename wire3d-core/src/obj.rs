/// Wavefront OBJ subset parser: `v` vertex and `f` face lines
use std::fs;
use std::path::Path;

use nalgebra::Point3;
use nom::{
    bytes::complete::take_till,
    character::complete::{char, i64 as index, space1},
    number::complete::float,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::ParseError;
use crate::geometry::{Mesh, Triangle};

/// Read and parse an OBJ file into a mesh with default transform state
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mesh = Mesh::new(parse_obj(&text)?);

    let centroid = mesh.centroid();
    log::info!(
        "loaded {}: {} triangles, centroid ({:.3}, {:.3}, {:.3})",
        path.display(),
        mesh.triangles.len(),
        centroid.x,
        centroid.y,
        centroid.z
    );
    Ok(mesh)
}

/// Parse OBJ text into triangles in file order.
///
/// Face indices are 1-based and may only refer to vertices declared earlier
/// in the input. Lines other than `v` and `f` are skipped.
pub fn parse_obj(input: &str) -> Result<Vec<Triangle>, ParseError> {
    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut triangles = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let text = raw.trim();
        let malformed = || ParseError::Geometry {
            line,
            content: text.to_string(),
        };

        match text.split_whitespace().next() {
            Some("v") => {
                let (rest, vertex) = parse_vertex(text).map_err(|_| malformed())?;
                if !at_token_end(rest) {
                    return Err(malformed());
                }
                vertices.push(vertex);
            }
            Some("f") => {
                let (_, indices) = parse_face(text).map_err(|_| malformed())?;
                let mut corners = [Point3::origin(); 3];
                for (corner, &i) in corners.iter_mut().zip(indices.iter()) {
                    *corner = resolve(i, &vertices).ok_or_else(|| ParseError::IndexOutOfRange {
                        line,
                        index: i,
                        vertex_count: vertices.len(),
                    })?;
                }
                triangles.push(Triangle::new(corners[0], corners[1], corners[2]));
            }
            Some(other) => log::debug!("line {}: skipping {:?} record", line, other),
            None => {}
        }
    }

    Ok(triangles)
}

fn resolve(index: i64, vertices: &[Point3<f32>]) -> Option<Point3<f32>> {
    let slot = usize::try_from(index).ok()?.checked_sub(1)?;
    vertices.get(slot).copied()
}

fn at_token_end(rest: &str) -> bool {
    rest.chars().next().map_or(true, char::is_whitespace)
}

fn parse_vertex(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, _) = char('v')(input)?;
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    Ok((input, Point3::new(x, y, z)))
}

/// One face corner: an index followed by an optional `/vt/vn` tail
fn parse_corner(input: &str) -> IResult<&str, i64> {
    terminated(
        preceded(space1, index),
        take_till(|c: char| c.is_whitespace()),
    )(input)
}

fn parse_face(input: &str) -> IResult<&str, [i64; 3]> {
    let (input, _) = char('f')(input)?;
    let (input, a) = parse_corner(input)?;
    let (input, b) = parse_corner(input)?;
    let (input, c) = parse_corner(input)?;
    Ok((input, [a, b, c]))
}
