/// Errors raised while ingesting mesh geometry
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ParseError {
    /// The resource could not be read
    Io(io::Error),
    /// A vertex or face line is malformed
    Geometry { line: usize, content: String },
    /// A face refers to a vertex that has not been declared yet
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "io error: {}", err),
            ParseError::Geometry { line, content } => {
                write!(f, "line {}: malformed geometry: {:?}", line, content)
            }
            ParseError::IndexOutOfRange {
                line,
                index,
                vertex_count,
            } => write!(
                f,
                "line {}: vertex index {} out of range (1..={} declared so far)",
                line, index, vertex_count
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}
