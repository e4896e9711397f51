//! Indexed triangle mesh and its Wavefront OBJ-subset loader.
//!
//! The loader is strict: every line must be blank, a comment, or one of the
//! recognized statements. Anything else fails the whole load and no partial
//! mesh is returned.
//!
//! | Statement | Handling |
//! |-----------|----------|
//! | `# ...`   | comment, skipped |
//! | `v x y z` | vertex |
//! | `f a b c` | triangular face, each token `idx[/vt[/vn]]` |
//! | `vt`, `vn`| recognized, ignored |
//! | `g`, `s`  | group / smoothing group, ignored |
//!
//! Face indices are 1-based in the text. They are converted to 0-based
//! exactly once, in [`Mesh::from_obj_str`]; every [`Face`] downstream holds
//! 0-based indices that are known to be in range.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::math::vec3::Vec3;

/// Coordinate axis named in a vertex parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// What was wrong with a malformed line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("vertex needs 3 coordinates, found {found} in {text:?}")]
    VertexTokenCount { found: usize, text: String },

    #[error("invalid vertex {axis} coordinate {token:?}")]
    Coordinate { axis: Axis, token: String },

    #[error("face must be a triangle, found {found} vertex references in {text:?}")]
    FaceTokenCount { found: usize, text: String },

    #[error("invalid face vertex index {token:?}")]
    FaceIndex { token: String },

    #[error("unrecognized line {text:?}")]
    Unrecognized { text: String },
}

/// Errors that can occur while loading a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mesh: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed. `line` is 1-based.
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    /// A face references a vertex outside `1..=vertex_count`.
    ///
    /// `index` is the 1-based value as written. `line` is 0 for meshes built
    /// with [`Mesh::new`].
    #[error("line {line}: face references vertex {index} but the mesh has {vertex_count} vertices")]
    Index {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A triangle referencing three vertices by 0-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    /// Creates a face from 0-based vertex indices.
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// An immutable indexed triangle mesh.
///
/// Every face index is a valid index into `vertices`; both constructors
/// enforce this before returning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh from 0-based faces, rejecting dangling references.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> LoadResult<Self> {
        let vertex_count = vertices.len();
        for face in &faces {
            if let Some(&bad) = face.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::Index {
                    line: 0,
                    index: bad as i64 + 1,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Reads and parses an OBJ file.
    pub fn from_obj_file<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let mesh = Self::from_obj_str(&text)?;
        info!(
            path = %path.as_ref().display(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "Loaded mesh"
        );
        Ok(mesh)
    }

    /// Parses OBJ text into a mesh.
    pub fn from_obj_str(text: &str) -> LoadResult<Self> {
        let mut vertices = Vec::new();
        // (line number, 1-based indices as written)
        let mut raw_faces: Vec<(usize, [i64; 3])> = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parse_err = |kind| LoadError::Parse {
                line: line_no,
                kind,
            };

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens[0] {
                "vt" | "vn" | "g" | "s" => {}
                "v" => vertices.push(parse_vertex(line, &tokens).map_err(parse_err)?),
                "f" => raw_faces.push((line_no, parse_face(line, &tokens).map_err(parse_err)?)),
                _ => {
                    return Err(parse_err(ParseErrorKind::Unrecognized {
                        text: line.to_string(),
                    }))
                }
            }
        }

        let vertex_count = vertices.len();
        let faces = raw_faces
            .into_iter()
            .map(|(line, refs)| -> LoadResult<Face> {
                let mut zero_based = [0usize; 3];
                for (slot, &index) in zero_based.iter_mut().zip(refs.iter()) {
                    *slot = to_zero_based(index, vertex_count).ok_or(LoadError::Index {
                        line,
                        index,
                        vertex_count,
                    })?;
                }
                Ok(Face::new(zero_based[0], zero_based[1], zero_based[2]))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The three model-space vertices of a face belonging to this mesh.
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        [
            self.vertices[face.a],
            self.vertices[face.b],
            self.vertices[face.c],
        ]
    }
}

/// The single 1-based to 0-based conversion point.
fn to_zero_based(one_based: i64, vertex_count: usize) -> Option<usize> {
    if one_based < 1 {
        return None;
    }
    let index = usize::try_from(one_based - 1).ok()?;
    (index < vertex_count).then_some(index)
}

fn parse_vertex(line: &str, tokens: &[&str]) -> Result<Vec3, ParseErrorKind> {
    if tokens.len() != 4 {
        return Err(ParseErrorKind::VertexTokenCount {
            found: tokens.len() - 1,
            text: line.to_string(),
        });
    }

    let coord = |axis: Axis, token: &str| {
        token
            .parse::<f64>()
            .map_err(|_| ParseErrorKind::Coordinate {
                axis,
                token: token.to_string(),
            })
    };

    Ok(Vec3::new(
        coord(Axis::X, tokens[1])?,
        coord(Axis::Y, tokens[2])?,
        coord(Axis::Z, tokens[3])?,
    ))
}

fn parse_face(line: &str, tokens: &[&str]) -> Result<[i64; 3], ParseErrorKind> {
    if tokens.len() != 4 {
        return Err(ParseErrorKind::FaceTokenCount {
            found: tokens.len() - 1,
            text: line.to_string(),
        });
    }

    // Only the vertex sub-field of `v/vt/vn` is used for now.
    let index = |token: &str| {
        let vertex_part = token.split('/').next().unwrap_or(token);
        vertex_part
            .parse::<i64>()
            .map_err(|_| ParseErrorKind::FaceIndex {
                token: token.to_string(),
            })
    };

    Ok([index(tokens[1])?, index(tokens[2])?, index(tokens[3])?])
}
