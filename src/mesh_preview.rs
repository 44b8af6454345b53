//! Data preparation for the 3D model preview widget.
//!
//! The widget itself (scene, lights, orbit controls) belongs to the host's
//! rendering library. This module turns Wavefront-OBJ-like text into
//! recentered, uniformly scaled geometry plus a camera placement, or a unit
//! cube placeholder when there is nothing usable to show.
//!
//! Only `v` and `f` records are read. Normals, texture coordinates, groups
//! and materials are skipped.

use crate::constants::PREVIEW_FIT_EXTENT;
use crate::error::MeshError;
use tracing::{debug, warn};

/// Camera position used for the placeholder cube
pub const PLACEHOLDER_CAMERA: [f32; 3] = [0.0, 0.0, 5.0];
/// Closest the camera is placed to a framed model
const MIN_CAMERA_DISTANCE: f32 = 2.0;

/// Triangle/polygon soup as read from the text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    /// Zero-based vertex indices, one entry per polygon
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    /// Unit cube centered on the origin.
    pub fn unit_cube() -> Self {
        let h = 0.5;
        let vertices = vec![
            [-h, -h, -h],
            [h, -h, -h],
            [h, h, -h],
            [-h, h, -h],
            [-h, -h, h],
            [h, -h, h],
            [h, h, h],
            [-h, h, h],
        ];
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![2, 3, 7, 6],
            vec![1, 2, 6, 5],
            vec![0, 4, 7, 3],
        ];
        Self { vertices, faces }
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(mut lo, mut hi), v| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(v[axis]);
                hi[axis] = hi[axis].max(v[axis]);
            }
            (lo, hi)
        }))
    }
}

/// Parse OBJ text.
///
/// Face entries may be `a`, `a/b`, `a//c` or `a/b/c`; only the vertex index
/// is kept. Indices are 1-based, negative ones count back from the most
/// recent vertex.
pub fn parse_obj(text: &str) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::default();

    for (n, raw) in text.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.trim();
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<f32> = parts
                    .take(3)
                    .map(str::parse::<f32>)
                    .collect::<Result<_, _>>()
                    .map_err(|_| MeshError::InvalidVertex { line: line_no })?;
                let &[x, y, z] = coords.as_slice() else {
                    return Err(MeshError::InvalidVertex { line: line_no });
                };
                mesh.vertices.push([x, y, z]);
            }
            Some("f") => {
                let face = parts
                    .map(|token| resolve_index(token, mesh.vertices.len(), line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if face.len() < 3 {
                    return Err(MeshError::InvalidFace { line: line_no });
                }
                mesh.faces.push(face);
            }
            _ => {}
        }
    }

    if mesh.vertices.is_empty() {
        return Err(MeshError::NoGeometry);
    }
    Ok(mesh)
}

fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<usize, MeshError> {
    let head = token.split('/').next().unwrap_or_default();
    let index: i64 = head.parse().map_err(|_| MeshError::InvalidFace { line })?;
    let count = vertex_count as i64;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => count + i,
        _ => return Err(MeshError::IndexOutOfRange { line, index }),
    };
    if (0..count).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(MeshError::IndexOutOfRange { line, index })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewSource {
    /// Nothing usable was supplied; showing the unit cube
    Placeholder,
    /// Parsed from the supplied text
    Model,
}

/// Geometry and camera ready to hand to a 3D renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshPreview {
    pub source: PreviewSource,
    pub mesh: Mesh,
    /// Bounding box center of the raw mesh
    pub center: [f32; 3],
    /// Uniform scale applied after recentering
    pub scale: f32,
    /// Width over height of the display surface
    pub aspect: f32,
    pub camera_position: [f32; 3],
}

impl MeshPreview {
    /// Build a preview for a `width`×`height` pixel surface.
    pub fn from_obj(text: Option<&str>, display_size: (u32, u32)) -> Self {
        let aspect = aspect_ratio(display_size);
        let Some(text) = text.filter(|t| t.contains("v ") || t.contains("f ")) else {
            debug!("No mesh text; showing placeholder");
            return Self::placeholder(aspect);
        };

        match parse_obj(text) {
            Ok(mesh) => Self::framed(mesh, aspect),
            Err(e) => {
                warn!(error = %e, "Mesh parse failed; showing placeholder");
                Self::placeholder(aspect)
            }
        }
    }

    fn placeholder(aspect: f32) -> Self {
        Self {
            source: PreviewSource::Placeholder,
            mesh: Mesh::unit_cube(),
            center: [0.0; 3],
            scale: 1.0,
            aspect,
            camera_position: PLACEHOLDER_CAMERA,
        }
    }

    fn framed(mesh: Mesh, aspect: f32) -> Self {
        let (lo, hi) = mesh.bounds().unwrap_or(([0.0; 3], [0.0; 3]));
        let center = [0, 1, 2].map(|a| (lo[a] + hi[a]) / 2.0);
        let max_dim = (0..3).map(|a| hi[a] - lo[a]).fold(0.0_f32, f32::max);
        let scale = if max_dim > f32::EPSILON {
            PREVIEW_FIT_EXTENT / max_dim
        } else {
            1.0
        };
        let distance = (max_dim * scale * 2.0).max(MIN_CAMERA_DISTANCE);
        debug!(
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            max_dim,
            scale,
            "Mesh framed"
        );
        Self {
            source: PreviewSource::Model,
            mesh,
            center,
            scale,
            aspect,
            camera_position: [distance; 3],
        }
    }

    /// Vertices after recentering and scaling.
    pub fn framed_vertices(&self) -> Vec<[f32; 3]> {
        self.mesh
            .vertices
            .iter()
            .map(|v| [0, 1, 2].map(|a| (v[a] - self.center[a]) * self.scale))
            .collect()
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == PreviewSource::Placeholder
    }
}

fn aspect_ratio((width, height): (u32, u32)) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
