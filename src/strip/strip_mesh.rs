use nalgebra::{Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::{misc::FloatingPoint, window::DashRun};

/// Alternate geometry with the same topology as the base strip
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphTarget<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
}

impl<T: FloatingPoint> MorphTarget<T> {
    pub fn new(points: Vec<Point3<T>>, normals: Vec<Vector3<T>>) -> Self {
        Self { points, normals }
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn position_buffer(&self) -> Vec<T> {
        flatten3(self.points.iter().map(|p| &p.coords))
    }

    pub fn normal_buffer(&self) -> Vec<T> {
        flatten3(self.normals.iter())
    }
}

/// Indexed triangle mesh of a strip.
/// Every sample of an on-run contributes two vertices:
/// the +binormal handle then the -binormal handle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripMesh<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) uvs: Option<Vec<Vector2<T>>>,
    pub(crate) faces: Vec<[usize; 3]>,
    pub(crate) runs: Vec<DashRun>,
    pub(crate) morph_targets: Vec<MorphTarget<T>>,
}

impl<T: FloatingPoint> StripMesh<T> {
    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn uvs(&self) -> Option<&[Vector2<T>]> {
        self.uvs.as_deref()
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// On-runs of the rail the mesh was assembled from, in emission order
    pub fn runs(&self) -> &[DashRun] {
        &self.runs
    }

    pub fn morph_targets(&self) -> &[MorphTarget<T>] {
        &self.morph_targets
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Flat `[x, y, z, ...]` positions
    pub fn position_buffer(&self) -> Vec<T> {
        flatten3(self.points.iter().map(|p| &p.coords))
    }

    /// Flat `[x, y, z, ...]` normals
    pub fn normal_buffer(&self) -> Vec<T> {
        flatten3(self.normals.iter())
    }

    /// Flat `[u, v, ...]` texture coordinates
    pub fn uv_buffer(&self) -> Option<Vec<T>> {
        self.uvs
            .as_ref()
            .map(|uvs| uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect())
    }

    /// Flat triangle index list
    pub fn index_buffer(&self) -> Vec<u32> {
        self.faces
            .iter()
            .flat_map(|f| f.map(|i| i as u32))
            .collect()
    }

    /// Cast the strip mesh to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> StripMesh<F> {
        StripMesh {
            points: self.points.iter().map(|p| p.cast()).collect(),
            normals: self.normals.iter().map(|n| n.cast()).collect(),
            uvs: self
                .uvs
                .as_ref()
                .map(|uvs| uvs.iter().map(|uv| uv.cast()).collect()),
            faces: self.faces.clone(),
            runs: self.runs.clone(),
            morph_targets: self
                .morph_targets
                .iter()
                .map(|m| MorphTarget {
                    points: m.points.iter().map(|p| p.cast()).collect(),
                    normals: m.normals.iter().map(|n| n.cast()).collect(),
                })
                .collect(),
        }
    }
}

fn flatten3<'a, T: FloatingPoint>(vs: impl Iterator<Item = &'a Vector3<T>>) -> Vec<T> {
    vs.flat_map(|v| [v.x, v.y, v.z]).collect()
}
