use ::bevy::{
    asset::RenderAssetUsages,
    render::mesh::{Indices, Mesh, PrimitiveTopology, VertexAttributeValues},
};

use crate::{anim::RailAnimation, helper::FrameAxes, strip::StripMesh};

impl From<&StripMesh<f32>> for Mesh {
    fn from(strip: &StripMesh<f32>) -> Self {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            VertexAttributeValues::Float32x3(
                strip
                    .points()
                    .iter()
                    .map(|p| [p.x, p.y, p.z])
                    .collect(),
            ),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            VertexAttributeValues::Float32x3(
                strip
                    .normals()
                    .iter()
                    .map(|n| [n.x, n.y, n.z])
                    .collect(),
            ),
        );
        if let Some(uvs) = strip.uvs() {
            mesh.insert_attribute(
                Mesh::ATTRIBUTE_UV_0,
                VertexAttributeValues::Float32x2(uvs.iter().map(|uv| [uv.x, uv.y]).collect()),
            );
        }
        mesh.insert_indices(Indices::U32(strip.index_buffer()));
        mesh
    }
}

/// Static mesh of the moving strip at its first offset
impl From<&RailAnimation<f32>> for Mesh {
    fn from(anim: &RailAnimation<f32>) -> Self {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            VertexAttributeValues::Float32x3(
                anim
                    .points()
                    .iter()
                    .map(|p| [p.x, p.y, p.z])
                    .collect(),
            ),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            VertexAttributeValues::Float32x3(
                anim
                    .normals()
                    .iter()
                    .map(|n| [n.x, n.y, n.z])
                    .collect(),
            ),
        );
        if let Some(uvs) = anim.uvs() {
            mesh.insert_attribute(
                Mesh::ATTRIBUTE_UV_0,
                VertexAttributeValues::Float32x2(uvs.iter().map(|uv| [uv.x, uv.y]).collect()),
            );
        }
        mesh
    }
}

impl From<&FrameAxes<f32>> for Mesh {
    fn from(axes: &FrameAxes<f32>) -> Self {
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            VertexAttributeValues::Float32x3(
                axes
                    .points()
                    .iter()
                    .map(|p| [p.x, p.y, p.z])
                    .collect(),
            ),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_COLOR,
            VertexAttributeValues::Float32x4(
                axes.vertex_colors()
                    .iter()
                    .map(|c| [c.r, c.g, c.b, 1.])
                    .collect(),
            ),
        );
        mesh
    }
}
