use crate::core::geometry::{icosahedron, MeshVertex};
use crate::core::DustField;
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) material: [f32; 4], // emissive, metalness, roughness, unused
}

impl InstanceRaw {
    pub(crate) fn new(model: Mat4, color: [f32; 4], material: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            material,
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];

pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

/// Non-indexed vertex buffer plus its vertex count.
pub(crate) struct GpuMesh {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

impl GpuMesh {
    pub(crate) fn icosahedron(device: &wgpu::Device, label: &str, radius: f32, detail: u32) -> Self {
        let verts = icosahedron(radius, detail);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: verts.len() as u32,
        }
    }
}

/// Upload the dust field once; instances are never rewritten.
pub(crate) fn upload_dust(
    device: &wgpu::Device,
    field: &DustField,
    color: [f32; 4],
) -> (wgpu::Buffer, u32) {
    let raw: Vec<InstanceRaw> = field
        .particles()
        .iter()
        .map(|p| InstanceRaw::new(p.matrix(), color, [0.0; 4]))
        .collect();
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("dust_instances"),
        contents: bytemuck::cast_slice(&raw),
        usage: wgpu::BufferUsages::VERTEX,
    });
    (buffer, raw.len() as u32)
}
