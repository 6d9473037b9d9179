//! Mesh generation for the Pong scene
//!
//! Two unit primitives, scaled per instance: a rectangle for paddles, the
//! center line and score digits, and a circle for the ball.

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Unit rectangle centered at the origin (1x1, scaled per instance)
pub fn create_rectangle(device: &Device) -> Mesh {
    let vertices = [
        Vertex {
            position: [-0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, 0.5, 0.0],
        },
        Vertex {
            position: [-0.5, 0.5, 0.0],
        },
    ];
    let indices: [u16; 6] = [0, 1, 2, 2, 3, 0];

    Mesh::new(device, &vertices, &indices)
}

/// Unit circle (diameter 1) as a triangle fan around the origin
pub fn create_circle(device: &Device, segments: u32) -> Mesh {
    let mut vertices = vec![Vertex {
        position: [0.0, 0.0, 0.0],
    }];
    for i in 0..=segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [0.5 * theta.cos(), 0.5 * theta.sin(), 0.0],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments as u16 {
        indices.push(0);
        indices.push(i);
        indices.push(i + 1);
    }

    Mesh::new(device, &vertices, &indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
