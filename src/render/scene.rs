use super::mesh::{self, Vertex};
use super::targets::{RenderTargets, DEPTH_FORMAT, HDR_FORMAT};
use crate::constants::*;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) fog_range: [f32; 4],
    pub(crate) light_pos: [[f32; 4]; 3],
    pub(crate) light_color: [[f32; 4]; 3],
}

impl SceneUniforms {
    pub(crate) fn new(view_proj: Mat4, model: Mat4, eye: Vec3, time: f32) -> Self {
        let light = |p: Vec3, range: f32| [p.x, p.y, p.z, range];
        let color = |c: [f32; 3], intensity: f32| [c[0], c[1], c[2], intensity];
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, time],
            fog_color: [BACKGROUND_RGB[0], BACKGROUND_RGB[1], BACKGROUND_RGB[2], 1.0],
            fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
            light_pos: [
                light(RIM_LIGHT_RIGHT, RIM_LIGHT_RANGE),
                light(RIM_LIGHT_LEFT, RIM_LIGHT_RANGE),
                light(KEY_LIGHT, KEY_LIGHT_RANGE),
            ],
            light_color: [
                color(RIM_LIGHT_RGB, RIM_LIGHT_INTENSITY),
                color(RIM_LIGHT_RGB, RIM_LIGHT_INTENSITY),
                color(KEY_LIGHT_RGB, KEY_LIGHT_INTENSITY),
            ],
        }
    }
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
) -> SceneResources {
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let vertices = mesh::build_showcase_mesh();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("showcase_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    SceneResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        vertex_count: vertices.len() as u32,
    }
}

pub(crate) fn draw(
    encoder: &mut wgpu::CommandEncoder,
    scene: &SceneResources,
    targets: &RenderTargets,
) {
    let clear = wgpu::Color {
        r: BACKGROUND_RGB[0] as f64,
        g: BACKGROUND_RGB[1] as f64,
        b: BACKGROUND_RGB[2] as f64,
        a: 1.0,
    };
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("scene_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: &targets.hdr_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: &targets.depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    rpass.set_pipeline(&scene.pipeline);
    rpass.set_bind_group(0, &scene.bind_group, &[]);
    rpass.set_vertex_buffer(0, scene.vertex_buffer.slice(..));
    rpass.draw(0..scene.vertex_count, 0..1);
}
