use crate::constants::*;
use crate::core::{core_transforms, Camera, DustField, SceneGroup};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use helpers::PipelineSpec;
use mesh::{GpuMesh, InstanceRaw};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    group: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    accent: [f32; 4],
    key_pos: [f32; 4],
    key_color: [f32; 4],
    fill_pos: [f32; 4],
    fill_color: [f32; 4],
}

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    core_pipeline: wgpu::RenderPipeline,
    shell_pipeline: wgpu::RenderPipeline,
    dust_pipeline: wgpu::RenderPipeline,

    inner_mesh: GpuMesh,
    outer_mesh: GpuMesh,
    dust_mesh: GpuMesh,
    // [inner, outer], rewritten every frame
    core_instances: wgpu::Buffer,
    dust_instances: wgpu::Buffer,
    dust_count: u32,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, dust: &DustField) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
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
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });

        let buffers = mesh::vertex_layouts();
        let core_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            PipelineSpec {
                label: "core_pipeline",
                vs_entry: "vs_core",
                fs_entry: "fs_lit",
                blend: Some(wgpu::BlendState::REPLACE),
                depth_write: true,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let shell_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            PipelineSpec {
                label: "shell_pipeline",
                vs_entry: "vs_core",
                fs_entry: "fs_lit",
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let dust_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            PipelineSpec {
                label: "dust_pipeline",
                vs_entry: "vs_dust",
                fs_entry: "fs_dust",
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
                cull_mode: None,
            },
        );

        let inner_mesh = GpuMesh::icosahedron(&device, "inner_mesh", INNER_RADIUS, INNER_DETAIL);
        let outer_mesh = GpuMesh::icosahedron(&device, "outer_mesh", OUTER_RADIUS, OUTER_DETAIL);
        let dust_mesh = GpuMesh::icosahedron(&device, "dust_mesh", 1.0, 0);
        let core_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("core_instances"),
            size: (2 * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (dust_instances, dust_count) =
            mesh::upload_dust(&device, dust, rgba(GOLD_RGB, DUST_OPACITY));
        log::info!(
            "[gpu] ready {}x{} format={:?} dust={}",
            width,
            height,
            format,
            dust_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bind_group,
            core_pipeline,
            shell_pipeline,
            dust_pipeline,
            inner_mesh,
            outer_mesh,
            dust_mesh,
            core_instances,
            dust_instances,
            dust_count,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0] as f64,
                g: CLEAR_RGB[1] as f64,
                b: CLEAR_RGB[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn write_globals(&self, camera: &Camera, group: &SceneGroup) {
        let light = |pos: [f32; 3], intensity: f32| [pos[0], pos[1], pos[2], intensity];
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            group: group.matrix().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: [AMBIENT_INTENSITY, AMBIENT_INTENSITY, AMBIENT_INTENSITY, 1.0],
            accent: rgba(GOLD_RGB, 1.0),
            key_pos: light(KEY_LIGHT_POS, KEY_LIGHT_INTENSITY),
            key_color: rgba(GOLD_RGB, 1.0),
            fill_pos: light(FILL_LIGHT_POS, FILL_LIGHT_INTENSITY),
            fill_color: [1.0, 1.0, 1.0, 1.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        group: &SceneGroup,
        elapsed_sec: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(camera, group);
        let transforms = core_transforms(group, elapsed_sec);
        let core = [
            // metallic white body with a faint gold glow
            InstanceRaw::new(transforms.inner, [1.0, 1.0, 1.0, 1.0], [CORE_EMISSIVE, 1.0, 0.2, 0.0]),
            InstanceRaw::new(transforms.outer, rgba(GOLD_RGB, SHELL_OPACITY), [0.0, 0.6, 0.1, 0.0]),
        ];
        self.queue
            .write_buffer(&self.core_instances, 0, bytemuck::cast_slice(&core));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            // opaque core first so the blended layers depth-test against it
            rpass.set_pipeline(&self.core_pipeline);
            rpass.set_vertex_buffer(0, self.inner_mesh.buffer.slice(..));
            rpass.set_vertex_buffer(1, self.core_instances.slice(..));
            rpass.draw(0..self.inner_mesh.vertex_count, 0..1);

            rpass.set_pipeline(&self.dust_pipeline);
            rpass.set_vertex_buffer(0, self.dust_mesh.buffer.slice(..));
            rpass.set_vertex_buffer(1, self.dust_instances.slice(..));
            rpass.draw(0..self.dust_mesh.vertex_count, 0..self.dust_count);

            rpass.set_pipeline(&self.shell_pipeline);
            rpass.set_vertex_buffer(0, self.outer_mesh.buffer.slice(..));
            rpass.set_vertex_buffer(1, self.core_instances.slice(..));
            rpass.draw(0..self.outer_mesh.vertex_count, 1..2);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
