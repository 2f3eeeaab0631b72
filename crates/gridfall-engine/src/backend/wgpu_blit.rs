use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::coords::{Dimensions, Rect};
use crate::pattern::PixelBuffer;

use super::{BackendError, PresentBackend, PresentError};

/// wgpu-backed presenter.
///
/// Owns the surface bound to the window plus a streaming texture matching
/// the source frame. `present` uploads the frame bytes, clears the surface
/// (the letterbox bars), and draws the texture into the target rectangle via
/// the render-pass viewport. Presentation is FIFO (vsync).
///
/// Scaling is unsmoothed: the sampler is nearest-neighbor, matching the
/// CPU resample path.
pub struct WgpuBlitBackend {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: Dimensions,

    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    texture: wgpu::Texture,
    texture_size: Dimensions,
    bind_group: wgpu::BindGroup,
}

impl WgpuBlitBackend {
    /// Creates a backend bound to `window`, with a streaming texture sized
    /// for `frame_dims`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; callers block
    /// on this once at startup.
    pub async fn new(window: Arc<Window>, frame_dims: Dimensions) -> Result<Self> {
        let inner = window.inner_size();
        let size = Dimensions::new(inner.width, inner.height);
        anyhow::ensure!(!size.is_empty(), "window has zero size");
        anyhow::ensure!(!frame_dims.is_empty(), "frame has zero size");

        // All backends so wgpu picks the optimal platform backend.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // `Arc<Window>` keeps the surface target alive for 'static.
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("gridfall device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps).context("no supported surface formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            // FIFO is vsync'd and universally supported.
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gridfall blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("gridfall blit bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("gridfall blit pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gridfall blit pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                // Fullscreen triangle from the vertex index; no buffers.
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("gridfall blit sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let (texture, bind_group) =
            create_frame_texture(&device, &bind_group_layout, &sampler, frame_dims);

        log::info!(
            "wgpu backend ready: surface {}x{} {format:?}, frame {}x{}",
            size.width,
            size.height,
            frame_dims.width,
            frame_dims.height,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            pipeline,
            bind_group_layout,
            sampler,
            texture,
            texture_size: frame_dims,
            bind_group,
        })
    }

    fn upload_frame(&mut self, frame: &PixelBuffer) {
        let dims = frame.dimensions();

        // Source size changes are rare (never, in the demo) but cheap to
        // support: recreate the streaming texture to match.
        if dims != self.texture_size {
            let (texture, bind_group) =
                create_frame_texture(&self.device, &self.bind_group_layout, &self.sampler, dims);
            self.texture = texture;
            self.bind_group = bind_group;
            self.texture_size = dims;
        }

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            frame.bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(frame.pitch() as u32),
                rows_per_image: Some(dims.height),
            },
            wgpu::Extent3d {
                width: dims.width,
                height: dims.height,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Converts a surface acquisition error into the present-error taxonomy.
    fn map_surface_error(&mut self, err: wgpu::SurfaceError) -> PresentError {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                if !self.size.is_empty() {
                    self.surface.configure(&self.device, &self.config);
                }
                PresentError::Transient
            }
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => PresentError::Transient,
            wgpu::SurfaceError::OutOfMemory => {
                PresentError::Fatal("surface out of memory".to_string())
            }
        }
    }
}

impl PresentBackend for WgpuBlitBackend {
    fn viewport(&self) -> Dimensions {
        self.size
    }

    fn resize(&mut self, dims: Dimensions) -> Result<(), BackendError> {
        // wgpu cannot configure a zero-sized surface; record the size and
        // defer until the window becomes visible again.
        if dims.is_empty() {
            self.size = dims;
            return Ok(());
        }

        self.size = dims;
        self.config.width = dims.width;
        self.config.height = dims.height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("surface reconfigured to {}x{}", dims.width, dims.height);
        Ok(())
    }

    fn present(&mut self, frame: &PixelBuffer, target: Rect) -> Result<(), PresentError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => return Err(self.map_surface_error(err)),
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.upload_frame(frame);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("gridfall blit encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gridfall blit pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // The bars are whatever the clear leaves behind.
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // A degenerate target (extreme aspect ratios truncate to zero)
            // still clears but draws nothing.
            if !target.is_empty() {
                rpass.set_viewport(
                    target.x as f32,
                    target.y as f32,
                    target.width as f32,
                    target.height as f32,
                    0.0,
                    1.0,
                );
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.draw(0..3, 0..1);
            }
        }

        self.window.pre_present_notify();
        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}

fn choose_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    // Prefer sRGB so the sRGB frame texture round-trips byte-for-byte.
    let preferred = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];
    for f in preferred {
        if caps.formats.contains(&f) {
            return Some(f);
        }
    }
    caps.formats.first().copied()
}

fn create_frame_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    dims: Dimensions,
) -> (wgpu::Texture, wgpu::BindGroup) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("gridfall frame texture"),
        size: wgpu::Extent3d {
            width: dims.width,
            height: dims.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("gridfall frame bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    (texture, bind_group)
}
