use anyhow::Context;
use iced_wgpu::{
    wgpu::{self, Backends},
    Backend,
};

use crate::block_on_tokio;

const BACKENDS: Backends = Backends::GL.union(Backends::VULKAN);

/// Format the iced backend renders into.
pub const RENDER_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8UnormSrgb;

/// GPU handles shared by every surface, plus the one iced renderer.
pub struct Wgpu {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub renderer: iced_wgpu::Renderer,
}

impl Wgpu {
    pub fn new() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: BACKENDS,
            ..Default::default()
        });

        tracing::debug!("requesting wgpu adapter");
        let adapter = block_on_tokio(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: None,
        }))
        .context("no suitable wgpu adapter")?;

        tracing::debug!(adapter = ?adapter.get_info(), "requesting wgpu device");
        let (device, queue) = block_on_tokio(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("gradient-slider"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
            },
            None,
        ))
        .context("failed to request wgpu device")?;

        let backend = Backend::new(
            &device,
            &queue,
            iced_wgpu::Settings {
                present_mode: wgpu::PresentMode::Mailbox,
                internal_backend: BACKENDS,
                ..Default::default()
            },
            RENDER_FORMAT,
        );

        let renderer = iced_wgpu::Renderer::new(backend, Default::default(), iced::Pixels(16.0));

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
            renderer,
        })
    }
}
