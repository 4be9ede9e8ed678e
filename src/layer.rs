use std::{num::NonZeroU32, ptr::NonNull};

use anyhow::Context;
use iced::{Color, Size, Theme};
use iced_runtime::Debug;
use iced_wgpu::{graphics::Viewport, wgpu::SurfaceTargetUnsafe};
use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, WaylandDisplayHandle, WaylandWindowHandle,
};
use smithay_client_toolkit::{
    reexports::client::{Proxy, QueueHandle},
    shell::{
        wlr_layer::{self, LayerSurface},
        WaylandSurface,
    },
};

use crate::{
    clipboard::WaylandClipboard, config::Config, handlers::pointer::PointerTracker,
    program::SliderScreen, state::State, wgpu::RENDER_FORMAT,
};

pub struct SliderLayer {
    // SAFETY: Drop order: surface needs to be dropped before the layer
    surface: iced_wgpu::wgpu::Surface<'static>,
    pub layer: LayerSurface,

    width: u32,
    height: u32,
    format: iced_wgpu::wgpu::TextureFormat,
    pub viewport: Viewport,

    pub screen: iced_runtime::program::State<SliderScreen>,
    pub clipboard: WaylandClipboard,

    pub pointer: PointerTracker,
    /// A frame callback was requested and hasn't fired yet.
    pub frame_pending: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExclusiveZone {
    /// This layer surface wants an exclusive zone of the given size.
    Exclusive(NonZeroU32),
    /// This layer surface does not have an exclusive zone but wants to be placed respecting any.
    Respect,
    /// This layer surface does not have an exclusive zone and wants to be placed ignoring any.
    Ignore,
}

impl SliderLayer {
    pub fn new(state: &mut State, config: &Config, screen: SliderScreen) -> anyhow::Result<Self> {
        let Config {
            width,
            height,
            anchor,
            exclusive_zone,
            keyboard_interactivity,
            ..
        } = *config;

        let surface = state.compositor_state.create_surface(&state.queue_handle);
        let layer = state.layer_shell_state.create_layer_surface(
            &state.queue_handle,
            surface,
            wlr_layer::Layer::Top,
            Some("gradient-slider"),
            None,
        );

        layer.set_size(width, height);
        layer.set_anchor(anchor);
        layer.set_keyboard_interactivity(keyboard_interactivity);
        layer.set_exclusive_zone(match exclusive_zone {
            ExclusiveZone::Exclusive(size) => size.get() as i32,
            ExclusiveZone::Respect => 0,
            ExclusiveZone::Ignore => -1,
        });

        layer.commit();

        let display_ptr = NonNull::new(state.conn.backend().display_ptr() as *mut _)
            .context("wayland display pointer was null")?;
        let surface_ptr = NonNull::new(layer.wl_surface().id().as_ptr() as *mut _)
            .context("wayland surface pointer was null")?;

        let raw_display_handle = RawDisplayHandle::Wayland(WaylandDisplayHandle::new(display_ptr));
        let raw_window_handle = RawWindowHandle::Wayland(WaylandWindowHandle::new(surface_ptr));

        // SAFETY: the display outlives the event loop and the surface is dropped
        // before the layer it was created from.
        let wgpu_surface = unsafe {
            state
                .wgpu
                .instance
                .create_surface_unsafe(SurfaceTargetUnsafe::RawHandle {
                    raw_display_handle,
                    raw_window_handle,
                })
        }
        .context("failed to create wgpu surface")?;

        let capabilities = wgpu_surface.get_capabilities(&state.wgpu.adapter);
        let format = if capabilities.formats.contains(&RENDER_FORMAT) {
            RENDER_FORMAT
        } else {
            capabilities
                .formats
                .first()
                .copied()
                .context("surface has no supported formats")?
        };

        let screen = iced_runtime::program::State::new(
            screen,
            [width as f32, height as f32].into(),
            &mut state.wgpu.renderer,
            &mut Debug::new(),
        );

        // SAFETY: the connection is kept alive in `State` for the whole run.
        let clipboard =
            unsafe { WaylandClipboard::new(state.conn.backend().display_ptr() as *mut _) };

        let mut slider_layer = Self {
            surface: wgpu_surface,
            layer,
            width,
            height,
            format,
            viewport: Viewport::with_physical_size(Size::new(width, height), 1.0),
            screen,
            clipboard,
            pointer: PointerTracker::default(),
            frame_pending: false,
        };

        slider_layer.configure_surface(&state.wgpu.device);

        Ok(slider_layer)
    }

    fn configure_surface(&mut self, device: &iced_wgpu::wgpu::Device) {
        let surface_config = iced_wgpu::wgpu::SurfaceConfiguration {
            usage: iced_wgpu::wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.format,
            width: self.width,
            height: self.height,
            present_mode: iced_wgpu::wgpu::PresentMode::Mailbox,
            desired_maximum_frame_latency: 1,
            alpha_mode: iced_wgpu::wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![self.format],
        };

        self.surface.configure(device, &surface_config);
    }

    /// Applies a size from the compositor. Zero means "keep what we asked for".
    pub fn resize(&mut self, device: &iced_wgpu::wgpu::Device, width: u32, height: u32) {
        if width != 0 {
            self.width = width;
        }
        if height != 0 {
            self.height = height;
        }

        tracing::debug!(width = self.width, height = self.height, "resizing layer");

        self.viewport = Viewport::with_physical_size(Size::new(self.width, self.height), 1.0);
        self.configure_surface(device);
    }

    /// Feeds queued events through the screen and lays it out at the current size.
    pub fn update(&mut self, renderer: &mut iced_wgpu::Renderer) {
        let (_, command) = self.screen.update(
            self.viewport.logical_size(),
            self.pointer.cursor(),
            renderer,
            &Theme::Dark,
            &iced_wgpu::core::renderer::Style {
                text_color: Color::WHITE,
            },
            &mut self.clipboard,
            &mut Debug::new(),
        );

        // There's no executor here; the screen only ever returns `Command::none()`.
        if let Some(command) = command {
            let actions = command.actions().len();
            if actions > 0 {
                tracing::warn!(actions, "dropping screen command, the host doesn't run them");
            }
        }
    }

    pub fn draw(
        &mut self,
        device: &iced_wgpu::wgpu::Device,
        queue: &iced_wgpu::wgpu::Queue,
        renderer: &mut iced_wgpu::Renderer,
        qh: &QueueHandle<State>,
    ) {
        let Ok(frame) = self.surface.get_current_texture() else {
            tracing::warn!("failed to acquire next surface texture");
            return;
        };

        let mut encoder =
            device.create_command_encoder(&iced_wgpu::wgpu::CommandEncoderDescriptor::default());

        let view = frame
            .texture
            .create_view(&iced_wgpu::wgpu::TextureViewDescriptor::default());

        renderer.with_primitives(|backend, primitives| {
            backend.present::<String>(
                device,
                queue,
                &mut encoder,
                Some(iced::Color::new(0.3, 0.3, 0.3, 1.0)),
                self.format,
                &view,
                primitives,
                &self.viewport,
                &[],
            );
        });

        queue.submit(Some(encoder.finish()));

        self.layer
            .wl_surface()
            .damage_buffer(0, 0, self.width as i32, self.height as i32);

        self.layer
            .wl_surface()
            .frame(qh, self.layer.wl_surface().clone());
        self.frame_pending = true;

        // Does a commit
        frame.present();
    }
}
