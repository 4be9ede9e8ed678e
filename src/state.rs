use anyhow::Context;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::{
        calloop::{LoopHandle, LoopSignal},
        calloop_wayland_source::WaylandSource,
        client::{
            globals::registry_queue_init,
            protocol::{wl_keyboard::WlKeyboard, wl_pointer::WlPointer},
            Connection, QueueHandle,
        },
    },
    registry::RegistryState,
    seat::{keyboard::Modifiers, SeatState},
    shell::wlr_layer::LayerShell,
};

use crate::{config::Config, layer::SliderLayer, program::SliderScreen, wgpu::Wgpu};

pub struct State {
    pub loop_handle: LoopHandle<'static, State>,
    pub loop_signal: LoopSignal,
    pub conn: Connection,

    pub registry_state: RegistryState,
    pub seat_state: SeatState,
    pub output_state: OutputState,
    pub compositor_state: CompositorState,
    pub layer_shell_state: LayerShell,

    pub queue_handle: QueueHandle<State>,

    pub wgpu: Wgpu,

    pub layer: Option<SliderLayer>,

    pub keyboard_focus: bool,
    pub keyboard_modifiers: Modifiers,
    pub keyboard: Option<WlKeyboard>,

    pub pointer: Option<WlPointer>,
}

impl State {
    pub fn new(
        loop_handle: LoopHandle<'static, State>,
        loop_signal: LoopSignal,
    ) -> anyhow::Result<Self> {
        tracing::debug!("connecting to wayland");
        let conn = Connection::connect_to_env().context("failed to connect to wayland")?;

        let (globals, event_queue) =
            registry_queue_init::<State>(&conn).context("failed to init registry queue")?;
        let queue_handle = event_queue.handle();

        WaylandSource::new(conn.clone(), event_queue)
            .insert(loop_handle.clone())
            .map_err(|err| {
                anyhow::anyhow!("failed to insert wayland source into event loop: {}", err.error)
            })?;

        tracing::debug!("binding globals");
        let compositor_state = CompositorState::bind(&globals, &queue_handle)
            .context("wl_compositor not available")?;
        let layer_shell_state =
            LayerShell::bind(&globals, &queue_handle).context("layer shell not available")?;
        let seat_state = SeatState::new(&globals, &queue_handle);
        let output_state = OutputState::new(&globals, &queue_handle);
        let registry_state = RegistryState::new(&globals);

        tracing::debug!("setting up wgpu");
        let wgpu = Wgpu::new()?;

        Ok(Self {
            loop_handle,
            loop_signal,
            conn,
            registry_state,
            seat_state,
            output_state,
            compositor_state,
            layer_shell_state,
            queue_handle,
            wgpu,
            layer: None,
            keyboard_focus: false,
            keyboard_modifiers: Modifiers::default(),
            keyboard: None,
            pointer: None,
        })
    }

    /// Creates the layer surface hosting `screen`.
    ///
    /// Nothing is drawn until the compositor sends the first configure.
    pub fn open_layer(&mut self, config: &Config, screen: SliderScreen) -> anyhow::Result<()> {
        let layer = SliderLayer::new(self, config, screen)?;
        self.layer = Some(layer);
        Ok(())
    }

    /// Updates and draws the layer if it has queued events and no frame is pending.
    pub fn redraw_if_needed(&mut self) {
        let Some(layer) = self.layer.as_mut() else {
            return;
        };

        if layer.frame_pending || layer.screen.is_queue_empty() {
            return;
        }

        layer.update(&mut self.wgpu.renderer);
        layer.draw(
            &self.wgpu.device,
            &self.wgpu.queue,
            &mut self.wgpu.renderer,
            &self.queue_handle,
        );
    }

    pub fn close(&mut self) {
        tracing::info!("closing slider layer");
        self.layer = None;
        self.loop_signal.stop();
        self.loop_signal.wakeup();
    }
}
