pub mod clipboard;
pub mod config;
pub mod handlers;
pub mod layer;
pub mod program;
pub mod slider;
pub mod state;
pub mod wgpu;

use std::time::Duration;

use anyhow::Context;
use futures::Future;
use smithay_client_toolkit::reexports::calloop::EventLoop;

use crate::{config::Config, program::SliderScreen, state::State};

pub use slider::{GradientSlider, Mapping};

/// Opens the slider screen on a layer surface and runs until it is closed.
///
/// Must be called from within a multi-threaded tokio runtime.
pub fn start(config: Config) -> anyhow::Result<()> {
    let mut event_loop = EventLoop::<State>::try_new().context("failed to create event loop")?;

    let mut state = State::new(event_loop.handle(), event_loop.get_signal())?;

    state.open_layer(&config, SliderScreen::new(config.initial_value))?;

    event_loop
        .run(Duration::from_secs(1), &mut state, State::redraw_if_needed)
        .context("event loop failed")?;

    Ok(())
}

fn block_on_tokio<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
