use std::ffi::c_void;

use iced_wgpu::core::{clipboard::Kind, Clipboard};

/// Wayland clipboard handed to the iced runtime on every update.
///
/// The slider screen has no text input, so this mostly exists to satisfy
/// [`iced_runtime::program::State::update`].
pub struct WaylandClipboard(smithay_clipboard::Clipboard);

impl WaylandClipboard {
    /// Spawns the clipboard worker thread for `display`.
    ///
    /// # Safety
    /// `display` must be a valid `*mut wl_display` that stays valid for as long as
    /// the returned clipboard is alive.
    pub unsafe fn new(display: *mut c_void) -> Self {
        Self(smithay_clipboard::Clipboard::new(display))
    }
}

impl Clipboard for WaylandClipboard {
    fn read(&self, _kind: Kind) -> Option<String> {
        self.0
            .load()
            .inspect_err(|err| tracing::debug!("clipboard read failed: {err}"))
            .ok()
    }

    fn write(&mut self, _kind: Kind, contents: String) {
        self.0.store(contents);
    }
}
