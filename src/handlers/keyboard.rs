use iced_wgpu::core::{
    keyboard::{key::Named, Key, Location},
    SmolStr,
};
use smithay_client_toolkit::{
    delegate_keyboard,
    reexports::client::{
        protocol::{wl_keyboard::WlKeyboard, wl_surface::WlSurface},
        Connection, QueueHandle,
    },
    seat::keyboard::{KeyEvent, KeyboardHandler, Keysym, Modifiers},
    shell::WaylandSurface,
};

use crate::state::State;

/// Translates a keysym into the iced key the slider understands.
pub fn keysym_to_key(keysym: Keysym) -> Key {
    let named = match keysym {
        Keysym::Left => Some(Named::ArrowLeft),
        Keysym::Right => Some(Named::ArrowRight),
        Keysym::Up => Some(Named::ArrowUp),
        Keysym::Down => Some(Named::ArrowDown),
        Keysym::Home => Some(Named::Home),
        Keysym::End => Some(Named::End),
        Keysym::Escape => Some(Named::Escape),
        _ => None,
    };

    match named {
        Some(named) => Key::Named(named),
        None => keysym
            .key_char()
            .map(|ch| Key::Character(SmolStr::new(ch.to_string())))
            .unwrap_or(Key::Unidentified),
    }
}

impl State {
    fn iced_modifiers(&self) -> iced::keyboard::Modifiers {
        let mut modifiers = iced::keyboard::Modifiers::empty();
        if self.keyboard_modifiers.ctrl {
            modifiers |= iced::keyboard::Modifiers::CTRL;
        }
        if self.keyboard_modifiers.alt {
            modifiers |= iced::keyboard::Modifiers::ALT;
        }
        if self.keyboard_modifiers.shift {
            modifiers |= iced::keyboard::Modifiers::SHIFT;
        }
        if self.keyboard_modifiers.logo {
            modifiers |= iced::keyboard::Modifiers::LOGO;
        }
        modifiers
    }

    fn focused_layer_surface(&self, surface: &WlSurface) -> bool {
        self.layer
            .as_ref()
            .is_some_and(|layer| layer.layer.wl_surface() == surface)
    }
}

impl KeyboardHandler for State {
    fn enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &WlKeyboard,
        surface: &WlSurface,
        _serial: u32,
        _raw: &[u32],
        _keysyms: &[Keysym],
    ) {
        if self.focused_layer_surface(surface) {
            self.keyboard_focus = true;
        }
    }

    fn leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &WlKeyboard,
        surface: &WlSurface,
        _serial: u32,
    ) {
        if self.focused_layer_surface(surface) {
            self.keyboard_focus = false;
        }
    }

    fn press_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        if !self.keyboard_focus {
            return;
        }

        let key = keysym_to_key(event.keysym);

        if key == Key::Named(Named::Escape) {
            self.close();
            return;
        }

        let modifiers = self.iced_modifiers();
        let Some(layer) = self.layer.as_mut() else {
            return;
        };

        layer
            .screen
            .queue_event(iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key,
                location: Location::Standard,
                modifiers,
                text: event.utf8.map(SmolStr::new),
            }));
    }

    fn release_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        if !self.keyboard_focus {
            return;
        }

        let modifiers = self.iced_modifiers();
        let Some(layer) = self.layer.as_mut() else {
            return;
        };

        layer
            .screen
            .queue_event(iced::Event::Keyboard(iced::keyboard::Event::KeyReleased {
                key: keysym_to_key(event.keysym),
                location: Location::Standard,
                modifiers,
            }));
    }

    fn update_modifiers(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &WlKeyboard,
        _serial: u32,
        modifiers: Modifiers,
        _layout: u32,
    ) {
        self.keyboard_modifiers = modifiers;
    }
}
delegate_keyboard!(State);
