use iced::mouse::{Button, Cursor};
use smithay_client_toolkit::{
    delegate_pointer,
    reexports::client::{protocol::wl_pointer::WlPointer, Connection, QueueHandle},
    seat::pointer::{PointerEvent, PointerEventKind, PointerHandler},
    shell::WaylandSurface,
};

use crate::state::State;

/// Maps a linux evdev button code to an iced button.
pub fn button_to_iced_button(button: u32) -> Option<Button> {
    match button {
        0x110 => Some(Button::Left),
        0x111 => Some(Button::Right),
        0x112 => Some(Button::Middle),
        _ => None,
    }
}

/// Where the pointer is over the layer surface, if it is over it at all.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    location: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn enter(&mut self, position: (f64, f64)) {
        self.location = Some(position);
    }

    /// Motion and presses both carry a position; a press can arrive without a
    /// preceding motion.
    pub fn moved(&mut self, position: (f64, f64)) {
        self.location = Some(position);
    }

    pub fn leave(&mut self) {
        self.location = None;
    }

    pub fn cursor(&self) -> Cursor {
        match self.location {
            Some((x, y)) => Cursor::Available(iced::Point::new(x as f32, y as f32)),
            None => Cursor::Unavailable,
        }
    }
}

impl PointerHandler for State {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &WlPointer,
        events: &[PointerEvent],
    ) {
        let Some(layer) = self.layer.as_mut() else {
            return;
        };

        for event in events {
            if &event.surface != layer.layer.wl_surface() {
                continue;
            }

            let iced_event = match event.kind {
                PointerEventKind::Enter { .. } => {
                    layer.pointer.enter(event.position);
                    iced::Event::Mouse(iced::mouse::Event::CursorEntered)
                }
                PointerEventKind::Leave { .. } => {
                    layer.pointer.leave();
                    iced::Event::Mouse(iced::mouse::Event::CursorLeft)
                }
                PointerEventKind::Motion { .. } => {
                    layer.pointer.moved(event.position);
                    iced::Event::Mouse(iced::mouse::Event::CursorMoved {
                        position: iced::Point {
                            x: event.position.0 as f32,
                            y: event.position.1 as f32,
                        },
                    })
                }
                PointerEventKind::Press { button, .. } => {
                    layer.pointer.moved(event.position);
                    let Some(button) = button_to_iced_button(button) else {
                        continue;
                    };
                    iced::Event::Mouse(iced::mouse::Event::ButtonPressed(button))
                }
                PointerEventKind::Release { button, .. } => {
                    let Some(button) = button_to_iced_button(button) else {
                        continue;
                    };
                    iced::Event::Mouse(iced::mouse::Event::ButtonReleased(button))
                }
                PointerEventKind::Axis { .. } => continue,
            };

            layer.screen.queue_event(iced_event);
        }
    }
}
delegate_pointer!(State);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_evdev_buttons() {
        assert_eq!(button_to_iced_button(0x110), Some(Button::Left));
        assert_eq!(button_to_iced_button(0x111), Some(Button::Right));
        assert_eq!(button_to_iced_button(0x112), Some(Button::Middle));
        assert_eq!(button_to_iced_button(0x200), None);
    }

    #[test]
    fn cursor_unavailable_until_enter() {
        assert_eq!(PointerTracker::default().cursor(), Cursor::Unavailable);
    }

    #[test]
    fn cursor_follows_pointer() {
        let mut pointer = PointerTracker::default();
        pointer.enter((4.0, 5.0));
        assert_eq!(pointer.cursor(), Cursor::Available(iced::Point::new(4.0, 5.0)));

        pointer.moved((120.5, 20.0));
        assert_eq!(pointer.cursor(), Cursor::Available(iced::Point::new(120.5, 20.0)));
    }

    #[test]
    fn cursor_unavailable_after_leave() {
        let mut pointer = PointerTracker::default();
        pointer.enter((4.0, 5.0));
        pointer.moved((150.0, 20.0));
        pointer.leave();
        assert_eq!(pointer.cursor(), Cursor::Unavailable);
        assert!(!pointer.cursor().is_over(iced::Rectangle::with_size(iced::Size::INFINITY)));
    }
}
