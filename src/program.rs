use iced::{
    widget::{column, container, text, Space},
    Alignment, Command, Length,
};
use iced_runtime::Program;
use iced_wgpu::core::Element;

use crate::slider::{self, GradientSlider};

pub const DEFAULT_VALUE: i32 = 50;
pub const RANGE: std::ops::RangeInclusive<i32> = 1..=100;
pub const TRACK_THICKNESS: f32 = 20.0;
pub const THUMB_DIAMETER: f32 = 40.0;

/// A screen with one slider and a readout of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderScreen {
    value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ValueChanged(i32),
}

impl SliderScreen {
    /// Creates the screen with `value` clamped into [`RANGE`].
    pub fn new(value: i32) -> Self {
        Self {
            value: slider::geometry::clamp(value, &RANGE),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Default for SliderScreen {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE)
    }
}

impl Program for SliderScreen {
    type Renderer = iced_wgpu::Renderer;

    type Theme = iced::Theme;

    type Message = Message;

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::ValueChanged(value) => {
                tracing::trace!(from = self.value, to = value, "value changed");
                self.value = value;
            }
        }

        Command::none()
    }

    fn view(&self) -> Element<'_, Self::Message, Self::Theme, Self::Renderer> {
        let slider = GradientSlider::new(self.value, Message::ValueChanged)
            .range(RANGE)
            .track_thickness(TRACK_THICKNESS)
            .thumb_diameter(THUMB_DIAMETER);

        column![
            Space::with_height(Length::Fill),
            container(slider)
                .width(Length::Fill)
                .padding(16.0)
                .max_height(50.0),
            text(format!("Current value: {}", self.value)),
            Space::with_height(Length::Fill),
        ]
        .align_items(Alignment::Center)
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_fifty() {
        assert_eq!(SliderScreen::default().value(), 50);
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(SliderScreen::new(0).value(), 1);
        assert_eq!(SliderScreen::new(250).value(), 100);
        assert_eq!(SliderScreen::new(73).value(), 73);
    }

    #[test]
    fn value_changes_are_applied() {
        let mut screen = SliderScreen::default();
        let _ = screen.update(Message::ValueChanged(12));
        assert_eq!(screen.value(), 12);
        let _ = screen.update(Message::ValueChanged(12));
        assert_eq!(screen.value(), 12);
    }

    #[test]
    fn updates_ask_nothing_of_the_host() {
        let mut screen = SliderScreen::default();
        assert!(screen.update(Message::ValueChanged(30)).actions().is_empty());
    }
}
