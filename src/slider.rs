//! A horizontal slider with a gradient track and a round, shadowed thumb.

pub mod geometry;

use std::{f32::consts::FRAC_PI_2, ops::RangeInclusive};

use iced_wgpu::core::{
    event, gradient::Linear, keyboard, keyboard::key::Named, layout, mouse, renderer, touch,
    widget::tree::{self, Tree},
    Background, Border, Clipboard, Color, Element, Event, Gradient, Layout, Length, Point,
    Radians, Rectangle, Shadow, Shell, Size, Vector, Widget,
};

pub use self::geometry::Mapping;

pub const DEFAULT_RANGE: RangeInclusive<i32> = 1..=100;
pub const DEFAULT_TRACK_THICKNESS: f32 = 4.0;
pub const DEFAULT_THUMB_DIAMETER: f32 = 24.0;

/// An integer slider.
///
/// The slider doesn't own its value. It is rebuilt from the caller's value on every
/// view and reports changes through the `on_change` closure, so the caller decides
/// what the new value actually is.
pub struct GradientSlider<'a, Message> {
    value: i32,
    range: RangeInclusive<i32>,
    on_change: Box<dyn Fn(i32) -> Message + 'a>,
    track_thickness: f32,
    thumb_diameter: f32,
    mapping: Mapping,
    width: Length,
}

impl<'a, Message> GradientSlider<'a, Message> {
    pub fn new(value: i32, on_change: impl Fn(i32) -> Message + 'a) -> Self {
        Self {
            value,
            range: DEFAULT_RANGE,
            on_change: Box::new(on_change),
            track_thickness: DEFAULT_TRACK_THICKNESS,
            thumb_diameter: DEFAULT_THUMB_DIAMETER,
            mapping: Mapping::default(),
            width: Length::Fill,
        }
    }

    /// Sets the inclusive range of selectable values.
    ///
    /// Reversed bounds are swapped.
    pub fn range(mut self, range: RangeInclusive<i32>) -> Self {
        if range.start() > range.end() {
            tracing::warn!(?range, "slider range is reversed, swapping bounds");
        }
        self.range = geometry::normalize(range);
        self
    }

    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    pub fn thumb_diameter(mut self, diameter: f32) -> Self {
        self.thumb_diameter = diameter;
        self
    }

    pub fn mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    fn current(&self) -> i32 {
        geometry::clamp(self.value, &self.range)
    }

    /// Maps a pointer position to a value, returning it if it differs from the current one.
    fn drag_to(&self, position: Point, bounds: Rectangle, state: &State) -> Option<i32> {
        let drag_x = position.x - bounds.x;
        let width = state.width(bounds);
        let usable = geometry::usable_width(width, self.thumb_diameter);

        let new_value = geometry::value_at(drag_x, usable, &self.range, self.mapping);

        tracing::trace!(
            drag_x,
            usable,
            ?new_value,
            value = self.value,
            lower = self.range.start(),
            upper = self.range.end(),
            "slider drag"
        );

        new_value.filter(|new_value| *new_value != self.value)
    }

    /// Publishes `new_value` and adopts it, so later events in the same batch
    /// compare against it rather than the value from the last view.
    fn publish(&mut self, new_value: i32, shell: &mut Shell<'_, Message>) {
        self.value = new_value;
        shell.publish((self.on_change)(new_value));
    }

    fn key_to(&self, key: &keyboard::Key) -> Option<i32> {
        let current = self.current();
        let new_value = match key {
            keyboard::Key::Named(Named::ArrowRight | Named::ArrowUp) => {
                geometry::step(current, 1, &self.range)
            }
            keyboard::Key::Named(Named::ArrowLeft | Named::ArrowDown) => {
                geometry::step(current, -1, &self.range)
            }
            keyboard::Key::Named(Named::Home) => *self.range.start(),
            keyboard::Key::Named(Named::End) => *self.range.end(),
            _ => return None,
        };

        (new_value != self.value).then_some(new_value)
    }

    fn track_bounds(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x,
            y: bounds.center_y() - self.track_thickness / 2.0,
            width: bounds.width,
            height: self.track_thickness,
        }
    }

    fn thumb_bounds(&self, bounds: Rectangle, width: f32) -> Rectangle {
        let offset = geometry::thumb_offset(self.value, &self.range, width, self.thumb_diameter);

        Rectangle {
            x: bounds.x + offset,
            y: bounds.center_y() - self.thumb_diameter / 2.0,
            width: self.thumb_diameter,
            height: self.thumb_diameter,
        }
    }
}

/// Per-instance state kept in the widget tree across rebuilds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct State {
    dragging: bool,
    /// Size from the most recent layout pass.
    geometry: Option<Size>,
}

impl State {
    /// Records a new layout size, returning whether it changed.
    fn observe(&mut self, size: Size) -> bool {
        if self.geometry == Some(size) {
            return false;
        }
        self.geometry = Some(size);
        true
    }

    fn width(&self, bounds: Rectangle) -> f32 {
        self.geometry.map_or(bounds.width, |size| size.width)
    }
}

/// Track colors, left to right.
fn track_stops() -> [Color; 5] {
    [
        Color::BLACK,
        Color::from_rgb(0.56, 0.56, 0.58),
        Color::from_rgb(0.0, 0.48, 1.0),
        Color::from_rgb(1.0, 0.58, 0.0),
        Color::from_rgb(1.0, 0.23, 0.19),
    ]
}

fn track_background() -> Background {
    let stops = track_stops();
    let step = 1.0 / (stops.len() - 1) as f32;
    let linear = stops
        .iter()
        .enumerate()
        .fold(Linear::new(Radians(FRAC_PI_2)), |linear, (i, color)| {
            linear.add_stop(i as f32 * step, *color)
        });

    Background::Gradient(Gradient::Linear(linear))
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for GradientSlider<'a, Message>
where
    Renderer: iced_wgpu::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, Length::Fixed(self.thumb_diameter))
    }

    fn layout(
        &self,
        tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let node = layout::atomic(limits, self.width, self.thumb_diameter);

        let state = tree.state.downcast_mut::<State>();
        if state.observe(node.size()) {
            tracing::debug!(size = ?node.size(), "slider geometry changed");
        }

        node
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let position = match event {
                    Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                        bounds.contains(position).then_some(position)
                    }
                    _ => cursor.position_over(bounds),
                };

                if let Some(position) = position {
                    state.dragging = true;
                    if let Some(new_value) = self.drag_to(position, bounds, state) {
                        self.publish(new_value, shell);
                    }
                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.dragging {
                    state.dragging = false;
                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.dragging {
                    if let Some(new_value) = self.drag_to(position, bounds, state) {
                        self.publish(new_value, shell);
                    }
                    return event::Status::Captured;
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { ref key, .. }) => {
                if state.dragging || cursor.is_over(bounds) {
                    if let Some(new_value) = self.key_to(key) {
                        self.publish(new_value, shell);
                        return event::Status::Captured;
                    }
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        renderer.fill_quad(
            renderer::Quad {
                bounds: self.track_bounds(bounds),
                border: Border {
                    radius: (self.track_thickness / 2.0).into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            },
            track_background(),
        );

        renderer.fill_quad(
            renderer::Quad {
                bounds: self.thumb_bounds(bounds, state.width(bounds)),
                border: Border {
                    radius: (self.thumb_diameter / 2.0).into(),
                    ..Border::default()
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.33),
                    offset: Vector::new(0.0, 0.0),
                    blur_radius: 2.0,
                },
            },
            Color::WHITE,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::Idle
        }
    }
}

impl<'a, Message, Theme, Renderer> From<GradientSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: iced_wgpu::core::Renderer + 'a,
{
    fn from(slider: GradientSlider<'a, Message>) -> Self {
        Element::new(slider)
    }
}
