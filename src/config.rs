use smithay_client_toolkit::shell::wlr_layer::{Anchor, KeyboardInteractivity};

use crate::{layer::ExclusiveZone, program};

/// Options for the layer surface hosting the slider screen.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub anchor: Anchor,
    pub exclusive_zone: ExclusiveZone,
    pub keyboard_interactivity: KeyboardInteractivity,
    /// Starting value of the slider.
    pub initial_value: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400,
            height: 160,
            anchor: Anchor::BOTTOM,
            exclusive_zone: ExclusiveZone::Respect,
            keyboard_interactivity: KeyboardInteractivity::OnDemand,
            initial_value: program::DEFAULT_VALUE,
        }
    }
}

impl Config {
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn with_anchor(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }

    pub fn with_exclusive_zone(self, exclusive_zone: ExclusiveZone) -> Self {
        Self {
            exclusive_zone,
            ..self
        }
    }

    pub fn with_keyboard_interactivity(
        self,
        keyboard_interactivity: KeyboardInteractivity,
    ) -> Self {
        Self {
            keyboard_interactivity,
            ..self
        }
    }

    pub fn with_initial_value(self, initial_value: i32) -> Self {
        Self {
            initial_value,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_screen() {
        let config = Config::default();
        assert_eq!(config.initial_value, 50);
        assert_eq!((config.width, config.height), (400, 160));
        assert_eq!(config.anchor, Anchor::BOTTOM);
        assert_eq!(config.exclusive_zone, ExclusiveZone::Respect);
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_size(600, 90)
            .with_anchor(Anchor::TOP | Anchor::LEFT | Anchor::RIGHT)
            .with_initial_value(7);

        assert_eq!((config.width, config.height), (600, 90));
        assert_eq!(config.anchor, Anchor::TOP | Anchor::LEFT | Anchor::RIGHT);
        assert_eq!(config.initial_value, 7);
        assert_eq!(config.exclusive_zone, ExclusiveZone::Respect);
    }
}
