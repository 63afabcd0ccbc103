//! Widget configuration: the raw attribute bag and its resolved form.
//!
//! [`Attributes`] mirrors the flat, integer-and-packed-color attribute set
//! the widget is configured with externally (e.g. from a settings file);
//! [`Config`] is the typed form the layout and drawing code works on.

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::style::{ConfigError, DotStyle, Orientation};

/// Convert a packed ARGB color into an iced color.
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, f32::from(a) / 255.0)
}

/// The raw styling attribute bag.
///
/// Every field is optional; unresolved attributes fall back to the defaults
/// documented on [`Config`]. Style and orientation carry their raw integer
/// encoding and are validated during [`resolve`](Attributes::resolve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub dot_count: Option<u16>,
    /// Raw shape encoding, 0-5.
    pub style: Option<u8>,
    /// Raw orientation encoding, 0 horizontal, 1 vertical.
    pub orientation: Option<u8>,
    /// Packed ARGB.
    pub active_color: Option<u32>,
    /// Packed ARGB.
    pub inactive_color: Option<u32>,
    pub minimum_value: Option<i32>,
    pub rounded_radius: Option<f32>,
    pub dot_margin: Option<f32>,
    /// Gradient start, packed ARGB.
    pub start_color: Option<u32>,
    /// Gradient end, packed ARGB.
    pub end_color: Option<u32>,
    /// Selection border, packed ARGB.
    pub selected_border_color: Option<u32>,
    pub selected_border_width: Option<f32>,
}

impl Attributes {
    /// Resolve the bag into a typed configuration.
    ///
    /// Fails when the raw style or orientation encoding is out of range.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            dot_count: self.dot_count.unwrap_or(defaults.dot_count),
            style: self
                .style
                .map(DotStyle::try_from)
                .transpose()?
                .unwrap_or(defaults.style),
            orientation: self
                .orientation
                .map(Orientation::try_from)
                .transpose()?
                .unwrap_or(defaults.orientation),
            active_color: self
                .active_color
                .map(color_from_argb)
                .unwrap_or(defaults.active_color),
            inactive_color: self
                .inactive_color
                .map(color_from_argb)
                .unwrap_or(defaults.inactive_color),
            minimum_value: self.minimum_value.unwrap_or(defaults.minimum_value),
            rounded_radius: self.rounded_radius.unwrap_or(defaults.rounded_radius),
            dot_margin: self.dot_margin.unwrap_or(defaults.dot_margin),
            start_color: self.start_color.map(color_from_argb),
            end_color: self.end_color.map(color_from_argb),
            selected_border_color: self.selected_border_color.map(color_from_argb),
            selected_border_width: self
                .selected_border_width
                .unwrap_or(defaults.selected_border_width),
        })
    }
}

/// Resolved widget configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of selectable steps. At least 1; layout fails otherwise.
    pub dot_count: u16,
    pub style: DotStyle,
    pub orientation: Orientation,
    /// Fill color of selected dots (and of dots below the minimum value).
    pub active_color: Color,
    /// Fill color of unselected dots at or above the minimum value.
    pub inactive_color: Color,
    /// Floor of the selectable range; `minimum_value - 1` is the
    /// "nothing selected" sentinel.
    pub minimum_value: i32,
    /// Corner radius of the rounded rectangle shape, in pixels.
    pub rounded_radius: f32,
    /// Spacing reserved around each dot, in pixels.
    pub dot_margin: f32,
    /// Gradient start. Gradient mode needs both endpoints.
    pub start_color: Option<Color>,
    /// Gradient end.
    pub end_color: Option<Color>,
    /// Border drawn inside the selected dot, when set.
    pub selected_border_color: Option<Color>,
    pub selected_border_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dot_count: 10,
            style: DotStyle::default(),
            orientation: Orientation::default(),
            active_color: color_from_argb(0xFF00_00FF),
            inactive_color: color_from_argb(0xFF88_8888),
            minimum_value: 0,
            rounded_radius: 10.0,
            dot_margin: 10.0,
            start_color: None,
            end_color: None,
            selected_border_color: None,
            selected_border_width: 3.0,
        }
    }
}

impl Config {
    /// Gradient mode is active only when both endpoints are set.
    pub fn is_gradient(&self) -> bool {
        self.start_color.is_some() && self.end_color.is_some()
    }

    /// Both gradient endpoints, when gradient mode is active.
    pub fn gradient(&self) -> Option<(Color, Color)> {
        self.start_color.zip(self.end_color)
    }

    /// The sentinel selected position meaning "nothing selected".
    pub fn no_position(&self) -> i32 {
        self.minimum_value - 1
    }

    /// Fill color for the dot at `index` given the current selection.
    ///
    /// `gradient` is the per-slot color list computed for gradient mode and
    /// empty otherwise.
    pub fn fill_color(&self, index: usize, selected: i32, gradient: &[Color]) -> Color {
        let i = index as i32;
        if i > selected && i >= self.minimum_value {
            self.inactive_color
        } else if let Some(color) = gradient.get(index) {
            *color
        } else {
            self.active_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacking() {
        let blue = color_from_argb(0xFF00_00FF);
        assert_eq!((blue.r, blue.g, blue.b, blue.a), (0.0, 0.0, 1.0, 1.0));

        let translucent_red = color_from_argb(0x80FF_0000);
        assert_eq!(translucent_red.r, 1.0);
        assert!((translucent_red.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn empty_bag_resolves_to_defaults() {
        assert_eq!(Attributes::default().resolve(), Ok(Config::default()));
    }

    #[test]
    fn partial_bag_keeps_remaining_defaults() {
        let attributes: Attributes =
            serde_json::from_str(r#"{ "style": 4, "dot_count": 6 }"#).unwrap();
        let config = attributes.resolve().unwrap();

        assert_eq!(config.style, DotStyle::Triangle);
        assert_eq!(config.dot_count, 6);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.minimum_value, 0);
        assert_eq!(config.dot_margin, 10.0);
    }

    #[test]
    fn invalid_raw_style_fails_to_resolve() {
        let attributes = Attributes {
            style: Some(6),
            ..Attributes::default()
        };
        assert_eq!(attributes.resolve(), Err(ConfigError::InvalidStyle(6)));

        let attributes = Attributes {
            orientation: Some(2),
            ..Attributes::default()
        };
        assert_eq!(
            attributes.resolve(),
            Err(ConfigError::InvalidOrientation(2))
        );
    }

    #[test]
    fn gradient_mode_needs_both_endpoints() {
        let mut config = Config::default();
        assert!(!config.is_gradient());

        config.start_color = Some(Color::from_rgb(1.0, 0.0, 0.0));
        assert!(!config.is_gradient());
        assert_eq!(config.gradient(), None);

        config.end_color = Some(Color::from_rgb(0.0, 0.0, 1.0));
        assert!(config.is_gradient());
    }

    #[test]
    fn fill_color_selection_rule() {
        let config = Config {
            minimum_value: 2,
            ..Config::default()
        };
        let selected = 4;

        // At or below the selection: active.
        assert_eq!(config.fill_color(4, selected, &[]), config.active_color);
        assert_eq!(config.fill_color(3, selected, &[]), config.active_color);
        // Beyond the selection: inactive.
        assert_eq!(config.fill_color(5, selected, &[]), config.inactive_color);
        // Below the minimum value dots always render active.
        assert_eq!(
            config.fill_color(1, config.no_position(), &[]),
            config.active_color
        );
        assert_eq!(
            config.fill_color(2, config.no_position(), &[]),
            config.inactive_color
        );
    }

    #[test]
    fn fill_color_prefers_gradient_list() {
        let config = Config::default();
        let gradient = [Color::from_rgb(0.25, 0.0, 0.75)];
        assert_eq!(config.fill_color(0, 0, &gradient), gradient[0]);
    }
}
