//! Dot shape and orientation attributes.
//!
//! Both attributes were historically encoded as small integers in attribute
//! bags; [`TryFrom<u8>`] keeps that encoding available for configuration
//! files while the rest of the crate matches exhaustively on the enums.

use std::fmt;

use thiserror::Error;

/// Errors produced while resolving raw widget attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The raw style value is outside the six recognized shapes (0-5).
    #[error("invalid style: {0}")]
    InvalidStyle(u8),
    /// The raw orientation value is not horizontal (0) or vertical (1).
    #[error("invalid orientation: {0}")]
    InvalidOrientation(u8),
}

/// The shape drawn for every dot of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotStyle {
    #[default]
    Circular,
    RoundedRectangle,
    Diamond,
    Rectangle,
    Triangle,
    Hexagon,
}

impl DotStyle {
    /// All shapes, in raw-attribute order.
    pub const ALL: [DotStyle; 6] = [
        DotStyle::Circular,
        DotStyle::RoundedRectangle,
        DotStyle::Diamond,
        DotStyle::Rectangle,
        DotStyle::Triangle,
        DotStyle::Hexagon,
    ];
}

impl TryFrom<u8> for DotStyle {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DotStyle::Circular),
            1 => Ok(DotStyle::RoundedRectangle),
            2 => Ok(DotStyle::Diamond),
            3 => Ok(DotStyle::Rectangle),
            4 => Ok(DotStyle::Triangle),
            5 => Ok(DotStyle::Hexagon),
            other => Err(ConfigError::InvalidStyle(other)),
        }
    }
}

impl fmt::Display for DotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DotStyle::Circular => "Circular",
            DotStyle::RoundedRectangle => "Rounded rectangle",
            DotStyle::Diamond => "Diamond",
            DotStyle::Rectangle => "Rectangle",
            DotStyle::Triangle => "Triangle",
            DotStyle::Hexagon => "Hexagon",
        })
    }
}

/// The axis the dots are laid out along.
///
/// Horizontal bars run left to right, vertical bars bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl TryFrom<u8> for Orientation {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            other => Err(ConfigError::InvalidOrientation(other)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_raw_encoding_round_trips() {
        for (raw, style) in DotStyle::ALL.iter().enumerate() {
            assert_eq!(DotStyle::try_from(raw as u8), Ok(*style));
        }
    }

    #[test]
    fn style_out_of_range_is_rejected() {
        assert_eq!(DotStyle::try_from(6), Err(ConfigError::InvalidStyle(6)));
        assert_eq!(DotStyle::try_from(255), Err(ConfigError::InvalidStyle(255)));
    }

    #[test]
    fn orientation_raw_encoding() {
        assert_eq!(Orientation::try_from(0), Ok(Orientation::Horizontal));
        assert_eq!(Orientation::try_from(1), Ok(Orientation::Vertical));
        assert_eq!(
            Orientation::try_from(2),
            Err(ConfigError::InvalidOrientation(2))
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(DotStyle::default(), DotStyle::Circular);
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }
}
