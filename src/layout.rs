//! Slot layout, gradient colors and hit testing.
//!
//! The layout is a pure function of the configuration and the widget bounds:
//! one square slot per dot, evenly margined along the primary axis, full
//! extent along the cross axis. Nothing here touches the renderer, so every
//! rule is unit testable.

use iced::{Color, Point, Rectangle, Size};
use thiserror::Error;

use crate::config::Config;
use crate::style::Orientation;

/// Configuration states that only surface once slots are computed.
///
/// These are programming errors of the embedding application, not runtime
/// conditions to recover from; they are reported lazily, at the next pass
/// that needs a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("minimum value {minimum} exceeds dot count {dot_count}")]
    MinimumExceedsDotCount { minimum: i32, dot_count: u16 },
    #[error("dot count must be at least 1")]
    NoDots,
}

/// The slot rectangles for one pass, in draw order, plus the uniform dot
/// size they were computed for.
///
/// Recomputed from the current bounds and configuration on demand, never
/// cached across passes.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLayout {
    pub slots: Vec<Rectangle>,
    pub dot_width: f32,
}

/// Compute the slot layout for the given widget size.
///
/// `dot_width = min(primary / dot_count, secondary)` keeps each slot square
/// and bounded by the cross axis; the remaining primary-axis space is split
/// into `dot_count + 1` equal gaps before, between and after the dots.
/// Horizontal bars run left to right, vertical bars bottom to top.
pub fn slots(config: &Config, size: Size) -> Result<SlotLayout, LayoutError> {
    if config.dot_count == 0 {
        return Err(LayoutError::NoDots);
    }
    if config.minimum_value > i32::from(config.dot_count) {
        return Err(LayoutError::MinimumExceedsDotCount {
            minimum: config.minimum_value,
            dot_count: config.dot_count,
        });
    }

    let count = f32::from(config.dot_count);
    let mut slots = Vec::with_capacity(usize::from(config.dot_count));

    let dot_width = match config.orientation {
        Orientation::Horizontal => {
            let dot_width = (size.width / count).min(size.height);
            let margin = (size.width - dot_width * count) / (count + 1.0);

            let mut x = margin;
            for _ in 0..config.dot_count {
                slots.push(Rectangle {
                    x,
                    y: 0.0,
                    width: dot_width,
                    height: size.height,
                });
                x += dot_width + margin;
            }

            dot_width
        }
        Orientation::Vertical => {
            let dot_width = (size.height / count).min(size.width);
            let margin = (size.height - dot_width * count) / (count + 1.0);

            let mut y = size.height - margin - dot_width;
            for _ in 0..config.dot_count {
                slots.push(Rectangle {
                    x: 0.0,
                    y,
                    width: size.width,
                    height: dot_width,
                });
                y -= dot_width + margin;
            }

            dot_width
        }
    };

    Ok(SlotLayout { slots, dot_width })
}

/// Per-slot fill colors for gradient mode.
///
/// The slot at index `i` gets the color at fraction `(i + 1) / dot_count`
/// between the endpoints, interpolated linearly per ARGB component.
pub fn gradient_colors(start: Color, end: Color, dot_count: u16) -> Vec<Color> {
    let count = f32::from(dot_count);
    (1..=dot_count)
        .map(|i| lerp(start, end, f32::from(i) / count))
        .collect()
}

fn lerp(start: Color, end: Color, fraction: f32) -> Color {
    Color {
        r: start.r + (end.r - start.r) * fraction,
        g: start.g + (end.g - start.g) * fraction,
        b: start.b + (end.b - start.b) * fraction,
        a: start.a + (end.a - start.a) * fraction,
    }
}

/// Map a pointer position (widget-local) to a selected position.
///
/// The pointer is projected onto the primary axis. The cross axis is pinned
/// to the widget center, so containment only depends on the axis that
/// matters. The first slot containing the point wins. It reports its own
/// index when the point sits in the slot's active half, meaning past the
/// leading edge with a one pixel tolerance, and the previous index
/// otherwise. A point outside every slot leaves the selection at `current`.
pub fn hit_test(
    layout: &SlotLayout,
    orientation: Orientation,
    size: Size,
    position: Point,
    current: i32,
) -> i32 {
    let point = match orientation {
        Orientation::Horizontal => Point::new(position.x, size.height / 2.0),
        Orientation::Vertical => Point::new(size.width / 2.0, position.y),
    };

    for (index, slot) in layout.slots.iter().enumerate() {
        if !slot.contains(point) {
            continue;
        }

        let active = match orientation {
            Orientation::Horizontal => point.x > slot.x + 1.0,
            Orientation::Vertical => point.y < slot.y + slot.height + 1.0,
        };

        return if active { index as i32 } else { index as i32 - 1 };
    }

    current
}
