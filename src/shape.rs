//! Outline geometry for the six dot shapes.
//!
//! Outlines are plain data derived from a slot rectangle and the uniform dot
//! size; converting them into renderer paths happens in the widget's draw
//! pass. Keeping the vertex math here makes it independent of any drawing
//! backend.

use iced::{Point, Rectangle, Size};

use crate::config::Config;
use crate::style::{DotStyle, Orientation};

const SQRT_3: f32 = 1.732_050_8;

/// A shape outline, ready to be filled or stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle {
        center: Point,
        radius: f32,
    },
    RoundedRectangle {
        top_left: Point,
        size: Size,
        radius: f32,
    },
    Rectangle {
        top_left: Point,
        size: Size,
    },
    /// Closed polygon, vertices in draw order.
    Polygon(Vec<Point>),
}

/// The filled outline for one slot.
pub fn fill_outline(config: &Config, slot: Rectangle, dot_width: f32) -> Outline {
    let center = slot.center();
    let half_margin = config.dot_margin / 2.0;
    let width = dot_width - half_margin;

    match config.style {
        DotStyle::Circular => Outline::Circle {
            center,
            radius: dot_width / 2.0 - half_margin,
        },
        DotStyle::RoundedRectangle => {
            let rect = inset_primary(slot, config.orientation, half_margin);
            Outline::RoundedRectangle {
                top_left: rect.position(),
                size: rect.size(),
                radius: config.rounded_radius,
            }
        }
        DotStyle::Rectangle => {
            let rect = inset_primary(slot, config.orientation, half_margin);
            Outline::Rectangle {
                top_left: rect.position(),
                size: rect.size(),
            }
        }
        DotStyle::Diamond => diamond(center, width),
        DotStyle::Triangle => triangle(center, width),
        DotStyle::Hexagon => hexagon(center, width),
    }
}

/// The nested outline stroked inside the selected slot's fill shape.
pub fn border_outline(config: &Config, slot: Rectangle, dot_width: f32) -> Outline {
    let center = slot.center();
    let half_margin = config.dot_margin / 2.0;
    let width = dot_width - half_margin;
    let border_width = config.selected_border_width;

    match config.style {
        DotStyle::Circular => Outline::Circle {
            center,
            radius: dot_width / 2.0 - half_margin - border_width / 2.0,
        },
        DotStyle::RoundedRectangle => {
            let rect = inset_all(
                inset_primary(slot, config.orientation, half_margin),
                border_width / 2.0,
            );
            Outline::RoundedRectangle {
                top_left: rect.position(),
                size: rect.size(),
                radius: config.rounded_radius,
            }
        }
        DotStyle::Rectangle => {
            let rect = inset_all(
                inset_primary(slot, config.orientation, half_margin),
                border_width / 2.0,
            );
            Outline::Rectangle {
                top_left: rect.position(),
                size: rect.size(),
            }
        }
        DotStyle::Diamond => diamond(center, width - border_width / 2.0),
        DotStyle::Triangle => triangle(center, width - border_width),
        DotStyle::Hexagon => hexagon(center, width - border_width),
    }
}

/// Shrink the slot by `amount` on both sides of the primary axis only; the
/// cross axis keeps its full extent.
fn inset_primary(rect: Rectangle, orientation: Orientation, amount: f32) -> Rectangle {
    match orientation {
        Orientation::Horizontal => Rectangle {
            x: rect.x + amount,
            y: rect.y,
            width: rect.width - 2.0 * amount,
            height: rect.height,
        },
        Orientation::Vertical => Rectangle {
            x: rect.x,
            y: rect.y + amount,
            width: rect.width,
            height: rect.height - 2.0 * amount,
        },
    }
}

fn inset_all(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: rect.x + amount,
        y: rect.y + amount,
        width: rect.width - 2.0 * amount,
        height: rect.height - 2.0 * amount,
    }
}

fn diamond(center: Point, width: f32) -> Outline {
    let half = width / 2.0;
    Outline::Polygon(vec![
        Point::new(center.x, center.y + half),
        Point::new(center.x - half, center.y),
        Point::new(center.x, center.y - half),
        Point::new(center.x + half, center.y),
    ])
}

fn triangle(center: Point, width: f32) -> Outline {
    let half = width / 2.0;
    Outline::Polygon(vec![
        Point::new(center.x, center.y - half),
        Point::new(center.x - half, center.y + half),
        Point::new(center.x + half, center.y + half),
    ])
}

/// Regular hexagon with flat top and bottom edges: vertical radius
/// `width / √3`, side columns offset by `√3 · radius / 2` from the center.
fn hexagon(center: Point, width: f32) -> Outline {
    let radius = width / SQRT_3;
    let offset = SQRT_3 * radius / 2.0;
    Outline::Polygon(vec![
        Point::new(center.x, center.y + radius),
        Point::new(center.x - offset, center.y + radius / 2.0),
        Point::new(center.x - offset, center.y - radius / 2.0),
        Point::new(center.x, center.y - radius),
        Point::new(center.x + offset, center.y - radius / 2.0),
        Point::new(center.x + offset, center.y + radius / 2.0),
    ])
}
