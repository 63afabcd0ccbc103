//! A segmented, discrete-step seek bar widget for [iced].
//!
//! [`DotSeekBar`] renders one geometric dot per step, laid out along a
//! horizontal or vertical axis. The dots can be circles, rounded
//! rectangles, diamonds, rectangles, triangles or hexagons. Pressing or
//! dragging across the bar moves an integer selected position and
//! publishes 1-based progress messages.
//!
//! ```no_run
//! use dot_seekbar::{DotSeekBar, DotStyle};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Volume(i32),
//! }
//!
//! let bar: iced::Element<'_, Message> = DotSeekBar::new(Message::Volume)
//!     .style(DotStyle::Hexagon)
//!     .dot_count(12)
//!     .into();
//! # let _ = bar;
//! ```
//!
//! [iced]: https://iced.rs

pub mod config;
pub mod layout;
pub mod shape;
pub mod style;
pub mod widget;

pub use config::{Attributes, Config, color_from_argb};
pub use layout::{LayoutError, SlotLayout};
pub use style::{ConfigError, DotStyle, Orientation};
pub use widget::DotSeekBar;
