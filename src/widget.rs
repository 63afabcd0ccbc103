//! The dot seek bar widget.
//!
//! A discrete seek bar rendered as one shaped dot per step. Pressing or
//! dragging across the bar moves the selected position and publishes a
//! 1-based progress message. Optional messages mark the start and end of a
//! tracking gesture.
//!
//! The widget owns its selected position. It lives in the widget tree state
//! and survives view rebuilds, so the embedding application only has to
//! listen for progress messages.

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Renderer as _, Shell, Widget};
use iced::mouse;
use iced::touch;
use iced::widget::canvas;
use iced::{Color, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};

use crate::config::Config;
use crate::layout as slot_layout;
use crate::layout::SlotLayout;
use crate::shape::{self, Outline};
use crate::style::{DotStyle, Orientation};

/// A segmented, discrete-step seek bar.
pub struct DotSeekBar<'a, Message> {
    config: Config,
    width: Option<Length>,
    height: Option<Length>,
    on_change: Box<dyn Fn(i32) -> Message + 'a>,
    on_start: Option<Message>,
    on_stop: Option<Message>,
}

impl<'a, Message> DotSeekBar<'a, Message>
where
    Message: Clone,
{
    /// Cross-axis extent used when no explicit width/height is set.
    pub const DEFAULT_CROSS_EXTENT: f32 = 48.0;

    /// Create a bar with the default configuration.
    ///
    /// `on_change` receives the 1-based progress (`selected position + 1`)
    /// whenever the selection moves.
    pub fn new<F>(on_change: F) -> Self
    where
        F: 'a + Fn(i32) -> Message,
    {
        Self::with_config(Config::default(), on_change)
    }

    /// Create a bar from an already resolved configuration.
    pub fn with_config<F>(config: Config, on_change: F) -> Self
    where
        F: 'a + Fn(i32) -> Message,
    {
        Self {
            config,
            width: None,
            height: None,
            on_change: Box::new(on_change),
            on_start: None,
            on_stop: None,
        }
    }

    /// Message published when a tracking gesture starts.
    pub fn on_start(mut self, message: Message) -> Self {
        self.on_start = Some(message);
        self
    }

    /// Message published when a tracking gesture ends.
    pub fn on_stop(mut self, message: Message) -> Self {
        self.on_stop = Some(message);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn dot_count(mut self, count: u16) -> Self {
        self.config.dot_count = count;
        self
    }

    pub fn style(mut self, style: DotStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.config.active_color = color;
        self
    }

    pub fn inactive_color(mut self, color: Color) -> Self {
        self.config.inactive_color = color;
        self
    }

    /// Floor of the selectable range. Changing it resets the selection to
    /// the "nothing selected" sentinel (`value - 1`).
    pub fn minimum_value(mut self, value: i32) -> Self {
        self.config.minimum_value = value;
        self
    }

    pub fn rounded_radius(mut self, radius: f32) -> Self {
        self.config.rounded_radius = radius;
        self
    }

    pub fn dot_margin(mut self, margin: f32) -> Self {
        self.config.dot_margin = margin;
        self
    }

    /// Fill the dots with a linear gradient between `start` and `end`
    /// instead of the flat active color.
    pub fn gradient(mut self, start: Color, end: Color) -> Self {
        self.config.start_color = Some(start);
        self.config.end_color = Some(end);
        self
    }

    /// Stroke a nested border inside the selected dot.
    pub fn selected_border(mut self, color: Color, width: f32) -> Self {
        self.config.selected_border_color = Some(color);
        self.config.selected_border_width = width;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Explicit sizes win; otherwise the bar fills the primary axis and
    /// takes a fixed cross-axis extent.
    fn resolved_size(&self) -> (Length, Length) {
        let (width, height) = match self.config.orientation {
            Orientation::Horizontal => (
                Length::Fill,
                Length::Fixed(Self::DEFAULT_CROSS_EXTENT),
            ),
            Orientation::Vertical => (
                Length::Fixed(Self::DEFAULT_CROSS_EXTENT),
                Length::Fill,
            ),
        };
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    /// Handle a pointer press at `position`.
    ///
    /// Publishes the start message, runs an immediate hit test, enters
    /// tracking and reports the (possibly unchanged) progress. Returns
    /// false when the configuration has no valid layout; invalid
    /// configurations are reported by the draw pass and input is ignored
    /// until the configuration is fixed.
    fn press(
        &self,
        state: &mut State,
        bounds: Rectangle,
        position: Point,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let Ok(slots) = slot_layout::slots(&self.config, bounds.size()) else {
            return false;
        };

        tracing::trace!("dot seek bar: tracking started");
        if let Some(message) = self.on_start.clone() {
            shell.publish(message);
        }

        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        self.track(state, &slots, bounds.size(), local, shell, true);

        state.is_tracking = true;
        true
    }

    /// Handle a tracked pointer move at `position`.
    fn drag(
        &self,
        state: &mut State,
        bounds: Rectangle,
        position: Point,
        shell: &mut Shell<'_, Message>,
    ) {
        let Ok(slots) = slot_layout::slots(&self.config, bounds.size()) else {
            return;
        };

        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        self.track(state, &slots, bounds.size(), local, shell, false);
    }

    /// Run a hit test and fold the result into the tracked selection.
    ///
    /// Every accepted hit reports the 1-based progress, whether or not the
    /// selection moved. A rejected hit (below the sentinel) stays silent on
    /// moves; `always_notify` makes it report the unchanged progress too,
    /// which is the behavior on press.
    fn track(
        &self,
        state: &mut State,
        layout: &SlotLayout,
        size: Size,
        position: Point,
        shell: &mut Shell<'_, Message>,
        always_notify: bool,
    ) {
        let hit = slot_layout::hit_test(
            layout,
            self.config.orientation,
            size,
            position,
            state.selected,
        );

        if let Some(next) = accept_hit(hit, self.config.minimum_value) {
            if next != state.selected {
                state.selected = next;
                shell.request_redraw();
            }
            shell.publish((self.on_change)(state.selected + 1));
        } else if always_notify {
            shell.publish((self.on_change)(state.selected + 1));
        }
    }
}

/// A hit result is folded into the selection only when it is at least the
/// "nothing selected" sentinel (`minimum_value - 1`).
fn accept_hit(hit: i32, minimum_value: i32) -> Option<i32> {
    (hit >= minimum_value - 1).then_some(hit)
}

impl<Message> Widget<Message, Theme, iced::Renderer> for DotSeekBar<'_, Message>
where
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.config.minimum_value))
    }

    fn size(&self) -> Size<Length> {
        let (width, height) = self.resolved_size();
        Size { width, height }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let (width, height) = self.resolved_size();
        layout::atomic(limits, width, height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        if state.sync_minimum(self.config.minimum_value) {
            shell.request_redraw();
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    if self.press(state, bounds, position, shell) {
                        shell.capture_event();
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.is_tracking {
                    if let Some(position) = cursor.land().position() {
                        self.drag(state, bounds, position, shell);
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_tracking {
                    tracing::trace!("dot seek bar: tracking stopped");
                    state.is_tracking = false;
                    if let Some(message) = self.on_stop.clone() {
                        shell.publish(message);
                    }
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let selected = state.selected_for(self.config.minimum_value);

        let slots = match slot_layout::slots(&self.config, bounds.size()) {
            Ok(slots) => slots,
            Err(err) => {
                tracing::error!("dot seek bar has an invalid configuration: {err}");
                return;
            }
        };

        let gradient = match self.config.gradient() {
            Some((start, end)) => {
                slot_layout::gradient_colors(start, end, self.config.dot_count)
            }
            None => Vec::new(),
        };

        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for (index, slot) in slots.slots.iter().enumerate() {
            let fill = self.config.fill_color(index, selected, &gradient);
            let outline = shape::fill_outline(&self.config, *slot, slots.dot_width);
            frame.fill(&path(&outline), fill);

            if index as i32 == selected {
                if let Some(border_color) = self.config.selected_border_color {
                    let border = shape::border_outline(&self.config, *slot, slots.dot_width);
                    frame.stroke(
                        &path(&border),
                        canvas::Stroke::default()
                            .with_width(self.config.selected_border_width)
                            .with_color(border_color),
                    );
                }
            }
        }

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
            renderer.draw_geometry(frame.into_geometry());
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_tracking {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<DotSeekBar<'a, Message>> for Element<'a, Message, Theme, iced::Renderer>
where
    Message: Clone + 'a,
{
    fn from(seek_bar: DotSeekBar<'a, Message>) -> Self {
        Element::new(seek_bar)
    }
}

fn path(outline: &Outline) -> canvas::Path {
    match outline {
        Outline::Circle { center, radius } => canvas::Path::circle(*center, *radius),
        Outline::RoundedRectangle {
            top_left,
            size,
            radius,
        } => canvas::Path::rounded_rectangle(*top_left, *size, (*radius).into()),
        Outline::Rectangle { top_left, size } => canvas::Path::rectangle(*top_left, *size),
        Outline::Polygon(points) => canvas::Path::new(|builder| {
            if let Some((first, rest)) = points.split_first() {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
                builder.close();
            }
        }),
    }
}

/// Interaction state kept in the widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    /// Selected position; `minimum - 1` means nothing selected.
    selected: i32,
    is_tracking: bool,
    /// The minimum value the selection was computed against.
    minimum: i32,
}

impl State {
    fn new(minimum: i32) -> Self {
        Self {
            selected: minimum - 1,
            is_tracking: false,
            minimum,
        }
    }

    /// A changed minimum value resets the selection to the new sentinel.
    /// Returns whether anything changed.
    fn sync_minimum(&mut self, minimum: i32) -> bool {
        if self.minimum == minimum {
            return false;
        }
        self.minimum = minimum;
        self.selected = minimum - 1;
        true
    }

    /// The selection to draw with, falling back to the sentinel while the
    /// state has not caught up with a changed minimum value yet.
    fn selected_for(&self, minimum: i32) -> i32 {
        if self.minimum == minimum {
            self.selected
        } else {
            minimum - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Message {
        Started,
        Stopped,
        Progress(i32),
    }

    fn bounds() -> Rectangle {
        // 10 default dots tile this contiguously at 50px each.
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 500.0,
            height: 50.0,
        }
    }

    #[test]
    fn hit_within_range_is_accepted() {
        assert_eq!(accept_hit(5, 0), Some(5));
        assert_eq!(accept_hit(0, 0), Some(0));
    }

    #[test]
    fn repeated_hit_is_accepted_again() {
        // A hit equal to the current selection still reports progress.
        assert_eq!(accept_hit(3, 0), Some(3));
    }

    #[test]
    fn hit_may_clear_to_the_sentinel_but_not_below() {
        // The sentinel itself (minimum - 1) is a valid target...
        assert_eq!(accept_hit(-1, 0), Some(-1));
        assert_eq!(accept_hit(2, 3), Some(2));
        // ...anything below it is not.
        assert_eq!(accept_hit(-2, 0), None);
        assert_eq!(accept_hit(1, 3), None);
    }

    #[test]
    fn reported_progress_is_one_based_and_bounded() {
        let dot_count = 10;
        for hit in 0..dot_count {
            if let Some(next) = accept_hit(hit, 0) {
                let progress = next + 1;
                assert!((1..=dot_count).contains(&progress));
            }
        }
    }

    #[test]
    fn press_reports_start_then_one_based_progress() {
        let bar = DotSeekBar::new(Message::Progress)
            .on_start(Message::Started)
            .on_stop(Message::Stopped);
        let mut state = State::new(0);
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            // Slot 3's active half.
            let pressed = bar.press(&mut state, bounds(), Point::new(175.0, 25.0), &mut shell);
            assert!(pressed);
        }

        assert!(state.is_tracking);
        assert_eq!(state.selected, 3);
        assert_eq!(messages, vec![Message::Started, Message::Progress(4)]);
    }

    #[test]
    fn tracked_moves_report_every_accepted_hit() {
        let bar = DotSeekBar::new(Message::Progress);
        let mut state = State::new(0);
        state.is_tracking = true;
        state.selected = 3;
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            // Still over slot 3: the selection does not move, the progress
            // is reported anyway.
            bar.drag(&mut state, bounds(), Point::new(175.0, 25.0), &mut shell);
            // Over slot 4.
            bar.drag(&mut state, bounds(), Point::new(225.0, 25.0), &mut shell);
        }

        assert_eq!(state.selected, 4);
        assert_eq!(
            messages,
            vec![Message::Progress(4), Message::Progress(5)]
        );
    }

    #[test]
    fn press_fails_without_a_valid_layout() {
        let bar = DotSeekBar::new(Message::Progress).dot_count(0);
        let mut state = State::new(0);
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            let pressed = bar.press(&mut state, bounds(), Point::new(175.0, 25.0), &mut shell);
            assert!(!pressed);
        }

        assert!(!state.is_tracking);
        assert!(messages.is_empty());
    }

    #[test]
    fn fresh_state_has_nothing_selected() {
        assert_eq!(State::new(0).selected, -1);
        assert_eq!(State::new(3).selected, 2);
    }

    #[test]
    fn changing_the_minimum_resets_the_selection() {
        let mut state = State::new(0);
        state.selected = 7;

        assert!(state.sync_minimum(3));
        assert_eq!(state.selected, 2);
        // Same value again is a no-op.
        assert!(!state.sync_minimum(3));
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn stale_state_draws_with_the_sentinel() {
        let mut state = State::new(0);
        state.selected = 7;

        assert_eq!(state.selected_for(0), 7);
        assert_eq!(state.selected_for(4), 3);
    }
}
