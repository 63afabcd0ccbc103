//! Showcase application for the dot seek bar widget.
//!
//! Every shape and both orientations, plus gradient mode and the selection
//! border. Drag across a bar to move its selection.

use dot_seekbar::{DotSeekBar, DotStyle, Orientation};
use iced::widget::{column, container, pick_list, row, text};
use iced::{Element, Length, Task, Theme, color};

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("dot-seekbar gallery")
        .theme(Gallery::theme)
        .antialiasing(true)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    StyleSelected(DotStyle),
    OrientationSelected(Orientation),
    Progress(i32),
    TrackingStarted,
    TrackingStopped,
}

struct Gallery {
    style: DotStyle,
    orientation: Orientation,
    progress: Option<i32>,
    tracking: bool,
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                style: DotStyle::Circular,
                orientation: Orientation::Horizontal,
                progress: None,
                tracking: false,
            },
            Task::none(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StyleSelected(style) => self.style = style,
            Message::OrientationSelected(orientation) => self.orientation = orientation,
            Message::Progress(progress) => self.progress = Some(progress),
            Message::TrackingStarted => self.tracking = true,
            Message::TrackingStopped => self.tracking = false,
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            pick_list(DotStyle::ALL, Some(self.style), Message::StyleSelected),
            pick_list(
                Orientation::ALL,
                Some(self.orientation),
                Message::OrientationSelected
            ),
        ]
        .spacing(12);

        let bar = DotSeekBar::new(Message::Progress)
            .style(self.style)
            .orientation(self.orientation)
            .selected_border(color!(0xffffff), 3.0)
            .on_start(Message::TrackingStarted)
            .on_stop(Message::TrackingStopped);

        let gradient_bar = DotSeekBar::new(Message::Progress)
            .style(self.style)
            .orientation(self.orientation)
            .dot_count(16)
            .dot_margin(6.0)
            .gradient(color!(0xff3366), color!(0x3366ff));

        let bars: Element<'_, Message> = match self.orientation {
            Orientation::Horizontal => column![bar, gradient_bar].spacing(24).into(),
            Orientation::Vertical => row![bar, gradient_bar]
                .spacing(24)
                .height(Length::Fill)
                .into(),
        };

        let status = match self.progress {
            Some(progress) => text(format!(
                "progress: {progress}{}",
                if self.tracking { " (tracking)" } else { "" }
            )),
            None => text("drag across the dots"),
        };

        container(column![controls, bars, status].spacing(24))
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
