// SPDX-License-Identifier: MPL-2.0
//! Demo application showing banners over a window.
//!
//! The `App` owns a [`BannerManager`] and a [`TickHost`]. Buttons present
//! sample banners; while anything is animating or waiting on a timer, a
//! frame subscription advances the host by wall-clock time so completions
//! flow back into the manager on the UI thread.

mod message;

pub use message::{Flags, Message, Sample};

use crate::banner::{notice_channel, Banner, BannerManager, BannerNotice, NoticeSender, ShowOptions};
use crate::config::{self, Config};
use crate::domain::banner::BannerStyle;
use crate::infrastructure::TickHost;
use crate::ui::banner_view;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gesture::{Gesture, GestureTracker};
use crossbeam_channel::Receiver;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;

/// Interval between frame ticks while banners are moving.
const FRAME: Duration = Duration::from_millis(16);

/// Notices kept for the on-screen log.
const NOTICE_LOG_LEN: usize = 6;
const NOTICE_CAPACITY: usize = 64;

/// Root iced application state.
pub struct App {
    config: Config,
    manager: BannerManager,
    host: TickHost,
    gestures: GestureTracker,
    notice_tx: NoticeSender,
    notices: Receiver<BannerNotice>,
    notice_log: VecDeque<String>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banners", &self.manager.len())
            .field("showing", &self.manager.is_showing_any())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a reusable boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads persisted settings and applies command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Config::default()
        });
        (Self::with_config(config, flags), Task::none())
    }

    fn with_config(mut config: Config, flags: Flags) -> Self {
        if let Some(springiness) = flags.springiness {
            config.springiness = Some(springiness.into());
        }
        if let Some(secs) = flags.auto_dismiss_secs {
            config.auto_dismiss_secs = Some(secs);
        }
        if let Some(edge) = flags.edge {
            config.edge = Some(edge.into());
        }

        let (notice_tx, notices) = notice_channel(NOTICE_CAPACITY);
        Self {
            manager: BannerManager::with_policy(config.removal_policy()),
            config,
            host: TickHost::with_surface(),
            gestures: GestureTracker::new(),
            notice_tx,
            notices,
            notice_log: VecDeque::with_capacity(NOTICE_LOG_LEN),
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Banner")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(sample) => self.show_sample(sample),
            Message::DismissAll => self.manager.dismiss_all(&mut self.host.platform()),
            Message::Banner(message) => self.handle_banner_message(message),
            Message::Tick(now) => self.tick(now),
        }
        self.drain_notices();
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut buttons = Row::new().spacing(spacing::XS);
        for sample in Sample::ALL {
            buttons = buttons.push(
                button(Text::new(sample.label()).size(typography::BODY))
                    .height(sizing::BUTTON_HEIGHT)
                    .on_press(Message::Show(sample)),
            );
        }

        let dismiss_all = button(Text::new("Dismiss all").size(typography::BODY))
            .height(sizing::BUTTON_HEIGHT)
            .on_press_maybe(
                self.manager
                    .is_showing_any()
                    .then_some(Message::DismissAll),
            );

        let status = Text::new(format!(
            "{} banner(s) showing",
            self.manager.presented().count()
        ))
        .size(typography::CAPTION);

        let log = self
            .notice_log
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, line| {
                column.push(Text::new(line.as_str()).size(typography::CAPTION))
            });

        let controls = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(buttons)
                .push(dismiss_all)
                .push(status)
                .push(log),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let overlay = banner_view::view_overlay(&self.manager, &self.host).map(Message::Banner);

        Stack::new().push(controls).push(overlay).into()
    }

    fn show_sample(&mut self, sample: Sample) {
        let style = BannerStyle {
            background: sample.background(),
            ..self.config.style()
        };
        let banner = Banner::new(sample.content())
            .with_style(style)
            .with_behavior(self.config.behavior())
            .with_listener(self.notice_tx.clone());

        let id = self
            .manager
            .present(banner, &mut self.host.platform(), ShowOptions::default());
        tracing::debug!(banner = %id, ?sample, "sample banner presented");
    }

    fn handle_banner_message(&mut self, message: banner_view::Message) {
        match message {
            banner_view::Message::Moved(id, position) => self.gestures.moved(id, position),
            banner_view::Message::Pressed(id) => self.gestures.pressed(id),
            banner_view::Message::Released(id) => match self.gestures.released(id) {
                Some(Gesture::Tap(id)) => self.manager.tap(id, &mut self.host.platform()),
                Some(Gesture::Swipe(id, direction)) => {
                    self.manager
                        .swipe(id, direction, &mut self.host.platform());
                }
                None => {}
            },
        }
    }

    fn tick(&mut self, now: Instant) {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.host.advance(&mut self.manager, elapsed);
        // Restart timing from scratch once the subscription stops.
        self.last_tick = self.is_animating().then_some(now);
    }

    fn drain_notices(&mut self) {
        for notice in self.notices.try_iter() {
            tracing::info!(?notice, "banner notice");
            let line = match notice {
                BannerNotice::Tapped(id) => format!("{id} tapped"),
                BannerNotice::Dismissed(id) => format!("{id} dismissed"),
            };
            if self.notice_log.len() == NOTICE_LOG_LEN {
                self.notice_log.pop_front();
            }
            self.notice_log.push_back(line);
        }
    }

    /// Whether animations or timers are pending.
    fn is_animating(&self) -> bool {
        self.host.timeline().pending_len() > 0
    }
}
