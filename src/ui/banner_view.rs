// SPDX-License-Identifier: MPL-2.0
//! Banner widgets.
//!
//! Banners are drawn as full-width cards stacked against their home edge.
//! A card slides by clipping: the visible slice grows with the reveal
//! fraction, and spring overshoot past the resting position is shown as a
//! gap between the edge and the card.

use crate::application::port::{Anchor, AnimationPhase, LayoutRequest};
use crate::banner::{Banner, BannerManager};
use crate::domain::banner::{BannerId, Edge, Rgba};
use crate::infrastructure::TickHost;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::spring;
use iced::font::Weight;
use iced::widget::{container, image, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Font, Length, Point, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Pressed(BannerId),
    Moved(BannerId, Point),
    Released(BannerId),
}

/// How much of a card is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Height of the visible slice.
    pub visible: f32,
    /// Gap between the edge and a card that sprang past its resting spot.
    pub overshoot: f32,
}

impl Frame {
    /// Computes the slice for a card of `height` whose outer `inset` stays
    /// past the edge at rest.
    #[must_use]
    pub fn new(reveal: f32, height: f32, inset: f32) -> Self {
        let rest = (height - inset).max(0.0);
        let travelled = height * reveal - inset;
        Self {
            visible: travelled.clamp(0.0, rest),
            overshoot: (height * (reveal - 1.0)).max(0.0),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visible <= 0.0 && self.overshoot <= 0.0
    }
}

/// Reveal fraction of a banner: `0.0` hidden, `1.0` resting, above one
/// while overshooting. `None` when the banner is not attached.
#[must_use]
pub fn reveal(host: &TickHost, banner: BannerId) -> Option<f32> {
    let placement = host.layout().placement(banner)?;
    let fraction = match host.timeline().progress(banner) {
        Some(progress) => match progress.request.ticket.phase() {
            AnimationPhase::Entrance => {
                spring::displacement(progress.fraction, progress.request.spring)
            }
            AnimationPhase::Exit => {
                1.0 - spring::displacement(progress.fraction, progress.request.spring)
            }
        },
        None => match placement.anchor() {
            Anchor::Showing => 1.0,
            Anchor::Hidden => 0.0,
        },
    };
    Some(fraction)
}

/// Full card height for a placement, status bar room included.
#[must_use]
pub fn card_height(request: Option<LayoutRequest>) -> f32 {
    let Some(request) = request else {
        return sizing::BANNER_HEIGHT;
    };
    let status_bar = if request.status_bar_inset {
        sizing::STATUS_BAR_HEIGHT
    } else {
        0.0
    };
    sizing::BANNER_HEIGHT + request.inset + status_bar
}

/// Converts a toolkit-free color to an iced color.
#[must_use]
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Renders one banner, or nothing if it is not attached or fully hidden.
pub fn view<'a>(banner: &'a Banner, host: &TickHost) -> Option<Element<'a, Message>> {
    let id = banner.id();
    let placement = host.layout().placement(id)?;
    let request = placement.request;
    let height = card_height(request);
    let inset = request.map_or(0.0, |r| r.inset);
    let frame = Frame::new(reveal(host, id)?, height, inset);
    if frame.is_hidden() {
        return None;
    }

    let card = card(banner, request, height);
    let vertical = match placement.edge {
        Edge::Top => alignment::Vertical::Bottom,
        Edge::Bottom => alignment::Vertical::Top,
    };
    let slice = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fixed(frame.visible))
        .align_y(vertical)
        .clip(true);

    let interactive = mouse_area(slice)
        .on_press(Message::Pressed(id))
        .on_release(Message::Released(id))
        .on_move(move |point| Message::Moved(id, point));

    let gap = Space::new()
        .width(Length::Fill)
        .height(Length::Fixed(frame.overshoot));
    let column = match placement.edge {
        Edge::Top => Column::new().push(gap).push(interactive),
        Edge::Bottom => Column::new().push(interactive).push(gap),
    };
    Some(column.into())
}

/// Renders every presented or leaving banner of `manager`, top banners
/// against the top edge and bottom banners against the bottom edge.
pub fn view_overlay<'a>(manager: &'a BannerManager, host: &TickHost) -> Element<'a, Message> {
    let mut top = Column::new();
    let mut bottom = Column::new();
    for banner in manager.banners() {
        let Some(element) = view(banner, host) else {
            continue;
        };
        match banner.style().edge {
            Edge::Top => top = top.push(element),
            // Newer bottom banners sit closest to the edge
            Edge::Bottom => bottom = Column::new().push(element).push(bottom),
        }
    }

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top)
        .push(Space::new().width(Length::Fill).height(Length::Fill))
        .push(bottom)
        .into()
}

fn card<'a>(banner: &'a Banner, request: Option<LayoutRequest>, height: f32) -> Element<'a, Message> {
    let content = banner.content();
    let style = *banner.style();

    let mut text_column = Column::new().spacing(spacing::XXS);
    if let Some(title) = content.title() {
        text_column = text_column.push(Text::new(title).size(typography::TITLE_SM).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }));
    }
    if let Some(subtitle) = content.subtitle() {
        text_column = text_column.push(Text::new(subtitle).size(typography::BODY));
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let Some(image_ref) = content.image() {
        row = row.push(
            image(image_ref.path())
                .width(Length::Fixed(sizing::BANNER_IMAGE))
                .height(Length::Fixed(sizing::BANNER_IMAGE)),
        );
    }
    row = row.push(text_column.width(Length::Fill));

    // The inset strip and status bar room sit on the edge side of the card.
    let (inset, status_bar) = request.map_or((0.0, false), |r| (r.inset, r.status_bar_inset));
    let edge_padding = inset
        + if status_bar {
            sizing::STATUS_BAR_HEIGHT
        } else {
            0.0
        };
    let padding = match style.edge {
        Edge::Top => iced::Padding {
            top: edge_padding,
            right: spacing::MD,
            bottom: spacing::XS,
            left: spacing::MD,
        },
        Edge::Bottom => iced::Padding {
            top: spacing::XS,
            right: spacing::MD,
            bottom: edge_padding,
            left: spacing::MD,
        },
    };

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(padding)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| card_style(theme, style))
        .into()
}

fn card_style(_theme: &Theme, style: crate::domain::banner::BannerStyle) -> container::Style {
    let background = Color {
        a: style.background.a * style.opacity.value(),
        ..to_color(style.background)
    };
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: if style.has_shadow {
            shadow::BANNER
        } else {
            shadow::NONE
        },
        text_color: Some(to_color(style.text_color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SHADOW_INSET;
    use crate::banner::ShowOptions;
    use crate::domain::banner::{BannerContent, BannerStyle, Springiness};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    #[test]
    fn frame_at_rest_hides_the_inset_strip() {
        let frame = Frame::new(1.0, 100.0, SHADOW_INSET);
        assert_abs_diff_eq!(frame.visible, 100.0 - SHADOW_INSET, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.overshoot, 0.0);
    }

    #[test]
    fn frame_when_hidden_shows_nothing() {
        let frame = Frame::new(0.0, 100.0, SHADOW_INSET);
        assert!(frame.is_hidden());
    }

    #[test]
    fn frame_overshoot_opens_a_gap() {
        let frame = Frame::new(1.05, 100.0, SHADOW_INSET);
        assert_abs_diff_eq!(frame.visible, 100.0 - SHADOW_INSET, epsilon = 1e-4);
        assert_abs_diff_eq!(frame.overshoot, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn card_height_adds_status_bar_room_only_when_requested() {
        let mut request = LayoutRequest {
            anchor: Anchor::Showing,
            edge: Edge::Top,
            inset: SHADOW_INSET,
            status_bar_inset: false,
        };
        assert_abs_diff_eq!(card_height(Some(request)), sizing::BANNER_HEIGHT + SHADOW_INSET);
        request.status_bar_inset = true;
        assert_abs_diff_eq!(
            card_height(Some(request)),
            sizing::BANNER_HEIGHT + SHADOW_INSET + sizing::STATUS_BAR_HEIGHT
        );
    }

    #[test]
    fn reveal_follows_the_lifecycle() {
        let mut host = TickHost::with_surface();
        let mut banner = Banner::new(BannerContent::titled("Saved")).springiness(Springiness::None);
        let id = banner.id();
        assert_eq!(reveal(&host, id), None);

        banner.show(&mut host.platform(), ShowOptions::default());
        assert_abs_diff_eq!(reveal(&host, id).unwrap_or(-1.0), 0.0);

        host.advance_with(Duration::from_millis(200), |event, platform| {
            banner.handle_event(event, platform);
        });
        let midway = reveal(&host, id).unwrap_or(-1.0);
        assert!(midway > 0.0 && midway < 1.0, "midway reveal was {midway}");

        host.advance_with(Duration::from_millis(200), |event, platform| {
            banner.handle_event(event, platform);
        });
        assert_abs_diff_eq!(reveal(&host, id).unwrap_or(-1.0), 1.0);

        banner.dismiss(&mut host.platform());
        assert_abs_diff_eq!(reveal(&host, id).unwrap_or(-1.0), 1.0);
        host.advance_with(Duration::from_millis(400), |event, platform| {
            banner.handle_event(event, platform);
        });
        assert_eq!(reveal(&host, id), None);
    }

    #[test]
    fn exit_reveal_follows_the_banner_spring() {
        let mut host = TickHost::with_surface();
        let mut banner = Banner::new(BannerContent::titled("Bye")).springiness(Springiness::Heavy);
        let id = banner.id();
        banner.show(&mut host.platform(), ShowOptions::default());
        host.advance_with(Duration::from_millis(400), |event, platform| {
            banner.handle_event(event, platform);
        });

        banner.dismiss(&mut host.platform());
        host.advance_with(Duration::from_millis(100), |event, platform| {
            banner.handle_event(event, platform);
        });

        let expected = 1.0 - spring::displacement(0.25, Springiness::Heavy.spring_parameters());
        let actual = reveal(&host, id).unwrap_or(f32::NAN);
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-4);
        // A heavy spring carries the card past its hidden position.
        assert!(actual < 0.0, "exit reveal was {actual}");
    }

    #[test]
    fn card_style_applies_opacity_and_shadow() {
        let style = BannerStyle {
            has_shadow: false,
            ..BannerStyle::default()
        };
        let rendered = card_style(&Theme::Dark, style);

        let Some(iced::Background::Color(background)) = rendered.background else {
            panic!("expected a solid background");
        };
        assert_abs_diff_eq!(background.a, style.opacity.value(), epsilon = F32_EPSILON);
        assert_eq!(rendered.shadow, shadow::NONE);
        assert_eq!(rendered.text_color, Some(Color::WHITE));
    }

    #[test]
    fn to_color_keeps_channels() {
        let color = to_color(Rgba::from_rgb8(255, 204, 51));
        assert_abs_diff_eq!(color.r, 1.0);
        assert_abs_diff_eq!(color.g, 0.8, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(color.a, 1.0);
    }
}
