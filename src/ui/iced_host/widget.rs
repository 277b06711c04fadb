// SPDX-License-Identifier: MPL-2.0
//! Overlay widgets for the Iced host.
//!
//! Toasts render as small cards with a variant-colored accent border,
//! stacked per placement; modal dialogs render centered over a scrim that
//! dismisses on click.

use super::manager::{BodyView, ModalId, ModalView, Snapshot, ToastView};
use super::Message;
use crate::domain::notification::{Placement, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, center, container, mouse_area, opaque, space, text, text_input, Column,
    Container, Row, Stack,
};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Renders the full overlay: one layer per occupied placement, plus the
/// topmost modal.
pub(super) fn overlay(snapshot: Snapshot) -> Element<'static, Message> {
    let mut layers: Vec<Element<'static, Message>> = Vec::new();

    for placement in Placement::ALL {
        let cards: Vec<Element<'static, Message>> = snapshot
            .toasts
            .iter()
            .filter(|toast| toast.placement == placement)
            .map(|toast| toast_card(toast, is_full_width(placement)))
            .collect();
        if !cards.is_empty() {
            layers.push(placement_layer(placement, cards));
        }
    }

    if let Some(modal) = snapshot.modal {
        layers.push(modal_layer(modal));
    }

    if layers.is_empty() {
        // An empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Positions one placement's toast column inside a full-window container.
fn placement_layer(
    placement: Placement,
    cards: Vec<Element<'static, Message>>,
) -> Element<'static, Message> {
    let (horizontal, vertical) = alignment_for(placement);
    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Renders a single toast card.
fn toast_card(toast: &ToastView, full_width: bool) -> Element<'static, Message> {
    let id = toast.id;
    let accent = variant_color(toast.variant);
    let width = if full_width {
        Length::Fill
    } else {
        Length::Fixed(sizing::TOAST_WIDTH)
    };

    let title_text = text(toast.title.clone())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let content: Element<'static, Message> = match &toast.body {
        BodyView::Plain { message } => {
            // Title and body are both click targets; the close control is
            // separate.
            let header = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    mouse_area(Container::new(title_text).width(Length::Fill))
                        .on_press(Message::BodyPressed(id)),
                )
                .push(
                    button(text("\u{d7}").size(typography::BODY))
                        .on_press(Message::ClosePressed(id))
                        .padding(spacing::XXS)
                        .style(subtle_button_style),
                );

            let body = mouse_area(
                Container::new(text(message.clone()).size(typography::BODY_SM)).width(Length::Fill),
            )
            .on_press(Message::BodyPressed(id));

            Column::new()
                .spacing(spacing::XXS)
                .push(header)
                .push(body)
                .into()
        }
        BodyView::Choice {
            message,
            yes_label,
            no_label,
        } => {
            let actions = Row::new()
                .spacing(spacing::XS)
                .push(
                    button(text(yes_label.clone()).size(typography::BODY_SM))
                        .on_press(Message::YesPressed(id))
                        .padding(spacing::XXS)
                        .style(move |theme, status| filled_button_style(theme, status, accent)),
                )
                .push(
                    button(text(no_label.clone()).size(typography::BODY_SM))
                        .on_press(Message::NoPressed(id))
                        .padding(spacing::XXS)
                        .style(subtle_button_style),
                );

            Column::new()
                .spacing(spacing::XS)
                .push(title_text)
                .push(text(message.clone()).size(typography::BODY_SM))
                .push(actions)
                .into()
        }
        BodyView::Prompt {
            value,
            ok_label,
            cancel_label,
        } => {
            let field = text_input("", value)
                .on_input(move |edited| Message::PromptEdited(id, edited))
                .size(typography::BODY_SM)
                .padding(spacing::XXS);

            let actions = Row::new()
                .spacing(spacing::XS)
                .push(
                    button(text(ok_label.clone()).size(typography::BODY_SM))
                        .on_press(Message::OkPressed(id))
                        .padding(spacing::XXS)
                        .style(move |theme, status| filled_button_style(theme, status, accent)),
                )
                .push(
                    button(text(cancel_label.clone()).size(typography::BODY_SM))
                        .on_press(Message::CancelPressed(id))
                        .padding(spacing::XXS)
                        .style(subtle_button_style),
                );

            Column::new()
                .spacing(spacing::XS)
                .push(title_text)
                .push(field)
                .push(actions)
                .into()
        }
    };

    Container::new(content)
        .width(width)
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Renders the topmost modal over a click-to-dismiss scrim.
fn modal_layer(modal: ModalView) -> Element<'static, Message> {
    let (dismiss_id, dialog) = match modal {
        ModalView::Acknowledge {
            id,
            title,
            content,
            variant,
        } => (id, acknowledge_dialog(id, title, content, variant)),
        ModalView::Choose {
            id,
            title,
            content,
            yes_label,
            no_label,
        } => (id, choose_dialog(id, title, content, yes_label, no_label)),
    };

    let scrim = Color {
        a: opacity::SCRIM,
        ..palette::BLACK
    };

    opaque(
        mouse_area(
            center(opaque(dialog)).style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(scrim)),
                ..Default::default()
            }),
        )
        .on_press(Message::ModalDismissed(dismiss_id)),
    )
}

fn acknowledge_dialog(
    id: ModalId,
    title: String,
    content: String,
    variant: Variant,
) -> Element<'static, Message> {
    let accent = variant_color(variant);
    let actions = Row::new().push(space::horizontal()).push(
        button(text("OK").size(typography::BODY))
            .on_press(Message::ModalAcknowledged(id))
            .padding(spacing::XXS)
            .style(move |theme, status| filled_button_style(theme, status, accent)),
    );

    dialog_card(title, content, accent, actions)
}

fn choose_dialog(
    id: ModalId,
    title: String,
    content: String,
    yes_label: String,
    no_label: String,
) -> Element<'static, Message> {
    let accent = palette::DANGER_500;
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(space::horizontal())
        .push(
            button(text(no_label).size(typography::BODY))
                .on_press(Message::ModalChoice(id, false))
                .padding(spacing::XXS)
                .style(subtle_button_style),
        )
        .push(
            button(text(yes_label).size(typography::BODY))
                .on_press(Message::ModalChoice(id, true))
                .padding(spacing::XXS)
                .style(move |theme, status| filled_button_style(theme, status, accent)),
        );

    dialog_card(title, content, accent, actions)
}

fn dialog_card(
    title: String,
    content: String,
    accent: Color,
    actions: Row<'static, Message>,
) -> Element<'static, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            text(title)
                .size(typography::TITLE_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        )
        .push(
            text(content)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        )
        .push(actions);

    Container::new(body)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn is_full_width(placement: Placement) -> bool {
    matches!(placement, Placement::TopFull | Placement::BottomFull)
}

fn alignment_for(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    match placement {
        Placement::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Placement::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Placement::TopCenter | Placement::TopFull => {
            (alignment::Horizontal::Center, alignment::Vertical::Top)
        }
        Placement::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Placement::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Placement::BottomCenter | Placement::BottomFull => {
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        }
    }
}

fn variant_color(variant: Variant) -> Color {
    match variant {
        Variant::Success => palette::SUCCESS_500,
        Variant::Info => palette::INFO_500,
        Variant::Warning => palette::WARNING_500,
        Variant::Danger => palette::DANGER_500,
    }
}

/// Card chrome shared by toasts and dialogs: surface background, accent
/// border, soft shadow.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for accent-filled action buttons.
fn filled_button_style(_theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let background = match status {
        button::Status::Active => accent,
        button::Status::Hovered => Color { a: 0.9, ..accent },
        button::Status::Pressed => Color { a: 0.8, ..accent },
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for quiet controls (close, cancel, decline).
fn subtle_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
