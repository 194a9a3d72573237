//! The home screen: gradient hero, menu row, and the accessibility
//! sheet's setting cards.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Pixels};

use liftup_core::accessibility::{AccessibilityConfig, TextAlign, Theme};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::setting_card;

#[derive(Debug, Clone)]
pub enum Message {
    AccessibilityPressed,
    ThemeToggled,
    LetterSpacingStepped,
    LineHeightStepped,
    TextAlignCycled,
    ResetPressed,
}

pub fn update(message: Message, config: &AccessibilityConfig) -> Action {
    match message {
        Message::AccessibilityPressed => Action::ToggleSheet,
        Message::ThemeToggled => Action::UpdateConfig(config.with_toggled_theme()),
        Message::LetterSpacingStepped => {
            Action::UpdateConfig(config.with_stepped_letter_spacing())
        }
        Message::LineHeightStepped => Action::UpdateConfig(config.with_stepped_line_height()),
        Message::TextAlignCycled => Action::UpdateConfig(config.with_cycled_text_align()),
        Message::ResetPressed => Action::ResetConfig,
    }
}

/// Map the config's alignment onto iced's text alignment. There is no
/// justified text layout in iced; justify reads as left.
fn horizontal(align: TextAlign) -> Horizontal {
    match align {
        TextAlign::Center => Horizontal::Center,
        TextAlign::Right => Horizontal::Right,
        TextAlign::Left | TextAlign::Justify => Horizontal::Left,
    }
}

pub fn view<'a>(cs: &ColorScheme, config: &AccessibilityConfig) -> Element<'a, Message> {
    let line_height = iced::widget::text::LineHeight::Absolute(Pixels(config.line_height as f32));

    // ── Menu row ───────────────────────────────────────────────
    let accessibility_btn = button(
        row![
            lucide_icons::iced::icon_accessibility()
                .size(style::ICON_MD)
                .color(cs.on_surface),
            text("Accessibility").size(style::TEXT_BASE).color(cs.on_surface),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding(style::SPACE_LG)
    .style(theme::pill_button(cs))
    .on_press(Message::AccessibilityPressed);

    let language_btn = button(
        row![
            lucide_icons::iced::icon_globe()
                .size(style::ICON_SM)
                .color(cs.on_surface),
            text("English").size(style::TEXT_BASE).color(cs.on_surface),
            lucide_icons::iced::icon_chevron_down()
                .size(style::ICON_SM)
                .color(cs.on_surface),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding(style::SPACE_LG)
    .style(theme::transparent_button(cs));

    let menu = row![
        accessibility_btn,
        iced::widget::Space::new().width(Length::Fill),
        language_btn,
    ]
    .align_y(Alignment::Center);

    // ── Title block ────────────────────────────────────────────
    let company = container(
        row![
            lucide_icons::iced::icon_atom()
                .size(style::ICON_LOGO)
                .color(cs.accent),
            text("LiftUP Ai")
                .size(style::TEXT_TITLE)
                .color(cs.on_surface),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .align_x(horizontal(config.text_align));

    let welcome = column![
        text("Welcome to")
            .size(style::TEXT_TITLE)
            .color(cs.on_surface)
            .width(Length::Fill)
            .align_x(horizontal(config.text_align)),
        text("LiftUP Ai")
            .size(style::TEXT_TITLE)
            .color(cs.accent)
            .width(Length::Fill)
            .align_x(horizontal(config.text_align)),
        text("Your Smart Learning Companion!")
            .size(style::TEXT_BASE)
            .line_height(line_height)
            .color(cs.on_surface)
            .width(Length::Fill)
            .align_x(horizontal(config.text_align)),
    ]
    .spacing(style::SPACE_SM);

    let get_started = button(
        row![
            text("Get Started").size(style::TEXT_BASE).color(cs.on_accent),
            lucide_icons::iced::icon_chevron_right()
                .size(style::ICON_SM)
                .color(cs.on_accent),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .style(theme::cta_button(cs));

    let log_in = button(
        container(text("Log In").size(style::TEXT_BASE).color(cs.on_surface))
            .center_x(Length::Fill),
    )
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .style(theme::pill_button(cs));

    let title_block = column![company, welcome, column![get_started, log_in].spacing(style::SPACE_MD)]
        .spacing(style::SPACE_2XL);

    let content = column![
        menu,
        iced::widget::Space::new().height(Length::Fill),
        title_block,
    ]
    .padding(style::SPACE_LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::gradient_background(cs))
        .into()
}

/// The sheet's content: four setting cards and the reset button.
pub fn sheet_content<'a>(cs: &ColorScheme, config: &AccessibilityConfig) -> Element<'a, Message> {
    let theme_icon = match config.theme {
        Theme::Dark => lucide_icons::iced::icon_moon(),
        Theme::Light => lucide_icons::iced::icon_sun(),
    };
    let align_icon = match config.text_align {
        TextAlign::Left => lucide_icons::iced::icon_text_align_start(),
        TextAlign::Center => lucide_icons::iced::icon_text_align_center(),
        TextAlign::Right => lucide_icons::iced::icon_text_align_end(),
        TextAlign::Justify => lucide_icons::iced::icon_text_align_justify(),
    };

    let cards = column![
        row![
            setting_card(
                cs,
                theme_icon,
                config.theme.label().to_string(),
                Message::ThemeToggled,
            ),
            setting_card(
                cs,
                lucide_icons::iced::icon_a_large_small(),
                format!("{} px", config.letter_spacing),
                Message::LetterSpacingStepped,
            ),
        ]
        .spacing(style::SPACE_LG),
        row![
            setting_card(
                cs,
                lucide_icons::iced::icon_move_vertical(),
                format!("{} px", config.line_height),
                Message::LineHeightStepped,
            ),
            setting_card(
                cs,
                align_icon,
                config.text_align.label().to_string(),
                Message::TextAlignCycled,
            ),
        ]
        .spacing(style::SPACE_LG),
    ]
    .spacing(style::SPACE_LG)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let reset = button(
        row![
            lucide_icons::iced::icon_rotate_ccw()
                .size(style::ICON_SM)
                .color(cs.on_accent),
            text("Reset All Accessibility")
                .size(style::TEXT_BASE)
                .color(cs.on_accent),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding(style::SPACE_LG)
    .style(theme::accent_button(cs))
    .on_press(Message::ResetPressed);

    column![cards, container(reset).center_x(Length::Fill)]
        .spacing(style::SPACE_XL)
        .into()
}
