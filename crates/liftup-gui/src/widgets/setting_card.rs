use iced::widget::{button, column, container, text, Text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// One accessibility setting card: an icon over the current value.
pub fn setting_card<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    icon: Text<'a>,
    value: String,
    on_press: Message,
) -> Element<'a, Message> {
    let body = column![
        icon.size(style::ICON_LG).color(cs.on_surface),
        text(value).size(style::TEXT_SM).color(cs.on_surface),
    ]
    .spacing(style::SPACE_XS)
    .align_x(Alignment::Center);

    button(container(body).center(Length::Fill))
        .width(Length::Fixed(style::CARD_WIDTH))
        .height(Length::Fixed(style::CARD_HEIGHT))
        .style(theme::card_button(cs))
        .on_press(on_press)
        .into()
}
