//! Chrome for the bottom sheet: drag-handle header, close button,
//! and the bottom-anchored clipped body.
//!
//! The sheet slides by shrinking its visible height: the offset from
//! the presentation state machine is subtracted from the full sheet
//! height and the body is clipped, so content appears to sink below
//! the window edge.

use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

pub fn bottom_sheet<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    visible_height: f32,
    content: Element<'a, Message>,
    on_close: Message,
    on_drag_start: Message,
) -> Element<'a, Message> {
    let header = row![
        text("Accessibility Menu")
            .size(style::TEXT_LG)
            .color(cs.on_surface)
            .width(Length::Fill),
        button(
            lucide_icons::iced::icon_delete()
                .size(style::ICON_MD)
                .color(cs.on_surface),
        )
        .style(theme::transparent_button(cs))
        .padding(style::SPACE_XS)
        .on_press(on_close),
    ]
    .align_y(Alignment::Center);

    // Dragging starts anywhere on the handle row.
    let handle = mouse_area(
        container(header)
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .style(theme::drag_handle(cs)),
    )
    .on_press(on_drag_start);

    let body = container(column![handle, content].spacing(style::SPACE_SM))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height.max(0.0)))
        .clip(true)
        .style(theme::sheet_container(cs));

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(iced::alignment::Vertical::Bottom)
        .into()
}
