//! Light and dark color schemes and widget styles.
//!
//! The palette carries the original LiftUp look: soft pink gradients
//! in light mode, near-black in dark mode, with the purple accent.

use iced::widget::{button, container};
use iced::{border, gradient, Background, Border, Color, Radians, Theme};

use liftup_core::accessibility::Theme as AppTheme;

use crate::style;

/// Semantic colors for one theme variant.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub gradient_top: Color,
    pub gradient_mid: Color,
    pub gradient_bottom: Color,
    pub on_surface: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub card: Color,
    pub card_border: Color,
    pub button: Color,
    pub cta_start: Color,
    pub cta_end: Color,
}

fn light() -> ColorScheme {
    ColorScheme {
        gradient_top: Color::from_rgb8(0xEB, 0xC5, 0xF4),
        gradient_mid: Color::from_rgb8(0xF2, 0xDB, 0xDC),
        gradient_bottom: Color::from_rgb8(0xEB, 0xC5, 0xF4),
        on_surface: Color::BLACK,
        accent: Color::from_rgb8(0xC0, 0x1A, 0xFE),
        on_accent: Color::WHITE,
        card: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.35),
        card_border: Color::WHITE,
        button: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.55),
        cta_start: Color::from_rgb8(0xF8, 0xD5, 0x6C),
        cta_end: Color::from_rgb8(0xC1, 0x34, 0xF1),
    }
}

fn dark() -> ColorScheme {
    ColorScheme {
        gradient_top: Color::BLACK,
        gradient_mid: Color::from_rgb8(0x26, 0x24, 0x2A),
        gradient_bottom: Color::from_rgb8(0x4D, 0x48, 0x55),
        on_surface: Color::WHITE,
        accent: Color::from_rgb8(0xC0, 0x1A, 0xFE),
        on_accent: Color::WHITE,
        card: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.08),
        card_border: Color::WHITE,
        button: Color::from_rgb8(0x4D, 0x48, 0x55),
        cta_start: Color::from_rgb8(0xF8, 0xD5, 0x6C),
        cta_end: Color::from_rgb8(0xC1, 0x34, 0xF1),
    }
}

/// The scheme for the active app theme.
pub fn scheme(theme: AppTheme) -> ColorScheme {
    match theme {
        AppTheme::Light => light(),
        AppTheme::Dark => dark(),
    }
}

/// Read the system color scheme once at startup. `None` means the
/// platform reported no preference (or detection failed).
pub fn ambient_theme() -> Option<AppTheme> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(AppTheme::Dark),
        Ok(dark_light::Mode::Light) => Some(AppTheme::Light),
        _ => None,
    }
}

/// Build the iced theme for the active scheme.
pub fn app_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "LiftUp",
        Palette {
            background: cs.gradient_mid,
            text: cs.on_surface,
            primary: cs.accent,
            success: cs.accent,
            warning: cs.cta_start,
            danger: cs.accent,
        },
    )
}

fn vertical_gradient(stops: [(f32, Color); 3]) -> Background {
    let mut linear = gradient::Linear::new(Radians(std::f32::consts::PI));
    for (position, color) in stops {
        linear = linear.add_stop(position, color);
    }
    Background::Gradient(linear.into())
}

// ── Container styles ─────────────────────────────────────────────

/// Full-screen background gradient.
pub fn gradient_background(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let stops = [
        (0.0, cs.gradient_top),
        (0.5, cs.gradient_mid),
        (1.0, cs.gradient_bottom),
    ];
    move |_| container::Style {
        background: Some(vertical_gradient(stops)),
        ..container::Style::default()
    }
}

/// The sheet body: background gradient with rounded top corners.
pub fn sheet_container(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let stops = [
        (0.0, cs.gradient_top),
        (0.5, cs.gradient_mid),
        (1.0, cs.gradient_bottom),
    ];
    move |_| container::Style {
        background: Some(vertical_gradient(stops)),
        border: Border {
            radius: border::Radius {
                top_left: style::RADIUS_SHEET,
                top_right: style::RADIUS_SHEET,
                bottom_left: 0.0,
                bottom_right: 0.0,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// The sheet's drag-handle header: outlined, fully rounded.
pub fn drag_handle(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let border_color = cs.card_border;
    move |_| container::Style {
        border: Border {
            color: border_color,
            width: 1.2,
            radius: style::RADIUS_SHEET.into(),
        },
        ..container::Style::default()
    }
}

// ── Button styles ────────────────────────────────────────────────

fn faded(color: Color) -> Color {
    Color {
        a: color.a * 0.5,
        ..color
    }
}

/// A setting card: translucent fill with a white outline.
pub fn card_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let cs = *cs;
    move |_, status| {
        let background = match status {
            button::Status::Pressed => faded(cs.card),
            _ => cs.card,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: cs.on_surface,
            border: Border {
                color: cs.card_border,
                width: 1.5,
                radius: style::RADIUS_CARD.into(),
            },
            ..button::Style::default()
        }
    }
}

/// A themed pill button.
pub fn pill_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let cs = *cs;
    move |_, status| {
        let background = match status {
            button::Status::Pressed => faded(cs.button),
            _ => cs.button,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: cs.on_surface,
            border: border::rounded(style::RADIUS_PILL),
            ..button::Style::default()
        }
    }
}

/// The accent pill (reset button).
pub fn accent_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let cs = *cs;
    move |_, status| {
        let background = match status {
            button::Status::Pressed => faded(cs.accent),
            _ => cs.accent,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: cs.on_accent,
            border: border::rounded(style::RADIUS_PILL),
            ..button::Style::default()
        }
    }
}

/// The "Get Started" pill: warm-to-purple gradient.
pub fn cta_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let cs = *cs;
    move |_, _| {
        let linear = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
            .add_stop(0.0, cs.cta_start)
            .add_stop(1.0, cs.cta_end);
        button::Style {
            background: Some(Background::Gradient(linear.into())),
            text_color: cs.on_accent,
            border: border::rounded(style::RADIUS_PILL),
            ..button::Style::default()
        }
    }
}

/// A bare button for icons and transparent chrome.
pub fn transparent_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text_color = cs.on_surface;
    move |_, _| button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_follow_the_app_theme() {
        assert_eq!(scheme(AppTheme::Light).on_surface, Color::BLACK);
        assert_eq!(scheme(AppTheme::Dark).on_surface, Color::WHITE);
        // Both variants share the accent.
        assert_eq!(
            scheme(AppTheme::Light).accent,
            scheme(AppTheme::Dark).accent
        );
    }
}
