mod app;
mod screen;
mod sheet;
mod style;
mod theme;
mod widgets;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("liftup_gui=debug,liftup_core=debug")
        .init();

    let win = iced::window::Settings {
        size: iced::Size::new(style::WINDOW_WIDTH, style::WINDOW_HEIGHT),
        resizable: false,
        ..Default::default()
    };

    iced::application(app::LiftUp::new, app::LiftUp::update, app::LiftUp::view)
        .title(app::LiftUp::title)
        .subscription(app::LiftUp::subscription)
        .theme(app::LiftUp::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}
