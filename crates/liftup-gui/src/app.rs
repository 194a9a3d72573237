use std::time::{Duration, Instant};

use iced::widget::{column, mouse_area, stack, Space};
use iced::{Element, Length, Point, Subscription, Task, Theme};

use liftup_core::accessibility::AccessibilityConfig;
use liftup_core::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use liftup_core::store::SettingsStore;

use crate::screen::{home, Action};
use crate::sheet::{Sheet, SheetEvent, SheetState};
use crate::style;
use crate::theme;
use crate::widgets;

/// Application root: the settings store, a config snapshot for the
/// view, and the accessibility sheet's presentation state.
pub struct LiftUp {
    store: SettingsStore,
    config: AccessibilityConfig,
    sheet: Sheet,
    /// The owner-side visibility flag the sheet animates toward.
    sheet_open: bool,
    cursor_y: f32,
    /// Cursor y at drag start, while a handle drag is active.
    drag_origin: Option<f32>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    /// The persisted config finished loading into the store.
    StateLoaded,
    /// Backdrop or close-button press.
    CloseRequested,
    DragStarted,
    CursorMoved(Point),
    DragEnded,
    /// Animation frame while a slide is in flight.
    Tick,
}

impl LiftUp {
    pub fn new() -> (Self, Task<Message>) {
        let storage: Box<dyn KeyValueStorage> = match FileStorage::open() {
            Some(files) => Box::new(files),
            None => {
                tracing::warn!("No data directory; settings will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        let startup = AccessibilityConfig::startup(theme::ambient_theme());
        let store = SettingsStore::new(storage, startup);

        // The sheet greets the user open, like the original app.
        let mut sheet = Sheet::new(style::SHEET_HEIGHT);
        sheet.set_visible(true, Instant::now());

        let loader = store.clone();
        let app = Self {
            config: store.current(),
            store,
            sheet,
            sheet_open: true,
            cursor_y: 0.0,
            drag_origin: None,
        };
        let task = Task::perform(async move { loader.load().await }, |_| Message::StateLoaded);
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("LiftUp")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Home(msg) => match home::update(msg, &self.config) {
                Action::UpdateConfig(next) => {
                    self.store.update(next);
                    self.config = self.store.current();
                }
                Action::ResetConfig => {
                    self.store.reset();
                    self.config = self.store.current();
                }
                Action::ToggleSheet => {
                    self.sheet_open = !self.sheet_open;
                    self.sheet.set_visible(self.sheet_open, now);
                }
            },
            Message::StateLoaded => {
                self.config = self.store.current();
            }
            Message::CloseRequested => {
                self.sheet.request_close(now);
            }
            Message::DragStarted => {
                if matches!(
                    self.sheet.state(),
                    SheetState::Visible | SheetState::Entering
                ) {
                    self.drag_origin = Some(self.cursor_y);
                }
            }
            Message::CursorMoved(position) => {
                self.cursor_y = position.y;
                if let Some(origin) = self.drag_origin {
                    self.sheet.drag_to(position.y - origin);
                }
            }
            Message::DragEnded => {
                if self.drag_origin.take().is_some() {
                    self.sheet.end_drag(now);
                }
            }
            Message::Tick => {
                if let Some(SheetEvent::Dismissed) = self.sheet.tick(now) {
                    // The dismiss sequence completed; fold the owner
                    // flag back so a later toggle re-opens.
                    self.sheet_open = false;
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = theme::scheme(self.config.theme);
        let home = home::view(&cs, &self.config).map(Message::Home);

        if self.sheet.state() == SheetState::Hidden {
            return home;
        }

        let visible_height = (style::SHEET_HEIGHT - self.sheet.offset()).max(0.0);

        // The backdrop covers only the area above the sheet, so sheet
        // presses never fall through to a dismiss.
        let backdrop = column![
            mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::CloseRequested),
            Space::new().height(Length::Fixed(visible_height)),
        ];

        let content = home::sheet_content(&cs, &self.config).map(Message::Home);
        let sheet = widgets::bottom_sheet(
            &cs,
            visible_height,
            content,
            Message::CloseRequested,
            Message::DragStarted,
        );

        // Track the cursor across the whole window while dragging.
        mouse_area(stack![home, backdrop, sheet])
            .on_move(Message::CursorMoved)
            .on_release(Message::DragEnded)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.sheet.is_animating() {
            // ~60 fps while a slide is in flight; idle otherwise.
            iced::time::every(Duration::from_millis(16)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme(&theme::scheme(self.config.theme))
    }
}
