// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! full-screen viewer.
//!
//! The `App` struct wires together the domains (gallery, viewer, localization,
//! settings) and owns the viewer's mount lifetime: a viewer exists while
//! `App::viewer` is `Some`, holding the background scroll lock and, through
//! `subscription()`, the native event listener.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::assets::AssetResolver;
use crate::config::{self, Config};
use crate::domain::ImageSet;
use crate::i18n::fluent::I18n;
use crate::ui::state::{BackgroundScroll, ZoomStep};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, viewer};
use iced::{keyboard, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    viewer: Option<viewer::State>,
    background: BackgroundScroll,
    settings: viewer::Settings,
    theme_mode: ThemeMode,
    /// Modifiers held right now, handed to each newly mounted viewer.
    modifiers: keyboard::Modifiers,
    /// i18n key of a config load problem, shown in the footer.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.images().len())
            .field(
                "viewer_index",
                &self.viewer.as_ref().map(viewer::State::current_index),
            )
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
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
    /// Loads settings, then builds the application and its startup tasks.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let assets_dir = flags.assets_dir.map(PathBuf::from);
        let mut app = Self::from_config(&config, flags.lang, assets_dir);
        app.config_warning = config_warning;

        if let Some(index) = flags.initial_index {
            app.open_viewer(index);
        }

        let probe = probe_image_sizes(&app.gallery);
        (app, probe)
    }

    /// Builds the application from already loaded settings, without I/O.
    #[must_use]
    pub fn from_config(config: &Config, lang: Option<String>, assets_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(lang, config);

        let images: ImageSet = config.gallery.images.iter().map(String::as_str).collect();
        let mut resolver = AssetResolver::from_config(&config.gallery);
        if let Some(root) = assets_dir {
            resolver = AssetResolver::new(root, config.gallery.image_extension.clone());
        }

        let settings = viewer::Settings {
            zoom_step: config
                .viewer
                .zoom_step
                .map_or_else(ZoomStep::default, ZoomStep::new),
            swipe_threshold: config.viewer.swipe_threshold(),
        };

        log::info!(
            "Gallery ready with {} images from {}",
            images.len(),
            resolver.root().display()
        );

        Self {
            i18n,
            gallery: gallery::State::new(images, resolver),
            viewer: None,
            background: BackgroundScroll::new(),
            settings,
            theme_mode: config.general.theme_mode,
            modifiers: keyboard::Modifiers::default(),
            config_warning: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.viewer.is_some())
    }

    /// Mounted viewer, if any.
    #[must_use]
    pub fn viewer(&self) -> Option<&viewer::State> {
        self.viewer.as_ref()
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn background(&self) -> &BackgroundScroll {
        &self.background
    }

    /// Opens the viewer on `index` as if its gallery entry were activated.
    pub fn open_viewer(&mut self, index: usize) {
        let mut ctx = self.update_context();
        update::open_viewer(&mut ctx, index);
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            viewer: &mut self.viewer,
            background: &self.background,
            settings: self.settings,
            modifiers: &mut self.modifiers,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::ImageSizesProbed(sizes) => update::handle_image_sizes(&mut ctx, sizes),
            Message::ModifiersChanged(modifiers) => {
                update::handle_modifiers_changed(&mut ctx, modifiers)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            viewer: self.viewer.as_ref(),
            scroll: self.background.behavior(),
            theme_mode: self.theme_mode,
            config_warning: self.config_warning.as_deref().map(|key| self.i18n.tr(key)),
        })
    }
}

/// Reads every image header on the blocking pool, off the UI executor.
fn probe_image_sizes(gallery: &gallery::State) -> Task<Message> {
    let resolver = gallery.resolver().clone();
    let images = gallery.images().clone();
    let count = images.len();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || resolver.probe_all(&images))
                .await
                .unwrap_or_else(|err| {
                    log::warn!("Image size probe did not finish: {}", err);
                    vec![None; count]
                })
        },
        Message::ImageSizesProbed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{PanOffset, ZoomLevel};
    use crate::ui::viewer::controls;
    use iced::touch::{self, Finger};
    use iced::{event, Point};

    fn app() -> App {
        App::from_config(&Config::default(), Some("en-US".into()), None)
    }

    fn controls(message: controls::Message) -> Message {
        Message::Viewer(viewer::Message::Controls(message))
    }

    fn touch(event: touch::Event) -> Message {
        Message::Viewer(viewer::Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Touch(event),
        })
    }

    #[test]
    fn gallery_activation_mounts_viewer_and_locks_scroll() {
        let mut app = app();
        assert!(app.viewer().is_none());
        assert!(!app.background().is_locked());

        let _ = app.update(Message::Gallery(gallery::Message::Open(2)));
        assert_eq!(app.viewer().map(viewer::State::current_index), Some(2));
        assert!(app.background().is_locked());
    }

    #[test]
    fn close_unmounts_and_restores_scroll() {
        let mut app = app();
        app.open_viewer(0);
        let _ = app.update(controls(controls::Message::Close));
        assert!(app.viewer().is_none());
        assert!(!app.background().is_locked());
    }

    #[test]
    fn navigation_wraps_and_resets_zoom() {
        let mut app = app();
        app.open_viewer(5);
        let _ = app.update(controls(controls::Message::ZoomIn));
        let _ = app.update(controls(controls::Message::Next));

        let viewer = app.viewer().expect("viewer stays mounted");
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.zoom(), ZoomLevel::default());
        assert_eq!(viewer.pan(), PanOffset::ZERO);

        let _ = app.update(controls(controls::Message::Previous));
        assert_eq!(app.viewer().map(viewer::State::current_index), Some(5));
        assert!(app.background().is_locked());
    }

    #[test]
    fn initial_index_is_clamped() {
        let mut app = app();
        app.open_viewer(99);
        assert_eq!(app.viewer().map(viewer::State::current_index), Some(5));
    }

    #[test]
    fn empty_gallery_never_opens_viewer() {
        let mut config = Config::default();
        config.gallery.images.clear();
        let mut app = App::from_config(&config, None, None);
        app.open_viewer(0);
        assert!(app.viewer().is_none());
        assert!(!app.background().is_locked());
    }

    #[test]
    fn viewer_messages_after_close_are_dropped() {
        let mut app = app();
        app.open_viewer(1);
        let _ = app.update(controls(controls::Message::Close));

        let _ = app.update(touch(touch::Event::FingerPressed {
            id: Finger(0),
            position: Point::new(200.0, 0.0),
        }));
        let _ = app.update(touch(touch::Event::FingerLifted {
            id: Finger(0),
            position: Point::new(0.0, 0.0),
        }));
        assert!(app.viewer().is_none());
        assert!(!app.background().is_locked());
    }

    #[test]
    fn swipe_left_advances_image() {
        let mut app = app();
        app.open_viewer(1);
        let _ = app.update(touch(touch::Event::FingerPressed {
            id: Finger(0),
            position: Point::new(300.0, 200.0),
        }));
        let _ = app.update(touch(touch::Event::FingerLifted {
            id: Finger(0),
            position: Point::new(200.0, 200.0),
        }));
        assert_eq!(app.viewer().map(viewer::State::current_index), Some(2));
    }

    #[test]
    fn reopening_while_mounted_moves_existing_viewer() {
        let mut app = app();
        app.open_viewer(1);
        app.open_viewer(4);
        assert_eq!(app.viewer().map(viewer::State::current_index), Some(4));
        let _ = app.update(controls(controls::Message::Close));
        assert!(!app.background().is_locked());
    }

    fn wheel_up() -> Message {
        Message::Viewer(viewer::Message::RawEvent {
            window: window::Id::unique(),
            event: event::Event::Mouse(iced::mouse::Event::WheelScrolled {
                delta: iced::mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
        })
    }

    #[test]
    fn ctrl_held_across_reopen_still_zooms_with_wheel() {
        let mut app = app();
        app.open_viewer(0);
        let _ = app.update(Message::ModifiersChanged(keyboard::Modifiers::CTRL));
        let _ = app.update(controls(controls::Message::Close));
        assert!(app.viewer().is_none());

        app.open_viewer(1);
        let _ = app.update(wheel_up());
        assert_eq!(app.viewer().map(viewer::State::zoom), Some(ZoomLevel::new(1.25)));
    }

    #[test]
    fn ctrl_pressed_before_first_open_is_known_to_viewer() {
        let mut app = app();
        let _ = app.update(Message::ModifiersChanged(keyboard::Modifiers::CTRL));
        app.open_viewer(2);
        let _ = app.update(wheel_up());
        assert_eq!(app.viewer().map(viewer::State::zoom), Some(ZoomLevel::new(1.25)));

        let _ = app.update(Message::ModifiersChanged(keyboard::Modifiers::default()));
        let _ = app.update(wheel_up());
        assert_eq!(app.viewer().map(viewer::State::zoom), Some(ZoomLevel::new(1.25)));
    }

    #[test]
    fn viewer_settings_come_from_config() {
        let mut config = Config::default();
        config.viewer.zoom_step = Some(0.5);
        config.viewer.swipe_threshold_px = Some(5.0);
        let app = App::from_config(&config, None, None);
        assert_eq!(app.settings.zoom_step, ZoomStep::new(0.5));
        assert_eq!(app.settings.swipe_threshold, config::MIN_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn probed_sizes_reach_gallery() {
        let mut app = app();
        let mut sizes = vec![None; 6];
        sizes[2] = Some(iced::Size::new(1200, 900));
        let _ = app.update(Message::ImageSizesProbed(sizes));
        assert_eq!(app.gallery().natural_size(2), Some(iced::Size::new(1200, 900)));
    }

    #[test]
    fn view_renders_with_and_without_viewer() {
        let mut app = app();
        {
            let _page = app.view();
        }
        app.open_viewer(0);
        let _overlay = app.view();
    }
}
