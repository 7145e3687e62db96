use iced::keyboard;
use iced::mouse;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{button, column, container, image, row, text, Space, Stack};
use iced::{event, window};
use iced::{Alignment, Color, Element, Length, Point, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

mod anim;
mod config;
mod state;
mod thumbs;
mod ui;

use anim::reveal::RevealDriver;
use anim::timeline::Preloader;
use config::SiteConfig;
use state::gallery::Gallery;
use state::scroll::SmoothScroll;
use state::session::Session;
use ui::cursor::CursorTrail;
use ui::sections::{self, PageMap, Section};

/// Id of the one scrollable holding the whole page
fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("portfolio-page")
}

/// Main application state: the session context plus everything visual
struct Portfolio {
    config: SiteConfig,
    /// Menu, lightbox, gallery and the scroll lock, behind one context
    session: Session,
    smooth: SmoothScroll,
    preloader: Preloader,
    reveals: RevealDriver,
    cursor: CursorTrail,
    /// Grid thumbnails, keyed by the gallery image path
    thumbs: HashMap<PathBuf, image::Handle>,
    /// Full-resolution handles for the lightbox, keyed by full source
    full_images: HashMap<PathBuf, image::Handle>,
    window: Size,
    /// Clock of the last frame, sampled by every view
    now: Instant,
    thumbs_total: usize,
    thumbs_loaded: usize,
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The one-shot gallery scan finished
    GalleryLoaded(Result<Gallery, String>),
    /// One thumbnail finished generating (source, cached thumbnail)
    ThumbnailReady((PathBuf, Option<PathBuf>)),
    /// One animation frame
    Tick(Instant),
    /// The page scrollable reported its offset
    Scrolled(scrollable::Viewport),
    WindowResized(Size),
    MouseMoved(Point),
    /// Pointer entered/left an interactive region (grows the cursor)
    HoverChanged(bool),
    KeyPressed(keyboard::Key),
    /// A grid thumbnail was clicked
    OpenLightbox(PathBuf),
    CloseLightbox,
    NavigateLightbox(i32),
    ToggleMenu,
    /// A menu link was chosen
    ScrollToSection(Section),
}

impl Portfolio {
    fn new() -> (Self, Task<Message>) {
        // Folder from the command line, else the native picker
        let folder = std::env::args().nth(1).map(PathBuf::from).or_else(|| {
            FileDialog::new()
                .set_title("Select Portfolio Folder")
                .pick_folder()
        });

        let mut preloader = Preloader::new();
        let (config, status, task) = match folder {
            Some(folder) => {
                let config = SiteConfig::load(&folder);
                println!("🖼  Opening portfolio at {}", folder.display());
                (
                    config,
                    format!("Scanning {}...", folder.display()),
                    Task::perform(Gallery::scan_async(folder), Message::GalleryLoaded),
                )
            }
            None => {
                // Nothing to load; let the preloader run its exit
                preloader.complete(Instant::now());
                (
                    SiteConfig::default(),
                    "No portfolio folder selected.".to_string(),
                    Task::none(),
                )
            }
        };

        (
            Portfolio {
                config,
                session: Session::new(),
                smooth: SmoothScroll::new(),
                preloader,
                reveals: RevealDriver::new(),
                cursor: CursorTrail::new(),
                thumbs: HashMap::new(),
                full_images: HashMap::new(),
                window: Size::new(1280.0, 800.0),
                now: Instant::now(),
                thumbs_total: 0,
                thumbs_loaded: 0,
                status,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GalleryLoaded(Ok(gallery)) => {
                println!("🖼  Gallery indexed: {} photos", gallery.len());
                self.status = format!("{} photos", gallery.len());

                // Lightbox handles are lazy; decoding happens on first draw
                for img in gallery.images() {
                    self.full_images
                        .entry(img.full_path.clone())
                        .or_insert_with(|| image::Handle::from_path(&img.full_path));
                }

                let sources: Vec<PathBuf> =
                    gallery.images().iter().map(|img| img.path.clone()).collect();
                self.session.install_gallery(gallery);

                if sources.is_empty() {
                    self.preloader.complete(self.now);
                    return Task::none();
                }
                self.thumbs_total = sources.len();
                Task::batch(sources.into_iter().map(|source| {
                    Task::perform(thumbs::generate_one(source), Message::ThumbnailReady)
                }))
            }
            Message::GalleryLoaded(Err(e)) => {
                eprintln!("⚠️  Gallery scan failed: {}", e);
                self.status = e;
                self.preloader.complete(self.now);
                Task::none()
            }
            Message::ThumbnailReady((source, thumb)) => {
                // A photo without a thumbnail is shown from its original
                let display = thumb.unwrap_or_else(|| source.clone());
                self.thumbs.insert(source, image::Handle::from_path(display));

                self.thumbs_loaded += 1;
                if self.thumbs_loaded >= self.thumbs_total {
                    println!("✅ Thumbnails ready: {}", self.thumbs_total);
                    self.preloader.complete(self.now);
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;

                // The one-shot ready signal arms the reveal bindings
                if self.preloader.take_ready(now) {
                    let map = self.page_map();
                    self.reveals
                        .register(sections::reveal_bindings(&map, self.session.gallery.len()));
                    self.reveals
                        .update(self.smooth.current(), self.window.height, now);
                    println!("✨ Reveal animations armed");
                }

                self.session.tick(now);
                self.cursor.step();
                self.sync_scroll_lock();

                if let Some(offset) = self.smooth.step(now) {
                    self.reveals.update(offset, self.window.height, now);
                    return scrollable::scroll_to(
                        page_scroll_id(),
                        AbsoluteOffset { x: 0.0, y: offset },
                    );
                }
                Task::none()
            }
            Message::Scrolled(viewport) => {
                let bounds = viewport.bounds();
                let content = viewport.content_bounds();
                self.smooth
                    .set_max((content.height - bounds.height).max(0.0));
                self.smooth.observe(viewport.absolute_offset().y);
                self.reveals
                    .update(self.smooth.current(), self.window.height, self.now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window = size;
                Task::none()
            }
            Message::MouseMoved(position) => {
                self.cursor.set_position(position);
                Task::none()
            }
            Message::HoverChanged(hovering) => {
                self.cursor.set_hovering(hovering);
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.session.handle_key(&key, self.now);
                self.sync_scroll_lock();
                Task::none()
            }
            Message::OpenLightbox(path) => {
                self.session.open_lightbox(&path);
                self.sync_scroll_lock();
                Task::none()
            }
            Message::CloseLightbox => {
                self.session.close_lightbox();
                self.sync_scroll_lock();
                Task::none()
            }
            Message::NavigateLightbox(direction) => {
                self.session.navigate_lightbox(direction, self.now);
                Task::none()
            }
            Message::ToggleMenu => {
                self.session.toggle_menu();
                self.sync_scroll_lock();
                Task::none()
            }
            Message::ScrollToSection(section) => {
                if self.session.is_menu_open() {
                    self.session.toggle_menu();
                    self.sync_scroll_lock();
                }
                let map = self.page_map();
                self.smooth.scroll_to(section.target_y(&map), self.now);
                Task::none()
            }
        }
    }

    /// Mirror the session's scroll lock onto the smooth scroller
    fn sync_scroll_lock(&mut self) {
        if self.session.scroll_suspended() {
            self.smooth.stop();
        } else {
            self.smooth.start();
        }
    }

    fn page_map(&self) -> PageMap {
        sections::page_map(self.window, self.session.gallery.len())
    }

    fn load_progress(&self) -> f32 {
        if self.thumbs_total == 0 {
            return if self.session.gallery.is_empty() { 1.0 } else { 0.0 };
        }
        self.thumbs_loaded as f32 / self.thumbs_total as f32
    }

    /// Fixed bar over the page: site title, status, menu toggle
    fn top_bar(&self) -> Element<Message> {
        let bar = row![
            text(self.config.title.clone()).size(16).color(Color::WHITE),
            Space::with_width(Length::Fixed(16.0)),
            text(self.status.clone())
                .size(11)
                .color(Color::from_rgb(0.45, 0.45, 0.45)),
            Space::with_width(Length::Fill),
            button(text("MENU").size(14).color(Color::WHITE))
                .style(button::text)
                .on_press(Message::ToggleMenu),
        ]
        .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .padding(24)
            .into()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let map = self.page_map();
        let scroll_y = self.smooth.current();

        let portrait = self
            .session
            .gallery
            .get(0)
            .and_then(|img| self.thumbs.get(&img.path));

        let page = column![
            sections::hero(&self.config, &self.reveals, scroll_y, &map, self.now),
            ui::gallery::section(&self.session.gallery, &self.thumbs, &self.reveals, self.now),
            sections::about(&self.config, &self.reveals, scroll_y, portrait, self.now),
            sections::footer(&self.config, &self.reveals, self.now),
        ]
        .width(Length::Fill);

        let page = container(
            iced::widget::scrollable(page)
                .id(page_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill)
                .on_scroll(Message::Scrolled),
        )
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb(0.04, 0.04, 0.04).into()),
            ..container::Style::default()
        });

        let mut layers: Vec<Element<Message>> = vec![page.into(), self.top_bar()];

        if self.session.is_menu_open() {
            layers.push(ui::menu::view());
        }
        if self.session.lightbox.is_open() {
            layers.push(ui::lightbox::view(
                &self.session.lightbox,
                &self.session.gallery,
                &self.full_images,
                self.window,
                self.now,
            ));
        }
        if !self.preloader.is_done(self.now) {
            layers.push(ui::preloader::view(
                &self.preloader,
                self.load_progress(),
                self.window.height,
                self.now,
            ));
        }
        if self.config.custom_cursor {
            layers.push(ui::cursor::view(&self.cursor));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::frames().map(Message::Tick),
            keyboard::on_key_press(|key, _modifiers| Some(Message::KeyPressed(key))),
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    Some(Message::MouseMoved(position))
                }
                iced::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                _ => None,
            }),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        |state: &Portfolio| state.config.title.clone(),
        Portfolio::update,
        Portfolio::view,
    )
    .subscription(Portfolio::subscription)
    .theme(Portfolio::theme)
    .antialiasing(true)
    .centered()
    .run_with(Portfolio::new)
}
