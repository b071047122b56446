use chrono::{Days, Local, NaiveDate};
use iced::widget::{button, column, container, row, text, text_input};
use iced::{event, keyboard, Alignment, Element, Event, Length, Subscription, Task, Theme};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod error;
mod facts;
mod state;
mod ui;

use api::media::{self, Preview};
use api::{ApodClient, RecordSource};
use config::Config;
use state::data::ImageRecord;
use state::detail::DetailView;
use state::gallery::{FetchPlan, GalleryState, PreviewSlot};
use state::range::DATE_FORMAT;
use ui::notify::{DialogNotifier, Notifier};

/// Collaborators handed to the application at startup
#[derive(Clone)]
struct Services {
    /// Where records come from
    records: Arc<dyn RecordSource>,
    /// Shared HTTP client for picture downloads
    http: reqwest::Client,
    /// Blocking notifications for input errors
    notifier: Arc<dyn Notifier>,
}

/// Main application state
struct ApodGallery {
    services: Services,
    /// Current text of the two date inputs
    start_date: String,
    end_date: String,
    gallery: GalleryState,
    detail: DetailView,
    /// Picked once at startup
    fact: &'static str,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    StartDateChanged(String),
    EndDateChanged(String),
    /// User clicked "Show pictures"
    ShowPictures,
    /// Every request of a batch has settled
    BatchFetched {
        generation: u64,
        records: Vec<ImageRecord>,
    },
    PreviewLoaded {
        generation: u64,
        date: NaiveDate,
        result: Result<Preview, String>,
    },
    /// A gallery tile was clicked
    TileSelected(ImageRecord),
    CloseDetail,
    EscapePressed,
}

impl ApodGallery {
    /// Create a new instance of the application
    fn new(services: Services, config: &Config) -> (Self, Task<Message>) {
        let today = Local::now().date_naive();
        let start = default_start(today, config.gallery.initial_span_days);

        let fact = facts::pick_fact();
        tracing::info!(fact, "gallery ready");

        (
            ApodGallery {
                services,
                start_date: start.format(DATE_FORMAT).to_string(),
                end_date: today.format(DATE_FORMAT).to_string(),
                gallery: GalleryState::new(),
                detail: DetailView::new(),
                fact,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartDateChanged(value) => {
                self.start_date = value;
                Task::none()
            }
            Message::EndDateChanged(value) => {
                self.end_date = value;
                Task::none()
            }
            Message::ShowPictures => match self.gallery.begin(&self.start_date, &self.end_date) {
                Err(err) => {
                    tracing::warn!(error = %err, "fetch not started");
                    self.services.notifier.notify("Missing date", &err.to_string());
                    Task::none()
                }
                Ok(FetchPlan::Settled) => Task::none(),
                Ok(FetchPlan::Fetch { generation, dates }) => Task::perform(
                    api::fetch_batch(self.services.records.clone(), dates),
                    move |records| Message::BatchFetched {
                        generation,
                        records,
                    },
                ),
            },
            Message::BatchFetched {
                generation,
                records,
            } => {
                if self.gallery.complete(generation, records) {
                    self.load_previews()
                } else {
                    Task::none()
                }
            }
            Message::PreviewLoaded {
                generation,
                date,
                result,
            } => {
                let slot = match result {
                    Ok(preview) => {
                        tracing::debug!(
                            %date,
                            width = preview.thumbnail_width,
                            height = preview.thumbnail_height,
                            "thumbnail ready"
                        );
                        PreviewSlot::Ready(preview)
                    }
                    Err(reason) => {
                        tracing::warn!(%date, %reason, "thumbnail unavailable");
                        PreviewSlot::Unavailable
                    }
                };
                self.gallery.attach_preview(generation, date, slot);
                Task::none()
            }
            Message::TileSelected(record) => {
                self.detail.open(record);
                Task::none()
            }
            Message::CloseDetail => {
                self.detail.close();
                Task::none()
            }
            Message::EscapePressed => {
                if self.detail.is_open() {
                    self.detail.close();
                }
                Task::none()
            }
        }
    }

    /// Start one download per image tile of the current cycle
    fn load_previews(&self) -> Task<Message> {
        let generation = self.gallery.generation();
        let http = self.services.http.clone();

        Task::batch(self.gallery.pending_previews().into_iter().map(|(date, url)| {
            Task::perform(media::load_preview(http.clone(), url), move |result| {
                Message::PreviewLoaded {
                    generation,
                    date,
                    result: result.map_err(|e| e.to_string()),
                }
            })
        }))
    }

    /// Escape closes the overlay regardless of which widget has focus
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            text_input("Start (YYYY-MM-DD)", &self.start_date)
                .on_input(Message::StartDateChanged)
                .padding(10)
                .width(Length::Fixed(200.0)),
            text_input("End (YYYY-MM-DD)", &self.end_date)
                .on_input(Message::EndDateChanged)
                .padding(10)
                .width(Length::Fixed(200.0)),
            button("Show pictures")
                .on_press(Message::ShowPictures)
                .padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            text("Astronomy Picture of the Day").size(40),
            text(self.fact).size(16),
            controls,
            ui::gallery::view(&self.gallery),
        ]
        .spacing(20)
        .padding(32);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        match self.detail.current() {
            Some(record) => ui::detail::overlay(
                base,
                ui::detail::view(record, self.gallery.preview(record.date)),
            ),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Initial start date: `span_days` before `end`, or `end` itself if that
/// would leave the calendar range
fn default_start(end: NaiveDate, span_days: u32) -> NaiveDate {
    end.checked_sub_days(Days::new(u64::from(span_days)))
        .unwrap_or_else(|| {
            tracing::warn!(span_days, "initial span out of range, starting at today");
            end
        })
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring config file");
        Config::default().with_overrides(|name| std::env::var(name).ok())
    });
    tracing::debug!(?config, "configuration");

    let http = reqwest::Client::new();
    let services = Services {
        records: Arc::new(ApodClient::new(http.clone(), &config.api)),
        http,
        notifier: Arc::new(DialogNotifier),
    };

    iced::application("APOD Gallery", ApodGallery::update, ApodGallery::view)
        .subscription(ApodGallery::subscription)
        .theme(ApodGallery::theme)
        .centered()
        .run_with(move || ApodGallery::new(services, &config))
}
