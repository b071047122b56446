/// Full-detail overlay for one record
use chrono::NaiveDate;
use iced::widget::{
    button, center, column, container, horizontal_space, image, opaque, row, scrollable, stack, text,
    text_input,
};
use iced::{Color, ContentFit, Element, Length};

use crate::state::data::{ImageRecord, MediaType};
use crate::state::gallery::PreviewSlot;
use crate::ui::gallery::VIDEO_LABEL;
use crate::Message;

/// How the overlay presents the record's media
#[derive(Debug, Clone, PartialEq)]
pub enum DetailMedia {
    /// Full-size picture
    Image { url: String },
    /// Framed panel pointing at the embed url (videos and unknown types)
    Embedded { url: String },
}

/// Everything the overlay displays, taken verbatim from one record
#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub title: String,
    pub long_date: String,
    pub media: DetailMedia,
    pub explanation: String,
    pub hd_url: Option<String>,
    pub credit: Option<String>,
}

impl DetailContent {
    pub fn from_record(record: &ImageRecord) -> Self {
        let url = record.url.clone();
        Self {
            title: record.title.clone(),
            long_date: long_date(record.date),
            media: match record.media_type {
                MediaType::Image => DetailMedia::Image { url },
                MediaType::Video | MediaType::Other => DetailMedia::Embedded { url },
            },
            explanation: record.explanation.clone(),
            hd_url: record.hdurl.clone(),
            credit: record.copyright.clone(),
        }
    }
}

impl DetailMedia {
    /// Label drawn in the framed panel; pictures are drawn as themselves
    pub fn label(&self) -> Option<&'static str> {
        match self {
            DetailMedia::Image { .. } => None,
            DetailMedia::Embedded { .. } => Some(VIDEO_LABEL),
        }
    }
}

/// e.g. "Monday, January 1, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn view<'a>(record: &'a ImageRecord, preview: Option<&'a PreviewSlot>) -> Element<'a, Message> {
    let content = DetailContent::from_record(record);

    let media: Element<'a, Message> = match &content.media {
        DetailMedia::Image { url } => match preview {
            Some(PreviewSlot::Ready(preview)) => image(preview.full.clone())
                .width(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Some(PreviewSlot::Unavailable) => text(format!("Image unavailable: {}", url)).size(16).into(),
            None => text("Loading image...").size(16).into(),
        },
        DetailMedia::Embedded { url } => container(
            column![
                text(content.media.label().unwrap_or(VIDEO_LABEL)).size(40),
                // Read-only, so the url can be selected and copied
                text_input("", url).size(14),
            ]
            .spacing(12),
        )
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into(),
    };

    let header = row![
        text(content.title).size(28),
        horizontal_space(),
        button("Close").on_press(Message::CloseDetail).padding(8),
    ]
    .spacing(16);

    let mut body = column![header, text(content.long_date).size(16), media]
        .spacing(16)
        .push(text(content.explanation).size(16));

    if let Some(credit) = content.credit {
        body = body.push(text(format!("Credit: {}", credit.trim())).size(14));
    }
    if let Some(hd_url) = content.hd_url {
        body = body.push(text(format!("High resolution: {}", hd_url)).size(12));
    }

    container(scrollable(body.padding(24)))
        .max_width(900.0)
        .max_height(800.0)
        .style(container::rounded_box)
        .into()
}

/// Stack `content` over `base` behind a dimmed, input-swallowing backdrop
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(center(opaque(content)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}
