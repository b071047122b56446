/// Gallery grid rendering
///
/// Turns the current `GalleryState` into either one of the placeholders
/// or a wrapped grid of clickable tiles.
use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{ImageRecord, MediaType};
use crate::state::gallery::{GalleryState, GalleryView, PreviewSlot};
use crate::Message;

/// Edge length of a tile's thumbnail area
const TILE_SIZE: f32 = 220.0;

/// Label standing in for media that is not a picture, on tiles and in the overlay
pub const VIDEO_LABEL: &str = "VIDEO";

/// Stand-ins for the grid while there are no tiles to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Error,
    NoResults,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading pictures...",
            Placeholder::Error => "Error loading pictures. Please try again.",
            Placeholder::NoResults => "No pictures found for this date range.",
        }
    }
}

/// What a tile shows in its thumbnail area
#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail {
    /// The downloaded picture
    Picture,
    /// Video glyph and title, also used for unknown media types
    MediaGlyph { title: String },
}

/// One clickable gallery entry
#[derive(Debug)]
pub struct Tile<'a> {
    pub record: &'a ImageRecord,
    pub caption: String,
    pub thumbnail: Thumbnail,
}

impl Tile<'_> {
    /// Message sent when the tile is clicked, carrying the tile's own record
    pub fn on_select(&self) -> Message {
        Message::TileSelected(self.record.clone())
    }
}

/// One tile per record, in input order
pub fn build_tiles(records: &[ImageRecord]) -> Vec<Tile<'_>> {
    records
        .iter()
        .map(|record| Tile {
            record,
            caption: format!("{} · {}", record.date.format("%b %-d, %Y"), record.title),
            thumbnail: match record.media_type {
                MediaType::Image => Thumbnail::Picture,
                MediaType::Video | MediaType::Other => Thumbnail::MediaGlyph {
                    title: record.title.clone(),
                },
            },
        })
        .collect()
}

pub fn view(state: &GalleryState) -> Element<'_, Message> {
    match state.view() {
        GalleryView::Idle => centered(
            text("Choose a date range and press \"Show pictures\".").size(18),
        ),
        GalleryView::Loaded(records) => {
            let tiles: Vec<Element<'_, Message>> = build_tiles(records)
                .into_iter()
                .map(|tile| tile_view(state, tile))
                .collect();

            scrollable(
                container(Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0))
                    .width(Length::Fill)
                    .padding(8),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
        GalleryView::Failed(reason) => centered(
            column![
                text(Placeholder::Error.message()).size(20),
                text(reason.as_str()).size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        ),
        GalleryView::Loading => placeholder(Placeholder::Loading),
        GalleryView::Empty => placeholder(Placeholder::NoResults),
    }
}

fn tile_view<'a>(state: &'a GalleryState, tile: Tile<'a>) -> Element<'a, Message> {
    let on_select = tile.on_select();
    let Tile {
        record,
        caption,
        thumbnail,
    } = tile;

    let thumbnail: Element<'a, Message> = match thumbnail {
        Thumbnail::Picture => match state.preview(record.date) {
            Some(PreviewSlot::Ready(preview)) => image(preview.thumbnail.clone())
                .width(Length::Fixed(TILE_SIZE))
                .height(Length::Fixed(TILE_SIZE))
                .content_fit(ContentFit::Cover)
                .into(),
            Some(PreviewSlot::Unavailable) => glyph("IMAGE", "Unavailable".to_string()),
            None => glyph("...", "Loading".to_string()),
        },
        Thumbnail::MediaGlyph { title } => glyph(VIDEO_LABEL, title),
    };

    let content = column![
        thumbnail,
        text(caption).size(14).width(Length::Fixed(TILE_SIZE)),
    ]
    .spacing(8);

    button(content)
        .on_press(on_select)
        .padding(8)
        .style(button::secondary)
        .into()
}

/// Fixed-size box with a large label, used where no picture is shown
fn glyph<'a>(label: &'a str, detail: String) -> Element<'a, Message> {
    container(
        column![text(label).size(32), text(detail).size(14)]
            .spacing(6)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fixed(TILE_SIZE))
    .center_y(Length::Fixed(TILE_SIZE))
    .style(container::rounded_box)
    .into()
}

fn placeholder<'a>(kind: Placeholder) -> Element<'a, Message> {
    centered(text(kind.message()).size(20))
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
