//! Unified feed model.
//!
//! RSS 2.0 and RDF documents both produce an [`RssFeed`]; Atom documents
//! produce an [`AtomFeed`]. Every field is optional because the model is
//! filled in incrementally and real-world feeds omit almost anything.

mod atom;
mod dublin_core;
mod itunes;
mod media;
mod rss;
mod syndication;

use serde::Serialize;

pub use atom::{
    AtomCategory, AtomContent, AtomEntry, AtomFeed, AtomGenerator, AtomLink, AtomPerson,
    AtomSource, AtomText,
};
pub use dublin_core::DublinCoreNamespace;
pub use itunes::{ITunesCategory, ITunesImage, ITunesNamespace, ITunesOwner};
pub use media::{
    GeoPoint, MediaCategory, MediaCommunity, MediaContent, MediaCredit, MediaEmbed, MediaGroup,
    MediaHash, MediaLicense, MediaLocation, MediaNamespace, MediaParam, MediaPeerLink,
    MediaPlayer, MediaPrice, MediaRating, MediaRestriction, MediaRights, MediaScene,
    MediaStarRating, MediaStatistics, MediaStatus, MediaSubTitle, MediaText, MediaThumbnail,
};
pub use rss::{Category, Cloud, Enclosure, Guid, Image, RssFeed, RssItem, Source, TextInput};
pub use syndication::{SyndicationNamespace, UpdatePeriod};

/// A parsed syndication document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dialect", rename_all = "lowercase")]
pub enum Feed {
    /// RSS 2.0 or RDF / RSS 1.0.
    Rss(RssFeed),
    /// Atom 1.0.
    Atom(AtomFeed),
}

impl Feed {
    pub fn title(&self) -> Option<&str> {
        match self {
            Feed::Rss(feed) => feed.title.as_deref(),
            Feed::Atom(feed) => feed.title.as_deref(),
        }
    }

    /// Website link of the feed. For Atom this is the `alternate` link, or
    /// the first link without a `rel` when no alternate is declared.
    pub fn link(&self) -> Option<&str> {
        match self {
            Feed::Rss(feed) => feed.link.as_deref(),
            Feed::Atom(feed) => feed.alternate_link(),
        }
    }

    /// Number of items (RSS) or entries (Atom).
    pub fn item_count(&self) -> usize {
        match self {
            Feed::Rss(feed) => feed.items().len(),
            Feed::Atom(feed) => feed.entries().len(),
        }
    }

    pub fn as_rss(&self) -> Option<&RssFeed> {
        match self {
            Feed::Rss(feed) => Some(feed),
            Feed::Atom(_) => None,
        }
    }

    pub fn as_atom(&self) -> Option<&AtomFeed> {
        match self {
            Feed::Atom(feed) => Some(feed),
            Feed::Rss(_) => None,
        }
    }
}

/// Appends to a lazily allocated list.
pub(crate) fn push<T>(list: &mut Option<Vec<T>>, value: T) {
    list.get_or_insert_with(Vec::new).push(value);
}

/// Most recently appended element of a lazily allocated list.
pub(crate) fn last<T>(list: &mut Option<Vec<T>>) -> Option<&mut T> {
    list.as_mut().and_then(|items| items.last_mut())
}
