use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{DublinCoreNamespace, ITunesNamespace, MediaNamespace, SyndicationNamespace};

/// An RSS 2.0 channel, or an RDF / RSS 1.0 document normalized into the
/// same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RssFeed {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    pub last_build_date: Option<DateTime<FixedOffset>>,
    pub categories: Option<Vec<Category>>,
    pub generator: Option<String>,
    pub docs: Option<String>,
    pub cloud: Option<Cloud>,
    pub rating: Option<String>,
    /// Minutes the channel may be cached.
    pub ttl: Option<i64>,
    pub image: Option<Image>,
    pub text_input: Option<TextInput>,
    pub skip_hours: Option<Vec<i64>>,
    pub skip_days: Option<Vec<String>>,
    pub items: Option<Vec<RssItem>>,
    pub itunes: Option<ITunesNamespace>,
    pub syndication: Option<SyndicationNamespace>,
    pub dublin_core: Option<DublinCoreNamespace>,
}

impl RssFeed {
    /// Items in document order; empty when the channel had none.
    pub fn items(&self) -> &[RssItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RssItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub comments: Option<String>,
    pub enclosure: Option<Enclosure>,
    pub guid: Option<Guid>,
    pub pub_date: Option<DateTime<FixedOffset>>,
    pub source: Option<Source>,
    /// `content:encoded`, usually the full HTML body.
    pub content_encoded: Option<String>,
    pub media: Option<MediaNamespace>,
    pub itunes: Option<ITunesNamespace>,
    pub dublin_core: Option<DublinCoreNamespace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Category {
    pub value: Option<String>,
    pub domain: Option<String>,
}

/// `<cloud>` subscription endpoint (rssCloud).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cloud {
    pub domain: Option<String>,
    pub port: Option<i64>,
    pub path: Option<String>,
    pub register_procedure: Option<String>,
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Image {
    pub url: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enclosure {
    pub url: Option<String>,
    /// Size in bytes.
    pub length: Option<i64>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Guid {
    pub value: Option<String>,
    pub is_perma_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Source {
    pub value: Option<String>,
    pub url: Option<String>,
}
