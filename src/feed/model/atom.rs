use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::MediaNamespace;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomFeed {
    pub title: Option<String>,
    pub subtitle: Option<AtomText>,
    pub links: Option<Vec<AtomLink>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub authors: Option<Vec<AtomPerson>>,
    pub contributors: Option<Vec<AtomPerson>>,
    pub id: Option<String>,
    pub generator: Option<AtomGenerator>,
    pub icon: Option<String>,
    pub logo: Option<String>,
    pub rights: Option<String>,
    pub categories: Option<Vec<AtomCategory>>,
    pub entries: Option<Vec<AtomEntry>>,
}

impl AtomFeed {
    /// Entries in document order; empty when the feed had none.
    pub fn entries(&self) -> &[AtomEntry] {
        self.entries.as_deref().unwrap_or_default()
    }

    pub fn alternate_link(&self) -> Option<&str> {
        alternate(self.links.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomEntry {
    pub title: Option<String>,
    pub summary: Option<AtomText>,
    pub authors: Option<Vec<AtomPerson>>,
    pub contributors: Option<Vec<AtomPerson>>,
    pub links: Option<Vec<AtomLink>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub categories: Option<Vec<AtomCategory>>,
    pub id: Option<String>,
    pub content: Option<AtomContent>,
    pub published: Option<DateTime<FixedOffset>>,
    pub source: Option<AtomSource>,
    pub rights: Option<String>,
    pub media: Option<MediaNamespace>,
}

impl AtomEntry {
    pub fn alternate_link(&self) -> Option<&str> {
        alternate(self.links.as_deref())
    }
}

fn alternate(links: Option<&[AtomLink]>) -> Option<&str> {
    let links = links?;
    links
        .iter()
        .find(|link| link.rel.as_deref() == Some("alternate"))
        .or_else(|| links.iter().find(|link| link.rel.is_none()))
        .and_then(|link| link.href.as_deref())
}

/// Text construct (`subtitle`, `summary`) with its declared `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomText {
    pub value: Option<String>,
    pub text_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomContent {
    pub value: Option<String>,
    pub content_type: Option<String>,
    /// Out-of-line content reference.
    pub src: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomLink {
    pub href: Option<String>,
    pub rel: Option<String>,
    pub mime_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomPerson {
    pub name: Option<String>,
    pub email: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomCategory {
    pub term: Option<String>,
    pub scheme: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomGenerator {
    pub value: Option<String>,
    pub uri: Option<String>,
    pub version: Option<String>,
}

/// Metadata of the feed an entry was copied from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomSource {
    pub id: Option<String>,
    pub title: Option<String>,
    pub updated: Option<DateTime<FixedOffset>>,
}
