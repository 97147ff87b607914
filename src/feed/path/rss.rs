//! Paths for RSS 2.0 and RDF / RSS 1.0.
//!
//! Both dialects share one path enum because they feed the same
//! [`RssFeed`](crate::feed::model::RssFeed) model. RDF keeps `image`,
//! `textinput` and `item` as siblings of `channel` rather than children, so
//! it gets its own table mapping those positions onto the channel paths.

use std::sync::LazyLock;

use super::extensions::{
    DublinCorePath, ITunesPath, MediaPath, SyndicationPath, DUBLIN_CORE_PATHS, ITUNES_PATHS,
    MEDIA_PATHS, SYNDICATION_PATHS,
};
use super::PathTable;
use crate::feed::detect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RssPath {
    ChannelTitle,
    ChannelLink,
    ChannelDescription,
    ChannelLanguage,
    ChannelCopyright,
    ChannelManagingEditor,
    ChannelWebMaster,
    ChannelPubDate,
    ChannelLastBuildDate,
    ChannelCategory,
    ChannelGenerator,
    ChannelDocs,
    ChannelCloud,
    ChannelRating,
    ChannelTtl,
    ChannelImage,
    ChannelImageUrl,
    ChannelImageTitle,
    ChannelImageLink,
    ChannelImageWidth,
    ChannelImageHeight,
    ChannelImageDescription,
    ChannelTextInput,
    ChannelTextInputTitle,
    ChannelTextInputDescription,
    ChannelTextInputName,
    ChannelTextInputLink,
    ChannelSkipHoursHour,
    ChannelSkipDaysDay,
    ChannelItem,
    ChannelItemTitle,
    ChannelItemLink,
    ChannelItemDescription,
    ChannelItemAuthor,
    ChannelItemCategory,
    ChannelItemComments,
    ChannelItemEnclosure,
    ChannelItemGuid,
    ChannelItemPubDate,
    ChannelItemSource,
    ChannelItemContentEncoded,
    ChannelITunes(ITunesPath),
    ChannelDublinCore(DublinCorePath),
    ChannelSyndication(SyndicationPath),
    ChannelItemITunes(ITunesPath),
    ChannelItemDublinCore(DublinCorePath),
    ChannelItemMedia(MediaPath),
}

const CHANNEL_PATHS: &[(&str, RssPath)] = &[
    ("title", RssPath::ChannelTitle),
    ("link", RssPath::ChannelLink),
    ("description", RssPath::ChannelDescription),
    ("language", RssPath::ChannelLanguage),
    ("copyright", RssPath::ChannelCopyright),
    ("managingEditor", RssPath::ChannelManagingEditor),
    ("webMaster", RssPath::ChannelWebMaster),
    ("pubDate", RssPath::ChannelPubDate),
    ("lastBuildDate", RssPath::ChannelLastBuildDate),
    ("category", RssPath::ChannelCategory),
    ("generator", RssPath::ChannelGenerator),
    ("docs", RssPath::ChannelDocs),
    ("cloud", RssPath::ChannelCloud),
    ("rating", RssPath::ChannelRating),
    ("ttl", RssPath::ChannelTtl),
    ("image", RssPath::ChannelImage),
    ("image/url", RssPath::ChannelImageUrl),
    ("image/title", RssPath::ChannelImageTitle),
    ("image/link", RssPath::ChannelImageLink),
    ("image/width", RssPath::ChannelImageWidth),
    ("image/height", RssPath::ChannelImageHeight),
    ("image/description", RssPath::ChannelImageDescription),
    ("textInput", RssPath::ChannelTextInput),
    ("textInput/title", RssPath::ChannelTextInputTitle),
    ("textInput/description", RssPath::ChannelTextInputDescription),
    ("textInput/name", RssPath::ChannelTextInputName),
    ("textInput/link", RssPath::ChannelTextInputLink),
    ("skipHours/hour", RssPath::ChannelSkipHoursHour),
    ("skipDays/day", RssPath::ChannelSkipDaysDay),
];

const ITEM_PATHS: &[(&str, RssPath)] = &[
    ("", RssPath::ChannelItem),
    ("title", RssPath::ChannelItemTitle),
    ("link", RssPath::ChannelItemLink),
    ("description", RssPath::ChannelItemDescription),
    ("author", RssPath::ChannelItemAuthor),
    ("category", RssPath::ChannelItemCategory),
    ("comments", RssPath::ChannelItemComments),
    ("enclosure", RssPath::ChannelItemEnclosure),
    ("guid", RssPath::ChannelItemGuid),
    ("pubDate", RssPath::ChannelItemPubDate),
    ("source", RssPath::ChannelItemSource),
    ("content:encoded", RssPath::ChannelItemContentEncoded),
];

const RDF_PATHS: &[(&str, RssPath)] = &[
    ("channel/title", RssPath::ChannelTitle),
    ("channel/link", RssPath::ChannelLink),
    ("channel/description", RssPath::ChannelDescription),
    ("image", RssPath::ChannelImage),
    ("image/title", RssPath::ChannelImageTitle),
    ("image/url", RssPath::ChannelImageUrl),
    ("image/link", RssPath::ChannelImageLink),
    ("textinput", RssPath::ChannelTextInput),
    ("textinput/title", RssPath::ChannelTextInputTitle),
    ("textinput/description", RssPath::ChannelTextInputDescription),
    ("textinput/name", RssPath::ChannelTextInputName),
    ("textinput/link", RssPath::ChannelTextInputLink),
    ("item", RssPath::ChannelItem),
    ("item/title", RssPath::ChannelItemTitle),
    ("item/link", RssPath::ChannelItemLink),
    ("item/description", RssPath::ChannelItemDescription),
    ("item/content:encoded", RssPath::ChannelItemContentEncoded),
];

static RSS_TABLE: LazyLock<PathTable<RssPath>> = LazyLock::new(|| {
    let mut table = PathTable::new();
    table.extend("/rss/channel", CHANNEL_PATHS);
    table.extend("/rss/channel/item", ITEM_PATHS);
    table.extend_nested("/rss/channel", ITUNES_PATHS, RssPath::ChannelITunes);
    table.extend_nested("/rss/channel", DUBLIN_CORE_PATHS, RssPath::ChannelDublinCore);
    table.extend_nested("/rss/channel", SYNDICATION_PATHS, RssPath::ChannelSyndication);
    table.extend_nested("/rss/channel/item", ITUNES_PATHS, RssPath::ChannelItemITunes);
    table.extend_nested(
        "/rss/channel/item",
        DUBLIN_CORE_PATHS,
        RssPath::ChannelItemDublinCore,
    );
    table.extend_nested("/rss/channel/item", MEDIA_PATHS, RssPath::ChannelItemMedia);
    table
});

static RDF_TABLE: LazyLock<PathTable<RssPath>> = LazyLock::new(|| {
    let mut table = PathTable::new();
    table.extend("/rdf:RDF", RDF_PATHS);
    table.extend_nested("/rdf:RDF/channel", DUBLIN_CORE_PATHS, RssPath::ChannelDublinCore);
    table.extend_nested("/rdf:RDF/channel", SYNDICATION_PATHS, RssPath::ChannelSyndication);
    table.extend_nested("/rdf:RDF/item", DUBLIN_CORE_PATHS, RssPath::ChannelItemDublinCore);
    table.extend_nested("/rdf:RDF/item", MEDIA_PATHS, RssPath::ChannelItemMedia);
    table
});

/// Resolves a canonical structural path for an RSS or RDF document.
pub fn resolve(dialect: Dialect, path: &str) -> Option<RssPath> {
    match dialect {
        Dialect::Rdf => RDF_TABLE.get(path),
        Dialect::Rss | Dialect::Atom => RSS_TABLE.get(path),
    }
}
