//! Attribute Mapper: reacts to start tags.
//!
//! Container starts allocate model structures: list containers (items,
//! entries, categories, thumbnails, credits, ...) append, singleton
//! containers (image, textInput, cloud, media:group) are created only when
//! absent so a repeated open never discards what the first one collected.
//! Attribute-bearing leaves (`enclosure`, `guid`, `media:content`, Atom
//! `link`, ...) are built straight from the attribute map; their text, if
//! any, is merged afterwards by the character mapper.
//!
//! Every extension element first makes sure its namespace object exists on
//! the owning channel, item or entry, then dispatches on the sub-path.

use super::document::{AtomDocument, RssDocument};
use super::events::Attributes;
use super::model::{
    last, push, AtomCategory, AtomContent, AtomGenerator, AtomLink, AtomPerson, AtomText,
    Category, Cloud, Enclosure, Guid, ITunesCategory, ITunesImage, ITunesNamespace,
    MediaCategory, MediaContent, MediaCredit, MediaEmbed, MediaHash, MediaLicense,
    MediaLocation, MediaNamespace, MediaParam, MediaPeerLink, MediaPlayer, MediaPrice,
    MediaRating, MediaRestriction, MediaRights, MediaScene, MediaStarRating, MediaStatistics,
    MediaStatus, MediaSubTitle, MediaText, MediaThumbnail, Source,
};
use super::path::{AtomPath, ITunesPath, MediaPath, PersonPath, RssPath};

// ============================================================================
// RSS / RDF
// ============================================================================

/// Applies the start tag of an RSS or RDF element at `path`.
pub fn rss_start(doc: &mut RssDocument, path: RssPath, attrs: &Attributes) {
    use RssPath::*;

    match path {
        ChannelItem => doc.start_item(),
        ChannelCategory => push(&mut doc.feed.categories, category(attrs)),
        ChannelCloud => {
            doc.feed.cloud.get_or_insert_with(|| Cloud {
                domain: attrs.string("domain"),
                port: attrs.integer("port"),
                path: attrs.string("path"),
                register_procedure: attrs.string("registerProcedure"),
                protocol: attrs.string("protocol"),
            });
        }
        ChannelImage => {
            doc.feed.image.get_or_insert_with(Default::default);
        }
        ChannelTextInput => {
            doc.feed.text_input.get_or_insert_with(Default::default);
        }
        ChannelITunes(path) => {
            let ns = doc.feed.itunes.get_or_insert_with(Default::default);
            itunes_start(ns, path, attrs);
        }
        ChannelDublinCore(_) => {
            doc.feed.dublin_core.get_or_insert_with(Default::default);
        }
        ChannelSyndication(_) => {
            doc.feed.syndication.get_or_insert_with(Default::default);
        }
        ChannelItemCategory | ChannelItemEnclosure | ChannelItemGuid | ChannelItemSource
        | ChannelItemITunes(_) | ChannelItemDublinCore(_) | ChannelItemMedia(_) => {
            rss_item_start(doc, path, attrs)
        }
        _ => {}
    }
}

fn rss_item_start(doc: &mut RssDocument, path: RssPath, attrs: &Attributes) {
    use RssPath::*;

    let Some(item) = doc.item_mut() else {
        return;
    };
    match path {
        ChannelItemCategory => push(&mut item.categories, category(attrs)),
        ChannelItemEnclosure => {
            item.enclosure = Some(Enclosure {
                url: attrs.string("url"),
                length: attrs.integer("length"),
                mime_type: attrs.string("type"),
            });
        }
        ChannelItemGuid => {
            item.guid = Some(Guid {
                value: None,
                is_perma_link: attrs.flag("isPermaLink"),
            });
        }
        ChannelItemSource => {
            item.source = Some(Source {
                value: None,
                url: attrs.string("url"),
            });
        }
        ChannelItemITunes(path) => {
            let ns = item.itunes.get_or_insert_with(Default::default);
            itunes_start(ns, path, attrs);
        }
        ChannelItemDublinCore(_) => {
            item.dublin_core.get_or_insert_with(Default::default);
        }
        ChannelItemMedia(path) => {
            let ns = item.media.get_or_insert_with(Default::default);
            media_start(ns, path, attrs);
        }
        _ => {}
    }
}

fn category(attrs: &Attributes) -> Category {
    Category {
        value: None,
        domain: attrs.string("domain"),
    }
}

// ============================================================================
// Atom
// ============================================================================

/// Applies the start tag of an Atom element at `path`.
pub fn atom_start(doc: &mut AtomDocument, path: AtomPath, attrs: &Attributes) {
    use AtomPath::*;

    let feed = &mut doc.feed;
    match path {
        FeedEntry => doc.start_entry(),
        FeedSubtitle => feed.subtitle = Some(text_construct(attrs)),
        FeedLink => push(&mut feed.links, link(attrs)),
        FeedAuthor(PersonPath::Start) => push(&mut feed.authors, AtomPerson::default()),
        FeedContributor(PersonPath::Start) => {
            push(&mut feed.contributors, AtomPerson::default())
        }
        FeedGenerator => {
            feed.generator = Some(AtomGenerator {
                value: None,
                uri: attrs.string("uri"),
                version: attrs.string("version"),
            });
        }
        FeedCategory => push(&mut feed.categories, atom_category(attrs)),
        EntrySummary | EntryAuthor(PersonPath::Start) | EntryContributor(PersonPath::Start)
        | EntryLink | EntryCategory | EntryContent | EntrySource | EntryMedia(_) => {
            atom_entry_start(doc, path, attrs)
        }
        _ => {}
    }
}

fn atom_entry_start(doc: &mut AtomDocument, path: AtomPath, attrs: &Attributes) {
    use AtomPath::*;

    let Some(entry) = doc.entry_mut() else {
        return;
    };
    match path {
        EntrySummary => entry.summary = Some(text_construct(attrs)),
        EntryAuthor(_) => push(&mut entry.authors, AtomPerson::default()),
        EntryContributor(_) => push(&mut entry.contributors, AtomPerson::default()),
        EntryLink => push(&mut entry.links, link(attrs)),
        EntryCategory => push(&mut entry.categories, atom_category(attrs)),
        EntryContent => {
            entry.content = Some(AtomContent {
                value: None,
                content_type: attrs.string("type"),
                src: attrs.string("src"),
            });
        }
        EntrySource => {
            entry.source.get_or_insert_with(Default::default);
        }
        EntryMedia(path) => {
            let ns = entry.media.get_or_insert_with(Default::default);
            media_start(ns, path, attrs);
        }
        _ => {}
    }
}

fn text_construct(attrs: &Attributes) -> AtomText {
    AtomText {
        value: None,
        text_type: attrs.string("type"),
    }
}

fn link(attrs: &Attributes) -> AtomLink {
    AtomLink {
        href: attrs.string("href"),
        rel: attrs.string("rel"),
        mime_type: attrs.string("type"),
        hreflang: attrs.string("hreflang"),
        title: attrs.string("title"),
        length: attrs.integer("length"),
    }
}

fn atom_category(attrs: &Attributes) -> AtomCategory {
    AtomCategory {
        term: attrs.string("term"),
        scheme: attrs.string("scheme"),
        label: attrs.string("label"),
    }
}

// ============================================================================
// Extension namespaces
// ============================================================================

fn itunes_start(ns: &mut ITunesNamespace, path: ITunesPath, attrs: &Attributes) {
    match path {
        ITunesPath::Category => push(
            &mut ns.categories,
            ITunesCategory {
                text: attrs.string("text"),
                subcategory: None,
            },
        ),
        // A subcategory only ever refines the category it is nested in; with
        // no parent there is nothing to refine.
        ITunesPath::Subcategory => {
            if let Some(parent) = last(&mut ns.categories) {
                parent.subcategory = attrs.string("text");
            }
        }
        ITunesPath::Image => {
            ns.image.get_or_insert_with(|| ITunesImage {
                href: attrs.string("href"),
            });
        }
        ITunesPath::Owner => {
            ns.owner.get_or_insert_with(Default::default);
        }
        _ => {}
    }
}

fn media_start(ns: &mut MediaNamespace, path: MediaPath, attrs: &Attributes) {
    use MediaPath::*;

    match path {
        Group => {
            ns.group_mut();
        }
        GroupContent => push(&mut ns.group_mut().contents, media_content(attrs)),
        GroupCredit => push(&mut ns.group_mut().credits, media_credit(attrs)),
        GroupCategory => ns.group_mut().category = Some(media_category(attrs)),
        GroupRating => ns.group_mut().rating = Some(media_rating(attrs)),
        GroupThumbnail => push(&mut ns.group_mut().thumbnails, media_thumbnail(attrs)),
        GroupTitle => ns.group_mut().title = Some(media_text(attrs)),
        GroupDescription => ns.group_mut().description = Some(media_text(attrs)),
        Content => push(&mut ns.contents, media_content(attrs)),
        Credit => push(&mut ns.credits, media_credit(attrs)),
        Category => ns.category = Some(media_category(attrs)),
        Rating => ns.rating = Some(media_rating(attrs)),
        Thumbnail => push(&mut ns.thumbnails, media_thumbnail(attrs)),
        Title => ns.title = Some(media_text(attrs)),
        Description => ns.description = Some(media_text(attrs)),
        Player => {
            ns.player = Some(MediaPlayer {
                url: attrs.string("url"),
                width: attrs.integer("width"),
                height: attrs.integer("height"),
            });
        }
        Hash => push(
            &mut ns.hashes,
            MediaHash {
                value: None,
                algorithm: attrs.string("algo"),
            },
        ),
        Restriction => {
            ns.restriction = Some(MediaRestriction {
                value: None,
                relationship: attrs.string("relationship"),
                restriction_type: attrs.string("type"),
            });
        }
        Community | CommunityTags => {
            ns.community_mut();
        }
        CommunityStarRating => {
            ns.community_mut().star_rating = Some(MediaStarRating {
                average: attrs.float("average"),
                count: attrs.integer("count"),
                min: attrs.integer("min"),
                max: attrs.integer("max"),
            });
        }
        CommunityStatistics => {
            ns.community_mut().statistics = Some(MediaStatistics {
                views: attrs.integer("views"),
                favorites: attrs.integer("favorites"),
            });
        }
        Embed => {
            ns.embed.get_or_insert_with(|| MediaEmbed {
                url: attrs.string("url"),
                width: attrs.integer("width"),
                height: attrs.integer("height"),
                params: None,
            });
        }
        EmbedParam => {
            if let Some(embed) = ns.embed.as_mut() {
                push(
                    &mut embed.params,
                    MediaParam {
                        name: attrs.string("name"),
                        value: None,
                    },
                );
            }
        }
        Status => {
            ns.status = Some(MediaStatus {
                state: attrs.string("state"),
                reason: attrs.string("reason"),
            });
        }
        Price => push(
            &mut ns.prices,
            MediaPrice {
                price: attrs.float("price"),
                price_type: attrs.string("type"),
                info: attrs.string("info"),
                currency: attrs.string("currency"),
            },
        ),
        License => {
            ns.license = Some(MediaLicense {
                value: None,
                license_type: attrs.string("type"),
                href: attrs.string("href"),
            });
        }
        SubTitle => push(
            &mut ns.sub_titles,
            MediaSubTitle {
                href: attrs.string("href"),
                lang: attrs.string("lang"),
                sub_title_type: attrs.string("type"),
            },
        ),
        PeerLink => push(
            &mut ns.peer_links,
            MediaPeerLink {
                href: attrs.string("href"),
                peer_link_type: attrs.string("type"),
            },
        ),
        Location => {
            ns.location.get_or_insert_with(|| MediaLocation {
                description: attrs.string("description"),
                start: attrs.duration("start"),
                end: attrs.duration("end"),
                position: None,
            });
        }
        Rights => {
            ns.rights = Some(MediaRights {
                status: attrs.string("status"),
            });
        }
        Scene => push(&mut ns.scenes, MediaScene::default()),
        // text-only or pure wrappers
        GroupKeywords | Keywords | Comments | Comment | Responses | Response | BackLinks
        | BackLink | LocationPosition | Scenes | SceneTitle | SceneDescription
        | SceneStartTime | SceneEndTime => {}
    }
}

fn media_content(attrs: &Attributes) -> MediaContent {
    MediaContent {
        url: attrs.string("url"),
        file_size: attrs.integer("fileSize"),
        mime_type: attrs.string("type"),
        medium: attrs.string("medium"),
        is_default: attrs.flag("isDefault"),
        expression: attrs.string("expression"),
        bitrate: attrs.integer("bitrate"),
        framerate: attrs.float("framerate"),
        sampling_rate: attrs.float("samplingrate"),
        channels: attrs.integer("channels"),
        duration: attrs.duration("duration"),
        height: attrs.integer("height"),
        width: attrs.integer("width"),
        lang: attrs.string("lang"),
    }
}

fn media_credit(attrs: &Attributes) -> MediaCredit {
    MediaCredit {
        value: None,
        role: attrs.string("role"),
        scheme: attrs.string("scheme"),
    }
}

fn media_category(attrs: &Attributes) -> MediaCategory {
    MediaCategory {
        value: None,
        scheme: attrs.string("scheme"),
        label: attrs.string("label"),
    }
}

fn media_rating(attrs: &Attributes) -> MediaRating {
    MediaRating {
        value: None,
        scheme: attrs.string("scheme"),
    }
}

fn media_thumbnail(attrs: &Attributes) -> MediaThumbnail {
    MediaThumbnail {
        url: attrs.string("url"),
        width: attrs.integer("width"),
        height: attrs.integer("height"),
        time: attrs.duration("time"),
    }
}

fn media_text(attrs: &Attributes) -> MediaText {
    MediaText {
        value: None,
        text_type: attrs.string("type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    fn none() -> Attributes {
        Attributes::new()
    }

    #[test]
    fn test_items_append_in_order() {
        let mut doc = RssDocument::new();
        for _ in 0..3 {
            rss_start(&mut doc, RssPath::ChannelItem, &none());
        }
        assert_eq!(doc.feed.items().len(), 3);
    }

    #[test]
    fn test_singletons_are_idempotent() {
        let mut doc = RssDocument::new();
        rss_start(&mut doc, RssPath::ChannelImage, &none());
        doc.feed.image.as_mut().unwrap().url = Some("https://example.com/logo.png".into());
        rss_start(&mut doc, RssPath::ChannelImage, &none());
        assert_eq!(
            doc.feed.image.unwrap().url.as_deref(),
            Some("https://example.com/logo.png")
        );

        let mut doc = RssDocument::new();
        rss_start(
            &mut doc,
            RssPath::ChannelCloud,
            &attrs(&[("domain", "rpc.example.com"), ("port", "80")]),
        );
        rss_start(
            &mut doc,
            RssPath::ChannelCloud,
            &attrs(&[("domain", "other.example.com")]),
        );
        let cloud = doc.feed.cloud.unwrap();
        assert_eq!(cloud.domain.as_deref(), Some("rpc.example.com"));
        assert_eq!(cloud.port, Some(80));
    }

    #[test]
    fn test_attribute_leaves() {
        let mut doc = RssDocument::new();
        rss_start(&mut doc, RssPath::ChannelItem, &none());
        rss_start(
            &mut doc,
            RssPath::ChannelItemEnclosure,
            &attrs(&[
                ("url", "https://example.com/ep1.mp3"),
                ("length", "12345"),
                ("type", "audio/mpeg"),
            ]),
        );
        rss_start(
            &mut doc,
            RssPath::ChannelItemGuid,
            &attrs(&[("isPermaLink", "false")]),
        );
        rss_start(
            &mut doc,
            RssPath::ChannelItemCategory,
            &attrs(&[("domain", "https://example.com/tags")]),
        );

        let item = &doc.feed.items()[0];
        assert_eq!(
            item.enclosure,
            Some(Enclosure {
                url: Some("https://example.com/ep1.mp3".into()),
                length: Some(12345),
                mime_type: Some("audio/mpeg".into()),
            })
        );
        assert_eq!(item.guid.as_ref().unwrap().is_perma_link, Some(false));
        assert_eq!(
            item.categories.as_ref().unwrap()[0].domain.as_deref(),
            Some("https://example.com/tags")
        );
    }

    #[test]
    fn test_missing_attributes_give_empty_leaf() {
        let mut doc = RssDocument::new();
        rss_start(&mut doc, RssPath::ChannelItem, &none());
        rss_start(&mut doc, RssPath::ChannelItemEnclosure, &none());
        assert_eq!(doc.feed.items()[0].enclosure, Some(Enclosure::default()));
    }

    #[test]
    fn test_item_paths_without_item_are_ignored() {
        let mut doc = RssDocument::new();
        rss_start(
            &mut doc,
            RssPath::ChannelItemMedia(MediaPath::Thumbnail),
            &attrs(&[("url", "https://example.com/t.jpg")]),
        );
        assert_eq!(doc.feed, Default::default());
    }

    #[test]
    fn test_extension_namespace_allocated_lazily() {
        let mut doc = RssDocument::new();
        rss_start(&mut doc, RssPath::ChannelItem, &none());
        assert!(doc.feed.items()[0].media.is_none());

        rss_start(
            &mut doc,
            RssPath::ChannelItemMedia(MediaPath::GroupThumbnail),
            &attrs(&[("url", "https://example.com/g.jpg"), ("time", "00:00:05")]),
        );
        let media = doc.feed.items()[0].media.as_ref().unwrap();
        let thumbnail = &media.group.as_ref().unwrap().thumbnails.as_ref().unwrap()[0];
        assert_eq!(thumbnail.url.as_deref(), Some("https://example.com/g.jpg"));
        assert_eq!(thumbnail.time, Some(Duration::from_secs(5)));
        assert_eq!(media.thumbnail_url(), Some("https://example.com/g.jpg"));
    }

    #[test]
    fn test_itunes_subcategory_needs_parent() {
        let mut ns = ITunesNamespace::default();
        itunes_start(
            &mut ns,
            ITunesPath::Subcategory,
            &attrs(&[("text", "Podcasting")]),
        );
        assert_eq!(ns.categories, None);

        itunes_start(
            &mut ns,
            ITunesPath::Category,
            &attrs(&[("text", "Technology")]),
        );
        itunes_start(
            &mut ns,
            ITunesPath::Subcategory,
            &attrs(&[("text", "Podcasting")]),
        );
        assert_eq!(
            ns.categories,
            Some(vec![ITunesCategory {
                text: Some("Technology".into()),
                subcategory: Some("Podcasting".into()),
            }])
        );
    }

    #[test]
    fn test_media_content_attributes() {
        let mut ns = MediaNamespace::default();
        media_start(
            &mut ns,
            MediaPath::Content,
            &attrs(&[
                ("url", "https://example.com/v.mp4"),
                ("fileSize", "1000"),
                ("type", "video/mp4"),
                ("medium", "video"),
                ("isDefault", "true"),
                ("framerate", "25"),
                ("duration", "185"),
                ("width", "1280"),
                ("height", "720"),
            ]),
        );
        let content = &ns.contents.unwrap()[0];
        assert_eq!(content.file_size, Some(1000));
        assert_eq!(content.is_default, Some(true));
        assert_eq!(content.framerate, Some(25.0));
        assert_eq!(content.duration, Some(Duration::from_secs(185)));
        assert_eq!(content.width, Some(1280));
        assert_eq!(content.medium.as_deref(), Some("video"));
    }

    #[test]
    fn test_media_embed_param_needs_embed() {
        let mut ns = MediaNamespace::default();
        media_start(&mut ns, MediaPath::EmbedParam, &attrs(&[("name", "type")]));
        assert!(ns.embed.is_none());

        media_start(
            &mut ns,
            MediaPath::Embed,
            &attrs(&[("url", "https://example.com/player.swf")]),
        );
        media_start(&mut ns, MediaPath::EmbedParam, &attrs(&[("name", "type")]));
        let embed = ns.embed.unwrap();
        assert_eq!(embed.params.unwrap()[0].name.as_deref(), Some("type"));
    }

    #[test]
    fn test_media_community() {
        let mut ns = MediaNamespace::default();
        media_start(
            &mut ns,
            MediaPath::CommunityStarRating,
            &attrs(&[("average", "3.5"), ("count", "20"), ("min", "1"), ("max", "5")]),
        );
        media_start(
            &mut ns,
            MediaPath::CommunityStatistics,
            &attrs(&[("views", "5000"), ("favorites", "5")]),
        );
        let community = ns.community.unwrap();
        assert_eq!(community.star_rating.unwrap().average, Some(3.5));
        assert_eq!(community.statistics.unwrap().views, Some(5000));
    }

    #[test]
    fn test_atom_links_and_people() {
        let mut doc = AtomDocument::new();
        atom_start(
            &mut doc,
            AtomPath::FeedLink,
            &attrs(&[("href", "https://example.com/"), ("rel", "alternate")]),
        );
        atom_start(&mut doc, AtomPath::FeedAuthor(PersonPath::Start), &none());
        atom_start(&mut doc, AtomPath::FeedAuthor(PersonPath::Name), &none());
        atom_start(&mut doc, AtomPath::FeedEntry, &none());
        atom_start(
            &mut doc,
            AtomPath::EntryContent,
            &attrs(&[("type", "html")]),
        );
        atom_start(
            &mut doc,
            AtomPath::EntryCategory,
            &attrs(&[("term", "rust"), ("label", "Rust")]),
        );

        assert_eq!(doc.feed.alternate_link(), Some("https://example.com/"));
        assert_eq!(doc.feed.authors.as_ref().map(Vec::len), Some(1));
        let entry = &doc.feed.entries()[0];
        assert_eq!(
            entry.content.as_ref().unwrap().content_type.as_deref(),
            Some("html")
        );
        assert_eq!(
            entry.categories.as_ref().unwrap()[0].term.as_deref(),
            Some("rust")
        );
    }

    #[test]
    fn test_atom_entry_paths_without_entry_are_ignored() {
        let mut doc = AtomDocument::new();
        atom_start(&mut doc, AtomPath::EntryLink, &attrs(&[("href", "x")]));
        atom_start(&mut doc, AtomPath::EntryMedia(MediaPath::Group), &none());
        assert_eq!(doc.feed, Default::default());
    }
}
