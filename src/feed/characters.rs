//! Character Mapper: routes element text into the model.
//!
//! Each resolved path maps to a [`Slot`], a typed mutable reference to the
//! field the text belongs to. [`apply`] is the single interpreter that
//! decides between append, set and parse-and-set based on the slot kind, so
//! the per-dialect functions below are pure lookup tables.
//!
//! Slots are found through `as_mut()?` on the owning container: when the
//! container was never opened (orphan text, subcategory without category)
//! the lookup yields `None` and the text is dropped.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use super::dates::{parse_date, parse_duration};
use super::document::{AtomDocument, RssDocument};
use super::model::{
    last, push, AtomPerson, DublinCoreNamespace, GeoPoint, ITunesNamespace, MediaNamespace,
    SyndicationNamespace, UpdatePeriod,
};
use super::path::{
    AtomPath, DublinCorePath, ITunesPath, MediaPath, PersonPath, RssPath, SyndicationPath,
};
use super::values::{parse_flag, parse_float, parse_integer, parse_list};

/// A typed destination for element text.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Free text: the first chunk of an element sets, later chunks append.
    Text(&'a mut Option<String>),
    Date(&'a mut Option<DateTime<FixedOffset>>),
    Integer(&'a mut Option<i64>),
    Float(&'a mut Option<f64>),
    Flag(&'a mut Option<bool>),
    Duration(&'a mut Option<Duration>),
    /// Comma separated tokens appended to the list.
    List(&'a mut Option<Vec<String>>),
    /// One list entry per element (`skipDays/day`, `media:comment`).
    PushText(&'a mut Option<Vec<String>>),
    PushInteger(&'a mut Option<Vec<i64>>),
    Geo(&'a mut Option<GeoPoint>),
    Period(&'a mut Option<UpdatePeriod>),
}

/// Applies one chunk of text to `slot`.
///
/// `first_chunk` is true for the first text seen in the current element
/// instance. Structured slots are only written when the text parses; a bad
/// value never clobbers a good one.
pub fn apply(slot: Slot<'_>, text: &str, first_chunk: bool) {
    match slot {
        Slot::Text(field) => match field {
            Some(value) if !first_chunk => value.push_str(text),
            _ => *field = Some(text.to_owned()),
        },
        Slot::Date(field) => match parse_date(text) {
            Some(date) => *field = Some(date),
            None => tracing::trace!(text = %text, "Unparseable date"),
        },
        Slot::Integer(field) => set_parsed(field, parse_integer(text)),
        Slot::Float(field) => set_parsed(field, parse_float(text)),
        Slot::Flag(field) => set_parsed(field, parse_flag(text)),
        Slot::Duration(field) => set_parsed(field, parse_duration(text)),
        Slot::List(field) => {
            let tokens = parse_list(text);
            if !tokens.is_empty() {
                field.get_or_insert_with(Vec::new).extend(tokens);
            }
        }
        Slot::PushText(field) => match last(field) {
            Some(value) if !first_chunk => value.push_str(text),
            _ => push(field, text.to_owned()),
        },
        Slot::PushInteger(field) => {
            if first_chunk {
                if let Some(value) = parse_integer(text) {
                    push(field, value);
                }
            }
        }
        Slot::Geo(field) => set_parsed(field, GeoPoint::parse(text)),
        Slot::Period(field) => set_parsed(field, UpdatePeriod::parse(text)),
    }
}

fn set_parsed<T>(field: &mut Option<T>, parsed: Option<T>) {
    if parsed.is_some() {
        *field = parsed;
    }
}

// ============================================================================
// RSS / RDF
// ============================================================================

/// Text destination for an RSS or RDF path.
pub fn rss_slot(doc: &mut RssDocument, path: RssPath) -> Option<Slot<'_>> {
    use RssPath::*;

    if let ChannelItemTitle | ChannelItemLink | ChannelItemDescription | ChannelItemAuthor
    | ChannelItemCategory | ChannelItemComments | ChannelItemGuid | ChannelItemPubDate
    | ChannelItemSource | ChannelItemContentEncoded | ChannelItemITunes(_)
    | ChannelItemDublinCore(_) | ChannelItemMedia(_) = path
    {
        return rss_item_slot(doc, path);
    }

    let feed = &mut doc.feed;
    let slot = match path {
        ChannelTitle => Slot::Text(&mut feed.title),
        ChannelLink => Slot::Text(&mut feed.link),
        ChannelDescription => Slot::Text(&mut feed.description),
        ChannelLanguage => Slot::Text(&mut feed.language),
        ChannelCopyright => Slot::Text(&mut feed.copyright),
        ChannelManagingEditor => Slot::Text(&mut feed.managing_editor),
        ChannelWebMaster => Slot::Text(&mut feed.web_master),
        ChannelPubDate => Slot::Date(&mut feed.pub_date),
        ChannelLastBuildDate => Slot::Date(&mut feed.last_build_date),
        ChannelCategory => Slot::Text(&mut last(&mut feed.categories)?.value),
        ChannelGenerator => Slot::Text(&mut feed.generator),
        ChannelDocs => Slot::Text(&mut feed.docs),
        ChannelRating => Slot::Text(&mut feed.rating),
        ChannelTtl => Slot::Integer(&mut feed.ttl),
        ChannelImageUrl => Slot::Text(&mut feed.image.as_mut()?.url),
        ChannelImageTitle => Slot::Text(&mut feed.image.as_mut()?.title),
        ChannelImageLink => Slot::Text(&mut feed.image.as_mut()?.link),
        ChannelImageWidth => Slot::Integer(&mut feed.image.as_mut()?.width),
        ChannelImageHeight => Slot::Integer(&mut feed.image.as_mut()?.height),
        ChannelImageDescription => Slot::Text(&mut feed.image.as_mut()?.description),
        ChannelTextInputTitle => Slot::Text(&mut feed.text_input.as_mut()?.title),
        ChannelTextInputDescription => Slot::Text(&mut feed.text_input.as_mut()?.description),
        ChannelTextInputName => Slot::Text(&mut feed.text_input.as_mut()?.name),
        ChannelTextInputLink => Slot::Text(&mut feed.text_input.as_mut()?.link),
        ChannelSkipHoursHour => Slot::PushInteger(&mut feed.skip_hours),
        ChannelSkipDaysDay => Slot::PushText(&mut feed.skip_days),
        ChannelITunes(path) => itunes_slot(feed.itunes.as_mut()?, path)?,
        ChannelDublinCore(path) => dublin_core_slot(feed.dublin_core.as_mut()?, path),
        ChannelSyndication(path) => syndication_slot(feed.syndication.as_mut()?, path),
        // containers and attribute-only elements
        _ => return None,
    };
    Some(slot)
}

fn rss_item_slot(doc: &mut RssDocument, path: RssPath) -> Option<Slot<'_>> {
    use RssPath::*;

    let item = doc.item_mut()?;
    let slot = match path {
        ChannelItemTitle => Slot::Text(&mut item.title),
        ChannelItemLink => Slot::Text(&mut item.link),
        ChannelItemDescription => Slot::Text(&mut item.description),
        ChannelItemAuthor => Slot::Text(&mut item.author),
        ChannelItemCategory => Slot::Text(&mut last(&mut item.categories)?.value),
        ChannelItemComments => Slot::Text(&mut item.comments),
        ChannelItemGuid => Slot::Text(&mut item.guid.as_mut()?.value),
        ChannelItemPubDate => Slot::Date(&mut item.pub_date),
        ChannelItemSource => Slot::Text(&mut item.source.as_mut()?.value),
        ChannelItemContentEncoded => Slot::Text(&mut item.content_encoded),
        ChannelItemITunes(path) => itunes_slot(item.itunes.as_mut()?, path)?,
        ChannelItemDublinCore(path) => dublin_core_slot(item.dublin_core.as_mut()?, path),
        ChannelItemMedia(path) => media_slot(item.media.as_mut()?, path)?,
        _ => return None,
    };
    Some(slot)
}

/// Routes `text` for an RSS or RDF path into the document.
pub fn rss_text(doc: &mut RssDocument, path: RssPath, text: &str, first_chunk: bool) {
    if let Some(slot) = rss_slot(doc, path) {
        apply(slot, text, first_chunk);
    }
}

// ============================================================================
// Atom
// ============================================================================

pub fn atom_slot(doc: &mut AtomDocument, path: AtomPath) -> Option<Slot<'_>> {
    use AtomPath::*;

    if let EntryTitle | EntrySummary | EntryAuthor(_) | EntryContributor(_) | EntryUpdated
    | EntryId | EntryContent | EntryPublished | EntrySourceId | EntrySourceTitle
    | EntrySourceUpdated | EntryRights | EntryMedia(_) = path
    {
        return atom_entry_slot(doc, path);
    }

    let feed = &mut doc.feed;
    let slot = match path {
        FeedTitle => Slot::Text(&mut feed.title),
        FeedSubtitle => Slot::Text(&mut feed.subtitle.as_mut()?.value),
        FeedUpdated => Slot::Date(&mut feed.updated),
        FeedAuthor(person) => person_slot(last(&mut feed.authors)?, person)?,
        FeedContributor(person) => person_slot(last(&mut feed.contributors)?, person)?,
        FeedId => Slot::Text(&mut feed.id),
        FeedGenerator => Slot::Text(&mut feed.generator.as_mut()?.value),
        FeedIcon => Slot::Text(&mut feed.icon),
        FeedLogo => Slot::Text(&mut feed.logo),
        FeedRights => Slot::Text(&mut feed.rights),
        _ => return None,
    };
    Some(slot)
}

fn atom_entry_slot(doc: &mut AtomDocument, path: AtomPath) -> Option<Slot<'_>> {
    use AtomPath::*;

    let entry = doc.entry_mut()?;
    let slot = match path {
        EntryTitle => Slot::Text(&mut entry.title),
        EntrySummary => Slot::Text(&mut entry.summary.as_mut()?.value),
        EntryAuthor(person) => person_slot(last(&mut entry.authors)?, person)?,
        EntryContributor(person) => person_slot(last(&mut entry.contributors)?, person)?,
        EntryUpdated => Slot::Date(&mut entry.updated),
        EntryId => Slot::Text(&mut entry.id),
        EntryContent => Slot::Text(&mut entry.content.as_mut()?.value),
        EntryPublished => Slot::Date(&mut entry.published),
        EntrySourceId => Slot::Text(&mut entry.source.as_mut()?.id),
        EntrySourceTitle => Slot::Text(&mut entry.source.as_mut()?.title),
        EntrySourceUpdated => Slot::Date(&mut entry.source.as_mut()?.updated),
        EntryRights => Slot::Text(&mut entry.rights),
        EntryMedia(path) => media_slot(entry.media.as_mut()?, path)?,
        _ => return None,
    };
    Some(slot)
}

fn person_slot(person: &mut AtomPerson, path: PersonPath) -> Option<Slot<'_>> {
    match path {
        PersonPath::Start => None,
        PersonPath::Name => Some(Slot::Text(&mut person.name)),
        PersonPath::Email => Some(Slot::Text(&mut person.email)),
        PersonPath::Uri => Some(Slot::Text(&mut person.uri)),
    }
}

pub fn atom_text(doc: &mut AtomDocument, path: AtomPath, text: &str, first_chunk: bool) {
    if let Some(slot) = atom_slot(doc, path) {
        apply(slot, text, first_chunk);
    }
}

// ============================================================================
// Extension namespaces
// ============================================================================

fn itunes_slot(ns: &mut ITunesNamespace, path: ITunesPath) -> Option<Slot<'_>> {
    use ITunesPath::*;

    let slot = match path {
        Author => Slot::Text(&mut ns.author),
        Block => Slot::Flag(&mut ns.block),
        ITunesPath::Duration => Slot::Duration(&mut ns.duration),
        Explicit => Slot::Flag(&mut ns.explicit),
        Complete => Slot::Flag(&mut ns.complete),
        NewFeedUrl => Slot::Text(&mut ns.new_feed_url),
        OwnerName => Slot::Text(&mut ns.owner.as_mut()?.name),
        OwnerEmail => Slot::Text(&mut ns.owner.as_mut()?.email),
        Subtitle => Slot::Text(&mut ns.subtitle),
        Summary => Slot::Text(&mut ns.summary),
        Keywords => Slot::List(&mut ns.keywords),
        IsClosedCaptioned => Slot::Flag(&mut ns.is_closed_captioned),
        Order => Slot::Integer(&mut ns.order),
        Type => Slot::Text(&mut ns.podcast_type),
        EpisodeType => Slot::Text(&mut ns.episode_type),
        Season => Slot::Integer(&mut ns.season),
        Episode => Slot::Integer(&mut ns.episode),
        Title => Slot::Text(&mut ns.title),
        // attribute-only
        Category | Subcategory | Image | Owner => return None,
    };
    Some(slot)
}

fn dublin_core_slot(ns: &mut DublinCoreNamespace, path: DublinCorePath) -> Slot<'_> {
    use DublinCorePath::*;

    match path {
        Title => Slot::Text(&mut ns.title),
        Creator => Slot::Text(&mut ns.creator),
        Subject => Slot::Text(&mut ns.subject),
        Description => Slot::Text(&mut ns.description),
        Publisher => Slot::Text(&mut ns.publisher),
        Contributor => Slot::Text(&mut ns.contributor),
        Date => Slot::Date(&mut ns.date),
        Type => Slot::Text(&mut ns.resource_type),
        Format => Slot::Text(&mut ns.format),
        Identifier => Slot::Text(&mut ns.identifier),
        Source => Slot::Text(&mut ns.source),
        Language => Slot::Text(&mut ns.language),
        Relation => Slot::Text(&mut ns.relation),
        Coverage => Slot::Text(&mut ns.coverage),
        Rights => Slot::Text(&mut ns.rights),
    }
}

fn syndication_slot(ns: &mut SyndicationNamespace, path: SyndicationPath) -> Slot<'_> {
    match path {
        SyndicationPath::UpdatePeriod => Slot::Period(&mut ns.update_period),
        SyndicationPath::UpdateFrequency => Slot::Integer(&mut ns.update_frequency),
        SyndicationPath::UpdateBase => Slot::Date(&mut ns.update_base),
    }
}

fn media_slot(ns: &mut MediaNamespace, path: MediaPath) -> Option<Slot<'_>> {
    use MediaPath::*;

    let slot = match path {
        GroupCredit => Slot::Text(&mut last(&mut ns.group.as_mut()?.credits)?.value),
        GroupCategory => Slot::Text(&mut ns.group.as_mut()?.category.as_mut()?.value),
        GroupRating => Slot::Text(&mut ns.group.as_mut()?.rating.as_mut()?.value),
        GroupTitle => Slot::Text(&mut ns.group.as_mut()?.title.as_mut()?.value),
        GroupDescription => Slot::Text(&mut ns.group.as_mut()?.description.as_mut()?.value),
        GroupKeywords => Slot::List(&mut ns.group.as_mut()?.keywords),
        Credit => Slot::Text(&mut last(&mut ns.credits)?.value),
        Category => Slot::Text(&mut ns.category.as_mut()?.value),
        Rating => Slot::Text(&mut ns.rating.as_mut()?.value),
        Keywords => Slot::List(&mut ns.keywords),
        Title => Slot::Text(&mut ns.title.as_mut()?.value),
        Description => Slot::Text(&mut ns.description.as_mut()?.value),
        Hash => Slot::Text(&mut last(&mut ns.hashes)?.value),
        Restriction => Slot::Text(&mut ns.restriction.as_mut()?.value),
        CommunityTags => Slot::List(&mut ns.community.as_mut()?.tags),
        Comment => Slot::PushText(&mut ns.comments),
        EmbedParam => Slot::Text(&mut last(&mut ns.embed.as_mut()?.params)?.value),
        Response => Slot::PushText(&mut ns.responses),
        BackLink => Slot::PushText(&mut ns.back_links),
        License => Slot::Text(&mut ns.license.as_mut()?.value),
        LocationPosition => Slot::Geo(&mut ns.location.as_mut()?.position),
        SceneTitle => Slot::Text(&mut last(&mut ns.scenes)?.title),
        SceneDescription => Slot::Text(&mut last(&mut ns.scenes)?.description),
        SceneStartTime => Slot::Duration(&mut last(&mut ns.scenes)?.start_time),
        SceneEndTime => Slot::Duration(&mut last(&mut ns.scenes)?.end_time),
        // containers and attribute-only elements
        Group | GroupContent | GroupThumbnail | Content | Thumbnail | Player | Community
        | CommunityStarRating | CommunityStatistics | Comments | Embed | Responses | BackLinks
        | Status | Price | SubTitle | PeerLink | Location | Rights | Scenes | Scene => {
            return None
        }
    };
    Some(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::{Category, ITunesCategory, Image, MediaScene};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_appends_within_one_element() {
        let mut doc = RssDocument::new();
        doc.start_item();
        rss_text(&mut doc, RssPath::ChannelItemTitle, "Hello", true);
        rss_text(&mut doc, RssPath::ChannelItemTitle, " World", false);
        assert_eq!(doc.feed.items()[0].title.as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_new_element_instance_replaces_text() {
        let mut doc = RssDocument::new();
        rss_text(&mut doc, RssPath::ChannelTitle, "First", true);
        rss_text(&mut doc, RssPath::ChannelTitle, "Second", true);
        assert_eq!(doc.feed.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_orphan_item_text_is_dropped() {
        let mut doc = RssDocument::new();
        rss_text(&mut doc, RssPath::ChannelItemTitle, "orphan", true);
        rss_text(
            &mut doc,
            RssPath::ChannelItemMedia(MediaPath::Credit),
            "nobody",
            true,
        );
        assert_eq!(doc.feed, Default::default());
    }

    #[test]
    fn test_text_for_unopened_container_is_dropped() {
        let mut doc = RssDocument::new();
        rss_text(&mut doc, RssPath::ChannelImageUrl, "https://example.com/a.png", true);
        assert!(doc.feed.image.is_none());

        doc.feed.image = Some(Image::default());
        rss_text(&mut doc, RssPath::ChannelImageUrl, "https://example.com/a.png", true);
        assert_eq!(
            doc.feed.image.unwrap().url.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_bad_structured_values_leave_field_alone() {
        let mut doc = RssDocument::new();
        rss_text(&mut doc, RssPath::ChannelTtl, "60", true);
        rss_text(&mut doc, RssPath::ChannelTtl, "an hour", true);
        assert_eq!(doc.feed.ttl, Some(60));

        rss_text(&mut doc, RssPath::ChannelPubDate, "not a date", true);
        assert_eq!(doc.feed.pub_date, None);
    }

    #[test]
    fn test_category_text_targets_last_category() {
        let mut doc = RssDocument::new();
        doc.feed.categories = Some(vec![Category::default(), Category::default()]);
        rss_text(&mut doc, RssPath::ChannelCategory, "Tech", true);
        let categories = doc.feed.categories.unwrap();
        assert_eq!(categories[0].value, None);
        assert_eq!(categories[1].value.as_deref(), Some("Tech"));
    }

    #[test]
    fn test_skip_lists() {
        let mut doc = RssDocument::new();
        rss_text(&mut doc, RssPath::ChannelSkipHoursHour, "0", true);
        rss_text(&mut doc, RssPath::ChannelSkipHoursHour, "noon", true);
        rss_text(&mut doc, RssPath::ChannelSkipHoursHour, "23", true);
        rss_text(&mut doc, RssPath::ChannelSkipDaysDay, "Satur", true);
        rss_text(&mut doc, RssPath::ChannelSkipDaysDay, "day", false);
        rss_text(&mut doc, RssPath::ChannelSkipDaysDay, "Sunday", true);
        assert_eq!(doc.feed.skip_hours, Some(vec![0, 23]));
        assert_eq!(
            doc.feed.skip_days,
            Some(vec!["Saturday".to_string(), "Sunday".to_string()])
        );
    }

    #[test]
    fn test_itunes_values() {
        let mut doc = RssDocument::new();
        doc.start_item();
        doc.item_mut().unwrap().itunes = Some(ITunesNamespace::default());
        let at = |path| RssPath::ChannelItemITunes(path);

        rss_text(&mut doc, at(ITunesPath::Duration), "1:02:03", true);
        rss_text(&mut doc, at(ITunesPath::Explicit), "yes", true);
        rss_text(&mut doc, at(ITunesPath::Keywords), "rust, xml ,, feeds", true);
        rss_text(&mut doc, at(ITunesPath::Episode), "12", true);
        rss_text(&mut doc, at(ITunesPath::Season), "two", true);

        let itunes = doc.feed.items()[0].itunes.clone().unwrap();
        assert_eq!(itunes.duration, Some(Duration::from_secs(3723)));
        assert_eq!(itunes.explicit, Some(true));
        assert_eq!(
            itunes.keywords,
            Some(vec!["rust".into(), "xml".into(), "feeds".into()])
        );
        assert_eq!(itunes.episode, Some(12));
        assert_eq!(itunes.season, None);
    }

    #[test]
    fn test_bad_duration_keeps_previous_value() {
        let mut ns = ITunesNamespace::default();
        apply(
            itunes_slot(&mut ns, ITunesPath::Duration).unwrap(),
            "02:03",
            true,
        );
        apply(
            itunes_slot(&mut ns, ITunesPath::Duration).unwrap(),
            "abc",
            true,
        );
        assert_eq!(ns.duration, Some(Duration::from_secs(123)));
    }

    #[test]
    fn test_itunes_category_has_no_text_slot() {
        let mut ns = ITunesNamespace {
            categories: Some(vec![ITunesCategory::default()]),
            ..Default::default()
        };
        assert!(itunes_slot(&mut ns, ITunesPath::Category).is_none());
        assert!(itunes_slot(&mut ns, ITunesPath::Subcategory).is_none());
    }

    #[test]
    fn test_media_location_and_scenes() {
        let mut ns = MediaNamespace {
            location: Some(Default::default()),
            scenes: Some(vec![MediaScene::default()]),
            ..Default::default()
        };
        apply(
            media_slot(&mut ns, MediaPath::LocationPosition).unwrap(),
            "35.669998 139.770004",
            true,
        );
        apply(
            media_slot(&mut ns, MediaPath::SceneStartTime).unwrap(),
            "00:15",
            true,
        );
        apply(
            media_slot(&mut ns, MediaPath::SceneTitle).unwrap(),
            "Opening",
            true,
        );

        let position = ns.location.unwrap().position.unwrap();
        assert_eq!(position.latitude, 35.669998);
        assert_eq!(position.longitude, 139.770004);
        let scene = &ns.scenes.unwrap()[0];
        assert_eq!(scene.start_time, Some(Duration::from_secs(15)));
        assert_eq!(scene.title.as_deref(), Some("Opening"));
    }

    #[test]
    fn test_media_group_text_without_group_is_dropped() {
        let mut ns = MediaNamespace::default();
        assert!(media_slot(&mut ns, MediaPath::GroupKeywords).is_none());
        assert!(media_slot(&mut ns, MediaPath::Credit).is_none());
        assert!(media_slot(&mut ns, MediaPath::Comment).is_some());
    }

    #[test]
    fn test_syndication_values() {
        let mut ns = SyndicationNamespace::default();
        apply(
            syndication_slot(&mut ns, SyndicationPath::UpdatePeriod),
            "Hourly",
            true,
        );
        apply(
            syndication_slot(&mut ns, SyndicationPath::UpdateFrequency),
            "2",
            true,
        );
        apply(
            syndication_slot(&mut ns, SyndicationPath::UpdateBase),
            "2000-01-01T12:00:00+00:00",
            true,
        );
        assert_eq!(ns.update_period, Some(UpdatePeriod::Hourly));
        assert_eq!(ns.update_frequency, Some(2));
        assert!(ns.update_base.is_some());
    }

    #[test]
    fn test_atom_person_text() {
        let mut doc = AtomDocument::new();
        atom_text(&mut doc, AtomPath::FeedAuthor(PersonPath::Name), "orphan", true);
        assert!(doc.feed.authors.is_none());

        doc.feed.authors = Some(vec![AtomPerson::default()]);
        atom_text(&mut doc, AtomPath::FeedAuthor(PersonPath::Name), "Jane", true);
        atom_text(
            &mut doc,
            AtomPath::FeedAuthor(PersonPath::Email),
            "jane@example.com",
            true,
        );
        let author = &doc.feed.authors.unwrap()[0];
        assert_eq!(author.name.as_deref(), Some("Jane"));
        assert_eq!(author.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_atom_entry_dates() {
        let mut doc = AtomDocument::new();
        doc.start_entry();
        atom_text(&mut doc, AtomPath::EntryUpdated, "2006-01-02T15:04:05Z", true);
        atom_text(&mut doc, AtomPath::EntryPublished, "yesterday", true);
        let entry = &doc.feed.entries()[0];
        assert!(entry.updated.is_some());
        assert_eq!(entry.published, None);
    }
}
