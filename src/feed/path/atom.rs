//! Paths for Atom 1.0.

use std::sync::LazyLock;

use super::extensions::{MediaPath, MEDIA_PATHS};
use super::PathTable;
use crate::feed::detect::Dialect;

/// Position inside an `atom:author` / `atom:contributor` construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonPath {
    /// The person element itself.
    Start,
    Name,
    Email,
    Uri,
}

const PERSON_PATHS: &[(&str, PersonPath)] = &[
    ("", PersonPath::Start),
    ("name", PersonPath::Name),
    ("email", PersonPath::Email),
    ("uri", PersonPath::Uri),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomPath {
    FeedTitle,
    FeedSubtitle,
    FeedLink,
    FeedUpdated,
    FeedAuthor(PersonPath),
    FeedContributor(PersonPath),
    FeedId,
    FeedGenerator,
    FeedIcon,
    FeedLogo,
    FeedRights,
    FeedCategory,
    FeedEntry,
    EntryTitle,
    EntrySummary,
    EntryAuthor(PersonPath),
    EntryContributor(PersonPath),
    EntryLink,
    EntryUpdated,
    EntryCategory,
    EntryId,
    EntryContent,
    EntryPublished,
    EntrySource,
    EntrySourceId,
    EntrySourceTitle,
    EntrySourceUpdated,
    EntryRights,
    EntryMedia(MediaPath),
}

const FEED_PATHS: &[(&str, AtomPath)] = &[
    ("title", AtomPath::FeedTitle),
    ("subtitle", AtomPath::FeedSubtitle),
    ("link", AtomPath::FeedLink),
    ("updated", AtomPath::FeedUpdated),
    ("id", AtomPath::FeedId),
    ("generator", AtomPath::FeedGenerator),
    ("icon", AtomPath::FeedIcon),
    ("logo", AtomPath::FeedLogo),
    ("rights", AtomPath::FeedRights),
    ("category", AtomPath::FeedCategory),
    ("entry", AtomPath::FeedEntry),
];

const ENTRY_PATHS: &[(&str, AtomPath)] = &[
    ("title", AtomPath::EntryTitle),
    ("summary", AtomPath::EntrySummary),
    ("link", AtomPath::EntryLink),
    ("updated", AtomPath::EntryUpdated),
    ("category", AtomPath::EntryCategory),
    ("id", AtomPath::EntryId),
    ("content", AtomPath::EntryContent),
    ("published", AtomPath::EntryPublished),
    ("source", AtomPath::EntrySource),
    ("source/id", AtomPath::EntrySourceId),
    ("source/title", AtomPath::EntrySourceTitle),
    ("source/updated", AtomPath::EntrySourceUpdated),
    ("rights", AtomPath::EntryRights),
];

static ATOM_TABLE: LazyLock<PathTable<AtomPath>> = LazyLock::new(|| {
    let mut table = PathTable::new();
    table.extend("/feed", FEED_PATHS);
    table.extend_nested("/feed/author", PERSON_PATHS, AtomPath::FeedAuthor);
    table.extend_nested("/feed/contributor", PERSON_PATHS, AtomPath::FeedContributor);
    table.extend("/feed/entry", ENTRY_PATHS);
    table.extend_nested("/feed/entry/author", PERSON_PATHS, AtomPath::EntryAuthor);
    table.extend_nested(
        "/feed/entry/contributor",
        PERSON_PATHS,
        AtomPath::EntryContributor,
    );
    table.extend_nested("/feed/entry", MEDIA_PATHS, AtomPath::EntryMedia);
    table
});

/// Resolves a canonical structural path for an Atom document.
pub fn resolve(_dialect: Dialect, path: &str) -> Option<AtomPath> {
    ATOM_TABLE.get(path)
}
