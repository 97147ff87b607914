//! In-progress documents: the model being built plus the cursor that names
//! the current item or entry.
//!
//! The cursor is only ever set by a container start (`<item>`, `<entry>`), so
//! item-scoped mutations that arrive before any item exists find `None` and
//! do nothing.

use super::model::{push, AtomEntry, AtomFeed, RssFeed, RssItem};

#[derive(Debug, Default)]
pub struct RssDocument {
    pub feed: RssFeed,
    current_item: Option<usize>,
}

impl RssDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item and makes it current.
    pub fn start_item(&mut self) {
        push(&mut self.feed.items, RssItem::default());
        self.current_item = self.feed.items.as_ref().map(|items| items.len() - 1);
    }

    pub fn item_mut(&mut self) -> Option<&mut RssItem> {
        let index = self.current_item?;
        self.feed.items.as_mut()?.get_mut(index)
    }

    pub fn into_feed(self) -> RssFeed {
        self.feed
    }
}

#[derive(Debug, Default)]
pub struct AtomDocument {
    pub feed: AtomFeed,
    current_entry: Option<usize>,
}

impl AtomDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and makes it current.
    pub fn start_entry(&mut self) {
        push(&mut self.feed.entries, AtomEntry::default());
        self.current_entry = self.feed.entries.as_ref().map(|entries| entries.len() - 1);
    }

    pub fn entry_mut(&mut self) -> Option<&mut AtomEntry> {
        let index = self.current_entry?;
        self.feed.entries.as_mut()?.get_mut(index)
    }

    pub fn into_feed(self) -> AtomFeed {
        self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_current_item_before_first_start() {
        let mut doc = RssDocument::new();
        assert!(doc.item_mut().is_none());
        doc.start_item();
        doc.item_mut().unwrap().title = Some("first".into());
        doc.start_item();
        doc.item_mut().unwrap().title = Some("second".into());

        let titles: Vec<_> = doc
            .feed
            .items()
            .iter()
            .map(|item| item.title.as_deref())
            .collect();
        assert_eq!(titles, vec![Some("first"), Some("second")]);
    }

    #[test]
    fn test_entry_cursor_tracks_last_entry() {
        let mut doc = AtomDocument::new();
        assert!(doc.entry_mut().is_none());
        doc.start_entry();
        doc.start_entry();
        doc.entry_mut().unwrap().id = Some("urn:2".into());
        let feed = doc.into_feed();
        assert_eq!(feed.entries()[0].id, None);
        assert_eq!(feed.entries()[1].id.as_deref(), Some("urn:2"));
    }
}
