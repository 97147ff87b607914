//! Structural path resolution.
//!
//! The parser never dispatches on a tag name alone: `title` means something
//! different under `channel`, `item`, `image` and `textInput`. Instead the
//! [`ElementStack`] keeps the canonical path of the open elements
//! (`/rss/channel/item/media:group/media:credit`) and each dialect owns a
//! [`PathTable`] mapping such strings to a closed path enum. A table miss is
//! the "unknown" path: the element and its text are ignored and parsing
//! carries on.

pub mod atom;
pub mod extensions;
pub mod rss;

use std::collections::HashMap;

use super::detect::Dialect;
use super::namespace::ElementName;

pub use atom::{AtomPath, PersonPath};
pub use extensions::{DublinCorePath, ITunesPath, MediaPath, SyndicationPath};
pub use rss::RssPath;

/// Static mapping from canonical structural path to a path enum value.
///
/// Tables are built once from relative `(suffix, path)` slices so that the
/// extension namespaces can be mounted under several parents (channel, item,
/// entry) without repeating their entries.
#[derive(Debug)]
pub struct PathTable<P> {
    entries: HashMap<String, P>,
}

impl<P: Copy> PathTable<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, base: &str, relative: &str, path: P) {
        self.entries.insert(join(base, relative), path);
    }

    /// Mounts `entries` under `base`.
    pub fn extend(&mut self, base: &str, entries: &[(&str, P)]) {
        for &(relative, path) in entries {
            self.insert(base, relative, path);
        }
    }

    /// Mounts a nested path family under `base`, wrapping each value.
    pub fn extend_nested<E: Copy>(&mut self, base: &str, entries: &[(&str, E)], wrap: fn(E) -> P) {
        for &(relative, nested) in entries {
            self.insert(base, relative, wrap(nested));
        }
    }

    pub fn get(&self, path: &str) -> Option<P> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Copy> Default for PathTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn join(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{relative}")
    }
}

#[derive(Debug)]
struct Frame<P> {
    /// Length of the path string before this element was pushed.
    start: usize,
    resolved: Option<P>,
    received_text: bool,
}

/// Stack of open elements plus the canonical path they spell.
///
/// Each frame remembers the path it resolved to when it was opened, so text
/// events look up their target in O(1) instead of re-resolving.
#[derive(Debug)]
pub struct ElementStack<P> {
    dialect: Dialect,
    path: String,
    frames: Vec<Frame<P>>,
}

impl<P: Copy> ElementStack<P> {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            path: String::new(),
            frames: Vec::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Opens `name`, resolving the new structural path with `resolve`.
    pub fn push(
        &mut self,
        name: &ElementName,
        resolve: impl FnOnce(Dialect, &str) -> Option<P>,
    ) -> Option<P> {
        let start = self.path.len();
        self.path.push('/');
        if !self.dialect.is_home(name.namespace) {
            self.path.push_str(name.namespace.prefix());
            self.path.push(':');
        }
        self.path.push_str(&name.local_name);

        let resolved = resolve(self.dialect, &self.path);
        self.frames.push(Frame {
            start,
            resolved,
            received_text: false,
        });
        resolved
    }

    /// Closes the innermost element. Returns `false` on underflow.
    pub fn pop(&mut self) -> bool {
        match self.frames.pop() {
            Some(frame) => {
                self.path.truncate(frame.start);
                true
            }
            None => false,
        }
    }

    /// Resolved path of the innermost open element.
    pub fn current(&self) -> Option<P> {
        self.frames.last().and_then(|frame| frame.resolved)
    }

    /// Records that the innermost element received text.
    ///
    /// Returns `true` for the first chunk of this element instance, which
    /// the character mapper uses to decide between set and append.
    pub fn note_text(&mut self) -> bool {
        match self.frames.last_mut() {
            Some(frame) => !std::mem::replace(&mut frame.received_text, true),
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
