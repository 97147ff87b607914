//! Root-element dialect detection.

use serde::Serialize;

use super::namespace::{ElementName, Namespace};

/// One of the three root syndication formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// RSS 0.9x / 2.0, rooted at `<rss>`.
    Rss,
    /// RDF / RSS 1.0, rooted at `<rdf:RDF>`.
    Rdf,
    /// Atom 1.0, rooted at `<feed>`.
    Atom,
}

impl Dialect {
    /// Whether elements in `namespace` belong to the dialect itself and are
    /// therefore rendered without a prefix in structural paths.
    ///
    /// Unbound elements always count as home elements so that RDF and Atom
    /// documents that forget their default namespace still resolve.
    pub fn is_home(self, namespace: Namespace) -> bool {
        match self {
            Dialect::Rss => namespace == Namespace::None,
            Dialect::Rdf => matches!(namespace, Namespace::None | Namespace::Rss1),
            Dialect::Atom => matches!(namespace, Namespace::None | Namespace::Atom),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Rss => "rss",
            Dialect::Rdf => "rdf",
            Dialect::Atom => "atom",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the dialect from the document's root element.
///
/// Returns `None` for anything that is not one of the three known roots
/// (an HTML page, an OPML file, a sitemap, ...).
pub fn detect(root: &ElementName) -> Option<Dialect> {
    match (root.namespace, root.local_name.as_str()) {
        (Namespace::None, "rss") => Some(Dialect::Rss),
        (Namespace::Rdf, "RDF") => Some(Dialect::Rdf),
        (Namespace::Atom | Namespace::None, "feed") => Some(Dialect::Atom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_roots() {
        assert_eq!(detect(&ElementName::local("rss")), Some(Dialect::Rss));
        assert_eq!(
            detect(&ElementName::new(Namespace::Rdf, "RDF")),
            Some(Dialect::Rdf)
        );
        assert_eq!(
            detect(&ElementName::new(Namespace::Atom, "feed")),
            Some(Dialect::Atom)
        );
    }

    #[test]
    fn test_atom_without_namespace_still_detected() {
        assert_eq!(detect(&ElementName::local("feed")), Some(Dialect::Atom));
    }

    #[test]
    fn test_unknown_roots_rejected() {
        assert_eq!(detect(&ElementName::local("html")), None);
        assert_eq!(detect(&ElementName::local("opml")), None);
        // RDF root without the RDF namespace is not an RDF feed
        assert_eq!(detect(&ElementName::local("RDF")), None);
        assert_eq!(detect(&ElementName::new(Namespace::Other, "rss")), None);
    }

    #[test]
    fn test_home_namespaces() {
        assert!(Dialect::Rss.is_home(Namespace::None));
        assert!(!Dialect::Rss.is_home(Namespace::Atom));
        assert!(Dialect::Rdf.is_home(Namespace::Rss1));
        assert!(!Dialect::Rdf.is_home(Namespace::Rdf));
        assert!(Dialect::Atom.is_home(Namespace::Atom));
        assert!(!Dialect::Atom.is_home(Namespace::Media));
    }
}
