//! XML namespaces understood by the parser.
//!
//! Every element is identified by a [`Namespace`] plus its local name. Known
//! namespace URIs collapse to a fixed canonical prefix so structural paths can
//! be written once (`/rss/channel/item/media:group/media:credit`) no matter
//! which prefix a document happened to declare.

pub const RSS1: &str = "http://purl.org/rss/1.0/";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const ATOM: &str = "http://www.w3.org/2005/Atom";
pub const CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";
pub const DUBLIN_CORE: &str = "http://purl.org/dc/elements/1.1/";
pub const SYNDICATION: &str = "http://purl.org/rss/1.0/modules/syndication/";
pub const ITUNES: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
pub const MEDIA: &str = "http://search.yahoo.com/mrss/";
pub const GEORSS: &str = "http://www.georss.org/georss";
pub const GML: &str = "http://www.opengis.net/gml";

/// Namespace of an element, resolved against the document's declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// No namespace bound (plain RSS 2.0 elements).
    None,
    Rss1,
    Rdf,
    Atom,
    Content,
    DublinCore,
    Syndication,
    ITunes,
    Media,
    GeoRss,
    Gml,
    /// Any namespace the parser has no tables for.
    Other,
}

impl Namespace {
    /// Maps a namespace URI to a known namespace.
    ///
    /// Trailing slashes and the scheme are ignored when comparing, since feeds
    /// in the wild declare `http://search.yahoo.com/mrss` and
    /// `https://www.itunes.com/dtds/podcast-1.0.dtd` as often as the canonical
    /// forms.
    pub fn from_uri(uri: &str) -> Self {
        let wanted = normalize_uri(uri);
        [
            (RSS1, Namespace::Rss1),
            (RDF, Namespace::Rdf),
            (ATOM, Namespace::Atom),
            (CONTENT, Namespace::Content),
            (DUBLIN_CORE, Namespace::DublinCore),
            (SYNDICATION, Namespace::Syndication),
            (ITUNES, Namespace::ITunes),
            (MEDIA, Namespace::Media),
            (GEORSS, Namespace::GeoRss),
            (GML, Namespace::Gml),
        ]
        .into_iter()
        .find(|(known, _)| normalize_uri(known) == wanted)
        .map(|(_, ns)| ns)
        .unwrap_or(Namespace::Other)
    }

    /// Maps a prefix the document used without declaring it.
    ///
    /// Only the conventional prefixes are honoured; anything else stays
    /// [`Namespace::Other`].
    pub fn from_undeclared_prefix(prefix: &str) -> Self {
        match prefix {
            "rdf" => Namespace::Rdf,
            "atom" => Namespace::Atom,
            "content" => Namespace::Content,
            "dc" => Namespace::DublinCore,
            "sy" => Namespace::Syndication,
            "itunes" => Namespace::ITunes,
            "media" => Namespace::Media,
            "georss" => Namespace::GeoRss,
            "gml" => Namespace::Gml,
            _ => Namespace::Other,
        }
    }

    /// Canonical prefix used when rendering structural paths.
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::None => "",
            Namespace::Rss1 => "rss1",
            Namespace::Rdf => "rdf",
            Namespace::Atom => "atom",
            Namespace::Content => "content",
            Namespace::DublinCore => "dc",
            Namespace::Syndication => "sy",
            Namespace::ITunes => "itunes",
            Namespace::Media => "media",
            Namespace::GeoRss => "georss",
            Namespace::Gml => "gml",
            Namespace::Other => "?",
        }
    }
}

fn normalize_uri(uri: &str) -> &str {
    let uri = uri.trim();
    let uri = uri
        .strip_prefix("https://")
        .or_else(|| uri.strip_prefix("http://"))
        .unwrap_or(uri);
    uri.trim_end_matches('/')
}

/// A resolved element name: namespace plus local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementName {
    pub namespace: Namespace,
    pub local_name: String,
}

impl ElementName {
    pub fn new(namespace: Namespace, local_name: impl Into<String>) -> Self {
        Self {
            namespace,
            local_name: local_name.into(),
        }
    }

    /// An element in no namespace, as plain RSS 2.0 uses.
    pub fn local(local_name: impl Into<String>) -> Self {
        Self::new(Namespace::None, local_name)
    }
}
