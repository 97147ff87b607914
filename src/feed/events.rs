//! Tokenizer-agnostic XML events and the quick-xml source that produces them.
//!
//! The driver only ever sees [`XmlEvent`]s with namespaces already resolved,
//! so any tokenizer that can resolve `xmlns` declarations per event can be
//! plugged in. [`EventSource`] is the one we ship, built on
//! `quick_xml::NsReader`.

use std::io::BufRead;
use std::time::Duration;

use quick_xml::encoding::detect_encoding;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::dates::parse_duration;
use super::namespace::{ElementName, Namespace};
use super::parser::ParseError;
use super::values::{parse_flag, parse_float, parse_integer};

/// One structural event of an XML document.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlEvent {
    StartElement {
        name: ElementName,
        attributes: Attributes,
    },
    /// Decoded, coalesced and trimmed text of the innermost open element.
    Characters(String),
    EndElement {
        name: ElementName,
    },
    EndDocument,
}

/// Attributes of a start tag, keyed by local name.
///
/// Namespace declarations are not included. Lookups are by local name only,
/// which is all the feed vocabularies need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Raw value of the first attribute named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(parse_integer)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(parse_float)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(parse_flag)
    }

    pub fn duration(&self, key: &str) -> Option<Duration> {
        self.get(key).and_then(parse_duration)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// HTML 4 character entities: all of Latin-1 plus typographic punctuation.
#[rustfmt::skip]
const HTML_ENTITIES: &[(&str, &str)] = &[
    // ISO 8859-1
    ("nbsp", "\u{a0}"), ("iexcl", "\u{a1}"), ("cent", "\u{a2}"), ("pound", "\u{a3}"),
    ("curren", "\u{a4}"), ("yen", "\u{a5}"), ("brvbar", "\u{a6}"), ("sect", "\u{a7}"),
    ("uml", "\u{a8}"), ("copy", "\u{a9}"), ("ordf", "\u{aa}"), ("laquo", "\u{ab}"),
    ("not", "\u{ac}"), ("shy", "\u{ad}"), ("reg", "\u{ae}"), ("macr", "\u{af}"),
    ("deg", "\u{b0}"), ("plusmn", "\u{b1}"), ("sup2", "\u{b2}"), ("sup3", "\u{b3}"),
    ("acute", "\u{b4}"), ("micro", "\u{b5}"), ("para", "\u{b6}"), ("middot", "\u{b7}"),
    ("cedil", "\u{b8}"), ("sup1", "\u{b9}"), ("ordm", "\u{ba}"), ("raquo", "\u{bb}"),
    ("frac14", "\u{bc}"), ("frac12", "\u{bd}"), ("frac34", "\u{be}"), ("iquest", "\u{bf}"),
    ("Agrave", "\u{c0}"), ("Aacute", "\u{c1}"), ("Acirc", "\u{c2}"), ("Atilde", "\u{c3}"),
    ("Auml", "\u{c4}"), ("Aring", "\u{c5}"), ("AElig", "\u{c6}"), ("Ccedil", "\u{c7}"),
    ("Egrave", "\u{c8}"), ("Eacute", "\u{c9}"), ("Ecirc", "\u{ca}"), ("Euml", "\u{cb}"),
    ("Igrave", "\u{cc}"), ("Iacute", "\u{cd}"), ("Icirc", "\u{ce}"), ("Iuml", "\u{cf}"),
    ("ETH", "\u{d0}"), ("Ntilde", "\u{d1}"), ("Ograve", "\u{d2}"), ("Oacute", "\u{d3}"),
    ("Ocirc", "\u{d4}"), ("Otilde", "\u{d5}"), ("Ouml", "\u{d6}"), ("times", "\u{d7}"),
    ("Oslash", "\u{d8}"), ("Ugrave", "\u{d9}"), ("Uacute", "\u{da}"), ("Ucirc", "\u{db}"),
    ("Uuml", "\u{dc}"), ("Yacute", "\u{dd}"), ("THORN", "\u{de}"), ("szlig", "\u{df}"),
    ("agrave", "\u{e0}"), ("aacute", "\u{e1}"), ("acirc", "\u{e2}"), ("atilde", "\u{e3}"),
    ("auml", "\u{e4}"), ("aring", "\u{e5}"), ("aelig", "\u{e6}"), ("ccedil", "\u{e7}"),
    ("egrave", "\u{e8}"), ("eacute", "\u{e9}"), ("ecirc", "\u{ea}"), ("euml", "\u{eb}"),
    ("igrave", "\u{ec}"), ("iacute", "\u{ed}"), ("icirc", "\u{ee}"), ("iuml", "\u{ef}"),
    ("eth", "\u{f0}"), ("ntilde", "\u{f1}"), ("ograve", "\u{f2}"), ("oacute", "\u{f3}"),
    ("ocirc", "\u{f4}"), ("otilde", "\u{f5}"), ("ouml", "\u{f6}"), ("divide", "\u{f7}"),
    ("oslash", "\u{f8}"), ("ugrave", "\u{f9}"), ("uacute", "\u{fa}"), ("ucirc", "\u{fb}"),
    ("uuml", "\u{fc}"), ("yacute", "\u{fd}"), ("thorn", "\u{fe}"), ("yuml", "\u{ff}"),
    // Punctuation and symbols
    ("OElig", "\u{152}"), ("oelig", "\u{153}"), ("Scaron", "\u{160}"), ("scaron", "\u{161}"),
    ("Yuml", "\u{178}"), ("fnof", "\u{192}"), ("circ", "\u{2c6}"), ("tilde", "\u{2dc}"),
    ("ensp", "\u{2002}"), ("emsp", "\u{2003}"), ("thinsp", "\u{2009}"), ("zwnj", "\u{200c}"),
    ("zwj", "\u{200d}"), ("lrm", "\u{200e}"), ("rlm", "\u{200f}"), ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"), ("lsquo", "\u{2018}"), ("rsquo", "\u{2019}"), ("sbquo", "\u{201a}"),
    ("ldquo", "\u{201c}"), ("rdquo", "\u{201d}"), ("bdquo", "\u{201e}"), ("dagger", "\u{2020}"),
    ("Dagger", "\u{2021}"), ("bull", "\u{2022}"), ("hellip", "\u{2026}"), ("permil", "\u{2030}"),
    ("prime", "\u{2032}"), ("Prime", "\u{2033}"), ("lsaquo", "\u{2039}"), ("rsaquo", "\u{203a}"),
    ("euro", "\u{20ac}"), ("trade", "\u{2122}"),
];

fn resolve_entity(name: &str) -> Option<&'static str> {
    resolve_predefined_entity(name).or_else(|| {
        HTML_ENTITIES
            .iter()
            .find(|(entity, _)| *entity == name)
            .map(|(_, value)| *value)
    })
}

fn namespace_of(resolved: &ResolveResult) -> Namespace {
    match resolved {
        ResolveResult::Bound(ns) => Namespace::from_uri(&String::from_utf8_lossy(ns.as_ref())),
        ResolveResult::Unbound => Namespace::None,
        ResolveResult::Unknown(prefix) => {
            Namespace::from_undeclared_prefix(&String::from_utf8_lossy(prefix))
        }
    }
}

/// True when the first bytes of a document announce UTF-16, by byte order
/// mark or by a `<?` encoded in two-byte units.
pub(crate) fn is_utf16(head: &[u8]) -> bool {
    detect_encoding(head).is_some_and(|(encoding, _)| encoding.name().starts_with("UTF-16"))
}

/// Re-encodes a UTF-16 document as UTF-8, or `None` if `bytes` is not UTF-16.
///
/// The reader only understands ASCII-compatible encodings, so UTF-16 input
/// has to be converted up front.
pub(crate) fn utf16_to_utf8(bytes: &[u8]) -> Option<Result<String, ParseError>> {
    let (encoding, bom) = detect_encoding(bytes)
        .filter(|&(encoding, _)| encoding.name().starts_with("UTF-16"))?;
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom..]);
    if had_errors {
        return Some(Err(malformed(
            &[],
            0,
            format!("invalid {} byte sequence", encoding.name()),
        )));
    }
    Some(Ok(text.into_owned()))
}

/// Builds a `Malformed` error naming the innermost open element.
fn malformed(open: &[String], position: u64, message: impl Into<String>) -> ParseError {
    ParseError::Malformed {
        position,
        context: open.last().cloned(),
        message: message.into(),
    }
}

/// Pull-style event source over any buffered reader.
///
/// Text and CDATA between two tags are coalesced into a single
/// [`XmlEvent::Characters`]. An element's text is trimmed at its edges only:
/// leading whitespace after the start tag and trailing whitespace before the
/// end tag go, while whitespace next to inline child elements stays. Runs
/// that end up empty are dropped. Unlike the underlying reader, hitting end
/// of input with elements still open is an error.
///
/// The document encoding comes from the byte order mark or the XML
/// declaration (UTF-8 when neither says otherwise). UTF-16 input must be
/// converted first, see [`EventSource::from_str`].
pub struct EventSource<R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    /// Qualified names of the open elements, for error context.
    open: Vec<String>,
    /// Per open element: whether it has produced text yet.
    text_seen: Vec<bool>,
    text: String,
    pending: Option<XmlEvent>,
    finished: bool,
}

impl<R: BufRead> EventSource<R> {
    pub fn new(input: R) -> Self {
        Self::with_reader(NsReader::from_reader(input))
    }

    fn with_reader(mut reader: NsReader<R>) -> Self {
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
            open: Vec::new(),
            text_seen: Vec::new(),
            text: String::new(),
            pending: None,
            finished: false,
        }
    }

    /// Byte offset of the reader in the input.
    pub fn position(&self) -> u64 {
        self.reader.buffer_position()
    }

    pub fn next_event(&mut self) -> Result<XmlEvent, ParseError> {
        if let Some(event) = self.pending.take() {
            return Ok(event);
        }
        loop {
            match self.read_token()? {
                Token::Text(chunk) => self.text.push_str(&chunk),
                Token::Skip => {}
                Token::Event(event) => {
                    let closing = !matches!(event, XmlEvent::StartElement { .. });
                    let text = self.take_text(closing);
                    match &event {
                        XmlEvent::StartElement { .. } => self.text_seen.push(false),
                        XmlEvent::EndElement { .. } => {
                            self.text_seen.pop();
                        }
                        _ => {}
                    }
                    return Ok(match text {
                        Some(text) => {
                            self.pending = Some(event);
                            XmlEvent::Characters(text)
                        }
                        None => event,
                    });
                }
            }
        }
    }

    /// Drains the buffered run as text of the innermost open element.
    ///
    /// `closing` is true when the run is followed by that element's end tag
    /// (or the end of the document) rather than by a child's start tag.
    fn take_text(&mut self, closing: bool) -> Option<String> {
        let run = std::mem::take(&mut self.text);
        let seen = self.text_seen.last_mut();
        let first = !seen.as_deref().is_some_and(|seen| *seen);

        let mut text = run.as_str();
        if first {
            text = text.trim_start();
        }
        if closing || seen.is_none() {
            text = text.trim_end();
        }
        if text.is_empty() {
            return None;
        }
        if let Some(seen) = seen {
            *seen = true;
        }
        Some(text.to_owned())
    }

    fn read_token(&mut self) -> Result<Token, ParseError> {
        if self.finished {
            return Ok(Token::Event(XmlEvent::EndDocument));
        }
        self.buf.clear();
        let (namespace, event) = match self.reader.read_resolved_event_into(&mut self.buf) {
            Ok((resolved, event)) => (namespace_of(&resolved), event),
            Err(err) => {
                let position = self.reader.error_position();
                return Err(malformed(&self.open, position, err.to_string()));
            }
        };

        match event {
            Event::Start(start) => {
                let qualified = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

                let mut attributes = Attributes::new();
                for attr in start.attributes() {
                    let attr = match attr {
                        Ok(attr) => attr,
                        Err(err) => {
                            tracing::debug!(element = %qualified, error = %err, "Skipping malformed attribute");
                            continue;
                        }
                    };
                    if attr.key.as_namespace_binding().is_some() {
                        continue;
                    }
                    let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
                    let value = attr
                        .decode_and_unescape_value_with(self.reader.decoder(), resolve_entity)
                        .map_err(|err| {
                            let position = self.reader.buffer_position();
                            malformed(&self.open, position, err.to_string())
                        })?;
                    attributes.push(key, value.into_owned());
                }

                self.open.push(qualified);
                Ok(Token::Event(XmlEvent::StartElement {
                    name: ElementName::new(namespace, local),
                    attributes,
                }))
            }
            Event::End(end) => {
                let local = String::from_utf8_lossy(end.local_name().as_ref()).into_owned();
                self.open.pop();
                Ok(Token::Event(XmlEvent::EndElement {
                    name: ElementName::new(namespace, local),
                }))
            }
            Event::Text(text) => {
                let chunk = text.unescape_with(resolve_entity).map_err(|err| {
                    let position = self.reader.buffer_position();
                    malformed(&self.open, position, err.to_string())
                })?;
                Ok(Token::Text(chunk.into_owned()))
            }
            Event::CData(cdata) => {
                let chunk = self.reader.decoder().decode(&cdata).map_err(|err| {
                    let position = self.reader.buffer_position();
                    malformed(&self.open, position, err.to_string())
                })?;
                Ok(Token::Text(chunk.into_owned()))
            }
            Event::Eof => {
                if !self.open.is_empty() {
                    let position = self.reader.buffer_position();
                    return Err(malformed(&self.open, position, "unexpected end of document"));
                }
                self.finished = true;
                Ok(Token::Event(XmlEvent::EndDocument))
            }
            // Declarations, comments, processing instructions, doctypes and
            // (never emitted, see expand_empty_elements) empty tags.
            _ => Ok(Token::Skip),
        }
    }
}

impl<'a> EventSource<&'a [u8]> {
    /// Source over text that is already UTF-8, whatever its XML declaration
    /// claims. Byte offsets refer to `text`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Self {
        Self::with_reader(NsReader::from_str(text))
    }
}

enum Token {
    Text(String),
    Event(XmlEvent),
    Skip,
}
