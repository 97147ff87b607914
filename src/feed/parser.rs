//! Parser driver.
//!
//! [`FeedBuilder`] is the state machine: it waits for the root element,
//! commits to the dialect the root names, then routes every start tag
//! through the path table to the attribute mapper and every text event to
//! the character mapper. [`parse`], [`parse_reader`] and [`FeedParser`] pair
//! it with the quick-xml [`EventSource`].

use std::io::{BufRead, Read};

use thiserror::Error;

use super::attributes::{atom_start, rss_start};
use super::characters::{atom_text, rss_text};
use super::detect::{detect, Dialect};
use super::document::{AtomDocument, RssDocument};
use super::events::{is_utf16, utf16_to_utf8, EventSource, XmlEvent};
use super::model::Feed;
use super::path::{atom, rss, AtomPath, ElementStack, RssPath};

/// Document-level parse failures.
///
/// Field-level problems (a bad date, a non-numeric width, an unknown
/// element) never show up here; they leave the field empty instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The root element is not `rss`, `rdf:RDF` or `feed`.
    #[error("Document is not an RSS, RDF or Atom feed")]
    NotRecognized,
    /// No root element at all.
    #[error("Document is empty")]
    Empty,
    /// The markup itself is broken (mismatched or unclosed tags, bad bytes).
    #[error("Malformed document at byte {position}{}: {message}", in_element(.context))]
    Malformed {
        /// Byte offset into the input.
        position: u64,
        /// Innermost open element, when there was one.
        context: Option<String>,
        message: String,
    },
}

fn in_element(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|element| format!(" in <{element}>"))
        .unwrap_or_default()
}

impl ParseError {
    /// Fills in the byte offset of a `Malformed` error raised without one.
    fn at(self, offset: u64) -> Self {
        match self {
            ParseError::Malformed {
                position: 0,
                context,
                message,
            } => ParseError::Malformed {
                position: offset,
                context,
                message,
            },
            other => other,
        }
    }
}

enum State {
    AwaitingRoot {
        saw_text: bool,
    },
    Rss {
        stack: ElementStack<RssPath>,
        doc: RssDocument,
    },
    Atom {
        stack: ElementStack<AtomPath>,
        doc: AtomDocument,
    },
    /// The root named something other than a feed; everything after it is
    /// ignored.
    Unrecognized,
}

/// Event-driven builder that turns [`XmlEvent`]s into a [`Feed`].
///
/// Works with any tokenizer that resolves namespaces per event. Callers feed
/// events through [`handle`](Self::handle) until the document ends or
/// [`wants_more`](Self::wants_more) turns false, then call
/// [`finish`](Self::finish).
pub struct FeedBuilder {
    state: State,
    expected: Option<Dialect>,
}

impl Default for FeedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self {
            state: State::AwaitingRoot { saw_text: false },
            expected: None,
        }
    }

    /// Records the dialect the caller expects. Detection still decides; a
    /// mismatch is only logged.
    pub fn expecting(mut self, dialect: Dialect) -> Self {
        self.expected = Some(dialect);
        self
    }

    /// Dialect committed to by the root element, if any yet.
    pub fn dialect(&self) -> Option<Dialect> {
        match &self.state {
            State::Rss { stack, .. } => Some(stack.dialect()),
            State::Atom { .. } => Some(Dialect::Atom),
            State::AwaitingRoot { .. } | State::Unrecognized => None,
        }
    }

    /// False once the root turned out not to be a feed; nothing that follows
    /// can change the outcome.
    pub fn wants_more(&self) -> bool {
        !matches!(self.state, State::Unrecognized)
    }

    pub fn handle(&mut self, event: XmlEvent) -> Result<(), ParseError> {
        match &mut self.state {
            State::AwaitingRoot { saw_text } => match event {
                XmlEvent::StartElement { name, attributes } => {
                    self.state = match detect(&name) {
                        Some(dialect) => {
                            tracing::debug!(dialect = %dialect, "Detected feed dialect");
                            if let Some(expected) = self.expected.filter(|e| *e != dialect) {
                                tracing::warn!(
                                    expected = %expected,
                                    detected = %dialect,
                                    "Feed dialect differs from the expected one"
                                );
                            }
                            let mut state = Self::start(dialect);
                            Self::dispatch(&mut state, XmlEvent::StartElement { name, attributes })?;
                            state
                        }
                        None => {
                            tracing::debug!(root = %name.local_name, "Root element is not a feed");
                            State::Unrecognized
                        }
                    };
                    Ok(())
                }
                XmlEvent::Characters(_) => {
                    *saw_text = true;
                    Ok(())
                }
                XmlEvent::EndElement { name } => Err(unbalanced(&name.local_name)),
                XmlEvent::EndDocument => Ok(()),
            },
            state => Self::dispatch(state, event),
        }
    }

    fn start(dialect: Dialect) -> State {
        match dialect {
            Dialect::Rss | Dialect::Rdf => State::Rss {
                stack: ElementStack::new(dialect),
                doc: RssDocument::new(),
            },
            Dialect::Atom => State::Atom {
                stack: ElementStack::new(dialect),
                doc: AtomDocument::new(),
            },
        }
    }

    fn dispatch(state: &mut State, event: XmlEvent) -> Result<(), ParseError> {
        match state {
            State::Rss { stack, doc } => match event {
                XmlEvent::StartElement { name, attributes } => {
                    match stack.push(&name, rss::resolve) {
                        Some(path) => rss_start(doc, path, &attributes),
                        None => tracing::trace!(path = stack.path(), "Ignoring unknown element"),
                    }
                    Ok(())
                }
                XmlEvent::Characters(text) => {
                    if let Some(path) = stack.current() {
                        let first_chunk = stack.note_text();
                        rss_text(doc, path, &text, first_chunk);
                    }
                    Ok(())
                }
                XmlEvent::EndElement { name } => pop(stack, &name.local_name),
                XmlEvent::EndDocument => Ok(()),
            },
            State::Atom { stack, doc } => match event {
                XmlEvent::StartElement { name, attributes } => {
                    match stack.push(&name, atom::resolve) {
                        Some(path) => atom_start(doc, path, &attributes),
                        None => tracing::trace!(path = stack.path(), "Ignoring unknown element"),
                    }
                    Ok(())
                }
                XmlEvent::Characters(text) => {
                    if let Some(path) = stack.current() {
                        let first_chunk = stack.note_text();
                        atom_text(doc, path, &text, first_chunk);
                    }
                    Ok(())
                }
                XmlEvent::EndElement { name } => pop(stack, &name.local_name),
                XmlEvent::EndDocument => Ok(()),
            },
            State::AwaitingRoot { .. } | State::Unrecognized => Ok(()),
        }
    }

    /// Consumes the builder and yields the finished model.
    pub fn finish(self) -> Result<Feed, ParseError> {
        match self.state {
            State::AwaitingRoot { saw_text: false } => Err(ParseError::Empty),
            State::AwaitingRoot { saw_text: true } | State::Unrecognized => {
                Err(ParseError::NotRecognized)
            }
            State::Rss { stack, doc } => {
                ensure_closed(&stack)?;
                Ok(Feed::Rss(doc.into_feed()))
            }
            State::Atom { stack, doc } => {
                ensure_closed(&stack)?;
                Ok(Feed::Atom(doc.into_feed()))
            }
        }
    }
}

fn pop<P: Copy>(stack: &mut ElementStack<P>, name: &str) -> Result<(), ParseError> {
    if stack.pop() {
        Ok(())
    } else {
        Err(unbalanced(name))
    }
}

fn unbalanced(name: &str) -> ParseError {
    ParseError::Malformed {
        position: 0,
        context: None,
        message: format!("closing tag </{name}> has no matching open tag"),
    }
}

fn ensure_closed<P: Copy>(stack: &ElementStack<P>) -> Result<(), ParseError> {
    if stack.depth() == 0 {
        return Ok(());
    }
    Err(ParseError::Malformed {
        position: 0,
        context: Some(stack.path().to_owned()),
        message: "document ended with open elements".to_owned(),
    })
}

/// Parses a complete document held in memory.
///
/// UTF-8, UTF-16 (either byte order) and any ASCII-compatible encoding named
/// in the XML declaration are accepted.
///
/// # Errors
///
/// * [`ParseError::Empty`] - no root element
/// * [`ParseError::NotRecognized`] - the root is not a feed
/// * [`ParseError::Malformed`] - broken markup anywhere before the end
///
/// # Example
///
/// ```
/// use feedloom::feed::{parse, Feed};
///
/// let xml = br#"<rss version="2.0"><channel><title>Example</title></channel></rss>"#;
/// let feed = parse(xml).unwrap();
/// assert!(matches!(feed, Feed::Rss(_)));
/// assert_eq!(feed.title(), Some("Example"));
/// ```
pub fn parse(bytes: &[u8]) -> Result<Feed, ParseError> {
    parse_bytes(bytes, FeedBuilder::new())
}

fn parse_bytes(bytes: &[u8], builder: FeedBuilder) -> Result<Feed, ParseError> {
    match utf16_to_utf8(bytes) {
        Some(converted) => {
            let text = converted?;
            tracing::debug!(bytes = bytes.len(), "Converted UTF-16 document to UTF-8");
            run(EventSource::from_str(&text), builder)
        }
        None => run(EventSource::new(bytes), builder),
    }
}

/// Parses a document from any buffered reader, pulling events as it goes.
///
/// Stops reading as soon as the root element shows the input is not a feed.
/// UTF-16 input is the exception: it is read to the end and converted
/// before parsing starts.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Feed, ParseError> {
    let utf16 = is_utf16(reader.fill_buf().map_err(read_failure)?);
    if utf16 {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(read_failure)?;
        return parse(&bytes);
    }
    run(EventSource::new(reader), FeedBuilder::new())
}

fn read_failure(err: std::io::Error) -> ParseError {
    ParseError::Malformed {
        position: 0,
        context: None,
        message: err.to_string(),
    }
}

fn run<R: BufRead>(mut source: EventSource<R>, mut builder: FeedBuilder) -> Result<Feed, ParseError> {
    loop {
        let event = source.next_event().inspect_err(|e| {
            tracing::warn!(error = %e, "Malformed feed document");
        })?;
        let done = event == XmlEvent::EndDocument;
        builder
            .handle(event)
            .map_err(|e| e.at(source.position()))?;
        if done || !builder.wants_more() {
            break;
        }
    }
    builder.finish().map_err(|e| e.at(source.position()))
}

/// Chunked front end for documents that arrive in pieces.
///
/// [`push`](Self::push) only buffers bytes; it never looks at them and
/// never fails. All parsing, error reporting included, happens in
/// [`finish`](Self::finish), which returns the model in one piece. Use
/// [`parse_reader`] to parse while reading.
#[derive(Debug, Default)]
pub struct FeedParser {
    buffer: Vec<u8>,
    expected: Option<Dialect>,
}

impl FeedParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hints the expected dialect. Detection stays authoritative.
    pub fn expecting(mut self, dialect: Dialect) -> Self {
        self.expected = Some(dialect);
        self
    }

    /// Appends `chunk` to the buffer without parsing it.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Bytes received so far.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Parses everything pushed so far as one complete document.
    ///
    /// # Errors
    ///
    /// Same as [`parse`].
    pub fn finish(self) -> Result<Feed, ParseError> {
        let mut builder = FeedBuilder::new();
        if let Some(dialect) = self.expected {
            builder = builder.expecting(dialect);
        }
        parse_bytes(&self.buffer, builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::events::Attributes;
    use crate::feed::namespace::{ElementName, Namespace};
    use pretty_assertions::assert_eq;

    fn start(local: &str) -> XmlEvent {
        XmlEvent::StartElement {
            name: ElementName::local(local),
            attributes: Attributes::new(),
        }
    }

    fn end(local: &str) -> XmlEvent {
        XmlEvent::EndElement {
            name: ElementName::local(local),
        }
    }

    fn text(value: &str) -> XmlEvent {
        XmlEvent::Characters(value.to_owned())
    }

    fn build(events: Vec<XmlEvent>) -> Result<Feed, ParseError> {
        let mut builder = FeedBuilder::new();
        for event in events {
            builder.handle(event)?;
        }
        builder.finish()
    }

    #[test]
    fn test_chunked_text_is_appended() {
        let feed = build(vec![
            start("rss"),
            start("channel"),
            start("title"),
            text("Hello"),
            text(" World"),
            end("title"),
            end("channel"),
            end("rss"),
            XmlEvent::EndDocument,
        ])
        .unwrap();
        assert_eq!(feed.title(), Some("Hello World"));
    }

    #[test]
    fn test_repeated_image_keeps_first() {
        let feed = build(vec![
            start("rss"),
            start("channel"),
            start("image"),
            start("url"),
            text("https://example.com/first.png"),
            end("url"),
            end("image"),
            start("image"),
            end("image"),
            end("channel"),
            end("rss"),
        ])
        .unwrap();
        let image = feed.as_rss().unwrap().image.clone().unwrap();
        assert_eq!(image.url.as_deref(), Some("https://example.com/first.png"));
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let feed = build(vec![
            start("rss"),
            start("channel"),
            XmlEvent::StartElement {
                name: ElementName::new(Namespace::Other, "widget"),
                attributes: Attributes::new(),
            },
            start("title"),
            text("nested in unknown"),
            end("title"),
            XmlEvent::EndElement {
                name: ElementName::new(Namespace::Other, "widget"),
            },
            start("title"),
            text("Real"),
            end("title"),
            end("channel"),
            end("rss"),
        ])
        .unwrap();
        assert_eq!(feed.title(), Some("Real"));
    }

    #[test]
    fn test_root_decides_dialect() {
        let mut builder = FeedBuilder::new();
        assert_eq!(builder.dialect(), None);
        builder
            .handle(XmlEvent::StartElement {
                name: ElementName::new(Namespace::Rdf, "RDF"),
                attributes: Attributes::new(),
            })
            .unwrap();
        assert_eq!(builder.dialect(), Some(Dialect::Rdf));
    }

    #[test]
    fn test_non_feed_root_stops_early() {
        let mut builder = FeedBuilder::new();
        builder.handle(start("html")).unwrap();
        assert!(!builder.wants_more());
        assert_eq!(builder.finish(), Err(ParseError::NotRecognized));
    }

    #[test]
    fn test_empty_and_text_only() {
        assert_eq!(build(vec![XmlEvent::EndDocument]), Err(ParseError::Empty));
        assert_eq!(
            build(vec![text("just words"), XmlEvent::EndDocument]),
            Err(ParseError::NotRecognized)
        );
    }

    #[test]
    fn test_unclosed_elements_are_malformed() {
        let err = build(vec![start("rss"), start("channel")]).unwrap_err();
        assert_eq!(
            err,
            ParseError::Malformed {
                position: 0,
                context: Some("/rss/channel".into()),
                message: "document ended with open elements".into(),
            }
        );
    }

    #[test]
    fn test_stray_end_tag_is_malformed() {
        let err = build(vec![start("rss"), end("rss"), end("rss")]).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_parse_minimal_documents() {
        let rss = parse(
            br#"<?xml version="1.0"?>
            <rss version="2.0"><channel>
              <title>RSS Title</title><link>https://example.com/rss</link>
            </channel></rss>"#,
        )
        .unwrap();
        assert!(matches!(rss, Feed::Rss(_)));
        assert_eq!(rss.title(), Some("RSS Title"));
        assert_eq!(rss.link(), Some("https://example.com/rss"));

        let atom = parse(
            br#"<feed xmlns="http://www.w3.org/2005/Atom">
              <title>Atom Title</title>
              <link href="https://example.com/atom"/>
            </feed>"#,
        )
        .unwrap();
        assert!(matches!(atom, Feed::Atom(_)));
        assert_eq!(atom.title(), Some("Atom Title"));
        assert_eq!(atom.link(), Some("https://example.com/atom"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(b""), Err(ParseError::Empty));
        assert_eq!(parse(b"  \n "), Err(ParseError::Empty));
        assert_eq!(parse(b"plain text"), Err(ParseError::NotRecognized));
        assert_eq!(
            parse(b"<!DOCTYPE html><html><body><p>unclosed</body></html>"),
            Err(ParseError::NotRecognized)
        );

        let truncated = parse(b"<rss><channel><item><title>Half").unwrap_err();
        match truncated {
            ParseError::Malformed {
                position, context, ..
            } => {
                assert!(position > 0);
                assert_eq!(context.as_deref(), Some("title"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ParseError::Malformed {
            position: 42,
            context: Some("item".into()),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Malformed document at byte 42 in <item>: boom");
        assert_eq!(
            ParseError::NotRecognized.to_string(),
            "Document is not an RSS, RDF or Atom feed"
        );
    }

    #[test]
    fn test_feed_parser_accepts_chunks() {
        let xml = br#"<rss version="2.0"><channel><title>Chunked</title><item><title>One</title></item></channel></rss>"#;
        let mut parser = FeedParser::new().expecting(Dialect::Rss);
        for chunk in xml.chunks(7) {
            parser.push(chunk);
        }
        assert_eq!(parser.buffered(), xml.len());

        let feed = parser.finish().unwrap();
        assert_eq!(feed.title(), Some("Chunked"));
        assert_eq!(feed.item_count(), 1);
    }

    #[test]
    fn test_feed_parser_reports_errors_only_at_finish() {
        let mut parser = FeedParser::new();
        parser.push(b"<rss><channel><title>Broken</rss>");
        parser.push(b"\xFF\xFE not even xml");
        assert_eq!(parser.buffered(), 48);
        assert!(matches!(parser.finish(), Err(ParseError::Malformed { .. })));
    }

    #[test]
    fn test_utf16_reader_is_converted() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in r#"<rss version="2.0"><channel><title>Gr\u{fc}\u{df}e</title></channel></rss>"#
            .encode_utf16()
        {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let feed = parse_reader(std::io::BufReader::new(bytes.as_slice())).unwrap();
        assert_eq!(feed.title(), Some("Gr\u{fc}\u{df}e"));
    }

    #[test]
    fn test_expected_dialect_is_only_a_hint() {
        let mut parser = FeedParser::new().expecting(Dialect::Rss);
        parser.push(br#"<feed xmlns="http://www.w3.org/2005/Atom"><title>A</title></feed>"#);
        assert!(matches!(parser.finish(), Ok(Feed::Atom(_))));
    }
}
