//! Feed parsing and fetching.
//!
//! This module turns RSS 2.0, RDF / RSS 1.0 and Atom 1.0 documents, including
//! the Media RSS, iTunes, Dublin Core and Syndication extensions, into one
//! strongly typed [`Feed`] model.
//!
//! # Architecture
//!
//! - [`events`] - quick-xml tokenizer adapter producing namespace-resolved events
//! - [`detect`] - root element to [`Dialect`]
//! - [`path`] - structural path tables, one per dialect
//! - [`attributes`] / [`characters`] - the two mappers that mutate the model
//! - [`dates`] - permissive date and duration parsing
//! - [`parser`] - the driver state machine and entry points
//! - [`fetcher`] - concurrent HTTP retrieval of many feeds
//!
//! # Example
//!
//! ```
//! use feedloom::feed::{parse, Feed};
//!
//! let xml = br#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <title>Example</title>
//!   <entry><title>Hello</title></entry>
//! </feed>"#;
//!
//! let feed = parse(xml).unwrap();
//! assert_eq!(feed.title(), Some("Example"));
//! assert_eq!(feed.item_count(), 1);
//! ```

pub mod attributes;
pub mod characters;
pub mod dates;
pub mod detect;
pub mod document;
pub mod events;
pub mod fetcher;
pub mod model;
pub mod namespace;
pub mod parser;
pub mod path;
pub mod values;

pub use dates::{parse_date, parse_duration, DateFormat, DATE_FORMATS};
pub use detect::Dialect;
pub use fetcher::{build_client, fetch_all, fetch_one, FetchError, FetchOptions, FetchResult};
pub use model::*;
pub use parser::{parse, parse_reader, FeedBuilder, FeedParser, ParseError};
