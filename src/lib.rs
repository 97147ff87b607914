//! Streaming parser for RSS 2.0, RDF / RSS 1.0 and Atom 1.0 feeds, with the
//! Media RSS, iTunes, Dublin Core and Syndication extensions.
//!
//! Start with [`feed::parse`] for a byte buffer, [`feed::parse_reader`] for
//! any `BufRead`, or [`feed::fetch_all`] to retrieve many feeds over HTTP.

pub mod config;
pub mod feed;
pub mod util;
