//! Small helpers shared by the library and the command line.
//!
//! - **URL validation**: scheme and network checks before a feed is fetched
//! - **Text**: scrubbing feed-supplied text before it reaches a terminal

mod text;
mod url_validator;

pub use text::strip_control_chars;
pub use url_validator::{validate_feed_url, NetworkPolicy, UrlValidationError};
