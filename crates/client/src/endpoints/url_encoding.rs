//! Percent-encoding for index names and document ids in request paths.
//!
//! Document ids are arbitrary strings chosen by whoever indexed the document.
//! Interpolating them raw into `/{index}/_doc/{id}` would let an id such as
//! `a/b` address a different endpoint, `a?b` start a query string, and `a#b`
//! truncate the path. Every path segment goes through [`encode_path_segment`].
//!
//! # Example
//!
//! ```
//! use es_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("order/2024");
//! assert_eq!(encoded, "order%2F2024");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus the characters that either split the path
/// (`/`, `?`, `#`), would be decoded twice (`%`), or are rejected by
/// intermediaries (space, quotes, braces, brackets).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
///
/// The dot segments `.` and `..` are fully encoded as well, since URL
/// normalization would otherwise remove them from the path.
///
/// # Examples
///
/// ```
/// use es_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("logs-2024"), "logs-2024");
/// assert_eq!(encode_path_segment("doc 1"), "doc%201");
/// assert_eq!(encode_path_segment(".."), "%2E%2E");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string(),
    }
}
