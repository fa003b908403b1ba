//! Percent-decoding of input paths.
//!
//! Paths are split on `/` first and each segment is decoded on its own, so an
//! encoded slash (`%2F`) stays inside its segment.

use crate::error::MatchError;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Split an input path into decoded segments.
///
/// One leading slash is stripped; an empty remainder has no segments.
pub fn decode_path(path: &str) -> Result<Vec<Cow<'_, str>>, MatchError> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('/').map(decode_segment).collect()
}

/// Decode one segment.
///
/// Unlike [`percent_decode_str`], which passes stray `%` through, a `%` that
/// is not followed by two hex digits is an error.
pub fn decode_segment(raw: &str) -> Result<Cow<'_, str>, MatchError> {
    if !raw.contains('%') {
        return Ok(Cow::Borrowed(raw));
    }

    let bytes = raw.as_bytes();
    let mut from = 0;
    while let Some(pos) = bytes[from..].iter().position(|&b| b == b'%') {
        let at = from + pos;
        let valid = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(|b| b.is_ascii_hexdigit()));
        if !valid {
            return Err(MatchError::MalformedEscape {
                segment: raw.to_string(),
                offset: at,
            });
        }
        from = at + 3;
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| MatchError::InvalidUtf8 {
            segment: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segment_is_borrowed() {
        assert!(matches!(decode_segment("abc"), Ok(Cow::Borrowed("abc"))));
    }

    #[test]
    fn test_decodes_escapes() {
        assert_eq!(decode_segment("%40jongleberry").unwrap(), "@jongleberry");
        assert_eq!(decode_segment("a%20b").unwrap(), "a b");
        assert_eq!(decode_segment("%E2%9C%93").unwrap(), "\u{2713}");
    }

    #[test]
    fn test_encoded_slash_stays_in_segment() {
        let segments = decode_path("/a%2Fb/c").unwrap();
        assert_eq!(segments, vec!["a/b", "c"]);
    }

    #[test]
    fn test_malformed_escapes() {
        assert_eq!(
            decode_segment("%%%").unwrap_err(),
            MatchError::MalformedEscape {
                segment: "%%%".to_string(),
                offset: 0,
            }
        );
        assert!(decode_segment("abc%").is_err());
        assert!(decode_segment("abc%4").is_err());
        assert!(decode_segment("%zz").is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            decode_segment("%ff"),
            Err(MatchError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_split() {
        assert!(decode_path("").unwrap().is_empty());
        assert!(decode_path("/").unwrap().is_empty());
        assert_eq!(decode_path("/a/b").unwrap(), vec!["a", "b"]);
        assert_eq!(decode_path("a/").unwrap(), vec!["a", ""]);
    }
}
