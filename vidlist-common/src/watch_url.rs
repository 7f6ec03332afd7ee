//! Watch-URL validation and video identifier extraction
//!
//! A submission is only accepted for `https://www.youtube.com/watch` URLs
//! carrying a usable `v` query parameter. Query parsing is strict: a
//! component that is not `key=value` fails the whole validation rather
//! than being skipped.

use url::{form_urlencoded, Url};

use crate::error::{Error, Result};

const WATCH_SCHEME: &str = "https";
const WATCH_HOST: &str = "www.youtube.com";
const WATCH_PATH: &str = "/watch";

/// Validate a watch URL and extract the video identifier
///
/// The identifier is the first non-empty value bound to the `v` query
/// parameter, percent-decoded. Returns `Error::InvalidUrl` when:
/// - the string is not an absolute `https://www.youtube.com/watch` URL
///   (trailing slash and extra path segments both count as a different
///   path and are rejected)
/// - the query string is absent or empty
/// - any query component lacks a `=` (strict parsing)
/// - `v` is absent, or only present with empty values
pub fn extract_video_id(raw: &str) -> Result<String> {
    let invalid = || Error::InvalidUrl(raw.to_string());

    let parsed = Url::parse(raw).map_err(|_| invalid())?;
    if parsed.scheme() != WATCH_SCHEME
        || parsed.host_str() != Some(WATCH_HOST)
        || parsed.path() != WATCH_PATH
    {
        return Err(invalid());
    }

    let query = match parsed.query() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(invalid()),
    };

    // Strict parsing: a bare key or empty component poisons the whole query
    for component in query.split('&') {
        if !component.contains('=') {
            return Err(invalid());
        }
    }

    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, value)| key == "v" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .next()
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_identifier_from_valid_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=co7KgV2e").unwrap();
        assert_eq!(id, "co7KgV2e");
    }

    #[test]
    fn extracts_first_v_value_among_other_parameters() {
        let id = extract_video_id("https://www.youtube.com/watch?t=42&v=abc123&v=zzz").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn rejects_invalid_urls() {
        let invalid_urls = [
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?",
            "https://www.youtube.com/watch?a=020202",
            "https://www.youtube.com/watch?v=",
            "https://www.google.com/",
            "https://www.gmail.com/watch?v=do3sK2r",
            "https://www.youtube.com/watch/",
            "https://www.youtube.com/watch/extrastuff",
            "https://www.youtube.com/watch/extrastuff?v=28393",
            "12345678",
            "hhhhhhhttps://www.youtube.com/watch",
            "http://www.youtube.com/watch/somestuff?v=293829",
            "http://www.youtube.com/watch?v=293829",
            "https://github.com/watch?v=3902230",
            "",
        ];

        for url in invalid_urls {
            let result = extract_video_id(url);
            assert!(
                matches!(result, Err(Error::InvalidUrl(_))),
                "expected rejection for {:?}, got {:?}",
                url,
                result
            );
        }
    }

    #[test]
    fn rejects_malformed_query_components() {
        // Bare key, empty component, trailing separator: all poison the parse
        for url in [
            "https://www.youtube.com/watch?v=abc&flag",
            "https://www.youtube.com/watch?v=abc&",
            "https://www.youtube.com/watch?&v=abc",
            "https://www.youtube.com/watch?bare",
        ] {
            assert!(
                extract_video_id(url).is_err(),
                "expected strict-parse rejection for {:?}",
                url
            );
        }
    }

    #[test]
    fn skips_empty_v_values() {
        // An empty value is no usable value; a later non-empty one wins
        let id = extract_video_id("https://www.youtube.com/watch?v=&v=real").unwrap();
        assert_eq!(id, "real");
    }

    #[test]
    fn decodes_percent_escapes_in_identifier() {
        let id = extract_video_id("https://www.youtube.com/watch?v=a%2Db").unwrap();
        assert_eq!(id, "a-b");
    }
}
