//! Syntactic URL validation.

use url::Url;

/// Returns `true` if `candidate` parses as an absolute URL.
///
/// Parsing follows the WHATWG URL rules implemented by the `url` crate.
/// There is no scheme allow-list: `javascript:` and `data:` URLs are
/// accepted.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(is_valid_url("https://example.com"));
    }

    #[test]
    fn test_valid_url_with_path_and_query() {
        assert!(is_valid_url("http://example.com:8080/a/b?c=d#frag"));
    }

    #[test]
    fn test_plain_text_is_invalid() {
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_relative_path_is_invalid() {
        assert!(!is_valid_url("/just/a/path"));
    }

    #[test]
    fn test_missing_host_is_invalid() {
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn test_non_http_schemes_are_accepted() {
        assert!(is_valid_url("javascript:alert(1)"));
        assert!(is_valid_url("data:text/plain,hello"));
        assert!(is_valid_url("mailto:someone@example.com"));
    }
}
