//! Request URI construction against a configured API root

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use thiserror::Error;
use url::Url;

/// Parses the configured API root
///
/// # Errors
///
/// Returns error if the root is not an absolute URL or cannot be a base
pub fn parse_root(root: &str) -> Result<Url, UrlError> {
    let url = Url::parse(root)?;
    if url.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase { url });
    }
    Ok(url)
}

/// Helper to safely append path segments to URL
///
/// Each segment is percent-encoded on its own, so `/`, `..` and spaces
/// inside a segment never change the path structure. A trailing slash on
/// the root is dropped first so `https://host/api/v3/` and
/// `https://host/api/v3` behave the same.
///
/// # Errors
///
/// Returns error if URL cannot be a base
pub fn add_path_segments(url: &mut Url, segments: &[&str]) -> Result<(), UrlError> {
    let url_for_error = url.clone();
    url.path_segments_mut()
        .map_err(|_| UrlError::CannotBeABase { url: url_for_error })?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

/// Characters escaped inside a query key or value
///
/// Controls, space and the characters that would change how the query
/// splits into pairs (`%`, `&`, `=`, `+`, `#`). Query-safe characters such
/// as `:` and `/` stay literal.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'#');

/// Encodes one query key or value
///
/// Reserved characters and non-ASCII bytes are percent-encoded and spaces
/// become `+`, so search qualifiers read `q=term+repo:owner/name` on the
/// wire.
pub fn encode_query_component(value: &str) -> String {
    // A literal '%' is already `%25`, so every `%20` left is a space
    utf8_percent_encode(value, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Builds a request URI from root, path segments and query parameters
///
/// # Arguments
///
/// * `root` - API root, e.g. `https://api.github.com`
/// * `path` - Ordered path segments, e.g. `["search", "users"]`
/// * `parameters` - Query parameters in order
///
/// # Errors
///
/// Returns error if the root cannot be parsed or cannot be a base
pub fn make_uri(root: &str, path: &[&str], parameters: &[(&str, &str)]) -> Result<Url, UrlError> {
    let mut url = parse_root(root)?;
    add_path_segments(&mut url, path)?;

    if parameters.is_empty() {
        url.set_query(None);
    } else {
        let query = parameters
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_query_component(key),
                    encode_query_component(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }

    Ok(url)
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// URL cannot be used as a base
    #[error("URL cannot be a base: {url}")]
    CannotBeABase {
        /// The problematic URL
        url: Url,
    },

    /// Invalid URL parse error
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_uri_search_users() {
        let url = make_uri("https://api.github.com", &["search", "users"], &[("q", "alice")]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/search/users?q=alice");
    }

    #[test]
    fn test_make_uri_keeps_root_path() {
        let url = make_uri(
            "https://ghe.example.com/api/v3/",
            &["search", "repositories"],
            &[("q", "scopes")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/search/repositories?q=scopes"
        );

        let url = make_uri("https://ghe.example.com/api/v3", &["search", "code"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/search/code");
    }

    #[test]
    fn test_make_uri_repo_qualifier_stays_readable() {
        let url = make_uri(
            "https://api.github.com",
            &["search", "code"],
            &[("q", "addClass repo:jquery/jquery")],
        )
        .unwrap();
        assert_eq!(url.query(), Some("q=addClass+repo:jquery/jquery"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("q".to_string(), "addClass repo:jquery/jquery".to_string())]
        );
    }

    #[test]
    fn test_make_uri_escapes_pair_separators() {
        let url = make_uri(
            "https://api.github.com",
            &["search", "users"],
            &[("q", "a&b=c+d#e%f")],
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "a&b=c+d#e%f".to_string())]);
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_make_uri_multiple_parameters_keep_order() {
        let url = make_uri(
            "https://api.github.com",
            &["search", "repositories"],
            &[("q", "tetris"), ("sort", "stars"), ("order", "desc")],
        )
        .unwrap();
        assert_eq!(url.query(), Some("q=tetris&sort=stars&order=desc"));
    }

    #[test]
    fn test_make_uri_non_ascii_is_percent_encoded() {
        let url = make_uri("https://api.github.com", &["search", "users"], &[("q", "josé")]).unwrap();
        assert_eq!(url.query(), Some("q=jos%C3%A9"));
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(
            encode_query_component("addClass repo:jquery/jquery"),
            "addClass+repo:jquery/jquery"
        );
        assert_eq!(encode_query_component("a&b=c+d#e"), "a%26b%3Dc%2Bd%23e");
        assert_eq!(encode_query_component("100%20"), "100%2520");
        assert_eq!(encode_query_component("tab\there"), "tab%09here");
        assert_eq!(encode_query_component("josé"), "jos%C3%A9");
    }

    #[test]
    fn test_add_path_segments_prevents_injection() {
        let mut url = parse_root("https://api.github.com").unwrap();
        add_path_segments(&mut url, &["search", "../../../etc/passwd"]).unwrap();
        assert!(url.as_str().contains("%2E%2E%2F") || url.as_str().contains("..%2F"));
    }

    #[test]
    fn test_parse_root_rejects_non_base() {
        assert!(matches!(
            parse_root("mailto:someone@example.com"),
            Err(UrlError::CannotBeABase { .. })
        ));
        assert!(matches!(
            parse_root("not a url"),
            Err(UrlError::ParseError(_))
        ));
    }
}
