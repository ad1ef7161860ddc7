//! Address helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::manifest::PostId;

/// Query-component encoding: unreserved characters stay literal
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value for use inside a query component
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Navigation link selecting a single post
///
/// # Examples
/// ```ignore
/// post_link(&PostId::Text("post-1".into())) // -> "?id=post-1"
/// ```
pub fn post_link(id: &PostId) -> String {
    format!("?id={}", encode_query_component(&id.to_string()))
}

/// Share target carrying the current page address
pub fn share_url(page: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        encode_query_component(page)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("post-1"), "post-1");
        assert_eq!(encode_query_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_query_component("x=1&y=2"), "x%3D1%26y%3D2");
    }

    #[test]
    fn test_post_link() {
        assert_eq!(post_link(&PostId::Number(7.into())), "?id=7");
        assert_eq!(post_link(&PostId::Text("post-1".to_string())), "?id=post-1");
    }

    #[test]
    fn test_share_url_encodes_page_address() {
        let url = share_url("https://blog.example.com/?id=42");
        assert!(url.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert!(url.contains("https%3A%2F%2Fblog.example.com%2F%3Fid%3D42"));
    }
}
