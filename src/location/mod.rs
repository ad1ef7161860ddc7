//! Page address parsing
//!
//! The viewer resolves which view to show from the address the page was
//! reached at. Only the `id` query key is recognized.

use url::Url;

/// The navigable location a view request came from
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parse an absolute page address
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// The requested post id, read fresh from the query string on every
    /// call. Returns `None` only when the `id` key is missing entirely; an
    /// empty value still counts as present.
    pub fn post_id(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
    }

    /// Full address of the current page
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// The same address with query and fragment stripped, used as the
    /// back-navigation target (the list view of the same page)
    pub fn without_query(&self) -> String {
        let mut url = self.url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.to_string()
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_from_query() {
        let location = Location::parse("https://blog.example.com/?id=42").unwrap();
        assert_eq!(location.post_id(), Some("42".to_string()));
    }

    #[test]
    fn test_post_id_absent_without_query() {
        let location = Location::parse("https://blog.example.com/").unwrap();
        assert_eq!(location.post_id(), None);
    }

    #[test]
    fn test_post_id_ignores_other_keys() {
        let location = Location::parse("https://blog.example.com/?page=2").unwrap();
        assert_eq!(location.post_id(), None);

        let location = Location::parse("https://blog.example.com/?page=2&id=post-1").unwrap();
        assert_eq!(location.post_id(), Some("post-1".to_string()));
    }

    #[test]
    fn test_post_id_empty_value_is_present() {
        let location = Location::parse("https://blog.example.com/?id=").unwrap();
        assert_eq!(location.post_id(), Some(String::new()));
    }

    #[test]
    fn test_post_id_is_percent_decoded() {
        let location = Location::parse("https://blog.example.com/?id=a%20b").unwrap();
        assert_eq!(location.post_id(), Some("a b".to_string()));
    }

    #[test]
    fn test_without_query() {
        let location = Location::parse("https://blog.example.com/blog/?id=7#top").unwrap();
        assert_eq!(location.without_query(), "https://blog.example.com/blog/");
    }
}
