//! Post manifest model and lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// A post identifier as it appears in the manifest.
///
/// Manifests carry ids as JSON numbers or strings; both sides of a lookup
/// are normalized to text, so `1` and `"1"` name the same post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

/// One entry in the post manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post identifier
    pub id: PostId,

    /// Post title
    pub title: String,

    /// Short summary shown on list cards
    pub summary: String,

    /// Publication date, displayed verbatim
    pub date: String,

    /// Content reference, resolved by the content source
    pub filename: String,
}

/// Find the first post whose id matches `id` by textual equality.
///
/// Absence is a normal outcome, not an error. Duplicate ids are not
/// rejected; the first match in manifest order wins.
pub fn find_post_by_id<'a>(
    posts: &'a [PostSummary],
    id: impl fmt::Display,
) -> Option<&'a PostSummary> {
    let id = id.to_string();
    posts.iter().find(|p| p.id.to_string() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Vec<PostSummary> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "a", "summary": "s1", "date": "2025-01-01", "filename": "a.md"},
                {"id": "2", "title": "b", "summary": "s2", "date": "2025-01-02", "filename": "b.md"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_numeric_and_text_ids() {
        let posts = manifest();
        assert_eq!(find_post_by_id(&posts, 1).unwrap().title, "a");
        assert_eq!(find_post_by_id(&posts, "1").unwrap().title, "a");
        assert_eq!(find_post_by_id(&posts, "2").unwrap().title, "b");
        assert_eq!(find_post_by_id(&posts, 2).unwrap().title, "b");
    }

    #[test]
    fn test_find_missing_id() {
        let posts = manifest();
        assert!(find_post_by_id(&posts, 999).is_none());
        assert!(find_post_by_id(&[], "1").is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let mut posts = manifest();
        posts.push(PostSummary {
            id: PostId::Text("1".to_string()),
            title: "dup".to_string(),
            summary: String::new(),
            date: String::new(),
            filename: "dup.md".to_string(),
        });

        assert_eq!(find_post_by_id(&posts, "1").unwrap().title, "a");
    }

    #[test]
    fn test_id_display_normalization() {
        assert_eq!(PostId::Number(7.into()).to_string(), "7");
        assert_eq!(PostId::Text("post-1".to_string()).to_string(), "post-1");
    }
}
