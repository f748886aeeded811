/// Data structures for Tagscope bookmarks
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static BASE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://([^/]+)").expect("base url pattern is valid"));

/// Source classification assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SourceType {
    Media,
    Blog,
    News,
    Public,
    Social,
    Tool,
    Portal,
    #[default]
    Etc,
}

impl SourceType {
    /// Every type, in the order the search filter lists them.
    pub const ALL: [SourceType; 8] = [
        SourceType::Media,
        SourceType::Blog,
        SourceType::News,
        SourceType::Public,
        SourceType::Social,
        SourceType::Tool,
        SourceType::Portal,
        SourceType::Etc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceType::Media => "Media",
            SourceType::Blog => "Blog",
            SourceType::News => "News",
            SourceType::Public => "Public",
            SourceType::Social => "Social",
            SourceType::Tool => "Tool",
            SourceType::Portal => "Portal",
            SourceType::Etc => "Etc",
        }
    }

    /// Unknown labels fall back to `Etc`, matching the backend column default.
    pub fn from_label(label: &str) -> SourceType {
        SourceType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SourceType::from_label).unwrap_or_default())
    }
}

/// A saved URL as returned by `/bookmarks` and `/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Present on search results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
}

impl Bookmark {
    pub fn new(link: impl Into<String>, summary: impl Into<String>) -> Bookmark {
        Bookmark {
            link: link.into(),
            summary: summary.into(),
            tags: Vec::new(),
            source_type: SourceType::Etc,
            base_url: None,
            image_url: None,
            timestamp: None,
            total_score: None,
        }
    }

    /// Text shown for the bookmark: the summary, or the link when there is none.
    pub fn title(&self) -> &str {
        if self.summary.trim().is_empty() {
            &self.link
        } else {
            &self.summary
        }
    }

    /// Host used for the favicon lookup
    pub fn host(&self) -> String {
        match &self.base_url {
            Some(base) if !base.is_empty() => base.clone(),
            _ => derive_base_url(&self.link),
        }
    }

    pub fn favicon_url(&self) -> String {
        format!(
            "https://www.google.com/s2/favicons?domain={}&sz=32",
            self.host()
        )
    }
}

/// Host part of an http(s) link, or the link itself when it has no scheme.
pub fn derive_base_url(link: &str) -> String {
    BASE_URL_RE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| link.to_string())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_entry() {
        let json = r#"{
            "link": "https://blog.rust-lang.org/2024/01/01/post.html",
            "summary": "Rust release notes",
            "base_url": "blog.rust-lang.org",
            "timestamp": "2024-10-28T10:30:00",
            "tags": ["rust", "release"],
            "source_type": "Blog",
            "image_url": null
        }"#;

        let bookmark: Bookmark = serde_json::from_str(json).unwrap();

        assert_eq!(bookmark.source_type, SourceType::Blog);
        assert_eq!(bookmark.tags, vec!["rust", "release"]);
        assert_eq!(bookmark.image_url, None);
        assert_eq!(bookmark.total_score, None);
    }

    #[test]
    fn test_deserialize_nulls_and_unknown_type() {
        let json = r#"{
            "link": "https://example.com",
            "summary": null,
            "tags": null,
            "source_type": "Podcast",
            "score": 0.4,
            "total_score": 0.81
        }"#;

        let bookmark: Bookmark = serde_json::from_str(json).unwrap();

        assert_eq!(bookmark.summary, "");
        assert!(bookmark.tags.is_empty());
        assert_eq!(bookmark.source_type, SourceType::Etc);
        assert_eq!(bookmark.total_score, Some(0.81));
    }

    #[test]
    fn test_missing_source_type_defaults_to_etc() {
        let bookmark: Bookmark = serde_json::from_str(r#"{"link": "https://a.io"}"#).unwrap();
        assert_eq!(bookmark.source_type, SourceType::Etc);
    }

    #[test]
    fn test_title_falls_back_to_link() {
        let bookmark = Bookmark::new("https://example.com", "  ");
        assert_eq!(bookmark.title(), "https://example.com");

        let bookmark = Bookmark::new("https://example.com", "Example");
        assert_eq!(bookmark.title(), "Example");
    }

    #[test]
    fn test_host_derivation() {
        assert_eq!(derive_base_url("https://news.ycombinator.com/item?id=1"), "news.ycombinator.com");
        assert_eq!(derive_base_url("http://localhost:3000/x"), "localhost:3000");
        assert_eq!(derive_base_url("not-a-url"), "not-a-url");

        let mut bookmark = Bookmark::new("https://github.com/yewstack/yew", "");
        assert_eq!(bookmark.host(), "github.com");
        bookmark.base_url = Some("gh.example".to_string());
        assert_eq!(
            bookmark.favicon_url(),
            "https://www.google.com/s2/favicons?domain=gh.example&sz=32"
        );
    }

    #[test]
    fn test_source_type_labels() {
        assert_eq!(SourceType::from_label("news"), SourceType::News);
        assert_eq!(SourceType::from_label(""), SourceType::Etc);
        assert_eq!(serde_json::to_string(&SourceType::Tool).unwrap(), "\"Tool\"");
    }
}
