/// Bookmark list operations: score filtering, form validation, facet toggles

use crate::bookmark::Bookmark;
use crate::error::ValidationError;
use serde::Serialize;
use url::Url;

/// Search hits at or below this score are hidden
pub const SCORE_THRESHOLD: f64 = 0.7;

/// Keep bookmarks without a score, or whose score is above the threshold
pub fn filter_by_score(bookmarks: &[Bookmark]) -> Vec<Bookmark> {
    bookmarks
        .iter()
        .filter(|bm| bm.total_score.is_none_or(|score| score > SCORE_THRESHOLD))
        .cloned()
        .collect()
}

/// One URL or several, serialized as a bare string or an array
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UrlList {
    One(String),
    Many(Vec<String>),
}

impl UrlList {
    pub fn len(&self) -> usize {
        match self {
            UrlList::One(_) => 1,
            UrlList::Many(urls) => urls.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for UrlList {
    fn from(url: &str) -> Self {
        UrlList::One(url.to_string())
    }
}

/// Parse the add-bookmark textarea (one URL per line).
///
/// Blank lines and lines that are not absolute URLs are dropped. When
/// nothing survives the input is rejected and no request should be sent.
pub fn parse_url_lines(text: &str) -> Result<UrlList, ValidationError> {
    let mut urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && Url::parse(line).is_ok())
        .map(str::to_string)
        .collect();

    match urls.len() {
        0 => Err(ValidationError::NoValidUrls),
        1 => Ok(UrlList::One(urls.remove(0))),
        _ => Ok(UrlList::Many(urls)),
    }
}

pub fn validate_api_key(key: &str) -> Result<String, ValidationError> {
    let key = key.trim();
    if key.is_empty() {
        Err(ValidationError::EmptyApiKey)
    } else {
        Ok(key.to_string())
    }
}

/// Add the item if missing, remove it if present
pub fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(link: &str, score: Option<f64>) -> Bookmark {
        let mut bookmark = Bookmark::new(link, "");
        bookmark.total_score = score;
        bookmark
    }

    #[test]
    fn test_filter_by_score() {
        let bookmarks = vec![scored("a", Some(0.9)), scored("b", Some(0.5))];

        let filtered = filter_by_score(&bookmarks);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].link, "a");
    }

    #[test]
    fn test_filter_threshold_is_strict_and_keeps_unscored() {
        let bookmarks = vec![
            scored("exact", Some(0.7)),
            scored("unscored", None),
            scored("high", Some(2.3)),
        ];

        let links: Vec<String> = filter_by_score(&bookmarks).into_iter().map(|b| b.link).collect();

        assert_eq!(links, vec!["unscored", "high"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let bookmarks = vec![
            scored("a", Some(0.71)),
            scored("b", Some(0.1)),
            scored("c", None),
            scored("d", Some(0.95)),
        ];

        let once = filter_by_score(&bookmarks);
        let twice = filter_by_score(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_url_lines_rejects_invalid_only() {
        assert_eq!(parse_url_lines("not-a-url"), Err(ValidationError::NoValidUrls));
        assert_eq!(parse_url_lines("\n  \n"), Err(ValidationError::NoValidUrls));
    }

    #[test]
    fn test_parse_url_lines_single_and_many() {
        assert_eq!(
            parse_url_lines("  https://example.com  \n"),
            Ok(UrlList::One("https://example.com".to_string()))
        );

        let parsed = parse_url_lines("https://a.com\nnope\n\nhttps://b.com/path").unwrap();
        assert_eq!(
            parsed,
            UrlList::Many(vec!["https://a.com".to_string(), "https://b.com/path".to_string()])
        );
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_url_list_wire_shape() {
        assert_eq!(serde_json::to_string(&UrlList::from("https://a.com")).unwrap(), "\"https://a.com\"");
        assert_eq!(
            serde_json::to_string(&UrlList::Many(vec!["x".into(), "y".into()])).unwrap(),
            "[\"x\",\"y\"]"
        );
    }

    #[test]
    fn test_validate_api_key() {
        assert_eq!(validate_api_key("   "), Err(ValidationError::EmptyApiKey));
        assert_eq!(validate_api_key(" key-123 "), Ok("key-123".to_string()));
    }

    #[test]
    fn test_toggle() {
        let mut tags = vec!["ai".to_string()];

        toggle(&mut tags, "rust".to_string());
        assert_eq!(tags, vec!["ai", "rust"]);

        toggle(&mut tags, "ai".to_string());
        assert_eq!(tags, vec!["rust"]);
    }
}
