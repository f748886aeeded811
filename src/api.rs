/// HTTP client for the Tagscope bookmarks backend

use crate::bookmark::Bookmark;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::operations::UrlList;
use crate::search::SearchRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body of `POST /bookmarks` and `DELETE /bookmarks`
#[derive(Debug, Serialize)]
pub struct UrlPayload<'a> {
    pub url: &'a UrlList,
}

/// Body of `PUT /bookmarks`
#[derive(Debug, Serialize)]
pub struct UpdatePayload<'a> {
    pub original_link: &'a str,
    pub new_link: &'a str,
    pub new_summary: &'a str,
}

/// Response of `GET /search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    pub results: Vec<Bookmark>,
}

/// Backend settings exposed by `/config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub google_api_key: String,
}

/// Acknowledgement returned by write endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /test_models`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelCheck {
    pub message: String,
    #[serde(default)]
    pub sample: Option<String>,
}

/// Single-shot requests against the backend; no retries, no timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiClient {
        ApiClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> ApiClient {
        ApiClient::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_all_bookmarks(&self) -> Result<Vec<Bookmark>> {
        log::debug!("GET /bookmarks");
        let sent = self.http.get(self.endpoint("/bookmarks")).send().await;
        let bookmarks = read_json("get_all_bookmarks", sent).await?;
        validated("get_all_bookmarks", bookmarks)
    }

    pub async fn add_bookmark(&self, urls: &UrlList) -> Result<Ack> {
        log::debug!("POST /bookmarks ({} url(s))", urls.len());
        let sent = self
            .http
            .post(self.endpoint("/bookmarks"))
            .json(&UrlPayload { url: urls })
            .send()
            .await;
        read_json("add_bookmark", sent).await
    }

    pub async fn remove_bookmark(&self, urls: &UrlList) -> Result<Ack> {
        log::debug!("DELETE /bookmarks ({} url(s))", urls.len());
        let sent = self
            .http
            .delete(self.endpoint("/bookmarks"))
            .json(&UrlPayload { url: urls })
            .send()
            .await;
        read_json("remove_bookmark", sent).await
    }

    pub async fn update_bookmark(
        &self,
        original_link: &str,
        new_link: &str,
        new_summary: &str,
    ) -> Result<Ack> {
        log::debug!("PUT /bookmarks {}", original_link);
        let payload = UpdatePayload {
            original_link,
            new_link,
            new_summary,
        };
        let sent = self
            .http
            .put(self.endpoint("/bookmarks"))
            .json(&payload)
            .send()
            .await;
        read_json("update_bookmark", sent).await
    }

    pub async fn search_bookmarks(&self, request: &SearchRequest) -> Result<Vec<Bookmark>> {
        log::debug!("GET /search query={:?}", request.query);
        let sent = self
            .http
            .get(self.endpoint("/search"))
            .query(&request.query_params())
            .send()
            .await;
        let response: SearchResponse = read_json("search_bookmarks", sent).await?;
        validated("search_bookmarks", response.results)
    }

    pub async fn get_config(&self) -> Result<BackendConfig> {
        let sent = self.http.get(self.endpoint("/config")).send().await;
        read_json("get_config", sent).await
    }

    pub async fn update_config(&self, google_api_key: &str) -> Result<Ack> {
        let payload = BackendConfig {
            google_api_key: google_api_key.to_string(),
        };
        let sent = self
            .http
            .post(self.endpoint("/config"))
            .json(&payload)
            .send()
            .await;
        read_json("update_config", sent).await
    }

    pub async fn test_models(&self) -> Result<ModelCheck> {
        let sent = self.http.get(self.endpoint("/test_models")).send().await;
        read_json("test_models", sent).await
    }

    /// Whether `url` is already saved (matched on `link`)
    pub async fn is_bookmarked(&self, url: &str) -> Result<bool> {
        let bookmarks = self.get_all_bookmarks().await?;
        Ok(contains_link(&bookmarks, url))
    }
}

pub fn contains_link(bookmarks: &[Bookmark], url: &str) -> bool {
    bookmarks.iter().any(|bm| bm.link == url)
}

async fn read_json<T: DeserializeOwned>(
    operation: &str,
    sent: reqwest::Result<reqwest::Response>,
) -> Result<T> {
    let result = fetch_json(sent).await;
    if let Err(err) = &result {
        log::error!("{} failed: {}", operation, err);
    }
    result
}

async fn fetch_json<T: DeserializeOwned>(sent: reqwest::Result<reqwest::Response>) -> Result<T> {
    let response = sent?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    let text = response.text().await?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Reject payloads the UI can not key on
fn validated(operation: &str, bookmarks: Vec<Bookmark>) -> Result<Vec<Bookmark>> {
    if let Some(pos) = bookmarks.iter().position(|bm| bm.link.trim().is_empty()) {
        let err = ApiError::InvalidResponse(format!("bookmark #{} has an empty link", pos));
        log::error!("{} failed: {}", operation, err);
        return Err(err);
    }
    Ok(bookmarks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::SourceType;

    #[test]
    fn test_endpoint_join() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/search"), "http://localhost:8000/search");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_base_url: "https://bookmarks.internal".to_string(),
            frontend_url: "https://app.internal".to_string(),
        };
        assert_eq!(ApiClient::from_config(&config).base_url(), "https://bookmarks.internal");
    }

    #[test]
    fn test_url_payload_shapes() {
        let one = UrlList::from("https://a.com");
        assert_eq!(
            serde_json::to_value(UrlPayload { url: &one }).unwrap(),
            serde_json::json!({ "url": "https://a.com" })
        );

        let many = UrlList::Many(vec!["https://a.com".into(), "https://b.com".into()]);
        assert_eq!(
            serde_json::to_value(UrlPayload { url: &many }).unwrap(),
            serde_json::json!({ "url": ["https://a.com", "https://b.com"] })
        );
    }

    #[test]
    fn test_update_payload_shape() {
        let payload = UpdatePayload {
            original_link: "https://old.com",
            new_link: "https://new.com",
            new_summary: "New summary",
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "original_link": "https://old.com",
                "new_link": "https://new.com",
                "new_summary": "New summary"
            })
        );
    }

    #[test]
    fn test_decode_search_response() {
        let body = r#"{
            "query": "rust",
            "count": 2,
            "results": [
                {"link": "https://a.com", "summary": "A", "tags": ["rust"], "source_type": "Blog",
                 "base_url": "a.com", "timestamp": null, "image_url": null,
                 "bm25": 0.2, "sim": 0.5, "total_score": 0.9},
                {"link": "https://b.com", "summary": "B", "tags": [], "source_type": "Tool",
                 "total_score": 0.3}
            ]
        }"#;

        let response: SearchResponse = decode(body).unwrap();

        assert_eq!(response.count, 2);
        assert_eq!(response.results[0].total_score, Some(0.9));
        assert_eq!(response.results[1].source_type, SourceType::Tool);
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let result: Result<Vec<Bookmark>> = decode("{not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_config_and_ack_decode() {
        let config: BackendConfig = decode(r#"{"google_api_key": "abc"}"#).unwrap();
        assert_eq!(config.google_api_key, "abc");

        let config: BackendConfig = decode("{}").unwrap();
        assert_eq!(config, BackendConfig::default());

        let check: ModelCheck =
            decode(r#"{"message": "Models test successful.", "sample": "ok"}"#).unwrap();
        assert_eq!(check.message, "Models test successful.");
        assert_eq!(check.sample.as_deref(), Some("ok"));

        let ack: Ack = decode(r#"{"message": "Bookmarks added successfully."}"#).unwrap();
        assert_eq!(ack.message, "Bookmarks added successfully.");
    }

    #[test]
    fn test_validation_rejects_empty_link() {
        let bookmarks = vec![Bookmark::new("https://a.com", ""), Bookmark::new(" ", "")];

        assert_eq!(
            validated("test", bookmarks),
            Err(ApiError::InvalidResponse("bookmark #1 has an empty link".to_string()))
        );
    }

    #[test]
    fn test_contains_link() {
        let bookmarks = vec![Bookmark::new("https://a.com", ""), Bookmark::new("https://b.com/x", "")];

        assert!(contains_link(&bookmarks, "https://b.com/x"));
        assert!(!contains_link(&bookmarks, "https://b.com"));
    }
}
