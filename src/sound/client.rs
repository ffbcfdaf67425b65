use std::time::Duration;

use axum::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

pub const FREESOUND_BASE_URL: &str = "https://freesound.org/apiv2";

/// One search hit with its preview URLs, as far as this app cares.
#[derive(Debug, Clone)]
pub struct SoundHit {
    pub id: i64,
    pub name: String,
    pub preview_hq: Option<String>,
    pub preview_lq: Option<String>,
}

#[async_trait]
pub trait SoundSearch: Send + Sync {
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<SoundHit>, ApiError>;
}

/// Freesound text-search client. The token rides both as a query parameter
/// and an Authorization header; Freesound accepts either.
pub struct FreesoundClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl FreesoundClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    results: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    id: i64,
    name: String,
    #[serde(default)]
    previews: Previews,
}

#[derive(Debug, Default, Deserialize)]
struct Previews {
    #[serde(rename = "preview-hq-mp3")]
    hq: Option<String>,
    #[serde(rename = "preview-lq-mp3")]
    lq: Option<String>,
}

#[async_trait]
impl SoundSearch for FreesoundClient {
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<SoundHit>, ApiError> {
        let url = format!("{}/search/text/", self.base_url);
        let page_size = limit.to_string();

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("query", query),
                ("page_size", page_size.as_str()),
                ("fields", "id,name,previews"),
                ("token", self.token.as_str()),
            ])
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", self.token),
            )
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        let page: SearchPage = resp
            .json()
            .await
            .map_err(|e| ApiError::UpstreamDecode(e.to_string()))?;

        Ok(page
            .results
            .into_iter()
            .map(|r| SoundHit {
                id: r.id,
                name: r.name,
                preview_hq: r.previews.hq,
                preview_lq: r.previews.lq,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_decodes_freesound_shape() {
        let raw = r#"{
            "count": 2,
            "results": [
                {"id": 1, "name": "rain on roof", "previews": {
                    "preview-hq-mp3": "https://cdn/hq.mp3",
                    "preview-lq-mp3": "https://cdn/lq.mp3"
                }},
                {"id": 2, "name": "no previews here"}
            ]
        }"#;
        let page: SearchPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(
            page.results[0].previews.hq.as_deref(),
            Some("https://cdn/hq.mp3")
        );
        assert!(page.results[1].previews.hq.is_none());
    }
}
