use rand::Rng;
use tracing::debug;

use crate::error::ApiError;
use crate::sound::client::SoundSearch;
use crate::sound::dto::SoundResponse;

/// Upstream search is capped at this many candidates per call.
pub const SEARCH_PAGE_SIZE: u8 = 20;

/// Selection policy for choosing among search hits.
pub trait Picker: Send + Sync {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Search for `tag` and pick one hit. Non-deterministic with the production
/// picker: the same tag may yield a different sound on every call.
pub async fn pick_sound(
    client: &dyn SoundSearch,
    picker: &dyn Picker,
    tag: &str,
) -> Result<SoundResponse, ApiError> {
    let hits = client.search(tag, SEARCH_PAGE_SIZE).await?;
    if hits.is_empty() {
        return Err(ApiError::UpstreamEmpty(format!(
            "no sound found for tag={tag}"
        )));
    }

    let chosen = &hits[picker.pick(hits.len())];
    debug!(id = chosen.id, name = %chosen.name, "sound chosen");

    let mp3_url = chosen
        .preview_hq
        .clone()
        .or_else(|| chosen.preview_lq.clone())
        .ok_or_else(|| ApiError::UpstreamDecode("no mp3 preview in chosen result".into()))?;

    Ok(SoundResponse {
        id: chosen.id,
        name: chosen.name.clone(),
        mp3_url,
        tag: tag.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::client::SoundHit;
    use axum::async_trait;
    use axum::http::StatusCode;

    struct FakeSearch(Vec<SoundHit>);

    #[async_trait]
    impl SoundSearch for FakeSearch {
        async fn search(&self, _query: &str, _limit: u8) -> Result<Vec<SoundHit>, ApiError> {
            Ok(self.0.clone())
        }
    }

    struct FixedPicker(usize);

    impl Picker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn hit(id: i64, hq: Option<&str>, lq: Option<&str>) -> SoundHit {
        SoundHit {
            id,
            name: format!("sound-{id}"),
            preview_hq: hq.map(String::from),
            preview_lq: lq.map(String::from),
        }
    }

    #[tokio::test]
    async fn picks_the_injected_index() {
        let client = FakeSearch(vec![
            hit(1, Some("https://cdn/1-hq.mp3"), None),
            hit(2, Some("https://cdn/2-hq.mp3"), None),
        ]);
        let sound = pick_sound(&client, &FixedPicker(1), "rain").await.unwrap();
        assert_eq!(sound.id, 2);
        assert_eq!(sound.tag, "rain");
    }

    #[tokio::test]
    async fn prefers_high_quality_preview() {
        let client = FakeSearch(vec![hit(
            1,
            Some("https://cdn/hq.mp3"),
            Some("https://cdn/lq.mp3"),
        )]);
        let sound = pick_sound(&client, &FixedPicker(0), "rain").await.unwrap();
        assert_eq!(sound.mp3_url, "https://cdn/hq.mp3");
    }

    #[tokio::test]
    async fn falls_back_to_low_quality_preview() {
        let client = FakeSearch(vec![hit(1, None, Some("https://cdn/lq.mp3"))]);
        let sound = pick_sound(&client, &FixedPicker(0), "birds").await.unwrap();
        assert_eq!(sound.mp3_url, "https://cdn/lq.mp3");
    }

    #[tokio::test]
    async fn zero_results_is_not_found_and_names_the_tag() {
        let client = FakeSearch(vec![]);
        let err = pick_sound(&client, &FixedPicker(0), "zzzz-nonexistent")
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("zzzz-nonexistent"));
    }

    #[tokio::test]
    async fn missing_previews_is_a_gateway_error() {
        let client = FakeSearch(vec![hit(1, None, None)]);
        let err = pick_sound(&client, &FixedPicker(0), "rain").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
