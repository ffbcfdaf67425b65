use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SoundQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SoundResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "mp3Url")]
    pub mp3_url: String,
    pub tag: String,
}
