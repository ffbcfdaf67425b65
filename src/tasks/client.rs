use std::time::Duration;

use axum::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;

pub const TODOIST_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// The projection of an upstream task this app exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTask {
    pub id: String,
    pub content: String,
}

#[async_trait]
pub trait TaskBoard: Send + Sync {
    async fn list(&self) -> Result<Vec<RemoteTask>, ApiError>;
    async fn create(&self, content: &str) -> Result<RemoteTask, ApiError>;
    async fn close(&self, task_id: &str) -> Result<(), ApiError>;
}

/// Todoist REST v2 client. Mutations are pure pass-through: no local state,
/// no idempotency key.
pub struct TodoistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TodoistClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

async fn ok_or_rejected(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::UpstreamRejected {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}

fn unreachable_err(e: reqwest::Error) -> ApiError {
    ApiError::UpstreamUnreachable(e.to_string())
}

#[async_trait]
impl TaskBoard for TodoistClient {
    async fn list(&self) -> Result<Vec<RemoteTask>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(unreachable_err)?;

        let resp = ok_or_rejected(resp).await?;
        let tasks: Vec<RemoteTask> = resp
            .json()
            .await
            .map_err(|e| ApiError::UpstreamDecode(e.to_string()))?;
        Ok(tasks)
    }

    async fn create(&self, content: &str) -> Result<RemoteTask, ApiError> {
        let resp = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(unreachable_err)?;

        let resp = ok_or_rejected(resp).await?;
        let task: RemoteTask = resp
            .json()
            .await
            .map_err(|e| ApiError::UpstreamDecode(e.to_string()))?;
        Ok(task)
    }

    async fn close(&self, task_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(format!("{}/tasks/{}/close", self.base_url, task_id))
            .header(reqwest::header::AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(unreachable_err)?;

        ok_or_rejected(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_task_ignores_extra_upstream_fields() {
        let raw = r#"{
            "id": "8485093748",
            "content": "buy milk",
            "project_id": "220474322",
            "priority": 1,
            "is_completed": false
        }"#;
        let task: RemoteTask = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "8485093748");
        assert_eq!(task.content, "buy milk");
    }
}
