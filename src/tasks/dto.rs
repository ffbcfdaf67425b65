use serde::{Deserialize, Serialize};

use crate::tasks::client::RemoteTask;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CloseTaskRequest {
    #[serde(default, rename = "taskId")]
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct TaskItem {
    pub id: String,
    pub content: String,
}

impl From<RemoteTask> for TaskItem {
    fn from(t: RemoteTask) -> Self {
        Self {
            id: t.id,
            content: t.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskItem>,
}

#[derive(Debug, Serialize)]
pub struct ClosedResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_parses_with_blank_content() {
        let req: CreateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.content.is_empty());
    }

    #[test]
    fn close_request_uses_camel_case_task_id() {
        let req: CloseTaskRequest = serde_json::from_str(r#"{"taskId": "42"}"#).unwrap();
        assert_eq!(req.task_id, "42");
    }

    #[test]
    fn list_response_shape() {
        let json = serde_json::to_string(&TaskListResponse {
            tasks: vec![TaskItem {
                id: "1".into(),
                content: "water plants".into(),
            }],
        })
        .unwrap();
        assert_eq!(json, r#"{"tasks":[{"id":"1","content":"water plants"}]}"#);
    }
}
