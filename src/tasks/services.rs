use crate::error::ApiError;
use crate::tasks::client::{RemoteTask, TaskBoard};

pub async fn list_tasks(board: &dyn TaskBoard) -> Result<Vec<RemoteTask>, ApiError> {
    board.list().await
}

/// Input is validated before anything leaves the process.
pub async fn create_task(board: &dyn TaskBoard, content: &str) -> Result<RemoteTask, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::invalid("content is required"));
    }
    board.create(content).await
}

pub async fn close_task(board: &dyn TaskBoard, task_id: &str) -> Result<(), ApiError> {
    let task_id = task_id.trim();
    if task_id.is_empty() {
        return Err(ApiError::invalid("taskId is required"));
    }
    board.close(task_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::async_trait;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts outbound calls so tests can assert none were issued.
    #[derive(Default)]
    struct RecordingBoard {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TaskBoard for RecordingBoard {
        async fn list(&self) -> Result<Vec<RemoteTask>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![RemoteTask {
                id: "1".into(),
                content: "water plants".into(),
            }])
        }

        async fn create(&self, content: &str) -> Result<RemoteTask, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RemoteTask {
                id: "2".into(),
                content: content.into(),
            })
        }

        async fn close(&self, _task_id: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn blank_content_is_rejected_without_an_outbound_call() {
        let board = RecordingBoard::default();
        let err = create_task(&board, "   ").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(board.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_trims_and_passes_through() {
        let board = RecordingBoard::default();
        let task = create_task(&board, "  buy milk  ").await.unwrap();
        assert_eq!(task.content, "buy milk");
        assert_eq!(board.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn close_requires_a_task_id() {
        let board = RecordingBoard::default();
        let err = close_task(&board, "").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(board.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn list_projects_id_and_content() {
        let board = RecordingBoard::default();
        let tasks = list_tasks(&board).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1");
    }
}
