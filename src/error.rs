use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. Proxy-layer failures carry enough
/// context to diagnose the upstream without re-issuing the call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("not allowed")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} already taken")]
    Conflict(&'static str),

    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("upstream request failed: {0}")]
    UpstreamUnreachable(String),

    #[error("upstream returned status {status}")]
    UpstreamRejected { status: u16, body: String },

    #[error("upstream response could not be decoded: {0}")]
    UpstreamDecode(String),

    #[error("{0}")]
    UpstreamEmpty(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) | ApiError::UpstreamEmpty(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UpstreamUnreachable(_)
            | ApiError::UpstreamRejected { .. }
            | ApiError::UpstreamDecode(_) => StatusCode::BAD_GATEWAY,
            ApiError::MissingCredential(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        ApiError::InvalidInput(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // Upstream status and body are kept for diagnostics.
            ApiError::UpstreamRejected {
                status: upstream,
                body,
            } => json!({ "error": self.to_string(), "status": upstream, "body": body }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_error_class() {
        assert_eq!(
            ApiError::Unauthenticated("missing Authorization header").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("post").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::invalid("content is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingCredential("FREESOUND_TOKEN").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UpstreamUnreachable("connect timeout".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::UpstreamRejected {
                status: 429,
                body: "rate limited".into()
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::UpstreamEmpty("no sound found for tag=zzzz".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ApiError::MissingCredential("TODOIST_TOKEN");
        assert_eq!(err.to_string(), "TODOIST_TOKEN is not set");
    }

    #[test]
    fn rejected_body_is_carried_in_the_response() {
        let err = ApiError::UpstreamRejected {
            status: 503,
            body: "maintenance".into(),
        };
        assert!(err.to_string().contains("503"));
    }
}
