use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PomodoroQuery {
    #[serde(default = "default_work")]
    pub work: u32,
    #[serde(default = "default_rest")]
    pub rest: u32,
}

fn default_work() -> u32 {
    25
}

fn default_rest() -> u32 {
    5
}

#[derive(Debug, Serialize)]
pub struct PomodoroResponse {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

/// Timer settings for the pomodoro view; the countdown itself runs client
/// side.
pub async fn settings(Query(p): Query<PomodoroQuery>) -> Json<PomodoroResponse> {
    Json(PomodoroResponse {
        work_minutes: p.work,
        break_minutes: p.rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_25_and_5() {
        assert_eq!(default_work(), 25);
        assert_eq!(default_rest(), 5);
    }

    #[test]
    fn response_shape() {
        let json = serde_json::to_string(&PomodoroResponse {
            work_minutes: 25,
            break_minutes: 5,
        })
        .unwrap();
        assert_eq!(json, r#"{"work_minutes":25,"break_minutes":5}"#);
    }
}
