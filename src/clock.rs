use axum::Json;
use serde::Serialize;
use time::{macros::format_description, OffsetDateTime};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub datetime: String,
}

fn now_utc_string() -> Result<String, time::error::Format> {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc().format(&fmt)
}

/// Current UTC time, no external calls involved.
pub async fn utc_now() -> Result<Json<TimeResponse>, ApiError> {
    let datetime = now_utc_string().map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
    Ok(Json(TimeResponse { datetime }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn formats_as_date_space_time() {
        let s = now_utc_string().unwrap();
        let re = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
        assert!(re.is_match(&s), "unexpected format: {s}");
    }
}
