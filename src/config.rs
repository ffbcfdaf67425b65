use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Credentials and timeouts for the third-party proxies. A missing token is
/// not a startup error: the matching endpoints answer 500 naming the
/// variable, everything else keeps working.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    pub freesound_token: Option<String>,
    pub todoist_token: Option<String>,
    pub sound_timeout_secs: u64,
    pub task_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub proxy: ProxyConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "focusfeed".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "focusfeed-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        let proxy = ProxyConfig {
            freesound_token: non_empty_var("FREESOUND_TOKEN"),
            todoist_token: non_empty_var("TODOIST_TOKEN"),
            sound_timeout_secs: std::env::var("SOUND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
            task_timeout_secs: std::env::var("TASK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(15),
        };
        Ok(Self {
            database_url,
            jwt,
            proxy,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
