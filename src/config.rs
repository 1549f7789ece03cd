use std::env;

const DEFAULT_USER_AGENT: &str = concat!("topic-quiz-server/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub wiki_base_url: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("PORT")
                .or_else(|_| env::var("WEB_SERVER_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            wiki_base_url: env::var("WIKI_BASE_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org/wiki".to_string()),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
        }
    }

    /// `*` means any origin is accepted.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origin.trim() == "*"
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            wiki_base_url: "http://localhost:9/wiki".to_string(),
            fetch_timeout_secs: 1,
            user_agent: "topic-quiz-server-test".to_string(),
            cors_allowed_origin: "*".to_string(),
        }
    }
}
