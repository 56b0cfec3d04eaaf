use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the sentiment inference engine.
    pub sentiment_url: String,
    /// Base URL of the zero-shot classification engine.
    pub zero_shot_url: String,
    /// Default sentiment model; overridable per request.
    pub sentiment_model: String,
    pub extractor_nav_timeout_secs: u64,
    pub extractor_settle_delay_ms: u64,
    pub extractor_user_agent: String,
    /// Hard cap on pages per extraction; the request value is clamped to it.
    pub extractor_max_pages: u32,
    /// Review texts at or below this length are discarded as UI noise.
    pub min_review_chars: usize,
}
