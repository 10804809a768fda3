use serde::Deserialize;
use std::time::Duration;

/// Keys shorter than this are treated as placeholders and never sent upstream
pub const MIN_API_KEY_LEN: usize = 20;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key (primary text provider)
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Gemini model used for generation
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Hugging Face inference API key (fallback text provider)
    #[serde(default)]
    pub huggingface_api_key: Option<String>,

    /// Hugging Face inference API base URL
    #[serde(default = "default_huggingface_api_url")]
    pub huggingface_api_url: String,

    /// Hugging Face models, tried in order
    #[serde(default = "default_huggingface_models")]
    pub huggingface_models: Vec<String>,

    /// TMDB read access token
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix joined with TMDB poster paths
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Timeout applied to every outbound request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_huggingface_api_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_huggingface_models() -> Vec<String> {
    vec!["gpt2".to_string(), "microsoft/DialoGPT-medium".to_string()]
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_api_url: default_gemini_api_url(),
            gemini_model: default_gemini_model(),
            huggingface_api_key: None,
            huggingface_api_url: default_huggingface_api_url(),
            huggingface_models: default_huggingface_models(),
            tmdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            tmdb_image_base_url: default_tmdb_image_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Returns the key only if it passes the sanity check
    pub fn usable_key(key: &Option<String>) -> Option<&str> {
        key.as_deref()
            .map(str::trim)
            .filter(|k| k.len() >= MIN_API_KEY_LEN)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
