use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a Resume Analyzer. Analyze the resume file and \
     provide strengths, weaknesses, suggestions, and an ATS score (0-100). If irrelevant data is \
     found, say 'Couldn't analyze data'.";

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: String,
    pub database_url: String,
    #[serde(default = "default_pool_max_connections")]
    pub database_pool_max_connections: u32,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    //ai
    pub ai_key: String,
    #[serde(default = "default_ai_endpoint")]
    pub ai_endpoint: String,
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    #[serde(default = "default_ai_timeout_secs")]
    pub ai_timeout_secs: u64,
    #[serde(default = "default_ai_temperature")]
    pub ai_temperature: f32,
    #[serde(default = "default_ai_top_p")]
    pub ai_top_p: f32,
    #[serde(default = "default_ai_top_k")]
    pub ai_top_k: i32,
    #[serde(default = "default_ai_max_output_tokens")]
    pub ai_max_output_tokens: i32,
    #[serde(default = "default_ai_system_instruction")]
    pub ai_system_instruction: String,
}

fn default_service_name() -> String {
    "resumelens".into()
}

fn default_listen_port() -> String {
    "8000".into()
}

fn default_pool_max_connections() -> u32 {
    5
}

fn default_upload_dir() -> String {
    "uploads".into()
}

fn default_ai_endpoint() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn default_ai_model() -> String {
    "gemini-1.5-flash-8b".into()
}

fn default_ai_timeout_secs() -> u64 {
    120
}

fn default_ai_temperature() -> f32 {
    1.0
}

fn default_ai_top_p() -> f32 {
    0.95
}

fn default_ai_top_k() -> i32 {
    40
}

fn default_ai_max_output_tokens() -> i32 {
    8192
}

fn default_ai_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.into()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}
