use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::conf::Settings;
use crate::prelude::{Error, Result};

pub mod generate;
pub mod spec;
pub mod upload;

pub use generate::AnalyzeOps;

use spec::GenerationConfig;

/// Client for the Gemini generative language API. Holds the fixed generation
/// parameters and system instruction; one instance serves all requests.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_instruction: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn new(settings: &Settings) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.ai_timeout_secs))
            .build()
            .expect("failed to build http client");
        GeminiClient {
            http,
            base_url: settings.ai_endpoint.trim_end_matches('/').to_string(),
            api_key: settings.ai_key.clone(),
            model: settings.ai_model.clone(),
            system_instruction: settings.ai_system_instruction.clone(),
            generation: GenerationConfig {
                temperature: settings.ai_temperature,
                top_p: settings.ai_top_p,
                top_k: settings.ai_top_k,
                max_output_tokens: settings.ai_max_output_tokens,
                response_mime_type: "text/plain".into(),
            },
        }
    }
}

/// MIME type for a resume file, from its extension alone. Only PDF and
/// Word-family documents are accepted; anything else is rejected here,
/// before any network call is made.
pub fn resume_mime(path: &str) -> Result<&'static str> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "pdf" => Ok("application/pdf"),
        "doc" => Ok("application/msword"),
        "docx" => Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => Err(Error::UnsupportedFormat(ext)),
    }
}
