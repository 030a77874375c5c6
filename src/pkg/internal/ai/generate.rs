use std::sync::Arc;

use async_trait::async_trait;

use super::spec::{Content, FileData, GenerateContentRequest, GenerateContentResponse, Part};
use super::{resume_mime, GeminiClient};
use crate::prelude::{Error, Result};

const ANALYZE_PROMPT: &str = "Please analyze this resume and provide feedback.";

#[async_trait]
pub trait AnalyzeOps {
    async fn analyze_resume(&self, path: &str) -> Result<String>;
}

#[async_trait]
impl AnalyzeOps for Arc<GeminiClient> {
    /// Uploads the resume, then runs a single-turn conversation: the file as
    /// the sole prior user message, one follow-up asking for the analysis.
    /// The model's text comes back verbatim.
    async fn analyze_resume(&self, path: &str) -> Result<String> {
        let mime = resume_mime(path)?;
        let file = self.upload_resume(path, mime).await?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text(&self.system_instruction)],
            },
            generation_config: &self.generation,
            contents: vec![
                Content {
                    role: Some("user"),
                    parts: vec![Part::FileData(FileData {
                        mime_type: &file.mime_type,
                        file_uri: &file.uri,
                    })],
                },
                Content {
                    role: Some("user"),
                    parts: vec![Part::Text(ANALYZE_PROMPT)],
                },
            ],
        };
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::RemoteAnalysis(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteAnalysis(format!(
                "analysis returned {}: {}",
                status, body
            )));
        }
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::RemoteAnalysis(e.to_string()))?;
        let answer = body
            .text()
            .ok_or_else(|| Error::RemoteAnalysis("empty response from model".into()))?;
        Ok(answer.to_string())
    }
}
