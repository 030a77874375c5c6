use reqwest::header::CONTENT_TYPE;
use tokio::fs;

use super::spec::{RemoteFile, UploadFileResponse};
use super::GeminiClient;
use crate::prelude::{Error, Result};

impl GeminiClient {
    /// Pushes a stored resume to the remote files endpoint and returns the
    /// handle used to reference it in a conversation.
    pub(crate) async fn upload_resume(&self, path: &str, mime: &'static str) -> Result<RemoteFile> {
        let content = fs::read(path).await?;
        let url = format!("{}/upload/v1beta/files?key={}", self.base_url, self.api_key);
        let response = self
            .http
            .post(&url)
            .header("X-Goog-Upload-Protocol", "raw")
            .header(CONTENT_TYPE, mime)
            .body(content)
            .send()
            .await
            .map_err(|e| Error::RemoteUpload(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteUpload(format!(
                "upload returned {}: {}",
                status, body
            )));
        }
        let uploaded: UploadFileResponse = response
            .json()
            .await
            .map_err(|e| Error::RemoteUpload(e.to_string()))?;
        tracing::debug!("uploaded resume {} as {}", path, uploaded.file.uri);
        Ok(uploaded.file)
    }
}
