//! Assembler Service HTTP Client
//!
//! AssemblerRepositoryのHTTP実装（multipart POST）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::multipart::{Form, Part};

use super::models::ProcessFilesResponse;
use crate::domain::entities::result_set::AssemblerOutput;
use crate::domain::repositories::assembler_repository::{AssemblerRepository, SubmissionPayload};

/// HTTPベースのアセンブラリポジトリ
pub struct HttpAssemblerRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssemblerRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `endpoint` - `/process-files/` のURL
    pub fn new(endpoint: String) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// 既存のクライアントを使ってリポジトリを作成
    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// ペイロードからmultipartフォームを組み立てる
    fn build_form(payload: &SubmissionPayload) -> Result<Form> {
        let mut form = Form::new();
        for (slot, text) in payload.parts() {
            let part = Part::text(text.to_string())
                .file_name(slot.file_name())
                .mime_str("text/plain")
                .context("Failed to build multipart part")?;
            form = form.part(slot.part_name(), part);
        }
        Ok(form)
    }
}

#[async_trait]
impl AssemblerRepository for HttpAssemblerRepository {
    async fn process_files(&self, payload: &SubmissionPayload) -> Result<AssemblerOutput> {
        let form = Self::build_form(payload)?;

        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.endpoint))?;

        let status = response.status();
        info!("Assembler service responded with {}", status);

        let response = response
            .error_for_status()
            .context("Assembler service returned an error status")?;

        let body: ProcessFilesResponse = response
            .json()
            .await
            .context("Failed to decode assembler service response")?;

        Ok(body.into())
    }
}
