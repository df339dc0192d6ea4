use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};

use crate::{ApiError, EntryResponse, FailureKind, ProcessOptions, UploadResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upload requests run the server-side processing inside the request,
    /// so they get a far longer budget than entry fetches.
    pub upload_timeout: Duration,
    pub fetch_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            upload_timeout: Duration::from_secs(300),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Api: Send + Sync {
    async fn upload(
        &self,
        file: &Path,
        options: &ProcessOptions,
    ) -> Result<UploadResponse, ApiError>;

    async fn fetch_entry(&self, path: &str) -> Result<EntryResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, request_timeout: Duration) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }

    /// Joins an endpoint suffix onto the base URL. Entry paths are appended
    /// verbatim; the server routes on the raw path.
    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            suffix.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl Api for ReqwestApi {
    async fn upload(
        &self,
        file: &Path,
        options: &ProcessOptions,
    ) -> Result<UploadResponse, ApiError> {
        let url = reqwest::Url::parse(&self.endpoint("upload"))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|err| ApiError::new(FailureKind::FileRead, err.to_string()))?;

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("chunk_type", options.chunk_type.clone())
            .text("chunk_size", options.chunk_size.to_string())
            .text("overlap", options.overlap.to_string());

        let client = self.build_client(self.settings.upload_timeout)?;
        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        decode_json(response).await
    }

    async fn fetch_entry(&self, path: &str) -> Result<EntryResponse, ApiError> {
        let url = reqwest::Url::parse(&self.endpoint(&format!("json/{path}")))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = self.build_client(self.settings.fetch_timeout)?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        decode_json(response).await
    }
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
