use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{
    AnalysisRequest, AnalyzeResponse, BatchAnalyzeRequest, BatchAnalyzeResponse, HistoryResponse,
    StatsResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait AnalyzeEndpoint: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, ClientError>;

    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchAnalyzeResponse, ClientError>;
}

#[async_trait]
pub trait HistoryEndpoint: Send + Sync {
    async fn list(&self) -> Result<HistoryResponse, ClientError>;

    async fn stats(&self) -> Result<StatsResponse, ClientError>;
}

#[async_trait]
impl<T: AnalyzeEndpoint + ?Sized> AnalyzeEndpoint for Arc<T> {
    async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, ClientError> {
        (**self).analyze(text).await
    }

    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchAnalyzeResponse, ClientError> {
        (**self).analyze_batch(texts).await
    }
}

#[async_trait]
impl<T: HistoryEndpoint + ?Sized> HistoryEndpoint for Arc<T> {
    async fn list(&self) -> Result<HistoryResponse, ClientError> {
        (**self).list().await
    }

    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        (**self).stats().await
    }
}

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Transport(err.to_string()))
    }
}

#[async_trait]
impl AnalyzeEndpoint for HttpApi {
    async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, ClientError> {
        let url = self.endpoint("analyze")?;
        let body = AnalysisRequest {
            text: text.to_string(),
        };
        let response = self.client.post(url).json(&body).send().await?;
        read_json(response).await
    }

    async fn analyze_batch(&self, texts: &[String]) -> Result<BatchAnalyzeResponse, ClientError> {
        let url = self.endpoint("batch-analyze")?;
        let body = BatchAnalyzeRequest {
            texts: texts.to_vec(),
        };
        let response = self.client.post(url).json(&body).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl HistoryEndpoint for HttpApi {
    async fn list(&self) -> Result<HistoryResponse, ClientError> {
        let url = self.endpoint("history")?;
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        let url = self.endpoint("stats")?;
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}

// error statuses carry a JSON `{error}` body too
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    debug!("{} responded with {status}", response.url());
    Ok(response.json::<T>().await?)
}
