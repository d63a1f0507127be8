//! HTTP Gateway
//!
//! `reqwest` implementation of [`TodoGateway`]. On wasm32 this goes through
//! the browser's `fetch`; dropping a pending future aborts the request.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{GatewayError, GatewayResult, TodoGateway};
use crate::config::{ApiConfig, ConfigError};
use crate::domain::{NewTodo, Todo, TodoId, UserId};

const COLLECTION: &str = "todos";

/// Todo collection served over REST at `{base}/todos`
#[derive(Debug, Clone)]
pub struct HttpTodoGateway {
    client: Client,
    base: Url,
}

impl HttpTodoGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self, ConfigError> {
        let base = config.parsed_base_url()?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "cannot be a base".to_string(),
            });
        }
        Ok(Self { client, base })
    }

    /// `{base}/todos`
    pub fn collection_url(&self) -> Url {
        self.url_with(&[COLLECTION])
    }

    /// `{base}/todos/{id}`
    pub fn item_url(&self, id: TodoId) -> Url {
        self.url_with(&[COLLECTION, &id.to_string()])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in the constructor: the base always has path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Reject non-2xx responses
fn ensure_success(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let body = ensure_success(response)?.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl TodoGateway for HttpTodoGateway {
    async fn list(&self, user_id: UserId) -> GatewayResult<Vec<Todo>> {
        let response = self
            .client
            .get(self.collection_url())
            .query(&[("userId", user_id)])
            .send()
            .await?;
        decode(response).await
    }

    async fn create(&self, draft: &NewTodo) -> GatewayResult<Todo> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: TodoId) -> GatewayResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
