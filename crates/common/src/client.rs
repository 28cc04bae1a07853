//! Typed HTTP client for the restaurant order API.

use models::order::{Order, OrderPatch};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{ErrorBody, Message};
use crate::CoreError;

#[derive(Clone, Debug)]
pub struct OrderClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url).map_err(|e| CoreError::Parse(e.to_string()))?;
        Ok(Self { http: reqwest::Client::new(), base_url })
    }

    pub fn from_config(cfg: &configs::ClientConfig) -> Result<Self, CoreError> {
        Self::new(&cfg.base_url)
    }

    /// `base/orders/<code>`; an empty code yields the collection path `base/orders/`.
    fn orders_url(&self, code: &str) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::Parse(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(["orders", code]);
        Ok(url)
    }

    pub async fn create(&self, order: &Order) -> Result<Order, CoreError> {
        let url = self.orders_url("")?;
        debug!(%url, order_code = %order.order_code, "POST order");
        let resp = self.http.post(url).json(order).send().await.map_err(network)?;
        decode(resp).await
    }

    pub async fn list(&self) -> Result<Vec<Order>, CoreError> {
        let resp = self.http.get(self.orders_url("")?).send().await.map_err(network)?;
        decode(resp).await
    }

    pub async fn get(&self, order_code: &str) -> Result<Order, CoreError> {
        let resp = self.http.get(self.orders_url(order_code)?).send().await.map_err(network)?;
        decode(resp).await
    }

    pub async fn update(&self, order_code: &str, patch: &OrderPatch) -> Result<Order, CoreError> {
        let url = self.orders_url(order_code)?;
        debug!(%url, fields = ?patch.supplied_fields(), "PUT order");
        let resp = self.http.put(url).json(patch).send().await.map_err(network)?;
        decode(resp).await
    }

    pub async fn delete(&self, order_code: &str) -> Result<String, CoreError> {
        let resp = self.http.delete(self.orders_url(order_code)?).send().await.map_err(network)?;
        decode::<Message>(resp).await.map(|m| m.message)
    }
}

fn network(e: reqwest::Error) -> CoreError {
    CoreError::Network(e.to_string())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(|e| CoreError::Parse(e.to_string()));
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(CoreError::Api { status: status.as_u16(), message })
}
