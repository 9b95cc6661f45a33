use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        tracing::info!("request params: {:?}", v);
        self.0 = self.0.json(&v);
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, crate::TransportError> {
        let res = self.0.send().await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            tracing::error!("response status = {}, body = {}", status, body);
            return Err(crate::TransportError::NonSuccessResponse {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!("response = {}", body);

        Ok(wallet_utils::serde_func::serde_from_str(&body)?)
    }
}
