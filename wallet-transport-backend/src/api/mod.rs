use std::collections::HashMap;

use crate::response::BackendResponse;

pub mod payment_account;

#[derive(Debug, Clone)]
pub struct BackendApi {
    pub client: wallet_transport::client::HttpClient,
}

impl BackendApi {
    pub fn new(
        backend_url: Option<String>,
        headers_opt: Option<HashMap<String, String>>,
    ) -> Result<Self, crate::Error> {
        let url = backend_url.unwrap_or(crate::consts::BASE_URL.to_string());

        let mut headers_opt = headers_opt.unwrap_or_default();
        headers_opt.insert("Accept-Encoding".to_string(), "identity".to_string());

        let timeout = Some(std::time::Duration::from_secs(15));
        Ok(Self {
            client: wallet_transport::client::HttpClient::new(&url, Some(headers_opt), timeout)?,
        })
    }

    pub async fn post_request<T, R>(&self, endpoint: &str, req: T) -> Result<R, crate::Error>
    where
        T: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let res = self
            .client
            .post(endpoint)
            .json(req)
            .send::<BackendResponse>()
            .await?;
        res.process::<R>()
    }
}
