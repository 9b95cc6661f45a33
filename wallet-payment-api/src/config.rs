use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub backend_api: BackendApiConfig,
    #[serde(default)]
    pub payment_account: PaymentAccountConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BackendApiConfig {
    pub dev_url: String,
    pub test_url: String,
    pub prod_url: String,
}

impl BackendApiConfig {
    /// env: dev | test | prod
    pub fn url(&self, env: &str) -> Result<&str, crate::ServiceError> {
        match env.to_ascii_lowercase().as_str() {
            "dev" => Ok(&self.dev_url),
            "test" => Ok(&self.test_url),
            "prod" => Ok(&self.prod_url),
            other => Err(crate::ServiceError::Parameter(format!("unknown env: {other}"))),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PaymentAccountConfig {
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    20
}

impl Default for PaymentAccountConfig {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

impl Config {
    pub fn new(config_content: &str) -> Result<Self, crate::ServiceError> {
        let config: Config = wallet_utils::serde_func::serde_yaml_from_str(config_content)?;
        if config.payment_account.page_size <= 0 {
            return Err(crate::ServiceError::Parameter(format!(
                "page_size must be positive, got {}",
                config.payment_account.page_size
            )));
        }
        Ok(config)
    }
}
