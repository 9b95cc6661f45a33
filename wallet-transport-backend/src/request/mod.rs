#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountPageReq {
    pub current: i64,
    pub size: i64,
}

impl PaymentAccountPageReq {
    pub fn new(current: i64, size: i64) -> Self {
        Self { current, size }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountIdReq {
    pub id: String,
}

impl PaymentAccountIdReq {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}
