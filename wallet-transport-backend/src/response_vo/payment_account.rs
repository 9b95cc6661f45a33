/// 收款方式
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayType {
    BankCard,
    Alipay,
    Wechat,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountInfo {
    pub id: String,
    pub pay_type: PayType,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub account_no: String,
    pub bank_name: Option<String>,
    pub bank_branch: Option<String>,
    /// 收款码图片地址
    pub qr_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "wallet_utils::serde_func::bool_from_int_or_bool"
    )]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountPage {
    #[serde(default)]
    pub records: Vec<PaymentAccountInfo>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub current: i64,
    #[serde(default)]
    pub pages: i64,
}
