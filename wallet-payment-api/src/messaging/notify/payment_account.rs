use crate::response_vo::payment_account::{AccountModel, AccountRecord};

// biz_type = PAYMENT_ACCOUNT_RELOAD
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountReloadFrontend {
    pub total: i64,
    pub current: i64,
    pub pages: i64,
    /// 默认账户id
    pub default_id: Option<String>,
}

impl From<&AccountModel> for PaymentAccountReloadFrontend {
    fn from(value: &AccountModel) -> Self {
        Self {
            total: value.total,
            current: value.current,
            pages: value.pages,
            default_id: value.default_account().map(|r| r.id.clone()),
        }
    }
}

// biz_type = PAYMENT_ACCOUNT_DEFAULT_CHANGED
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountDefaultChangedFrontend {
    pub record: AccountRecord,
}

// biz_type = PAYMENT_ACCOUNT_UNBIND
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountUnbindFrontend {
    pub id: String,
    pub remaining: i64,
}
