use wallet_transport_backend::{
    api::BackendApi, error::BackendServiceError, request::PaymentAccountPageReq,
};

use crate::{
    error::business::payment_account::PaymentAccountError, response_vo::payment_account::AccountModel,
};

/// 收款账户的数据层, 生产环境由后端接口实现
#[async_trait::async_trait]
pub trait PaymentAccountBackend: Send + Sync {
    async fn fetch_accounts(
        &self,
        current: i64,
        size: i64,
    ) -> Result<AccountModel, crate::ServiceError>;

    async fn set_default_account(&self, id: &str) -> Result<(), crate::ServiceError>;

    async fn unbind_account(&self, id: &str) -> Result<(), crate::ServiceError>;
}

#[async_trait::async_trait]
impl PaymentAccountBackend for BackendApi {
    async fn fetch_accounts(
        &self,
        current: i64,
        size: i64,
    ) -> Result<AccountModel, crate::ServiceError> {
        let req = PaymentAccountPageReq::new(current, size);
        let page = self.payment_account_page(&req).await.map_err(map_backend_error)?;
        Ok(page.into())
    }

    async fn set_default_account(&self, id: &str) -> Result<(), crate::ServiceError> {
        self.payment_account_set_default(id).await.map_err(map_backend_error)
    }

    async fn unbind_account(&self, id: &str) -> Result<(), crate::ServiceError> {
        self.payment_account_unbind(id).await.map_err(map_backend_error)
    }
}

// 后端明确拒绝的请求归为业务错误, 网络等其他错误原样返回
pub(crate) fn map_backend_error(err: wallet_transport_backend::Error) -> crate::ServiceError {
    match err {
        wallet_transport_backend::Error::Backend(msg) => {
            PaymentAccountError::OperationFailed(msg.unwrap_or_default()).into()
        }
        wallet_transport_backend::Error::BackendServiceError(
            BackendServiceError::AccountNotFound,
        ) => PaymentAccountError::NotFound.into(),
        other => other.into(),
    }
}
