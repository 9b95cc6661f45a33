use crate::{
    domain::payment_account::PaymentAccountBackend,
    error::business::{payment_account::PaymentAccountError, BusinessError},
    response_vo::payment_account::{AccountModel, AccountRecord},
};

pub struct PaymentAccountService {
    backend: Box<dyn PaymentAccountBackend>,
    page_size: i64,
}

impl PaymentAccountService {
    pub fn new(backend: Box<dyn PaymentAccountBackend>, page_size: i64) -> Self {
        Self { backend, page_size }
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub async fn page(&self, current: i64) -> Result<AccountModel, crate::ServiceError> {
        tracing::debug!("[payment_account] fetch page {current}, size {}", self.page_size);
        self.backend.fetch_accounts(current, self.page_size).await
    }

    /// The record must carry an id and be part of the currently loaded model.
    pub fn check_record(
        model: &AccountModel,
        record: &AccountRecord,
    ) -> Result<(), crate::ServiceError> {
        if record.id.is_empty() || !model.contains(&record.id) {
            tracing::warn!("[payment_account] invalid record: {:?}", record.id);
            return Err(BusinessError::PaymentAccount(PaymentAccountError::InvalidRecord).into());
        }
        Ok(())
    }

    pub async fn set_default(
        &self,
        model: &mut AccountModel,
        record: &AccountRecord,
    ) -> Result<AccountRecord, crate::ServiceError> {
        Self::check_record(model, record)?;

        self.backend.set_default_account(&record.id).await?;

        let updated = model
            .mark_default(&record.id)
            .cloned()
            .ok_or(PaymentAccountError::NotFound)?;
        tracing::info!("[payment_account] default account set: {}", updated.id);
        Ok(updated)
    }

    pub async fn unbind(
        &self,
        model: &mut AccountModel,
        record: &AccountRecord,
    ) -> Result<AccountRecord, crate::ServiceError> {
        Self::check_record(model, record)?;

        self.backend.unbind_account(&record.id).await?;

        let removed = model.remove(&record.id).ok_or(PaymentAccountError::NotFound)?;
        tracing::info!("[payment_account] account unbound: {}", removed.id);
        Ok(removed)
    }
}
