//! Test support: an in-memory payment account backend.
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    domain::payment_account::PaymentAccountBackend,
    error::business::payment_account::PaymentAccountError,
    response_vo::payment_account::{AccountModel, AccountRecord, PayType},
};

pub fn account_record(id: &str, is_default: bool) -> AccountRecord {
    AccountRecord {
        id: id.to_string(),
        pay_type: PayType::BankCard,
        real_name: "张三".to_string(),
        account_no: format!("62220202001122{id}"),
        bank_name: Some("ICBC".to_string()),
        bank_branch: None,
        qr_code: None,
        is_default,
    }
}

#[derive(Debug, Default)]
struct MockState {
    records: Vec<AccountRecord>,
    calls: Vec<String>,
    fail_with: Option<String>,
}

/// Behaves like the backend: paginates, keeps a single default, removes on unbind.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentAccountBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockPaymentAccountBackend {
    pub fn new(records: Vec<AccountRecord>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState { records, ..Default::default() })),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every following set-default / unbind call is rejected with `msg`.
    pub fn fail_with(&self, msg: &str) {
        self.state().fail_with = Some(msg.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn records(&self) -> Vec<AccountRecord> {
        self.state().records.clone()
    }

    fn check(state: &MockState, id: &str) -> Result<(), crate::ServiceError> {
        if let Some(msg) = &state.fail_with {
            return Err(PaymentAccountError::OperationFailed(msg.clone()).into());
        }
        if !state.records.iter().any(|r| r.id == id) {
            return Err(PaymentAccountError::NotFound.into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentAccountBackend for MockPaymentAccountBackend {
    async fn fetch_accounts(
        &self,
        current: i64,
        size: i64,
    ) -> Result<AccountModel, crate::ServiceError> {
        let mut state = self.state();
        state.calls.push(format!("fetch_accounts({current},{size})"));

        if size <= 0 || current <= 0 {
            return Err(crate::ServiceError::Parameter(format!(
                "current = {current}, size = {size}"
            )));
        }
        let total = state.records.len() as i64;
        let pages = (total + size - 1) / size;
        let records = state
            .records
            .iter()
            .skip(((current - 1) * size) as usize)
            .take(size as usize)
            .cloned()
            .collect();

        Ok(AccountModel { records, total, size, current, pages })
    }

    async fn set_default_account(&self, id: &str) -> Result<(), crate::ServiceError> {
        let mut state = self.state();
        state.calls.push(format!("set_default({id})"));
        Self::check(&state, id)?;

        for record in state.records.iter_mut() {
            record.is_default = record.id == id;
        }
        Ok(())
    }

    async fn unbind_account(&self, id: &str) -> Result<(), crate::ServiceError> {
        let mut state = self.state();
        state.calls.push(format!("unbind({id})"));
        Self::check(&state, id)?;

        state.records.retain(|r| r.id != id);
        Ok(())
    }
}
