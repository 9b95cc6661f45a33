use crate::{
    api::ReturnType, response_vo::payment_account::AccountRecord,
    view_model::PaymentAccountViewModel,
};

impl PaymentAccountViewModel {
    /// Reloads the first page. Fires `on_reload_data`, then `on_get_default_account`
    /// when the refreshed list has a default account.
    pub async fn reload_new_data(&mut self) -> ReturnType<()> {
        self.reload().await.into()
    }

    /// Loads the next page if there is one; `false` means the list was already complete.
    pub async fn load_more_data(&mut self) -> ReturnType<bool> {
        self.load_more().await.into()
    }

    pub async fn wallet_account_setting_default(
        &mut self,
        record: &AccountRecord,
    ) -> ReturnType<AccountRecord> {
        self.set_default(record).await.into()
    }

    /// Unbinds `record` and drops it from the loaded list. Does not reload.
    pub async fn wallet_account_cancel_binding(
        &mut self,
        record: &AccountRecord,
    ) -> ReturnType<AccountRecord> {
        self.cancel_binding(record).await.into()
    }

    pub fn touch_setting(&self, record: &AccountRecord) -> ReturnType<()> {
        self.touch(record).into()
    }

    pub fn select_account(&mut self, record: &AccountRecord) -> ReturnType<()> {
        self.select(record).into()
    }
}
