mod listener;
pub use listener::{CallbackSlots, PaymentAccountListener};

use std::{collections::HashMap, sync::Arc};

use tokio::sync::mpsc::UnboundedSender;
use wallet_transport_backend::api::BackendApi;

use crate::{
    config::{Config, PaymentAccountConfig},
    domain::payment_account::PaymentAccountBackend,
    messaging::notify::{
        event::NotifyEvent,
        payment_account::{
            PaymentAccountDefaultChangedFrontend, PaymentAccountReloadFrontend,
            PaymentAccountUnbindFrontend,
        },
        FrontendNotifyEvent,
    },
    response_vo::payment_account::{AccountModel, AccountRecord},
    service::payment_account::PaymentAccountService,
};

/// View-model of the payment account screen.
///
/// One instance per screen. It owns the loaded [`AccountModel`], calls the data
/// layer, and reports results through its [`CallbackSlots`]. Callbacks run inline
/// on the task that awaited the operation. Operations take `&mut self`, so calls
/// on one instance never overlap.
pub struct PaymentAccountViewModel {
    account_model: AccountModel,
    selected_id: Option<String>,
    callbacks: CallbackSlots,
    service: PaymentAccountService,
    frontend_notify: Option<UnboundedSender<FrontendNotifyEvent>>,
}

impl PaymentAccountViewModel {
    pub fn new(backend: impl PaymentAccountBackend + 'static, config: &PaymentAccountConfig) -> Self {
        Self {
            account_model: AccountModel::default(),
            selected_id: None,
            callbacks: CallbackSlots::default(),
            service: PaymentAccountService::new(Box::new(backend), config.page_size),
            frontend_notify: None,
        }
    }

    /// Builds a view-model backed by the HTTP backend of `env` (dev | test | prod).
    pub fn from_config(
        config: &Config,
        env: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Self, crate::ServiceError> {
        let url = config.backend_api.url(env)?;
        let backend = BackendApi::new(Some(url.to_string()), headers)?;
        tracing::info!("[payment_account] backend url: {url}");
        Ok(Self::new(backend, &config.payment_account))
    }

    pub fn with_account_model(mut self, account_model: AccountModel) -> Self {
        self.account_model = account_model;
        self
    }

    pub fn with_frontend_notify(mut self, sender: UnboundedSender<FrontendNotifyEvent>) -> Self {
        self.frontend_notify = Some(sender);
        self
    }

    pub fn account_model(&self) -> &AccountModel {
        &self.account_model
    }

    pub fn default_account(&self) -> Option<&AccountRecord> {
        self.account_model.default_account()
    }

    pub fn selected_account(&self) -> Option<&AccountRecord> {
        self.selected_id.as_deref().and_then(|id| self.account_model.find(id))
    }

    pub fn callbacks_mut(&mut self) -> &mut CallbackSlots {
        &mut self.callbacks
    }

    /// Replaces all six callback slots with `listener`.
    pub fn set_listener<L: PaymentAccountListener + 'static>(&mut self, listener: Arc<L>) {
        self.callbacks = CallbackSlots::from_listener(listener);
    }

    pub(crate) async fn reload(&mut self) -> Result<(), crate::ServiceError> {
        let model = self.service.page(1).await?;
        tracing::info!(
            "[payment_account] reloaded {} of {} accounts",
            model.records.len(),
            model.total
        );
        self.account_model = model;
        if self.selected_account().is_none() {
            self.selected_id = None;
        }

        self.callbacks.on_reload_data();
        if let Some(default) = self.account_model.default_account() {
            self.callbacks.on_get_default_account(default);
        }
        self.notify(NotifyEvent::PaymentAccountReload((&self.account_model).into()));
        Ok(())
    }

    pub(crate) async fn load_more(&mut self) -> Result<bool, crate::ServiceError> {
        if !self.account_model.has_more() {
            tracing::debug!("[payment_account] no more pages");
            return Ok(false);
        }

        let next = self.account_model.next_page(self.service.page_size());
        let page = self.service.page(next).await?;
        let added = self.account_model.append_page(page);
        tracing::debug!("[payment_account] page {next} added {added} accounts");

        self.callbacks.on_reload_data();
        self.notify(NotifyEvent::PaymentAccountReload(PaymentAccountReloadFrontend::from(
            &self.account_model,
        )));
        Ok(true)
    }

    pub(crate) async fn set_default(
        &mut self,
        record: &AccountRecord,
    ) -> Result<AccountRecord, crate::ServiceError> {
        let updated = self.service.set_default(&mut self.account_model, record).await?;

        self.callbacks.on_setting_default_success(&updated);
        self.callbacks.on_setting_account_notification();
        self.notify(NotifyEvent::PaymentAccountDefaultChanged(
            PaymentAccountDefaultChangedFrontend { record: updated.clone() },
        ));
        Ok(updated)
    }

    pub(crate) async fn cancel_binding(
        &mut self,
        record: &AccountRecord,
    ) -> Result<AccountRecord, crate::ServiceError> {
        let removed = self.service.unbind(&mut self.account_model, record).await?;
        if self.selected_id.as_deref() == Some(removed.id.as_str()) {
            self.selected_id = None;
        }

        self.notify(NotifyEvent::PaymentAccountUnbind(PaymentAccountUnbindFrontend {
            id: removed.id.clone(),
            remaining: self.account_model.total,
        }));
        Ok(removed)
    }

    pub(crate) fn touch(&self, record: &AccountRecord) -> Result<(), crate::ServiceError> {
        PaymentAccountService::check_record(&self.account_model, record)?;
        if let Some(current) = self.account_model.find(&record.id) {
            self.callbacks.on_touch_setting(current);
        }
        Ok(())
    }

    pub(crate) fn select(&mut self, record: &AccountRecord) -> Result<(), crate::ServiceError> {
        PaymentAccountService::check_record(&self.account_model, record)?;
        self.selected_id = Some(record.id.clone());
        if let Some(current) = self.account_model.find(&record.id) {
            self.callbacks.on_select_account(current);
        }
        Ok(())
    }

    // 前端通道关闭只记录日志, 不影响本次操作结果
    fn notify(&self, event: NotifyEvent) {
        let Some(sender) = self.frontend_notify.as_ref() else {
            return;
        };
        match FrontendNotifyEvent::new(event).send(sender) {
            Ok(_) => tracing::debug!("[payment_account] send frontend event ok"),
            Err(e) => tracing::error!("[payment_account] send frontend event error: {e}"),
        }
    }
}

impl std::fmt::Debug for PaymentAccountViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentAccountViewModel")
            .field("account_model", &self.account_model)
            .field("selected_id", &self.selected_id)
            .field("callbacks", &self.callbacks)
            .field("page_size", &self.service.page_size())
            .finish()
    }
}
