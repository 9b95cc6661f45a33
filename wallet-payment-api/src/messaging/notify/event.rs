use super::payment_account::{
    PaymentAccountDefaultChangedFrontend, PaymentAccountReloadFrontend,
    PaymentAccountUnbindFrontend,
};

#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum NotifyEvent {
    PaymentAccountReload(PaymentAccountReloadFrontend),
    PaymentAccountDefaultChanged(PaymentAccountDefaultChangedFrontend),
    PaymentAccountUnbind(PaymentAccountUnbindFrontend),
}

impl NotifyEvent {
    pub(crate) fn event_name(&self) -> String {
        match self {
            NotifyEvent::PaymentAccountReload(_) => "PAYMENT_ACCOUNT_RELOAD".to_string(),
            NotifyEvent::PaymentAccountDefaultChanged(_) => {
                "PAYMENT_ACCOUNT_DEFAULT_CHANGED".to_string()
            }
            NotifyEvent::PaymentAccountUnbind(_) => "PAYMENT_ACCOUNT_UNBIND".to_string(),
        }
    }
}
