use std::sync::Arc;

use crate::response_vo::payment_account::AccountRecord;

/// Observer of the payment account screen. Every method defaults to a no-op.
pub trait PaymentAccountListener: Send + Sync {
    fn on_reload_data(&self) {}

    fn on_setting_default_success(&self, _record: &AccountRecord) {}

    fn on_get_default_account(&self, _record: &AccountRecord) {}

    fn on_setting_account_notification(&self) {}

    fn on_touch_setting(&self, _record: &AccountRecord) {}

    fn on_select_account(&self, _record: &AccountRecord) {}
}

type NotifyCallback = Box<dyn Fn() + Send + Sync>;
type RecordCallback = Box<dyn Fn(&AccountRecord) + Send + Sync>;

/// Six independently settable callback slots. An unset slot is skipped.
#[derive(Default)]
pub struct CallbackSlots {
    reload_data: Option<NotifyCallback>,
    setting_default_success: Option<RecordCallback>,
    get_default_account: Option<RecordCallback>,
    setting_account_notification: Option<NotifyCallback>,
    touch_setting: Option<RecordCallback>,
    select_account: Option<RecordCallback>,
}

impl CallbackSlots {
    /// Wires every slot to `listener`.
    pub fn from_listener<L: PaymentAccountListener + 'static>(listener: Arc<L>) -> Self {
        let mut slots = Self::default();

        let l = listener.clone();
        slots.set_reload_data(move || l.on_reload_data());
        let l = listener.clone();
        slots.set_setting_default_success(move |r| l.on_setting_default_success(r));
        let l = listener.clone();
        slots.set_get_default_account(move |r| l.on_get_default_account(r));
        let l = listener.clone();
        slots.set_setting_account_notification(move || l.on_setting_account_notification());
        let l = listener.clone();
        slots.set_touch_setting(move |r| l.on_touch_setting(r));
        slots.set_select_account(move |r| listener.on_select_account(r));

        slots
    }

    pub fn set_reload_data(&mut self, f: impl Fn() + Send + Sync + 'static) {
        self.reload_data = Some(Box::new(f));
    }

    pub fn set_setting_default_success(
        &mut self,
        f: impl Fn(&AccountRecord) + Send + Sync + 'static,
    ) {
        self.setting_default_success = Some(Box::new(f));
    }

    pub fn set_get_default_account(&mut self, f: impl Fn(&AccountRecord) + Send + Sync + 'static) {
        self.get_default_account = Some(Box::new(f));
    }

    pub fn set_setting_account_notification(&mut self, f: impl Fn() + Send + Sync + 'static) {
        self.setting_account_notification = Some(Box::new(f));
    }

    pub fn set_touch_setting(&mut self, f: impl Fn(&AccountRecord) + Send + Sync + 'static) {
        self.touch_setting = Some(Box::new(f));
    }

    pub fn set_select_account(&mut self, f: impl Fn(&AccountRecord) + Send + Sync + 'static) {
        self.select_account = Some(Box::new(f));
    }
}

impl PaymentAccountListener for CallbackSlots {
    fn on_reload_data(&self) {
        if let Some(cb) = &self.reload_data {
            cb();
        }
    }

    fn on_setting_default_success(&self, record: &AccountRecord) {
        if let Some(cb) = &self.setting_default_success {
            cb(record);
        }
    }

    fn on_get_default_account(&self, record: &AccountRecord) {
        if let Some(cb) = &self.get_default_account {
            cb(record);
        }
    }

    fn on_setting_account_notification(&self) {
        if let Some(cb) = &self.setting_account_notification {
            cb();
        }
    }

    fn on_touch_setting(&self, record: &AccountRecord) {
        if let Some(cb) = &self.touch_setting {
            cb(record);
        }
    }

    fn on_select_account(&self, record: &AccountRecord) {
        if let Some(cb) = &self.select_account {
            cb(record);
        }
    }
}

impl std::fmt::Debug for CallbackSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlots")
            .field("reload_data", &self.reload_data.is_some())
            .field("setting_default_success", &self.setting_default_success.is_some())
            .field("get_default_account", &self.get_default_account.is_some())
            .field("setting_account_notification", &self.setting_account_notification.is_some())
            .field("touch_setting", &self.touch_setting.is_some())
            .field("select_account", &self.select_account.is_some())
            .finish()
    }
}
