use crate::{get_view_model, Hits};
use std::sync::Arc;
use wallet_payment_api::{
    test::{account_record, MockPaymentAccountBackend},
    AccountModel, AccountRecord, PaymentAccountError, PaymentAccountListener,
    PaymentAccountViewModel,
};

fn two_accounts() -> MockPaymentAccountBackend {
    MockPaymentAccountBackend::new(vec![account_record("A", true), account_record("B", false)])
}

#[tokio::test]
async fn no_callbacks_set_never_faults() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);

    assert!(vm.reload_new_data().await.is_ok());
    let b = vm.account_model().find("B").cloned().unwrap();
    assert!(vm.wallet_account_setting_default(&b).await.is_ok());
    assert!(vm.touch_setting(&b).is_ok());
    assert!(vm.select_account(&b).is_ok());
    assert!(vm.wallet_account_cancel_binding(&b).await.is_ok());
}

#[tokio::test]
async fn no_callbacks_set_on_an_empty_model_never_faults() {
    let backend = MockPaymentAccountBackend::new(vec![]);
    let mut vm = get_view_model(&backend);

    assert!(vm.reload_new_data().await.is_ok());
    assert!(vm.account_model().records.is_empty());

    let res = vm.wallet_account_setting_default(&account_record("A", false)).await;
    assert_eq!(res.code, PaymentAccountError::InvalidRecord.get_status_code());
    let res = vm.wallet_account_cancel_binding(&account_record("A", false)).await;
    assert_eq!(res.code, PaymentAccountError::InvalidRecord.get_status_code());
}

#[tokio::test]
async fn set_default_fires_success_once_for_the_chosen_record() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;

    let hits = Hits::default();
    hits.wire(&mut vm);

    let b = vm.account_model().find("B").cloned().unwrap();
    let res = vm.wallet_account_setting_default(&b).await;

    assert!(res.is_ok());
    let updated = res.result.unwrap();
    assert_eq!(updated.id, "B");
    assert!(updated.is_default);
    assert_eq!(hits.count("default_success:B"), 1);
    assert_eq!(hits.count("default_success:A"), 0);
    assert_eq!(hits.all(), vec!["default_success:B".to_string(), "account_noti".to_string()]);

    let model = vm.account_model();
    assert_eq!(model.records.iter().filter(|r| r.is_default).count(), 1);
    assert_eq!(vm.default_account().unwrap().id, "B");
}

#[tokio::test]
async fn view_model_built_with_an_existing_model() {
    let backend = two_accounts();
    let model = AccountModel {
        records: backend.records(),
        total: 2,
        size: 20,
        current: 1,
        pages: 1,
    };
    let mut vm = get_view_model(&backend).with_account_model(model);
    let hits = Hits::default();
    hits.wire(&mut vm);

    let res = vm.wallet_account_setting_default(&account_record("B", false)).await;

    assert!(res.is_ok());
    assert_eq!(hits.count("default_success:B"), 1);
    assert_eq!(backend.calls(), vec!["set_default(B)".to_string()]);
}

#[tokio::test]
async fn empty_record_is_invalid_and_fires_nothing() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;
    let hits = Hits::default();
    hits.wire(&mut vm);

    let res = vm.wallet_account_setting_default(&account_record("", false)).await;

    assert!(!res.is_ok());
    assert_eq!(res.code, PaymentAccountError::InvalidRecord.get_status_code());
    assert!(res.result.is_none());
    assert!(hits.all().is_empty());
}

#[tokio::test]
async fn unknown_record_is_invalid() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;
    let hits = Hits::default();
    hits.wire(&mut vm);

    let ghost = account_record("Z", false);
    assert_eq!(
        vm.wallet_account_setting_default(&ghost).await.code,
        PaymentAccountError::InvalidRecord.get_status_code()
    );
    assert_eq!(
        vm.wallet_account_cancel_binding(&ghost).await.code,
        PaymentAccountError::InvalidRecord.get_status_code()
    );
    assert!(!vm.touch_setting(&ghost).is_ok());
    assert!(!vm.select_account(&ghost).is_ok());
    assert!(hits.all().is_empty());
    assert!(backend.calls().iter().all(|c| c.starts_with("fetch_accounts")));
}

#[tokio::test]
async fn backend_failure_is_operation_failed_and_keeps_model() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;
    let hits = Hits::default();
    hits.wire(&mut vm);
    backend.fail_with("account frozen");

    let b = vm.account_model().find("B").cloned().unwrap();
    let res = vm.wallet_account_setting_default(&b).await;

    assert_eq!(
        res.code,
        PaymentAccountError::OperationFailed(String::new()).get_status_code()
    );
    assert!(res.message.contains("account frozen"));
    assert!(hits.all().is_empty());
    assert_eq!(vm.default_account().unwrap().id, "A");

    let res = vm.wallet_account_cancel_binding(&b).await;
    assert!(!res.is_ok());
    assert!(vm.account_model().contains("B"));
}

#[tokio::test]
async fn callback_set_later_is_the_one_invoked() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;

    let first = Hits::default();
    let second = Hits::default();
    let h = first.clone();
    vm.callbacks_mut()
        .set_setting_default_success(move |r| h.push(format!("default_success:{}", r.id)));
    let h = second.clone();
    vm.callbacks_mut()
        .set_setting_default_success(move |r| h.push(format!("default_success:{}", r.id)));

    let b = vm.account_model().find("B").cloned().unwrap();
    vm.wallet_account_setting_default(&b).await;

    assert!(first.all().is_empty());
    assert_eq!(second.all(), vec!["default_success:B".to_string()]);
}

#[tokio::test]
async fn reload_fires_reload_then_default_account() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    let hits = Hits::default();
    hits.wire(&mut vm);

    let res = vm.reload_new_data().await;

    assert!(res.is_ok());
    assert_eq!(hits.all(), vec!["reload".to_string(), "get_default:A".to_string()]);
    assert_eq!(vm.account_model().total, 2);
}

#[tokio::test]
async fn reload_without_default_skips_default_callback() {
    let backend =
        MockPaymentAccountBackend::new(vec![account_record("A", false), account_record("B", false)]);
    let mut vm = get_view_model(&backend);
    let hits = Hits::default();
    hits.wire(&mut vm);

    vm.reload_new_data().await;

    assert_eq!(hits.all(), vec!["reload".to_string()]);
    assert!(vm.default_account().is_none());
}

#[tokio::test]
async fn cancel_binding_then_reload() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;
    let hits = Hits::default();
    hits.wire(&mut vm);

    let a = vm.account_model().find("A").cloned().unwrap();
    let res = vm.wallet_account_cancel_binding(&a).await;
    assert!(res.is_ok());
    // 解绑本身不触发刷新
    assert_eq!(hits.count("reload"), 0);
    assert!(!vm.account_model().contains("A"));

    vm.reload_new_data().await;

    assert_eq!(hits.count("reload"), 1);
    assert!(!vm.account_model().contains("A"));
    assert_eq!(vm.account_model().total, 1);
    assert!(vm.default_account().is_none());
}

#[tokio::test]
async fn touch_and_select_forward_the_record() {
    let backend = two_accounts();
    let mut vm = get_view_model(&backend);
    vm.reload_new_data().await;
    let hits = Hits::default();
    hits.wire(&mut vm);

    let b = vm.account_model().find("B").cloned().unwrap();
    assert!(vm.touch_setting(&b).is_ok());
    assert!(vm.select_account(&b).is_ok());

    assert_eq!(hits.all(), vec!["touch:B".to_string(), "select:B".to_string()]);
    assert_eq!(vm.selected_account().unwrap().id, "B");
    assert!(backend.calls().iter().all(|c| c.starts_with("fetch_accounts")));
}

#[derive(Default)]
struct DefaultWatcher(std::sync::Mutex<Vec<String>>);

impl PaymentAccountListener for DefaultWatcher {
    fn on_get_default_account(&self, record: &AccountRecord) {
        self.0.lock().unwrap().push(record.id.clone());
    }

    fn on_setting_default_success(&self, record: &AccountRecord) {
        self.0.lock().unwrap().push(format!("set:{}", record.id));
    }
}

#[tokio::test]
async fn listener_replaces_all_slots() {
    let backend = two_accounts();
    let mut vm: PaymentAccountViewModel = get_view_model(&backend);
    let old = Hits::default();
    old.wire(&mut vm);

    let watcher = Arc::new(DefaultWatcher::default());
    vm.set_listener(watcher.clone());

    vm.reload_new_data().await;
    let b = vm.account_model().find("B").cloned().unwrap();
    vm.wallet_account_setting_default(&b).await;

    assert!(old.all().is_empty());
    assert_eq!(*watcher.0.lock().unwrap(), vec!["A".to_string(), "set:B".to_string()]);
}

#[tokio::test]
async fn frontend_receives_events_in_order() {
    use tokio_stream::StreamExt as _;

    let backend = two_accounts();
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut vm = get_view_model(&backend).with_frontend_notify(tx);

    vm.reload_new_data().await;
    let b = vm.account_model().find("B").cloned().unwrap();
    vm.wallet_account_setting_default(&b).await;
    vm.wallet_account_cancel_binding(&b).await;
    drop(vm);

    let events: Vec<String> = tokio_stream::wrappers::UnboundedReceiverStream::new(rx)
        .map(|e| e.event)
        .collect()
        .await;

    assert_eq!(
        events,
        vec![
            "PAYMENT_ACCOUNT_RELOAD".to_string(),
            "PAYMENT_ACCOUNT_DEFAULT_CHANGED".to_string(),
            "PAYMENT_ACCOUNT_UNBIND".to_string(),
        ]
    );
}
