// 发送给前端事件的
use event::NotifyEvent;
use tokio::sync::mpsc::UnboundedSender;

pub(crate) mod event;
pub(crate) mod payment_account;

#[derive(Debug, serde::Serialize)]
pub struct FrontendNotifyEvent {
    pub event: String,
    pub data: NotifyEvent,
}

impl FrontendNotifyEvent {
    pub(crate) fn new(data: NotifyEvent) -> Self {
        FrontendNotifyEvent { event: data.event_name(), data }
    }

    pub(crate) fn send(
        self,
        sender: &UnboundedSender<FrontendNotifyEvent>,
    ) -> Result<(), crate::ServiceError> {
        sender.send(self).map_err(|e| {
            crate::ServiceError::System(crate::SystemError::ChannelSendFailed(e.to_string()))
        })
    }
}
