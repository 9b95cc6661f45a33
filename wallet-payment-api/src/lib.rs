pub mod api;
pub mod config;
pub mod domain;
mod error;
pub(crate) mod infrastructure;
pub use infrastructure::log::*;
mod messaging;
pub use messaging::notify::{event::NotifyEvent, FrontendNotifyEvent};
mod response;
pub use response::Response;
pub mod response_vo;
pub mod service;
pub mod test;
pub mod view_model;

pub use error::{
    business::{payment_account::PaymentAccountError, BusinessError},
    system::SystemError,
    ServiceError,
};

pub use config::*;
pub use domain::payment_account::PaymentAccountBackend;
pub use response_vo::payment_account::{AccountModel, AccountRecord, PayType};
pub use view_model::{CallbackSlots, PaymentAccountListener, PaymentAccountViewModel};
