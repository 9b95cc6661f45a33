pub mod payment_account;

#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    #[error("Payment account error: {0}")]
    PaymentAccount(#[from] payment_account::PaymentAccountError),
}

impl BusinessError {
    pub fn get_status_code(&self) -> u32 {
        match self {
            BusinessError::PaymentAccount(msg) => msg.get_status_code(),
        }
    }
}
