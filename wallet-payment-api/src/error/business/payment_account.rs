#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaymentAccountError {
    #[error("Invalid payment account record")]
    InvalidRecord,
    #[error("Payment account not found")]
    NotFound,
    #[error("Payment account operation failed: {0}")]
    OperationFailed(String),
}

impl PaymentAccountError {
    pub fn get_status_code(&self) -> u32 {
        match self {
            PaymentAccountError::InvalidRecord => 3300,
            PaymentAccountError::NotFound => 3301,
            PaymentAccountError::OperationFailed(_) => 3302,
        }
    }
}
