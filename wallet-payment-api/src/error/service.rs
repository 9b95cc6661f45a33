#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Utils error: `{0}`")]
    Utils(#[from] wallet_utils::error::Error),
    #[error("Transport error: `{0}`")]
    Transport(#[from] wallet_transport::TransportError),
    #[error("TransportBackend error: `{0}`")]
    TransportBackend(#[from] wallet_transport_backend::Error),
    #[error("System error: {0}")]
    System(#[from] crate::error::system::SystemError),
    // 业务错误
    #[error("Business error: {0}")]
    Business(#[from] super::business::BusinessError),
    #[error("parameter error: {0}")]
    Parameter(String),
}

impl ServiceError {
    pub fn is_network_error(&self) -> bool {
        match self {
            ServiceError::Utils(err) => err.is_network_error(),
            ServiceError::Transport(err) => err.is_network_error(),
            ServiceError::TransportBackend(err) => err.is_network_error(),
            _ => false,
        }
    }
}

impl From<super::business::payment_account::PaymentAccountError> for ServiceError {
    fn from(err: super::business::payment_account::PaymentAccountError) -> Self {
        ServiceError::Business(super::business::BusinessError::PaymentAccount(err))
    }
}
