use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("response status {status}: {body}")]
    NonSuccessResponse { status: u16, body: String },
    #[error("Utils error: {0}")]
    Utils(#[from] wallet_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
            TransportError::NonSuccessResponse { status, .. } => *status >= 500,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Utils(wallet_utils::Error::Http(e.into()))
    }
}
