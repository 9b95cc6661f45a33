pub mod http;
pub mod serde;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde error: {0}")]
    Serde(#[from] serde::SerdeError),
    #[error("Http error: {0}")]
    Http(#[from] http::HttpError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Other error: `{0}`")]
    Other(String),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}
