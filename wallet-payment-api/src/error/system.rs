#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Channel send failed: {0}")]
    ChannelSendFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger init failed: {0}")]
    LoggerInit(String),
}
