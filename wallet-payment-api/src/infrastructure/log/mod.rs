use rotator::SizeRotatingWriter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod format;
pub use format::*;
mod rotator;

const MAX_LOG_SIZE: u64 = 1024 * 1024 * 5;
const MAX_LOG_FILES: usize = 3;

// 初始化日志, 返回的 guard 需要一直持有, 否则缓冲区里的日志会丢失
pub fn init_logger(
    format: CustomEventFormat,
    path: LogBasePath,
    log_level: &str,
) -> Result<WorkerGuard, crate::ServiceError> {
    std::fs::create_dir_all(&path.0).map_err(crate::SystemError::from)?;

    let writer = SizeRotatingWriter::new(path.log_path(), MAX_LOG_SIZE, MAX_LOG_FILES)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);

    let env_filter = EnvFilter::new(log_level);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(env_filter)
        .event_format(format)
        .try_init()
        .map_err(|e| crate::SystemError::LoggerInit(e.to_string()))?;

    tracing::info!("[init log] log path: {:?}", path.log_path());
    Ok(guard)
}
