// 测试用日志, 多个测试重复调用不会 panic
pub fn init_test_log() {
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
}

