//! 日志基础设施

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    pub fn init(level: Level) {
        tracing_subscriber::fmt().with_max_level(level).init();
    }

    /// 以 RUST_LOG 环境变量为准初始化日志，未设置时退回给定级别
    pub fn init_with_env(default_level: Level) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
