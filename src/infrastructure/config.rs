//! 应用配置
//!
//! 全部来自环境变量，未设置时使用默认值。

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP 监听地址
    pub bind_addr: String,
    /// 持久化镜像所在目录
    pub data_dir: PathBuf,
    /// 商品目录的模拟网络延迟
    pub catalog_delay: Duration,
    /// 订单存取的模拟网络延迟
    pub order_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("SHOP_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let data_dir = env::var("SHOP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let catalog_delay = Duration::from_millis(parse_millis("SHOP_CATALOG_DELAY_MS", 500));
        let order_delay = Duration::from_millis(parse_millis("SHOP_ORDER_DELAY_MS", 300));

        Self {
            bind_addr,
            data_dir,
            catalog_delay,
            order_delay,
        }
    }
}

fn parse_millis(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
