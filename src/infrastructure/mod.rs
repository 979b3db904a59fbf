//! 基础设施层：配置、日志和本地持久化存储

pub mod config;
pub mod logger;
pub mod storage;
