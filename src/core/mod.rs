//! 核心层：统一错误处理、响应包装和中间件

pub mod error;
pub mod middleware;
pub mod response;
