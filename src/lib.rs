//! # FlashSale 在线商城 Demo
//!
//! 这个库模拟一个限时抢购主题的小型电商后端，包括：
//! - 商品目录（内存 mock 数据 + 模拟网络延迟）
//! - 购物车（内存权威状态 + 本地持久化镜像）
//! - 结算下单与订单回执查询
//! - 无真实支付、无真实数据库，所有"后端"行为均为本地模拟

pub mod app;
pub mod core;
pub mod infrastructure;
