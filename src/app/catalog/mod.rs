//! 商品目录应用模块

pub mod handler;
pub mod model;
pub mod service;
