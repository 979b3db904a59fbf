//! 订单应用模块：结算下单与订单查询

pub mod handler;
pub mod model;
pub mod service;
