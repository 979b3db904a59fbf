//! 购物车数据模型

use crate::app::catalog::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 购物车行：商品快照 + 数量
///
/// 加入购物车时固化商品当时的价格与展示信息，
/// 之后目录价格变动不会回溯影响已加入的行。
/// 序列化时商品字段平铺，与持久化镜像的历史格式保持一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// 该行小计
    pub fn subtotal(&self) -> Decimal {
        self.product.sale_price * Decimal::from(self.quantity)
    }
}

/// 购物车视图：行列表 + 派生汇总
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u32,
}
