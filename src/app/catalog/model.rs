//! 商品目录数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 支持的界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    He,
}

/// 可售商品
///
/// 展示文案按语言成对出现，价格用 Decimal 精确表示。
/// stock 缺省表示不限量，original_price 缺省表示无划线价。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name_en: String,
    pub name_he: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_he: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub sale_price: Decimal,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights_he: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl Product {
    /// 展示层面的有货标记，不做任何库存预留
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |s| s > 0)
    }
}
