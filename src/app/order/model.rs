//! 订单数据模型

use crate::app::cart::model::CartLine;
use crate::app::catalog::model::Language;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 结算表单
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub language: Language,
}

/// 订单记录：结算成功时生成的不可变快照，此后只读不改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub phone: String,
    pub shipping_address: String,
    pub country: String,
    /// 提交时刻的购物车行副本
    pub items: Vec<CartLine>,
    pub total_amount: Decimal,
    pub language: Language,
    pub created_date: DateTime<Utc>,
}

/// 结算成功响应，携带新订单号
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub total_amount: Decimal,
}

/// 可选收货国家
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name_en: &'static str,
    pub name_he: &'static str,
}

/// 固定的收货国家列表
pub const COUNTRIES: &[Country] = &[
    Country {
        code: "IL",
        name_en: "Israel",
        name_he: "ישראל",
    },
    Country {
        code: "US",
        name_en: "United States",
        name_he: "ארצות הברית",
    },
    Country {
        code: "UK",
        name_en: "United Kingdom",
        name_he: "בריטניה",
    },
    Country {
        code: "DE",
        name_en: "Germany",
        name_he: "גרמניה",
    },
    Country {
        code: "FR",
        name_en: "France",
        name_he: "צרפת",
    },
];

/// 国家代码是否在固定列表内
pub fn is_supported_country(code: &str) -> bool {
    COUNTRIES.iter().any(|country| country.code == code)
}
