//! 商品目录业务服务
//!
//! 目录数据是写死的 mock 列表，list 前人为睡一段时间模拟网络往返。

use super::model::Product;
use crate::core::error::ShopError;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rust_decimal::Decimal;
use std::time::Duration;

#[derive(Clone)]
pub struct CatalogService {
    delay: Duration,
    /// 限时抢购结束时间，服务启动时固定为 24 小时后
    sale_ends_at: DateTime<Utc>,
}

impl CatalogService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sale_ends_at: Utc::now() + ChronoDuration::hours(24),
        }
    }

    /// 返回全部可售商品
    pub async fn list(&self) -> Result<Vec<Product>, ShopError> {
        // 模拟网络延迟
        tokio::time::sleep(self.delay).await;
        Ok(mock_products())
    }

    pub fn sale_ends_at(&self) -> DateTime<Utc> {
        self.sale_ends_at
    }
}

/// 写死的商品数据
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name_en: "Wireless Ergonomic Mouse".to_string(),
            name_he: "עכבר ארגונומי אלחוטי".to_string(),
            description_en: Some(
                "Comfortable wireless mouse designed for prolonged use.".to_string(),
            ),
            description_he: Some("עכבר אלחוטי נוח המיועד לשימוש ממושך.".to_string()),
            original_price: Some(Decimal::new(2999, 2)),
            sale_price: Decimal::new(2499, 2),
            image_url: "https://images.unsplash.com/photo-1739742473235-34a7bd9b8f87?w=900"
                .to_string(),
            highlights_en: Some(vec![
                "Ergonomic design".to_string(),
                "Wireless".to_string(),
                "Long battery life".to_string(),
            ]),
            highlights_he: Some(vec![
                "עיצוב ארגונומי".to_string(),
                "אלחוטי".to_string(),
                "חיי סוללה ארוכים".to_string(),
            ]),
            stock: Some(15),
        },
        Product {
            id: "2".to_string(),
            name_en: "Portable Bluetooth Speaker".to_string(),
            name_he: "רמקול בלוטות' נייד".to_string(),
            description_en: Some("Compact speaker with powerful sound.".to_string()),
            description_he: Some("רמקול קומפקטי עם צליל עוצמתי.".to_string()),
            original_price: Some(Decimal::new(4999, 2)),
            sale_price: Decimal::new(3999, 2),
            image_url: "https://images.unsplash.com/photo-1674303324806-7018a739ed11?w=900"
                .to_string(),
            highlights_en: Some(vec![
                "Bluetooth 5.0".to_string(),
                "Waterproof".to_string(),
                "10-hour battery".to_string(),
            ]),
            highlights_he: Some(vec![
                "בלוטות' 5.0".to_string(),
                "עמיד למים".to_string(),
                "10 שעות סוללה".to_string(),
            ]),
            // 售罄商品，展示为 out of stock
            stock: Some(0),
        },
        Product {
            id: "3".to_string(),
            name_en: "USB-C Hub 7-in-1".to_string(),
            name_he: "רכזת USB-C 7 ב-1".to_string(),
            description_en: Some("Expand your laptop's connectivity.".to_string()),
            description_he: Some("הרחב את אפשרויות הקישוריות של המחשב הנייד שלך.".to_string()),
            original_price: Some(Decimal::new(5999, 2)),
            sale_price: Decimal::new(4999, 2),
            image_url: "https://m.media-amazon.com/images/I/61gUxbUgsiL._AC_SL1200_.jpg"
                .to_string(),
            highlights_en: Some(vec![
                "HDMI 4K".to_string(),
                "2 USB 3.0".to_string(),
                "SD card reader".to_string(),
            ]),
            highlights_he: Some(vec![
                "HDMI 4K".to_string(),
                "2 USB 3.0".to_string(),
                "קורא כרטיסי SD".to_string(),
            ]),
            stock: Some(25),
        },
    ]
}
