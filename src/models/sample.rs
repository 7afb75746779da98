// src/models/sample.rs
// DOCUMENTATION: Example collection schemas
// PURPOSE: Reference shapes for `user` and `product`; no routes use them

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Users collection schema
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Full name
    pub name: String,

    pub email: String,

    pub address: String,

    /// Age in years
    #[validate(range(min = 0, max = 120))]
    #[serde(default)]
    pub age: Option<i32>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Products collection schema
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Price in dollars
    #[validate(range(min = 0.0))]
    pub price: f64,

    pub category: String,

    #[serde(default = "default_true")]
    pub in_stock: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_age_range() {
        let mut user: User = serde_json::from_value(json!({
            "name": "Anna",
            "email": "anna@example.com",
            "address": "Via Roma 1"
        }))
        .unwrap();
        assert!(user.is_active);
        assert!(user.validate().is_ok());

        user.age = Some(121);
        assert!(user.validate().is_err());

        user.age = Some(-1);
        assert!(user.validate().is_err());

        user.age = Some(120);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_product_price_non_negative() {
        let mut product: Product = serde_json::from_value(json!({
            "title": "Bomboniera",
            "price": 0.0,
            "category": "gifts"
        }))
        .unwrap();
        assert!(product.in_stock);
        assert!(product.validate().is_ok());

        product.price = -0.5;
        assert!(product.validate().is_err());
    }
}
