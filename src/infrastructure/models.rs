use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shipping::ShippingRule;
use crate::schema::{buyers, cart_items, shipping_rules};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = buyers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BuyerRow {
    pub id: Uuid,
    pub province: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = buyers)]
pub struct NewBuyerRow {
    pub id: Uuid,
    pub province: Option<String>,
    pub city: Option<String>,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = cart_items)]
#[diesel(belongs_to(BuyerRow, foreign_key = buyer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItemRow {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub product_id: Uuid,
    pub seller_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cart_items)]
pub struct NewCartItemRow {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub product_id: Uuid,
    pub seller_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = shipping_rules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShippingRuleRow {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub province: String,
    pub city: Option<String>,
    pub price: BigDecimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = shipping_rules)]
pub struct NewShippingRuleRow {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub province: String,
    pub city: Option<String>,
    pub price: BigDecimal,
    pub active: bool,
}

impl From<ShippingRuleRow> for ShippingRule {
    fn from(row: ShippingRuleRow) -> Self {
        ShippingRule {
            id: row.id,
            seller_id: row.seller_id,
            province: row.province,
            city: row.city,
            price: row.price,
            active: row.active,
        }
    }
}
