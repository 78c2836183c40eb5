use bigdecimal::BigDecimal;
use uuid::Uuid;

/// A seller-registered tariff for one province, optionally narrowed to a
/// city. A blank or absent `city` makes the rule province-wide.
#[derive(Debug, Clone)]
pub struct ShippingRule {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub province: String,
    pub city: Option<String>,
    pub price: BigDecimal,
    pub active: bool,
}

/// One line of the buyer's cart snapshot. `seller_id` is `None` for
/// malformed lines whose seller is unknown; those still count items but
/// never match a rule.
#[derive(Debug, Clone)]
pub struct CartLineItem {
    pub product_id: Uuid,
    pub seller_id: Option<Uuid>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Default)]
pub struct BuyerLocation {
    pub province: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SellerShippingEstimate {
    pub seller_id: Option<Uuid>,
    pub province: String,
    pub city: String,
    pub price: BigDecimal,
    pub item_count: i64,
}

#[derive(Debug, Clone)]
pub struct ShippingEstimate {
    pub total: BigDecimal,
    pub breakdown: Vec<SellerShippingEstimate>,
    pub warning: Option<String>,
}
