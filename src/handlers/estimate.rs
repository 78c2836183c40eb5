use actix_web::{web, HttpResponse};
use bigdecimal::ToPrimitive;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::estimate_service::EstimateService;
use crate::db::DbPool;
use crate::domain::shipping::{BuyerLocation, CartLineItem, ShippingEstimate};
use crate::errors::AppError;
use crate::infrastructure::models::{BuyerRow, CartItemRow};
use crate::infrastructure::rule_store::DieselRuleStore;
use crate::schema::{buyers, cart_items};

// ── Response DTOs ────────────────────────────────────────────────────────────

/// One seller's share of the estimate. Field names follow the storefront
/// wire contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct SellerEstimateResponse {
    #[serde(rename = "vendedorId")]
    pub seller_id: Option<Uuid>,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "items")]
    pub item_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShippingEstimateResponse {
    #[serde(rename = "totalEnvio")]
    pub total: f64,
    #[serde(rename = "detalle")]
    pub breakdown: Vec<SellerEstimateResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<ShippingEstimate> for ShippingEstimateResponse {
    fn from(estimate: ShippingEstimate) -> Self {
        ShippingEstimateResponse {
            total: estimate.total.to_f64().unwrap_or(0.0),
            breakdown: estimate
                .breakdown
                .into_iter()
                .map(|entry| SellerEstimateResponse {
                    seller_id: entry.seller_id,
                    province: entry.province,
                    city: entry.city,
                    price: entry.price.to_f64().unwrap_or(0.0),
                    item_count: entry.item_count,
                })
                .collect(),
            warning: estimate.warning,
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// GET /shipping/estimate/{buyer_id}
///
/// Computes the shipping charge for the buyer's current cart, one entry
/// per seller. Configuration gaps (unknown buyer, buyer without a
/// province, sellers without rules) degrade to a zero estimate, at most
/// with a warning; only storage failures surface as errors.
#[utoipa::path(
    get,
    path = "/shipping/estimate/{buyer_id}",
    params(
        ("buyer_id" = Uuid, Path, description = "Buyer UUID"),
    ),
    responses(
        (status = 200, description = "Shipping estimate for the buyer's cart", body = ShippingEstimateResponse),
        (status = 503, description = "Shipping rule store unavailable"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "shipping"
)]
pub async fn get_shipping_estimate(
    pool: web::Data<DbPool>,
    service: web::Data<EstimateService<DieselRuleStore>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let buyer_id = path.into_inner();
    let service = service.into_inner();

    let estimate = web::block(move || {
        let mut conn = pool.get()?;

        let buyer = buyers::table
            .filter(buyers::id.eq(buyer_id))
            .select(BuyerRow::as_select())
            .first(&mut conn)
            .optional()?;

        // An unknown buyer estimates like one with no stored location.
        let location = buyer
            .map(|b| BuyerLocation {
                province: b.province,
                city: b.city,
            })
            .unwrap_or_default();

        let rows = cart_items::table
            .filter(cart_items::buyer_id.eq(buyer_id))
            .order(cart_items::created_at.asc())
            .select(CartItemRow::as_select())
            .load(&mut conn)?;

        let cart: Vec<CartLineItem> = rows
            .into_iter()
            .map(|row| CartLineItem {
                product_id: row.product_id,
                seller_id: row.seller_id,
                quantity: row.quantity,
                unit_price: row.unit_price,
            })
            .collect();

        service.estimate(&cart, &location).map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ShippingEstimateResponse::from(estimate)))
}
