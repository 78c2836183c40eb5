use bigdecimal::{BigDecimal, Zero};
use uuid::Uuid;

use crate::domain::cart::group_by_seller;
use crate::domain::errors::DomainError;
use crate::domain::location::normalize;
use crate::domain::ports::ShippingRuleStore;
use crate::domain::shipping::{
    BuyerLocation, CartLineItem, SellerShippingEstimate, ShippingEstimate,
};
use crate::domain::tariff::resolve_tariff;

/// Warning returned when the buyer has no province on their profile.
pub const NO_PROVINCE_WARNING: &str =
    "El comprador no tiene una provincia configurada; no se puede estimar el envío.";

/// Computes shipping estimates for cart snapshots.
///
/// Holds only the rule store handle, never request state, so one instance
/// serves concurrent requests.
pub struct EstimateService<R> {
    rule_store: R,
}

impl<R: ShippingRuleStore> EstimateService<R> {
    pub fn new(rule_store: R) -> Self {
        Self { rule_store }
    }

    /// Builds the per-seller shipping breakdown for a cart snapshot.
    ///
    /// A buyer without a province gets a zero estimate with a warning and
    /// no rule lookup at all: without a province not even a province-wide
    /// rule can apply. An empty cart gets a zero estimate without a
    /// warning. Sellers with no matching rule charge zero. Only rule
    /// store I/O can fail.
    pub fn estimate(
        &self,
        cart: &[CartLineItem],
        buyer: &BuyerLocation,
    ) -> Result<ShippingEstimate, DomainError> {
        let province = buyer.province.clone().unwrap_or_default();
        let city = buyer.city.clone().unwrap_or_default();

        if normalize(Some(province.as_str())).is_empty() {
            return Ok(ShippingEstimate {
                total: BigDecimal::zero(),
                breakdown: Vec::new(),
                warning: Some(NO_PROVINCE_WARNING.to_string()),
            });
        }

        let groups = group_by_seller(cart);
        if groups.is_empty() {
            return Ok(ShippingEstimate {
                total: BigDecimal::zero(),
                breakdown: Vec::new(),
                warning: None,
            });
        }

        let seller_ids: Vec<Uuid> = groups.iter().filter_map(|g| g.seller_id).collect();
        let mut rules_by_seller = self.rule_store.rules_for_sellers(&seller_ids)?;

        let mut total = BigDecimal::zero();
        let mut breakdown = Vec::with_capacity(groups.len());
        for group in groups {
            let rules = group
                .seller_id
                .and_then(|id| rules_by_seller.remove(&id))
                .unwrap_or_default();
            let price = resolve_tariff(&rules, &province, &city);
            total += &price;
            breakdown.push(SellerShippingEstimate {
                seller_id: group.seller_id,
                province: province.trim().to_string(),
                city: city.trim().to_string(),
                price,
                item_count: group.item_count,
            });
        }

        Ok(ShippingEstimate {
            total,
            breakdown,
            warning: None,
        })
    }
}
