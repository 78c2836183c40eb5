use std::collections::HashMap;

use uuid::Uuid;

use super::errors::DomainError;
use super::shipping::ShippingRule;

/// Read-only lookup of the active shipping rules a seller has registered.
///
/// Implementations must return rules in a stable order; the resolver's
/// first-match semantics depend on it.
pub trait ShippingRuleStore: Send + Sync + 'static {
    fn rules_for_seller(&self, seller_id: Uuid) -> Result<Vec<ShippingRule>, DomainError>;

    /// Batched variant used by the estimate flow: one call per request
    /// instead of one per seller. The default delegates to the per-seller
    /// lookup; adapters backed by a relational store override it with a
    /// single query. Sellers without rules may be absent from the map.
    fn rules_for_sellers(
        &self,
        seller_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<ShippingRule>>, DomainError> {
        let mut by_seller = HashMap::with_capacity(seller_ids.len());
        for &seller_id in seller_ids {
            by_seller.insert(seller_id, self.rules_for_seller(seller_id)?);
        }
        Ok(by_seller)
    }
}
