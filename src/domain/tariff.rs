use bigdecimal::{BigDecimal, Zero};

use super::location::normalize;
use super::shipping::ShippingRule;

/// Picks the tariff one seller charges for the given buyer location.
///
/// Matching order, first hit wins:
///   1. an active rule for the buyer's province whose city equals the
///      buyer's city (city-specific),
///   2. an active rule for the buyer's province with no city
///      (province-wide),
///   3. no rule: zero. Sellers without a rule for a location charge no
///      shipping.
///
/// Inactive rules never match. Several city-specific rules for the same
/// location is a seller data-quality problem; the first one in the
/// store's order is used and the condition is logged.
pub fn resolve_tariff(rules: &[ShippingRule], province: &str, city: &str) -> BigDecimal {
    let province = normalize(Some(province));
    let city = normalize(Some(city));

    let mut city_matches = rules.iter().filter(|rule| {
        let rule_city = normalize(rule.city.as_deref());
        rule.active
            && normalize(Some(rule.province.as_str())) == province
            && !rule_city.is_empty()
            && rule_city == city
    });

    if let Some(rule) = city_matches.next() {
        if city_matches.next().is_some() {
            log::warn!(
                "seller {} has duplicate city rules for {}/{}; using the first",
                rule.seller_id,
                province,
                city
            );
        }
        return rule.price.clone();
    }

    if let Some(rule) = rules.iter().find(|rule| {
        rule.active
            && normalize(Some(rule.province.as_str())) == province
            && normalize(rule.city.as_deref()).is_empty()
    }) {
        return rule.price.clone();
    }

    BigDecimal::zero()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::{BigDecimal, Zero};
    use uuid::Uuid;

    use super::resolve_tariff;
    use crate::domain::shipping::ShippingRule;

    fn rule(seller_id: Uuid, province: &str, city: Option<&str>, price: &str, active: bool) -> ShippingRule {
        ShippingRule {
            id: Uuid::new_v4(),
            seller_id,
            province: province.to_string(),
            city: city.map(str::to_string),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            active,
        }
    }

    fn price(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).expect("valid decimal")
    }

    #[test]
    fn city_rule_beats_province_rule() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", Some(""), "3", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Quito"), price("5"));
    }

    #[test]
    fn province_rule_applies_when_city_differs() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", Some(""), "3", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Guayaquil"), price("3"));
    }

    #[test]
    fn no_rule_for_province_resolves_to_zero() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", Some(""), "3", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Guayas", "Guayaquil"), BigDecimal::zero());
    }

    #[test]
    fn empty_rule_set_resolves_to_zero() {
        assert_eq!(resolve_tariff(&[], "Pichincha", "Quito"), BigDecimal::zero());
    }

    #[test]
    fn inactive_rules_are_never_selected() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", false),
            rule(seller, "Pichincha", None, "3", false),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Quito"), BigDecimal::zero());
    }

    #[test]
    fn inactive_city_rule_falls_through_to_province_rule() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", false),
            rule(seller, "Pichincha", None, "3", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Quito"), price("3"));
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let seller = Uuid::new_v4();
        let rules = vec![rule(seller, "  pichincha ", Some(" QUITO "), "5", true)];

        assert_eq!(resolve_tariff(&rules, "PICHINCHA", "quito"), price("5"));
        assert_eq!(
            resolve_tariff(&rules, "Pichincha", "Quito"),
            resolve_tariff(&rules, "pichincha", "QUITO"),
        );
    }

    #[test]
    fn absent_and_blank_rule_city_both_mean_province_wide() {
        let seller = Uuid::new_v4();
        let with_none = vec![rule(seller, "Pichincha", None, "3", true)];
        let with_blank = vec![rule(seller, "Pichincha", Some("  "), "3", true)];

        assert_eq!(resolve_tariff(&with_none, "Pichincha", "Quito"), price("3"));
        assert_eq!(resolve_tariff(&with_blank, "Pichincha", "Quito"), price("3"));
    }

    #[test]
    fn buyer_without_city_skips_city_rules() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", None, "3", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", ""), price("3"));
    }

    #[test]
    fn duplicate_city_rules_use_the_first_in_order() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", Some("Quito"), "9", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Quito"), price("5"));
    }

    #[test]
    fn matches_are_not_summed() {
        let seller = Uuid::new_v4();
        let rules = vec![
            rule(seller, "Pichincha", Some("Quito"), "5", true),
            rule(seller, "Pichincha", None, "3", true),
            rule(seller, "Pichincha", None, "7", true),
        ];

        assert_eq!(resolve_tariff(&rules, "Pichincha", "Quito"), price("5"));
    }
}
