use std::collections::HashMap;

use uuid::Uuid;

use super::shipping::CartLineItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerGroup {
    pub seller_id: Option<Uuid>,
    pub item_count: i64,
}

/// Partitions cart lines per seller, summing quantities. Sellers keep the
/// order in which they are first seen while scanning the cart, so the
/// final breakdown is stable across identical snapshots. Lines with a
/// non-positive quantity are malformed session data and are dropped.
pub fn group_by_seller(cart: &[CartLineItem]) -> Vec<SellerGroup> {
    let mut groups: Vec<SellerGroup> = Vec::new();
    let mut index: HashMap<Option<Uuid>, usize> = HashMap::new();

    for line in cart {
        if line.quantity <= 0 {
            continue;
        }
        match index.get(&line.seller_id) {
            Some(&at) => groups[at].item_count += i64::from(line.quantity),
            None => {
                index.insert(line.seller_id, groups.len());
                groups.push(SellerGroup {
                    seller_id: line.seller_id,
                    item_count: i64::from(line.quantity),
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::{group_by_seller, SellerGroup};
    use crate::domain::shipping::CartLineItem;

    fn line(seller_id: Option<Uuid>, quantity: i32) -> CartLineItem {
        CartLineItem {
            product_id: Uuid::new_v4(),
            seller_id,
            quantity,
            unit_price: BigDecimal::from_str("9.99").expect("valid decimal"),
        }
    }

    #[test]
    fn empty_cart_produces_no_groups() {
        assert!(group_by_seller(&[]).is_empty());
    }

    #[test]
    fn quantities_are_summed_per_seller() {
        let seller = Uuid::new_v4();
        let groups = group_by_seller(&[line(Some(seller), 2), line(Some(seller), 3)]);

        assert_eq!(
            groups,
            vec![SellerGroup { seller_id: Some(seller), item_count: 5 }]
        );
    }

    #[test]
    fn sellers_keep_first_encounter_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let cart = [
            line(Some(first), 1),
            line(Some(second), 1),
            line(Some(first), 4),
        ];

        let groups = group_by_seller(&cart);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].seller_id, Some(first));
        assert_eq!(groups[0].item_count, 5);
        assert_eq!(groups[1].seller_id, Some(second));
        assert_eq!(groups[1].item_count, 1);
    }

    #[test]
    fn lines_without_seller_group_under_the_blank_key() {
        let seller = Uuid::new_v4();
        let cart = [line(None, 2), line(Some(seller), 1), line(None, 1)];

        let groups = group_by_seller(&cart);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].seller_id, None);
        assert_eq!(groups[0].item_count, 3);
        assert_eq!(groups[1].seller_id, Some(seller));
    }

    #[test]
    fn non_positive_quantities_are_dropped() {
        let seller = Uuid::new_v4();
        let cart = [line(Some(seller), 0), line(Some(seller), -2), line(Some(seller), 3)];

        let groups = group_by_seller(&cart);

        assert_eq!(
            groups,
            vec![SellerGroup { seller_id: Some(seller), item_count: 3 }]
        );
    }

    #[test]
    fn item_counts_are_conserved_across_groups() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let cart = [
            line(Some(a), 2),
            line(Some(b), 7),
            line(None, 1),
            line(Some(a), 3),
        ];

        let grouped_total: i64 = group_by_seller(&cart).iter().map(|g| g.item_count).sum();
        let cart_total: i64 = cart.iter().map(|l| i64::from(l.quantity)).sum();

        assert_eq!(grouped_total, cart_total);
    }
}
