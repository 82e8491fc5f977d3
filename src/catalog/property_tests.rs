//! Property-Based Tests for the Catalog Module
//!
//! Uses proptest to verify search, pagination, and statistics correctness
//! over arbitrary collections.

use proptest::prelude::*;

use crate::catalog::{paginate, parse_page_param, search, Item, StatsSnapshot};

// == Strategies ==
/// Generates item names with mixed case so substring search has work to do
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,24}".prop_map(|s| s)
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Electronics".to_string()),
        Just("Furniture".to_string()),
        Just("Outdoors".to_string()),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (0i64..1_000_000, name_strategy(), category_strategy(), 0.0f64..10_000.0).prop_map(
        |(id, name, category, price)| Item {
            id,
            name,
            category,
            price,
            image: None,
        },
    )
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any collection and query, search returns exactly the items whose
    // name contains the query case-insensitively, in their original order.
    #[test]
    fn prop_search_is_exact_case_insensitive_subset(
        items in items_strategy(),
        q in "[a-zA-Z]{1,6}",
    ) {
        let results = search(items.clone(), Some(&q));
        let needle = q.to_lowercase();

        let expected: Vec<Item> = items
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect();
        prop_assert_eq!(results, expected);
    }

    // An empty query never filters anything.
    #[test]
    fn prop_search_empty_query_is_identity(items in items_strategy()) {
        prop_assert_eq!(search(items.clone(), Some("")), items.clone());
        prop_assert_eq!(search(items.clone(), None), items);
    }

    // Page/limit parsing never yields a value below 1.
    #[test]
    fn prop_parse_page_param_floor(raw in ".{0,10}", default in 1usize..100) {
        prop_assert!(parse_page_param(Some(&raw), default) >= 1);
        prop_assert!(parse_page_param(None, default) >= 1);
    }

    // Walking every page in order reassembles the whole collection, and no
    // page exceeds the limit.
    #[test]
    fn prop_paginate_pages_partition_collection(
        items in items_strategy(),
        limit in 1usize..10,
    ) {
        let (_, meta) = paginate(items.clone(), 1, limit);
        prop_assert_eq!(meta.total_items, items.len());
        prop_assert_eq!(meta.total_pages, items.len().div_ceil(limit));

        let mut reassembled = Vec::new();
        for page in 1..=meta.total_pages.max(1) {
            let (page_items, _) = paginate(items.clone(), page, limit);
            prop_assert!(page_items.len() <= limit);
            reassembled.extend(page_items);
        }
        prop_assert_eq!(reassembled, items);
    }

    // Any page past the last one is empty, never an error.
    #[test]
    fn prop_paginate_out_of_range_is_empty(
        items in items_strategy(),
        limit in 1usize..10,
        overshoot in 1usize..5,
    ) {
        let (_, meta) = paginate(items.clone(), 1, limit);
        let (page_items, _) = paginate(items, meta.total_pages + overshoot, limit);
        prop_assert!(page_items.is_empty());
    }

    // Statistics totals are consistent: counts per category sum to the
    // collection size, the total value is the price sum, and for non-empty
    // collections min <= average <= max.
    #[test]
    fn prop_stats_are_consistent(items in items_strategy()) {
        let snapshot = StatsSnapshot::compute(&items);

        prop_assert_eq!(snapshot.total_items, items.len());

        let category_sum: u64 = snapshot.category_counts.values().sum();
        prop_assert_eq!(category_sum as usize, items.len());

        let price_sum: f64 = items.iter().map(|item| item.price).sum();
        prop_assert!((snapshot.price.total_value - price_sum).abs() < 1e-6);

        if items.is_empty() {
            prop_assert_eq!(snapshot.price.min, 0.0);
            prop_assert_eq!(snapshot.price.max, 0.0);
            prop_assert_eq!(snapshot.price.average, 0.0);
        } else {
            prop_assert!(snapshot.price.min <= snapshot.price.average + 1e-9);
            prop_assert!(snapshot.price.average <= snapshot.price.max + 1e-9);
        }
    }
}
