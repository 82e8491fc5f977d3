//! Statistics Module
//!
//! Summary statistics over the item collection, with a single-slot cache
//! that expires after a TTL and is cleared explicitly whenever an item is
//! created.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::catalog::Item;

// == Price Stats ==
/// Price aggregates over the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub total_value: f64,
}

// == Stats Snapshot ==
/// Point-in-time aggregate summary of the item collection.
///
/// Derived entirely from the collection; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Collection size
    pub total_items: usize,
    /// Item count per category label
    pub category_counts: HashMap<String, u64>,
    /// Price aggregates
    pub price: PriceStats,
    /// RFC 3339 timestamp of the computation
    pub last_calculated: String,
}

impl StatsSnapshot {
    // == Compute ==
    /// Aggregates the collection in a single pass.
    ///
    /// An empty collection yields all-zero price aggregates; min and max are
    /// explicitly floored to 0 rather than left at infinity.
    pub fn compute(items: &[Item]) -> Self {
        let total_items = items.len();

        let mut category_counts: HashMap<String, u64> = HashMap::new();
        let mut total_value = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for item in items {
            *category_counts.entry(item.category.clone()).or_insert(0) += 1;
            total_value += item.price;
            if item.price < min {
                min = item.price;
            }
            if item.price > max {
                max = item.price;
            }
        }

        let price = if total_items == 0 {
            PriceStats {
                average: 0.0,
                min: 0.0,
                max: 0.0,
                total_value: 0.0,
            }
        } else {
            PriceStats {
                average: total_value / total_items as f64,
                min,
                max,
                total_value,
            }
        };

        Self {
            total_items,
            category_counts,
            price,
            last_calculated: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Stats Cache ==
/// Process-wide single-slot cache for the latest snapshot.
///
/// The slot moves between three states: empty, fresh (age below the TTL),
/// and stale (age at or past the TTL). Reads from a fresh slot are
/// side-effect-free; an empty or stale slot makes the caller recompute and
/// refill. `invalidate` empties the slot unconditionally, TTL or not.
#[derive(Debug)]
pub struct StatsCache {
    /// Cached snapshot, if any
    snapshot: Option<StatsSnapshot>,
    /// When the cached snapshot was computed
    computed_at: Option<Instant>,
    /// Maximum age at which the snapshot may still be served
    ttl: Duration,
}

impl StatsCache {
    // == Constructor ==
    /// Creates an empty cache slot with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            snapshot: None,
            computed_at: None,
            ttl,
        }
    }

    // == Fresh ==
    /// Returns the cached snapshot if it is younger than the TTL.
    ///
    /// A snapshot whose age has reached the TTL is never served; the caller
    /// must recompute and `fill`.
    pub fn fresh(&self) -> Option<StatsSnapshot> {
        match (&self.snapshot, self.computed_at) {
            (Some(snapshot), Some(at)) if at.elapsed() < self.ttl => Some(snapshot.clone()),
            _ => None,
        }
    }

    // == Fill ==
    /// Stores a freshly computed snapshot, restarting the TTL clock.
    pub fn fill(&mut self, snapshot: StatsSnapshot) {
        self.snapshot = Some(snapshot);
        self.computed_at = Some(Instant::now());
    }

    // == Invalidate ==
    /// Empties the slot unconditionally, forcing recomputation on the next
    /// read. Called synchronously on every successful item creation.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.computed_at = None;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn item(id: i64, category: &str, price: f64) -> Item {
        Item {
            id,
            name: format!("item-{}", id),
            category: category.to_string(),
            price,
            image: None,
        }
    }

    #[test]
    fn test_compute_empty_collection() {
        let snapshot = StatsSnapshot::compute(&[]);

        assert_eq!(snapshot.total_items, 0);
        assert!(snapshot.category_counts.is_empty());
        assert_eq!(
            snapshot.price,
            PriceStats {
                average: 0.0,
                min: 0.0,
                max: 0.0,
                total_value: 0.0
            }
        );
    }

    #[test]
    fn test_compute_two_items() {
        let items = vec![item(1, "A", 10.0), item(2, "B", 30.0)];

        let snapshot = StatsSnapshot::compute(&items);
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.category_counts.get("A"), Some(&1));
        assert_eq!(snapshot.category_counts.get("B"), Some(&1));
        assert_eq!(
            snapshot.price,
            PriceStats {
                average: 20.0,
                min: 10.0,
                max: 30.0,
                total_value: 40.0
            }
        );
    }

    #[test]
    fn test_compute_category_counts_accumulate() {
        let items = vec![
            item(1, "Electronics", 100.0),
            item(2, "Electronics", 200.0),
            item(3, "Furniture", 300.0),
        ];

        let snapshot = StatsSnapshot::compute(&items);
        assert_eq!(snapshot.category_counts.get("Electronics"), Some(&2));
        assert_eq!(snapshot.category_counts.get("Furniture"), Some(&1));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = StatsSnapshot::compute(&[item(1, "A", 10.0)]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("totalItems").is_some());
        assert!(json.get("categoryCounts").is_some());
        assert!(json.get("lastCalculated").is_some());
        assert!(json["price"].get("totalValue").is_some());
    }

    #[test]
    fn test_cache_starts_empty() {
        let cache = StatsCache::new(Duration::from_secs(300));
        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_cache_serves_fresh_snapshot() {
        let mut cache = StatsCache::new(Duration::from_secs(300));
        let snapshot = StatsSnapshot::compute(&[item(1, "A", 10.0)]);

        cache.fill(snapshot.clone());
        assert_eq!(cache.fresh(), Some(snapshot));
    }

    #[test]
    fn test_cache_expires_after_ttl() {
        let mut cache = StatsCache::new(Duration::from_millis(50));
        cache.fill(StatsSnapshot::compute(&[]));

        assert!(cache.fresh().is_some());
        sleep(Duration::from_millis(60));
        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_cache_zero_ttl_never_serves() {
        let mut cache = StatsCache::new(Duration::from_secs(0));
        cache.fill(StatsSnapshot::compute(&[]));

        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_invalidate_clears_fresh_snapshot() {
        let mut cache = StatsCache::new(Duration::from_secs(300));
        cache.fill(StatsSnapshot::compute(&[]));
        assert!(cache.fresh().is_some());

        cache.invalidate();
        assert!(cache.fresh().is_none());
    }

    #[test]
    fn test_refill_after_invalidate() {
        let mut cache = StatsCache::new(Duration::from_secs(300));
        cache.fill(StatsSnapshot::compute(&[]));
        cache.invalidate();

        let snapshot = StatsSnapshot::compute(&[item(1, "A", 5.0)]);
        cache.fill(snapshot.clone());
        assert_eq!(cache.fresh(), Some(snapshot));
    }
}
