use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Tellere for motoren. Ren telemetri, ingen beregning avhenger av dem.
pub struct Metrics {
    pub registry: Registry,
    analyze_total: IntCounter,
    sparse_series_total: IntCounter,
    cache_hit_total: IntCounter,
    cache_miss_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let analyze_total = IntCounter::new(
            "trend_analyze_total",
            "Antall fullførte serie-analyser",
        )
        .unwrap();
        let sparse_series_total = IntCounter::new(
            "trend_sparse_series_total",
            "Analyser som degraderte til sentinel pga. < 2 målinger",
        )
        .unwrap();
        let cache_hit_total = IntCounter::new(
            "trend_cache_hit_total",
            "Memo-cache-treff (seriefingeravtrykk + alpha)",
        )
        .unwrap();
        let cache_miss_total = IntCounter::new(
            "trend_cache_miss_total",
            "Memo-cache-bom",
        )
        .unwrap();

        registry.register(Box::new(analyze_total.clone())).unwrap();
        registry
            .register(Box::new(sparse_series_total.clone()))
            .unwrap();
        registry.register(Box::new(cache_hit_total.clone())).unwrap();
        registry
            .register(Box::new(cache_miss_total.clone()))
            .unwrap();

        Self {
            registry,
            analyze_total,
            sparse_series_total,
            cache_hit_total,
            cache_miss_total,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prosess-global default (verter som vil scrape, bruker denne).
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn analyze_total(m: &Metrics) -> &IntCounter {
    &m.analyze_total
}

pub fn sparse_series_total(m: &Metrics) -> &IntCounter {
    &m.sparse_series_total
}

pub fn cache_hit_total(m: &Metrics) -> &IntCounter {
    &m.cache_hit_total
}

pub fn cache_miss_total(m: &Metrics) -> &IntCounter {
    &m.cache_miss_total
}
