use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use ordered_float::OrderedFloat;

use crate::errors::EngineError;
use crate::metrics::{cache_hit_total, cache_miss_total, Metrics};
use crate::smoothing::smooth;
use crate::types::Sample;

/// Fingeravtrykk av en serie: id, dato og bit-eksakt verdi per måling.
/// Enhver append/edit/delete hos verten gir ny nøkkel, så cachen
/// trenger ingen egen invalidering.
pub fn series_fingerprint(samples: &[Sample]) -> u64 {
    let mut h = DefaultHasher::new();
    for s in samples {
        s.id.hash(&mut h);
        s.date.hash(&mut h);
        s.value.to_bits().hash(&mut h);
    }
    samples.len().hash(&mut h);
    h.finish()
}

/// Memo-cache for glatting, nøklet på (fingeravtrykk, alpha).
/// Ren ytelsesoptimalisering for verter som rekalkulerer per render –
/// korrektheten avhenger aldri av den.
#[derive(Debug, Default)]
pub struct SmoothingCache {
    cache: Arc<Mutex<HashMap<(u64, OrderedFloat<f64>), Vec<f64>>>>,
}

impl SmoothingCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn smooth(
        &self,
        samples: &[Sample],
        alpha: f64,
        metrics: &Metrics,
    ) -> Result<Vec<f64>, EngineError> {
        let key = (series_fingerprint(samples), OrderedFloat(alpha));
        let mut cache = self.cache.lock().unwrap();

        if let Some(out) = cache.get(&key) {
            cache_hit_total(metrics).inc();
            return Ok(out.clone());
        }

        let out = smooth(samples, alpha)?;
        cache.insert(key, out.clone());
        cache_miss_total(metrics).inc();
        Ok(out)
    }
}
