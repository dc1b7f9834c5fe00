//! Memoizing wrapper around a `Comparator`
//!
//! Results are keyed by the content fingerprints of both field lists, so a
//! re-upload of an already compared pair is answered without diffing again.
//! The comparator underneath is untouched and stays pure.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use shared_types::{fingerprint_fields, TemplateField};

use crate::comparator::Comparator;
use crate::error::CompareError;
use crate::result::ComparisonResult;

pub const DEFAULT_CAPACITY: usize = 256;

type CacheKey = (String, String);

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, Arc<ComparisonResult>>,
    // Insertion order, oldest first
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

/// Hit/miss counters for a `CachedComparator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug)]
pub struct CachedComparator {
    comparator: Comparator,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl CachedComparator {
    pub fn new(comparator: Comparator) -> Self {
        Self::with_capacity(comparator, DEFAULT_CAPACITY)
    }

    /// A capacity of 0 disables caching
    pub fn with_capacity(comparator: Comparator, capacity: usize) -> Self {
        Self {
            comparator,
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Compare, reusing an earlier result for the same pair of field sets.
    /// Failed comparisons are not cached.
    pub fn compare(
        &self,
        source_fields: &[TemplateField],
        target_fields: &[TemplateField],
    ) -> Result<Arc<ComparisonResult>, CompareError> {
        let key = (
            fingerprint_fields(source_fields),
            fingerprint_fields(target_fields),
        );

        {
            let mut state = self.lock();
            if let Some(result) = state.entries.get(&key).cloned() {
                state.hits += 1;
                tracing::debug!(source = %key.0, target = %key.1, "Comparison cache hit");
                return Ok(result);
            }
            state.misses += 1;
        }

        // Lock is not held while diffing
        let result = Arc::new(self.comparator.compare(source_fields, target_fields)?);

        if self.capacity > 0 {
            let mut state = self.lock();
            if !state.entries.contains_key(&key) {
                while state.entries.len() >= self.capacity {
                    match state.order.pop_front() {
                        Some(oldest) => {
                            state.entries.remove(&oldest);
                        }
                        None => break,
                    }
                }
                state.order.push_back(key.clone());
                state.entries.insert(key, Arc::clone(&result));
            }
        }

        Ok(result)
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
        }
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    // Entries are inserted whole, so a poisoned map is still usable
    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
