//! Process-wide holiday cache.
//!
//! Lifecycle: empty at startup, populated by the first read, dropped by
//! [`HolidayCache::invalidate`] after every holiday add/remove. A load that
//! started before an invalidation is returned to its caller but never
//! stored, so a stale set cannot outlive the mutation that replaced it.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::calendar::HolidaySet;
use crate::error::CoreError;

#[derive(Default)]
struct CacheSlot {
    /// Bumped on every invalidation.
    generation: u64,
    dates: Option<Arc<HolidaySet>>,
}

/// Cached holiday dates shared across requests.
///
/// Designed to be wrapped in `Arc` and stored in application state.
#[derive(Default)]
pub struct HolidayCache {
    slot: RwLock<CacheSlot>,
}

impl HolidayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set, calling `load` to populate it on a miss.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<HolidaySet>, CoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<HolidaySet, CoreError>>,
    {
        let generation = {
            let slot = self.slot.read().await;
            if let Some(dates) = &slot.dates {
                return Ok(Arc::clone(dates));
            }
            slot.generation
        };

        let dates = Arc::new(load().await?);

        let mut slot = self.slot.write().await;
        if slot.generation == generation {
            slot.dates = Some(Arc::clone(&dates));
        }
        Ok(dates)
    }

    /// Drop the cached set. The next read reloads from the store.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.dates = None;
    }

    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.dates.is_some()
    }
}
