use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::{debug, info};

use super::{Champion, ChampionSource};
use crate::error::AramResult;

/// Caches the champion list of an inner source for a fixed time-to-live.
///
/// The cache belongs to this handle; clones share it. Failed fetches are not
/// cached, so the next call retries the inner source.
#[derive(Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache: Cache<(), Arc<Vec<Champion>>>,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    /// Drops the cached list; the next call refetches.
    pub fn invalidate(&self) {
        debug!("champion cache invalidated");
        self.cache.invalidate(&());
    }

    pub fn is_cached(&self) -> bool {
        self.cache.contains_key(&())
    }
}

#[async_trait]
impl<S: ChampionSource> ChampionSource for CachedSource<S> {
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>> {
        if let Some(champions) = self.cache.get(&()) {
            return Ok(champions);
        }

        let champions = self.inner.champions().await?;
        info!(
            source = self.inner.name(),
            count = champions.len(),
            "populating champion cache"
        );
        self.cache.insert((), Arc::clone(&champions));
        Ok(champions)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}
