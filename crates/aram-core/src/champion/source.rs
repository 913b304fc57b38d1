use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{sort_by_name, Champion};
use crate::error::{AramError, AramResult};

const BUNDLED_CHAMPIONS: &str = include_str!("../../data/static-champions.json");

/// Provider of the ordered champion list a matchup is drawn from.
///
/// Implementations return champions sorted by name; the sampler relies on
/// that order being stable for a seed to reproduce a matchup.
#[async_trait]
pub trait ChampionSource: Send + Sync {
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S: ChampionSource + ?Sized> ChampionSource for Arc<S> {
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>> {
        (**self).champions().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A champion list held in memory, parsed once at construction.
#[derive(Debug, Clone)]
pub struct StaticChampions {
    champions: Arc<Vec<Champion>>,
}

impl StaticChampions {
    /// The dataset shipped inside the binary.
    pub fn bundled() -> AramResult<Self> {
        Self::from_json(BUNDLED_CHAMPIONS)
    }

    /// A JSON array of champion records on disk.
    pub fn from_path(path: &Path) -> AramResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AramError::Dataset {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AramResult<Self> {
        let champions: Vec<Champion> =
            serde_json::from_str(raw).map_err(|e| AramError::Dataset {
                message: format!("invalid champion dataset: {}", e),
            })?;
        Ok(Self::new(champions))
    }

    pub fn new(mut champions: Vec<Champion>) -> Self {
        sort_by_name(&mut champions);
        Self {
            champions: Arc::new(champions),
        }
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

#[async_trait]
impl ChampionSource for StaticChampions {
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>> {
        Ok(Arc::clone(&self.champions))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Tries `primary`; on any error logs it and serves `fallback` instead.
#[derive(Debug, Clone)]
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> ChampionSource for FallbackSource<P, F>
where
    P: ChampionSource,
    F: ChampionSource,
{
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>> {
        match self.primary.champions().await {
            Ok(champions) => Ok(champions),
            Err(e) => {
                warn!(
                    error = %e,
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    "falling back to secondary champion data"
                );
                let champions = self.fallback.champions().await?;
                debug!(count = champions.len(), "fallback champion data loaded");
                Ok(champions)
            }
        }
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
