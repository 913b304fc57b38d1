//! Builds the champion source a command reads from.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use aram_core::{
    CachedSource, Champion, ChampionSource, DataDragonClient, DataSourceConfig, FallbackSource,
    StaticChampions,
};
use tracing::debug;

use super::DataArgs;

/// Champion list plus the config it was loaded with (needed for image URLs).
pub(crate) struct LoadedChampions {
    pub champions: Arc<Vec<Champion>>,
    pub config: DataSourceConfig,
}

/// `--data` file, else bundled data when offline, else Data Dragon with the
/// bundled list as fallback.
pub(crate) fn build(args: &DataArgs, config: &DataSourceConfig) -> anyhow::Result<Box<dyn ChampionSource>> {
    if let Some(path) = &args.data {
        let data = StaticChampions::from_path(path)
            .with_context(|| format!("loading champion data from {}", path.display()))?;
        return Ok(Box::new(data));
    }

    let bundled = StaticChampions::bundled().context("loading bundled champion data")?;
    if config.offline {
        return Ok(Box::new(bundled));
    }

    let client = DataDragonClient::new(config).context("building Data Dragon client")?;
    Ok(Box::new(CachedSource::new(
        FallbackSource::new(client, bundled),
        Duration::from_secs(config.cache_ttl_secs),
    )))
}

pub(crate) async fn load(args: &DataArgs) -> anyhow::Result<LoadedChampions> {
    let mut config = DataSourceConfig::from_env();
    if args.offline {
        config = config.with_offline(true);
    }

    let source = build(args, &config)?;
    debug!(source = source.name(), "loading champions");
    let champions = source
        .champions()
        .await
        .with_context(|| format!("reading champions from {}", source.name()))?;

    Ok(LoadedChampions { champions, config })
}
