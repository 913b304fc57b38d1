//! Deterministic ARAM team randomizer.
//!
//! A seed string picks and orders `2 × team size` champions out of the
//! champion list; the first half is Team 1, the rest Team 2. The same seed,
//! list and size always produce the same teams, on any platform.
//!
//! # Quick Start
//!
//! ```no_run
//! use aram_core::{draw_matchup, generate_default_seed, ChampionSource, StaticChampions, TeamSize};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = StaticChampions::bundled()?;
//! let champions = source.champions().await?;
//! let seed = generate_default_seed()?;
//! let matchup = draw_matchup(&champions, TeamSize::default(), &seed)?;
//! println!("{} vs {}", matchup.left.len(), matchup.right.len());
//! # Ok(())
//! # }
//! ```

pub mod champion;
pub mod config;
pub mod error;
pub mod i18n;
mod rng;
mod sample;
mod seed;
pub mod share;
pub mod stats;
pub mod team;

// Re-export main types
pub use champion::{
    CachedSource, Champion, ChampionImage, ChampionInfo, ChampionSource, DataDragonClient,
    FallbackSource, StaticChampions,
};
pub use config::DataSourceConfig;
pub use error::{AramError, AramResult};
pub use i18n::{Dictionary, Language};
pub use rng::SeededRng;
pub use sample::{sample, sample_indices};
pub use seed::{
    generate_default_seed, generate_seed, generate_seed_with, DEFAULT_ALPHABET,
    DEFAULT_SEED_LENGTH,
};
pub use share::{matchup_summary, ShareLink};
pub use stats::{MatchupInsights, Metric, MetricComparison, RoleCount, TeamSummary};
pub use team::{draw_matchup, Matchup, TeamSize};
