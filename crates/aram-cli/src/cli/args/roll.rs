use aram_core::{DEFAULT_ALPHABET, DEFAULT_SEED_LENGTH};
use url::Url;

use super::common::{DataArgs, OutputFormat};

pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000";

#[derive(clap::Args, Clone, Debug)]
pub struct RollArgs {
    /// Seed to roll; a fresh one is generated when omitted
    pub seed: Option<String>,

    /// Share link to reproduce; its seed, size and language are used
    #[arg(long, value_name = "URL", conflicts_with = "seed")]
    pub link: Option<Url>,

    /// Champions per team, clamped to 10..=20 (overrides the link)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Label language, `en` or `vi` (overrides the link)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Base URL share links are built on
    #[arg(
        long,
        value_name = "URL",
        env = "ARAM_SHARE_BASE_URL",
        default_value = DEFAULT_SHARE_BASE_URL
    )]
    pub base_url: Url,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SeedArgs {
    /// Characters per seed
    #[arg(long, default_value_t = DEFAULT_SEED_LENGTH as i64, allow_hyphen_values = true)]
    pub length: i64,

    /// Characters seeds are built from
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Number of seeds to print, one per line
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

#[derive(clap::Args, Clone, Debug)]
pub struct ChampionsArgs {
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub data: DataArgs,
}
