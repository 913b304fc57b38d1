use clap::{Parser, Subcommand};

pub mod common;
pub mod roll;
pub use common::*;
pub use roll::*;

#[derive(Parser)]
#[command(
    name = "aram",
    version,
    about = "ARAM team randomizer: two shareable teams from one seed"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw both teams for a seed or a share link
    Roll(RollArgs),
    /// Generate fresh random seeds
    Seed(SeedArgs),
    /// List the champion pool teams are drawn from
    Champions(ChampionsArgs),
    Version,
}
