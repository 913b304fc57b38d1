//! Argument groups shared by several commands.

use clap::ValueEnum;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Single-line JSON document on stdout
    Json,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct DataArgs {
    /// Use the bundled champion list and never touch the network
    /// (also enabled by ARAM_OFFLINE=1)
    #[arg(long)]
    pub offline: bool,

    /// Champion list JSON file to use instead of Data Dragon
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}
