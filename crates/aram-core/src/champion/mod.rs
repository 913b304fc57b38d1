//! Champion records and the sources that provide them.
//!
//! A source is an explicit handle the caller builds once and passes to
//! whatever renders a matchup:
//!
//! - [`StaticChampions`]: bundled or on-disk JSON
//! - [`DataDragonClient`]: the public Data Dragon CDN
//! - [`FallbackSource`]: primary source, then a fallback on failure
//! - [`CachedSource`]: TTL cache around any other source

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

mod cache;
mod client;
mod source;

pub use cache::CachedSource;
pub use client::DataDragonClient;
pub use source::{ChampionSource, FallbackSource, StaticChampions};

/// Champion ratings on Data Dragon's 0–10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionInfo {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub magic: u32,
    #[serde(default)]
    pub difficulty: u32,
}

/// Sprite and portrait file references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionImage {
    /// Portrait file name (e.g. "Ahri.png").
    pub full: String,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(default)]
    pub w: u32,
    #[serde(default)]
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Stable identifier (e.g. "MissFortune").
    pub id: String,

    /// Numeric key as a string (e.g. "21").
    pub key: String,

    /// Display name (e.g. "Miss Fortune").
    pub name: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub blurb: String,

    #[serde(default)]
    pub info: ChampionInfo,

    #[serde(default)]
    pub image: ChampionImage,

    /// Role tags (e.g. "Marksman"). May be empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Display order: case-insensitive by name, exact name as tie-break.
pub fn compare_by_name(a: &Champion, b: &Champion) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_by_name(champions: &mut [Champion]) {
    champions.sort_by(compare_by_name);
}

#[cfg(test)]
pub(crate) fn test_champion(name: &str, tags: &[&str], info: ChampionInfo) -> Champion {
    Champion {
        id: name.replace(' ', ""),
        key: "0".to_string(),
        name: name.to_string(),
        title: String::new(),
        blurb: String::new(),
        info,
        image: ChampionImage {
            full: format!("{}.png", name.replace(' ', "")),
            ..ChampionImage::default()
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
