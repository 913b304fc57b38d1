//! Team sizing and the seeded matchup draw.

use serde::{Deserialize, Serialize};

use crate::error::AramResult;
use crate::sample::sample;

pub const DEFAULT_TEAM_SIZE: u32 = 15;
pub const MIN_TEAM_SIZE: u32 = 10;
pub const MAX_TEAM_SIZE: u32 = 20;

/// Champions per team, always within `MIN_TEAM_SIZE..=MAX_TEAM_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamSize(u32);

impl Default for TeamSize {
    fn default() -> Self {
        Self(DEFAULT_TEAM_SIZE)
    }
}

impl TeamSize {
    pub fn clamp(value: i64) -> Self {
        Self(value.clamp(i64::from(MIN_TEAM_SIZE), i64::from(MAX_TEAM_SIZE)) as u32)
    }

    /// Reads a raw `size` parameter the way the share links were written.
    ///
    /// Leading whitespace and a sign are accepted, trailing junk after the
    /// digits is ignored (`"12abc"` is 12). Missing or digit-less input gives
    /// the default size; anything else is clamped.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(parse_leading_int)
            .map(Self::clamp)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self.0 == DEFAULT_TEAM_SIZE
    }

    /// Number of champions drawn for both teams together.
    pub fn pool_size(self) -> usize {
        self.0 as usize * 2
    }
}

impl std::fmt::Display for TeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overlong inputs saturate; they clamp to the same bound either way.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Two teams split from one seeded pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup<T> {
    pub left: Vec<T>,
    pub right: Vec<T>,
}

impl<T> Matchup<T> {
    /// Splits a pool in half; `left` gets `floor(len / 2)` entries.
    pub fn split(mut pool: Vec<T>) -> Self {
        let right = pool.split_off(pool.len() / 2);
        Self { left: pool, right }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Draws `2 × team_size` entries of `pool` for `seed` and splits them.
///
/// Fails with `InvalidArgument` when the pool is smaller than both teams.
pub fn draw_matchup<T: Clone>(pool: &[T], team_size: TeamSize, seed: &str) -> AramResult<Matchup<T>> {
    let drawn = sample(pool, team_size.pool_size(), seed)?;
    Ok(Matchup::split(drawn))
}
