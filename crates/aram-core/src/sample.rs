//! Seeded partial Fisher–Yates sampling.
//!
//! Output slots are filled back to front. Each draw picks a live position in
//! `0..remaining`, then retires the top live position by moving whatever it
//! holds into the drawn slot. Only moved positions are recorded, so a draw of
//! `n` items from a source of any length touches `O(n)` memory.

use crate::error::{AramError, AramResult};
use crate::rng::SeededRng;

const EMPTY: usize = usize::MAX;

/// Fixed-capacity remap table keyed by source position.
///
/// Open addressing over two flat integer arrays sized from the number of
/// draws. At most one entry is inserted per draw, so the load factor never
/// exceeds one half.
struct SlotTable {
    keys: Vec<usize>,
    values: Vec<usize>,
    mask: usize,
}

impl SlotTable {
    fn with_draws(draws: usize) -> Self {
        let capacity = (draws * 2).next_power_of_two().max(2);
        Self {
            keys: vec![EMPTY; capacity],
            values: vec![0; capacity],
            mask: capacity - 1,
        }
    }

    fn probe(&self, slot: usize) -> usize {
        // Fibonacci hashing spreads neighbouring positions across the table.
        let mut at = slot.wrapping_mul(0x9E37_79B9_7F4A_7C15_u64 as usize) & self.mask;
        while self.keys[at] != EMPTY && self.keys[at] != slot {
            at = (at + 1) & self.mask;
        }
        at
    }

    /// Position currently held by `slot`; unmoved slots hold themselves.
    fn resolve(&self, slot: usize) -> usize {
        let at = self.probe(slot);
        if self.keys[at] == slot {
            self.values[at]
        } else {
            slot
        }
    }

    fn set(&mut self, slot: usize, position: usize) {
        let at = self.probe(slot);
        self.keys[at] = slot;
        self.values[at] = position;
    }
}

/// Draws `count` distinct positions out of `0..len`, ordered by the seed.
pub fn sample_indices(len: usize, count: usize, seed: &str) -> AramResult<Vec<usize>> {
    if count > len {
        return Err(AramError::invalid_argument(format!(
            "cannot take {count} elements from a collection of {len}"
        )));
    }

    let mut picked = vec![0usize; count];
    if count == 0 {
        return Ok(picked);
    }

    let mut rng = SeededRng::new(seed);
    let mut taken = SlotTable::with_draws(count);
    let mut remaining = len;

    for index in (0..count).rev() {
        let drawn = rng.next_index(remaining);
        picked[index] = taken.resolve(drawn);

        remaining -= 1;
        let top = taken.resolve(remaining);
        taken.set(drawn, top);
    }

    Ok(picked)
}

/// Draws `count` elements of `source` without replacement, ordered by `seed`.
///
/// The same `(source, count, seed)` always yields the same result, and the
/// result is the one the web randomizer shows for that seed.
///
/// ```
/// let picks = aram_core::sample(&["a", "b", "c", "d"], 2, "seed").unwrap();
/// assert_eq!(picks.len(), 2);
/// assert_ne!(picks[0], picks[1]);
/// ```
pub fn sample<T: Clone>(source: &[T], count: usize, seed: &str) -> AramResult<Vec<T>> {
    let picked = sample_indices(source.len(), count, seed)?;
    Ok(picked.into_iter().map(|i| source[i].clone()).collect())
}
