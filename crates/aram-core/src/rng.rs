//! String-seeded pseudo-random generator.
//!
//! This is the ARC4 generator popularised by the `seedrandom` JavaScript
//! library, reproduced bit for bit: a seed shared from the web version of the
//! randomizer must keep producing the same teams here. Changing anything in
//! this module changes the team every existing seed maps to.
//!
//! Key schedule: the seed's UTF-16 code units are smeared into a key of at
//! most 256 bytes (`key[j & 255] = 255 & ((smear ^= key[j & 255] * 19) + unit)`),
//! an empty key becomes `[0]`, and the first 256 keystream bytes are dropped.

const WIDTH: f64 = 256.0;
const CHUNKS: usize = 6;
/// 256^6: denominator of the first six-byte chunk.
const START_DENOM: f64 = 281_474_976_710_656.0;
/// 2^52
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;
/// 2^53
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

/// RC4 keystream state.
#[derive(Clone)]
struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; 256],
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; 256];
        for (slot, value) in s.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, j as usize);
        }

        let mut arc4 = Self { i: 0, j: 0, s };
        for _ in 0..256 {
            arc4.next_byte();
        }
        arc4
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[self.s[self.i as usize].wrapping_add(t) as usize]
    }

    /// Big-endian concatenation of `count` keystream bytes (`count <= 6`).
    fn next_chunk(&mut self, count: usize) -> u64 {
        (0..count).fold(0u64, |acc, _| (acc << 8) | u64::from(self.next_byte()))
    }
}

/// Derives the ARC4 key from a seed string.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j & 0xff;
        let previous = key.get(slot).copied().unwrap_or(0);
        smear ^= u32::from(previous) * 19;
        let mixed = (smear.wrapping_add(u32::from(unit)) & 0xff) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }

    key
}

/// Deterministic generator of `f64` values in `[0, 1)` keyed by a string.
///
/// ```
/// use aram_core::SeededRng;
///
/// let mut a = SeededRng::new("hello.");
/// let mut b = SeededRng::new("hello.");
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Clone)]
pub struct SeededRng {
    arc4: Arc4,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
        }
    }

    /// Next value in `[0, 1)` with 52 bits of randomness.
    pub fn next_f64(&mut self) -> f64 {
        let mut n = self.arc4.next_chunk(CHUNKS) as f64;
        let mut d = START_DENOM;
        let mut x: u64 = 0;

        while n < SIGNIFICANCE {
            n = (n + x as f64) * WIDTH;
            d *= WIDTH;
            x = self.arc4.next_chunk(1);
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + x as f64) / d
    }

    /// Uniform index in `0..bound` drawn as `floor(next_f64() * bound)`.
    ///
    /// `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        let scaled = (self.next_f64() * bound as f64).floor() as usize;
        scaled.min(bound - 1)
    }
}

impl std::fmt::Debug for SeededRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRng").finish_non_exhaustive()
    }
}
