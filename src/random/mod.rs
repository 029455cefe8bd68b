//! Everyday randomness on top of a Mersenne Twister
//!
//! Every operation here consumes whole engine words through `next_word()`.
//! Bounded values are taken as `word mod span`, which slightly favours the low
//! end of any span that does not divide 2^w. Sequences stay reproducible for a
//! given flavor and seed.

use alloc::vec::Vec;
use core::fmt;

use log::info;
use rand::{thread_rng, RngCore};

use crate::mersenne::{Mt19937, Mt19937_64};

pub mod coin;
pub mod deck;

pub use coin::Coin;
pub use deck::{Card, Rank, Suit, RANKS, SUITS};

/// Decimal digits kept by `rand()`
pub const DEFAULT_PRECISION: u32 = 10;

// beyond this many digits rounding an f64 in [0, 1) is a no-op
const MAX_PRECISION: u32 = 17;

// swaps per element performed by `shuffle()`
const SHUFFLE_ROUNDS: usize = 10;

const DIE_FACES: i64 = 6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("lower bound {low} must be less than upper bound {high}")]
    InvalidRange { low: i64, high: i64 },
    #[error("unsupported flavor {0}, expected 1 or 32 (MT19937), 2 or 64 (MT19937-64)")]
    InvalidVariant(u32),
    #[error("cannot choose from an empty sequence")]
    EmptySequence,
}

/// Word width of the underlying twister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Mt32,
    Mt64,
}

impl Flavor {
    /// Select a flavor by number: 1 or 32 for MT19937, 2 or 64 for MT19937-64
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        match bits {
            1 | 32 => Ok(Flavor::Mt32),
            2 | 64 => Ok(Flavor::Mt64),
            _ => Err(Error::InvalidVariant(bits)),
        }
    }

    pub fn word_width(&self) -> u32 {
        match self {
            Flavor::Mt32 => 32,
            Flavor::Mt64 => 64,
        }
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Flavor::Mt64
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Mt32 => f.write_str("MT19937"),
            Flavor::Mt64 => f.write_str("MT19937-64"),
        }
    }
}

/// Result of a helper that may repeat a draw
///
/// `One` for a single draw, `Many` when one count is given, `Nested` when both
/// are given (one row per outer repetition).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    One(T),
    Many(Vec<T>),
    Nested(Vec<Vec<T>>),
}

impl<T> Outcome<T> {
    /// Total number of drawn values
    pub fn len(&self) -> usize {
        match self {
            Outcome::One(_) => 1,
            Outcome::Many(values) => values.len(),
            Outcome::Nested(rows) => rows.iter().map(|row| row.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All drawn values in draw order
    pub fn into_flat(self) -> Vec<T> {
        match self {
            Outcome::One(value) => {
                let mut res = Vec::with_capacity(1);
                res.push(value);
                res
            }
            Outcome::Many(values) => values,
            Outcome::Nested(rows) => rows.into_iter().flatten().collect(),
        }
    }
}

#[derive(Clone)]
enum Engine {
    Mt32(Mt19937),
    Mt64(Mt19937_64),
}

/// Random number generator facade over MT19937 or MT19937-64
///
/// Not suitable for cryptography.
#[derive(Clone)]
pub struct RandomGenerator {
    engine: Engine,
}

impl RandomGenerator {
    /// Create a generator of the given flavor
    ///
    /// Without a seed, one is drawn from the thread-local OS-seeded RNG, so the
    /// sequence is not reproducible. The 32-bit flavor keeps the low 32 bits of
    /// the seed.
    pub fn new(flavor: Flavor, seed: Option<u64>) -> Self {
        let engine = match flavor {
            Flavor::Mt32 => Engine::Mt32(Mt19937::new(seed.unwrap_or_else(entropy_seed) as u32)),
            Flavor::Mt64 => Engine::Mt64(Mt19937_64::new(seed.unwrap_or_else(entropy_seed))),
        };

        info!(
            "using {} with {} seed",
            flavor,
            if seed.is_some() { "explicit" } else { "random" }
        );

        Self { engine: engine }
    }

    /// Create a generator from a flavor number (defaults to MT19937-64)
    ///
    /// errors: returns Error on flavor numbers other than 1, 2, 32 and 64
    pub fn from_bits(bits: Option<u32>, seed: Option<u64>) -> Result<Self, Error> {
        let flavor = match bits {
            Some(bits) => Flavor::from_bits(bits)?,
            None => Flavor::default(),
        };

        Ok(Self::new(flavor, seed))
    }

    /// Create a reproducible MT19937-64 generator
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Flavor::default(), Some(seed))
    }

    pub fn flavor(&self) -> Flavor {
        match self.engine {
            Engine::Mt32(_) => Flavor::Mt32,
            Engine::Mt64(_) => Flavor::Mt64,
        }
    }

    pub fn word_width(&self) -> u32 {
        self.flavor().word_width()
    }

    /// Reseed the underlying engine, restarting its sequence
    pub fn reseed(&mut self, seed: u64) {
        match &mut self.engine {
            Engine::Mt32(rng) => rng.seed(seed as u32),
            Engine::Mt64(rng) => rng.seed(seed),
        }
    }

    /// Next engine output, zero-extended to 64 bits
    pub fn next_word(&mut self) -> u64 {
        match &mut self.engine {
            Engine::Mt32(rng) => rng.extract_number() as u64,
            Engine::Mt64(rng) => rng.extract_number(),
        }
    }

    // word / 2^w, keeping the 53 bits an f64 can hold for 64-bit words
    fn unit_float(&mut self) -> f64 {
        match &mut self.engine {
            Engine::Mt32(rng) => rng.extract_number() as f64 / 4_294_967_296.0,
            Engine::Mt64(rng) => (rng.extract_number() >> 11) as f64 / 9_007_199_254_740_992.0,
        }
    }

    /// Float in [0, 1) rounded to `DEFAULT_PRECISION` decimal digits
    pub fn rand(&mut self) -> f64 {
        self.rand_with_precision(DEFAULT_PRECISION)
    }

    /// Float in [0, 1) rounded to `digits` decimal digits
    ///
    /// Values that would round up to 1.0 are truncated instead.
    pub fn rand_with_precision(&mut self, digits: u32) -> f64 {
        let x = self.unit_float();
        if digits >= MAX_PRECISION {
            return x;
        }

        let scale = libm::pow(10.0, digits as f64);

        let rounded = libm::round(x * scale) / scale;
        if rounded < 1.0 {
            return rounded;
        }

        let truncated = libm::floor(x * scale) / scale;
        if truncated < 1.0 {
            truncated
        } else {
            x
        }
    }

    /// Integer in [a, b]
    ///
    /// errors: returns Error if a >= b
    pub fn randint(&mut self, a: i64, b: i64) -> Result<i64, Error> {
        check_range(a, b)?;
        Ok(self.bounded(a, (b as i128 - a as i128 + 1) as u128))
    }

    /// Integer in [a, b)
    ///
    /// errors: returns Error if a >= b
    pub fn randrange(&mut self, a: i64, b: i64) -> Result<i64, Error> {
        check_range(a, b)?;
        Ok(self.bounded(a, (b as i128 - a as i128) as u128))
    }

    /// `k` integers in [a, b], drawn with replacement
    ///
    /// errors: returns Error if a >= b
    pub fn sample(&mut self, a: i64, b: i64, k: usize) -> Result<Vec<i64>, Error> {
        check_range(a, b)?;

        let mut res = Vec::with_capacity(k);
        for _i in 0..k {
            res.push(self.randint(a, b)?);
        }

        Ok(res)
    }

    /// Pick one element
    ///
    /// errors: returns Error on an empty slice
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, Error> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }

        Ok(&items[self.index(items.len())])
    }

    /// Pick `size` elements with replacement
    ///
    /// errors: returns Error on an empty slice
    pub fn choices<T: Clone>(&mut self, items: &[T], size: usize) -> Result<Vec<T>, Error> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }

        let mut res = Vec::with_capacity(size);
        for _i in 0..size {
            res.push(items[self.index(items.len())].clone());
        }

        Ok(res)
    }

    /// Shuffle in place with 10 * len random pairwise swaps
    ///
    /// This is not a uniform permutation (unlike Fisher-Yates), the swap count
    /// and draw order are kept so shuffles reproduce across versions.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let len = items.len();

        for _i in 0..SHUFFLE_ROUNDS * len {
            let first = self.index(len);
            let second = self.index(len);
            items.swap(first, second);
        }
    }

    /// Flip coins, heads when `rand()` is below one half
    pub fn flip_coin(&mut self, total_flips: Option<usize>, total_coins: Option<usize>) -> Outcome<Coin> {
        self.repeat(total_flips, total_coins, |rng| {
            if rng.rand() < 0.5 {
                Coin::Head
            } else {
                Coin::Tail
            }
        })
    }

    /// Roll six-sided dice
    pub fn roll_dice(&mut self, total_rolls: Option<usize>, total_dice: Option<usize>) -> Outcome<u8> {
        self.repeat(total_rolls, total_dice, |rng| rng.bounded(1, DIE_FACES as u128) as u8)
    }

    /// Draw cards with replacement: a suit first, then a rank
    pub fn draw_cards(&mut self, total_picks: Option<usize>) -> Outcome<Card> {
        self.repeat(total_picks, None, |rng| {
            let suit = SUITS[rng.index(SUITS.len())];
            let rank = RANKS[rng.index(RANKS.len())];
            Card::new(rank, suit)
        })
    }

    // low + word mod span, span in [1, 2^64]
    fn bounded(&mut self, low: i64, span: u128) -> i64 {
        (low as i128 + (self.next_word() as u128 % span) as i128) as i64
    }

    // word mod len, len > 0
    fn index(&mut self, len: usize) -> usize {
        (self.next_word() % len as u64) as usize
    }

    fn repeat<T, F>(&mut self, outer: Option<usize>, inner: Option<usize>, mut draw: F) -> Outcome<T>
    where
        F: FnMut(&mut Self) -> T,
    {
        match (outer, inner) {
            (None, None) => Outcome::One(draw(self)),
            (Some(count), None) | (None, Some(count)) => {
                let mut res = Vec::with_capacity(count);
                for _i in 0..count {
                    res.push(draw(self));
                }
                Outcome::Many(res)
            }
            (Some(rows), Some(cols)) => {
                let mut res = Vec::with_capacity(rows);
                for _i in 0..rows {
                    let mut row = Vec::with_capacity(cols);
                    for _j in 0..cols {
                        row.push(draw(self));
                    }
                    res.push(row);
                }
                Outcome::Nested(res)
            }
        }
    }
}

impl From<Mt19937> for RandomGenerator {
    fn from(rng: Mt19937) -> Self {
        Self {
            engine: Engine::Mt32(rng),
        }
    }
}

impl From<Mt19937_64> for RandomGenerator {
    fn from(rng: Mt19937_64) -> Self {
        Self {
            engine: Engine::Mt64(rng),
        }
    }
}

fn check_range(low: i64, high: i64) -> Result<(), Error> {
    if low < high {
        Ok(())
    } else {
        Err(Error::InvalidRange {
            low: low,
            high: high,
        })
    }
}

// best-effort non-reproducible seed
fn entropy_seed() -> u64 {
    thread_rng().next_u64()
}
