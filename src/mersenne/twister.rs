use alloc::{vec, vec::Vec};

use log::{debug, trace};
use rand::RngCore;

use super::word::Word;
use super::Error;

/// Seed used by the reference implementation when none is given
pub const DEFAULT_SEED: u64 = 5489;

/// Mersenne Twister generator over words of type `W`
///
/// The constant table is `W::PARAMS`, so `TwisterEngine<u32>` is MT19937 and
/// `TwisterEngine<u64>` is MT19937-64. All arithmetic is done in `W`, which
/// keeps every state word and every output within w bits.
///
/// Extraction is O(1), except every n-th call which first regenerates the whole
/// state with `twist()` in O(n).
///
/// Not suitable for cryptography, and not synchronized: share one engine
/// between threads only behind a lock.
#[derive(Clone)]
pub struct TwisterEngine<W: Word> {
    pub(crate) state: Vec<W>,
    pub(crate) index: usize,
}

impl<W: Word> TwisterEngine<W> {
    /// Create an initialized PRNG
    pub fn new(seed: W) -> Self {
        let n = W::PARAMS.n;
        let mut rng = Self {
            state: vec![W::ZERO; n],
            index: n,
        };
        rng.seed(seed);
        rng
    }

    /// Restore a PRNG from a raw state array and index
    ///
    /// errors: the state must hold exactly n words, and the index must be in [0, n]
    pub fn from_state(state: &[W], index: usize) -> Result<Self, Error> {
        let n = W::PARAMS.n;
        if state.len() != n {
            return Err(Error::InvalidStateLength {
                expected: n,
                actual: state.len(),
            });
        }
        if index > n {
            return Err(Error::InvalidIndex);
        }

        Ok(Self {
            state: state.to_vec(),
            index: index,
        })
    }

    /// Reinitialize the generator from a given seed
    ///
    /// The next extraction twists the fresh state.
    pub fn seed(&mut self, seed: W) {
        self.state[0] = seed;

        for i in 1..W::PARAMS.n {
            Self::k_distribute(&mut self.state, i);
        }

        self.index = W::PARAMS.n;

        debug!("seeded {}-bit twister with {:?}", W::BITS, seed);
    }

    /// Perform k-distribution step to generate initial state from seed value
    ///
    /// xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i, modulo 2^w
    ///
    /// The product has to wrap at w bits on every step, otherwise later words
    /// diverge from the reference sequence.
    pub(crate) fn k_distribute(state: &mut [W], i: usize) {
        let prev = state[i - 1];
        state[i] = W::PARAMS
            .f
            .wrapping_mul(prev ^ (prev >> (W::BITS - 2)))
            .wrapping_add(W::from_usize(i));
    }

    /// Regenerate the whole state in place
    ///
    /// Words are updated in increasing index order: the update of MT[i] reads
    /// MT[i+1] and MT[i+m] (mod n), which may already hold twisted values.
    pub fn twist(&mut self) {
        let params = W::PARAMS;
        let n = params.n;
        let upper = params.upper_mask();
        let lower = params.lower_mask();

        for i in 0..n {
            let x = (self.state[i] & upper) | (self.state[(i + 1) % n] & lower);

            let mut x_a = x >> 1;
            if x.is_odd() {
                x_a ^= params.a;
            }

            self.state[i] = self.state[(i + params.m) % n] ^ x_a;
        }

        self.index = 0;

        trace!("twisted {} words of {}-bit state", n, W::BITS);
    }

    /// Extract a tempered value based on MT[index]
    /// calling twist() every n numbers
    pub fn extract_number(&mut self) -> W {
        let params = W::PARAMS;

        if self.index >= params.n {
            self.twist();
        }

        let mut y = self.state[self.index];
        y ^= (y >> params.u) & params.d;
        y ^= (y << params.s) & params.b;
        y ^= (y << params.t) & params.c;
        y ^= y >> params.l;

        self.index += 1;

        y
    }

    /// Raw state words
    pub fn state(&self) -> &[W] {
        &self.state
    }

    /// Index of the next state word to temper, n when a twist is due
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fill a buffer with little-endian bytes of successive outputs
    ///
    /// Unused bytes of the last output are discarded.
    pub fn fill_bytes_le(&mut self, dest: &mut [u8]) {
        let word_len = (W::BITS / 8) as usize;

        for block in dest.chunks_mut(word_len) {
            let keystream = self.extract_number().to_u64().to_le_bytes();
            block.copy_from_slice(&keystream[..block.len()]);
        }
    }
}

impl<W: Word> Default for TwisterEngine<W> {
    fn default() -> Self {
        Self::new(W::from_u64(DEFAULT_SEED))
    }
}

impl RngCore for TwisterEngine<u32> {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    fn next_u64(&mut self) -> u64 {
        let low = self.extract_number() as u64;
        let high = self.extract_number() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_bytes_le(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes_le(dest);
        Ok(())
    }
}

impl RngCore for TwisterEngine<u64> {
    fn next_u32(&mut self) -> u32 {
        self.extract_number() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.extract_number()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_bytes_le(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes_le(dest);
        Ok(())
    }
}
