use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, BitXorAssign, Not, Shl, Shr};

/// Constant table of one Mersenne Twister preset
///
/// Names follow the usual MT notation:
///
/// https://en.wikipedia.org/wiki/Mersenne_Twister
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params<W> {
    /// Degree of recurrence (number of state words)
    pub n: usize,
    /// Middle word offset
    pub m: usize,
    /// Separation point of the upper and lower masks
    pub r: u32,
    /// Coefficient of the rational normal form twist matrix
    pub a: W,
    pub u: u32,
    pub d: W,
    pub s: u32,
    pub b: W,
    pub t: u32,
    pub c: W,
    pub l: u32,
    /// Multiplier of the seeding recurrence
    pub f: W,
}

impl<W: Word> Params<W> {
    /// Mask selecting the lower r bits of a word
    pub fn lower_mask(&self) -> W {
        (W::ONE << self.r).wrapping_sub(W::ONE)
    }

    /// Mask selecting the upper w - r bits of a word
    pub fn upper_mask(&self) -> W {
        !self.lower_mask()
    }
}

/// Unsigned machine word a twister operates on
///
/// Every word width carries exactly one preset, so a state of `u32` words can
/// only ever be driven by the 32-bit constant table (and likewise for `u64`).
pub trait Word:
    Copy
    + Debug
    + Default
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Word width w in bits
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    /// Preset bound to this word width
    const PARAMS: Params<Self>;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Truncate an index into a word (modulo 2^w)
    fn from_usize(i: usize) -> Self;

    /// Keep the lowest w bits of a u64
    fn from_u64(v: u64) -> Self;

    /// Zero-extend into a u64
    fn to_u64(self) -> u64;

    fn is_odd(self) -> bool {
        self & Self::ONE == Self::ONE
    }
}

impl Word for u32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const PARAMS: Params<Self> = super::mt19937::PARAMS;

    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u32::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u32::wrapping_mul(self, rhs)
    }

    fn from_usize(i: usize) -> Self {
        i as u32
    }

    fn from_u64(v: u64) -> Self {
        (v & 0xffff_ffff) as u32
    }

    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const PARAMS: Params<Self> = super::mt19937_64::PARAMS;

    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u64::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    fn from_usize(i: usize) -> Self {
        i as u64
    }

    fn from_u64(v: u64) -> Self {
        v
    }

    fn to_u64(self) -> u64 {
        self
    }
}
