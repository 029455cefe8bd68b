//! Constants of Mersenne Twister MT19937-64 based on libc++ and Wikipedia pseudo-code:
//!
//! https://github.com/llvm/llvm-project/blob/master/libcxx/include/random#L2075
//! https://en.wikipedia.org/wiki/Mersenne_Twister

use super::twister::TwisterEngine;
use super::word::Params;

pub const W: u32 = 64;
pub const N: usize = 312;
pub const M: usize = 156;
pub const R: u32 = 31;

pub const A: u64 = 0xb502_6f5a_a966_19e9;

pub const U: u32 = 29;
pub const D: u64 = 0x5555_5555_5555_5555;

pub const S: u32 = 17;
pub const B: u64 = 0x71d6_7fff_eda6_0000;

pub const T: u32 = 37;
pub const C: u64 = 0xfff7_eee0_0000_0000;

pub const L: u32 = 43;

pub const F: u64 = 6_364_136_223_846_793_005;

pub const LOWER_MASK: u64 = (1 << R) - 1;
pub const UPPER_MASK: u64 = !LOWER_MASK;

pub const PARAMS: Params<u64> = Params {
    n: N,
    m: M,
    r: R,
    a: A,
    u: U,
    d: D,
    s: S,
    b: B,
    t: T,
    c: C,
    l: L,
    f: F,
};

/// MT19937-64 PRNG (64-bit)
pub type Mt19937_64 = TwisterEngine<u64>;
