//! Constants of Mersenne Twister MT19937 based on libc++ and Wikipedia pseudo-code:
//!
//! https://github.com/llvm/llvm-project/blob/master/libcxx/include/random#L2075
//! https://en.wikipedia.org/wiki/Mersenne_Twister

use super::twister::TwisterEngine;
use super::word::Params;

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;
pub const R: u32 = 31;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1812433253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

pub const PARAMS: Params<u32> = Params {
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

/// MT19937 PRNG (32-bit)
pub type Mt19937 = TwisterEngine<u32>;
