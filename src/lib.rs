#![no_std]

extern crate alloc;

pub mod mersenne;
pub mod random;

pub use mersenne::{Mt19937, Mt19937_64, TwisterEngine};
pub use random::{Card, Coin, Error, Flavor, Outcome, RandomGenerator};
