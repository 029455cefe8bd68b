pub mod mt19937;
pub mod mt19937_64;
pub mod twister;
pub mod word;

pub use mt19937::Mt19937;
pub use mt19937_64::Mt19937_64;
pub use twister::{TwisterEngine, DEFAULT_SEED};
pub use word::{Params, Word};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("state index out of range")]
    InvalidIndex,
    #[error("state holds {actual} words, expected {expected}")]
    InvalidStateLength { expected: usize, actual: usize },
}
