use std::hash::Hash;

use hashbrown::HashMap;

// install a logger once, later calls are no-ops
#[allow(dead_code)]
pub fn init_logger() {
    let _ = lovely_env_logger::try_init_default();
}

// count occurrences of each value
#[allow(dead_code)]
pub fn counts<T: Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut res = HashMap::new();

    for item in items.iter() {
        *res.entry(item.clone()).or_insert(0) += 1;
    }

    res
}
