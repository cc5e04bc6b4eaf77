pub mod classify;
pub mod env;
pub mod erase;
pub mod markers;
pub mod result;
mod typing;

pub use erase::{erase, erase_with_interrupt};
pub use markers::Markers;
pub use result::{ErasureError, ErasureResult};

/// A hash map with a faster hash function
pub type HashMap<K, V> = fxhash::FxHashMap<K, V>;
/// A hash set with a faster hash function
pub type HashSet<V> = fxhash::FxHashSet<V>;
