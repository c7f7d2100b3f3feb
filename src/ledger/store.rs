// Ledger Assets Library: asset lifecycle transaction pipeline
// Written in 2020 by
//     Dr. Maxim Orlovsky <orlovsky@pandoracore.com>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the MIT License
// along with this software.
// If not, see <https://opensource.org/licenses/MIT>.

//! API for the ledger key-value state.
//!
//! The persistent storage engine is provided by the enclosing node; it is
//! abstracted here as an ordered byte-keyed map. Durability and rollback of
//! the whole block are the responsibility of the engine, so all operations
//! are infallible from the point of view of this library.

use std::collections::BTreeMap;

/// Ordered key-value state of the ledger as seen by a single block execution
pub trait KvStore {
    /// Returns value stored under the exact `key`, if any
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Removes value under the `key`; does nothing if the key is absent
    fn delete(&mut self, key: &[u8]);

    /// Returns all key-value pairs which keys start with `prefix`, ordered by
    /// the key
    fn scan(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}

/// In-memory [`KvStore`] backed by a B-tree. Equality comparison allows
/// taking state snapshots.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MemoryStore(BTreeMap<Vec<u8>, Vec<u8>>);

impl MemoryStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        trace!("storing {} bytes under key {:?}", value.len(), key);
        self.0.insert(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        trace!("removing key {:?}", key);
        self.0.remove(key);
    }

    fn scan(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.0
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
