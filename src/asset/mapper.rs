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

//! Keyed collections of strict-encoded entities over the ledger key-value
//! state.
//!
//! A [`Mapper`] owns the keyspace prefix of a single entity type; for each
//! transaction it opens a [`Collection`] scoped to the ledger [`Context`].
//! Entities are loaded into the collection with [`Collection::fetch`] and
//! every mutation is written through to the context state immediately: there
//! is no commit step at this layer.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use strict_encoding::{strict_deserialize, strict_serialize, StrictDecode, StrictEncode};

use crate::ledger::Context;
use crate::Error;

/// Key under which an entity is stored within its mapper keyspace
pub trait StoreKey {
    fn store_key(&self) -> Vec<u8>;
}

/// Entity which can be kept in a [`Collection`]
pub trait Mappable: StrictEncode + StrictDecode {
    type Key: StoreKey;

    fn key(&self) -> Self::Key;
}

/// Factory of [`Collection`]s for a given entity type and keyspace prefix
pub struct Mapper<M>
where
    M: Mappable,
{
    prefix: &'static [u8],
    _mappable: PhantomData<M>,
}

impl<M> Clone for Mapper<M>
where
    M: Mappable,
{
    fn clone(&self) -> Self {
        Mapper::new(self.prefix)
    }
}

impl<M> Mapper<M>
where
    M: Mappable,
{
    pub fn new(prefix: &'static [u8]) -> Self {
        Mapper {
            prefix,
            _mappable: PhantomData,
        }
    }

    #[inline]
    pub fn prefix(&self) -> &'static [u8] {
        self.prefix
    }

    /// Opens an empty collection scoped to the current ledger context
    pub fn new_collection<'ctx, 'store>(
        &self,
        context: &'ctx mut Context<'store>,
    ) -> Collection<'ctx, 'store, M> {
        Collection {
            prefix: self.prefix,
            context,
            mappables: BTreeMap::new(),
        }
    }
}

/// Set of entities loaded from the ledger state for the duration of a single
/// transaction step
pub struct Collection<'ctx, 'store, M>
where
    M: Mappable,
{
    prefix: &'static [u8],
    context: &'ctx mut Context<'store>,
    mappables: BTreeMap<Vec<u8>, M>,
}

impl<'ctx, 'store, M> Collection<'ctx, 'store, M>
where
    M: Mappable,
{
    fn store_key(&self, key: &M::Key) -> Vec<u8> {
        let mut store_key = self.prefix.to_vec();
        store_key.extend(key.store_key());
        store_key
    }

    /// Loads entity stored under `key` (if any) into the collection
    pub fn fetch(mut self, key: &M::Key) -> Result<Self, Error> {
        let store_key = self.store_key(key);
        if let Some(value) = self.context.store().get(&store_key) {
            let mappable: M = strict_deserialize(&value)?;
            self.mappables.insert(store_key, mappable);
        }
        Ok(self)
    }

    /// Loads all entities of the mapper keyspace into the collection
    pub fn fetch_all(mut self) -> Result<Self, Error> {
        for (store_key, value) in self.context.store().scan(self.prefix) {
            let mappable: M = strict_deserialize(&value)?;
            self.mappables.insert(store_key, mappable);
        }
        Ok(self)
    }

    /// Returns previously fetched entity
    pub fn get(&self, key: &M::Key) -> Option<&M> {
        self.mappables.get(&self.store_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.mappables.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mappables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappables.is_empty()
    }

    /// Writes the entity into the ledger state, replacing the one stored
    /// under the same key
    pub fn add(&mut self, mappable: M) -> Result<(), Error> {
        let store_key = self.store_key(&mappable.key());
        let value = strict_serialize(&mappable)?;
        self.context.store_mut().set(store_key.clone(), value);
        self.mappables.insert(store_key, mappable);
        Ok(())
    }

    /// Deletes the entity from the ledger state
    pub fn remove(&mut self, mappable: &M) {
        let store_key = self.store_key(&mappable.key());
        self.context.store_mut().delete(&store_key);
        self.mappables.remove(&store_key);
    }
}
