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

use std::fmt::{self, Debug, Display, Formatter};

use super::{Height, KvStore};

/// Ledger account address of the transaction signer
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Address(String);

impl Address {
    #[inline]
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Address {
    #[inline]
    fn from(address: &str) -> Self {
        Address::new(address)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Execution scope of a single transaction: current block height plus access
/// to the ledger key-value state.
///
/// The context is borrowed mutably by a keeper for the whole duration of the
/// transaction; the enclosing engine applies transactions one at a time.
pub struct Context<'store> {
    block_height: Height,
    store: &'store mut dyn KvStore,
}

impl<'store> Context<'store> {
    pub fn new(block_height: Height, store: &'store mut dyn KvStore) -> Self {
        Context {
            block_height,
            store,
        }
    }

    #[inline]
    pub fn block_height(&self) -> Height {
        self.block_height
    }

    #[inline]
    pub fn store(&self) -> &(dyn KvStore + 'store) {
        &*self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut (dyn KvStore + 'store) {
        &mut *self.store
    }
}

impl Debug for Context<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("block_height", &self.block_height)
            .finish()
    }
}
