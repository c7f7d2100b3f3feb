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

//! Interfaces of the enclosing ledger: block height, account addresses and
//! the execution context giving access to the key-value state.

mod context;
mod height;
mod store;

pub use context::{Address, Context};
pub use height::Height;
pub use store::{KvStore, MemoryStore};
