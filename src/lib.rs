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

//! Deterministic mint & burn transaction pipeline for uniquely identified
//! assets living inside a replicated ledger state machine.
//!
//! Each transaction keeper runs a fixed chain of auxiliary capabilities
//! (authentication, authorization, conformance, scrubbing, balance
//! bookkeeping) against a ledger [`Context`]; the first failing step aborts
//! the transaction before the asset store is touched.

#![recursion_limit = "256"]
// Coding conventions
#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code,
    //missing_docs
)]

#[macro_use]
extern crate amplify_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate serde_crate as serde;

#[macro_use]
mod macros;
#[cfg(test)]
#[macro_use]
pub mod test_helpers;

pub mod asset;
pub mod auxiliary;
pub mod config;
mod error;
pub mod ledger;
pub mod property;
pub mod transactions;

pub mod prelude {
    use super::*;
    pub use super::{asset, auxiliary, ledger, property, transactions};
    pub use asset::{Asset, AssetId, AssetMapper, AssetQuery, Collection, Mappable, Mapper};
    pub use auxiliary::{Auxiliary, AuxiliaryResponse, Capability};
    pub use config::{Config, LogLevel, Parameters};
    pub use error::{Error, InitError};
    pub use ledger::{Address, Context, Height, KvStore, MemoryStore};
    pub use property::{
        Data, DataHash, Id, MetaProperties, MetaProperty, Property, PropertyList,
    };
    pub use transactions::{
        BurnKeeper, BurnMessage, Keepers, MintKeeper, MintMessage, TransactionKeeper,
        TransactionResponse,
    };
}

pub use prelude::*;
