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

//! Assets, their identity derivation and the keyed asset store.

#[allow(clippy::module_inception)]
mod asset;
mod id;
pub mod mapper;
mod query;

pub use asset::Asset;
pub use id::{AssetId, AssetIdTag};
pub use mapper::{Collection, Mappable, Mapper, StoreKey};
pub use query::AssetQuery;

/// Keyspace prefix of the asset store within the ledger state
pub const ASSET_STORE_PREFIX: &[u8] = b"assets/";

/// Mapper of the ledger asset store
pub type AssetMapper = Mapper<Asset>;

impl Default for Mapper<Asset> {
    fn default() -> Self {
        Mapper::new(ASSET_STORE_PREFIX)
    }
}
