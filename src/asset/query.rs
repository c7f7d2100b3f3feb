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

use super::{Asset, AssetId, AssetMapper};
use crate::ledger::Context;
use crate::Error;

/// Read-only access to the asset store
#[derive(Clone)]
pub struct AssetQuery {
    mapper: AssetMapper,
}

impl AssetQuery {
    pub fn new(mapper: AssetMapper) -> Self {
        AssetQuery { mapper }
    }

    /// Returns asset with the given id, or [`Error::EntityNotFound`]
    pub fn enquire(&self, context: &mut Context<'_>, asset_id: AssetId) -> Result<Asset, Error> {
        self.mapper
            .new_collection(context)
            .fetch(&asset_id)?
            .get(&asset_id)
            .cloned()
            .ok_or(Error::EntityNotFound)
    }

    /// Lists all assets in the store ordered by their id
    pub fn list(&self, context: &mut Context<'_>) -> Result<Vec<Asset>, Error> {
        Ok(self
            .mapper
            .new_collection(context)
            .fetch_all()?
            .iter()
            .cloned()
            .collect())
    }
}
