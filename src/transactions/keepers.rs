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

use super::{BurnKeeper, MintKeeper};
use crate::asset::{AssetMapper, AssetQuery};
use crate::auxiliary::Capability;
use crate::config::Parameters;
use crate::InitError;

/// Asset module keepers sharing the same asset store
pub struct Keepers {
    pub mint: MintKeeper,
    pub burn: BurnKeeper,
    pub query: AssetQuery,
}

impl Keepers {
    /// Wires all keepers from a single capability list. Any error means broken
    /// node deployment and must stop the node startup.
    pub fn initialize(
        parameters: Parameters,
        capabilities: &[Capability],
    ) -> Result<Self, InitError> {
        let mapper = AssetMapper::default();
        let keepers = Keepers {
            mint: MintKeeper::initialize(mapper.clone(), parameters, capabilities)?,
            burn: BurnKeeper::initialize(mapper.clone(), parameters, capabilities)?,
            query: AssetQuery::new(mapper),
        };
        info!(
            "Asset keepers initialized with {} auxiliaries (mint {}, burn {})",
            capabilities.len(),
            if parameters.mint_enabled { "enabled" } else { "disabled" },
            if parameters.burn_enabled { "enabled" } else { "disabled" },
        );
        Ok(keepers)
    }
}
