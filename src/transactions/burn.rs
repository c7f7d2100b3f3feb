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

use rust_decimal::Decimal;

use super::{check_address, check_id, TransactionKeeper, TransactionResponse};
use crate::asset::{AssetId, AssetMapper};
use crate::auxiliary::authenticate::{self, Authenticator};
use crate::auxiliary::split::{self, SplitBurner};
use crate::auxiliary::supplement::{self, Supplementer};
use crate::auxiliary::{Capability, Slot};
use crate::config::Parameters;
use crate::ledger::{Address, Context};
use crate::property::{Id, PropertyList};
use crate::{Error, InitError};

/// Request to destroy an existing asset
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BurnMessage {
    /// Ledger address which signed the transaction
    pub from: Address,
    /// Identity releasing its ownership split
    pub from_id: Id,
    pub asset_id: AssetId,
}

impl BurnMessage {
    /// Performs stateless checks of the message
    pub fn validate(&self) -> Result<(), Error> {
        check_address("from", &self.from)?;
        check_id("from_id", &self.from_id)
    }
}

/// Keeper of the asset burn pipeline
pub struct BurnKeeper {
    mapper: AssetMapper,
    parameters: Parameters,
    authenticate: Authenticator,
    supplement: Supplementer,
    burn: SplitBurner,
}

impl BurnKeeper {
    /// Wires the keeper from the capability list. All of `authenticate`,
    /// `supplement` and `burn` must be present exactly once; other
    /// capabilities are ignored.
    pub fn initialize(
        mapper: AssetMapper,
        parameters: Parameters,
        capabilities: &[Capability],
    ) -> Result<Self, InitError> {
        let mut authenticate = Slot::new(authenticate::NAME);
        let mut supplement = Slot::new(supplement::NAME);
        let mut burn = Slot::new(split::BURN_NAME);
        for capability in capabilities {
            match capability {
                Capability::Authenticate(aux) => authenticate.assign(aux.clone())?,
                Capability::Supplement(aux) => supplement.assign(aux.clone())?,
                Capability::Burn(aux) => burn.assign(aux.clone())?,
                unused => trace!("Burn keeper ignores `{}` auxiliary", unused.name()),
            }
        }
        Ok(BurnKeeper {
            mapper,
            parameters,
            authenticate: authenticate.require()?,
            supplement: supplement.require()?,
            burn: burn.require()?,
        })
    }

    fn burn(&self, context: &mut Context<'_>, message: BurnMessage) -> Result<(), Error> {
        if !self.parameters.burn_enabled {
            debug!("Burning is disabled by module parameters");
            return Err(Error::NotAuthorized);
        }
        message.validate()?;
        let BurnMessage {
            from,
            from_id,
            asset_id,
        } = message;

        self.authenticate
            .help(context, authenticate::Request::new(from, from_id.clone()))
            .into_result()?;

        let asset = self
            .mapper
            .new_collection(context)
            .fetch(&asset_id)?
            .get(&asset_id)
            .cloned()
            .ok_or(Error::EntityNotFound)?;

        let burn_properties: PropertyList = asset.burn().cloned().into_iter().collect();
        let metas = self
            .supplement
            .help(context, supplement::Request::new(burn_properties))
            .into_result()?;
        let burn_height = metas.burn_height()?.ok_or(Error::EntityNotFound)?;

        if burn_height > context.block_height() {
            debug!(
                "Asset {} can't be burned before height {}, current height is {}",
                asset_id,
                burn_height,
                context.block_height()
            );
            return Err(Error::NotAuthorized);
        }

        self.burn
            .help(context, split::Request::new(from_id, asset_id, Decimal::ZERO))
            .into_result()?;

        self.mapper.new_collection(context).remove(&asset);
        Ok(())
    }
}

impl TransactionKeeper for BurnKeeper {
    type Message = BurnMessage;

    fn transact(&self, context: &mut Context<'_>, message: BurnMessage) -> TransactionResponse {
        let asset_id = message.asset_id;
        match self.burn(context, message) {
            Ok(()) => {
                debug!("Asset {} burned at height {}", asset_id, context.block_height());
                TransactionResponse::Success
            }
            Err(err) => {
                debug!("Burn of {} rejected: {}", asset_id, err);
                TransactionResponse::Failure(err)
            }
        }
    }
}
