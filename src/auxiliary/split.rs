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

//! Ownership split bookkeeping. The ledger balance subsystem is the source of
//! truth for splits: it allocates them when an asset is minted and releases
//! them when it is burned.

use std::rc::Rc;

use rust_decimal::Decimal;

use super::Auxiliary;
use crate::asset::AssetId;
use crate::property::Id;

pub const MINT_NAME: &str = "mint";
pub const BURN_NAME: &str = "burn";

/// Split allocated to (or released from) an owner identity
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub owner_id: Id,
    pub asset_id: AssetId,
    pub value: Decimal,
}

impl Request {
    pub fn new(owner_id: Id, asset_id: AssetId, value: Decimal) -> Self {
        Request {
            owner_id,
            asset_id,
            value,
        }
    }
}

pub type SplitMinter = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
pub type SplitBurner = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
