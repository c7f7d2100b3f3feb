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

//! Signer authentication: checks that the ledger address which signed the
//! transaction is bound to the claimed identity.

use std::rc::Rc;

use super::Auxiliary;
use crate::ledger::Address;
use crate::property::Id;

pub const NAME: &str = "authenticate";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub address: Address,
    pub identity_id: Id,
}

impl Request {
    pub fn new(address: Address, identity_id: Id) -> Self {
        Request {
            address,
            identity_id,
        }
    }
}

pub type Authenticator = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
