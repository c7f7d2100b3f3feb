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

//! Maintainer verification: checks that the identity is allowed to operate on
//! assets of the classification.

use std::rc::Rc;

use super::Auxiliary;
use crate::property::Id;

pub const NAME: &str = "verify";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub classification_id: Id,
    pub identity_id: Id,
}

impl Request {
    pub fn new(classification_id: Id, identity_id: Id) -> Self {
        Request {
            classification_id,
            identity_id,
        }
    }
}

pub type Verifier = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
