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

//! Maintenance of mutable asset properties by classification maintainers.
//! Not used by the mint and burn keepers; wired for the maintainers
//! subsystem which shares the capability list.

use std::rc::Rc;

use super::Auxiliary;
use crate::property::{Id, PropertyList};

pub const NAME: &str = "maintain";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub classification_id: Id,
    pub identity_id: Id,
    pub mutable_properties: PropertyList,
}

impl Request {
    pub fn new(classification_id: Id, identity_id: Id, mutable_properties: PropertyList) -> Self {
        Request {
            classification_id,
            identity_id,
            mutable_properties,
        }
    }
}

pub type Maintainer = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
