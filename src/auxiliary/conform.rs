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

//! Classification conformance: checks the full property sets of a new asset
//! against its classification.

use std::rc::Rc;

use super::Auxiliary;
use crate::property::{Id, PropertyList};

pub const NAME: &str = "conform";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub classification_id: Id,
    pub immutable_properties: PropertyList,
    pub mutable_properties: PropertyList,
}

impl Request {
    pub fn new(
        classification_id: Id,
        immutable_properties: PropertyList,
        mutable_properties: PropertyList,
    ) -> Self {
        Request {
            classification_id,
            immutable_properties,
            mutable_properties,
        }
    }
}

pub type Conformer = Rc<dyn Auxiliary<Request = Request, Payload = ()>>;
