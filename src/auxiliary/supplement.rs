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

//! Meta-property supplement: reveals confidential properties using the data
//! kept by the metas subsystem.

use std::rc::Rc;

use super::Auxiliary;
use crate::property::{MetaProperties, PropertyList};

pub const NAME: &str = "supplement";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub properties: PropertyList,
}

impl Request {
    pub fn new(properties: PropertyList) -> Self {
        Request { properties }
    }
}

/// Supplementer returns revealed meta-properties for those of the requested
/// properties it knows data for
pub type Supplementer = Rc<dyn Auxiliary<Request = Request, Payload = MetaProperties>>;
