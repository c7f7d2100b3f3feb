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

//! Meta-property scrubbing: turns meta-properties into confidential
//! properties, keeping the revealed data in the metas subsystem.

use std::rc::Rc;

use super::Auxiliary;
use crate::property::{MetaProperties, PropertyList};

pub const NAME: &str = "scrub";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request {
    pub meta_properties: MetaProperties,
}

impl Request {
    pub fn new(meta_properties: MetaProperties) -> Self {
        Request { meta_properties }
    }
}

/// Scrubber returns the concealed properties, one per meta-property
pub type Scrubber = Rc<dyn Auxiliary<Request = Request, Payload = PropertyList>>;
