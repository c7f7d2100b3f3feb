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

//! Property model: immutable key/data value objects describing assets, and
//! meta-properties carrying pipeline instructions.

pub mod data;
mod id;
mod list;
#[allow(clippy::module_inception)]
mod property;

pub use data::{Data, DataHash};
pub use id::Id;
pub use list::{MetaProperties, PropertyList};
pub use property::{MetaProperty, Property};

/// Name of the reserved meta-property holding ownership split locked to the
/// recipient at mint time
pub const LOCK_PROPERTY_NAME: &str = "lock";
/// Name of the reserved meta-property holding the earliest block height at
/// which the asset may be burned
pub const BURN_PROPERTY_NAME: &str = "burn";

lazy_static! {
    /// Id of the reserved lock meta-property
    pub static ref LOCK_PROPERTY: Id = Id::new(LOCK_PROPERTY_NAME);
    /// Id of the reserved burn meta-property
    pub static ref BURN_PROPERTY: Id = Id::new(BURN_PROPERTY_NAME);
}
