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

use std::fmt::{self, Display, Formatter};
use std::io;

use strict_encoding::{StrictDecode, StrictEncode};

use super::{AssetId, Mappable, StoreKey};
use crate::property::{Id, Property, PropertyList, BURN_PROPERTY, LOCK_PROPERTY};

/// Uniquely identified asset kept in the ledger asset store.
///
/// Immutable properties are fixed at mint time and committed to by the asset
/// id; mutable properties may be changed later by the asset maintainers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Asset {
    id: AssetId,
    immutable_properties: PropertyList,
    mutable_properties: PropertyList,
}

impl Asset {
    pub fn new(
        id: AssetId,
        immutable_properties: PropertyList,
        mutable_properties: PropertyList,
    ) -> Self {
        Asset {
            id,
            immutable_properties,
            mutable_properties,
        }
    }

    #[inline]
    pub fn id(&self) -> AssetId {
        self.id
    }

    #[inline]
    pub fn immutable_properties(&self) -> &PropertyList {
        &self.immutable_properties
    }

    #[inline]
    pub fn mutable_properties(&self) -> &PropertyList {
        &self.mutable_properties
    }

    /// Looks up property by its key, immutable properties taking precedence
    pub fn property(&self, id: &Id) -> Option<&Property> {
        self.immutable_properties
            .get(id)
            .or_else(|| self.mutable_properties.get(id))
    }

    /// Reference to the (normally scrubbed) burn height property
    #[inline]
    pub fn burn(&self) -> Option<&Property> {
        self.property(&BURN_PROPERTY)
    }

    /// Reference to the (normally scrubbed) ownership lock property
    #[inline]
    pub fn lock(&self) -> Option<&Property> {
        self.property(&LOCK_PROPERTY)
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.id)?;
        let mut first = true;
        for property in self.immutable_properties.iter().chain(&self.mutable_properties) {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            Display::fmt(property, f)?;
        }
        f.write_str("]")
    }
}

impl StoreKey for AssetId {
    fn store_key(&self) -> Vec<u8> {
        self.to_byte_array().to_vec()
    }
}

impl Mappable for Asset {
    type Key = AssetId;

    #[inline]
    fn key(&self) -> AssetId {
        self.id
    }
}

impl StrictEncode for Asset {
    fn strict_encode<E: io::Write>(&self, mut e: E) -> Result<usize, strict_encoding::Error> {
        Ok(self.id.strict_encode(&mut e)?
            + self.immutable_properties.strict_encode(&mut e)?
            + self.mutable_properties.strict_encode(&mut e)?)
    }
}

impl StrictDecode for Asset {
    fn strict_decode<D: io::Read>(mut d: D) -> Result<Self, strict_encoding::Error> {
        Ok(Asset {
            id: AssetId::strict_decode(&mut d)?,
            immutable_properties: PropertyList::strict_decode(&mut d)?,
            mutable_properties: PropertyList::strict_decode(&mut d)?,
        })
    }
}
