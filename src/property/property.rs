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

use super::{Data, Id};

/// Asset property: key plus typed data value. The data may be confidential
/// for properties produced by scrubbing meta-properties.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Property {
    id: Id,
    data: Data,
}

impl Property {
    pub fn new(id: impl Into<Id>, data: impl Into<Data>) -> Self {
        Property {
            id: id.into(),
            data: data.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &Id {
        &self.id
    }

    #[inline]
    pub fn data(&self) -> &Data {
        &self.data
    }

    #[inline]
    pub fn is_confidential(&self) -> bool {
        self.data.is_confidential()
    }

    /// Returns the same property with its data replaced by the commitment
    pub fn conceal(&self) -> Property {
        Property {
            id: self.id.clone(),
            data: Data::Confidential(self.data.conceal()),
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.data)
    }
}

impl StrictEncode for Property {
    fn strict_encode<E: io::Write>(&self, mut e: E) -> Result<usize, strict_encoding::Error> {
        Ok(self.id.strict_encode(&mut e)? + self.data.strict_encode(&mut e)?)
    }
}

impl StrictDecode for Property {
    fn strict_decode<D: io::Read>(mut d: D) -> Result<Self, strict_encoding::Error> {
        Ok(Property {
            id: Id::strict_decode(&mut d)?,
            data: Data::strict_decode(&mut d)?,
        })
    }
}

/// Property from the reserved meta namespace carrying pipeline instructions
/// (like ownership lock or burn height). Meta-property data are always
/// revealed; they get concealed by the scrubbing capability before becoming
/// a part of the asset.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MetaProperty {
    id: Id,
    data: Data,
}

impl MetaProperty {
    pub fn new(id: impl Into<Id>, data: impl Into<Data>) -> Self {
        MetaProperty {
            id: id.into(),
            data: data.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &Id {
        &self.id
    }

    #[inline]
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Converts into a property keeping only the commitment to the data
    pub fn scrub(&self) -> Property {
        Property::new(self.id.clone(), Data::Confidential(self.data.conceal()))
    }
}

impl Display for MetaProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.data)
    }
}
