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

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use strict_encoding::{StrictDecode, StrictEncode};

use super::Id;
use crate::ledger::Height;

tagged_hash!(
    DataHash,
    DataHashTag,
    "urn:ledger-assets:data#2020-11",
    doc = "Commitment to a property data value. Replaces the revealed value in \
           scrubbed (confidential) properties"
);

/// Typed property data value
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Data {
    String(String),
    Dec(Decimal),
    Height(Height),
    Id(Id),
    Boolean(bool),

    /// Data known only by its commitment; the revealed value is kept by the
    /// metas subsystem
    Confidential(DataHash),
}

impl Data {
    /// Returns commitment to the data value. Confidential data are already
    /// concealed and return their own hash, so concealing is idempotent.
    /// Panics on strings longer than `u16::MAX` bytes.
    pub fn conceal(&self) -> DataHash {
        match self {
            Data::Confidential(hash) => *hash,
            revealed => DataHash::commit(revealed),
        }
    }

    #[inline]
    pub fn is_confidential(&self) -> bool {
        matches!(self, Data::Confidential(_))
    }

    #[inline]
    pub fn as_dec(&self) -> Option<Decimal> {
        match self {
            Data::Dec(dec) => Some(*dec),
            _ => None,
        }
    }

    #[inline]
    pub fn as_height(&self) -> Option<Height> {
        match self {
            Data::Height(height) => Some(*height),
            _ => None,
        }
    }

    /// Human-readable name of the data type
    pub fn type_name(&self) -> &'static str {
        match self {
            Data::String(_) => "string",
            Data::Dec(_) => "decimal",
            Data::Height(_) => "height",
            Data::Id(_) => "id",
            Data::Boolean(_) => "boolean",
            Data::Confidential(_) => "confidential",
        }
    }

    fn encoding_tag(&self) -> EncodingTag {
        match self {
            Data::String(_) => EncodingTag::String,
            Data::Dec(_) => EncodingTag::Dec,
            Data::Height(_) => EncodingTag::Height,
            Data::Id(_) => EncodingTag::Id,
            Data::Boolean(_) => EncodingTag::Boolean,
            Data::Confidential(_) => EncodingTag::Confidential,
        }
    }
}

impl Display for Data {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Data::String(s) => f.write_str(s),
            Data::Dec(dec) => Display::fmt(dec, f),
            Data::Height(height) => Display::fmt(height, f),
            Data::Id(id) => Display::fmt(id, f),
            Data::Boolean(b) => Display::fmt(b, f),
            Data::Confidential(hash) => write!(f, "<{}>", hash),
        }
    }
}

impl From<Decimal> for Data {
    #[inline]
    fn from(dec: Decimal) -> Self {
        Data::Dec(dec)
    }
}

impl From<Height> for Data {
    #[inline]
    fn from(height: Height) -> Self {
        Data::Height(height)
    }
}

impl From<Id> for Data {
    #[inline]
    fn from(id: Id) -> Self {
        Data::Id(id)
    }
}

impl From<&str> for Data {
    #[inline]
    fn from(s: &str) -> Self {
        Data::String(s.to_owned())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, FromPrimitive)]
#[repr(u8)]
enum EncodingTag {
    String = 0x00,
    Dec = 0x01,
    Height = 0x02,
    Id = 0x03,
    Boolean = 0x04,
    Confidential = 0xFF,
}

// Decimals are normalized before encoding, so `0.25` and `0.250` are
// committed to and stored identically
impl StrictEncode for Data {
    fn strict_encode<E: io::Write>(&self, mut e: E) -> Result<usize, strict_encoding::Error> {
        let len = (self.encoding_tag() as u8).strict_encode(&mut e)?;
        Ok(len
            + match self {
                Data::String(s) => s.strict_encode(&mut e)?,
                Data::Dec(dec) => {
                    e.write_all(&dec.normalize().serialize())?;
                    16
                }
                Data::Height(height) => height.strict_encode(&mut e)?,
                Data::Id(id) => id.strict_encode(&mut e)?,
                Data::Boolean(b) => (*b as u8).strict_encode(&mut e)?,
                Data::Confidential(hash) => hash.strict_encode(&mut e)?,
            })
    }
}

impl StrictDecode for Data {
    fn strict_decode<D: io::Read>(mut d: D) -> Result<Self, strict_encoding::Error> {
        let tag = u8::strict_decode(&mut d)?;
        Ok(match EncodingTag::from_u8(tag) {
            Some(EncodingTag::String) => Data::String(String::strict_decode(&mut d)?),
            Some(EncodingTag::Dec) => {
                let mut buf = [0u8; 16];
                d.read_exact(&mut buf)?;
                Data::Dec(Decimal::deserialize(buf))
            }
            Some(EncodingTag::Height) => Data::Height(Height::strict_decode(&mut d)?),
            Some(EncodingTag::Id) => Data::Id(Id::strict_decode(&mut d)?),
            Some(EncodingTag::Boolean) => match u8::strict_decode(&mut d)? {
                0 => Data::Boolean(false),
                1 => Data::Boolean(true),
                other => {
                    return Err(strict_encoding::Error::DataIntegrityError(format!(
                        "invalid boolean value {}",
                        other
                    )))
                }
            },
            Some(EncodingTag::Confidential) => Data::Confidential(DataHash::strict_decode(&mut d)?),
            None => {
                return Err(strict_encoding::Error::DataIntegrityError(format!(
                    "unknown data type tag {:#04x}",
                    tag
                )))
            }
        })
    }
}
