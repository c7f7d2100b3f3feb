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

use std::io;

use strict_encoding::StrictEncode;

use crate::property::{Id, Property, PropertyList};

tagged_hash!(
    AssetId,
    AssetIdTag,
    "urn:ledger-assets:asset#2020-11",
    doc = "Unique asset identifier equivalent to the commitment to the asset \
           classification and its immutable properties"
);

/// Data committed to by [`AssetId`]: properties go in canonical (sorted)
/// order, so the id does not depend on the order they were supplied in
struct IdCommitment<'a> {
    classification_id: &'a Id,
    immutable_properties: Vec<&'a Property>,
}

impl StrictEncode for IdCommitment<'_> {
    fn strict_encode<E: io::Write>(&self, mut e: E) -> Result<usize, strict_encoding::Error> {
        let mut len = self.classification_id.strict_encode(&mut e)?;
        len += (self.immutable_properties.len() as u16).strict_encode(&mut e)?;
        for property in &self.immutable_properties {
            len += property.strict_encode(&mut e)?;
        }
        Ok(len)
    }
}

impl AssetId {
    /// Derives asset id from the classification and immutable properties.
    ///
    /// Two assets of the same classification with equal sets of immutable
    /// properties always get the same id.
    ///
    /// Panics on inputs exceeding strict encoding limits, see
    /// [`AssetId::commit`].
    pub fn derive(classification_id: &Id, immutable_properties: &PropertyList) -> AssetId {
        AssetId::commit(&IdCommitment {
            classification_id,
            immutable_properties: immutable_properties.canonical(),
        })
    }
}
