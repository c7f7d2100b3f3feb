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
use std::iter::FromIterator;
use std::slice;

use rust_decimal::Decimal;
use strict_encoding::{StrictDecode, StrictEncode};

use super::{Id, MetaProperty, Property, BURN_PROPERTY, LOCK_PROPERTY};
use crate::ledger::Height;
use crate::Error;

/// Ordered list of properties with unique keys.
///
/// Insertion order is preserved for display and storage, while equality is
/// order-independent: two lists are equal when they hold the same set of
/// properties.
#[derive(Clone, Debug, Default)]
pub struct PropertyList(Vec<Property>);

impl PropertyList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds property to the list. If a property with the same key is already
    /// present it gets replaced in place and the old one is returned.
    pub fn add(&mut self, property: Property) -> Option<Property> {
        match self.0.iter_mut().find(|p| p.id() == property.id()) {
            Some(existing) => Some(std::mem::replace(existing, property)),
            None => {
                self.0.push(property);
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, id: &Id) -> Option<&Property> {
        self.0.iter().find(|p| p.id() == id)
    }

    #[inline]
    pub fn contains(&self, id: &Id) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Property> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Properties sorted by their key; used for committing to the list
    pub fn canonical(&self) -> Vec<&Property> {
        let mut sorted: Vec<&Property> = self.0.iter().collect();
        sorted.sort();
        sorted
    }
}

impl PartialEq for PropertyList {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for PropertyList {}

impl FromIterator<Property> for PropertyList {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let mut list = PropertyList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Property> for PropertyList {
    fn extend<T: IntoIterator<Item = Property>>(&mut self, iter: T) {
        for property in iter {
            self.add(property);
        }
    }
}

impl From<Vec<Property>> for PropertyList {
    #[inline]
    fn from(properties: Vec<Property>) -> Self {
        properties.into_iter().collect()
    }
}

impl IntoIterator for PropertyList {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl StrictEncode for PropertyList {
    #[inline]
    fn strict_encode<E: io::Write>(&self, e: E) -> Result<usize, strict_encoding::Error> {
        self.0.strict_encode(e)
    }
}

impl StrictDecode for PropertyList {
    fn strict_decode<D: io::Read>(d: D) -> Result<Self, strict_encoding::Error> {
        let properties = Vec::<Property>::strict_decode(d)?;
        let count = properties.len();
        let list: PropertyList = properties.into_iter().collect();
        if list.len() != count {
            return Err(strict_encoding::Error::DataIntegrityError(
                "property list contains repeated keys".to_owned(),
            ));
        }
        Ok(list)
    }
}

/// Ordered list of meta-properties
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MetaProperties(Vec<MetaProperty>);

impl MetaProperties {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, meta_property: MetaProperty) {
        self.0.push(meta_property)
    }

    /// Returns the first meta-property with the given key
    #[inline]
    pub fn get(&self, id: &Id) -> Option<&MetaProperty> {
        self.0.iter().find(|p| p.id() == id)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, MetaProperty> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ownership split locked by the `lock` meta-property, if present
    pub fn lock(&self) -> Result<Option<Decimal>, Error> {
        self.get(&LOCK_PROPERTY)
            .map(|meta| {
                meta.data().as_dec().ok_or_else(|| {
                    Error::IncorrectFormat(format!(
                        "`{}` meta-property must hold decimal data, not {}",
                        meta.id(),
                        meta.data().type_name()
                    ))
                })
            })
            .transpose()
    }

    /// Earliest burn height defined by the `burn` meta-property, if present
    pub fn burn_height(&self) -> Result<Option<Height>, Error> {
        self.get(&BURN_PROPERTY)
            .map(|meta| {
                meta.data().as_height().ok_or_else(|| {
                    Error::IncorrectFormat(format!(
                        "`{}` meta-property must hold height data, not {}",
                        meta.id(),
                        meta.data().type_name()
                    ))
                })
            })
            .transpose()
    }
}

impl FromIterator<MetaProperty> for MetaProperties {
    fn from_iter<T: IntoIterator<Item = MetaProperty>>(iter: T) -> Self {
        MetaProperties(iter.into_iter().collect())
    }
}

impl From<Vec<MetaProperty>> for MetaProperties {
    #[inline]
    fn from(meta_properties: Vec<MetaProperty>) -> Self {
        MetaProperties(meta_properties)
    }
}

impl<'a> IntoIterator for &'a MetaProperties {
    type Item = &'a MetaProperty;
    type IntoIter = slice::Iter<'a, MetaProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
