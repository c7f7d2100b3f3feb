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

//! Transaction keepers: the mint and burn pipelines running ordered chains
//! of auxiliaries against the ledger context.
//!
//! A keeper either fails on the first rejected step, leaving the asset store
//! untouched, or finishes with exactly one asset store mutation.

mod burn;
mod keepers;
mod mint;

pub use burn::{BurnKeeper, BurnMessage};
pub use keepers::Keepers;
pub use mint::{MintKeeper, MintMessage};

use std::collections::BTreeSet;

use crate::ledger::{Address, Context};
use crate::property::{Data, Id, MetaProperties, PropertyList};
use crate::Error;

/// Maximum number of entries in a single property list of a message
pub const MAX_PROPERTIES: usize = 256;
/// Maximum length of identifiers and string data, in bytes
pub const MAX_STRING_LEN: usize = 1024;

/// Final outcome of a transaction
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TransactionResponse {
    Success,
    Failure(Error),
}

impl TransactionResponse {
    #[inline]
    pub fn is_successful(&self) -> bool {
        *self == TransactionResponse::Success
    }

    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            TransactionResponse::Success => None,
            TransactionResponse::Failure(err) => Some(err),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            TransactionResponse::Success => Ok(()),
            TransactionResponse::Failure(err) => Err(err),
        }
    }
}

impl From<Result<(), Error>> for TransactionResponse {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => TransactionResponse::Success,
            Err(err) => TransactionResponse::Failure(err),
        }
    }
}

/// Entry point for a transaction type
pub trait TransactionKeeper {
    type Message;

    fn transact(&self, context: &mut Context<'_>, message: Self::Message) -> TransactionResponse;
}

fn check_address(field: &str, address: &Address) -> Result<(), Error> {
    check_string(field, address.as_str())
}

fn check_id(field: &str, id: &Id) -> Result<(), Error> {
    check_string(field, id.as_str())
}

fn check_string(field: &str, s: &str) -> Result<(), Error> {
    if s.is_empty() {
        return Err(Error::IncorrectMessage(format!("`{}` must not be empty", field)));
    }
    if s.len() > MAX_STRING_LEN {
        return Err(Error::IncorrectMessage(format!(
            "`{}` exceeds {} bytes",
            field, MAX_STRING_LEN
        )));
    }
    Ok(())
}

fn check_data(field: &str, data: &Data) -> Result<(), Error> {
    match data {
        Data::String(s) if s.len() > MAX_STRING_LEN => Err(Error::IncorrectMessage(format!(
            "`{}` data exceeds {} bytes",
            field, MAX_STRING_LEN
        ))),
        Data::Id(id) => check_id(field, id),
        _ => Ok(()),
    }
}

fn check_count(field: &str, count: usize) -> Result<(), Error> {
    if count > MAX_PROPERTIES {
        return Err(Error::IncorrectMessage(format!(
            "`{}` holds more than {} entries",
            field, MAX_PROPERTIES
        )));
    }
    Ok(())
}

fn check_properties(field: &str, properties: &PropertyList) -> Result<(), Error> {
    check_count(field, properties.len())?;
    for property in properties {
        check_id(field, property.id())?;
        check_data(field, property.data())?;
    }
    Ok(())
}

fn check_meta_properties(field: &str, meta_properties: &MetaProperties) -> Result<(), Error> {
    check_count(field, meta_properties.len())?;
    let mut seen = BTreeSet::new();
    for meta in meta_properties {
        check_id(field, meta.id())?;
        if !seen.insert(meta.id()) {
            return Err(Error::IncorrectMessage(format!(
                "meta-property `{}` is repeated in `{}`",
                meta.id(),
                field
            )));
        }
        if meta.data().is_confidential() {
            return Err(Error::IncorrectMessage(format!(
                "meta-property `{}` in `{}` must carry revealed data",
                meta.id(),
                field
            )));
        }
        check_data(field, meta.data())?;
    }
    Ok(())
}
