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

/// Errors which may happen during transaction execution. All of them are
/// reported back to the caller as a part of the transaction response; the
/// transaction is final and no mutation of the asset store has happened.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum Error {
    /// actor is not authorized to perform the operation
    NotAuthorized,

    /// referenced entity does not exist
    EntityNotFound,

    /// entity with the same identity already exists
    EntityAlreadyExists,

    /// validation failed: {_0}
    ValidationFailed(String),

    /// incorrect message: {_0}
    IncorrectMessage(String),

    /// incorrect data format: {_0}
    IncorrectFormat(String),

    /// ledger state storage failure: {_0}
    Storage(String),
}

impl From<strict_encoding::Error> for Error {
    fn from(err: strict_encoding::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

/// Errors happening during keeper initialization. These indicate broken
/// deployment wiring and must halt node startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum InitError {
    /// uninitialized usage: keeper requires `{_0}` auxiliary which was not
    /// provided
    UninitializedUsage(&'static str),

    /// auxiliary `{_0}` was provided more than once
    DuplicateAuxiliary(&'static str),
}
