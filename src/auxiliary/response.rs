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

use crate::Error;

/// Outcome of an auxiliary invocation
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AuxiliaryResponse<T> {
    /// Auxiliary succeeded producing the payload
    Success(T),

    /// Auxiliary rejected the request
    Failure(Error),
}

impl<T> AuxiliaryResponse<T> {
    #[inline]
    pub fn is_successful(&self) -> bool {
        matches!(self, AuxiliaryResponse::Success(_))
    }

    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            AuxiliaryResponse::Success(_) => None,
            AuxiliaryResponse::Failure(err) => Some(err),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            AuxiliaryResponse::Success(payload) => Ok(payload),
            AuxiliaryResponse::Failure(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, Error>> for AuxiliaryResponse<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(payload) => AuxiliaryResponse::Success(payload),
            Err(err) => AuxiliaryResponse::Failure(err),
        }
    }
}

impl<T> From<Error> for AuxiliaryResponse<T> {
    #[inline]
    fn from(err: Error) -> Self {
        AuxiliaryResponse::Failure(err)
    }
}
