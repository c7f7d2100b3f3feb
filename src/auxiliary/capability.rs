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

use std::fmt::{self, Debug, Formatter};

use super::{authenticate, conform, maintain, scrub, split, supplement, verify};
use crate::InitError;

/// Closed set of auxiliaries which may be wired into transaction keepers
#[derive(Clone)]
pub enum Capability {
    Authenticate(authenticate::Authenticator),
    Verify(verify::Verifier),
    Conform(conform::Conformer),
    Scrub(scrub::Scrubber),
    Supplement(supplement::Supplementer),
    Mint(split::SplitMinter),
    Burn(split::SplitBurner),
    Maintain(maintain::Maintainer),
}

impl Capability {
    /// Stable name under which the capability is wired
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Authenticate(_) => authenticate::NAME,
            Capability::Verify(_) => verify::NAME,
            Capability::Conform(_) => conform::NAME,
            Capability::Scrub(_) => scrub::NAME,
            Capability::Supplement(_) => supplement::NAME,
            Capability::Mint(_) => split::MINT_NAME,
            Capability::Burn(_) => split::BURN_NAME,
            Capability::Maintain(_) => maintain::NAME,
        }
    }
}

impl Debug for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capability({})", self.name())
    }
}

/// Slot receiving a single auxiliary while a keeper gets initialized
pub(crate) struct Slot<T> {
    name: &'static str,
    auxiliary: Option<T>,
}

impl<T> Slot<T> {
    pub fn new(name: &'static str) -> Self {
        Slot {
            name,
            auxiliary: None,
        }
    }

    pub fn assign(&mut self, auxiliary: T) -> Result<(), InitError> {
        if self.auxiliary.is_some() {
            return Err(InitError::DuplicateAuxiliary(self.name));
        }
        self.auxiliary = Some(auxiliary);
        Ok(())
    }

    pub fn require(self) -> Result<T, InitError> {
        self.auxiliary.ok_or(InitError::UninitializedUsage(self.name))
    }
}
